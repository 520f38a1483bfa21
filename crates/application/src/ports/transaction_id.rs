/// Source of DNS transaction identifiers.
///
/// Production draws uniformly from the full u16 range; tests pin the id so
/// synthetic responses can be matched deterministically. The id only
/// correlates a response with its query, its anti-spoofing value is weak.
pub trait TransactionIdSource: Send + Sync {
    fn next_id(&self) -> u16;
}
