use stubdns_application::ports::TransactionIdSource;

/// Transaction ids drawn from `fastrand`, uniform over the full u16 range.
pub struct FastrandIdSource;

impl TransactionIdSource for FastrandIdSource {
    fn next_id(&self) -> u16 {
        fastrand::u16(..)
    }
}
