use thiserror::Error;

use super::denomination::Denomination;

#[derive(Error, Debug)]
pub enum TillError {
    #[error("Unknown denomination: {0}")]
    UnknownDenomination(String),

    #[error("Batch must list counts for {expected} denominations, got {found}")]
    MalformedBatch { expected: usize, found: usize },

    #[error("Negative count {count} for {denomination}")]
    NegativeAmount { denomination: Denomination, count: i64 },

    #[error("Insufficient {denomination}: {held} held, {requested} requested")]
    InsufficientFunds {
        denomination: Denomination,
        held: u64,
        requested: u64,
    },

    #[error("Invalid change amount {requested}: till holds {total}")]
    InvalidAmount { requested: i64, total: u64 },

    #[error("Change not possible for amount {amount}")]
    ChangeNotPossible { amount: u64 },
}
