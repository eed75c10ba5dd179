#[derive(thiserror::Error, Debug)]
pub enum LedgerError {
    /// A transaction referenced an account id with no registered account.
    /// This is a caller precondition violation, not a recoverable lookup miss.
    #[error("no account registered for id {0}")]
    UnknownAccount(u32),
    #[error("no currency with id {0}")]
    UnknownCurrency(u8),
    #[error("invalid amount {value:?}: {reason}")]
    BadAmount { value: String, reason: String },
    #[error("invalid date {value:?}: {reason}")]
    BadDate { value: String, reason: String },
    #[error("parse error: {0}")]
    Parse(String),
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
    #[error("csv error: {0}")]
    Csv(#[from] csv::Error),
    #[error("sqlite error: {0}")]
    Sqlite(#[from] rusqlite::Error),
}
