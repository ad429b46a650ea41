use thiserror::Error;

#[derive(Error, Debug)]
pub enum FlowError {
    #[error("Invalid contract at row {index}: {reason}")]
    InvalidContract { index: usize, reason: String },

    #[error("Invalid underlying price: {0} (must be finite and > 0)")]
    InvalidPrice(f64),
}

pub type FlowResult<T> = Result<T, FlowError>;
