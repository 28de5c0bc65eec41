use thiserror::Error;

/// Errors produced while turning a line of text into a [`Command`](crate::Command)
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ParseError {
    #[error("Empty command line")]
    Empty,

    #[error("Invalid command found in input: {0}")]
    UnknownVerb(String),

    #[error("Missing operand for {0}")]
    MissingOperand(&'static str),

    #[error("Invalid request size: {0} (expected a positive integer followed by a unit, e.g. 256K)")]
    InvalidSize(String),

    #[error("Unexpected trailing input: {0}")]
    TrailingInput(String),
}

#[derive(Error, Debug)]
pub enum BuddyError {
    #[error("Parse error: {0}")]
    Parse(#[from] ParseError),

    #[error("Request of {requested}K is below the minimum block size of {minimum}K")]
    BelowMinimum { requested: u64, minimum: u64 },

    #[error("Out of space: no free block can hold {requested}K")]
    OutOfSpace { requested: u64 },

    #[error("No block is allocated to {0}")]
    UnknownId(String),

    #[error("Invalid pool configuration: {0}")]
    InvalidConfig(String),

    /// Raised by the driver, never by the pool itself
    #[error("Could not satisfy request!")]
    Unsatisfiable { command: String },

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, BuddyError>;
