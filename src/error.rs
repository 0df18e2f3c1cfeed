use thiserror::Error;

#[derive(Error, Debug)]
pub enum LedgerError {
    #[error("Resource not found: {0}")]
    NotFound(String),
    #[error("Invalid input: {0}")]
    Validation(String),
    #[error("Session {session_id} is full ({capacity} participants)")]
    CapacityExceeded { session_id: String, capacity: u32 },
    #[error("Session source error: {0}")]
    Source(String),
}
