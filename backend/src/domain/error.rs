//! Errors raised by chore operations that callers are expected to match on.
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ChoreError {
    /// The submitted configuration breaks a chore invariant
    #[error("Invalid chore configuration: {0}")]
    Invalid(String),

    #[error("Task not found: {0}")]
    TaskNotFound(String),

    #[error("Kid not found: {0}")]
    KidNotFound(String),
}
