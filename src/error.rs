/*
 * Error type shared by the control binding state machine, the concrete control
 * kinds, and the host contents. Both variants represent caller misuse rather than
 * transient failures, so nothing in the crate retries on them.
 */

use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ControlError {
    /// An argument was absent or outside its permitted range.
    #[error("invalid argument: {0}")]
    InvalidArgument(String),
    /// The operation is not permitted in the current lifecycle state.
    #[error("invalid operation: {0}")]
    InvalidOperation(String),
}

pub type Result<T> = std::result::Result<T, ControlError>;
