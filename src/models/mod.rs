pub mod application;
pub mod interview;
pub mod user;

/// Raised when a status string is not one of the known enumeration values.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown status value: {0}")]
pub struct InvalidStatus(pub String);
