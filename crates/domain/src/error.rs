//! Common error types used across the workspace.
//!
//! Each layer defines its own typed errors and converts via `#[from]`.

/// Top-level error for devstate operations.
#[derive(Debug, thiserror::Error)]
pub enum DevStateError {
    #[error("validation error")]
    Validation(#[from] ValidationError),
}

/// Domain invariant violations detected before state is touched.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ValidationError {
    /// The control request lacked a usable command name or value.
    #[error("Missing command or value")]
    MissingCommandOrValue,
}
