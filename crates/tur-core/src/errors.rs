//! Cross-cutting error types for Turismo.
//!
//! Crate-specific errors (`AuthError`, `ApiError`, `ConfigError`) live in their
//! own crates. The CLI converges them through `anyhow`.

use thiserror::Error;

use crate::token::TokenPurpose;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum CoreError {
    /// A role string outside the closed enumeration.
    #[error("unknown role: {0}")]
    UnknownRole(String),

    /// A single-use token was offered where a session token is required.
    #[error("token is a single-use {purpose} credential, not a session token")]
    SingleUseCredential { purpose: TokenPurpose },

    /// Data failed validation (shape, format, constraints).
    #[error("Validation error: {0}")]
    Validation(String),
}
