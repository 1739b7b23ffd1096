//! Core error type.
//!
//! Sub-crates define their own error enums; this one covers the handful of
//! things that can go wrong with the core types themselves.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum CoreError {
    #[error("configuration error: {0}")]
    Config(String),
}

/// Shorthand result type for `isim-core`.
pub type CoreResult<T> = Result<T, CoreError>;
