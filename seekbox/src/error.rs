//! Error type for the seekbox crate.

use thiserror::Error;

use crate::autocomplete::OptionKey;

/// Errors reported by configuration and diagnostics.
///
/// Event handlers never return these: misuse during event handling is a
/// guarded no-op reported through [`EventResult::Ignored`](crate::EventResult).
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    #[error("row height must be greater than zero")]
    ZeroRowHeight,
    #[error("viewport height must be greater than zero")]
    ZeroViewportHeight,
    #[error("options {first} and {second} share the key {key}")]
    DuplicateKey {
        key: OptionKey,
        first: usize,
        second: usize,
    },
}

pub type Result<T> = std::result::Result<T, Error>;
