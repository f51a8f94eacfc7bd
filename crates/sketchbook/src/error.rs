//! Error types and result alias for the crate.
//!
//! This module defines [`enum@crate::error::Error`] and the crate-wide [Result] alias.
//! Variants cover invalid configuration, lifecycle misuse of a sketch and generic errors.
use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[non_exhaustive]
#[derive(Debug, Error)]
pub enum Error {
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),

    #[error("sketch '{name}' was rendered before initialize()")]
    NotInitialized { name: String },

    #[error("unknown strategy '{name}'")]
    UnknownStrategy { name: String },

    #[error("{0}")]
    Other(String),
}

impl From<String> for Error {
    fn from(value: String) -> Self {
        Error::Other(value)
    }
}

impl From<&str> for Error {
    fn from(value: &str) -> Self {
        Error::Other(value.to_owned())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn from_string_uses_other_variant() {
        let err: Error = String::from("boom").into();
        assert!(matches!(err, Error::Other(_)));
    }

    #[test]
    fn not_initialized_names_the_sketch() {
        let err = Error::NotInitialized {
            name: "noise1d".into(),
        };
        assert_eq!(
            err.to_string(),
            "sketch 'noise1d' was rendered before initialize()"
        );
    }
}
