//! Error types and result alias for the crate.
//!
//! This module defines [`enum@crate::error::Error`] and the crate-wide [Result] alias. Variants cover
//! rejected input (titles, output paths, color channels, axis options, graph lists),
//! data file IO, engine launch failures, and generic errors.
//!
//! An engine that runs but exits unsuccessfully is not an error; it is reported as
//! `Ok(false)` by the runner.
use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[non_exhaustive]
#[derive(Debug, Error)]
pub enum Error {
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),

    #[error("plot request contains no graphs")]
    EmptyRequest,

    #[error(
        "plot request mixes 2D and 3D graphs (first graph of a different dimensionality at position {position})"
    )]
    MixedDimensions { position: usize },

    #[error("title {title:?} cannot be quoted: {reason}")]
    QuoteInTitle { title: String, reason: &'static str },

    #[error("invalid output path {path:?}: {reason}")]
    InvalidOutputPath { path: String, reason: &'static str },

    #[error("color channel {channel} value {value} is outside 0..=255")]
    ChannelOutOfRange { channel: &'static str, value: i64 },

    #[error("invalid {axis} axis option: {reason}")]
    InvalidAxis { axis: char, reason: String },

    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error("failed to launch plotting engine '{program}': {source}")]
    EngineLaunch {
        program: String,
        #[source]
        source: std::io::Error,
    },

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
        matches!(err, Error::Other(_))
            .then_some(())
            .expect("expected Other variant");
    }

    #[test]
    fn from_str_allocates_owned_message() {
        let err: Error = "issue".into();
        assert!(matches!(err, Error::Other(ref msg) if msg == "issue"));
    }

    #[test]
    fn io_errors_convert_transparently() {
        let io = std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied");
        let err: Error = io.into();
        assert!(matches!(err, Error::Io(_)));
        assert_eq!(err.to_string(), "denied");
    }

    #[test]
    fn messages_name_the_offending_input() {
        let err = Error::QuoteInTitle {
            title: "say \"hi\"".into(),
            reason: "contains a double quote",
        };
        assert!(err.to_string().contains("double quote"));

        let err = Error::MixedDimensions { position: 2 };
        assert!(err.to_string().contains("different dimensionality at position 2"));

        let err = Error::ChannelOutOfRange {
            channel: "green",
            value: 300,
        };
        assert_eq!(
            err.to_string(),
            "color channel green value 300 is outside 0..=255"
        );
    }
}
