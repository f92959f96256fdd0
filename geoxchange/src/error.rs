//! Error types used by the crate.

use geoxchange_types::error::GeoTypesError;
use thiserror::Error;

use crate::Format;

/// Error reading or writing a geometry.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum GeoFormatError {
    /// Input cannot be parsed, or a required element is missing.
    #[error("invalid {format} input: {reason}")]
    Format {
        /// Format of the adapter that failed.
        format: Format,
        /// What went wrong.
        reason: String,
        /// The input text as it was given to the adapter.
        input: String,
    },
    /// Input is well-formed but contains no geometries, and the format requires at least one.
    #[error("invalid or empty {format} input: no geometries found")]
    EmptyInput {
        /// Format of the adapter that failed.
        format: Format,
        /// The input text as it was given to the adapter.
        input: String,
    },
    /// Collections are nested deeper than the adapter allows.
    #[error("geometry nesting exceeds the limit of {limit} levels")]
    RecursionLimit {
        /// Configured limit.
        limit: usize,
    },
    /// Format name is not known, or the format of a document cannot be detected.
    #[error("unknown geometry format: {0}")]
    UnknownFormat(String),
    /// Geometry model error.
    #[error("geometry error: {0}")]
    Geometry(#[from] GeoTypesError),
    /// Failed to produce the output document.
    #[error("failed to write output: {0}")]
    Write(String),
}

impl GeoFormatError {
    pub(crate) fn format(format: Format, reason: impl Into<String>, input: &str) -> Self {
        Self::Format {
            format,
            reason: reason.into(),
            input: input.to_string(),
        }
    }

    /// The offending input text, if the error was caused by the input.
    pub fn input(&self) -> Option<&str> {
        match self {
            GeoFormatError::Format { input, .. } | GeoFormatError::EmptyInput { input, .. } => {
                Some(input)
            }
            _ => None,
        }
    }
}

impl From<quick_xml::Error> for GeoFormatError {
    fn from(value: quick_xml::Error) -> Self {
        Self::Write(value.to_string())
    }
}
