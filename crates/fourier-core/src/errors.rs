//! Structured error type shared by the Fourier crates.

use std::collections::BTreeMap;
use std::fmt::{self, Display};

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Structured payload attached to every [`FourierError`] variant.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorInfo {
    /// Stable machine readable error code.
    pub code: String,
    /// Human readable diagnostic message.
    pub message: String,
    /// Contextual key value pairs (offending values, lengths, etc.).
    #[serde(default)]
    pub context: BTreeMap<String, String>,
}

impl ErrorInfo {
    /// Creates a new error payload with the provided code and message.
    pub fn new(code: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
            context: BTreeMap::new(),
        }
    }

    /// Adds a context entry to the payload.
    pub fn with_context(mut self, key: impl Into<String>, value: impl ToString) -> Self {
        self.context.insert(key.into(), value.to_string());
        self
    }
}

/// Canonical error type for series construction, evaluation and simplification.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Error)]
#[serde(tag = "family", content = "detail")]
pub enum FourierError {
    /// The requested number of harmonics was zero.
    #[error("invalid series count: {0}")]
    InvalidSeriesCount(ErrorInfo),
    /// Simplification was requested on coefficients that are all zero.
    #[error("degenerate coefficients: {0}")]
    DegenerateCoefficients(ErrorInfo),
    /// Coefficient sequences violate the length or alignment invariant.
    #[error("invalid coefficients: {0}")]
    InvalidCoefficients(ErrorInfo),
    /// Domain bounds are not finite or not strictly increasing.
    #[error("invalid domain: {0}")]
    InvalidDomain(ErrorInfo),
    /// Quadrature step is not a positive finite number.
    #[error("invalid step: {0}")]
    InvalidStep(ErrorInfo),
    /// Simplification tolerance is not a positive finite number.
    #[error("invalid tolerance: {0}")]
    InvalidTolerance(ErrorInfo),
    /// Too few points were requested for a sampling grid.
    #[error("invalid sample count: {0}")]
    InvalidSampleCount(ErrorInfo),
    /// Serialization errors.
    #[error("serde error: {0}")]
    Serde(ErrorInfo),
}

impl Display for ErrorInfo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} (code: {})", self.message, self.code)?;
        if !self.context.is_empty() {
            write!(f, " | context: [")?;
            for (idx, (key, value)) in self.context.iter().enumerate() {
                if idx > 0 {
                    write!(f, ", ")?;
                }
                write!(f, "{key}={value}")?;
            }
            write!(f, "]")?;
        }
        Ok(())
    }
}

impl FourierError {
    /// Returns a reference to the payload describing the error.
    pub fn info(&self) -> &ErrorInfo {
        match self {
            FourierError::InvalidSeriesCount(info)
            | FourierError::DegenerateCoefficients(info)
            | FourierError::InvalidCoefficients(info)
            | FourierError::InvalidDomain(info)
            | FourierError::InvalidStep(info)
            | FourierError::InvalidTolerance(info)
            | FourierError::InvalidSampleCount(info)
            | FourierError::Serde(info) => info,
        }
    }
}
