//! Input validation error types.
//!
//! Messages are rendered exactly as the display surface shows them, so the
//! caller can pass `Display` output through verbatim.

use thiserror::Error;

/// Errors produced while validating the three raw model parameters.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum InputError {
    /// No value was entered for the field.
    #[error("{name} must have a numeric value")]
    MissingValue { name: String },

    /// The entered value does not parse as a real number.
    #[error("{name} must have a numeric value")]
    NotNumeric { name: String },

    /// The parsed value lies outside the closed parameter bounds.
    #[error("{name} must be in the range [{lower:.2}, {upper:.2}]")]
    OutOfRange {
        name: String,
        lower: f64,
        upper: f64,
    },
}

impl InputError {
    /// Name of the offending parameter.
    pub fn field(&self) -> &str {
        match self {
            InputError::MissingValue { name } => name,
            InputError::NotNumeric { name } => name,
            InputError::OutOfRange { name, .. } => name,
        }
    }
}
