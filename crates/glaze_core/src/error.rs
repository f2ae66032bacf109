//! Glaze error types
//!
//! Only recoverable failures live here. Caller-contract violations (too few
//! indicator items, out-of-range selection) panic at construction instead.

use thiserror::Error;

/// Errors produced by Glaze
#[derive(Error, Debug)]
pub enum GlazeError {
    /// A material scalar was NaN or infinite
    #[error("Invalid glass material: `{field}` must be finite (got {value})")]
    InvalidMaterial {
        /// Name of the offending field
        field: &'static str,
        /// The rejected value
        value: f32,
    },

    /// Configuration text could not be parsed
    #[error("Failed to parse configuration: {0}")]
    ConfigParse(String),

    /// A handle referred to a controller that was removed or never existed
    #[error("No {kind} registered for this handle")]
    UnknownHandle {
        /// Kind of controller the handle refers to
        kind: &'static str,
    },

    /// Configuration file could not be read
    #[error("Failed to read configuration: {0}")]
    ConfigIo(#[from] std::io::Error),
}

/// Result type for Glaze operations
pub type Result<T> = std::result::Result<T, GlazeError>;
