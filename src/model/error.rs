//! Error types for the stretchy layout crate.
//!
//! Errors are `thiserror` enums that compose via `?` and `From`.
//!
//! # Error Hierarchy
//!
//! - [`AppError`] - Top-level error returned by the `stretchy` binary
//!   - [`LayoutError`] - The host handed the engine a shape or configuration
//!     from which no valid geometry can be derived
//!   - [`ConfigError`] - Config file could not be read or parsed
//!   - [`LoggingError`] - Tracing subscriber could not be installed
//!   - `serde_json::Error` / `std::io::Error` - Output failures
//!
//! # Recovery Strategy
//!
//! Layout errors are host contract violations and are never recovered by the
//! engine: the previous snapshot is discarded and queries report the benign
//! "nothing laid out yet" state until the host fixes its input and calls
//! `recompute` again.

use super::attribute::ItemAddress;
use crate::config::ConfigError;
use crate::logging::LoggingError;
use thiserror::Error;

/// Errors raised while computing a layout pass.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum LayoutError {
    /// The host reported zero sections.
    ///
    /// The header and content size are anchored to the last section, so a
    /// layout without sections has no defined extent.
    #[error("Layout requires at least one section")]
    NoSections,

    /// A configuration field is negative, NaN or infinite.
    #[error("Invalid layout configuration: {field} = {value}")]
    InvalidConfiguration {
        /// Name of the offending field.
        field: &'static str,
        /// The rejected value.
        value: f64,
    },

    /// The viewport width is negative, NaN or infinite.
    #[error("Invalid viewport width: {0}")]
    InvalidViewportWidth(f64),

    /// The dataset has more sections or cells than one pass lays out, or
    /// its item counts overflow when summed.
    #[error("Dataset exceeds the layout limit of {limit} sections or items")]
    TooManyItems {
        /// The per-pass limit that was exceeded.
        limit: usize,
    },

    /// A single-item lookup named an address outside the laid-out shape.
    #[error("Item address {address} is out of bounds")]
    AddressOutOfBounds {
        /// The requested address.
        address: ItemAddress,
    },
}

/// Top-level error encompassing all failure modes of the `stretchy` binary.
#[derive(Debug, Error)]
pub enum AppError {
    /// Layout could not be computed.
    #[error("Layout failed: {0}")]
    Layout(#[from] LayoutError),

    /// Configuration could not be loaded.
    #[error("Configuration failed: {0}")]
    Config(#[from] ConfigError),

    /// Logging could not be initialized.
    #[error("Logging failed: {0}")]
    Logging(#[from] LoggingError),

    /// JSON output could not be produced.
    #[error("Failed to encode output: {0}")]
    Encode(#[from] serde_json::Error),

    /// Writing output failed.
    #[error("Output error: {0}")]
    Io(#[from] std::io::Error),
}
