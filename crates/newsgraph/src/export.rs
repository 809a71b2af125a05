//! Export functionality for Newsgraph layouts.
//!
//! This module provides the [`Exporter`] trait that defines the interface for
//! converting a computed [`GraphLayout`] into an output format. It is the final
//! stage in the Newsgraph processing pipeline.
//!
//! # Pipeline Position
//!
//! ```text
//! JSON payload
//!     ↓ parse
//! GraphPayload
//!     ↓ layout
//! GraphLayout
//!     ↓ export (this module)
//! SVG / JSON text
//! ```
//!
//! # Available Backends
//!
//! - [`svg`]: SVG output via [`svg::SvgBuilder`] and [`svg::Svg`]
//! - [`json`]: the positioned graph as JSON via [`json::Json`]
//!
//! # Error Handling
//!
//! Export operations return [`Error`]. [`Error`] converts into
//! [`NewsGraphError::Export`] at the crate boundary.
//!
//! [`NewsGraphError::Export`]: crate::NewsGraphError::Export

/// JSON export backend.
pub mod json;
/// SVG export backend.
pub mod svg;

use crate::layout::GraphLayout;

/// Abstraction for layout export backends.
///
/// Implementors convert a [`GraphLayout`] into the text of a specific output
/// format. Writing that text anywhere is left to the caller.
pub trait Exporter {
    /// Exports a computed layout to the backend's output format.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Render`] if the layout cannot be converted to the
    /// target format, or [`Error::Serialize`] if encoding fails.
    fn export_layout(&mut self, layout: &GraphLayout) -> Result<String, Error>;
}

/// Errors that can occur during layout export.
///
/// This type is converted into [`NewsGraphError::Export`] at the crate
/// boundary via the [`From`] implementation in [`crate::error`].
///
/// [`NewsGraphError::Export`]: crate::NewsGraphError::Export
#[derive(Debug)]
pub enum Error {
    /// A rendering or conversion failure described by `message`.
    Render(String),
    /// A serialization failure while encoding the layout.
    Serialize(serde_json::Error),
}

impl std::fmt::Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Render(msg) => write!(f, "Render error: {msg}"),
            Self::Serialize(err) => write!(f, "Serialization error: {err}"),
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Render(_) => None,
            Self::Serialize(err) => Some(err),
        }
    }
}
