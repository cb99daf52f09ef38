//! Domain model types (pure).
//!
//! Geometry value types, layout attributes and the error taxonomy.

pub mod attribute;
pub mod error;
pub mod geometry;

// Re-export for convenience
pub use attribute::{ElementKind, ItemAddress, LayoutAttribute};
pub use error::{AppError, LayoutError};
pub use geometry::{EdgeInsets, Point, Rect, Size};
