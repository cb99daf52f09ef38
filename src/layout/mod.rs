//! Layout engine - section placement, visibility culling and header stretch
//!
//! # Module Structure
//!
//! - `configuration`: LayoutConfiguration - insets, item size, spacing, header height
//! - `request`: DataSource trait and LayoutRequest - immutable per-pass dataset shape
//! - `snapshot`: LayoutSnapshot - rest-state attributes from one forward pass
//! - `stretch`: ScrollState and the elastic header adjustment
//! - `engine`: StretchyLayout - recompute, query and invalidation

pub mod configuration;
pub mod engine;
pub mod request;
pub mod snapshot;
pub mod stretch;

pub use configuration::{LayoutConfiguration, DEFAULT_HEADER_HEIGHT};
pub use engine::StretchyLayout;
pub use request::{DataSource, LayoutRequest, MAX_LAYOUT_ELEMENTS};
pub use snapshot::LayoutSnapshot;
pub use stretch::{stretch_header, ScrollState};
