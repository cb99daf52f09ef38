//! Stretchy header layout
//!
//! Layout engine for a sectioned, single-column list under a header that
//! stretches and parallax-shifts while the user overscrolls past the top.
//!
//! The engine turns a dataset shape (section and item counts) plus a live
//! scroll offset into positioned rectangles. It owns only computed geometry;
//! the host owns scroll state, viewport and dataset and pushes them in.
//!
//! ```
//! use stretchy::layout::{LayoutConfiguration, ScrollState, StretchyLayout};
//! use stretchy::model::{EdgeInsets, ItemAddress, Rect, Size};
//!
//! let config = LayoutConfiguration::new(
//!     EdgeInsets::new(8.0, 8.0, 32.0, 8.0),
//!     Size::new(100.0, 64.0),
//!     8.0,
//!     128.0,
//! );
//! let mut layout = StretchyLayout::new(config);
//! layout.recompute(&vec![3, 3], 320.0).unwrap();
//!
//! let first = layout.attribute_for(ItemAddress::new(0, 0)).unwrap();
//! assert_eq!(first.frame, Rect::new(8.0, 136.0, 100.0, 64.0));
//!
//! // Pull 10 points past the resting offset of -8.
//! let scroll = ScrollState::new(-18.0, 320.0);
//! let header = layout.stretched_header(&scroll).unwrap();
//! assert_eq!(header.frame, Rect::new(0.0, -10.0, 320.0, 138.0));
//! ```

pub mod config;
pub mod host;
pub mod layout;
pub mod logging;
pub mod model;

#[cfg(test)]
mod tests;
