//! Per-pass layout configuration

use crate::model::{EdgeInsets, LayoutError, Size};
use serde::{Deserialize, Serialize};

/// Starting height of the stretchy header before any overscroll.
pub const DEFAULT_HEADER_HEIGHT: f64 = 128.0;

/// Settings the host pushes into the engine before a layout pass.
///
/// The engine treats these as read-only for the duration of a pass.
/// Changing them requires a recompute (see `StretchyLayout::set_configuration`).
///
/// # Invariants
/// Every field is finite and non-negative once `validate()` succeeds.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LayoutConfiguration {
    /// Insets around every section.
    pub section_insets: EdgeInsets,
    /// Size of every cell.
    pub item_size: Size,
    /// Vertical gap between consecutive items of a section.
    pub item_spacing: f64,
    /// Resting height of the stretchy header.
    pub header_height: f64,
}

impl Default for LayoutConfiguration {
    fn default() -> Self {
        Self {
            section_insets: EdgeInsets::default(),
            item_size: Size::ZERO,
            item_spacing: 0.0,
            header_height: DEFAULT_HEADER_HEIGHT,
        }
    }
}

impl LayoutConfiguration {
    /// Create a configuration from all of its fields.
    pub fn new(
        section_insets: EdgeInsets,
        item_size: Size,
        item_spacing: f64,
        header_height: f64,
    ) -> Self {
        Self {
            section_insets,
            item_size,
            item_spacing,
            header_height,
        }
    }

    /// Replace the section insets.
    pub fn with_section_insets(mut self, insets: EdgeInsets) -> Self {
        self.section_insets = insets;
        self
    }

    /// Replace the item size.
    pub fn with_item_size(mut self, size: Size) -> Self {
        self.item_size = size;
        self
    }

    /// Replace the item spacing.
    pub fn with_item_spacing(mut self, spacing: f64) -> Self {
        self.item_spacing = spacing;
        self
    }

    /// Replace the header height.
    pub fn with_header_height(mut self, height: f64) -> Self {
        self.header_height = height;
        self
    }

    /// Distance from one item's top edge to the next item's top edge.
    pub fn row_stride(&self) -> f64 {
        self.item_size.height + self.item_spacing
    }

    /// Check that every field is finite and non-negative.
    pub fn validate(&self) -> Result<(), LayoutError> {
        let fields = [
            ("section_insets.top", self.section_insets.top),
            ("section_insets.left", self.section_insets.left),
            ("section_insets.bottom", self.section_insets.bottom),
            ("section_insets.right", self.section_insets.right),
            ("item_size.width", self.item_size.width),
            ("item_size.height", self.item_size.height),
            ("item_spacing", self.item_spacing),
            ("header_height", self.header_height),
        ];

        match fields
            .into_iter()
            .find(|(_, value)| !value.is_finite() || *value < 0.0)
        {
            Some((field, value)) => Err(LayoutError::InvalidConfiguration { field, value }),
            None => Ok(()),
        }
    }
}
