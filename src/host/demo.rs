//! Headless demo host
//!
//! Plays the part of the view that owns the dataset, the viewport and the
//! scroll offset: a fixed number of equally sized sections, cells as wide as
//! the viewport minus the horizontal insets, and a relayout on every size
//! transition.

use crate::config::ResolvedConfig;
use crate::layout::{DataSource, LayoutRequest, ScrollState, StretchyLayout};
use crate::model::{ItemAddress, LayoutAttribute, LayoutError, Rect, Size};
use tracing::debug;

/// Headless host driving a [`StretchyLayout`].
#[derive(Debug, Clone)]
pub struct DemoHost {
    config: ResolvedConfig,
    viewport: Size,
    offset_y: f64,
    layout: StretchyLayout,
}

impl DataSource for DemoHost {
    fn number_of_sections(&self) -> usize {
        self.config.sections
    }

    fn number_of_items(&self, _section: usize) -> usize {
        self.config.items_per_section
    }
}

impl DemoHost {
    /// Create a host at its resting scroll offset and lay it out.
    ///
    /// # Errors
    /// Propagates layout errors (zero sections, invalid sizes).
    pub fn new(config: ResolvedConfig) -> Result<Self, LayoutError> {
        let viewport = config.viewport;
        let layout = StretchyLayout::new(config.layout_configuration(viewport.width));
        let offset_y = ScrollState::rest_offset(&config.section_insets);
        let mut host = Self {
            config,
            viewport,
            offset_y,
            layout,
        };
        let width = host.viewport.width;
        host.relayout(width)?;
        Ok(host)
    }

    fn relayout(&mut self, width: f64) -> Result<(), LayoutError> {
        let request = LayoutRequest::from_source(&*self, width)?;
        self.layout.recompute_with(&request)
    }

    /// The engine this host drives.
    pub fn layout(&self) -> &StretchyLayout {
        &self.layout
    }

    /// Current viewport size.
    pub fn viewport(&self) -> Size {
        self.viewport
    }

    /// Current vertical scroll offset.
    pub fn offset_y(&self) -> f64 {
        self.offset_y
    }

    /// Scroll state to hand to visibility queries.
    pub fn scroll_state(&self) -> ScrollState {
        ScrollState::new(self.offset_y, self.viewport.width)
    }

    /// The region of content currently on screen.
    pub fn visible_rect(&self) -> Rect {
        Rect::new(0.0, self.offset_y, self.viewport.width, self.viewport.height)
    }

    /// Largest offset that still fills the viewport with content.
    pub fn max_offset(&self) -> f64 {
        let rest = ScrollState::rest_offset(&self.config.section_insets);
        (self.layout.content_size().height - self.viewport.height).max(rest)
    }

    /// Scroll to an arbitrary offset. Negative offsets are overscroll and are
    /// not clamped.
    pub fn scroll_to(&mut self, offset_y: f64) {
        self.offset_y = offset_y;
    }

    /// Scroll so the top of the given cell is at the top of the viewport,
    /// clamped to the scrollable range.
    pub fn scroll_to_item(&mut self, address: ItemAddress) -> Result<(), LayoutError> {
        let frame = self.layout.try_attribute_for(address)?.frame;
        let rest = ScrollState::rest_offset(&self.config.section_insets);
        self.offset_y = frame.y.clamp(rest, self.max_offset());
        Ok(())
    }

    /// Attributes on screen for the current viewport and scroll offset.
    pub fn visible_attributes(&self) -> Vec<LayoutAttribute> {
        self.layout
            .attributes_visible_in(self.visible_rect(), &self.scroll_state())
    }

    /// Handle a size transition (rotation, window resize).
    ///
    /// Cell width follows the new viewport width unless fixed by
    /// configuration; the layout is invalidated and recomputed.
    pub fn transition_to_size(&mut self, size: Size) -> Result<(), LayoutError> {
        debug!(from = %self.viewport, to = %size, "Viewport transition");
        self.viewport = size;
        self.layout
            .set_configuration(self.config.layout_configuration(size.width));
        let request = LayoutRequest::from_source(&*self, size.width)?;
        self.layout.bounds_did_change(size, &request)
    }
}
