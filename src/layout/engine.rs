//! The stretchy-header layout engine

use super::{
    configuration::LayoutConfiguration,
    request::{DataSource, LayoutRequest},
    snapshot::LayoutSnapshot,
    stretch::{stretch_header, ScrollState},
};
use crate::model::{ItemAddress, LayoutAttribute, LayoutError, Rect, Size};
use tracing::{debug, trace, warn};

/// Layout engine for a sectioned single-column list under a stretchy header.
///
/// Owns the rest-state [`LayoutSnapshot`] between two invalidations. The host
/// owns scroll state and configuration and pushes them in.
///
/// # Lifecycle
/// 1. `new(config)` - nothing laid out yet; queries return empty results
/// 2. `recompute(source, width)` - full pass, replaces the snapshot
/// 3. `attributes_visible_in(rect, scroll)` - filtered copies, header stretched
/// 4. `set_configuration` / `invalidate` / bounds change - back to 2
///
/// # Stale Snapshots
/// The engine cannot observe the host's dataset. After changing item counts
/// the host must call `recompute`; until then queries describe the old shape.
#[derive(Debug, Clone)]
pub struct StretchyLayout {
    config: LayoutConfiguration,
    snapshot: Option<LayoutSnapshot>,
}

impl Default for StretchyLayout {
    fn default() -> Self {
        Self::new(LayoutConfiguration::default())
    }
}

impl StretchyLayout {
    /// Create an engine with nothing laid out.
    pub fn new(config: LayoutConfiguration) -> Self {
        Self {
            config,
            snapshot: None,
        }
    }

    /// Current configuration.
    pub fn configuration(&self) -> &LayoutConfiguration {
        &self.config
    }

    /// Replace the configuration and drop the current snapshot.
    pub fn set_configuration(&mut self, config: LayoutConfiguration) {
        if config != self.config {
            debug!(?config, "Layout configuration changed");
        }
        self.config = config;
        self.invalidate();
    }

    // === Invalidation ===

    /// Drop the current snapshot. Queries return empty results until the
    /// next `recompute`.
    pub fn invalidate(&mut self) {
        self.snapshot = None;
    }

    /// True when no valid snapshot is held.
    pub fn needs_layout(&self) -> bool {
        self.snapshot.is_none()
    }

    /// Whether a viewport bounds change requires a new pass.
    ///
    /// Always `true`: header width tracks the viewport, and there is no
    /// threshold below which a change is ignored.
    pub fn should_invalidate_for_bounds_change(&self, _new_bounds: Size) -> bool {
        true
    }

    /// Handle a viewport bounds change: invalidate and lay out again.
    pub fn bounds_did_change<S: DataSource + ?Sized>(
        &mut self,
        new_bounds: Size,
        source: &S,
    ) -> Result<(), LayoutError> {
        if self.should_invalidate_for_bounds_change(new_bounds) {
            debug!(bounds = %new_bounds, "Viewport bounds changed");
            self.invalidate();
            self.recompute(source, new_bounds.width)?;
        }
        Ok(())
    }

    // === Layout Pass ===

    /// Snapshot the shape of `source` and run a full pass.
    pub fn recompute<S: DataSource + ?Sized>(
        &mut self,
        source: &S,
        viewport_width: f64,
    ) -> Result<(), LayoutError> {
        let request = match LayoutRequest::from_source(source, viewport_width) {
            Ok(request) => request,
            Err(err) => {
                self.snapshot = None;
                return Err(err);
            }
        };
        self.recompute_with(&request)
    }

    /// Run a full pass for an explicit request.
    ///
    /// On error the previous snapshot is discarded; it described a shape the
    /// host no longer has.
    pub fn recompute_with(&mut self, request: &LayoutRequest) -> Result<(), LayoutError> {
        self.snapshot = None;
        let snapshot = LayoutSnapshot::compute(&self.config, request)?;
        debug!(
            sections = request.section_count(),
            items = request.total_items(),
            content = %snapshot.content_size(),
            "Layout recomputed"
        );
        self.snapshot = Some(snapshot);
        Ok(())
    }

    /// Rest-state snapshot of the last pass, if any.
    pub fn snapshot(&self) -> Option<&LayoutSnapshot> {
        self.snapshot.as_ref()
    }

    // === Queries ===

    /// Attributes whose rest-state frame lies inside or overlaps `query`.
    ///
    /// Returned attributes are copies in snapshot order. If the header is
    /// among them, its frame is stretched for `scroll`; the snapshot itself
    /// is untouched, so repeated queries at the same offset agree.
    pub fn attributes_visible_in(&self, query: Rect, scroll: &ScrollState) -> Vec<LayoutAttribute> {
        let Some(snapshot) = &self.snapshot else {
            warn!("Visibility query before any layout pass");
            return Vec::new();
        };

        let insets = &self.config.section_insets;
        let visible: Vec<LayoutAttribute> = snapshot
            .intersecting(&query)
            .map(|attr| {
                if attr.is_header() {
                    LayoutAttribute::header(stretch_header(attr.frame, scroll, insets))
                } else {
                    *attr
                }
            })
            .collect();

        trace!(
            query = %query,
            offset_y = scroll.offset_y,
            visible = visible.len(),
            "Visibility query"
        );
        visible
    }

    /// Total scrollable extent, or `Size::ZERO` before any pass.
    pub fn content_size(&self) -> Size {
        self.snapshot
            .as_ref()
            .map_or(Size::ZERO, LayoutSnapshot::content_size)
    }

    /// Rest-state attribute of one cell, or `None` if it was not laid out.
    pub fn attribute_for(&self, address: ItemAddress) -> Option<LayoutAttribute> {
        self.snapshot.as_ref()?.attribute_for(address)
    }

    /// Like [`attribute_for`](Self::attribute_for) but reports missing cells
    /// as an error.
    pub fn try_attribute_for(&self, address: ItemAddress) -> Result<LayoutAttribute, LayoutError> {
        self.attribute_for(address)
            .ok_or(LayoutError::AddressOutOfBounds { address })
    }

    /// Header in rest state.
    pub fn header_attribute(&self) -> Option<LayoutAttribute> {
        self.snapshot.as_ref().map(LayoutSnapshot::header)
    }

    /// Header as displayed for `scroll`, regardless of any query rectangle.
    pub fn stretched_header(&self, scroll: &ScrollState) -> Option<LayoutAttribute> {
        let rest = self.header_attribute()?;
        Some(LayoutAttribute::header(stretch_header(
            rest.frame,
            scroll,
            &self.config.section_insets,
        )))
    }
}
