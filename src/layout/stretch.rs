//! Elastic header stretch

use crate::model::{EdgeInsets, Rect};

/// Live scroll state supplied by the host on every query.
///
/// Not cached by the engine.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct ScrollState {
    /// Vertical scroll position. Negative values are overscroll above the
    /// content start.
    pub offset_y: f64,
    /// Current viewport width, for host bookkeeping. Stretching never reads
    /// it: the header keeps the width of the last recompute, and a width
    /// change reaches the engine through `bounds_did_change`.
    pub viewport_width: f64,
}

impl ScrollState {
    /// Create a new scroll state.
    pub fn new(offset_y: f64, viewport_width: f64) -> Self {
        Self {
            offset_y,
            viewport_width,
        }
    }

    /// Scroll offset at which the content rests at the top: `-insets.top`.
    pub fn rest_offset(insets: &EdgeInsets) -> f64 {
        -insets.top
    }

    /// How far the user has pulled past the resting top position.
    ///
    /// `None` at or below the rest offset; the boundary is exclusive.
    pub fn overscroll(&self, insets: &EdgeInsets) -> Option<f64> {
        let min_y = Self::rest_offset(insets);
        if self.offset_y < min_y {
            Some((self.offset_y - min_y).abs())
        } else {
            None
        }
    }
}

/// Header frame as displayed for `scroll`.
///
/// While overscrolled by `extra`, the header grows by `extra` and its top
/// edge moves up by `extra`, so its bottom edge stays put and the cells
/// below do not shift. The height never drops below the top inset.
pub fn stretch_header(rest: Rect, scroll: &ScrollState, insets: &EdgeInsets) -> Rect {
    match scroll.overscroll(insets) {
        Some(extra) => {
            let floor = ScrollState::rest_offset(insets).abs();
            Rect::new(
                rest.x,
                rest.y - extra,
                rest.width,
                (rest.height + extra).max(floor),
            )
        }
        None => rest,
    }
}
