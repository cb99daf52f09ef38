//! Layout attributes: computed geometry plus element identity

use super::geometry::Rect;
use serde::Serialize;
use std::fmt;

/// Address of a cell: section index and item index within the section.
///
/// Both indices are 0-based. An address is only meaningful against the
/// item counts of the layout pass that produced it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize)]
pub struct ItemAddress {
    /// Section index.
    pub section: usize,
    /// Item index within the section.
    pub item: usize,
}

impl ItemAddress {
    /// Create a new address.
    pub fn new(section: usize, item: usize) -> Self {
        Self { section, item }
    }
}

impl fmt::Display for ItemAddress {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{},{}]", self.section, self.item)
    }
}

/// What a layout attribute describes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum ElementKind {
    /// A regular cell.
    Cell(ItemAddress),
    /// The single global stretchy header.
    ///
    /// Occupies the supplementary slot of section 0, item 0 regardless of
    /// how many sections exist.
    Header,
}

/// Computed frame of one layout element.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct LayoutAttribute {
    /// Element identity.
    #[serde(flatten)]
    pub kind: ElementKind,
    /// Frame in content coordinates.
    pub frame: Rect,
}

impl LayoutAttribute {
    /// Attribute for the cell at `address`.
    pub fn cell(address: ItemAddress, frame: Rect) -> Self {
        Self {
            kind: ElementKind::Cell(address),
            frame,
        }
    }

    /// Attribute for the stretchy header.
    pub fn header(frame: Rect) -> Self {
        Self {
            kind: ElementKind::Header,
            frame,
        }
    }

    /// True if this is the header attribute.
    pub fn is_header(&self) -> bool {
        matches!(self.kind, ElementKind::Header)
    }

    /// Cell address, or `None` for the header.
    pub fn address(&self) -> Option<ItemAddress> {
        match self.kind {
            ElementKind::Cell(address) => Some(address),
            ElementKind::Header => None,
        }
    }
}

impl fmt::Display for LayoutAttribute {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.kind {
            ElementKind::Cell(address) => write!(f, "cell{} {}", address, self.frame),
            ElementKind::Header => write!(f, "header {}", self.frame),
        }
    }
}
