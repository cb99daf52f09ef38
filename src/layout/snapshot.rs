//! Rest-state geometry for one layout pass
//!
//! Each section's first row sits directly below the previous section's last
//! item plus the bottom inset; the first section sits below the header plus
//! the top inset. Section starts are computed once, front to back, so the
//! whole pass is linear in the number of cells.

use super::configuration::LayoutConfiguration;
use super::request::LayoutRequest;
use crate::model::{ItemAddress, LayoutAttribute, LayoutError, Rect, Size};

/// All attributes computed by one layout pass, in rest state.
///
/// Never mutated after construction; stretched header frames are derived
/// per query.
///
/// # Ordering
/// Cells in section-major order, followed by the header.
///
/// # Invariants
/// - `section_starts.len() == section_cell_offsets.len() == request.section_count()`
/// - cells of section `s` occupy `attributes[section_cell_offsets[s]..][..item_count(s)]`
/// - the header is always the last attribute
#[derive(Debug, Clone, PartialEq)]
pub struct LayoutSnapshot {
    attributes: Vec<LayoutAttribute>,
    section_starts: Vec<f64>,
    section_cell_offsets: Vec<usize>,
    item_counts: Vec<usize>,
    content_size: Size,
}

impl LayoutSnapshot {
    /// Run a full layout pass.
    ///
    /// Empty sections contribute no height: a section following an empty one
    /// starts exactly where it would have started had the empty section not
    /// existed. With no cells at all the content is the header alone.
    ///
    /// # Errors
    /// - `LayoutError::InvalidConfiguration` if `config` fails validation
    /// - `LayoutError::NoSections` / `InvalidViewportWidth` if `request` does
    pub fn compute(
        config: &LayoutConfiguration,
        request: &LayoutRequest,
    ) -> Result<Self, LayoutError> {
        config.validate()?;
        request.validate()?;

        let insets = config.section_insets;
        let stride = config.row_stride();
        let section_count = request.section_count();

        let mut attributes = Vec::with_capacity(request.total_items() + 1);
        let mut section_starts = Vec::with_capacity(section_count);
        let mut section_cell_offsets = Vec::with_capacity(section_count);

        // Bottom edge of the most recently placed cell.
        let mut anchor: Option<f64> = None;

        for (section, &count) in request.item_counts().iter().enumerate() {
            let start = match anchor {
                None => config.header_height + insets.top,
                Some(max_y) => max_y + insets.bottom,
            };
            section_starts.push(start);
            section_cell_offsets.push(attributes.len());

            for item in 0..count {
                let frame = Rect::new(
                    insets.left,
                    start + item as f64 * stride,
                    config.item_size.width,
                    config.item_size.height,
                );
                attributes.push(LayoutAttribute::cell(ItemAddress::new(section, item), frame));
            }

            if count > 0 {
                anchor = Some(start + (count - 1) as f64 * stride + config.item_size.height);
            }
        }

        let header = Rect::new(0.0, 0.0, request.viewport_width(), config.header_height);
        attributes.push(LayoutAttribute::header(header));

        let content_height = match anchor {
            Some(max_y) => max_y + insets.bottom,
            None => config.header_height,
        };

        Ok(Self {
            attributes,
            section_starts,
            section_cell_offsets,
            item_counts: request.item_counts().to_vec(),
            content_size: Size::new(request.viewport_width(), content_height),
        })
    }

    /// Every attribute: cells in section-major order, then the header.
    pub fn attributes(&self) -> &[LayoutAttribute] {
        &self.attributes
    }

    /// Cell attributes only.
    pub fn cells(&self) -> &[LayoutAttribute] {
        &self.attributes[..self.attributes.len() - 1]
    }

    /// Cell attributes of one section, or `None` if the section does not exist.
    pub fn section_cells(&self, section: usize) -> Option<&[LayoutAttribute]> {
        let offset = *self.section_cell_offsets.get(section)?;
        let count = self.item_counts[section];
        Some(&self.attributes[offset..offset + count])
    }

    /// The header in rest state.
    pub fn header(&self) -> LayoutAttribute {
        // compute() always appends the header last
        self.attributes[self.attributes.len() - 1]
    }

    /// Attribute of the cell at `address`, or `None` if it does not exist.
    pub fn attribute_for(&self, address: ItemAddress) -> Option<LayoutAttribute> {
        let offset = *self.section_cell_offsets.get(address.section)?;
        if address.item >= self.item_counts[address.section] {
            return None;
        }
        Some(self.attributes[offset + address.item])
    }

    /// Y of the first row of `section`.
    pub fn section_start_y(&self, section: usize) -> Option<f64> {
        self.section_starts.get(section).copied()
    }

    /// The bottom-most cell, skipping trailing empty sections.
    pub fn last_cell(&self) -> Option<LayoutAttribute> {
        self.cells().last().copied()
    }

    /// Per-section item counts the pass was computed for.
    pub fn item_counts(&self) -> &[usize] {
        &self.item_counts
    }

    /// Total scrollable extent.
    pub fn content_size(&self) -> Size {
        self.content_size
    }

    /// Rest-state attributes whose frame lies inside or overlaps `query`.
    pub fn intersecting<'a>(&'a self, query: &'a Rect) -> impl Iterator<Item = &'a LayoutAttribute> {
        self.attributes
            .iter()
            .filter(move |attr| query.contains(&attr.frame) || query.intersects(&attr.frame))
    }
}
