//! Host data source and the immutable layout request

use crate::model::{ItemAddress, LayoutError};

/// Upper bound on the number of sections, and separately on the total
/// number of cells, one pass will lay out.
pub const MAX_LAYOUT_ELEMENTS: usize = 1 << 24;

/// Dataset shape supplied by the host view.
///
/// The engine never holds on to a `DataSource`; counts are copied into a
/// [`LayoutRequest`] at the start of each pass.
pub trait DataSource {
    /// Number of sections in the dataset.
    fn number_of_sections(&self) -> usize;

    /// Number of items in `section`. Only called with `section < number_of_sections()`.
    fn number_of_items(&self, section: usize) -> usize;
}

impl DataSource for [usize] {
    fn number_of_sections(&self) -> usize {
        self.len()
    }

    fn number_of_items(&self, section: usize) -> usize {
        self[section]
    }
}

impl DataSource for Vec<usize> {
    fn number_of_sections(&self) -> usize {
        self.len()
    }

    fn number_of_items(&self, section: usize) -> usize {
        self[section]
    }
}

impl DataSource for LayoutRequest {
    fn number_of_sections(&self) -> usize {
        self.item_counts.len()
    }

    fn number_of_items(&self, section: usize) -> usize {
        self.item_counts[section]
    }
}

/// Everything one layout pass needs to know about the host.
///
/// Captured once per pass so the computation never calls back into the host.
///
/// # Invariants
/// - `item_counts.len() >= 1` (checked by `validate`)
/// - section count and total items are at most [`MAX_LAYOUT_ELEMENTS`]
///   (checked by `validate`)
/// - `viewport_width` is finite and non-negative (checked by `validate`)
#[derive(Debug, Clone, PartialEq)]
pub struct LayoutRequest {
    item_counts: Vec<usize>,
    viewport_width: f64,
}

impl LayoutRequest {
    /// Create a request from explicit per-section item counts.
    pub fn new(item_counts: Vec<usize>, viewport_width: f64) -> Self {
        Self {
            item_counts,
            viewport_width,
        }
    }

    /// Snapshot the shape of `source`.
    ///
    /// # Errors
    /// `LayoutError::TooManyItems` if the source reports more sections than
    /// [`MAX_LAYOUT_ELEMENTS`]; the counts are not collected in that case.
    pub fn from_source<S: DataSource + ?Sized>(
        source: &S,
        viewport_width: f64,
    ) -> Result<Self, LayoutError> {
        let sections = source.number_of_sections();
        if sections > MAX_LAYOUT_ELEMENTS {
            return Err(LayoutError::TooManyItems {
                limit: MAX_LAYOUT_ELEMENTS,
            });
        }
        let item_counts = (0..sections)
            .map(|section| source.number_of_items(section))
            .collect();
        Ok(Self::new(item_counts, viewport_width))
    }

    /// Check the request can produce a layout.
    pub fn validate(&self) -> Result<(), LayoutError> {
        if self.item_counts.is_empty() {
            return Err(LayoutError::NoSections);
        }
        if !self.viewport_width.is_finite() || self.viewport_width < 0.0 {
            return Err(LayoutError::InvalidViewportWidth(self.viewport_width));
        }
        let within_limit = self.item_counts.len() <= MAX_LAYOUT_ELEMENTS
            && self
                .checked_total_items()
                .is_some_and(|total| total <= MAX_LAYOUT_ELEMENTS);
        if !within_limit {
            return Err(LayoutError::TooManyItems {
                limit: MAX_LAYOUT_ELEMENTS,
            });
        }
        Ok(())
    }

    /// Per-section item counts.
    pub fn item_counts(&self) -> &[usize] {
        &self.item_counts
    }

    /// Number of sections.
    pub fn section_count(&self) -> usize {
        self.item_counts.len()
    }

    /// Number of items in `section`, or `None` if the section does not exist.
    pub fn item_count(&self, section: usize) -> Option<usize> {
        self.item_counts.get(section).copied()
    }

    /// Total number of cells across all sections, saturating at `usize::MAX`.
    pub fn total_items(&self) -> usize {
        self.checked_total_items().unwrap_or(usize::MAX)
    }

    /// Total number of cells, or `None` if the sum overflows.
    pub fn checked_total_items(&self) -> Option<usize> {
        self.item_counts
            .iter()
            .try_fold(0usize, |total, &count| total.checked_add(count))
    }

    /// Width of the viewport the layout is computed for.
    pub fn viewport_width(&self) -> f64 {
        self.viewport_width
    }

    /// True if `address` names an existing cell.
    pub fn contains(&self, address: ItemAddress) -> bool {
        self.item_count(address.section)
            .is_some_and(|count| address.item < count)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct FixedSource {
        sections: usize,
        items: usize,
    }

    impl DataSource for FixedSource {
        fn number_of_sections(&self) -> usize {
            self.sections
        }

        fn number_of_items(&self, _section: usize) -> usize {
            self.items
        }
    }

    #[test]
    fn from_source_copies_counts() {
        let source = FixedSource {
            sections: 4,
            items: 16,
        };
        let request = LayoutRequest::from_source(&source, 375.0).unwrap();
        assert_eq!(request.item_counts(), &[16, 16, 16, 16]);
        assert_eq!(request.total_items(), 64);
        assert_eq!(request.viewport_width(), 375.0);
    }

    #[test]
    fn slices_act_as_data_sources() {
        let counts = vec![3, 0, 5];
        let request = LayoutRequest::from_source(counts.as_slice(), 320.0).unwrap();
        assert_eq!(request.section_count(), 3);
        assert_eq!(request.item_count(1), Some(0));
        assert_eq!(request.item_count(3), None);
    }

    #[test]
    fn validate_rejects_zero_sections() {
        let request = LayoutRequest::new(vec![], 320.0);
        assert_eq!(request.validate(), Err(LayoutError::NoSections));
    }

    #[test]
    fn validate_rejects_negative_width() {
        let request = LayoutRequest::new(vec![1], -1.0);
        assert_eq!(
            request.validate(),
            Err(LayoutError::InvalidViewportWidth(-1.0))
        );
    }

    #[test]
    fn validate_accepts_empty_sections() {
        let request = LayoutRequest::new(vec![0, 0], 320.0);
        assert_eq!(request.validate(), Ok(()));
    }

    #[test]
    fn contains_checks_both_indices() {
        let request = LayoutRequest::new(vec![3, 0], 320.0);
        assert!(request.contains(ItemAddress::new(0, 2)));
        assert!(!request.contains(ItemAddress::new(0, 3)));
        assert!(!request.contains(ItemAddress::new(1, 0)));
        assert!(!request.contains(ItemAddress::new(2, 0)));
    }

    #[test]
    fn validate_rejects_overflowing_total() {
        let request = LayoutRequest::new(vec![usize::MAX, usize::MAX], 320.0);
        assert_eq!(request.checked_total_items(), None);
        assert_eq!(request.total_items(), usize::MAX);
        assert_eq!(
            request.validate(),
            Err(LayoutError::TooManyItems {
                limit: MAX_LAYOUT_ELEMENTS
            })
        );
    }

    #[test]
    fn validate_rejects_total_above_limit() {
        let request = LayoutRequest::new(vec![MAX_LAYOUT_ELEMENTS, 1], 320.0);
        assert_eq!(request.checked_total_items(), Some(MAX_LAYOUT_ELEMENTS + 1));
        assert!(matches!(
            request.validate(),
            Err(LayoutError::TooManyItems { .. })
        ));
    }

    #[test]
    fn validate_accepts_total_at_limit() {
        let request = LayoutRequest::new(vec![MAX_LAYOUT_ELEMENTS - 1, 1], 320.0);
        assert_eq!(request.validate(), Ok(()));
    }

    #[test]
    fn from_source_rejects_too_many_sections() {
        let source = FixedSource {
            sections: usize::MAX,
            items: 1,
        };
        assert_eq!(
            LayoutRequest::from_source(&source, 375.0),
            Err(LayoutError::TooManyItems {
                limit: MAX_LAYOUT_ELEMENTS
            })
        );
    }
}
