//! Property-based invariant tests for the layout engine.
//!
//! Tests validate:
//! 1. Determinism across repeated passes and lookups
//! 2. Monotonic stacking with exact item spacing inside a section
//! 3. Section chaining through the bottom inset (empty sections skipped)
//! 4. Content size equals last cell bottom plus bottom inset
//! 5. Forward pass agrees with the recursive definition
//! 6. Stretch boundary is exclusive and growth is exact
//! 7. Visibility filter: disjoint query is empty, content bounds return all
//! 8. Repeated stretched queries never compound
//!
//! All generated lengths are whole numbers so float arithmetic is exact.

use proptest::prelude::*;
use stretchy::layout::{LayoutConfiguration, LayoutRequest, LayoutSnapshot, ScrollState, StretchyLayout};
use stretchy::model::{EdgeInsets, ItemAddress, Rect, Size};

// ===== Arbitrary Strategies =====

/// Strategy for configurations with whole-number lengths and non-empty items.
fn arb_config() -> impl Strategy<Value = LayoutConfiguration> {
    (
        (0u16..=64, 0u16..=64, 0u16..=64, 0u16..=64),
        (1u16..=400, 1u16..=200),
        0u16..=32,
        0u16..=300,
    )
        .prop_map(|((top, left, bottom, right), (w, h), spacing, header)| {
            LayoutConfiguration::new(
                EdgeInsets::new(top.into(), left.into(), bottom.into(), right.into()),
                Size::new(w.into(), h.into()),
                spacing.into(),
                header.into(),
            )
        })
}

/// Strategy for item counts, empty sections allowed.
fn arb_counts() -> impl Strategy<Value = Vec<usize>> {
    prop::collection::vec(0usize..=8, 1..=6)
}

/// Strategy for item counts with no empty section.
fn arb_dense_counts() -> impl Strategy<Value = Vec<usize>> {
    prop::collection::vec(1usize..=8, 1..=6)
}

/// Viewport wide enough to hold every cell of `config`.
fn fitting_width(config: &LayoutConfiguration) -> f64 {
    config.section_insets.left + config.item_size.width + config.section_insets.right + 1.0
}

fn laid_out(config: LayoutConfiguration, counts: &[usize]) -> StretchyLayout {
    let mut layout = StretchyLayout::new(config);
    layout
        .recompute(counts, fitting_width(&config))
        .expect("valid shape lays out");
    layout
}

/// Position of a cell following the backward definition: the first section
/// sits below the header, every other section below the previous section's
/// last item.
fn recursive_frame(config: &LayoutConfiguration, counts: &[usize], address: ItemAddress) -> Rect {
    let insets = config.section_insets;
    let section_origin = if address.section == 0 {
        config.header_height + insets.top
    } else {
        let previous = address.section - 1;
        let last = ItemAddress::new(previous, counts[previous] - 1);
        recursive_frame(config, counts, last).max_y() + insets.bottom
    };
    Rect::new(
        insets.left,
        section_origin + address.item as f64 * (config.item_size.height + config.item_spacing),
        config.item_size.width,
        config.item_size.height,
    )
}

// ===== Property 1: Determinism =====

proptest! {
    #[test]
    fn recompute_is_deterministic(config in arb_config(), counts in arb_counts()) {
        let request = LayoutRequest::new(counts.clone(), fitting_width(&config));
        let first = LayoutSnapshot::compute(&config, &request).unwrap();
        let second = LayoutSnapshot::compute(&config, &request).unwrap();
        prop_assert_eq!(&first, &second);

        let layout = laid_out(config, &counts);
        for (section, &count) in counts.iter().enumerate() {
            for item in 0..count {
                let address = ItemAddress::new(section, item);
                prop_assert_eq!(layout.attribute_for(address), layout.attribute_for(address));
                prop_assert_eq!(layout.attribute_for(address), first.attribute_for(address));
            }
        }
    }
}

// ===== Property 2: Monotonic Stacking =====

proptest! {
    #[test]
    fn items_stack_with_exact_spacing(config in arb_config(), counts in arb_counts()) {
        let layout = laid_out(config, &counts);
        let snapshot = layout.snapshot().unwrap();

        for section in 0..counts.len() {
            let cells = snapshot.section_cells(section).unwrap();
            for pair in cells.windows(2) {
                let (upper, lower) = (pair[0].frame, pair[1].frame);
                prop_assert!(upper.y < lower.y);
                prop_assert_eq!(lower.y - upper.max_y(), config.item_spacing);
            }
        }
    }

    #[test]
    fn cells_share_left_inset_and_item_size(config in arb_config(), counts in arb_counts()) {
        let layout = laid_out(config, &counts);
        for cell in layout.snapshot().unwrap().cells() {
            prop_assert_eq!(cell.frame.x, config.section_insets.left);
            prop_assert_eq!(cell.frame.size(), config.item_size);
        }
    }
}

// ===== Property 3: Section Chaining =====

proptest! {
    #[test]
    fn sections_chain_through_bottom_inset(config in arb_config(), counts in arb_counts()) {
        let layout = laid_out(config, &counts);
        let snapshot = layout.snapshot().unwrap();

        let non_empty: Vec<usize> = (0..counts.len()).filter(|&s| counts[s] > 0).collect();
        for pair in non_empty.windows(2) {
            let last = snapshot.section_cells(pair[0]).unwrap().last().unwrap();
            let first = snapshot.section_cells(pair[1]).unwrap().first().unwrap();
            prop_assert_eq!(first.frame.y, last.frame.max_y() + config.section_insets.bottom);
        }

        if let Some(&first_section) = non_empty.first() {
            let first = snapshot.section_cells(first_section).unwrap()[0];
            prop_assert_eq!(first.frame.y, config.header_height + config.section_insets.top);
        }
    }
}

// ===== Property 4: Content Size =====

proptest! {
    #[test]
    fn content_height_is_last_bottom_plus_inset(config in arb_config(), counts in arb_counts()) {
        let layout = laid_out(config, &counts);
        let snapshot = layout.snapshot().unwrap();
        let content = layout.content_size();

        prop_assert_eq!(content.width, fitting_width(&config));
        match snapshot.last_cell() {
            Some(last) => {
                prop_assert_eq!(content.height, last.frame.max_y() + config.section_insets.bottom);
                for cell in snapshot.cells() {
                    prop_assert!(content.height >= cell.frame.max_y() + config.section_insets.bottom);
                }
            }
            None => prop_assert_eq!(content.height, config.header_height),
        }
    }
}

// ===== Property 5: Forward Pass Equals Recursive Definition =====

proptest! {
    #[test]
    fn forward_pass_matches_recursive_definition(
        config in arb_config(),
        counts in arb_dense_counts()
    ) {
        let layout = laid_out(config, &counts);
        for (section, &count) in counts.iter().enumerate() {
            for item in 0..count {
                let address = ItemAddress::new(section, item);
                prop_assert_eq!(
                    layout.attribute_for(address).unwrap().frame,
                    recursive_frame(&config, &counts, address)
                );
            }
        }
    }
}

// ===== Property 6: Stretch Boundary =====

proptest! {
    #[test]
    fn no_stretch_at_rest_offset(config in arb_config(), counts in arb_counts()) {
        let layout = laid_out(config, &counts);
        let scroll = ScrollState::new(-config.section_insets.top, fitting_width(&config));
        prop_assert_eq!(layout.stretched_header(&scroll), layout.header_attribute());
    }

    #[test]
    fn stretch_grows_by_exact_overscroll(
        config in arb_config(),
        counts in arb_counts(),
        pull in 1u16..=500
    ) {
        let layout = laid_out(config, &counts);
        let pull = f64::from(pull);
        let rest = layout.header_attribute().unwrap().frame;
        let scroll = ScrollState::new(-config.section_insets.top - pull, fitting_width(&config));
        let stretched = layout.stretched_header(&scroll).unwrap().frame;

        prop_assert_eq!(stretched.height, (rest.height + pull).max(config.section_insets.top));
        prop_assert_eq!(stretched.y, rest.y - pull);
        prop_assert_eq!(stretched.width, rest.width);
    }
}

// ===== Property 7: Visibility Filter =====

proptest! {
    #[test]
    fn disjoint_query_returns_nothing(config in arb_config(), counts in arb_counts(), gap in 1u16..=1000) {
        let layout = laid_out(config, &counts);
        let content = layout.content_size();
        let query = Rect::new(0.0, content.height + f64::from(gap), content.width, 500.0);
        let scroll = ScrollState::new(query.y, content.width);
        prop_assert!(layout.attributes_visible_in(query, &scroll).is_empty());
    }

    #[test]
    fn content_bounds_return_everything(config in arb_config(), counts in arb_counts()) {
        let layout = laid_out(config, &counts);
        let query = Rect::from_size(layout.content_size());
        let scroll = ScrollState::new(0.0, query.width);
        let visible = layout.attributes_visible_in(query, &scroll);
        prop_assert_eq!(visible.as_slice(), layout.snapshot().unwrap().attributes());
    }
}

// ===== Property 8: No Compounding =====

proptest! {
    #[test]
    fn repeated_queries_agree(config in arb_config(), counts in arb_counts(), pull in 1u16..=300) {
        let layout = laid_out(config, &counts);
        let width = fitting_width(&config);
        let offset = -config.section_insets.top - f64::from(pull);
        let query = Rect::new(0.0, offset, width, 600.0);
        let scroll = ScrollState::new(offset, width);

        let first = layout.attributes_visible_in(query, &scroll);
        for _ in 0..3 {
            prop_assert_eq!(&layout.attributes_visible_in(query, &scroll), &first);
        }
        prop_assert_eq!(layout.header_attribute().unwrap().frame.height, config.header_height);
    }
}
