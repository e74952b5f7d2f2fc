//! Property-based tests for the scroll walk geometry.
//!
//! The exhaustive scan only sees rows mounted at the positions it visits, so
//! the position sequences must cover the whole scroll range with no gap
//! larger than one step in either direction.

use calgroups::types::scroll::{
    forward_positions, reverse_positions, scroll_step, ScrollMetrics,
};
use proptest::prelude::*;

proptest! {
    #![proptest_config(ProptestConfig::with_cases(128))]

    // The step is half the viewport but never below the configured floor.
    #[test]
    fn step_respects_floor(
        client_height in 1.0f64..5000.0,
        min_step in 1.0f64..500.0,
    ) {
        let metrics = ScrollMetrics {
            scroll_top: 0.0,
            scroll_height: client_height * 3.0,
            client_height,
        };
        let step = scroll_step(&metrics, min_step);

        prop_assert!(step >= min_step);
        prop_assert!(step >= client_height * 0.5);
        prop_assert!(step == min_step || step == client_height * 0.5);
    }

    // Forward walk: starts at the top, strictly increases, stays within the
    // extent, and ends within one step of the bottom.
    #[test]
    fn forward_walk_covers_range(
        extent in 1.0f64..20_000.0,
        step in 1.0f64..2_000.0,
    ) {
        let positions = forward_positions(extent, step);

        prop_assert!(!positions.is_empty());
        prop_assert_eq!(positions[0], 0.0);
        for pair in positions.windows(2) {
            prop_assert!(pair[1] > pair[0]);
            prop_assert!(pair[1] - pair[0] <= step + 1e-9);
        }
        let last = positions[positions.len() - 1];
        prop_assert!(last <= extent);
        prop_assert!(extent - last < step + 1e-6);
    }

    // Reverse walk: starts at the bottom, strictly decreases, and ends within
    // one step of the top.
    #[test]
    fn reverse_walk_covers_range(
        extent in 1.0f64..20_000.0,
        step in 1.0f64..2_000.0,
    ) {
        let positions = reverse_positions(extent, step);

        prop_assert!(!positions.is_empty());
        prop_assert_eq!(positions[0], extent);
        for pair in positions.windows(2) {
            prop_assert!(pair[1] < pair[0]);
            prop_assert!(pair[0] - pair[1] <= step + 1e-9);
        }
        let last = positions[positions.len() - 1];
        prop_assert!(last >= 0.0);
        prop_assert!(last < step + 1e-6);
    }

    // Any scroll offset in the range lies within one step of a visited
    // position — a viewport taller than the step therefore misses nothing.
    #[test]
    fn every_offset_is_near_a_visited_position(
        extent in 1.0f64..20_000.0,
        step in 1.0f64..2_000.0,
        fraction in 0.0f64..=1.0,
    ) {
        let target = extent * fraction;

        let forward = forward_positions(extent, step);
        prop_assert!(
            forward.iter().any(|&p| (p - target).abs() < step + 1e-6),
            "forward walk leaves {} uncovered",
            target
        );

        let reverse = reverse_positions(extent, step);
        prop_assert!(
            reverse.iter().any(|&p| (p - target).abs() < step + 1e-6),
            "reverse walk leaves {} uncovered",
            target
        );
    }
}

#[test]
fn test_walks_handle_degenerate_extent() {
    assert_eq!(forward_positions(0.0, 100.0), vec![0.0]);
    assert_eq!(reverse_positions(0.0, 100.0), vec![0.0]);
}
