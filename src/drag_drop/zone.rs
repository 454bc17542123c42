use egui::Rect;

use crate::model::RowKind;

/// The spatial region a dragged item occupies relative to a target row.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Zone {
    /// Insert above the target.
    Before,
    /// Nest under the target. Never produced for [`RowKind::ChildTag`]
    /// targets — a child cannot itself be a parent.
    Into,
    /// Insert below the target.
    After,
}

// Fractional bands over the target row's height, measured from its top edge.
// These are design constants tuned per row kind: group headers have a wide
// nesting band, ungrouped tags a narrower one, child tags none at all.
const GROUP_HEADER_BEFORE_MAX: f32 = 0.15;
const GROUP_HEADER_INTO_MAX: f32 = 0.85;
const UNGROUPED_TAG_BEFORE_MAX: f32 = 0.30;
const UNGROUPED_TAG_INTO_MAX: f32 = 0.70;
const CHILD_TAG_SPLIT: f32 = 0.50;

/// Which zone the pointer falls into for `target_rect` of kind `target_kind`.
///
/// Pure and stateless. Pointer positions outside the rect clamp to the
/// nearest boundary zone instead of erroring, so a pointer slightly above a
/// row still reads as [`Zone::Before`] (degenerate zero-height rects clamp
/// the same way).
pub fn zone_for(pointer_y: f32, target_rect: Rect, target_kind: RowKind) -> Zone {
    let height = target_rect.height();
    let relative = if height > 0.0 {
        ((pointer_y - target_rect.top()) / height).clamp(0.0, 1.0)
    } else {
        0.0
    };

    match target_kind {
        RowKind::GroupHeader => banded(relative, GROUP_HEADER_BEFORE_MAX, GROUP_HEADER_INTO_MAX),
        RowKind::UngroupedTag => {
            banded(relative, UNGROUPED_TAG_BEFORE_MAX, UNGROUPED_TAG_INTO_MAX)
        }
        RowKind::ChildTag => {
            if relative < CHILD_TAG_SPLIT {
                Zone::Before
            } else {
                Zone::After
            }
        }
    }
}

fn banded(relative: f32, before_max: f32, into_max: f32) -> Zone {
    if relative < before_max {
        Zone::Before
    } else if relative < into_max {
        Zone::Into
    } else {
        Zone::After
    }
}

#[cfg(test)]
mod tests {
    use egui::{Pos2, Rect, Vec2};

    use super::*;

    fn row_rect() -> Rect {
        // Spans y=100..140.
        Rect::from_min_size(Pos2::new(0.0, 100.0), Vec2::new(200.0, 40.0))
    }

    fn band_ordinal(zone: Zone) -> u8 {
        match zone {
            Zone::Before => 0,
            Zone::Into => 1,
            Zone::After => 2,
        }
    }

    #[test]
    fn group_header_boundary_scenarios() {
        let rect = row_rect();
        assert_eq!(zone_for(105.0, rect, RowKind::GroupHeader), Zone::Before); // relative 0.125
        assert_eq!(zone_for(120.0, rect, RowKind::GroupHeader), Zone::Into); // relative 0.5
        assert_eq!(zone_for(136.0, rect, RowKind::GroupHeader), Zone::After); // relative 0.9
    }

    #[test]
    fn ungrouped_tag_boundary_scenarios() {
        let rect = row_rect();
        assert_eq!(zone_for(110.0, rect, RowKind::UngroupedTag), Zone::Before); // relative 0.25
        assert_eq!(zone_for(112.0, rect, RowKind::UngroupedTag), Zone::Into); // relative 0.30
        assert_eq!(zone_for(127.9, rect, RowKind::UngroupedTag), Zone::Into);
        assert_eq!(zone_for(128.0, rect, RowKind::UngroupedTag), Zone::After); // relative 0.70
    }

    #[test]
    fn child_tag_splits_at_midline_and_never_nests() {
        let rect = row_rect();
        assert_eq!(zone_for(115.0, rect, RowKind::ChildTag), Zone::Before); // relative 0.375
        assert_eq!(zone_for(125.0, rect, RowKind::ChildTag), Zone::After); // relative 0.625

        for step in 0..=400 {
            let y = 100.0 + (step as f32) * 0.1;
            assert_ne!(
                zone_for(y, rect, RowKind::ChildTag),
                Zone::Into,
                "child tag rows must never produce a nesting zone (y={y})"
            );
        }
    }

    #[test]
    fn zones_are_monotonic_across_each_band_table() {
        let rect = row_rect();
        for kind in [RowKind::GroupHeader, RowKind::ChildTag, RowKind::UngroupedTag] {
            let mut previous = 0;
            let mut visited = Vec::new();
            for step in 0..=1000 {
                let y = rect.top() + rect.height() * (step as f32) / 1000.0;
                let ordinal = band_ordinal(zone_for(y, rect, kind));
                assert!(
                    ordinal >= previous,
                    "zone sequence went backwards for {kind:?} at y={y}"
                );
                previous = ordinal;
                if visited.last() != Some(&ordinal) {
                    visited.push(ordinal);
                }
            }
            let expected: &[u8] = match kind {
                RowKind::GroupHeader | RowKind::UngroupedTag => &[0, 1, 2],
                RowKind::ChildTag => &[0, 2],
            };
            assert_eq!(visited, expected, "band coverage for {kind:?}");
        }
    }

    #[test]
    fn out_of_range_pointer_clamps_to_boundary_zones() {
        let rect = row_rect();
        assert_eq!(zone_for(-50.0, rect, RowKind::GroupHeader), Zone::Before);
        assert_eq!(zone_for(10_000.0, rect, RowKind::GroupHeader), Zone::After);

        let degenerate = Rect::from_min_size(Pos2::new(0.0, 100.0), Vec2::new(200.0, 0.0));
        assert_eq!(zone_for(100.0, degenerate, RowKind::UngroupedTag), Zone::Before);
    }
}
