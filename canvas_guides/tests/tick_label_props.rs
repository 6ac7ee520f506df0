// Copyright 2025 the Canvas Guides Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Title substitution picks exactly one visible tick.

use canvas_guides::{
    Axis, AxisOptions, AxisSide, LabelPos, select_label, title_substitution,
    visible_tick_values,
};
use proptest::prelude::*;

fn label_pos() -> impl Strategy<Value = LabelPos> {
    prop_oneof![Just(LabelPos::High), Just(LabelPos::Low)]
}

proptest! {
    #[test]
    fn at_most_one_visible_tick_takes_the_title(
        raw in prop::collection::vec(-1.0e6f64..1.0e6, 0..20),
        pos in label_pos(),
    ) {
        let mut visible = raw;
        visible.sort_by(f64::total_cmp);
        visible.dedup();
        let hits: Vec<f64> = visible
            .iter()
            .copied()
            .filter(|v| title_substitution(*v, &visible, pos, Some("T")).is_some())
            .collect();

        if visible.is_empty() {
            prop_assert!(hits.is_empty());
        } else {
            let expected = match pos {
                LabelPos::High => visible[visible.len() - 1],
                LabelPos::Low => visible[0],
            };
            prop_assert_eq!(hits, vec![expected]);
        }
    }

    #[test]
    fn pinned_axes_title_an_interior_tick(
        min in -1000.0f64..1000.0,
        span in 1.0f64..1000.0,
        pos in label_pos(),
    ) {
        let opts = AxisOptions::default()
            .with_min(min)
            .with_max(min + span)
            .with_title("Title")
            .with_label_pos(pos);
        let mut axis = Axis::new(AxisSide::Bottom, min, min + span, opts);
        axis.label_ticks();

        let visible = visible_tick_values(&axis);
        let titled: Vec<f64> = axis
            .ticks
            .iter()
            .filter(|t| t.label.as_deref() == Some("Title"))
            .map(|t| t.value)
            .collect();
        prop_assert!(titled.len() <= 1);
        for v in &titled {
            prop_assert!(*v > axis.min && *v < axis.max);
            prop_assert_eq!(select_label(*v, &axis), "Title");
        }
        prop_assert_eq!(titled.len(), usize::from(!visible.is_empty()));
    }
}
