// File: crates/chartesque-core/tests/properties.rs
// Purpose: Property tests for scale conversion and tick generation.

use chartesque_core::{Axis, MIN_TICKS};
use proptest::prelude::*;

fn sized(mut axis: Axis, min: f64, span: f64, length: f64) -> Axis {
    axis.set_limit(min, min + span).expect("valid limits");
    axis.set_size(length);
    axis
}

proptest! {
    #[test]
    fn horizontal_is_strictly_increasing(
        min in -1e4f64..1e4, span in 1e-2f64..1e6, length in 1.0f64..4000.0,
        a in 0.0f64..1.0, b in 0.0f64..1.0,
    ) {
        prop_assume!((a - b).abs() > 1e-4);
        let axis = sized(Axis::horizontal(), min, span, length);
        let (lo, hi) = if a < b { (a, b) } else { (b, a) };
        let (v1, v2) = (min + lo * span, min + hi * span);
        prop_assume!(v1 < v2);
        prop_assert!(axis.convert_to_scale(v1) < axis.convert_to_scale(v2));
    }

    #[test]
    fn vertical_is_strictly_decreasing(
        min in -1e4f64..1e4, span in 1e-2f64..1e6, length in 1.0f64..4000.0,
        a in 0.0f64..1.0, b in 0.0f64..1.0,
    ) {
        prop_assume!((a - b).abs() > 1e-4);
        let axis = sized(Axis::vertical(), min, span, length);
        let (lo, hi) = if a < b { (a, b) } else { (b, a) };
        let (v1, v2) = (min + lo * span, min + hi * span);
        prop_assume!(v1 < v2);
        prop_assert!(axis.convert_to_scale(v1) > axis.convert_to_scale(v2));
    }

    #[test]
    fn boundaries_map_to_axis_ends(min in -1e4f64..1e4, span in 1e-2f64..1e4, length in 0.0f64..4000.0) {
        let x = sized(Axis::horizontal(), min, span, length);
        let (lo, hi) = x.limits();
        prop_assert_eq!(x.convert_to_scale(lo), 0.0);
        prop_assert!((x.convert_to_scale(hi) - x.length()).abs() < 1e-4);

        let y = sized(Axis::vertical(), min, span, length);
        let (lo, hi) = y.limits();
        prop_assert_eq!(y.convert_to_scale(lo), y.length());
        prop_assert!(y.convert_to_scale(hi).abs() < 1e-4);
    }

    #[test]
    fn ticks_are_evenly_spaced_and_monotonic(
        vertical in any::<bool>(), min in -1e4f64..1e4, span in 1e-2f64..1e4, length in -100.0f64..3000.0,
    ) {
        let axis = if vertical { Axis::vertical() } else { Axis::horizontal() };
        let mut axis = sized(axis, min, span, length);
        axis.generate_ticks();

        let n = axis.ticks_count();
        prop_assert!(n >= MIN_TICKS);
        prop_assert_eq!(axis.ticks_positions().len(), n);
        prop_assert_eq!(axis.ticks_labels().len(), n);
        prop_assert!((axis.ticks_value_spacing() * (n - 1) as f64 - span).abs() < 1e-6 * span.max(1.0));

        for w in axis.ticks_positions().windows(2) {
            prop_assert!(w[0].is_finite() && w[1].is_finite());
            if axis.length() > 0.0 {
                if vertical { prop_assert!(w[0] > w[1]); } else { prop_assert!(w[0] < w[1]); }
            }
        }
    }
}
