// File: crates/chart-core/tests/properties.rs
// Purpose: Property checks over generated series: bounded ticks, y within plot, gaps, determinism.

use chart_core::{render, ChartConfig, Container, Sample};
use proptest::prelude::*;

/// Ascending series: start time, positive gaps, optional values in [0, 100].
fn ascending(max_len: usize, max_gap: i64) -> impl Strategy<Value = Vec<Sample>> {
    (
        0i64..2_000_000_000,
        prop::collection::vec((1..=max_gap, prop::option::weighted(0.9, 0.0f64..=100.0)), 1..max_len),
    )
        .prop_map(|(start, steps)| {
            let mut t = start;
            steps
                .into_iter()
                .map(|(gap, v)| {
                    t += gap;
                    Sample::from_unix(t, v).expect("in range")
                })
                .collect()
        })
}

proptest! {
    #[test]
    fn tick_count_is_bounded(samples in ascending(400, 1_000_000)) {
        let cfg = ChartConfig::default();
        let g = render(&samples, &cfg);
        prop_assert!(g.x_axis.ticks.len() <= 3 * cfg.ticks + 1, "x ticks: {}", g.x_axis.ticks.len());
        prop_assert!(g.y_axis.ticks.len() <= 3 * cfg.ticks + 1);
        prop_assert!(!g.x_axis.ticks.is_empty());
    }

    #[test]
    fn defined_points_stay_inside_plot(samples in ascending(300, 600)) {
        let cfg = ChartConfig::default();
        let plot = cfg.plot_rect();
        let g = render(&samples, &cfg);
        for p in g.line.points() {
            prop_assert!(p.y >= plot.top - 1e-9 && p.y <= plot.bottom + 1e-9, "y = {}", p.y);
            prop_assert!(p.x >= plot.left - 1e-9 && p.x <= plot.right + 1e-9, "x = {}", p.x);
        }
    }

    #[test]
    fn one_interior_gap_is_one_discontinuity(
        values in prop::collection::vec(0.0f64..=100.0, 3..200),
        pick in any::<prop::sample::Index>(),
    ) {
        let hole = 1 + pick.index(values.len() - 2);
        let samples: Vec<Sample> = values
            .iter()
            .enumerate()
            .map(|(i, &v)| Sample::from_unix(i as i64 * 5, (i != hole).then_some(v)).expect("in range"))
            .collect();
        let g = render(&samples, &ChartConfig::default());
        prop_assert_eq!(g.line.discontinuities(), 1);
        prop_assert_eq!(g.line.points().count(), values.len() - 1);
    }

    #[test]
    fn rendering_is_deterministic(samples in ascending(200, 3_600)) {
        let cfg = ChartConfig::default();
        let mut a = Container::new("a");
        let mut b = Container::new("a");
        chart_core::render_into(&samples, &cfg, &mut a);
        chart_core::render_into(&samples, &cfg, &mut b);
        prop_assert_eq!(a.to_html(), b.to_html());
        prop_assert_eq!(a, b);
    }
}
