// File: crates/chart-core/tests/scale.rs
// Purpose: Scale mapping, nice numeric ticks, time interval selection and labels.

use chart_core::geometry::Rect;
use chart_core::scale::{format_time_tick, TimeInterval};
use chart_core::ticks::{linear_ticks, precision_for_step, tick_step};
use chart_core::{LinearScale, Sample, Scale, TimeScale};
use chrono::{TimeZone, Utc};

fn approx(a: f64, b: f64) -> bool {
    (a - b).abs() < 1e-9
}

#[test]
fn linear_scale_inverted_range() {
    let s = LinearScale::for_values(&Rect::from_ltrb(40.0, 20.0, 620.0, 370.0));
    assert_eq!(s.map(0.0), 370.0);
    assert_eq!(s.map(100.0), 20.0);
    assert_eq!(s.map(50.0), 195.0);
    assert!(approx(s.invert(195.0), 50.0));
}

#[test]
fn zero_width_domain_maps_to_range_start() {
    let s = LinearScale::new((5.0, 5.0), (40.0, 620.0));
    assert_eq!(s.map(5.0), 40.0);
    assert_eq!(s.map(1e9), 40.0);
}

#[test]
fn nice_linear_ticks() {
    let t = linear_ticks(0.0, 1.0, 5);
    assert_eq!(t.len(), 6);
    assert!(approx(t[1], 0.2));
    assert!(approx(t[5], 1.0));

    assert_eq!(linear_ticks(0.0, 100.0, 10).len(), 11);
    assert_eq!(linear_ticks(3.0, 3.0, 10), vec![3.0]);
    assert!(linear_ticks(0.0, 1.0, 0).is_empty());
    assert_eq!(linear_ticks(-7.0, 23.0, 6), vec![-5.0, 0.0, 5.0, 10.0, 15.0, 20.0]);
}

#[test]
fn tick_precision_follows_step() {
    assert_eq!(precision_for_step(tick_step(0.0, 100.0, 10)), 0);
    assert_eq!(precision_for_step(tick_step(0.0, 1.0, 5)), 1);
    assert_eq!(precision_for_step(tick_step(0.0, 0.1, 5)), 2);

    let s = LinearScale::new((0.0, 1.0), (0.0, 100.0));
    assert_eq!(s.format_tick(0.4, 5), "0.4");
    assert_eq!(s.format_tick(-0.0001, 5), "0.0");
}

#[test]
fn interval_selection_tracks_span() {
    assert_eq!(TimeInterval::choose(0, 180, 10), TimeInterval::Fixed { step: 15, offset: 0 });
    assert_eq!(TimeInterval::choose(0, 3, 10), TimeInterval::Fixed { step: 1, offset: 0 });
    assert_eq!(TimeInterval::choose(0, 3600, 10), TimeInterval::Fixed { step: 300, offset: 0 });
    assert_eq!(TimeInterval::choose(0, 86_400, 10), TimeInterval::Fixed { step: 3 * 3600, offset: 0 });
    assert_eq!(TimeInterval::choose(0, 365 * 86_400, 10), TimeInterval::Months(1));
    assert_eq!(TimeInterval::choose(0, 50 * 365 * 86_400, 10), TimeInterval::Years(5));
}

#[test]
fn calendar_intervals_land_on_boundaries() {
    let start = Utc.with_ymd_and_hms(2024, 1, 15, 0, 0, 0).unwrap().timestamp();
    let stop = Utc.with_ymd_and_hms(2024, 12, 31, 0, 0, 0).unwrap().timestamp();
    let quarters = TimeInterval::Months(3).range(start, stop);
    let months: Vec<String> = quarters.iter().map(|t| t.format("%Y-%m-%d").to_string()).collect();
    assert_eq!(months, ["2024-04-01", "2024-07-01", "2024-10-01"]);

    let start = Utc.with_ymd_and_hms(2001, 6, 1, 0, 0, 0).unwrap().timestamp();
    let stop = Utc.with_ymd_and_hms(2021, 1, 1, 0, 0, 0).unwrap().timestamp();
    let years: Vec<i64> = TimeInterval::Years(5)
        .range(start, stop)
        .iter()
        .map(|t| t.format("%Y").to_string().parse().unwrap())
        .collect();
    assert_eq!(years, vec![2005, 2010, 2015, 2020]);

    // weeks start on Sunday
    let start = Utc.with_ymd_and_hms(2024, 3, 6, 0, 0, 0).unwrap().timestamp();
    let weeks = TimeInterval::Fixed { step: 7 * 86_400, offset: 3 * 86_400 }.range(start, start + 14 * 86_400);
    assert_eq!(weeks[0].format("%a %Y-%m-%d").to_string(), "Sun 2024-03-10");
    assert_eq!(weeks.len(), 2);
}

#[test]
fn multi_resolution_time_labels() {
    let at = |y, mo, d, h, mi, s| format_time_tick(Utc.with_ymd_and_hms(y, mo, d, h, mi, s).unwrap());
    assert_eq!(at(2024, 3, 11, 13, 5, 30), ":30");
    assert_eq!(at(2024, 3, 11, 13, 5, 0), "01:05");
    assert_eq!(at(2024, 3, 11, 13, 0, 0), "01 PM");
    assert_eq!(at(2024, 3, 11, 0, 0, 0), "Mon 11");
    assert_eq!(at(2024, 3, 10, 0, 0, 0), "Mar 10");
    assert_eq!(at(2024, 3, 1, 0, 0, 0), "March");
    assert_eq!(at(2024, 1, 1, 0, 0, 0), "2024");
}

#[test]
fn time_scale_from_samples() {
    let samples: Vec<Sample> = [(100, Some(1.0)), (400, None)]
        .into_iter()
        .map(|(t, v)| Sample::from_unix(t, v).unwrap())
        .collect();
    let s = TimeScale::for_samples(&samples, &Rect::from_ltrb(40.0, 20.0, 620.0, 370.0));
    assert!(!s.is_degenerate());
    assert_eq!(s.map(samples[0].timestamp), 40.0);
    assert_eq!(s.map(samples[1].timestamp), 620.0);

    let empty = TimeScale::for_samples(&[], &Rect::from_ltrb(40.0, 20.0, 620.0, 370.0));
    assert!(empty.domain().is_none());
    assert!(empty.ticks(10).is_empty());
}
