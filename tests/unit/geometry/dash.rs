use super::*;

fn approx_ranges(actual: &[Range<f64>], expected: &[(f64, f64)]) {
    assert_eq!(
        actual.len(),
        expected.len(),
        "ranges {actual:?} vs {expected:?}"
    );
    for (a, (s, e)) in actual.iter().zip(expected) {
        assert!((a.start - s).abs() < 1e-9, "ranges {actual:?} vs {expected:?}");
        assert!((a.end - e).abs() < 1e-9, "ranges {actual:?} vs {expected:?}");
    }
}

#[test]
fn in_range_pair_is_a_single_dash() {
    let d = compute_descriptor(10.0, 90.0, 100.0, false);
    assert_eq!(d.as_slice(), &[100.0, 110.0, 80.0]);
    assert_eq!(d.to_string(), "100 110 80");
    approx_ranges(&d.visible_ranges(100.0), &[(10.0, 90.0)]);
}

#[test]
fn full_range_is_fully_visible() {
    let d = compute_descriptor(0.0, 100.0, 100.0, false);
    assert_eq!(d, DashArray::full(100.0));
    approx_ranges(&d.visible_ranges(100.0), &[(0.0, 100.0)]);
}

#[test]
fn equal_endpoints_show_nothing() {
    for x in [0.0, 12.5, 50.0, 100.0] {
        let d = compute_descriptor(x, x, 100.0, false);
        assert_eq!(d.as_slice()[2], 0.0);
        assert!(d.visible_ranges(100.0).is_empty());
    }
}

#[test]
fn overflow_past_end_uses_five_entries() {
    let d = compute_descriptor(80.0, 120.0, 100.0, false);
    assert_eq!(d.as_slice(), &[100.0, 100.0, 20.0, 60.0, 40.0]);
    approx_ranges(&d.visible_ranges(100.0), &[(0.0, 20.0), (80.0, 100.0)]);
}

#[test]
fn underflow_before_start_wraps_to_tail() {
    let d = compute_descriptor(-20.0, 20.0, 100.0, false);
    assert_eq!(d.as_slice(), &[100.0, 80.0, 40.0, 60.0, 100.0]);
    approx_ranges(&d.visible_ranges(100.0), &[(0.0, 20.0), (80.0, 100.0)]);
}

#[test]
fn both_negative_uses_six_entries() {
    let d = compute_descriptor(-50.0, -20.0, 100.0, false);
    assert_eq!(d.as_slice(), &[100.0, 50.0, 30.0, 70.0, 30.0, 100.0]);
    approx_ranges(&d.visible_ranges(100.0), &[(50.0, 80.0)]);
}

#[test]
fn circular_fold_keeps_rendered_ranges() {
    let base = compute_descriptor(10.0, 50.0, 100.0, true).visible_ranges(100.0);
    approx_ranges(&base, &[(10.0, 50.0)]);
    for k in -4..=4 {
        let shift = 100.0 * f64::from(k);
        let d = compute_descriptor(10.0 + shift, 50.0 + shift, 100.0, true);
        approx_ranges(&d.visible_ranges(100.0), &[(10.0, 50.0)]);
    }
}

#[test]
fn circular_fold_across_the_seam() {
    for k in -3..=3 {
        let shift = 100.0 * f64::from(k);
        let d = compute_descriptor(-20.0 + shift, 20.0 + shift, 100.0, true);
        approx_ranges(&d.visible_ranges(100.0), &[(0.0, 20.0), (80.0, 100.0)]);
    }
}

#[test]
fn fold_uses_begin_when_far_negative() {
    assert_eq!(fold_range(-150.0, -120.0, 100.0), (-50.0, -20.0));
    assert_eq!(fold_range(250.0, 280.0, 100.0), (50.0, 80.0));
    assert_eq!(fold_range(90.0, 10.0, 100.0), (90.0, 10.0));
    assert_eq!(fold_range(190.0, 110.0, 100.0), (90.0, 10.0));
}

#[test]
fn reversed_pair_never_encodes_negative_dash() {
    let d = compute_descriptor(90.0, 10.0, 100.0, false);
    assert!(d.as_slice().iter().all(|v| *v >= 0.0));
    approx_ranges(&d.visible_ranges(100.0), &[(10.0, 90.0)]);
}

#[test]
fn span_longer_than_path_is_full() {
    let d = compute_descriptor(-20.0, 120.0, 100.0, true);
    assert_eq!(d, DashArray::full(100.0));
}

#[test]
fn far_out_of_window_values_fold_without_negative_entries() {
    let d = compute_descriptor(-350.0, -320.0, 100.0, false);
    assert!(d.as_slice().iter().all(|v| *v >= 0.0));
    approx_ranges(&d.visible_ranges(100.0), &[(50.0, 80.0)]);
}

#[test]
fn zero_length_path_is_well_defined() {
    let d = compute_descriptor(0.0, 0.0, 0.0, true);
    assert_eq!(d.as_slice(), &[0.0, 0.0, 0.0]);
    assert!(d.visible_ranges(0.0).is_empty());
}

#[test]
fn non_finite_endpoints_hide_the_path() {
    let d = compute_descriptor(f64::NAN, 10.0, 100.0, false);
    assert_eq!(d, DashArray::hidden(100.0));
}

#[test]
fn invalid_patterns_render_solid() {
    let d = DashArray::from_slice(&[10.0, -1.0]);
    approx_ranges(&d.visible_ranges(50.0), &[(0.0, 50.0)]);
    approx_ranges(&DashArray::default().visible_ranges(50.0), &[(0.0, 50.0)]);
}

#[test]
fn offset_is_two_lengths() {
    assert_eq!(dash_offset(123.0), 246.0);
}

#[test]
fn fine_pattern_is_walked_run_by_run() {
    let ranges = DashArray::from_slice(&[1.0]).visible_ranges(100.0);
    assert_eq!(ranges.len(), 50);
    assert_eq!(ranges[0], 0.0..1.0);
    assert_eq!(ranges[49], 98.0..99.0);
}

#[test]
fn pattern_too_fine_for_the_path_renders_solid() {
    approx_ranges(
        &DashArray::from_slice(&[1.0]).visible_ranges(1e17),
        &[(0.0, 1e17)],
    );
    approx_ranges(
        &DashArray::from_slice(&[1e-4]).visible_ranges(100.0),
        &[(0.0, 100.0)],
    );
}
