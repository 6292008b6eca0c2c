use super::*;
use crate::geometry::dash::compute_descriptor;

#[test]
fn in_range_pair_is_untouched() {
    assert_eq!(normalize_range(10.0, 90.0, 100.0, false), (10.0, 90.0));
    assert_eq!(normalize_range(0.0, 100.0, 100.0, false), (0.0, 100.0));
}

#[test]
fn non_circular_clamps_each_endpoint() {
    assert_eq!(normalize_range(-30.0, 140.0, 100.0, false), (0.0, 100.0));
    assert_eq!(normalize_range(-30.0, 40.0, 100.0, false), (0.0, 40.0));
}

#[test]
fn reversed_pair_is_reordered() {
    assert_eq!(normalize_range(70.0, 20.0, 100.0, false), (20.0, 70.0));
    assert_eq!(normalize_range(70.0, 20.0, 100.0, true), (20.0, 70.0));
}

#[test]
fn circular_overlong_span_collapses_to_full() {
    assert_eq!(normalize_range(-20.0, 130.0, 100.0, true), (0.0, 100.0));
}

#[test]
fn circular_out_of_range_is_not_clamped() {
    assert_eq!(normalize_range(80.0, 120.0, 100.0, true), (80.0, 120.0));
}

#[test]
fn normalized_pairs_never_render_negative_dashes() {
    let samples = [-250.0, -100.0, -12.5, 0.0, 33.0, 99.0, 100.0, 175.0, 420.0];
    for &b in &samples {
        for &e in &samples {
            for circular in [false, true] {
                let (nb, ne) = normalize_range(b, e, 100.0, circular);
                let d = compute_descriptor(nb, ne, 100.0, circular);
                assert!(
                    d.as_slice().iter().all(|v| *v >= 0.0),
                    "({b}, {e}, {circular}) -> {d}"
                );
            }
        }
    }
}

#[test]
fn lerp_hits_both_ends_exactly() {
    assert_eq!(lerp(0.1, 0.3, 0.0), 0.1);
    assert_eq!(lerp(0.1, 0.3, 1.0), 0.3);
    assert_eq!(lerp(0.0, 10.0, 0.5), 5.0);
}
