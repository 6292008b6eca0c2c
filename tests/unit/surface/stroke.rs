use super::*;
use crate::geometry::dash::{compute_descriptor, dash_offset};
use kurbo::PathEl;

fn point_eq(a: Point, b: (f64, f64)) -> bool {
    (a.x - b.0).abs() < 1e-6 && (a.y - b.1).abs() < 1e-6
}

fn apply(stroke: &mut StrokePath, begin: f64, end: f64) {
    let total = stroke.total_length();
    stroke.apply_dash_array(&compute_descriptor(begin, end, total, false));
    stroke.apply_dash_offset(dash_offset(total));
}

#[test]
fn measures_lines_and_closing_segments() {
    let line = StrokePath::from_svg("M0,0 L100,0").unwrap();
    assert!((line.total_length() - 100.0).abs() < 1e-9);

    let square = StrokePath::from_svg("M0,0 L10,0 L10,10 L0,10 Z").unwrap();
    assert!((square.total_length() - 40.0).abs() < 1e-9);
}

#[test]
fn measures_curves() {
    // Quarter circle of radius 100 approximated by a cubic.
    let arc = StrokePath::from_svg("M100,0 C100,55.228 55.228,100 0,100").unwrap();
    let expected = std::f64::consts::FRAC_PI_2 * 100.0;
    assert!((arc.total_length() - expected).abs() < 0.1);
}

#[test]
fn rejects_bad_path_data() {
    let err = StrokePath::from_svg("M0,0 Q").unwrap_err();
    assert!(matches!(err, SegmentError::Validation(_)));
}

#[test]
fn undashed_stroke_is_fully_visible() {
    let line = StrokePath::from_svg("M0,0 L100,0").unwrap();
    assert_eq!(line.dash_array(), None);
    assert_eq!(line.visible_ranges(), vec![0.0..100.0]);
}

#[test]
fn visible_path_cuts_a_line() {
    let mut line = StrokePath::from_svg("M0,0 L100,0").unwrap();
    apply(&mut line, 10.0, 90.0);
    let els: Vec<PathEl> = line.visible_path().elements().to_vec();
    assert_eq!(els.len(), 2);
    assert!(matches!(els[0], PathEl::MoveTo(p) if point_eq(p, (10.0, 0.0))));
    assert!(matches!(els[1], PathEl::LineTo(p) if point_eq(p, (90.0, 0.0))));
}

#[test]
fn visible_path_follows_corners_without_breaking() {
    let mut square = StrokePath::from_svg("M0,0 L10,0 L10,10 L0,10 Z").unwrap();
    apply(&mut square, 5.0, 15.0);
    let els: Vec<PathEl> = square.visible_path().elements().to_vec();
    assert_eq!(els.len(), 3);
    assert!(matches!(els[0], PathEl::MoveTo(p) if point_eq(p, (5.0, 0.0))));
    assert!(matches!(els[1], PathEl::LineTo(p) if point_eq(p, (10.0, 0.0))));
    assert!(matches!(els[2], PathEl::LineTo(p) if point_eq(p, (10.0, 5.0))));
}

#[test]
fn wrapped_range_yields_two_runs() {
    let mut line = StrokePath::from_svg("M0,0 L100,0").unwrap();
    apply(&mut line, 80.0, 120.0);
    let moves = line
        .visible_path()
        .elements()
        .iter()
        .filter(|el| matches!(el, PathEl::MoveTo(_)))
        .count();
    assert_eq!(moves, 2);
}

#[test]
fn hidden_stroke_has_no_geometry() {
    let mut line = StrokePath::from_svg("M0,0 L100,0").unwrap();
    apply(&mut line, 40.0, 40.0);
    assert!(line.visible_path().elements().is_empty());
}
