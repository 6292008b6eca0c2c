use super::*;

#[test]
fn non_positive_seconds_are_zero() {
    assert_eq!(secs_to_duration(0.0).unwrap(), Duration::ZERO);
    assert_eq!(secs_to_duration(-2.5).unwrap(), Duration::ZERO);
}

#[test]
fn fractional_seconds_convert() {
    assert_eq!(secs_to_duration(1.5).unwrap(), Duration::from_millis(1500));
}

#[test]
fn non_finite_seconds_are_rejected() {
    assert!(secs_to_duration(f64::NAN).is_err());
    assert!(secs_to_duration(f64::INFINITY).is_err());
}

#[test]
fn handles_order_by_issue_id() {
    assert!(FrameHandle(1) < FrameHandle(2));
    assert_ne!(TimerHandle(3), TimerHandle(4));
}
