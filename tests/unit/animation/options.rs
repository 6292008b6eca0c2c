use super::*;
use crate::surface::stroke::StrokePath;

#[test]
fn defaults_are_absent() {
    let o: DrawOptions<StrokePath> = DrawOptions::default();
    assert_eq!(o.delay, Duration::ZERO);
    assert!(o.easing.is_none());
    assert!(o.update.is_none());
    assert!(o.callback.is_none());
    assert!(!o.circular);
}

#[test]
fn builder_sets_fields() {
    let o: DrawOptions<StrokePath> = DrawOptions::new()
        .delay_secs(0.25)
        .unwrap()
        .easing(Ease::OutQuad)
        .on_update(|_| {})
        .on_complete(|_, _| {})
        .circular(true);
    assert_eq!(o.delay, Duration::from_millis(250));
    assert!(o.update.is_some());
    assert!(o.callback.is_some());
    assert!(o.circular);
    assert_eq!(o.easing.unwrap().apply(0.5), 0.75);
}

#[test]
fn custom_easing_is_called() {
    let e = Easing::custom(|t| t * 0.5);
    assert_eq!(e.apply(1.0), 0.5);
    assert_eq!(format!("{e:?}"), "Custom(..)");
}

#[test]
fn request_parses_with_defaults() {
    let r = DrawRequest::from_json(r#"{ "begin": 0, "end": "50%" }"#).unwrap();
    assert_eq!(r, DrawRequest::new(0.0, "50%"));
    assert_eq!(r.duration().unwrap(), Duration::ZERO);
}

#[test]
fn request_maps_to_options() {
    let r = DrawRequest::from_json(
        r#"{ "begin": "10%", "end": 90, "duration": 2, "delay": -1, "ease": "in_cubic", "circular": true }"#,
    )
    .unwrap();
    assert_eq!(r.duration().unwrap(), Duration::from_secs(2));
    let o: DrawOptions<StrokePath> = r.options().unwrap();
    assert_eq!(o.delay, Duration::ZERO);
    assert!(o.circular);
    assert_eq!(o.easing.unwrap().apply(0.5), 0.125);
}

#[test]
fn request_rejects_unknown_fields() {
    let err = DrawRequest::from_json(r#"{ "begin": 0, "end": 1, "speed": 3 }"#).unwrap_err();
    assert!(matches!(err, crate::SegmentError::Serde(_)));
}
