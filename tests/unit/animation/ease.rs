use super::*;

const ALL: [Ease; 14] = [
    Ease::Linear,
    Ease::InQuad,
    Ease::OutQuad,
    Ease::InOutQuad,
    Ease::InCubic,
    Ease::OutCubic,
    Ease::InOutCubic,
    Ease::InSine,
    Ease::OutSine,
    Ease::InOutSine,
    Ease::OutBack,
    Ease::OutElastic,
    Ease::OutBounce,
    Ease::CubicBezier {
        x1: 0.25,
        y1: 0.1,
        x2: 0.25,
        y2: 1.0,
    },
];

#[test]
fn endpoints_are_stable() {
    for ease in ALL {
        assert!(ease.apply(0.0).abs() < 1e-12, "{ease:?}");
        assert!((ease.apply(1.0) - 1.0).abs() < 1e-12, "{ease:?}");
    }
}

#[test]
fn monotonic_spot_check() {
    for ease in [
        Ease::Linear,
        Ease::InQuad,
        Ease::OutQuad,
        Ease::InOutQuad,
        Ease::InCubic,
        Ease::OutCubic,
        Ease::InOutCubic,
        Ease::InSine,
        Ease::OutSine,
        Ease::InOutSine,
    ] {
        let a = ease.apply(0.25);
        let b = ease.apply(0.5);
        let c = ease.apply(0.75);
        assert!(a < b);
        assert!(b < c);
    }
}

#[test]
fn out_back_overshoots() {
    assert!(Ease::OutBack.apply(0.8) > 1.0);
}

#[test]
fn input_is_clamped() {
    assert_eq!(Ease::InQuad.apply(2.0), 1.0);
    assert_eq!(Ease::InQuad.apply(-1.0), 0.0);
}

#[test]
fn names_parse_in_either_case_style() {
    assert_eq!("out-cubic".parse::<Ease>().unwrap(), Ease::OutCubic);
    assert_eq!("in_out_sine".parse::<Ease>().unwrap(), Ease::InOutSine);
    assert_eq!(" Linear ".parse::<Ease>().unwrap(), Ease::Linear);
    assert!("wobble".parse::<Ease>().is_err());
}

#[test]
fn css_cubic_bezier_parses() {
    assert_eq!(
        "cubic-bezier(0.42, 0, 0.58, 1)".parse::<Ease>().unwrap(),
        Ease::CubicBezier {
            x1: 0.42,
            y1: 0.0,
            x2: 0.58,
            y2: 1.0
        }
    );
    assert!("cubic-bezier(1.5, 0, 0.5, 1)".parse::<Ease>().is_err());
    assert!("cubic-bezier(0.1, 0.2)".parse::<Ease>().is_err());
}

#[test]
fn serde_uses_snake_case() {
    let json = serde_json::to_string(&Ease::InOutQuad).unwrap();
    assert_eq!(json, "\"in_out_quad\"");
    let back: Ease = serde_json::from_str("\"out_bounce\"").unwrap();
    assert_eq!(back, Ease::OutBounce);
}

#[test]
fn css_cubic_bezier_accepts_negative_y() {
    let ease: Ease = "cubic-bezier(0.3, -0.5, 0.7, 1.5)".parse().unwrap();
    assert!(matches!(ease, Ease::CubicBezier { y1, .. } if y1 == -0.5));
}
