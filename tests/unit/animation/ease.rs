use super::*;

#[test]
fn endpoints_are_exact() {
    let custom = Easing::CubicBezier([0.68, -0.55, 0.27, 1.55]);
    for ease in Easing::NAMED.into_iter().chain([custom]) {
        assert_eq!(ease.apply(0.0), 0.0, "{ease:?}");
        assert_eq!(ease.apply(1.0), 1.0, "{ease:?}");
    }
}

#[test]
fn out_of_range_input_is_clamped() {
    for ease in Easing::NAMED {
        assert_eq!(ease.apply(-3.0), 0.0);
        assert_eq!(ease.apply(7.5), 1.0);
        assert_eq!(ease.apply(f64::NAN), 0.0);
    }
}

#[test]
fn css_curves_are_monotonic() {
    for ease in [
        Easing::Linear,
        Easing::Ease,
        Easing::EaseIn,
        Easing::EaseOut,
        Easing::EaseInOut,
    ] {
        let mut prev = 0.0;
        for i in 0..=100 {
            let v = ease.apply(f64::from(i) / 100.0);
            assert!(v + 1e-6 >= prev, "{ease:?} decreased at step {i}");
            prev = v;
        }
    }
}

#[test]
fn ease_in_out_is_symmetric_at_midpoint() {
    let mid = Easing::EaseInOut.apply(0.5);
    assert!((mid - 0.5).abs() < 1e-4);
}

#[test]
fn ease_in_starts_slow_and_ease_out_starts_fast() {
    assert!(Easing::EaseIn.apply(0.25) < 0.25);
    assert!(Easing::EaseOut.apply(0.25) > 0.25);
}

#[test]
fn spring_matches_quarter_cosine() {
    let v = Easing::Spring.apply(0.5);
    assert!((v - (1.0 - (std::f64::consts::PI / 4.0).cos())).abs() < 1e-12);
}

#[test]
fn bounce_segments_meet_their_breakpoints() {
    assert!((Easing::Bounce.apply(1.0 / 2.75) - 1.0).abs() < 1e-9);
    // First segment is a pure parabola.
    let t = 0.2;
    assert!((Easing::Bounce.apply(t) - 7.5625 * t * t).abs() < 1e-12);
    // Last segment lands near 1 just before the end.
    assert!(Easing::Bounce.apply(0.99) > 0.98);
}

#[test]
fn serde_names_are_css_style() {
    let json = serde_json::to_string(&Easing::EaseInOut).unwrap();
    assert_eq!(json, "\"ease-in-out\"");
    let e: Easing = serde_json::from_str("\"bounce\"").unwrap();
    assert_eq!(e, Easing::Bounce);
    let c: Easing = serde_json::from_str(r#"{"cubic-bezier": [0.1, 0.2, 0.3, 0.4]}"#).unwrap();
    assert_eq!(c, Easing::CubicBezier([0.1, 0.2, 0.3, 0.4]));
}

#[test]
fn unrecognized_names_load_and_ease_linearly() {
    for json in ["\"cubic-bezier\"", "\"ease-in-back\"", "42"] {
        let e: Easing = serde_json::from_str(json).unwrap();
        assert_eq!(e, Easing::Unrecognized, "{json}");
    }
    assert_eq!(Easing::Unrecognized.apply(0.3), 0.3);
    assert_eq!(serde_json::to_string(&Easing::Unrecognized).unwrap(), "\"linear\"");
    let custom = serde_json::to_string(&Easing::CubicBezier([0.1, 0.2, 0.3, 0.4])).unwrap();
    assert_eq!(custom, r#"{"cubic-bezier":[0.1,0.2,0.3,0.4]}"#);
}
