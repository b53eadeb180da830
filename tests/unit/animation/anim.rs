use super::*;

fn slide(direction: Direction) -> Animation {
    Animation {
        id: "slide".to_owned(),
        property: AnimatableProperty::X,
        keyframes: vec![Keyframe::new(0.0, 0.0), Keyframe::new(1.0, 100.0)],
        easing: Easing::Linear,
        duration: 2.0,
        delay: 0.0,
        iterations: Iterations::Infinite,
        direction,
        fill: FillMode::None,
    }
}

#[test]
fn alternate_infinite_scenario() {
    let a = slide(Direction::Alternate);
    assert_eq!(a.sample(0.5), Some(Value::Number(25.0)));
    assert_eq!(a.sample(2.5), Some(Value::Number(75.0)));
}

#[test]
fn sample_is_none_when_inactive_or_empty() {
    let mut a = slide(Direction::Normal);
    a.delay = 1.0;
    assert_eq!(a.sample(0.5), None);

    a.keyframes.clear();
    assert_eq!(a.sample(1.5), None);
}

#[test]
fn diagnostics_flag_authoring_problems() {
    assert!(slide(Direction::Normal).diagnostics().is_empty());

    let mut bad = slide(Direction::Normal);
    bad.duration = 0.0;
    bad.delay = -1.0;
    bad.iterations = Iterations::Count(0);
    bad.keyframes = vec![Keyframe::new(1.5, 1.0), Keyframe::new(0.2, 0.0)];
    bad.property = AnimatableProperty::Unknown;
    let d = bad.diagnostics();
    assert_eq!(d.len(), 6, "{d:?}");
    assert!(!bad.is_sorted());
}

#[test]
fn json_defaults_fill_optional_fields() {
    let a: Animation = serde_json::from_str(
        r#"{
            "property": "opacity",
            "keyframes": [{"time": 0, "value": 0}, {"time": 1, "value": 1}],
            "duration": 1.5
        }"#,
    )
    .unwrap();
    assert_eq!(a.property, AnimatableProperty::Opacity);
    assert_eq!(a.easing, Easing::Linear);
    assert_eq!(a.delay, 0.0);
    assert_eq!(a.iterations, Iterations::Count(1));
    assert_eq!(a.direction, Direction::Normal);
    assert_eq!(a.fill, FillMode::None);
}

#[test]
fn unknown_property_names_still_load() {
    let a: Animation = serde_json::from_str(
        r#"{"property": "textShadow", "keyframes": [], "duration": 1}"#,
    )
    .unwrap();
    assert_eq!(a.property, AnimatableProperty::Unknown);
}

#[test]
fn unrecognized_easing_and_direction_are_diagnosed() {
    let a: Animation = serde_json::from_str(
        r#"{
            "property": "x",
            "easing": "cubic-bezier",
            "direction": "sideways",
            "keyframes": [{"time": 0, "value": 0}, {"time": 1, "value": 10, "easing": "snap"}],
            "duration": 2
        }"#,
    )
    .unwrap();
    assert_eq!(a.easing, Easing::Unrecognized);
    assert_eq!(a.keyframes[1].easing, Some(Easing::Unrecognized));
    assert_eq!(a.sample(1.0), Some(Value::Number(5.0)));

    let d = a.diagnostics();
    assert_eq!(d.len(), 2, "{d:?}");
    assert!(d[0].contains("easing"));
    assert!(d[1].contains("direction"));
}
