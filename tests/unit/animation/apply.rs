use super::*;
use crate::foundation::core::Rgb8;

fn state() -> LayerState {
    LayerState::authored(Transform::default(), 1.0)
}

#[test]
fn transform_properties_write_their_fields() {
    let mut s = state();
    let cases = [
        (AnimatableProperty::X, 10.0),
        (AnimatableProperty::Y, 20.0),
        (AnimatableProperty::ScaleX, 2.0),
        (AnimatableProperty::ScaleY, 3.0),
        (AnimatableProperty::Rotation, 45.0),
        (AnimatableProperty::SkewX, 5.0),
        (AnimatableProperty::SkewY, 6.0),
        (AnimatableProperty::AnchorX, 0.0),
        (AnimatableProperty::AnchorY, 1.0),
    ];
    for (p, v) in cases {
        assert_eq!(apply(&mut s, p, &Value::Number(v)), ApplyOutcome::Applied);
    }
    assert_eq!(
        s.transform,
        Transform {
            x: 10.0,
            y: 20.0,
            scale_x: 2.0,
            scale_y: 3.0,
            rotation: 45.0,
            skew_x: 5.0,
            skew_y: 6.0,
            anchor_x: 0.0,
            anchor_y: 1.0,
        }
    );
}

#[test]
fn opacity_is_clamped() {
    let mut s = state();
    apply(&mut s, AnimatableProperty::Opacity, &Value::Number(1.2));
    assert_eq!(s.opacity, 1.0);
    apply(&mut s, AnimatableProperty::Opacity, &Value::Number(-0.5));
    assert_eq!(s.opacity, 0.0);
}

#[test]
fn appearance_properties_are_recorded() {
    let mut s = state();
    let red = Value::Color(Rgb8::new(255, 0, 0));
    assert!(!apply(&mut s, AnimatableProperty::Color, &red).is_ignored());
    assert!(!apply(&mut s, AnimatableProperty::Blur, &Value::Number(4.0)).is_ignored());
    assert!(!apply(&mut s, AnimatableProperty::HueRotate, &Value::Number(90.0)).is_ignored());
    assert_eq!(s.appearance.color, Some(red));
    assert_eq!(s.appearance.blur, Some(4.0));
    assert_eq!(s.appearance.hue_rotate, Some(90.0));
    assert_eq!(s.transform, Transform::default());
}

#[test]
fn unknown_and_mismatched_writes_are_ignored() {
    let mut s = state();
    let before = s.clone();
    assert_eq!(
        apply(&mut s, AnimatableProperty::Unknown, &Value::Number(1.0)),
        ApplyOutcome::UnknownProperty
    );
    assert_eq!(
        apply(&mut s, AnimatableProperty::X, &Value::Text("left".to_owned())),
        ApplyOutcome::TypeMismatch
    );
    assert_eq!(
        apply(&mut s, AnimatableProperty::BackgroundColor, &Value::Number(3.0)),
        ApplyOutcome::TypeMismatch
    );
    assert_eq!(s, before);
}

#[test]
fn property_names_match_editor_json() {
    let p: AnimatableProperty = serde_json::from_str("\"scaleX\"").unwrap();
    assert_eq!(p, AnimatableProperty::ScaleX);
    let p: AnimatableProperty = serde_json::from_str("\"hue-rotate\"").unwrap();
    assert_eq!(p, AnimatableProperty::HueRotate);
    let p: AnimatableProperty = serde_json::from_str("\"backgroundColor\"").unwrap();
    assert_eq!(p, AnimatableProperty::BackgroundColor);
    let p: AnimatableProperty = serde_json::from_str("\"clipPath\"").unwrap();
    assert_eq!(p, AnimatableProperty::Unknown);
}
