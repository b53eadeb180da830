use super::*;

#[test]
fn resolution_rejects_zero_dimensions() {
    assert!(Resolution::new(0, 1080).is_err());
    assert!(Resolution::new(1920, 0).is_err());
    assert_eq!(
        Resolution::new(1920, 1080).unwrap().size(),
        Size::new(1920.0, 1080.0)
    );
}

#[test]
fn hex_parse_accepts_only_rrggbb() {
    assert_eq!(Rgb8::parse_hex("#FF8000"), Some(Rgb8::new(255, 128, 0)));
    assert_eq!(Rgb8::parse_hex("#0a0b0c"), Some(Rgb8::new(10, 11, 12)));
    assert_eq!(Rgb8::parse_hex("ff8000"), None);
    assert_eq!(Rgb8::parse_hex("#fff"), None);
    assert_eq!(Rgb8::parse_hex("#gg0000"), None);
    assert_eq!(Rgb8::parse_hex("#ff80001"), None);
    assert_eq!(Rgb8::parse_hex("#ééé"), None);
}

#[test]
fn hex_encoding_is_lowercase_and_padded() {
    assert_eq!(Rgb8::new(1, 171, 255).to_hex(), "#01abff");
    let json = serde_json::to_string(&Rgb8::new(0, 0, 0)).unwrap();
    assert_eq!(json, "\"#000000\"");
    let back: Rgb8 = serde_json::from_str("\"#ABCDEF\"").unwrap();
    assert_eq!(back, Rgb8::new(0xab, 0xcd, 0xef));
    assert!(serde_json::from_str::<Rgb8>("\"red\"").is_err());
}

#[test]
fn transform_default_is_identity_around_center() {
    let t = Transform::default();
    assert_eq!(t.to_affine(Size::new(100.0, 50.0)), Affine::IDENTITY);
    assert_eq!(t.pivot(Size::new(100.0, 50.0)), Vec2::new(50.0, 25.0));
}

#[test]
fn transform_translation_and_rotation_about_pivot() {
    let t = Transform {
        x: 10.0,
        y: -2.5,
        ..Transform::default()
    };
    assert_eq!(
        t.to_affine(Size::new(10.0, 10.0)),
        Affine::translate(Vec2::new(10.0, -2.5))
    );

    let r = Transform {
        rotation: 180.0,
        ..Transform::default()
    };
    // A half turn around the center maps the box origin onto the opposite corner.
    let p = r.to_affine(Size::new(10.0, 10.0)) * kurbo::Point::new(0.0, 0.0);
    assert!((p.x - 10.0).abs() < 1e-9);
    assert!((p.y - 10.0).abs() < 1e-9);
}

#[test]
fn transform_json_uses_camel_case_and_defaults() {
    let t: Transform = serde_json::from_str(r#"{"x": 5, "scaleX": 2}"#).unwrap();
    assert_eq!(t.x, 5.0);
    assert_eq!(t.scale_x, 2.0);
    assert_eq!(t.scale_y, 1.0);
    assert_eq!(t.anchor_x, 0.5);
}
