use super::*;

fn record(pairs: &[(&str, Value)]) -> Value {
    Value::Record(
        pairs
            .iter()
            .map(|(k, v)| ((*k).to_owned(), v.clone()))
            .collect(),
    )
}

#[test]
fn numbers_lerp_with_exact_endpoints() {
    let a = Value::Number(0.1);
    let b = Value::Number(0.7);
    assert_eq!(interpolate(&a, &b, 0.0), a);
    assert_eq!(interpolate(&a, &b, 1.0), b);
    assert_eq!(
        interpolate(&Value::Number(0.0), &Value::Number(100.0), 0.25),
        Value::Number(25.0)
    );
}

#[test]
fn color_midpoint_rounds_half_up() {
    let v = interpolate(&Value::from("#000000"), &Value::from("#ffffff"), 0.5);
    assert_eq!(v, Value::Color(Rgb8::new(0x80, 0x80, 0x80)));
    assert_eq!(serde_json::to_string(&v).unwrap(), "\"#808080\"");
}

#[test]
fn color_channels_interpolate_independently() {
    let v = interpolate(&Value::from("#ff0000"), &Value::from("#0000ff"), 0.25);
    assert_eq!(v, Value::Color(Rgb8::new(191, 0, 64)));
}

#[test]
fn malformed_hex_returns_start() {
    let start = Value::Text("#12".to_owned());
    let end = Value::from("#ffffff");
    assert_eq!(interpolate(&start, &end, 0.9), start);

    let start = Value::from("#000000");
    let end = Value::Text("#nothex".to_owned());
    assert_eq!(interpolate(&start, &end, 0.9), start);
}

#[test]
fn sequences_recurse_and_keep_longer_tail() {
    let a = Value::from(vec![0.0, 10.0]);
    let b = Value::from(vec![10.0, 20.0, 99.0]);
    assert_eq!(
        interpolate(&a, &b, 0.5),
        Value::from(vec![5.0, 15.0, 99.0])
    );
    assert_eq!(
        interpolate(&b, &a, 0.5),
        Value::from(vec![5.0, 15.0, 99.0])
    );
}

#[test]
fn records_union_keys() {
    let a = record(&[("x", Value::Number(0.0)), ("only_a", Value::Bool(true))]);
    let b = record(&[
        ("x", Value::Number(8.0)),
        ("only_b", Value::from("#ffffff")),
    ]);
    let v = interpolate(&a, &b, 0.25);
    assert_eq!(
        v,
        record(&[
            ("only_a", Value::Bool(true)),
            ("only_b", Value::from("#ffffff")),
            ("x", Value::Number(2.0)),
        ])
    );
}

#[test]
fn discrete_values_switch_at_half() {
    let a = Value::Text("left".to_owned());
    let b = Value::Text("right".to_owned());
    assert_eq!(interpolate(&a, &b, 0.49), a);
    assert_eq!(interpolate(&a, &b, 0.5), b);

    // Mismatched shapes are discrete too.
    let n = Value::Number(1.0);
    let c = Value::from("#ffffff");
    assert_eq!(interpolate(&n, &c, 0.2), n);
    assert_eq!(interpolate(&n, &c, 0.8), c);
}

#[test]
fn untagged_json_picks_the_right_variant() {
    let v: Value = serde_json::from_str(
        r##"[1, true, "#A0B0C0", "hello", {"k": [2.5]}]"##,
    )
    .unwrap();
    let Value::Sequence(items) = v else {
        panic!("expected a sequence");
    };
    assert_eq!(items[0], Value::Number(1.0));
    assert_eq!(items[1], Value::Bool(true));
    assert_eq!(items[2], Value::Color(Rgb8::new(0xa0, 0xb0, 0xc0)));
    assert_eq!(items[3], Value::Text("hello".to_owned()));
    assert_eq!(items[4], record(&[("k", Value::from(vec![2.5]))]));
}
