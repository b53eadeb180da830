use std::collections::BTreeMap;

use crate::foundation::core::Rgb8;

/// Interpolation contract for concrete animation value types.
pub trait Lerp: Sized {
    /// Interpolate from `a` to `b` with normalized factor `t`.
    fn lerp(a: &Self, b: &Self, t: f64) -> Self;
}

impl Lerp for f64 {
    // Weighted form keeps both endpoints exact.
    fn lerp(a: &Self, b: &Self, t: f64) -> Self {
        a * (1.0 - t) + b * t
    }
}

impl Lerp for Rgb8 {
    fn lerp(a: &Self, b: &Self, t: f64) -> Self {
        fn lerp_u8(a: u8, b: u8, t: f64) -> u8 {
            let a = f64::from(a);
            let b = f64::from(b);
            // Round half up, matching how editors quantize color channels.
            (a + (b - a) * t + 0.5).floor().clamp(0.0, 255.0) as u8
        }

        Self {
            r: lerp_u8(a.r, b.r, t),
            g: lerp_u8(a.g, b.g, t),
            b: lerp_u8(a.b, b.b, t),
        }
    }
}

/// Keyframe value.
///
/// The JSON form is untagged: numbers, booleans, `"#rrggbb"` strings (colors), other strings,
/// arrays, and objects. Variant order matters for deserialization: a string only becomes
/// [`Value::Text`] when it is not a valid hex color.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(untagged)]
pub enum Value {
    /// Scalar number.
    Number(f64),
    /// Boolean flag (interpolated discretely).
    Bool(bool),
    /// RGB color.
    Color(Rgb8),
    /// Free text (interpolated discretely).
    Text(String),
    /// Ordered list of values.
    Sequence(Vec<Value>),
    /// Keyed record of values.
    Record(BTreeMap<String, Value>),
}

impl Value {
    /// Numeric payload, if this is a number.
    pub fn as_number(&self) -> Option<f64> {
        match self {
            Self::Number(n) => Some(*n),
            _ => None,
        }
    }

    /// Color payload, if this is a color.
    pub fn as_color(&self) -> Option<Rgb8> {
        match self {
            Self::Color(c) => Some(*c),
            _ => None,
        }
    }

    /// `true` for colors and for text that claims to be one (`#...`).
    fn is_hex_like(&self) -> bool {
        match self {
            Self::Color(_) => true,
            Self::Text(s) => s.starts_with('#'),
            _ => false,
        }
    }
}

impl From<f64> for Value {
    fn from(v: f64) -> Self {
        Self::Number(v)
    }
}

impl From<Rgb8> for Value {
    fn from(c: Rgb8) -> Self {
        Self::Color(c)
    }
}

impl From<bool> for Value {
    fn from(v: bool) -> Self {
        Self::Bool(v)
    }
}

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        match Rgb8::parse_hex(s) {
            Some(c) => Self::Color(c),
            None => Self::Text(s.to_owned()),
        }
    }
}

impl<T: Into<Value>> From<Vec<T>> for Value {
    fn from(items: Vec<T>) -> Self {
        Self::Sequence(items.into_iter().map(Into::into).collect())
    }
}

impl Lerp for Value {
    fn lerp(a: &Self, b: &Self, t: f64) -> Self {
        interpolate(a, b, t)
    }
}

/// Interpolate between two keyframe values at progress `t`.
///
/// Numbers and colors blend continuously, sequences and records recurse structurally, and every
/// other pairing switches from `start` to `end` at `t = 0.5`. A malformed hex color on either side
/// yields `start` unchanged.
pub fn interpolate(start: &Value, end: &Value, t: f64) -> Value {
    match (start, end) {
        (Value::Number(a), Value::Number(b)) => Value::Number(f64::lerp(a, b, t)),
        (Value::Color(a), Value::Color(b)) => Value::Color(Rgb8::lerp(a, b, t)),
        _ if start.is_hex_like() && end.is_hex_like() => start.clone(),
        (Value::Sequence(a), Value::Sequence(b)) => {
            let len = a.len().max(b.len());
            let items = (0..len)
                .filter_map(|i| match (a.get(i), b.get(i)) {
                    (Some(x), Some(y)) => Some(interpolate(x, y, t)),
                    (Some(only), None) | (None, Some(only)) => Some(only.clone()),
                    (None, None) => None,
                })
                .collect();
            Value::Sequence(items)
        }
        (Value::Record(a), Value::Record(b)) => {
            let mut out = BTreeMap::new();
            for (k, x) in a {
                let v = match b.get(k) {
                    Some(y) => interpolate(x, y, t),
                    None => x.clone(),
                };
                out.insert(k.clone(), v);
            }
            for (k, y) in b {
                out.entry(k.clone()).or_insert_with(|| y.clone());
            }
            Value::Record(out)
        }
        _ => discrete(start, end, t),
    }
}

fn discrete(start: &Value, end: &Value, t: f64) -> Value {
    if t < 0.5 { start.clone() } else { end.clone() }
}

#[cfg(test)]
#[path = "../../tests/unit/animation/value.rs"]
mod tests;
