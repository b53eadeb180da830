/// Easing curves used to shape progress between two keyframes.
///
/// Serialized with CSS-style names (`"linear"`, `"ease-in-out"`, `"bounce"`, ...). A custom curve
/// is written as `{"cubic-bezier": [x1, y1, x2, y2]}`. Any other name, including a bare
/// `"cubic-bezier"` without control points, loads as [`Easing::Unrecognized`].
#[derive(Clone, Copy, Debug, Default, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(from = "EasingRepr", into = "EasingRepr")]
pub enum Easing {
    /// Identity.
    #[default]
    Linear,
    /// CSS `ease`: `cubic-bezier(0.25, 0.1, 0.25, 1)`.
    Ease,
    /// CSS `ease-in`: `cubic-bezier(0.42, 0, 1, 1)`.
    EaseIn,
    /// CSS `ease-out`: `cubic-bezier(0, 0, 0.58, 1)`.
    EaseOut,
    /// CSS `ease-in-out`: `cubic-bezier(0.42, 0, 0.58, 1)`.
    EaseInOut,
    /// Cubic Bézier with explicit control points `[x1, y1, x2, y2]`.
    CubicBezier([f64; 4]),
    /// Quarter-cosine ramp, `1 - cos(t * pi / 2)`.
    Spring,
    /// Four-segment ease-out bounce.
    Bounce,
    /// Easing this build does not understand. Eases linearly and saves as `"linear"`.
    Unrecognized,
}

#[derive(serde::Serialize, serde::Deserialize)]
#[serde(untagged)]
enum EasingRepr {
    Name(String),
    Custom {
        #[serde(rename = "cubic-bezier")]
        cubic_bezier: [f64; 4],
    },
    Other(serde_json::Value),
}

impl From<EasingRepr> for Easing {
    fn from(repr: EasingRepr) -> Self {
        match repr {
            EasingRepr::Custom { cubic_bezier } => Self::CubicBezier(cubic_bezier),
            EasingRepr::Name(name) => Self::NAMED
                .into_iter()
                .find(|e| e.name() == name)
                .unwrap_or(Self::Unrecognized),
            EasingRepr::Other(_) => Self::Unrecognized,
        }
    }
}

impl From<Easing> for EasingRepr {
    fn from(easing: Easing) -> Self {
        match easing {
            Easing::CubicBezier(cubic_bezier) => Self::Custom { cubic_bezier },
            named => Self::Name(named.name().to_owned()),
        }
    }
}

const NEWTON_ITERATIONS: usize = 8;
const NEWTON_EPSILON: f64 = 1e-6;

impl Easing {
    /// Every named easing, handy for exhaustive checks.
    pub const NAMED: [Easing; 7] = [
        Easing::Linear,
        Easing::Ease,
        Easing::EaseIn,
        Easing::EaseOut,
        Easing::EaseInOut,
        Easing::Spring,
        Easing::Bounce,
    ];

    /// CSS-style name. Custom curves report `"cubic-bezier"`.
    pub fn name(self) -> &'static str {
        match self {
            Self::Linear | Self::Unrecognized => "linear",
            Self::Ease => "ease",
            Self::EaseIn => "ease-in",
            Self::EaseOut => "ease-out",
            Self::EaseInOut => "ease-in-out",
            Self::CubicBezier(_) => "cubic-bezier",
            Self::Spring => "spring",
            Self::Bounce => "bounce",
        }
    }

    /// Map normalized progress `t` to eased progress.
    ///
    /// Input is clamped into `[0, 1]` (NaN reads as 0). Both endpoints are exact for every curve.
    pub fn apply(self, t: f64) -> f64 {
        if t.is_nan() || t <= 0.0 {
            return 0.0;
        }
        if t >= 1.0 {
            return 1.0;
        }
        match self {
            Self::Linear | Self::Unrecognized => t,
            Self::Ease => cubic_bezier(t, 0.25, 0.1, 0.25, 1.0),
            Self::EaseIn => cubic_bezier(t, 0.42, 0.0, 1.0, 1.0),
            Self::EaseOut => cubic_bezier(t, 0.0, 0.0, 0.58, 1.0),
            Self::EaseInOut => cubic_bezier(t, 0.42, 0.0, 0.58, 1.0),
            Self::CubicBezier([x1, y1, x2, y2]) => cubic_bezier(t, x1, y1, x2, y2),
            Self::Spring => 1.0 - (t * std::f64::consts::FRAC_PI_2).cos(),
            Self::Bounce => bounce_out(t),
        }
    }
}

/// Eased progress of `easing` at `t`; shorthand for [`Easing::apply`].
pub fn ease(easing: Easing, t: f64) -> f64 {
    easing.apply(t)
}

/// Solve the unit cubic Bézier `(0,0) (x1,y1) (x2,y2) (1,1)` for `y` at `x`.
fn cubic_bezier(x: f64, x1: f64, y1: f64, x2: f64, y2: f64) -> f64 {
    let cx = 3.0 * x1;
    let bx = 3.0 * (x2 - x1) - cx;
    let ax = 1.0 - cx - bx;

    let cy = 3.0 * y1;
    let by = 3.0 * (y2 - y1) - cy;
    let ay = 1.0 - cy - by;

    let curve_x = |s: f64| ((ax * s + bx) * s + cx) * s;
    let curve_y = |s: f64| ((ay * s + by) * s + cy) * s;
    let slope_x = |s: f64| (3.0 * ax * s + 2.0 * bx) * s + cx;

    let mut s = x;
    for _ in 0..NEWTON_ITERATIONS {
        let err = curve_x(s) - x;
        if err.abs() < NEWTON_EPSILON {
            break;
        }
        let d = slope_x(s);
        if d.abs() < NEWTON_EPSILON {
            break;
        }
        s -= err / d;
    }
    curve_y(s)
}

fn bounce_out(t: f64) -> f64 {
    const N: f64 = 7.5625;
    const D: f64 = 2.75;
    if t < 1.0 / D {
        N * t * t
    } else if t < 2.0 / D {
        let t = t - 1.5 / D;
        N * t * t + 0.75
    } else if t < 2.5 / D {
        let t = t - 2.25 / D;
        N * t * t + 0.9375
    } else {
        let t = t - 2.625 / D;
        N * t * t + 0.984375
    }
}

#[cfg(test)]
#[path = "../../tests/unit/animation/ease.rs"]
mod tests;
