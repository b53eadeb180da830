use crate::animation::ease::Easing;
use crate::animation::value::{Value, interpolate};

/// One keyframe of an animation.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Keyframe {
    /// Position as a fraction of the animation's own duration, `[0, 1]`.
    pub time: f64,
    /// Value reached at `time`.
    pub value: Value,
    /// Easing used on the segment that ends at this keyframe; falls back to the animation's.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub easing: Option<Easing>,
}

impl Keyframe {
    /// Keyframe without an easing override.
    pub fn new(time: f64, value: impl Into<Value>) -> Self {
        Self {
            time,
            value: value.into(),
            easing: None,
        }
    }

    /// Override the easing of the segment ending at this keyframe.
    pub fn with_easing(mut self, easing: Easing) -> Self {
        self.easing = Some(easing);
        self
    }
}

/// Resolve the value of a keyframe track at `progress`.
///
/// Returns `None` for an empty track. Progress outside the authored range clamps to the first or
/// last keyframe. Unsorted tracks never panic: the first bracketing pair found wins.
pub fn resolve(keyframes: &[Keyframe], progress: f64, fallback: Easing) -> Option<Value> {
    let (first, last) = match keyframes {
        [] => return None,
        [only] => return Some(only.value.clone()),
        [first, .., last] => (first, last),
    };

    let Some((a, b)) = keyframes
        .windows(2)
        .map(|w| (&w[0], &w[1]))
        .find(|(a, b)| a.time <= progress && progress <= b.time)
    else {
        let clamped = if progress.is_nan() || progress < first.time {
            first
        } else {
            last
        };
        return Some(clamped.value.clone());
    };

    let span = b.time - a.time;
    let local = if span == 0.0 {
        0.0
    } else {
        (progress - a.time) / span
    };
    let eased = b.easing.unwrap_or(fallback).apply(local);
    Some(interpolate(&a.value, &b.value, eased))
}

#[cfg(test)]
#[path = "../../tests/unit/animation/keyframe.rs"]
mod tests;
