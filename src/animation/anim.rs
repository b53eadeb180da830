use crate::animation::apply::AnimatableProperty;
use crate::animation::ease::Easing;
use crate::animation::keyframe::{Keyframe, resolve};
use crate::animation::progress::{Direction, FillMode, Iterations, progress_of};
use crate::animation::value::Value;

/// A keyframed animation of one layer property.
///
/// Time values are seconds relative to the owning layer's `startTime`; keyframe times are fractions
/// of `duration`.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Animation {
    #[serde(default)]
    pub id: String,
    pub property: AnimatableProperty,
    pub keyframes: Vec<Keyframe>,
    /// Easing for segments whose end keyframe has no override.
    #[serde(default)]
    pub easing: Easing,
    /// Length of one iteration in seconds (`> 0`).
    pub duration: f64,
    /// Seconds after layer start before the first iteration begins (`>= 0`).
    #[serde(default)]
    pub delay: f64,
    #[serde(default)]
    pub iterations: Iterations,
    #[serde(default)]
    pub direction: Direction,
    #[serde(default)]
    pub fill: FillMode,
}

impl Animation {
    /// Progress in `[0, 1]` at `layer_time`, or `None` when inactive.
    pub fn progress(&self, layer_time: f64) -> Option<f64> {
        progress_of(self, layer_time)
    }

    /// Resolved value at `layer_time`, or `None` when inactive or without keyframes.
    pub fn sample(&self, layer_time: f64) -> Option<Value> {
        let p = self.progress(layer_time)?;
        resolve(&self.keyframes, p, self.easing)
    }

    /// `true` when keyframe times never decrease.
    pub fn is_sorted(&self) -> bool {
        self.keyframes.windows(2).all(|w| w[0].time <= w[1].time)
    }

    /// Authoring problems that do not stop playback but make this animation misbehave.
    pub fn diagnostics(&self) -> Vec<String> {
        let mut out = Vec::new();
        if !(self.duration > 0.0 && self.duration.is_finite()) {
            out.push(format!("duration must be > 0 (got {})", self.duration));
        }
        if !(self.delay >= 0.0 && self.delay.is_finite()) {
            out.push(format!("delay must be >= 0 (got {})", self.delay));
        }
        if self.iterations == Iterations::Count(0) {
            out.push("iterations must be >= 1".to_owned());
        }
        if self.keyframes.is_empty() {
            out.push("has no keyframes".to_owned());
        }
        if let Some(k) = self
            .keyframes
            .iter()
            .find(|k| !(0.0..=1.0).contains(&k.time))
        {
            out.push(format!("keyframe time {} is outside [0, 1]", k.time));
        }
        if !self.is_sorted() {
            out.push("keyframes are not sorted by time".to_owned());
        }
        let unrecognized = |e: Easing| e == Easing::Unrecognized;
        if unrecognized(self.easing)
            || self.keyframes.iter().filter_map(|k| k.easing).any(unrecognized)
        {
            out.push("easing is not recognized, easing linearly".to_owned());
        }
        if self.direction == Direction::Unrecognized {
            out.push("direction is not recognized, running forward".to_owned());
        }
        if self.property == AnimatableProperty::Unknown {
            out.push("targets a property this engine does not know".to_owned());
        }
        out
    }
}

#[cfg(test)]
#[path = "../../tests/unit/animation/anim.rs"]
mod tests;
