use crate::animation::anim::Animation;

/// Playback direction across iterations, as in CSS `animation-direction`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Direction {
    /// Every iteration runs forward.
    #[default]
    Normal,
    /// Every iteration runs backward.
    Reverse,
    /// Odd iterations run backward.
    Alternate,
    /// Even iterations run backward.
    AlternateReverse,
    /// Direction name this build does not understand; runs forward.
    #[serde(other)]
    Unrecognized,
}

impl Direction {
    /// Map raw progress of iteration `iteration` (0-based) into directed progress.
    pub fn apply(self, raw: f64, iteration: u64) -> f64 {
        let odd = iteration % 2 == 1;
        let flip = match self {
            Self::Normal | Self::Unrecognized => false,
            Self::Reverse => true,
            Self::Alternate => odd,
            Self::AlternateReverse => !odd,
        };
        if flip { 1.0 - raw } else { raw }
    }
}

/// Number of times an animation runs.
///
/// JSON form is a positive integer or the string `"infinite"`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(try_from = "IterationsRepr", into = "IterationsRepr")]
pub enum Iterations {
    /// Run `n` times.
    Count(u32),
    /// Repeat forever.
    Infinite,
}

impl Default for Iterations {
    fn default() -> Self {
        Self::Count(1)
    }
}

impl Iterations {
    /// Finite count, or `None` when infinite.
    pub fn count(self) -> Option<u32> {
        match self {
            Self::Count(n) => Some(n),
            Self::Infinite => None,
        }
    }
}

#[derive(serde::Serialize, serde::Deserialize)]
#[serde(untagged)]
enum IterationsRepr {
    Count(u32),
    Keyword(String),
}

impl TryFrom<IterationsRepr> for Iterations {
    type Error = String;

    fn try_from(repr: IterationsRepr) -> Result<Self, Self::Error> {
        match repr {
            IterationsRepr::Count(n) => Ok(Self::Count(n)),
            IterationsRepr::Keyword(k) if k == "infinite" => Ok(Self::Infinite),
            IterationsRepr::Keyword(k) => Err(format!(
                "iterations must be a positive integer or \"infinite\", got '{k}'"
            )),
        }
    }
}

impl From<Iterations> for IterationsRepr {
    fn from(it: Iterations) -> Self {
        match it {
            Iterations::Count(n) => Self::Count(n),
            Iterations::Infinite => Self::Keyword("infinite".to_owned()),
        }
    }
}

/// What a finished finite animation contributes after its last iteration.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum FillMode {
    /// Stop contributing; the property reverts to its authored value.
    #[default]
    None,
    /// Keep contributing the final value of the last iteration.
    Hold,
}

/// Progress of `anim` at `layer_time` seconds after its layer's start.
///
/// `None` means the animation is inactive: before its delay, past the end of a finite run (unless
/// it holds), or degenerate (non-positive duration, zero iterations, non-finite time). The final
/// instant of a finite run resolves to the end of the last iteration.
pub fn progress_of(anim: &Animation, layer_time: f64) -> Option<f64> {
    let duration = anim.duration;
    if !(duration > 0.0 && duration.is_finite()) || !layer_time.is_finite() {
        return None;
    }
    if layer_time < anim.delay {
        return None;
    }

    let anim_time = layer_time - anim.delay;
    let (raw, iteration) = match anim.iterations.count() {
        None => cycle(anim_time, duration),
        Some(0) => return None,
        Some(n) => {
            let span = duration * f64::from(n);
            let last = u64::from(n - 1);
            if anim_time < span {
                let (raw, iteration) = cycle(anim_time, duration);
                (raw, iteration.min(last))
            } else if anim_time == span || anim.fill == FillMode::Hold {
                (1.0, last)
            } else {
                return None;
            }
        }
    };

    Some(anim.direction.apply(raw, iteration).clamp(0.0, 1.0))
}

fn cycle(anim_time: f64, duration: f64) -> (f64, u64) {
    let raw = (anim_time % duration) / duration;
    let iteration = (anim_time / duration).floor() as u64;
    (raw, iteration)
}

#[cfg(test)]
#[path = "../../tests/unit/animation/progress.rs"]
mod tests;
