//! Kinetic is a keyframe animation engine for timed, layered motion graphics.
//!
//! Load a [`Project`], drive it with an [`Engine`], and read each layer's resolved
//! [`LayerState`] for rendering:
//!
//! - `animation`: easing, value interpolation, keyframe resolution, progress, property writes
//! - `project`: the JSON document model, builders and presets
//! - `playback`: clock, frame scheduling, commands and telemetry
#![forbid(unsafe_code)]

mod foundation;

pub mod animation;
pub mod playback;
pub mod project;

pub use crate::foundation::core::{Affine, Resolution, Rgb8, Size, Transform, Vec2};
pub use crate::foundation::error::{KineticError, KineticResult};

pub use crate::animation::anim::Animation;
pub use crate::animation::apply::{AnimatableProperty, Appearance, ApplyOutcome, LayerState, apply};
pub use crate::animation::ease::{Easing, ease};
pub use crate::animation::keyframe::{Keyframe, resolve};
pub use crate::animation::progress::{Direction, FillMode, Iterations, progress_of};
pub use crate::animation::value::{Lerp, Value, interpolate};
pub use crate::playback::clock::{Clock, ManualClock, SystemClock};
pub use crate::playback::engine::{Command, Engine, PlaybackEvent};
pub use crate::playback::scheduler::{FrameScheduler, FrameTicket, ManualScheduler};
pub use crate::playback::telemetry::PerformanceMetrics;
pub use crate::project::dsl::{AnimationBuilder, LayerBuilder, ProjectBuilder};
pub use crate::project::eval::{EvaluatedLayer, snapshot};
pub use crate::project::model::{
    BlendMode, Effect, Layer, LayerData, LayerKind, Marker, Project, Settings, Timeline,
};
