use crate::animation::anim::Animation;
use crate::animation::apply::{AnimatableProperty, LayerState};
use crate::animation::ease::Easing;
use crate::animation::keyframe::Keyframe;
use crate::animation::progress::{Direction, FillMode, Iterations};
use crate::animation::value::Value;
use crate::foundation::core::{Resolution, Transform};
use crate::foundation::error::{KineticError, KineticResult};
use crate::project::model::{
    BlendMode, Effect, Layer, LayerData, LayerKind, Marker, Project, Settings, Timeline,
};

pub struct ProjectBuilder {
    id: String,
    name: String,
    description: Option<String>,
    duration: f64,
    fps: f64,
    resolution: Resolution,
    layers: Vec<Layer>,
    timeline: Timeline,
    settings: Settings,
}

impl ProjectBuilder {
    pub fn new(id: impl Into<String>, duration: f64, fps: f64, resolution: Resolution) -> Self {
        let id = id.into();
        Self {
            name: id.clone(),
            id,
            description: None,
            duration,
            fps,
            resolution,
            layers: Vec::new(),
            timeline: Timeline::default(),
            settings: Settings::default(),
        }
    }

    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    pub fn layer(mut self, layer: Layer) -> Self {
        self.layers.push(layer);
        self
    }

    pub fn layers(mut self, layers: impl IntoIterator<Item = Layer>) -> Self {
        self.layers.extend(layers);
        self
    }

    pub fn playback_rate(mut self, rate: f64) -> Self {
        self.timeline.playback_rate = rate;
        self
    }

    pub fn looping(mut self, on: bool) -> Self {
        self.timeline.loop_ = on;
        self
    }

    pub fn marker(mut self, id: impl Into<String>, time: f64, label: impl Into<String>) -> Self {
        self.timeline.markers.push(Marker {
            id: id.into(),
            time,
            label: label.into(),
            color: String::new(),
        });
        self
    }

    pub fn settings(mut self, settings: Settings) -> Self {
        self.settings = settings;
        self
    }

    pub fn build(self) -> KineticResult<Project> {
        if self.layers.iter().any(|l| l.id.trim().is_empty()) {
            return Err(KineticError::validation("layer id must be non-empty"));
        }
        let mut timeline = self.timeline;
        timeline.view_end = self.duration;
        let project = Project {
            id: self.id,
            name: self.name,
            description: self.description,
            duration: self.duration,
            fps: self.fps,
            resolution: self.resolution,
            layers: self.layers,
            timeline,
            settings: self.settings,
        };
        project.validate()?;
        Ok(project)
    }
}

pub struct LayerBuilder {
    id: String,
    name: Option<String>,
    kind: LayerKind,
    visible: bool,
    locked: bool,
    opacity: f64,
    blend_mode: BlendMode,
    start_time: f64,
    end_time: f64,
    z_index: i32,
    transform: Transform,
    animations: Vec<Animation>,
    effects: Vec<Effect>,
    data: LayerData,
}

impl LayerBuilder {
    pub fn new(id: impl Into<String>, kind: LayerKind, start_time: f64, end_time: f64) -> Self {
        Self {
            id: id.into(),
            name: None,
            kind,
            visible: true,
            locked: false,
            opacity: 1.0,
            blend_mode: BlendMode::Normal,
            start_time,
            end_time,
            z_index: 0,
            transform: Transform::default(),
            animations: Vec::new(),
            effects: Vec::new(),
            data: LayerData::default(),
        }
    }

    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    pub fn visible(mut self, visible: bool) -> Self {
        self.visible = visible;
        self
    }

    pub fn locked(mut self, locked: bool) -> Self {
        self.locked = locked;
        self
    }

    pub fn opacity(mut self, opacity: f64) -> Self {
        self.opacity = opacity;
        self
    }

    pub fn blend_mode(mut self, mode: BlendMode) -> Self {
        self.blend_mode = mode;
        self
    }

    pub fn z_index(mut self, z: i32) -> Self {
        self.z_index = z;
        self
    }

    pub fn transform(mut self, transform: Transform) -> Self {
        self.transform = transform;
        self
    }

    pub fn position(mut self, x: f64, y: f64) -> Self {
        self.transform.x = x;
        self.transform.y = y;
        self
    }

    pub fn animation(mut self, anim: Animation) -> Self {
        self.animations.push(anim);
        self
    }

    pub fn effect(mut self, kind: impl Into<String>, parameters: serde_json::Value) -> Self {
        let kind = kind.into();
        self.effects.push(Effect {
            id: format!("{}-fx{}", self.id, self.effects.len()),
            name: None,
            kind,
            enabled: true,
            parameters,
        });
        self
    }

    pub fn data(mut self, data: LayerData) -> Self {
        self.data = data;
        self
    }

    pub fn build(self) -> KineticResult<Layer> {
        if self.id.trim().is_empty() {
            return Err(KineticError::validation("layer id must be non-empty"));
        }
        if !(self.start_time.is_finite() && self.end_time.is_finite())
            || self.start_time > self.end_time
        {
            return Err(KineticError::validation(format!(
                "layer '{}' has invalid window [{}, {}]",
                self.id, self.start_time, self.end_time
            )));
        }
        if !(0.0..=1.0).contains(&self.opacity) {
            return Err(KineticError::validation(format!(
                "layer '{}' opacity must be in [0, 1]",
                self.id
            )));
        }

        let mut layer = Layer {
            name: self.name.unwrap_or_else(|| self.id.clone()),
            id: self.id,
            kind: self.kind,
            visible: self.visible,
            locked: self.locked,
            opacity: self.opacity,
            blend_mode: self.blend_mode,
            start_time: self.start_time,
            end_time: self.end_time,
            z_index: self.z_index,
            transform: self.transform,
            animations: self.animations,
            effects: self.effects,
            data: self.data,
            state: LayerState::default(),
        };
        layer.reset_state();
        Ok(layer)
    }
}

pub struct AnimationBuilder {
    id: String,
    property: AnimatableProperty,
    keyframes: Vec<Keyframe>,
    easing: Easing,
    duration: f64,
    delay: f64,
    iterations: Iterations,
    direction: Direction,
    fill: FillMode,
}

impl AnimationBuilder {
    pub fn new(property: AnimatableProperty, duration: f64) -> Self {
        Self {
            id: String::new(),
            property,
            keyframes: Vec::new(),
            easing: Easing::Linear,
            duration,
            delay: 0.0,
            iterations: Iterations::Count(1),
            direction: Direction::Normal,
            fill: FillMode::None,
        }
    }

    pub fn id(mut self, id: impl Into<String>) -> Self {
        self.id = id.into();
        self
    }

    pub fn keyframe(mut self, time: f64, value: impl Into<Value>) -> Self {
        self.keyframes.push(Keyframe::new(time, value));
        self
    }

    pub fn keyframe_eased(mut self, time: f64, value: impl Into<Value>, easing: Easing) -> Self {
        self.keyframes
            .push(Keyframe::new(time, value).with_easing(easing));
        self
    }

    pub fn easing(mut self, easing: Easing) -> Self {
        self.easing = easing;
        self
    }

    pub fn delay(mut self, delay: f64) -> Self {
        self.delay = delay;
        self
    }

    pub fn iterations(mut self, iterations: Iterations) -> Self {
        self.iterations = iterations;
        self
    }

    pub fn direction(mut self, direction: Direction) -> Self {
        self.direction = direction;
        self
    }

    pub fn fill(mut self, fill: FillMode) -> Self {
        self.fill = fill;
        self
    }

    /// Build the animation, rejecting anything [`Animation::diagnostics`] would report.
    pub fn build(self) -> KineticResult<Animation> {
        let anim = Animation {
            id: self.id,
            property: self.property,
            keyframes: self.keyframes,
            easing: self.easing,
            duration: self.duration,
            delay: self.delay,
            iterations: self.iterations,
            direction: self.direction,
            fill: self.fill,
        };
        let problems = anim.diagnostics();
        if !problems.is_empty() {
            return Err(KineticError::animation(format!(
                "animation '{}': {}",
                anim.id,
                problems.join("; ")
            )));
        }
        Ok(anim)
    }
}

#[cfg(test)]
#[path = "../../tests/unit/project/dsl.rs"]
mod tests;
