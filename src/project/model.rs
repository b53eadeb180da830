use std::collections::HashSet;
use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use crate::animation::anim::Animation;
use crate::animation::apply::LayerState;
use crate::foundation::core::{Resolution, Transform, Vec2};
use crate::foundation::error::{KineticError, KineticResult};

/// An animated video project: timed layers on one timeline.
///
/// This is the JSON-facing document the editor saves. Everything the engine computes at runtime
/// lives in each layer's [`Layer::state`] and is never serialized.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Project {
    pub id: String,
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Total length in seconds.
    pub duration: f64,
    /// Nominal frame rate of the exported video.
    pub fps: f64,
    pub resolution: Resolution,
    #[serde(default)]
    pub layers: Vec<Layer>,
    #[serde(default)]
    pub timeline: Timeline,
    #[serde(default)]
    pub settings: Settings,
}

impl Project {
    /// Parse a project from a JSON reader.
    pub fn from_reader<R: std::io::Read>(r: R) -> KineticResult<Self> {
        serde_json::from_reader(r)
            .map_err(|e| KineticError::serde(format!("parse project JSON: {e}")))
    }

    /// Parse a project from a JSON file on disk.
    pub fn from_path(path: impl AsRef<Path>) -> KineticResult<Self> {
        let path = path.as_ref();
        let f = File::open(path).map_err(|e| {
            KineticError::validation(format!("open project JSON '{}': {e}", path.display()))
        })?;
        Self::from_reader(BufReader::new(f))
    }

    /// Reject projects the engine cannot play at all.
    pub fn validate(&self) -> KineticResult<()> {
        if !(self.duration.is_finite() && self.duration > 0.0) {
            return Err(KineticError::validation(format!(
                "project duration must be > 0 seconds (got {})",
                self.duration
            )));
        }
        if !(self.fps.is_finite() && self.fps > 0.0) {
            return Err(KineticError::validation(format!(
                "project fps must be > 0 (got {})",
                self.fps
            )));
        }
        if self.resolution.width == 0 || self.resolution.height == 0 {
            return Err(KineticError::validation(
                "resolution width/height must be > 0",
            ));
        }
        let rate = self.timeline.playback_rate;
        if !(rate.is_finite() && rate > 0.0) {
            return Err(KineticError::validation(format!(
                "timeline playbackRate must be > 0 (got {rate})"
            )));
        }

        for layer in &self.layers {
            if !(layer.start_time.is_finite() && layer.end_time.is_finite()) {
                return Err(KineticError::validation(format!(
                    "layer '{}' has a non-finite time window",
                    layer.id
                )));
            }
            if layer.start_time > layer.end_time {
                return Err(KineticError::validation(format!(
                    "layer '{}' has invalid window (startTime > endTime)",
                    layer.id
                )));
            }
        }

        Ok(())
    }

    /// Authoring problems that do not block playback, one message per problem.
    pub fn diagnostics(&self) -> Vec<String> {
        let mut out = Vec::new();
        let mut seen = HashSet::new();

        for layer in &self.layers {
            if !seen.insert(layer.id.as_str()) {
                out.push(format!("layer '{}': duplicate layer id", layer.id));
            }
            if !(0.0..=1.0).contains(&layer.opacity) {
                out.push(format!(
                    "layer '{}': opacity {} is outside [0, 1]",
                    layer.id, layer.opacity
                ));
            }
            if layer.start_time < 0.0 || layer.end_time > self.duration {
                out.push(format!(
                    "layer '{}': window [{}, {}] extends past the project [0, {}]",
                    layer.id, layer.start_time, layer.end_time, self.duration
                ));
            }
            for anim in &layer.animations {
                out.extend(
                    anim.diagnostics()
                        .into_iter()
                        .map(|msg| format!("layer '{}' animation '{}': {msg}", layer.id, anim.id)),
                );
            }
        }

        out
    }

    /// Number of effects across all layers.
    pub fn effect_count(&self) -> usize {
        self.layers.iter().map(|l| l.effects.len()).sum()
    }

    /// Look up a layer by id.
    pub fn layer(&self, id: &str) -> Option<&Layer> {
        self.layers.iter().find(|l| l.id == id)
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum LayerKind {
    #[default]
    Text,
    Image,
    Shape,
    Video,
    Audio,
    Particle,
    Mask,
    Adjustment,
}

/// Compositing operator, carried for the renderer.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum BlendMode {
    #[default]
    Normal,
    Multiply,
    Screen,
    Overlay,
    SoftLight,
    HardLight,
    ColorDodge,
    ColorBurn,
    Darken,
    Lighten,
    Difference,
    Exclusion,
}

/// A visual element placed on the timeline between `start_time` and `end_time`.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Layer {
    pub id: String,
    #[serde(default)]
    pub name: String,
    #[serde(rename = "type", default)]
    pub kind: LayerKind,
    #[serde(default = "default_true")]
    pub visible: bool,
    #[serde(default)]
    pub locked: bool,
    /// Base opacity in `[0, 1]`.
    #[serde(default = "default_opacity")]
    pub opacity: f64,
    #[serde(default)]
    pub blend_mode: BlendMode,
    /// Timeline second the layer appears.
    #[serde(default)]
    pub start_time: f64,
    /// Timeline second the layer disappears (inclusive).
    pub end_time: f64,
    #[serde(default)]
    pub z_index: i32,
    #[serde(default)]
    pub transform: Transform,
    /// Applied in order; later animations of the same property win.
    #[serde(default)]
    pub animations: Vec<Animation>,
    #[serde(default)]
    pub effects: Vec<Effect>,
    #[serde(default)]
    pub data: LayerData,
    /// Resolved state for the current timeline position.
    #[serde(skip)]
    pub state: LayerState,
}

fn default_true() -> bool {
    true
}

fn default_opacity() -> f64 {
    1.0
}

impl Layer {
    /// Reset live state to the authored transform and opacity.
    pub fn reset_state(&mut self) {
        self.state = LayerState::authored(self.transform, self.opacity.clamp(0.0, 1.0));
    }

    /// `true` when `time` lies inside `[start_time, end_time]`.
    pub fn contains(&self, time: f64) -> bool {
        self.start_time <= time && time <= self.end_time
    }

    /// Seconds since the layer appeared.
    pub fn local_time(&self, time: f64) -> f64 {
        time - self.start_time
    }
}

/// Renderer effect attached to a layer. Opaque to the engine.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Effect {
    #[serde(default)]
    pub id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(rename = "type")]
    pub kind: String,
    #[serde(default = "default_true")]
    pub enabled: bool,
    #[serde(default, skip_serializing_if = "serde_json::Value::is_null")]
    pub parameters: serde_json::Value,
}

/// Kind-specific payload. Only the section matching the layer kind is normally present.
#[derive(Clone, Debug, Default, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LayerData {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub text: Option<TextData>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image: Option<ImageData>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub shape: Option<ShapeData>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub video: Option<VideoData>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub particles: Option<ParticleData>,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum TextAlign {
    Left,
    #[default]
    Center,
    Right,
}

#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct TextData {
    pub content: String,
    pub font_size: f64,
    pub font_family: String,
    pub font_weight: String,
    pub color: String,
    pub text_align: TextAlign,
    pub line_height: f64,
    pub letter_spacing: f64,
}

impl Default for TextData {
    fn default() -> Self {
        Self {
            content: String::new(),
            font_size: 48.0,
            font_family: "Arial, sans-serif".to_owned(),
            font_weight: "normal".to_owned(),
            color: "#ffffff".to_owned(),
            text_align: TextAlign::Center,
            line_height: 1.2,
            letter_spacing: 0.0,
        }
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ImageFit {
    Cover,
    #[default]
    Contain,
    Fill,
    ScaleDown,
}

#[derive(Clone, Debug, Default, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ImageData {
    pub src: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub alt: Option<String>,
    #[serde(default)]
    pub fit: ImageFit,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ShapeKind {
    #[default]
    Rectangle,
    Circle,
    Polygon,
    Path,
}

impl ShapeKind {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Rectangle => "rectangle",
            Self::Circle => "circle",
            Self::Polygon => "polygon",
            Self::Path => "path",
        }
    }
}

#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ShapeData {
    #[serde(rename = "type", default)]
    pub kind: ShapeKind,
    pub fill: String,
    #[serde(default = "transparent")]
    pub stroke: String,
    #[serde(default)]
    pub stroke_width: f64,
    /// Width and height in pixels, when authored.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub size: Option<Vec2>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub border_radius: Option<f64>,
    /// SVG path data for [`ShapeKind::Path`].
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub path: Option<String>,
}

fn transparent() -> String {
    "transparent".to_owned()
}

#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VideoData {
    pub src: String,
    #[serde(default = "default_opacity")]
    pub volume: f64,
    #[serde(default = "default_opacity")]
    pub playback_rate: f64,
    #[serde(default, rename = "loop")]
    pub loop_: bool,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ParticleShape {
    #[default]
    Circle,
    Square,
    Triangle,
    Star,
}

impl ParticleShape {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Circle => "circle",
            Self::Square => "square",
            Self::Triangle => "triangle",
            Self::Star => "star",
        }
    }
}

/// Inclusive numeric range.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Span {
    pub min: f64,
    pub max: f64,
}

#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ParticleData {
    pub count: u32,
    #[serde(rename = "type", default)]
    pub shape: ParticleShape,
    pub size: Span,
    pub speed: Span,
    /// Palette the renderer picks particle colors from.
    #[serde(rename = "color", default)]
    pub colors: Vec<String>,
    #[serde(default)]
    pub gravity: f64,
    #[serde(default)]
    pub wind: f64,
}

/// Playback state plus editor-only view fields.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Timeline {
    /// Playhead in seconds, kept in `[0, project.duration]`.
    pub current_time: f64,
    pub playback_rate: f64,
    pub is_playing: bool,
    #[serde(rename = "loop")]
    pub loop_: bool,
    pub markers: Vec<Marker>,
    pub zoom: f64,
    pub view_start: f64,
    pub view_end: f64,
}

impl Default for Timeline {
    fn default() -> Self {
        Self {
            current_time: 0.0,
            playback_rate: 1.0,
            is_playing: false,
            loop_: false,
            markers: Vec::new(),
            zoom: 1.0,
            view_start: 0.0,
            view_end: 0.0,
        }
    }
}

#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Marker {
    pub id: String,
    pub time: f64,
    #[serde(default)]
    pub label: String,
    #[serde(default)]
    pub color: String,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Quality {
    Low,
    Medium,
    #[default]
    High,
    Ultra,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ExportFormat {
    #[default]
    Mp4,
    Webm,
    Gif,
    PngSequence,
}

/// Export and preview settings. Carried verbatim; the engine never reads them.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Settings {
    pub background_color: String,
    pub quality: Quality,
    pub export_format: ExportFormat,
    /// 0 to 100.
    pub compression: u8,
    pub enable_motion_blur: bool,
    pub enable_antialiasing: bool,
    pub preview_quality: Quality,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            background_color: "#000000".to_owned(),
            quality: Quality::High,
            export_format: ExportFormat::Mp4,
            compression: 80,
            enable_motion_blur: false,
            enable_antialiasing: true,
            preview_quality: Quality::Medium,
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/project/model.rs"]
mod tests;
