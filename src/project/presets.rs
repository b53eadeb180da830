//! Ready-made layers and animations matching the editor's motion-graphics panel.
//!
//! Every preset is a plain [`Animation`] or [`Layer`]; callers can tweak the result freely.

use crate::animation::anim::Animation;
use crate::animation::apply::{AnimatableProperty, LayerState};
use crate::animation::ease::Easing;
use crate::animation::keyframe::Keyframe;
use crate::animation::progress::{Direction, FillMode, Iterations};
use crate::foundation::core::{Transform, Vec2};
use crate::project::model::{
    BlendMode, ImageData, ImageFit, Layer, LayerData, LayerKind, ParticleData, ParticleShape,
    ShapeData, ShapeKind, Span, TextData,
};

fn preset(
    id: String,
    property: AnimatableProperty,
    easing: Easing,
    duration: f64,
    keyframes: &[(f64, f64)],
) -> Animation {
    Animation {
        id,
        property,
        keyframes: keyframes
            .iter()
            .map(|&(t, v)| Keyframe::new(t, v))
            .collect(),
        easing,
        duration,
        delay: 0.0,
        iterations: Iterations::Count(1),
        direction: Direction::Normal,
        fill: FillMode::None,
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum TextAnimation {
    FadeIn,
    SlideIn,
    /// Opacity reveal from 0 to 1, same curve as [`TextAnimation::FadeIn`].
    Typewriter,
    Bounce,
    Glow,
}

impl TextAnimation {
    pub fn name(self) -> &'static str {
        match self {
            Self::FadeIn => "fade-in",
            Self::SlideIn => "slide-in",
            Self::Typewriter => "typewriter",
            Self::Bounce => "bounce",
            Self::Glow => "glow",
        }
    }

    pub fn build(self, id: impl Into<String>, duration: f64) -> Animation {
        use AnimatableProperty as P;
        let id = id.into();
        match self {
            Self::FadeIn | Self::Typewriter => {
                preset(id, P::Opacity, Easing::EaseOut, duration, &[(0.0, 0.0), (1.0, 1.0)])
            }
            Self::SlideIn => {
                preset(id, P::X, Easing::EaseOut, duration, &[(0.0, -100.0), (1.0, 0.0)])
            }
            Self::Bounce => preset(
                id,
                P::ScaleY,
                Easing::Bounce,
                duration,
                &[(0.0, 0.0), (0.6, 1.2), (1.0, 1.0)],
            ),
            Self::Glow => Animation {
                iterations: Iterations::Infinite,
                direction: Direction::Alternate,
                ..preset(id, P::Opacity, Easing::EaseOut, duration, &[(0.0, 0.5), (1.0, 1.0)])
            },
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ShapeAnimation {
    ScaleIn,
    RotateIn,
    MorphIn,
    /// Horizontal scale from 0 to 1, same curve as [`ShapeAnimation::ScaleIn`].
    DrawOn,
}

impl ShapeAnimation {
    pub fn name(self) -> &'static str {
        match self {
            Self::ScaleIn => "scale-in",
            Self::RotateIn => "rotate-in",
            Self::MorphIn => "morph-in",
            Self::DrawOn => "draw-on",
        }
    }

    pub fn build(self, id: impl Into<String>, duration: f64) -> Animation {
        use AnimatableProperty as P;
        let id = id.into();
        match self {
            Self::ScaleIn | Self::DrawOn => {
                preset(id, P::ScaleX, Easing::EaseOut, duration, &[(0.0, 0.0), (1.0, 1.0)])
            }
            Self::RotateIn => preset(
                id,
                P::Rotation,
                Easing::EaseOut,
                duration,
                &[(0.0, -180.0), (1.0, 0.0)],
            ),
            Self::MorphIn => preset(
                id,
                P::ScaleY,
                Easing::Spring,
                duration,
                &[(0.0, 0.0), (0.7, 1.3), (1.0, 1.0)],
            ),
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ParticleAnimation {
    Explosion,
    Fountain,
    Spiral,
    /// Opacity from 1 to 0, same curve as [`ParticleAnimation::FadeOut`].
    Rain,
    /// Opacity from 1 to 0.
    FadeOut,
}

impl ParticleAnimation {
    pub fn name(self) -> &'static str {
        match self {
            Self::Explosion => "explosion",
            Self::Fountain => "fountain",
            Self::Spiral => "spiral",
            Self::Rain => "rain",
            Self::FadeOut => "fade-out",
        }
    }

    pub fn build(self, id: impl Into<String>, duration: f64) -> Animation {
        use AnimatableProperty as P;
        let id = id.into();
        let e = Easing::Linear;
        match self {
            Self::Explosion => {
                preset(id, P::ScaleX, e, duration, &[(0.0, 0.0), (0.1, 2.0), (1.0, 0.5)])
            }
            Self::Fountain => {
                preset(id, P::Y, e, duration, &[(0.0, 0.0), (0.5, -200.0), (1.0, 200.0)])
            }
            Self::Spiral => preset(id, P::Rotation, e, duration, &[(0.0, 0.0), (1.0, 720.0)]),
            Self::Rain | Self::FadeOut => {
                preset(id, P::Opacity, e, duration, &[(0.0, 1.0), (1.0, 0.0)])
            }
        }
    }
}

#[allow(clippy::too_many_arguments)]
fn placed_layer(
    id: String,
    name: String,
    kind: LayerKind,
    position: Vec2,
    delay: f64,
    duration: f64,
    z_index: i32,
    data: LayerData,
) -> Layer {
    let transform = Transform {
        x: position.x,
        y: position.y,
        ..Transform::default()
    };
    Layer {
        id,
        name,
        kind,
        visible: true,
        locked: false,
        opacity: 1.0,
        blend_mode: BlendMode::Normal,
        start_time: delay,
        end_time: delay + duration,
        z_index,
        transform,
        animations: Vec::new(),
        effects: Vec::new(),
        data,
        state: LayerState::authored(transform, 1.0),
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct TextLayerOptions {
    pub text: String,
    pub font_size: f64,
    pub font_family: String,
    pub color: String,
    pub position: Vec2,
    pub animation: Option<TextAnimation>,
    /// Seconds on screen; defaults to 3.
    pub duration: Option<f64>,
    /// Seconds before the layer appears.
    pub delay: Option<f64>,
}

impl Default for TextLayerOptions {
    fn default() -> Self {
        let data = TextData::default();
        Self {
            text: String::new(),
            font_size: data.font_size,
            font_family: data.font_family,
            color: data.color,
            position: Vec2::ZERO,
            animation: None,
            duration: None,
            delay: None,
        }
    }
}

/// Text layer, optionally animated with a [`TextAnimation`] spanning the whole layer.
pub fn text_layer(id: impl Into<String>, opts: &TextLayerOptions) -> Layer {
    let id = id.into();
    let duration = opts.duration.unwrap_or(3.0);
    let label: String = opts.text.chars().take(20).collect();
    let data = LayerData {
        text: Some(TextData {
            content: opts.text.clone(),
            font_size: opts.font_size,
            font_family: opts.font_family.clone(),
            color: opts.color.clone(),
            ..TextData::default()
        }),
        ..LayerData::default()
    };
    let mut layer = placed_layer(
        id.clone(),
        format!("Text: {label}..."),
        LayerKind::Text,
        opts.position,
        opts.delay.unwrap_or(0.0),
        duration,
        1,
        data,
    );
    if let Some(a) = opts.animation {
        layer
            .animations
            .push(a.build(format!("{id}-{}", a.name()), duration));
    }
    layer
}

#[derive(Clone, Debug, PartialEq)]
pub struct ShapeLayerOptions {
    pub kind: ShapeKind,
    /// Width and height in pixels.
    pub size: Option<Vec2>,
    pub position: Vec2,
    pub fill: String,
    pub stroke: Option<String>,
    pub stroke_width: Option<f64>,
    pub animation: Option<ShapeAnimation>,
    /// Seconds on screen; defaults to 2.
    pub duration: Option<f64>,
    pub delay: Option<f64>,
}

impl Default for ShapeLayerOptions {
    fn default() -> Self {
        Self {
            kind: ShapeKind::Rectangle,
            size: None,
            position: Vec2::ZERO,
            fill: "#ffffff".to_owned(),
            stroke: None,
            stroke_width: None,
            animation: None,
            duration: None,
            delay: None,
        }
    }
}

pub fn shape_layer(id: impl Into<String>, opts: &ShapeLayerOptions) -> Layer {
    let id = id.into();
    let duration = opts.duration.unwrap_or(2.0);
    let data = LayerData {
        shape: Some(ShapeData {
            kind: opts.kind,
            fill: opts.fill.clone(),
            stroke: opts
                .stroke
                .clone()
                .unwrap_or_else(|| "transparent".to_owned()),
            stroke_width: opts.stroke_width.unwrap_or(0.0),
            size: opts.size,
            border_radius: None,
            path: None,
        }),
        ..LayerData::default()
    };
    let mut layer = placed_layer(
        id.clone(),
        format!("Shape: {}", opts.kind.as_str()),
        LayerKind::Shape,
        opts.position,
        opts.delay.unwrap_or(0.0),
        duration,
        0,
        data,
    );
    if let Some(a) = opts.animation {
        layer
            .animations
            .push(a.build(format!("{id}-{}", a.name()), duration));
    }
    layer
}

#[derive(Clone, Debug, PartialEq)]
pub struct ParticleLayerOptions {
    pub count: u32,
    pub position: Vec2,
    pub shape: ParticleShape,
    pub size: Span,
    pub colors: Vec<String>,
    pub animation: Option<ParticleAnimation>,
    /// Seconds on screen; defaults to 5.
    pub duration: Option<f64>,
    pub delay: Option<f64>,
}

impl Default for ParticleLayerOptions {
    fn default() -> Self {
        Self {
            count: 50,
            position: Vec2::ZERO,
            shape: ParticleShape::Circle,
            size: Span { min: 2.0, max: 8.0 },
            colors: vec!["#ffffff".to_owned()],
            animation: None,
            duration: None,
            delay: None,
        }
    }
}

pub fn particle_layer(id: impl Into<String>, opts: &ParticleLayerOptions) -> Layer {
    let id = id.into();
    let duration = opts.duration.unwrap_or(5.0);
    let data = LayerData {
        particles: Some(ParticleData {
            count: opts.count,
            shape: opts.shape,
            size: opts.size,
            speed: Span {
                min: 50.0,
                max: 200.0,
            },
            colors: opts.colors.clone(),
            gravity: 0.5,
            wind: 0.0,
        }),
        ..LayerData::default()
    };
    let mut layer = placed_layer(
        id.clone(),
        format!("Particles: {}", opts.shape.as_str()),
        LayerKind::Particle,
        opts.position,
        opts.delay.unwrap_or(0.0),
        duration,
        2,
        data,
    );
    if let Some(a) = opts.animation {
        layer
            .animations
            .push(a.build(format!("{id}-{}", a.name()), duration));
    }
    layer
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum LogoAnimation {
    /// Rise 100 px into place.
    SlideUp,
    /// Fade in while growing from half width.
    FadeScale,
    /// Static logo; masking is left to the renderer.
    DrawMask,
    /// Static logo plus a star burst one second in.
    Particles,
}

#[derive(Clone, Debug, PartialEq)]
pub struct LogoRevealOptions {
    pub image_src: String,
    pub position: Vec2,
    pub animation: LogoAnimation,
    /// Seconds on screen; defaults to 3.
    pub duration: Option<f64>,
    pub delay: Option<f64>,
}

/// Logo image layer, followed by a particle layer for [`LogoAnimation::Particles`].
pub fn logo_reveal(id: impl Into<String>, opts: &LogoRevealOptions) -> Vec<Layer> {
    use AnimatableProperty as P;
    let id = id.into();
    let duration = opts.duration.unwrap_or(3.0);
    let delay = opts.delay.unwrap_or(0.0);
    let data = LayerData {
        image: Some(ImageData {
            src: opts.image_src.clone(),
            alt: None,
            fit: ImageFit::Contain,
        }),
        ..LayerData::default()
    };
    let mut logo = placed_layer(
        id.clone(),
        "Logo".to_owned(),
        LayerKind::Image,
        opts.position,
        delay,
        duration,
        1,
        data,
    );

    let mut layers = Vec::new();
    match opts.animation {
        LogoAnimation::SlideUp => logo.animations.push(preset(
            format!("{id}-slide-up"),
            P::Y,
            Easing::EaseOut,
            duration,
            &[(0.0, 100.0), (1.0, 0.0)],
        )),
        LogoAnimation::FadeScale => {
            logo.animations.push(preset(
                format!("{id}-fade"),
                P::Opacity,
                Easing::EaseOut,
                duration,
                &[(0.0, 0.0), (1.0, 1.0)],
            ));
            logo.animations.push(preset(
                format!("{id}-scale"),
                P::ScaleX,
                Easing::Spring,
                duration,
                &[(0.0, 0.5), (1.0, 1.0)],
            ));
        }
        LogoAnimation::DrawMask => {}
        LogoAnimation::Particles => layers.push(particle_layer(
            format!("{id}-particles"),
            &ParticleLayerOptions {
                count: 50,
                position: opts.position,
                shape: ParticleShape::Star,
                size: Span { min: 2.0, max: 8.0 },
                colors: ["#FFD700", "#FFA500", "#FF6347"].map(str::to_owned).to_vec(),
                animation: Some(ParticleAnimation::Explosion),
                duration: Some(2.0),
                delay: Some(delay + 1.0),
            },
        )),
    }

    layers.insert(0, logo);
    layers
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum LowerThirdAnimation {
    /// Background bar scales in; text slides.
    SlideIn,
    /// Accent bar scales in; text slides.
    WipeIn,
    /// Text fades; bars are static.
    FadeIn,
}

#[derive(Clone, Debug, PartialEq)]
pub struct LowerThirdColors {
    pub background: String,
    pub text: String,
    pub accent: String,
}

impl Default for LowerThirdColors {
    fn default() -> Self {
        Self {
            background: "#1a1a1a".to_owned(),
            text: "#ffffff".to_owned(),
            accent: "#0066cc".to_owned(),
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct LowerThirdOptions {
    pub title: String,
    pub subtitle: Option<String>,
    /// Anchor of the background bar; defaults to `(50, -100)`.
    pub position: Option<Vec2>,
    pub colors: LowerThirdColors,
    pub animation: Option<LowerThirdAnimation>,
    /// Seconds on screen; defaults to 2.
    pub duration: Option<f64>,
    pub delay: Option<f64>,
}

impl Default for LowerThirdOptions {
    fn default() -> Self {
        Self {
            title: String::new(),
            subtitle: None,
            position: None,
            colors: LowerThirdColors::default(),
            animation: None,
            duration: None,
            delay: None,
        }
    }
}

/// Name-and-title caption: a background bar, an accent bar and staggered text.
///
/// Layers come back as `[subtitle?, background, accent, title]`. Ids are `{id}-background`,
/// `{id}-accent`, `{id}-title` and `{id}-subtitle`.
pub fn lower_third(id: impl Into<String>, opts: &LowerThirdOptions) -> Vec<Layer> {
    let id = id.into();
    let at = opts.position.unwrap_or(Vec2::new(50.0, -100.0));
    let delay = opts.delay.unwrap_or(0.0);
    let duration = opts.duration.unwrap_or(2.0);
    let colors = &opts.colors;
    let scale_in_on = |trigger: LowerThirdAnimation| {
        (opts.animation == Some(trigger)).then_some(ShapeAnimation::ScaleIn)
    };
    let text_animation = if opts.animation == Some(LowerThirdAnimation::FadeIn) {
        TextAnimation::FadeIn
    } else {
        TextAnimation::SlideIn
    };
    let caption = |text: &str, font_size: f64, dy: f64, offset: f64| TextLayerOptions {
        text: text.to_owned(),
        font_size,
        font_family: "Arial, sans-serif".to_owned(),
        color: colors.text.clone(),
        position: Vec2::new(at.x + 20.0, at.y + dy),
        animation: Some(text_animation),
        duration: Some(duration),
        delay: Some(delay + offset),
    };

    let background = shape_layer(
        format!("{id}-background"),
        &ShapeLayerOptions {
            kind: ShapeKind::Rectangle,
            size: Some(Vec2::new(400.0, 80.0)),
            position: at,
            fill: colors.background.clone(),
            animation: scale_in_on(LowerThirdAnimation::SlideIn),
            duration: Some(duration),
            delay: Some(delay),
            ..ShapeLayerOptions::default()
        },
    );
    let accent = shape_layer(
        format!("{id}-accent"),
        &ShapeLayerOptions {
            kind: ShapeKind::Rectangle,
            size: Some(Vec2::new(8.0, 80.0)),
            position: Vec2::new(at.x - 196.0, at.y),
            fill: colors.accent.clone(),
            animation: scale_in_on(LowerThirdAnimation::WipeIn),
            duration: Some(duration),
            delay: Some(delay + 0.2),
            ..ShapeLayerOptions::default()
        },
    );
    let title = text_layer(
        format!("{id}-title"),
        &caption(&opts.title, 24.0, -10.0, 0.5),
    );

    let mut layers = Vec::with_capacity(4);
    if let Some(subtitle) = &opts.subtitle {
        layers.push(text_layer(
            format!("{id}-subtitle"),
            &caption(subtitle, 16.0, 15.0, 0.7),
        ));
    }
    layers.extend([background, accent, title]);
    layers
}

#[cfg(test)]
#[path = "../../tests/unit/project/presets.rs"]
mod tests;
