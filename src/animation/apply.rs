use crate::animation::value::Value;
use crate::foundation::core::Transform;

/// Layer property an animation can target.
///
/// Names follow the editor's JSON (`"scaleX"`, `"backgroundColor"`, `"hue-rotate"`, ...). Names
/// this build does not know deserialize as [`AnimatableProperty::Unknown`] so newer projects still
/// load.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum AnimatableProperty {
    /// `transform.x`
    X,
    /// `transform.y`
    Y,
    /// `transform.scaleX`
    ScaleX,
    /// `transform.scaleY`
    ScaleY,
    /// `transform.rotation` (degrees)
    Rotation,
    /// `transform.skewX` (degrees)
    SkewX,
    /// `transform.skewY` (degrees)
    SkewY,
    /// `transform.anchorX`
    AnchorX,
    /// `transform.anchorY`
    AnchorY,
    /// Layer opacity, clamped to `[0, 1]`.
    Opacity,
    /// Foreground color.
    Color,
    /// Background color.
    BackgroundColor,
    /// Corner radius in pixels.
    BorderRadius,
    /// Font size in pixels.
    FontSize,
    /// Letter spacing in pixels.
    LetterSpacing,
    /// Line height multiplier.
    LineHeight,
    /// Blur radius in pixels.
    Blur,
    /// Brightness filter factor.
    Brightness,
    /// Contrast filter factor.
    Contrast,
    /// Saturation filter factor.
    Saturate,
    /// Hue rotation in degrees.
    #[serde(rename = "hue-rotate")]
    HueRotate,
    /// Property name not understood by this build.
    #[serde(other)]
    Unknown,
}

/// Resolved non-transform appearance overrides. `None` means "as authored".
#[derive(Clone, Debug, Default, PartialEq, serde::Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Appearance {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub color: Option<Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub background_color: Option<Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub border_radius: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub font_size: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub letter_spacing: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub line_height: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub blur: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub brightness: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub contrast: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub saturate: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hue_rotate: Option<f64>,
}

/// Live, resolved state of one layer for the current timeline position.
///
/// Rebuilt from the authored layer at the start of every update pass, then overwritten by active
/// animations. Renderers read this and nothing else.
#[derive(Clone, Debug, Default, PartialEq, serde::Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LayerState {
    /// Visible and inside its time window at the current position.
    pub active: bool,
    pub transform: Transform,
    pub opacity: f64,
    pub appearance: Appearance,
}

impl LayerState {
    /// Fresh state from authored values.
    pub fn authored(transform: Transform, opacity: f64) -> Self {
        Self {
            active: false,
            transform,
            opacity,
            appearance: Appearance::default(),
        }
    }
}

/// Result of one property write.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ApplyOutcome {
    /// The value was written.
    Applied,
    /// The property is not known to this build; nothing was written.
    UnknownProperty,
    /// The value's shape does not fit the property; nothing was written.
    TypeMismatch,
}

impl ApplyOutcome {
    /// `true` unless the value was written.
    pub fn is_ignored(self) -> bool {
        self != Self::Applied
    }
}

/// Write a resolved `value` onto the field `property` maps to.
pub fn apply(state: &mut LayerState, property: AnimatableProperty, value: &Value) -> ApplyOutcome {
    use AnimatableProperty as P;

    if property == P::Unknown {
        return ApplyOutcome::UnknownProperty;
    }

    if matches!(property, P::Color | P::BackgroundColor) {
        if !matches!(value, Value::Color(_) | Value::Text(_)) {
            return ApplyOutcome::TypeMismatch;
        }
        let slot = match property {
            P::Color => &mut state.appearance.color,
            _ => &mut state.appearance.background_color,
        };
        *slot = Some(value.clone());
        return ApplyOutcome::Applied;
    }

    let Some(n) = value.as_number() else {
        return ApplyOutcome::TypeMismatch;
    };
    let t = &mut state.transform;
    let a = &mut state.appearance;
    match property {
        P::X => t.x = n,
        P::Y => t.y = n,
        P::ScaleX => t.scale_x = n,
        P::ScaleY => t.scale_y = n,
        P::Rotation => t.rotation = n,
        P::SkewX => t.skew_x = n,
        P::SkewY => t.skew_y = n,
        P::AnchorX => t.anchor_x = n,
        P::AnchorY => t.anchor_y = n,
        P::Opacity => state.opacity = n.clamp(0.0, 1.0),
        P::BorderRadius => a.border_radius = Some(n),
        P::FontSize => a.font_size = Some(n),
        P::LetterSpacing => a.letter_spacing = Some(n),
        P::LineHeight => a.line_height = Some(n),
        P::Blur => a.blur = Some(n),
        P::Brightness => a.brightness = Some(n),
        P::Contrast => a.contrast = Some(n),
        P::Saturate => a.saturate = Some(n),
        P::HueRotate => a.hue_rotate = Some(n),
        P::Color | P::BackgroundColor | P::Unknown => return ApplyOutcome::TypeMismatch,
    }
    ApplyOutcome::Applied
}

#[cfg(test)]
#[path = "../../tests/unit/animation/apply.rs"]
mod tests;
