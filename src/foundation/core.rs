use crate::foundation::error::{KineticError, KineticResult};

pub use kurbo::{Affine, Size, Vec2};

/// Output resolution in pixels.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct Resolution {
    /// Width in pixels.
    pub width: u32,
    /// Height in pixels.
    pub height: u32,
}

impl Resolution {
    /// Create a validated resolution with non-zero dimensions.
    pub fn new(width: u32, height: u32) -> KineticResult<Self> {
        if width == 0 || height == 0 {
            return Err(KineticError::validation(
                "resolution width/height must be > 0",
            ));
        }
        Ok(Self { width, height })
    }

    /// Resolution as a floating-point size.
    pub fn size(self) -> Size {
        Size::new(f64::from(self.width), f64::from(self.height))
    }
}

/// Straight (non-premultiplied) 8-bit RGB color, serialized as `#rrggbb`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Rgb8 {
    /// Red channel.
    pub r: u8,
    /// Green channel.
    pub g: u8,
    /// Blue channel.
    pub b: u8,
}

impl Rgb8 {
    /// Create a color from channel values.
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Parse `#rrggbb` (case-insensitive). Anything else yields `None`.
    pub fn parse_hex(s: &str) -> Option<Self> {
        let digits = s.strip_prefix('#')?;
        if digits.len() != 6 || !digits.bytes().all(|b| b.is_ascii_hexdigit()) {
            return None;
        }
        let channel = |i: usize| u8::from_str_radix(&digits[i..i + 2], 16).ok();
        Some(Self {
            r: channel(0)?,
            g: channel(2)?,
            b: channel(4)?,
        })
    }

    /// Lowercase `#rrggbb` encoding.
    pub fn to_hex(self) -> String {
        format!("#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }
}

impl TryFrom<String> for Rgb8 {
    type Error = KineticError;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        Self::parse_hex(&s)
            .ok_or_else(|| KineticError::validation(format!("'{s}' is not a #rrggbb color")))
    }
}

impl From<Rgb8> for String {
    fn from(c: Rgb8) -> Self {
        c.to_hex()
    }
}

/// 2D layer transform as authored in the editor.
///
/// Angles are in degrees. The anchor is a fraction of the layer's content box (`0.5, 0.5` is the
/// center) and acts as the pivot for rotation, skew, and scale.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Transform {
    /// Horizontal translation in pixels.
    pub x: f64,
    /// Vertical translation in pixels.
    pub y: f64,
    /// Horizontal scale factor.
    pub scale_x: f64,
    /// Vertical scale factor.
    pub scale_y: f64,
    /// Rotation in degrees, clockwise in y-down screen space.
    pub rotation: f64,
    /// Horizontal skew in degrees.
    pub skew_x: f64,
    /// Vertical skew in degrees.
    pub skew_y: f64,
    /// Pivot x as a fraction of content width.
    pub anchor_x: f64,
    /// Pivot y as a fraction of content height.
    pub anchor_y: f64,
}

impl Default for Transform {
    fn default() -> Self {
        Self {
            x: 0.0,
            y: 0.0,
            scale_x: 1.0,
            scale_y: 1.0,
            rotation: 0.0,
            skew_x: 0.0,
            skew_y: 0.0,
            anchor_x: 0.5,
            anchor_y: 0.5,
        }
    }
}

impl Transform {
    /// Pivot point in content-local pixels for a content box of `size`.
    pub fn pivot(&self, size: Size) -> Vec2 {
        Vec2::new(self.anchor_x * size.width, self.anchor_y * size.height)
    }

    /// Build the affine a renderer applies to content of `size`.
    ///
    /// Order: `T(x, y) * T(pivot) * R(rotation) * K(skew) * S(scale) * T(-pivot)`.
    pub fn to_affine(&self, size: Size) -> Affine {
        let pivot = self.pivot(size);
        let skew = Affine::skew(
            self.skew_x.to_radians().tan(),
            self.skew_y.to_radians().tan(),
        );
        Affine::translate(Vec2::new(self.x, self.y))
            * Affine::translate(pivot)
            * Affine::rotate(self.rotation.to_radians())
            * skew
            * Affine::scale_non_uniform(self.scale_x, self.scale_y)
            * Affine::translate(-pivot)
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/core.rs"]
mod tests;
