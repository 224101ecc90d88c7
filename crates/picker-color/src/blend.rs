//! Ambient-color blending.
//!
//! Mixes the transformed picker color with the ambient color by a fraction
//! `t`. The three modes deliberately blend in different spaces:
//!
//! - [`BlendMode::Normal`] interpolates in the perceptual intermediate
//!   space and converts once, so the mix itself introduces no hue shift.
//! - [`BlendMode::Multiply`] / [`BlendMode::Screen`] are standard
//!   compositing operators defined on RGB: both sides convert to RGB
//!   first, the operator is applied component-wise, and the left color is
//!   interpolated toward the composite.
//!
//! That asymmetry is part of the tool's look and must not be "unified".

use crate::adapter::SpaceKind;
use picker_math::Vec3;
use picker_primaries::RgbModel;
use serde::{Deserialize, Serialize};

/// Pixel-compositing formula applied during ambient blending.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum BlendMode {
    /// Interpolate in the perceptual intermediate space.
    #[default]
    Normal,
    /// Component-wise product in RGB (darkens).
    Multiply,
    /// Inverse product in RGB: `1 - (1-a)(1-b)` (lightens).
    Screen,
}

/// Blends a color toward the ambient color.
///
/// `color` and `ambient` are rectangular intermediate triples of `space`
/// ((L, u, v) or (L, a, b)); `t` is the mix fraction in [0, 1]. Returns
/// unclamped linear RGB.
///
/// At `t = 0` every mode returns the left color; at `t = 1`, `Normal`
/// lands on the ambient color itself while `Multiply`/`Screen` land on
/// the composite.
pub fn blend(
    model: &RgbModel,
    space: SpaceKind,
    color: Vec3,
    ambient: Vec3,
    t: f64,
    mode: BlendMode,
) -> Vec3 {
    match mode {
        BlendMode::Normal => space.intermediate_to_rgb(model, color.lerp(ambient, t)),
        BlendMode::Multiply => {
            let left = space.intermediate_to_rgb(model, color);
            let right = space.intermediate_to_rgb(model, ambient);
            left.lerp(left * right, t)
        }
        BlendMode::Screen => {
            let left = space.intermediate_to_rgb(model, color);
            let right = space.intermediate_to_rgb(model, ambient);
            let screened = Vec3::ONE - (Vec3::ONE - left) * (Vec3::ONE - right);
            left.lerp(screened, t)
        }
    }
}
