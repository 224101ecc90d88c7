//! ACAM: the hue-gravity appearance transform.
//!
//! Models simultaneous-contrast-like hue drift: as a color darkens, its
//! perceived hue drifts toward a "gravity" direction. The shift is zero at
//! full lightness and approaches the full gravity angle (120 degrees) as
//! lightness reaches zero; the `variance` parameter shapes how early the
//! drift sets in, and `flip` reverses its direction.
//!
//! The shaping curve is carried over from the upstream tool unchanged,
//! including its epsilon guards. It is an approximation the original
//! author left marked for refinement; the gradient visuals depend on this
//! exact curve, so it is preserved verbatim rather than smoothed out.

use crate::adapter::{Appearance, SpaceKind};
use crate::error::ColorResult;
use picker_math::Vec3;
use picker_primaries::RgbModel;

/// Maximum hue shift in degrees, reached as lightness approaches zero.
pub const HUE_GRAVITY: f64 = 120.0;

/// Applies the hue-gravity transform in appearance space.
///
/// `variance` shapes the drift curve via a power law; `lightness` is the
/// normalized 0-1 lightness scale at the current picker position (not the
/// color's own lightness channel). Saturation and lightness pass through
/// untouched; only hue moves.
pub fn transform(color: &Appearance, variance: f64, lightness: f64, flip: bool) -> Appearance {
    // epsilon keeps q finite at variance = 0
    let q = 1.00001 / (variance + 0.00001);
    let shaping = 1.0 - (1.0 - (1.0 - lightness).powf(q)).powf(1.0 / q);

    let direction = if flip { -1.0 } else { 1.0 };
    Appearance {
        h: color.h + HUE_GRAVITY * shaping * direction,
        s: color.s,
        l: color.l,
    }
}

/// Transform, then drop into the space's rectangular intermediate.
///
/// Convenience for the blend stage, which consumes (L, u, v) / (L, a, b)
/// triples.
pub fn transform_to_intermediate(
    space: SpaceKind,
    model: &RgbModel,
    color: &Appearance,
    variance: f64,
    lightness: f64,
    flip: bool,
) -> ColorResult<Vec3> {
    let shifted = transform(color, variance, lightness, flip);
    space.to_intermediate(model, &shifted)
}
