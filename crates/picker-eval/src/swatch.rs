//! Single-point swatch evaluation.
//!
//! One cursor position, one full synchronous pass through the pipeline:
//! eigen color into appearance space, position-derived lightness/chroma
//! scaling, ACAM hue shift, ambient blend, back to RGB.

use crate::context::EvalContext;
use crate::error::EvalResult;
use picker_color::{Appearance, SpaceKind, acam, blend};
use picker_math::{Vec3, asin_compand};
use tracing::debug;

/// Largest cursor coordinate; the picker plane spans 0..=299 on both axes.
pub const CANVAS_SPAN: f64 = 299.0;

/// One evaluated output color.
///
/// `rgb` is unclamped linear RGB; `in_gamut` is false when any channel
/// falls below the active space's negative epsilon. Out-of-gamut samples
/// are valid outputs — the caller decides whether to display, clip, or
/// warn.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Sample {
    /// Output color, linear RGB, unclamped.
    pub rgb: Vec3,
    /// Whether every channel clears the gamut threshold.
    pub in_gamut: bool,
}

impl Sample {
    /// Tags an RGB result with its gamut status under `space`.
    pub(crate) fn classify(space: SpaceKind, rgb: Vec3) -> Self {
        Self {
            rgb,
            in_gamut: rgb.min_element() >= space.gamut_epsilon(),
        }
    }

    /// Quick display luminance of the sample.
    ///
    /// Front ends use this to pick a contrasting cursor outline (black
    /// over light output, white over dark).
    #[inline]
    pub fn luma(&self) -> f64 {
        self.rgb.dot(Vec3::new(0.375, 0.5, 0.125))
    }
}

/// Evaluates the output color for one cursor position.
///
/// `cursor_x` drives the ambient mix (arcsine-companded so mix change
/// concentrates near the ambient extreme); `cursor_y` drives the
/// lightness scale, with chroma/saturation scaled in lockstep. Both run
/// 0..=299, top-left origin.
///
/// # Example
///
/// ```rust
/// use picker_eval::{evaluate, EvalContext};
///
/// // top-left corner: full lightness, no ambient influence
/// let sample = evaluate(&EvalContext::default(), 0.0, 0.0)?;
/// assert!(sample.in_gamut);
/// # Ok::<(), picker_eval::EvalError>(())
/// ```
pub fn evaluate(ctx: &EvalContext, cursor_x: f64, cursor_y: f64) -> EvalResult<Sample> {
    let model = ctx.rgb_model();
    let space = ctx.space;

    let eigen = space.from_rgb(&model, ctx.eigen_rgb())?;

    let scale = 1.0 - cursor_y / CANVAS_SPAN;
    let scaled = Appearance::new(eigen.h, eigen.s * scale, eigen.l * scale);

    let t = asin_compand(cursor_x / CANVAS_SPAN) * ctx.ambient_mix;

    let shifted =
        acam::transform_to_intermediate(space, &model, &scaled, ctx.variance, scale, ctx.flip)?;
    let ambient = space.rgb_to_intermediate(&model, ctx.ambient_rgb())?;
    let rgb = blend(&model, space, shifted, ambient, t * scale, ctx.blend);

    let sample = Sample::classify(space, rgb);
    if !sample.in_gamut {
        debug!(?rgb, space = space.name(), "out of gamut");
    }
    Ok(sample)
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use picker_color::BlendMode;
    use picker_primaries::{ModelId, RgbModel};

    #[test]
    fn test_top_left_is_eigen() {
        // full lightness, zero mix: the eigen color comes back untouched
        let ctx = EvalContext {
            ambient_mix: 0.0,
            ..EvalContext::default()
        };
        let sample = evaluate(&ctx, 0.0, 0.0).unwrap();

        assert_relative_eq!(sample.rgb.x, 1.0, epsilon = 1e-6);
        assert_relative_eq!(sample.rgb.y, 0.0, epsilon = 1e-6);
        assert_relative_eq!(sample.rgb.z, 0.0, epsilon = 1e-6);
        assert!(sample.in_gamut);
    }

    #[test]
    fn test_bottom_is_black() {
        let ctx = EvalContext {
            ambient_mix: 0.0,
            ..EvalContext::default()
        };
        let sample = evaluate(&ctx, 0.0, CANVAS_SPAN).unwrap();

        assert_relative_eq!(sample.rgb.x, 0.0, epsilon = 1e-6);
        assert_relative_eq!(sample.rgb.y, 0.0, epsilon = 1e-6);
        assert_relative_eq!(sample.rgb.z, 0.0, epsilon = 1e-6);
    }

    #[test]
    fn test_right_edge_normal_blend_is_ambient() {
        // x = 299 companded to 1, full mix, normal blend: pure ambient
        let ctx = EvalContext {
            ambient: [0.25, 0.5, 0.75],
            blend: BlendMode::Normal,
            ..EvalContext::default()
        };
        let sample = evaluate(&ctx, CANVAS_SPAN, 0.0).unwrap();

        assert_relative_eq!(sample.rgb.x, 0.25, epsilon = 1e-6);
        assert_relative_eq!(sample.rgb.y, 0.5, epsilon = 1e-6);
        assert_relative_eq!(sample.rgb.z, 0.75, epsilon = 1e-6);
    }

    #[test]
    fn test_out_of_gamut_flagged() {
        // the Rec.2020 green primary expressed in sRGB coordinates leaves
        // the cube; the evaluator must surface it, not correct it
        let rec2020 = RgbModel::from_id(ModelId::Rec2020);
        let srgb = RgbModel::from_id(ModelId::Srgb);
        let green = srgb
            .from_xyz(rec2020.to_xyz(Vec3::new(0.0, 1.0, 0.0)))
            .to_array();

        let ctx = EvalContext {
            eigen: green,
            ambient_mix: 0.0,
            ..EvalContext::default()
        };
        let sample = evaluate(&ctx, 0.0, 0.0).unwrap();
        assert!(!sample.in_gamut);
        assert!(sample.rgb.min_element() < 0.0);
    }

    #[test]
    fn test_luma() {
        let white = Sample::classify(SpaceKind::CieLchUv, Vec3::ONE);
        assert_relative_eq!(white.luma(), 1.0, epsilon = 1e-12);

        let green = Sample::classify(SpaceKind::CieLchUv, Vec3::new(0.0, 1.0, 0.0));
        assert_relative_eq!(green.luma(), 0.5, epsilon = 1e-12);
    }

    #[test]
    fn test_evaluate_all_spaces() {
        for space in [SpaceKind::CieLchUv, SpaceKind::Hsluv, SpaceKind::OkLch] {
            let ctx = EvalContext {
                space,
                ambient_mix: 0.0,
                ..EvalContext::default()
            };
            let sample = evaluate(&ctx, 0.0, 0.0).unwrap();
            assert_relative_eq!(sample.rgb.x, 1.0, epsilon = 1e-6);
            assert_relative_eq!(sample.rgb.y, 0.0, epsilon = 1e-6);
            assert_relative_eq!(sample.rgb.z, 0.0, epsilon = 1e-6);
        }
    }
}
