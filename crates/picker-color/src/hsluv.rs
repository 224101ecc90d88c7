//! HSLuv: CIELCh(uv) with chroma rescaled to the gamut boundary.
//!
//! Saturation ranges uniformly 0-100 regardless of gamut shape: `s` is the
//! fraction of the maximum chroma reachable at that lightness and hue
//! inside the RGB model's cube. The boundary solver follows Alexei
//! Boronine's HSLuv derivation, generalized to read the channel rows of
//! the active model's XYZ-to-RGB matrix instead of hardcoding sRGB.

use crate::error::{ColorError, ColorResult};
use crate::luv::Lch;
use picker_math::Vec3;
use picker_primaries::RgbModel;

// Constants as published in the HSLuv reference implementation.
const KAPPA: f64 = 903.2962962;
const EPSILON: f64 = 0.0088564516;

/// Above this lightness the color is treated as white: saturation 0,
/// boundary solve skipped (it degenerates).
const L_MAX: f64 = 99.9999999;

/// Below this lightness the color is treated as black.
const L_MIN: f64 = 1e-8;

/// Signed distance from the origin to a line, along the ray at `angle`.
///
/// A negative distance means the ray leaves the gamut through the
/// opposite side; treated as unbounded.
fn distance_from_origin_angle(slope: f64, intercept: f64, angle: f64) -> f64 {
    let d = intercept / (angle.sin() - slope * angle.cos());
    if d < 0.0 { f64::INFINITY } else { d }
}

/// The six gamut-boundary lines for one lightness value.
///
/// For each RGB channel, two lines in (u, v)-chromaticity space mark
/// where that channel would clip to 0 and to 1. Lines depend on
/// lightness through the CIE L\* inverse threshold, so they must be
/// recomputed whenever lightness changes; conversions rebuild them per
/// call (interactive rate, no caching).
#[derive(Debug, Clone, Copy)]
pub struct BoundingLines {
    /// (slope, intercept) for R0, R1, G0, G1, B0, B1.
    lines: [(f64, f64); 6],
}

impl BoundingLines {
    /// Computes the boundary lines for lightness `l` under `model`.
    pub fn new(model: &RgbModel, l: f64) -> Self {
        let sub1 = (l + 16.0).powi(3) / 1560896.0;
        let sub2 = if sub1 > EPSILON { sub1 } else { l / KAPPA };

        let mut lines = [(0.0, 0.0); 6];
        for ch in 0..3 {
            let row = model.xyz_to_rgb.row(ch);
            let (m0, m1, m2) = (row.x, row.y, row.z);

            let s1 = sub2 * (284517.0 * m0 - 94839.0 * m2);
            let s2 = sub2 * (838422.0 * m2 + 769860.0 * m1 + 731718.0 * m0);
            let s3 = sub2 * (632260.0 * m2 - 126452.0 * m1);

            // channel = 0 plane
            lines[2 * ch] = (s1 / s3, s2 * l / s3);
            // channel = 1 plane
            lines[2 * ch + 1] = (
                s1 / (s3 + 126452.0),
                (s2 - 769860.0) * l / (s3 + 126452.0),
            );
        }
        Self { lines }
    }

    /// Maximum chroma at which the ray at hue `h` (degrees) stays inside
    /// the RGB cube for this lightness.
    pub fn max_chroma(&self, h: f64) -> f64 {
        let hrad = h.to_radians();
        self.lines
            .iter()
            .map(|&(slope, intercept)| distance_from_origin_angle(slope, intercept, hrad))
            .fold(f64::INFINITY, f64::min)
    }
}

/// An HSLuv color: hue in degrees, saturation 0-100, lightness 0-100.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Hsluv {
    /// Hue in degrees.
    pub h: f64,
    /// Saturation, 0-100 (fraction of the gamut-boundary chroma).
    pub s: f64,
    /// Lightness, 0-100.
    pub l: f64,
}

impl Hsluv {
    /// Creates an Hsluv color from its three components.
    #[inline]
    pub const fn new(h: f64, s: f64, l: f64) -> Self {
        Self { h, s, l }
    }

    /// Creates an Hsluv color from optional components.
    ///
    /// Fails with [`ColorError::MissingComponent`] if any is absent.
    pub fn from_parts(h: Option<f64>, s: Option<f64>, l: Option<f64>) -> ColorResult<Self> {
        Ok(Self {
            h: h.ok_or(ColorError::MissingComponent { field: "hue" })?,
            s: s.ok_or(ColorError::MissingComponent { field: "saturation" })?,
            l: l.ok_or(ColorError::MissingComponent { field: "lightness" })?,
        })
    }

    /// Converts from Lch, normalizing chroma against the gamut boundary.
    ///
    /// Lightness at the extremes bypasses the boundary solve: white and
    /// black have no well-defined boundary chroma (divide-by-zero /
    /// undefined hue), so saturation is pinned to 0 there.
    pub fn from_lch(model: &RgbModel, lch: Lch) -> Self {
        if lch.l > L_MAX {
            Self { h: lch.h, s: 0.0, l: 100.0 }
        } else if lch.l < L_MIN {
            Self { h: lch.h, s: 0.0, l: 0.0 }
        } else {
            let max = BoundingLines::new(model, lch.l).max_chroma(lch.h);
            Self { h: lch.h, s: lch.c / max * 100.0, l: lch.l }
        }
    }

    /// Converts back to Lch. Exact mirror of [`Hsluv::from_lch`].
    pub fn to_lch(&self, model: &RgbModel) -> Lch {
        if self.l > L_MAX {
            Lch::new(100.0, 0.0, self.h)
        } else if self.l < L_MIN {
            Lch::new(0.0, 0.0, self.h)
        } else {
            let max = BoundingLines::new(model, self.l).max_chroma(self.h);
            Lch::new(self.l, max / 100.0 * self.s, self.h)
        }
    }

    /// Converts linear RGB under the given model to HSLuv.
    pub fn from_rgb(model: &RgbModel, rgb: Vec3) -> Self {
        Self::from_lch(model, Lch::from_rgb(model, rgb))
    }

    /// Converts back to linear RGB under the given model. Unclamped.
    pub fn to_rgb(&self, model: &RgbModel) -> Vec3 {
        self.to_lch(model).to_rgb(model)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use picker_primaries::ModelId;

    #[test]
    fn test_max_chroma_finite_positive() {
        let model = RgbModel::from_id(ModelId::Srgb);
        for l in [0.5, 10.0, 35.0, 50.0, 75.0, 99.0] {
            let lines = BoundingLines::new(&model, l);
            for h in (0..360).step_by(15) {
                let max = lines.max_chroma(h as f64);
                assert!(max.is_finite() && max > 0.0, "l={} h={} max={}", l, h, max);
            }
        }
    }

    #[test]
    fn test_boundary_is_tight() {
        // a color placed exactly on the boundary touches a cube face
        let model = RgbModel::from_id(ModelId::Srgb);
        for (l, h) in [(50.0, 20.0), (30.0, 150.0), (70.0, 300.0)] {
            let max = BoundingLines::new(&model, l).max_chroma(h);
            let rgb = Lch::new(l, max, h).to_rgb(&model);
            let touches = rgb.to_array().iter().any(|&c| c.abs() < 1e-3 || (c - 1.0).abs() < 1e-3);
            assert!(touches, "l={} h={} rgb={:?}", l, h, rgb);
        }
    }

    #[test]
    fn test_hsluv_roundtrip() {
        let model = RgbModel::from_id(ModelId::Srgb);
        let rgb = Vec3::new(0.2, 0.6, 0.4);
        let back = Hsluv::from_rgb(&model, rgb).to_rgb(&model);

        assert_relative_eq!(rgb.x, back.x, epsilon = 1e-7);
        assert_relative_eq!(rgb.y, back.y, epsilon = 1e-7);
        assert_relative_eq!(rgb.z, back.z, epsilon = 1e-7);
    }

    #[test]
    fn test_degenerate_lightness() {
        let model = RgbModel::from_id(ModelId::Srgb);

        let white = Hsluv::from_lch(&model, Lch::new(100.0, 50.0, 213.0));
        assert_eq!((white.s, white.l), (0.0, 100.0));

        let black = Hsluv::from_lch(&model, Lch::new(0.0, 50.0, 213.0));
        assert_eq!((black.s, black.l), (0.0, 0.0));
    }

    #[test]
    fn test_saturation_range() {
        // fully saturated primaries sit on the boundary: s == 100
        let model = RgbModel::from_id(ModelId::Srgb);
        for rgb in [Vec3::new(1.0, 0.0, 0.0), Vec3::new(0.0, 1.0, 0.0), Vec3::new(0.0, 0.0, 1.0)] {
            let hsluv = Hsluv::from_rgb(&model, rgb);
            assert_relative_eq!(hsluv.s, 100.0, epsilon = 1e-6);
        }
    }
}
