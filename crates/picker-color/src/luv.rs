//! CIE L\*u\*v\* and its cylindrical form CIELCh(uv).
//!
//! Forward/inverse formulas follow Bruce Lindbloom
//! (<http://www.brucelindbloom.com/>), computed against the active
//! [`RgbModel`]'s reference white rather than a hardcoded illuminant.
//!
//! [`Lch`] is the cylindrical reparametrization: `l` 0-100, `c >= 0`
//! (roughly 0-180 for in-gamut sRGB), `h` degrees wrapped to [0, 360).

use crate::error::{ColorError, ColorResult};
use picker_math::Vec3;
use picker_primaries::RgbModel;

/// CIE threshold (6/29)^3 separating the cube-root and linear branches.
const CIE_EPSILON: f64 = 216.0 / 24389.0;

/// CIE kappa (29/3)^3, slope of the linear branch.
const CIE_KAPPA: f64 = 24389.0 / 27.0;

/// Lightness below which the inverse returns black outright.
///
/// Avoids dividing by the near-zero `13 * L` terms.
const L_BLACK: f64 = 1e-6;

/// u'v' chromaticity of an XYZ sample.
///
/// Returns (0, 0) for a zero-energy sample, where the chromaticity
/// denominator vanishes and hue is undefined.
fn chromaticity_uv(xyz: Vec3) -> (f64, f64) {
    let denom = xyz.x + 15.0 * xyz.y + 3.0 * xyz.z;
    if denom.abs() < 1e-14 {
        (0.0, 0.0)
    } else {
        (4.0 * xyz.x / denom, 9.0 * xyz.y / denom)
    }
}

/// XYZ to L\*u\*v\* relative to the model's reference white.
///
/// Returns `(L, u, v)` with `L` in 0-100 and `u`, `v` roughly -100..100
/// for in-gamut input.
pub fn xyz_to_luv(model: &RgbModel, xyz: Vec3) -> Vec3 {
    let white = model.white_xyz();
    let yr = xyz.y / white.y;
    let (up, vp) = chromaticity_uv(xyz);
    let (upr, vpr) = chromaticity_uv(white);

    let l = if yr > CIE_EPSILON {
        116.0 * yr.cbrt() - 16.0
    } else {
        CIE_KAPPA * yr
    };
    Vec3::new(l, 13.0 * l * (up - upr), 13.0 * l * (vp - vpr))
}

/// L\*u\*v\* to XYZ relative to the model's reference white.
///
/// Solves the 2x2 linear system for X and Z given L, u, v. Lightness
/// below [`L_BLACK`] short-circuits to black.
pub fn luv_to_xyz(model: &RgbModel, luv: Vec3) -> Vec3 {
    let (l, u, v) = (luv.x, luv.y, luv.z);
    if l < L_BLACK {
        return Vec3::ZERO;
    }

    let white = model.white_xyz();
    let (upr, vpr) = chromaticity_uv(white);

    let y = if l > 8.0 {
        ((l + 16.0) / 116.0).powi(3)
    } else {
        l * 27.0 / 24389.0
    };

    let a = (1.0 / 3.0) * ((52.0 * l / (u + 13.0 * l * upr)) - 1.0);
    let b = -5.0 * y;
    let c = -1.0 / 3.0;
    let d = y * ((39.0 * l / (v + 13.0 * l * vpr)) - 5.0);

    let x = (d - b) / (a - c);
    let z = x * a + b;
    Vec3::new(x, y, z)
}

/// A CIELCh(uv) color: lightness 0-100, chroma >= 0, hue in [0, 360).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Lch {
    /// Lightness, 0-100.
    pub l: f64,
    /// Chroma, >= 0.
    pub c: f64,
    /// Hue in degrees.
    pub h: f64,
}

impl Lch {
    /// Creates an Lch color from its three components.
    #[inline]
    pub const fn new(l: f64, c: f64, h: f64) -> Self {
        Self { l, c, h }
    }

    /// Creates an Lch color from optional components.
    ///
    /// Fails with [`ColorError::MissingComponent`] if any component is
    /// absent; intended for callers assembling a color from partial UI or
    /// config input.
    pub fn from_parts(l: Option<f64>, c: Option<f64>, h: Option<f64>) -> ColorResult<Self> {
        Ok(Self {
            l: l.ok_or(ColorError::MissingComponent { field: "lightness" })?,
            c: c.ok_or(ColorError::MissingComponent { field: "chroma" })?,
            h: h.ok_or(ColorError::MissingComponent { field: "hue" })?,
        })
    }

    /// Converts linear RGB under the given model to Lch.
    pub fn from_rgb(model: &RgbModel, rgb: Vec3) -> Self {
        let luv = xyz_to_luv(model, model.to_xyz(rgb));
        let (l, u, v) = (luv.x, luv.y, luv.z);

        let c = (u * u + v * v).sqrt();
        let h = v.atan2(u).to_degrees().rem_euclid(360.0);
        Self { l, c, h }
    }

    /// Converts back to linear RGB under the given model. Unclamped.
    pub fn to_rgb(&self, model: &RgbModel) -> Vec3 {
        model.from_xyz(luv_to_xyz(model, self.to_luv()))
    }

    /// The rectangular (L, u, v) intermediate triple.
    #[inline]
    pub fn to_luv(&self) -> Vec3 {
        let hrad = self.h.to_radians();
        Vec3::new(self.l, self.c * hrad.cos(), self.c * hrad.sin())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use picker_primaries::ModelId;

    #[test]
    fn test_luv_roundtrip() {
        let model = RgbModel::from_id(ModelId::Srgb);
        let xyz = model.to_xyz(Vec3::new(0.4, 0.7, 0.2));
        let back = luv_to_xyz(&model, xyz_to_luv(&model, xyz));

        assert_relative_eq!(xyz.x, back.x, epsilon = 1e-9);
        assert_relative_eq!(xyz.y, back.y, epsilon = 1e-9);
        assert_relative_eq!(xyz.z, back.z, epsilon = 1e-9);
    }

    #[test]
    fn test_lch_roundtrip() {
        let model = RgbModel::from_id(ModelId::Srgb);
        let rgb = Vec3::new(0.8, 0.1, 0.3);
        let back = Lch::from_rgb(&model, rgb).to_rgb(&model);

        assert_relative_eq!(rgb.x, back.x, epsilon = 1e-7);
        assert_relative_eq!(rgb.y, back.y, epsilon = 1e-7);
        assert_relative_eq!(rgb.z, back.z, epsilon = 1e-7);
    }

    #[test]
    fn test_black_short_circuit() {
        let model = RgbModel::from_id(ModelId::Srgb);
        assert_eq!(luv_to_xyz(&model, Vec3::new(1e-8, 5.0, -3.0)), Vec3::ZERO);
    }

    #[test]
    fn test_hue_wrapped() {
        let model = RgbModel::from_id(ModelId::Srgb);
        // blue sits at a negative atan2 angle before wrapping
        let lch = Lch::from_rgb(&model, Vec3::new(0.0, 0.0, 1.0));
        assert!(lch.h >= 0.0 && lch.h < 360.0);
        assert!(lch.h > 180.0, "blue hue should wrap into the upper half, got {}", lch.h);
    }

    #[test]
    fn test_white_is_achromatic() {
        let model = RgbModel::from_id(ModelId::Srgb);
        let lch = Lch::from_rgb(&model, Vec3::ONE);
        assert_relative_eq!(lch.l, 100.0, epsilon = 1e-6);
        assert!(lch.c.abs() < 1e-6);
    }

    #[test]
    fn test_from_parts_missing() {
        assert_eq!(
            Lch::from_parts(Some(50.0), None, Some(120.0)),
            Err(ColorError::MissingComponent { field: "chroma" })
        );
        assert!(Lch::from_parts(Some(50.0), Some(30.0), Some(120.0)).is_ok());
    }
}
