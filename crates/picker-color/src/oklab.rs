//! OKLab and its cylindrical form OKLCh.
//!
//! Two 3x3 linear maps sandwiching a component-wise cube root, per Björn
//! Ottosson's published D65 matrices
//! (<https://bottosson.github.io/posts/oklab/>). Lightness is 0-1 here,
//! unlike the 0-100 scale of the Luv-backed spaces.
//!
//! The published matrices are valid for a D65 white point only; adapting
//! to another white point would require swapping both matrices
//! consistently, so non-D65 models are rejected up front.

use crate::error::{ColorError, ColorResult};
use picker_math::{Mat3, Vec3};
use picker_primaries::{D65_XY, RgbModel};

/// XYZ (D65) to LMS cone response.
const OKLAB_M1: Mat3 = Mat3::from_rows([
    [0.8189330101, 0.3618667424, -0.1288597137],
    [0.0329845436, 0.9293118715, 0.0361456387],
    [0.0482003018, 0.2643662691, 0.6338517070],
]);

/// Nonlinear LMS to Lab.
const OKLAB_M2: Mat3 = Mat3::from_rows([
    [0.2104542553, 0.7936177850, -0.0040720468],
    [1.9779984951, -2.4285922050, 0.4505937099],
    [0.0259040371, 0.7827717662, -0.8086757660],
]);

/// Tolerance when matching a model's white point against D65.
const D65_TOLERANCE: f64 = 1e-3;

/// Rejects models whose white point is not D65.
pub(crate) fn ensure_d65(model: &RgbModel) -> ColorResult<()> {
    let (wx, wy) = model.white;
    if (wx - D65_XY.0).abs() > D65_TOLERANCE || (wy - D65_XY.1).abs() > D65_TOLERANCE {
        return Err(ColorError::UnsupportedWhitePoint { space: "OKLCh", wx, wy });
    }
    Ok(())
}

/// XYZ (D65) to OKLab: M1, cube root, M2.
pub fn xyz_to_oklab(xyz: Vec3) -> Vec3 {
    let lms = OKLAB_M1 * xyz;
    let lms_p = Vec3::new(lms.x.cbrt(), lms.y.cbrt(), lms.z.cbrt());
    OKLAB_M2 * lms_p
}

/// OKLab to XYZ (D65): inverse of M2, cube, inverse of M1.
pub fn oklab_to_xyz(lab: Vec3) -> Vec3 {
    let lms_p = OKLAB_M2.inverse().unwrap_or(Mat3::IDENTITY) * lab;
    let lms = Vec3::new(
        lms_p.x * lms_p.x * lms_p.x,
        lms_p.y * lms_p.y * lms_p.y,
        lms_p.z * lms_p.z * lms_p.z,
    );
    OKLAB_M1.inverse().unwrap_or(Mat3::IDENTITY) * lms
}

/// An OKLCh color: lightness 0-1, chroma >= 0, hue in [0, 360).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct OkLch {
    /// Lightness, 0-1.
    pub l: f64,
    /// Chroma, >= 0 (roughly 0-0.33 for in-gamut sRGB).
    pub c: f64,
    /// Hue in degrees.
    pub h: f64,
}

impl OkLch {
    /// Creates an OkLch color from its three components.
    #[inline]
    pub const fn new(l: f64, c: f64, h: f64) -> Self {
        Self { l, c, h }
    }

    /// Creates an OkLch color from optional components.
    ///
    /// Fails with [`ColorError::MissingComponent`] if any is absent.
    pub fn from_parts(l: Option<f64>, c: Option<f64>, h: Option<f64>) -> ColorResult<Self> {
        Ok(Self {
            l: l.ok_or(ColorError::MissingComponent { field: "lightness" })?,
            c: c.ok_or(ColorError::MissingComponent { field: "chroma" })?,
            h: h.ok_or(ColorError::MissingComponent { field: "hue" })?,
        })
    }

    /// Converts linear RGB under the given model to OkLch.
    ///
    /// Fails with [`ColorError::UnsupportedWhitePoint`] for non-D65
    /// models.
    pub fn from_rgb(model: &RgbModel, rgb: Vec3) -> ColorResult<Self> {
        ensure_d65(model)?;
        let lab = xyz_to_oklab(model.to_xyz(rgb));
        let (l, a, b) = (lab.x, lab.y, lab.z);

        let c = (a * a + b * b).sqrt();
        let h = b.atan2(a).to_degrees().rem_euclid(360.0);
        Ok(Self { l, c, h })
    }

    /// Converts back to linear RGB under the given model. Unclamped.
    pub fn to_rgb(&self, model: &RgbModel) -> ColorResult<Vec3> {
        ensure_d65(model)?;
        Ok(model.from_xyz(oklab_to_xyz(self.to_lab())))
    }

    /// The rectangular (L, a, b) intermediate triple.
    #[inline]
    pub fn to_lab(&self) -> Vec3 {
        let hrad = self.h.to_radians();
        Vec3::new(self.l, self.c * hrad.cos(), self.c * hrad.sin())
    }
}
