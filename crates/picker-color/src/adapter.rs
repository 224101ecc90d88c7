//! The unified cylindrical-space adapter.
//!
//! The picker pipeline is identical for every supported color space; only
//! the RGB ↔ cylindrical mapping differs. [`SpaceKind`] is the tagged
//! selector carrying that capability set, so one generic pipeline serves
//! CIELCh(uv), HSLuv, and OKLCh instead of three near-duplicate ones.
//!
//! [`Appearance`] is the shared hue/saturation/lightness triple the
//! appearance transform and the evaluator operate on. Its `s` and `l`
//! stay in the source space's native scale: 0-100 lightness and raw
//! chroma for CIELCh(uv), 0-100 saturation for HSLuv, 0-1 lightness and
//! raw chroma for OKLCh.

use crate::error::{ColorError, ColorResult};
use crate::hsluv::Hsluv;
use crate::luv::{Lch, luv_to_xyz, xyz_to_luv};
use crate::oklab::{OkLch, oklab_to_xyz, xyz_to_oklab};
use picker_math::Vec3;
use picker_primaries::RgbModel;
use serde::{Deserialize, Serialize};

/// Out-of-gamut threshold for the Luv-backed pipelines.
///
/// A channel below this value flags the result as out of gamut. The two
/// pipelines in the original tool shipped with slightly different
/// thresholds; both are kept as-is.
pub const LUV_GAMUT_EPSILON: f64 = -0.001961;

/// Out-of-gamut threshold for the OKLCh pipeline.
pub const OKLAB_GAMUT_EPSILON: f64 = -0.00002;

/// An appearance-space color: hue in degrees, saturation/chroma, lightness.
///
/// The saturation axis is "chroma-like": whatever the source space's
/// second cylindrical coordinate is, subject to lockstep scaling with
/// lightness by the evaluator.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Appearance {
    /// Hue in degrees.
    pub h: f64,
    /// Saturation or chroma, in the source space's scale.
    pub s: f64,
    /// Lightness, in the source space's scale.
    pub l: f64,
}

impl Appearance {
    /// Creates an appearance triple from its three components.
    #[inline]
    pub const fn new(h: f64, s: f64, l: f64) -> Self {
        Self { h, s, l }
    }

    /// Creates an appearance triple from optional components.
    ///
    /// Fails with [`ColorError::MissingComponent`] if any is absent.
    pub fn from_parts(h: Option<f64>, s: Option<f64>, l: Option<f64>) -> ColorResult<Self> {
        Ok(Self {
            h: h.ok_or(ColorError::MissingComponent { field: "hue" })?,
            s: s.ok_or(ColorError::MissingComponent { field: "saturation" })?,
            l: l.ok_or(ColorError::MissingComponent { field: "lightness" })?,
        })
    }
}

/// Assembles an RGB triple from optional components.
///
/// Fails with [`ColorError::MissingComponent`] if any channel is absent;
/// the RGB-side counterpart of [`Appearance::from_parts`].
pub fn rgb_from_parts(r: Option<f64>, g: Option<f64>, b: Option<f64>) -> ColorResult<Vec3> {
    Ok(Vec3::new(
        r.ok_or(ColorError::MissingComponent { field: "red" })?,
        g.ok_or(ColorError::MissingComponent { field: "green" })?,
        b.ok_or(ColorError::MissingComponent { field: "blue" })?,
    ))
}

/// Selector for the active cylindrical color space.
///
/// Chosen by the UI, threaded through every evaluation as explicit state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum SpaceKind {
    /// CIELCh(uv): cylindrical CIE L\*u\*v\*.
    #[default]
    CieLchUv,
    /// HSLuv: CIELCh(uv) with gamut-boundary-normalized saturation.
    Hsluv,
    /// OKLCh: cylindrical OKLab. D65 models only.
    OkLch,
}

impl SpaceKind {
    /// Human-readable name.
    pub const fn name(self) -> &'static str {
        match self {
            SpaceKind::CieLchUv => "CIELCh(uv)",
            SpaceKind::Hsluv => "HSLuv",
            SpaceKind::OkLch => "OKLCh",
        }
    }

    /// The out-of-gamut channel threshold for this space's pipeline.
    pub const fn gamut_epsilon(self) -> f64 {
        match self {
            SpaceKind::CieLchUv | SpaceKind::Hsluv => LUV_GAMUT_EPSILON,
            SpaceKind::OkLch => OKLAB_GAMUT_EPSILON,
        }
    }

    /// Converts linear RGB to the appearance triple.
    pub fn from_rgb(self, model: &RgbModel, rgb: Vec3) -> ColorResult<Appearance> {
        match self {
            SpaceKind::CieLchUv => {
                let lch = Lch::from_rgb(model, rgb);
                Ok(Appearance::new(lch.h, lch.c, lch.l))
            }
            SpaceKind::Hsluv => {
                let hsluv = Hsluv::from_rgb(model, rgb);
                Ok(Appearance::new(hsluv.h, hsluv.s, hsluv.l))
            }
            SpaceKind::OkLch => {
                let lch = OkLch::from_rgb(model, rgb)?;
                Ok(Appearance::new(lch.h, lch.c, lch.l))
            }
        }
    }

    /// Converts an appearance triple back to linear RGB. Unclamped.
    pub fn to_rgb(self, model: &RgbModel, color: &Appearance) -> ColorResult<Vec3> {
        match self {
            SpaceKind::CieLchUv => Ok(Lch::new(color.l, color.s, color.h).to_rgb(model)),
            SpaceKind::Hsluv => Ok(Hsluv::new(color.h, color.s, color.l).to_rgb(model)),
            SpaceKind::OkLch => OkLch::new(color.l, color.s, color.h).to_rgb(model),
        }
    }

    /// Converts an appearance triple to the rectangular intermediate:
    /// (L, u, v) for the Luv family, (L, a, b) for OKLCh.
    pub fn to_intermediate(self, model: &RgbModel, color: &Appearance) -> ColorResult<Vec3> {
        match self {
            SpaceKind::CieLchUv => Ok(Lch::new(color.l, color.s, color.h).to_luv()),
            SpaceKind::Hsluv => Ok(Hsluv::new(color.h, color.s, color.l).to_lch(model).to_luv()),
            SpaceKind::OkLch => Ok(OkLch::new(color.l, color.s, color.h).to_lab()),
        }
    }

    /// Converts linear RGB straight to the rectangular intermediate,
    /// skipping the polar detour. Used for the ambient color.
    pub fn rgb_to_intermediate(self, model: &RgbModel, rgb: Vec3) -> ColorResult<Vec3> {
        match self {
            SpaceKind::CieLchUv | SpaceKind::Hsluv => Ok(xyz_to_luv(model, model.to_xyz(rgb))),
            SpaceKind::OkLch => {
                crate::oklab::ensure_d65(model)?;
                Ok(xyz_to_oklab(model.to_xyz(rgb)))
            }
        }
    }

    /// Converts a rectangular intermediate triple back to linear RGB.
    /// Unclamped.
    ///
    /// Infallible: the intermediate only exists once the model passed the
    /// variant's validation on the way in.
    pub fn intermediate_to_rgb(self, model: &RgbModel, tri: Vec3) -> Vec3 {
        match self {
            SpaceKind::CieLchUv | SpaceKind::Hsluv => model.from_xyz(luv_to_xyz(model, tri)),
            SpaceKind::OkLch => model.from_xyz(oklab_to_xyz(tri)),
        }
    }
}
