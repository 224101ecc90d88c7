//! # picker-primaries
//!
//! Color primaries, white points, and RGB-XYZ model generation.
//!
//! This crate defines the device side of the picker pipeline: an
//! [`RgbModel`] is a precomputed pair of linear transforms between a
//! working RGB space and CIE XYZ, derived from the chromaticity
//! coordinates of its primaries and white point.
//!
//! # Contract
//!
//! Both directions operate on **linear-light** values and are
//! **unclamped**: a conversion result outside [0, 1] passes through so
//! callers can detect gamut excursions. No gamma/companding happens here.
//!
//! # Included models
//!
//! | Model | Gamut | White |
//! |-------|-------|-------|
//! | sRGB | Small | D65 |
//! | Display P3 | Medium | D65 |
//! | Adobe RGB | Medium | D65 |
//! | Rec.2020 | Large | D65 |
//!
//! Adding a model means supplying a new [`Primaries`] constant, nothing
//! else.
//!
//! # Usage
//!
//! ```rust
//! use picker_primaries::{RgbModel, ModelId};
//! use picker_math::Vec3;
//!
//! let model = RgbModel::from_id(ModelId::Srgb);
//! let xyz = model.to_xyz(Vec3::new(1.0, 0.0, 0.0));
//! let back = model.from_xyz(xyz);
//! assert!((back.x - 1.0).abs() < 1e-9);
//! ```
//!
//! # Used By
//!
//! - `picker-color` - cylindrical color space conversions
//! - `picker-eval` - evaluation context model selection

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

use picker_math::{Mat3, Vec3};
use serde::{Deserialize, Serialize};

/// RGB color space primaries definition.
///
/// Defines a color space by its three primary colors (R, G, B) and white
/// point, all specified as CIE xy chromaticity coordinates.
///
/// # Example
///
/// ```rust
/// use picker_primaries::Primaries;
///
/// let my_space = Primaries {
///     r: (0.64, 0.33),
///     g: (0.30, 0.60),
///     b: (0.15, 0.06),
///     w: (0.3127, 0.3290),
///     name: "Custom",
/// };
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Primaries {
    /// Red primary (x, y) chromaticity
    pub r: (f64, f64),
    /// Green primary (x, y) chromaticity
    pub g: (f64, f64),
    /// Blue primary (x, y) chromaticity
    pub b: (f64, f64),
    /// White point (x, y) chromaticity
    pub w: (f64, f64),
    /// Color space name
    pub name: &'static str,
}

impl Primaries {
    /// White point as XYZ (Y=1).
    #[inline]
    pub fn white_xyz(&self) -> Vec3 {
        xy_to_xyz(self.w.0, self.w.1)
    }
}

// ============================================================================
// Standard White Points
// ============================================================================

/// D65 white point chromaticity (daylight, ~6500K).
pub const D65_XY: (f64, f64) = (0.31270, 0.32900);

/// D50 white point chromaticity (~5000K).
pub const D50_XY: (f64, f64) = (0.34567, 0.35850);

/// DCI white point chromaticity (theatrical projection).
pub const DCI_XY: (f64, f64) = (0.31400, 0.35100);

// ============================================================================
// Built-in Model Primaries
// ============================================================================

/// sRGB / Rec.709 primaries (D65 white point).
pub const SRGB: Primaries = Primaries {
    r: (0.6400, 0.3300),
    g: (0.3000, 0.6000),
    b: (0.1500, 0.0600),
    w: D65_XY,
    name: "sRGB",
};

/// Display P3 primaries (D65 white point).
///
/// Apple's wide gamut display standard, based on DCI-P3 primaries
/// but with a D65 white point.
pub const DISPLAY_P3: Primaries = Primaries {
    r: (0.6800, 0.3200),
    g: (0.2650, 0.6900),
    b: (0.1500, 0.0600),
    w: D65_XY,
    name: "Display P3",
};

/// Adobe RGB (1998) primaries (D65 white point).
pub const ADOBE_RGB: Primaries = Primaries {
    r: (0.6400, 0.3300),
    g: (0.2100, 0.7100),
    b: (0.1500, 0.0600),
    w: D65_XY,
    name: "Adobe RGB",
};

/// Rec.2020 primaries (D65 white point).
pub const REC2020: Primaries = Primaries {
    r: (0.7080, 0.2920),
    g: (0.1700, 0.7970),
    b: (0.1310, 0.0460),
    w: D65_XY,
    name: "Rec.2020",
};

// ============================================================================
// Matrix Generation
// ============================================================================

/// Converts xy chromaticity to XYZ (with Y=1).
fn xy_to_xyz(x: f64, y: f64) -> Vec3 {
    if y.abs() < 1e-14 {
        Vec3::ZERO
    } else {
        Vec3::new(x / y, 1.0, (1.0 - x - y) / y)
    }
}

/// Computes the RGB to XYZ matrix for a set of primaries.
///
/// # Algorithm
///
/// 1. Convert xy chromaticities to XYZ (with Y=1)
/// 2. Compute scaling factors so white point maps correctly
/// 3. Multiply primaries by scaling factors
///
/// # Example
///
/// ```rust
/// use picker_primaries::{SRGB, rgb_to_xyz_matrix};
/// use picker_math::Vec3;
///
/// let m = rgb_to_xyz_matrix(&SRGB);
///
/// // White (1,1,1) maps to the white point XYZ, with Y normalized to 1
/// let white = m * Vec3::ONE;
/// assert!((white.y - 1.0).abs() < 1e-9);
/// ```
pub fn rgb_to_xyz_matrix(primaries: &Primaries) -> Mat3 {
    let r_xyz = xy_to_xyz(primaries.r.0, primaries.r.1);
    let g_xyz = xy_to_xyz(primaries.g.0, primaries.g.1);
    let b_xyz = xy_to_xyz(primaries.b.0, primaries.b.1);
    let w_xyz = xy_to_xyz(primaries.w.0, primaries.w.1);

    // Solve M * S = W for the per-primary scaling factors
    let m = Mat3::from_col_vecs(r_xyz, g_xyz, b_xyz);
    let m_inv = m.inverse().unwrap_or(Mat3::IDENTITY);
    let s = m_inv * w_xyz;

    Mat3::from_col_vecs(r_xyz * s.x, g_xyz * s.y, b_xyz * s.z)
}

/// Computes the XYZ to RGB matrix for a set of primaries.
///
/// This is the inverse of [`rgb_to_xyz_matrix`].
pub fn xyz_to_rgb_matrix(primaries: &Primaries) -> Mat3 {
    rgb_to_xyz_matrix(primaries)
        .inverse()
        .unwrap_or(Mat3::IDENTITY)
}

// ============================================================================
// RGB Model
// ============================================================================

/// Identifier for a built-in RGB model.
///
/// This is the externally-held selection state of the picker: the UI picks
/// a model id, the evaluation context resolves it to an [`RgbModel`] per
/// call.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum ModelId {
    /// sRGB / Rec.709.
    #[default]
    Srgb,
    /// Display P3 (DCI-P3 primaries, D65 white).
    DisplayP3,
    /// Adobe RGB (1998).
    AdobeRgb,
    /// Rec.2020.
    Rec2020,
}

impl ModelId {
    /// All built-in model ids, in UI order.
    pub const ALL: [ModelId; 4] = [
        ModelId::Srgb,
        ModelId::DisplayP3,
        ModelId::AdobeRgb,
        ModelId::Rec2020,
    ];

    /// The primaries this id resolves to.
    pub const fn primaries(self) -> &'static Primaries {
        match self {
            ModelId::Srgb => &SRGB,
            ModelId::DisplayP3 => &DISPLAY_P3,
            ModelId::AdobeRgb => &ADOBE_RGB,
            ModelId::Rec2020 => &REC2020,
        }
    }

    /// Human-readable name.
    pub const fn name(self) -> &'static str {
        self.primaries().name
    }
}

/// An immutable RGB working-space model: a precomputed pair of linear
/// transforms to and from CIE XYZ.
///
/// Invariant: `from_xyz(to_xyz(rgb))` round-trips to floating-point
/// tolerance for all inputs. Neither direction clamps; out-of-gamut
/// values pass through so callers can detect them.
///
/// # Example
///
/// ```rust
/// use picker_primaries::{RgbModel, SRGB};
/// use picker_math::Vec3;
///
/// let model = RgbModel::new(&SRGB);
/// let rgb = Vec3::new(0.5, 0.3, 0.8);
/// let back = model.from_xyz(model.to_xyz(rgb));
/// assert!((back - rgb).to_array().iter().all(|d| d.abs() < 1e-9));
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RgbModel {
    /// RGB to XYZ matrix.
    pub rgb_to_xyz: Mat3,
    /// XYZ to RGB matrix (inverse of `rgb_to_xyz`).
    pub xyz_to_rgb: Mat3,
    /// White point (x, y) chromaticity.
    pub white: (f64, f64),
    /// Model name.
    pub name: &'static str,
}

impl RgbModel {
    /// Builds a model from primaries.
    pub fn new(primaries: &Primaries) -> Self {
        let rgb_to_xyz = rgb_to_xyz_matrix(primaries);
        let xyz_to_rgb = rgb_to_xyz.inverse().unwrap_or(Mat3::IDENTITY);
        Self {
            rgb_to_xyz,
            xyz_to_rgb,
            white: primaries.w,
            name: primaries.name,
        }
    }

    /// Builds a built-in model from its id.
    pub fn from_id(id: ModelId) -> Self {
        Self::new(id.primaries())
    }

    /// Linear RGB to XYZ. Unclamped.
    #[inline]
    pub fn to_xyz(&self, rgb: Vec3) -> Vec3 {
        self.rgb_to_xyz * rgb
    }

    /// XYZ to linear RGB. Unclamped.
    #[inline]
    pub fn from_xyz(&self, xyz: Vec3) -> Vec3 {
        self.xyz_to_rgb * xyz
    }

    /// The model's reference white as XYZ (the image of (1,1,1)).
    #[inline]
    pub fn white_xyz(&self) -> Vec3 {
        self.to_xyz(Vec3::ONE)
    }
}

impl From<ModelId> for RgbModel {
    fn from(id: ModelId) -> Self {
        Self::from_id(id)
    }
}
