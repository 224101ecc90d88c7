//! # picker-color
//!
//! Cylindrical color spaces, appearance transform, and ambient blending —
//! the conversion core of the picker.
//!
//! # Architecture
//!
//! ```text
//!        picker-color
//!             |
//!     +-------+-------+
//!     |               |
//! picker-primaries    |
//!     |               |
//!     +-------+-------+
//!             |
//!        picker-math
//! ```
//!
//! Data flows one direction through the pipeline:
//!
//! ```text
//! RGB -> XYZ -> cylindrical space -> ACAM -> blend -> XYZ -> RGB
//! ```
//!
//! Three interchangeable cylindrical spaces share one interface via
//! [`SpaceKind`]:
//!
//! - [`Lch`] - CIELCh(uv), lightness 0-100
//! - [`Hsluv`] - CIELCh(uv) with gamut-boundary-normalized saturation
//!   (see [`BoundingLines`])
//! - [`OkLch`] - cylindrical OKLab, lightness 0-1, D65 models only
//!
//! # Quick Start
//!
//! ```rust
//! use picker_color::{SpaceKind, acam, blend, BlendMode};
//! use picker_primaries::{RgbModel, ModelId};
//! use picker_math::Vec3;
//!
//! let model = RgbModel::from_id(ModelId::Srgb);
//! let space = SpaceKind::CieLchUv;
//!
//! // red, darkened and hue-shifted, mixed 30% toward white
//! let eigen = space.from_rgb(&model, Vec3::new(1.0, 0.0, 0.0))?;
//! let shifted = acam::transform_to_intermediate(space, &model, &eigen, 0.5, 0.8, false)?;
//! let ambient = space.rgb_to_intermediate(&model, Vec3::ONE)?;
//! let rgb = blend(&model, space, shifted, ambient, 0.3, BlendMode::Normal);
//! # Ok::<(), picker_color::ColorError>(())
//! ```
//!
//! # Error Handling
//!
//! Conversions are pure math; the only failures are construction from
//! partial input ([`ColorError::MissingComponent`]) and asking OKLCh to
//! work under a non-D65 white point
//! ([`ColorError::UnsupportedWhitePoint`]). Degenerate lightness/chroma
//! inputs take documented threshold branches instead of erroring, and
//! out-of-gamut results pass through unclamped for the caller to inspect.
//!
//! # Used By
//!
//! - `picker-eval` - swatch and gradient evaluation

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

mod error;
pub mod acam;
pub mod adapter;
pub mod blend;
pub mod hsluv;
pub mod luv;
pub mod oklab;

pub use adapter::{Appearance, LUV_GAMUT_EPSILON, OKLAB_GAMUT_EPSILON, SpaceKind, rgb_from_parts};
pub use blend::{BlendMode, blend};
pub use error::{ColorError, ColorResult};
pub use hsluv::{BoundingLines, Hsluv};
pub use luv::{Lch, luv_to_xyz, xyz_to_luv};
pub use oklab::{OkLch, oklab_to_xyz, xyz_to_oklab};
