//! # picker-math
//!
//! Math utilities for the color-picker core.
//!
//! This crate provides the numeric primitives the conversion pipeline is
//! built from:
//!
//! - [`Vec3`] - f64 triples for RGB, XYZ, and (L,u,v)/(L,a,b) values
//! - [`Mat3`] - 3x3 f64 matrices for RGB-XYZ transforms
//! - Interpolation and companding curves ([`lerp`], [`asin_compand`],
//!   [`sin_compand`])
//!
//! # Design
//!
//! All matrix operations assume **row-major** storage and **column
//! vectors**:
//!
//! ```text
//! result = matrix * vector
//! ```
//!
//! Everything here is `f64`: the picker's round-trip guarantees
//! (RGB -> cylindrical -> RGB within 1e-6) need double precision.
//! [`glam`]'s `DVec3`/`DMat3` are the interop surface for callers already
//! on that stack.
//!
//! # Usage
//!
//! ```rust
//! use picker_math::{Mat3, Vec3};
//!
//! // sRGB to XYZ (D65)
//! let rgb_to_xyz = Mat3::from_rows([
//!     [0.4124564, 0.3575761, 0.1804375],
//!     [0.2126729, 0.7151522, 0.0721750],
//!     [0.0193339, 0.1191920, 0.9503041],
//! ]);
//!
//! let rgb = Vec3::new(1.0, 0.5, 0.25);
//! let xyz = rgb_to_xyz * rgb;
//! ```
//!
//! # Used By
//!
//! - `picker-primaries` - RGB/XYZ matrix generation
//! - `picker-color` - color space conversions
//! - `picker-eval` - mix-fraction companding

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

mod mat3;
mod vec3;
mod interp;

pub use mat3::*;
pub use vec3::*;
pub use interp::*;
