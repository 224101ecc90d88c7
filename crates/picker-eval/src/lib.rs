//! # picker-eval
//!
//! Swatch and gradient evaluation — the operation layer of the picker.
//!
//! Drives `picker-color`'s conversion pipeline to produce the two outputs
//! the picker UI consumes:
//!
//! - [`evaluate`] - one output color for the current cursor position
//! - [`gradient`] - a 2D grid of colors for the gradient preview
//!
//! # Evaluation model
//!
//! Single-threaded, synchronous, call-and-return: every conversion is a
//! pure function of its inputs. Picker state lives in an explicit
//! [`EvalContext`] passed per call — never in globals — so each
//! invocation is referentially transparent and independently testable.
//! A pointer move costs one [`evaluate`] call; a configuration change
//! additionally costs one [`gradient`] call, O(grid cells).
//!
//! # Example
//!
//! ```rust
//! use picker_eval::{evaluate, gradient, EvalContext};
//! use picker_color::{BlendMode, SpaceKind};
//!
//! let ctx = EvalContext {
//!     space: SpaceKind::Hsluv,
//!     eigen: [0.9, 0.3, 0.1],
//!     ambient: [1.0, 1.0, 1.0],
//!     blend: BlendMode::Multiply,
//!     ..EvalContext::default()
//! };
//!
//! let swatch = evaluate(&ctx, 120.0, 40.0)?;
//! let preview = gradient(&ctx)?;
//! assert_eq!(preview.rows(), 21);
//! # let _ = swatch;
//! # Ok::<(), picker_eval::EvalError>(())
//! ```
//!
//! # Diagnostics
//!
//! Out-of-gamut results are reported on the [`tracing`] `debug` level and
//! returned flagged, never corrected. The library installs no subscriber.

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

mod context;
mod error;
mod gradient;
mod swatch;

pub use context::EvalContext;
pub use error::{EvalError, EvalResult};
pub use gradient::{CANVAS_SIZE, GradientGrid, X_STEP, Y_STEP, gradient};
pub use swatch::{CANVAS_SPAN, Sample, evaluate};
