//! The per-evaluation configuration bundle.
//!
//! Every pipeline invocation reads picker state (active model, eigen and
//! ambient colors, variance, mix, blend mode) that the UI layer writes
//! between invocations. The core takes it as one explicit value per call,
//! never through globals, so evaluations stay referentially transparent
//! and independently testable.

use picker_color::{BlendMode, SpaceKind};
use picker_math::Vec3;
use picker_primaries::{ModelId, RgbModel};
use serde::{Deserialize, Serialize};

/// Picker configuration for one evaluation.
///
/// Serializable so a front end can persist and restore picker state; the
/// core itself does no I/O.
///
/// # Example
///
/// ```rust
/// use picker_eval::EvalContext;
/// use picker_color::SpaceKind;
///
/// let ctx = EvalContext {
///     space: SpaceKind::Hsluv,
///     eigen: [0.2, 0.5, 0.9],
///     ..EvalContext::default()
/// };
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EvalContext {
    /// Active RGB working-space model.
    pub model: ModelId,
    /// Active cylindrical color space.
    pub space: SpaceKind,
    /// Eigen (reference) color, linear RGB 0-1.
    pub eigen: [f64; 3],
    /// Ambient color, linear RGB 0-1. Read by the blend stage, never
    /// mutated by it.
    pub ambient: [f64; 3],
    /// ACAM variance, -1 to 1.
    pub variance: f64,
    /// Global ambient-mix knob, 0 to 1.
    pub ambient_mix: f64,
    /// Ambient blend mode.
    pub blend: BlendMode,
    /// Reverses the ACAM hue-shift direction.
    pub flip: bool,
}

impl Default for EvalContext {
    fn default() -> Self {
        Self {
            model: ModelId::default(),
            space: SpaceKind::default(),
            eigen: [1.0, 0.0, 0.0],
            ambient: [1.0, 1.0, 1.0],
            variance: 0.0,
            ambient_mix: 1.0,
            blend: BlendMode::default(),
            flip: false,
        }
    }
}

impl EvalContext {
    /// Resolves the active model id to its matrix pair.
    #[inline]
    pub fn rgb_model(&self) -> RgbModel {
        RgbModel::from_id(self.model)
    }

    /// Eigen color as a vector.
    #[inline]
    pub fn eigen_rgb(&self) -> Vec3 {
        Vec3::from_array(self.eigen)
    }

    /// Ambient color as a vector.
    #[inline]
    pub fn ambient_rgb(&self) -> Vec3 {
        Vec3::from_array(self.ambient)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_context() {
        let ctx = EvalContext::default();
        assert_eq!(ctx.model, ModelId::Srgb);
        assert_eq!(ctx.space, SpaceKind::CieLchUv);
        assert_eq!(ctx.blend, BlendMode::Normal);
        assert_eq!(ctx.eigen_rgb(), Vec3::new(1.0, 0.0, 0.0));
        assert_eq!(ctx.ambient_rgb(), Vec3::ONE);
    }
}
