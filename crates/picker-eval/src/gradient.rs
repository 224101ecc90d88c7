//! Gradient-preview evaluation.
//!
//! Runs the swatch pipeline over a coarse 2D grid: lightness scale falls
//! top to bottom, ambient mix grows left to right. Cells use the *linear*
//! mix fraction; the non-linearity lives in the cell geometry instead —
//! [`GradientGrid::x_edges`] places column boundaries along the sine
//! compander, denser where perceptual change is faster. Renderers draw
//! each cell at its warped edge and the result matches the single-point
//! evaluator's companded response.

use crate::context::EvalContext;
use crate::error::EvalResult;
use crate::swatch::Sample;
use picker_color::{Appearance, acam, blend};
use picker_math::sin_compand;
use tracing::trace;

/// Canvas span the grid maps across, in canvas units.
pub const CANVAS_SIZE: f64 = 300.0;

/// Horizontal step of one grid cell, in canvas units.
pub const X_STEP: f64 = 3.0;

/// Vertical step of one grid cell, in canvas units.
pub const Y_STEP: f64 = 15.0;

const X_CELLS: usize = (CANVAS_SIZE / X_STEP) as usize;
const Y_CELLS: usize = (CANVAS_SIZE / Y_STEP) as usize;

/// The evaluated gradient preview.
///
/// A `cols` x `rows` grid of [`Sample`]s in row-major order, plus the
/// warped x-coordinate of each column boundary.
#[derive(Debug, Clone)]
pub struct GradientGrid {
    cols: usize,
    rows: usize,
    cells: Vec<Sample>,
    x_edges: Vec<f64>,
}

impl GradientGrid {
    /// Number of columns (grid points across).
    #[inline]
    pub fn cols(&self) -> usize {
        self.cols
    }

    /// Number of rows (grid points down).
    #[inline]
    pub fn rows(&self) -> usize {
        self.rows
    }

    /// The sample at grid position (x, y).
    ///
    /// # Panics
    ///
    /// Panics if `x >= cols()` or `y >= rows()`.
    #[inline]
    pub fn get(&self, x: usize, y: usize) -> &Sample {
        assert!(x < self.cols && y < self.rows, "grid index out of bounds");
        &self.cells[y * self.cols + x]
    }

    /// Warped x-coordinate of each column boundary, in canvas units.
    ///
    /// One entry per column; monotonically increasing from 0 to
    /// [`CANVAS_SIZE`].
    #[inline]
    pub fn x_edges(&self) -> &[f64] {
        &self.x_edges
    }

    /// All samples in row-major order.
    #[inline]
    pub fn samples(&self) -> &[Sample] {
        &self.cells
    }
}

/// Evaluates the gradient preview for a configuration.
///
/// Synchronous and O(grid cells); the eigen appearance and ambient
/// intermediate are computed once and reused for every cell.
pub fn gradient(ctx: &EvalContext) -> EvalResult<GradientGrid> {
    let model = ctx.rgb_model();
    let space = ctx.space;

    let eigen = space.from_rgb(&model, ctx.eigen_rgb())?;
    let ambient = space.rgb_to_intermediate(&model, ctx.ambient_rgb())?;

    let cols = X_CELLS + 1;
    let rows = Y_CELLS + 1;
    let mut cells = Vec::with_capacity(cols * rows);

    for y in 0..rows {
        let scale = 1.0 - y as f64 / Y_CELLS as f64;
        let scaled = Appearance::new(eigen.h, eigen.s * scale, eigen.l * scale);
        let shifted =
            acam::transform_to_intermediate(space, &model, &scaled, ctx.variance, scale, ctx.flip)?;

        for x in 0..cols {
            let t = (x as f64 / X_CELLS as f64) * ctx.ambient_mix;
            let rgb = blend(&model, space, shifted, ambient, t * scale, ctx.blend);
            cells.push(Sample::classify(space, rgb));
        }
    }

    let x_edges = (0..cols)
        .map(|x| sin_compand(x as f64 / X_CELLS as f64) * CANVAS_SIZE)
        .collect();

    trace!(cols, rows, "gradient grid evaluated");
    Ok(GradientGrid {
        cols,
        rows,
        cells,
        x_edges,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_grid_dimensions() {
        let grid = gradient(&EvalContext::default()).unwrap();
        assert_eq!(grid.cols(), 101);
        assert_eq!(grid.rows(), 21);
        assert_eq!(grid.samples().len(), 101 * 21);
        assert_eq!(grid.x_edges().len(), 101);
    }

    #[test]
    fn test_x_edges_warped_monotonic() {
        let grid = gradient(&EvalContext::default()).unwrap();
        let edges = grid.x_edges();

        assert_relative_eq!(edges[0], 0.0);
        assert_relative_eq!(*edges.last().unwrap(), CANVAS_SIZE, epsilon = 1e-9);
        for pair in edges.windows(2) {
            assert!(pair[1] > pair[0]);
        }
        // sine warp: columns are wider on the left, denser on the right
        assert!(edges[1] - edges[0] > edges[100] - edges[99]);
    }

    #[test]
    fn test_top_left_cell_is_eigen() {
        let ctx = EvalContext {
            ambient_mix: 0.0,
            ..EvalContext::default()
        };
        let grid = gradient(&ctx).unwrap();
        let cell = grid.get(0, 0);

        assert_relative_eq!(cell.rgb.x, 1.0, epsilon = 1e-6);
        assert_relative_eq!(cell.rgb.y, 0.0, epsilon = 1e-6);
        assert_relative_eq!(cell.rgb.z, 0.0, epsilon = 1e-6);
    }

    #[test]
    fn test_bottom_row_is_black() {
        let ctx = EvalContext {
            ambient_mix: 0.0,
            ..EvalContext::default()
        };
        let grid = gradient(&ctx).unwrap();
        for x in [0, 50, 100] {
            let cell = grid.get(x, 20);
            assert!(cell.rgb.max_element().abs() < 1e-6, "cell {} = {:?}", x, cell.rgb);
        }
    }

    #[test]
    fn test_rightmost_column_full_mix() {
        // full ambient mix with normal blend: the top-right cell is the
        // ambient color
        let ctx = EvalContext {
            ambient: [0.2, 0.4, 0.6],
            ..EvalContext::default()
        };
        let grid = gradient(&ctx).unwrap();
        let cell = grid.get(100, 0);

        assert_relative_eq!(cell.rgb.x, 0.2, epsilon = 1e-6);
        assert_relative_eq!(cell.rgb.y, 0.4, epsilon = 1e-6);
        assert_relative_eq!(cell.rgb.z, 0.6, epsilon = 1e-6);
    }
}
