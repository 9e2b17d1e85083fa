//! Row-major 2-D concentration grid storage.

use crate::error::GridError;

/// A fixed-size 2-D grid of normalized concentration values.
///
/// Cells are `f32` in `[0, 1]`, stored row-major. The grid is mutated in
/// place by the mixing update each tick and exclusively owned by the
/// running session; the clamp at the end of every update maintains the
/// unit-interval invariant.
#[derive(Clone, Debug, PartialEq)]
pub struct ConcentrationGrid {
    rows: u32,
    cols: u32,
    cells: Vec<f32>,
}

impl ConcentrationGrid {
    /// Create a grid with every cell set to `value`.
    ///
    /// # Errors
    ///
    /// Returns [`GridError::EmptyGrid`] if either dimension is zero, and
    /// [`GridError::CellCountOverflow`] if `rows * cols` exceeds `u32::MAX`.
    pub fn uniform(rows: u32, cols: u32, value: f32) -> Result<Self, GridError> {
        let cell_count = (rows as u64) * (cols as u64);
        if cell_count == 0 {
            return Err(GridError::EmptyGrid);
        }
        if cell_count > u32::MAX as u64 {
            return Err(GridError::CellCountOverflow { rows, cols });
        }
        Ok(Self {
            rows,
            cols,
            cells: vec![value; cell_count as usize],
        })
    }

    /// Number of rows.
    pub fn rows(&self) -> u32 {
        self.rows
    }

    /// Number of columns.
    pub fn cols(&self) -> u32 {
        self.cols
    }

    /// Total number of cells (`rows * cols`).
    pub fn cell_count(&self) -> usize {
        self.cells.len()
    }

    /// Read a single cell, or `None` if the coordinate is out of bounds.
    pub fn get(&self, row: u32, col: u32) -> Option<f32> {
        if row >= self.rows || col >= self.cols {
            return None;
        }
        Some(self.cells[(row as usize) * (self.cols as usize) + col as usize])
    }

    /// The cells as a flat row-major slice.
    pub fn as_slice(&self) -> &[f32] {
        &self.cells
    }

    /// The cells as a mutable flat row-major slice.
    pub fn as_mut_slice(&mut self) -> &mut [f32] {
        &mut self.cells
    }

    /// Set every cell to `value`.
    pub fn fill(&mut self, value: f32) {
        self.cells.fill(value);
    }

    /// Clamp every cell to `[0, 1]`.
    pub fn clamp_unit(&mut self) {
        for cell in &mut self.cells {
            *cell = cell.clamp(0.0, 1.0);
        }
    }

    /// Arithmetic mean of all cells, accumulated in `f64`.
    ///
    /// # Errors
    ///
    /// Returns [`GridError::EmptyGrid`] if the grid has zero cells
    /// (unreachable for grids built through [`uniform`](Self::uniform),
    /// but the mean is undefined and callers must not observe a NaN).
    pub fn mean(&self) -> Result<f64, GridError> {
        if self.cells.is_empty() {
            return Err(GridError::EmptyGrid);
        }
        let sum: f64 = self.cells.iter().map(|&v| v as f64).sum();
        Ok(sum / self.cells.len() as f64)
    }
}
