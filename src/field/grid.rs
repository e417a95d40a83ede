//! Rectangular scalar field with Dirichlet cells
//!
//! # Mathematical Background
//!
//! The Laplace equation on a rectangle,
//!
//! ```text
//! ∂²u/∂x² + ∂²u/∂y² = 0
//! ```
//!
//! discretized with second-order central differences on a uniform grid,
//! reduces at every interior node to the four-neighbor averaging rule:
//!
//! ```text
//! u[i,j] = (u[i-1,j] + u[i+1,j] + u[i,j-1] + u[i,j+1]) / 4
//! ```
//!
//! A boundary-value problem is posed by *fixing* cells: a fixed cell holds
//! a prescribed Dirichlet value that no update may change. Relaxation
//! solvers iterate the averaging rule over the free cells until the field
//! stops moving.
//!
//! # Storage
//!
//! Three `nalgebra::DMatrix` buffers of identical shape:
//!
//! - `values`: the current field, 8·rows·cols bytes
//! - `fixed`: Dirichlet mask
//! - `fixed_values`: value enforced where the mask is true (unused elsewhere)
//!
//! The shape is set at construction and never changes.

use nalgebra::DMatrix;
use rand::Rng;
use std::fmt;

// =================================================================================================
// Relaxation Grid
// =================================================================================================

/// Rectangular scalar field with optional fixed (Dirichlet) cells
///
/// # Invariants
///
/// - All three internal matrices share one shape for the grid's lifetime.
/// - Wherever a cell is fixed, `value(i, j) == fixed_value(i, j)` exactly
///   after any update operation. Fixed cells are never averaged.
/// - Free cells are updated only through [`neighbor_average`], which reads
///   the four orthogonal neighbors and nothing else. Every free cell must
///   therefore be strictly interior; [`validate`] checks this before a
///   solver runs a single sweep.
///
/// # Example
///
/// ```rust
/// use relax_rs::field::RelaxationGrid;
///
/// # fn main() -> Result<(), String> {
/// let mut grid = RelaxationGrid::new(4, 6)?;
/// grid.fix_border(1.0);
///
/// assert_eq!(grid.shape(), (4, 6));
/// assert!(grid.is_fixed(0, 3));
/// assert!(!grid.is_fixed(1, 3));
/// # Ok(())
/// # }
/// ```
///
/// [`neighbor_average`]: RelaxationGrid::neighbor_average
/// [`validate`]: RelaxationGrid::validate
#[derive(Clone, Debug)]
pub struct RelaxationGrid {
    /// Current scalar field
    values: DMatrix<f64>,

    /// Dirichlet mask: true where the cell is fixed
    fixed: DMatrix<bool>,

    /// Value enforced at each fixed cell (unused where `fixed` is false)
    fixed_values: DMatrix<f64>,
}

impl RelaxationGrid {
    // ======================================= Constructors =======================================

    /// Create a zero-filled grid with no fixed cells
    ///
    /// # Errors
    ///
    /// Fails when either dimension is zero; a grid without cells cannot
    /// pose a boundary-value problem.
    pub fn new(rows: usize, cols: usize) -> Result<Self, String> {
        if rows == 0 || cols == 0 {
            return Err(format!(
                "Grid dimensions must be positive, got {} x {}",
                rows, cols
            ));
        }

        Ok(Self {
            values: DMatrix::zeros(rows, cols),
            fixed: DMatrix::from_element(rows, cols, false),
            fixed_values: DMatrix::zeros(rows, cols),
        })
    }

    // ========================================== Queries ==========================================

    /// Number of rows
    pub fn rows(&self) -> usize {
        self.values.nrows()
    }

    /// Number of columns
    pub fn cols(&self) -> usize {
        self.values.ncols()
    }

    /// Shape as (rows, cols)
    pub fn shape(&self) -> (usize, usize) {
        (self.values.nrows(), self.values.ncols())
    }

    /// Total number of cells
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Check emptiness (never true for a constructed grid)
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Current value at a cell
    pub fn value(&self, i: usize, j: usize) -> f64 {
        self.values[(i, j)]
    }

    /// Read-only view of the whole field
    pub fn values(&self) -> &DMatrix<f64> {
        &self.values
    }

    /// Check whether a cell is a Dirichlet cell
    pub fn is_fixed(&self, i: usize, j: usize) -> bool {
        self.fixed[(i, j)]
    }

    /// Dirichlet value at a cell (meaningful only where `is_fixed` is true)
    pub fn fixed_value(&self, i: usize, j: usize) -> f64 {
        self.fixed_values[(i, j)]
    }

    /// Number of fixed cells
    pub fn fixed_count(&self) -> usize {
        self.fixed.iter().filter(|f| **f).count()
    }

    // ================================== Boundary declaration ==================================

    /// Declare a cell as a Dirichlet cell holding `value`
    ///
    /// Idempotent: declaring the same cell twice overwrites the value.
    /// The current field is updated as well, so a freshly declared
    /// boundary is immediately visible without a seeding pass.
    ///
    /// # Errors
    ///
    /// Fails when the indices fall outside the grid.
    pub fn set_boundary(&mut self, i: usize, j: usize, value: f64) -> Result<(), String> {
        let (rows, cols) = self.shape();
        if i >= rows || j >= cols {
            return Err(format!(
                "Boundary cell ({}, {}) is outside the {} x {} grid",
                i, j, rows, cols
            ));
        }

        self.fixed[(i, j)] = true;
        self.fixed_values[(i, j)] = value;
        self.values[(i, j)] = value;
        Ok(())
    }

    /// Declare the whole perimeter ring as Dirichlet cells holding `value`
    ///
    /// Convenience for the common case of a uniformly held border. On a
    /// grid thinner than three cells in either direction, every cell lies
    /// on the perimeter and the grid becomes entirely fixed.
    pub fn fix_border(&mut self, value: f64) {
        let (rows, cols) = self.shape();
        for j in 0..cols {
            for i in 0..rows {
                if i == 0 || i == rows - 1 || j == 0 || j == cols - 1 {
                    self.fixed[(i, j)] = true;
                    self.fixed_values[(i, j)] = value;
                    self.values[(i, j)] = value;
                }
            }
        }
    }

    // ========================================= Seeding =========================================

    /// Overwrite the field: fixed cells take their Dirichlet value, free
    /// cells draw uniformly from `[min, max)` using the supplied generator
    ///
    /// The generator is an explicit handle rather than process-global
    /// state, so a fixed seed reproduces the exact starting field:
    ///
    /// ```rust
    /// use rand::rngs::SmallRng;
    /// use rand::SeedableRng;
    /// use relax_rs::field::RelaxationGrid;
    ///
    /// # fn main() -> Result<(), String> {
    /// let mut grid = RelaxationGrid::new(5, 5)?;
    /// grid.fix_border(10.0);
    ///
    /// let mut rng = SmallRng::seed_from_u64(42);
    /// grid.seed_interior(0.0, 10.0, &mut rng)?;
    /// # Ok(())
    /// # }
    /// ```
    ///
    /// # Errors
    ///
    /// Fails when `min > max`. An empty range (`min == max`) fills the
    /// constant instead of sampling.
    pub fn seed_interior<R: Rng>(&mut self, min: f64, max: f64, rng: &mut R) -> Result<(), String> {
        if min > max {
            return Err(format!(
                "Seeding range is inverted: min {} exceeds max {}",
                min, max
            ));
        }

        let (rows, cols) = self.shape();
        for j in 0..cols {
            for i in 0..rows {
                self.values[(i, j)] = if self.fixed[(i, j)] {
                    self.fixed_values[(i, j)]
                } else if min == max {
                    min
                } else {
                    rng.random_range(min..max)
                };
            }
        }
        Ok(())
    }

    /// Overwrite the field with a constant: fixed cells take their
    /// Dirichlet value, every free cell takes `value`
    pub fn seed_uniform(&mut self, value: f64) {
        let (rows, cols) = self.shape();
        for j in 0..cols {
            for i in 0..rows {
                self.values[(i, j)] = if self.fixed[(i, j)] {
                    self.fixed_values[(i, j)]
                } else {
                    value
                };
            }
        }
    }

    // ====================================== Update rule ======================================

    /// Average of the four orthogonal neighbors
    ///
    /// Pure: reads the current field, mutates nothing. The cell must be
    /// strictly interior (`1 <= i <= rows-2`, `1 <= j <= cols-2`); solvers
    /// guarantee this by calling [`validate`](RelaxationGrid::validate)
    /// before sweeping, so the precondition is only debug-asserted here.
    pub fn neighbor_average(&self, i: usize, j: usize) -> f64 {
        debug_assert!(
            i >= 1 && i + 1 < self.rows() && j >= 1 && j + 1 < self.cols(),
            "neighbor_average called on non-interior cell ({}, {})",
            i,
            j
        );

        (self.values[(i - 1, j)]
            + self.values[(i + 1, j)]
            + self.values[(i, j - 1)]
            + self.values[(i, j + 1)])
            / 4.0
    }

    // ======================================= Comparison =======================================

    /// Maximum absolute per-cell difference between two equally-shaped grids
    pub fn max_abs_difference(&self, other: &RelaxationGrid) -> f64 {
        assert_eq!(self.shape(), other.shape(), "Grid shapes must match");

        self.values
            .iter()
            .zip(other.values.iter())
            .map(|(a, b)| (a - b).abs())
            .fold(0.0, f64::max)
    }

    // ======================================= Validation =======================================

    /// Check that the grid poses a well-formed boundary-value problem
    ///
    /// Every free cell must be strictly interior: the averaging rule reads
    /// all four orthogonal neighbors, so a free cell on the perimeter has
    /// no defined update. Solvers call this before the first sweep and
    /// refuse to run on a malformed grid.
    pub fn validate(&self) -> Result<(), String> {
        let (rows, cols) = self.shape();
        for j in 0..cols {
            for i in 0..rows {
                if self.fixed[(i, j)] {
                    continue;
                }
                let interior = i >= 1 && i + 1 < rows && j >= 1 && j + 1 < cols;
                if !interior {
                    return Err(format!(
                        "Free cell ({}, {}) lies on the grid border and has no four-neighbor \
                         update. Declare the full boundary ring before solving.",
                        i, j
                    ));
                }
            }
        }
        Ok(())
    }

    // ================================= Crate-internal mutation =================================

    /// Write a cell directly. Solvers use this for in-place sweeps; the
    /// fixed-cell invariant is theirs to uphold (free cells get averages,
    /// fixed cells get their Dirichlet value).
    pub(crate) fn set_value(&mut self, i: usize, j: usize, value: f64) {
        self.values[(i, j)] = value;
    }

    /// Mutable access to the value buffer, for generation swaps in the
    /// double-buffered Jacobi sweep.
    pub(crate) fn values_mut(&mut self) -> &mut DMatrix<f64> {
        &mut self.values
    }
}

// ======================== Display ============================

impl fmt::Display for RelaxationGrid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "RelaxationGrid [{} x {}, {} fixed]",
            self.rows(),
            self.cols(),
            self.fixed_count()
        )
    }
}

// ==================== Tests ====================
