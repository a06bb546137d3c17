//! Grid data: the two coordinate axes and the per-cell classification.

use nalgebra::DMatrix;

/// Sorted, deduplicated grid lines along x and y.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct GridAxes {
    pub xs: Vec<f64>,
    pub ys: Vec<f64>,
}

impl GridAxes {
    /// Cells along x.
    #[inline]
    pub fn width(&self) -> usize {
        self.xs.len().saturating_sub(1)
    }

    /// Cells along y.
    #[inline]
    pub fn height(&self) -> usize {
        self.ys.len().saturating_sub(1)
    }

    #[inline]
    pub fn cell_count(&self) -> usize {
        self.width() * self.height()
    }

    pub(crate) fn clear(&mut self) {
        self.xs.clear();
        self.ys.clear();
    }
}

/// Classification of one grid cell.
///
/// `Unmarked` only exists while classifying. `Boundary` has priority over
/// `Interior`: once a cell is hit by an edge from its exterior side it never
/// becomes interior again.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum Cell {
    #[default]
    Unmarked,
    Interior,
    Boundary,
    Exterior,
}

impl Cell {
    #[inline]
    pub fn is_interior(self) -> bool {
        matches!(self, Cell::Interior)
    }

    #[inline]
    pub(crate) fn mark_boundary(&mut self) {
        *self = Cell::Boundary;
    }

    #[inline]
    pub(crate) fn mark_interior(&mut self) {
        if *self != Cell::Boundary {
            *self = Cell::Interior;
        }
    }

    /// Single-letter code used by text dumps (`I`, `B`, `E`, `.`).
    pub fn code(self) -> char {
        match self {
            Cell::Unmarked => '.',
            Cell::Interior => 'I',
            Cell::Boundary => 'B',
            Cell::Exterior => 'E',
        }
    }
}

/// Per-cell classification indexed `(x, y)`, `x` along `GridAxes::xs`.
#[derive(Clone, Debug, PartialEq)]
pub struct CellGrid {
    pub cells: DMatrix<Cell>,
}

impl CellGrid {
    pub fn new(width: usize, height: usize) -> Self {
        Self {
            cells: DMatrix::from_element(width, height, Cell::Unmarked),
        }
    }

    #[inline]
    pub fn width(&self) -> usize {
        self.cells.nrows()
    }

    #[inline]
    pub fn height(&self) -> usize {
        self.cells.ncols()
    }

    #[inline]
    pub fn get(&self, x: usize, y: usize) -> Cell {
        self.cells[(x, y)]
    }

    pub fn count(&self, kind: Cell) -> usize {
        self.cells.iter().filter(|&&c| c == kind).count()
    }

    /// True where the cell is interior; everything else reads as empty.
    ///
    /// This is the display filter for visualizations, nothing downstream
    /// depends on it.
    pub fn interior_mask(&self) -> DMatrix<bool> {
        self.cells.map(Cell::is_interior)
    }

    /// One string per row, top row first, each cell as `Cell::code`.
    pub fn rows_top_down(&self) -> Vec<String> {
        (0..self.height())
            .rev()
            .map(|y| (0..self.width()).map(|x| self.get(x, y).code()).collect())
            .collect()
    }
}
