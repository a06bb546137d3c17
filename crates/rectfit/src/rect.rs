//! Axis-aligned rectangles and the largest-interior-rectangle scan.
//!
//! Model
//! - Rows are visited from the top down. Each column keeps the physical height
//!   of the run of `Interior` cells ending at the current row, so every row is
//!   a histogram whose bars have real widths (`xs`) and heights (`ys`).
//! - Each histogram is solved with the monotonic stack; the best rectangle over
//!   all rows wins, ties keep the first one found.
//!
//! Code cross-refs: `grid::{CellGrid, GridAxes}`.

use nalgebra::Vector2;

use crate::grid::{CellGrid, GridAxes};

/// Axis-aligned rectangle with origin at its minimum corner.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Rect {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

impl Rect {
    #[inline]
    pub fn new(x: f64, y: f64, width: f64, height: f64) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    #[inline]
    pub fn area(&self) -> f64 {
        self.width * self.height
    }

    /// Zero area means no interior region was found.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.area() <= 0.0
    }

    #[inline]
    pub fn min(&self) -> Vector2<f64> {
        Vector2::new(self.x, self.y)
    }

    #[inline]
    pub fn max(&self) -> Vector2<f64> {
        Vector2::new(self.x + self.width, self.y + self.height)
    }

    #[inline]
    pub fn center(&self) -> Vector2<f64> {
        (self.min() + self.max()) * 0.5
    }

    /// Corners in clockwise (canonical) order starting at the minimum corner.
    pub fn corners(&self) -> [Vector2<f64>; 4] {
        let (lo, hi) = (self.min(), self.max());
        [
            lo,
            Vector2::new(hi.x, lo.y),
            hi,
            Vector2::new(lo.x, hi.y),
        ]
    }

    /// Closed containment with slack `eps`.
    #[inline]
    pub fn contains_eps(&self, p: Vector2<f64>, eps: f64) -> bool {
        let (lo, hi) = (self.min(), self.max());
        p.x >= lo.x - eps && p.x <= hi.x + eps && p.y >= lo.y - eps && p.y <= hi.y + eps
    }
}

/// Reusable buffers for `largest_interior_rect_with`.
#[derive(Clone, Debug, Default)]
pub struct HistogramScratch {
    heights: Vec<f64>,
    stack: Vec<usize>,
}

/// Largest rectangle made only of `Interior` cells.
pub fn largest_interior_rect(axes: &GridAxes, grid: &CellGrid) -> Rect {
    largest_interior_rect_with(axes, grid, &mut HistogramScratch::default())
}

/// Same as `largest_interior_rect`, reusing `scratch` (cleared on entry).
pub fn largest_interior_rect_with(
    axes: &GridAxes,
    grid: &CellGrid,
    scratch: &mut HistogramScratch,
) -> Rect {
    let (w, h) = (grid.width(), grid.height());
    debug_assert_eq!(w, axes.width());
    debug_assert_eq!(h, axes.height());
    scratch.heights.clear();
    scratch.heights.resize(w, 0.0);

    let mut best = Rect::default();
    let mut best_area = 0.0;
    for y in (0..h).rev() {
        let dy = axes.ys[y + 1] - axes.ys[y];
        for (x, height) in scratch.heights.iter_mut().enumerate() {
            if grid.get(x, y).is_interior() {
                *height += dy;
            } else {
                *height = 0.0;
            }
        }
        let (area, rect) =
            max_histogram_rect(&axes.xs, axes.ys[y], &scratch.heights, &mut scratch.stack);
        if area > best_area {
            best_area = area;
            best = rect;
        }
    }
    best
}

/// Largest rectangle under a histogram whose bar `k` spans `xs[k]..xs[k+1]`
/// and rises `heights[k]` above `base_y`.
///
/// Pre: `xs.len() == heights.len() + 1`. `stack` is scratch space.
pub fn max_histogram_rect(
    xs: &[f64],
    base_y: f64,
    heights: &[f64],
    stack: &mut Vec<usize>,
) -> (f64, Rect) {
    stack.clear();
    let cols = heights.len();
    let mut best_area = 0.0;
    let mut best = Rect::default();
    // k == cols is a zero-height sentinel that flushes the stack
    for k in 0..=cols {
        let cur = if k < cols { heights[k] } else { 0.0 };
        while let Some(&top) = stack.last() {
            if cur >= heights[top] {
                break;
            }
            stack.pop();
            let bar = heights[top];
            let left = stack.last().map_or(0, |&l| l + 1);
            let width = xs[k] - xs[left];
            let area = bar * width;
            if area > best_area {
                best_area = area;
                best = Rect::new(xs[left], base_y, width, bar);
            }
        }
        stack.push(k);
    }
    stack.clear();
    (best_area, best)
}
