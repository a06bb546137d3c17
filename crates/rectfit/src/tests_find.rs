//! End-to-end checks for `find` and friends.
//!
//! Exact answers are asserted only where the optimum lies on the grid
//! (rectangles, L-shapes, the right triangle after one midpoint round);
//! random polygons get invariant checks via proptest.

use crate::grid::Strategy;
use crate::prelude::*;
use crate::geom::segments_intersect;
use crate::{find_with_scratch, RectError, Scratch};
use nalgebra::{vector, Vector2};
use proptest::prelude::*;

fn recipe(s: &str) -> SubdivisionCfg {
    s.parse().unwrap()
}

fn rectangle(x: f64, y: f64, w: f64, h: f64) -> Vec<Vector2<f64>> {
    vec![
        vector![x, y],
        vector![x + w, y],
        vector![x + w, y + h],
        vector![x, y + h],
    ]
}

fn l_shape() -> Vec<Vector2<f64>> {
    vec![
        vector![0.0, 0.0],
        vector![4.0, 0.0],
        vector![4.0, 1.0],
        vector![1.0, 1.0],
        vector![1.0, 3.0],
        vector![0.0, 3.0],
    ]
}

const RECIPES: [&str; 8] = ["", "M", "C", "MM", "CC", "MC", "MCMC", "CMMCC"];

#[test]
fn rectangle_is_its_own_answer() {
    let pts = rectangle(-1.5, 2.0, 3.0, 5.0);
    for r in RECIPES {
        let got = find(&pts, &recipe(r));
        assert_eq!(got, Rect::new(-1.5, 2.0, 3.0, 5.0), "recipe {r:?}");
    }
}

#[test]
fn winding_is_canonicalized() {
    let pts: Vec<_> = rectangle(0.0, 0.0, 2.0, 1.0).into_iter().rev().collect();
    assert!(!is_clockwise(&pts));
    let got = find(&pts, &SubdivisionCfg::default());
    assert_eq!(got, Rect::new(0.0, 0.0, 2.0, 1.0));

    let l_rev: Vec<_> = l_shape().into_iter().rev().collect();
    assert_eq!(
        find(&l_rev, &SubdivisionCfg::none()),
        find(&l_shape(), &SubdivisionCfg::none())
    );
}

#[test]
fn l_shape_takes_the_larger_bar() {
    for r in RECIPES {
        let got = find(&l_shape(), &recipe(r));
        assert!((got.area() - 4.0).abs() < 1e-12, "recipe {r:?}: {got:?}");
        assert_eq!(got, Rect::new(0.0, 0.0, 4.0, 1.0), "recipe {r:?}");
    }
}

#[test]
fn right_triangle_needs_refinement() {
    let tri = [vector![0.0, 0.0], vector![4.0, 0.0], vector![0.0, 4.0]];
    let coarse = find(&tri, &SubdivisionCfg::none());
    assert!(coarse.is_empty());
    let refined = find(&tri, &recipe("M"));
    assert_eq!(refined, Rect::new(0.0, 0.0, 2.0, 2.0));
    let finer = find(&tri, &recipe("MM"));
    assert!((finer.area() - 4.0).abs() < 1e-12);
}

#[test]
fn degenerate_inputs_give_zero_rect() {
    assert!(find(&[], &SubdivisionCfg::default()).is_empty());
    assert!(find(&[vector![0.0, 0.0], vector![1.0, 1.0]], &SubdivisionCfg::default()).is_empty());
    // collinear: no 2D extent
    let flat = [vector![0.0, 0.0], vector![1.0, 0.0], vector![2.0, 0.0]];
    assert!(find(&flat, &SubdivisionCfg::default()).is_empty());
    let out = find_with_grid(&flat, &SubdivisionCfg::default());
    assert_eq!(out.cells.width() * out.cells.height(), 0);
}

#[test]
fn try_find_surfaces_errors() {
    let bowtie = [
        vector![0.0, 0.0],
        vector![1.0, 1.0],
        vector![1.0, 0.0],
        vector![0.0, 1.0],
    ];
    assert!(matches!(
        try_find(&bowtie, &SubdivisionCfg::default()),
        Err(RectError::InvalidPolygon { .. })
    ));
    let too_long = SubdivisionCfg::repeat(Strategy::Midpoint, 9);
    assert!(matches!(
        try_find(&l_shape(), &too_long),
        Err(RectError::InvalidConfig { .. })
    ));
    let ok = try_find(&l_shape(), &SubdivisionCfg::default()).unwrap();
    assert_eq!(ok, Rect::new(0.0, 0.0, 4.0, 1.0));
}

#[test]
fn over_long_recipe_is_truncated() {
    let tri = [vector![0.0, 0.0], vector![4.0, 0.0], vector![0.0, 4.0]];
    let long = SubdivisionCfg::repeat(Strategy::Midpoint, 9);
    assert_eq!(find(&tri, &long), find(&tri, &long.truncated()));
}

#[test]
fn diagnostic_grid_matches_plain_find() {
    let out = find_with_grid(&l_shape(), &recipe("M"));
    assert_eq!(out.rect, find(&l_shape(), &recipe("M")));
    assert_eq!(out.cells.width(), out.axes.width());
    assert_eq!(out.cells.height(), out.axes.height());
    assert_eq!(out.cells.count(Cell::Unmarked), 0);
    // every cell under the answer is interior
    for x in 0..out.axes.width() {
        for y in 0..out.axes.height() {
            let c = vector![
                0.5 * (out.axes.xs[x] + out.axes.xs[x + 1]),
                0.5 * (out.axes.ys[y] + out.axes.ys[y + 1])
            ];
            if out.rect.contains_eps(c, 0.0) {
                assert!(out.cells.get(x, y).is_interior());
            }
        }
    }
}

#[test]
fn scratch_reuse_does_not_leak() {
    let mut scratch = Scratch::new();
    let big = find_with_scratch(&rectangle(0.0, 0.0, 10.0, 10.0), &recipe("MM"), &mut scratch);
    assert_eq!(big.area(), 100.0);
    let l1 = find_with_scratch(&l_shape(), &recipe("C"), &mut scratch);
    let l2 = find(&l_shape(), &recipe("C"));
    assert_eq!(l1, l2);
}

/// Even-odd test; points on the boundary may go either way.
fn point_in_polygon(pts: &[Vector2<f64>], p: Vector2<f64>) -> bool {
    let n = pts.len();
    let mut inside = false;
    for i in 0..n {
        let (a, b) = (pts[i], pts[(i + 1) % n]);
        if (a.y > p.y) != (b.y > p.y) {
            let x = a.x + (p.y - a.y) * (b.x - a.x) / (b.y - a.y);
            if p.x < x {
                inside = !inside;
            }
        }
    }
    inside
}

/// Sides of `rect` pulled in slightly, so vertices lying exactly on the
/// rectangle do not count as crossings.
fn inset_sides(rect: &Rect) -> [(Vector2<f64>, Vector2<f64>); 4] {
    let e = 1e-9 * rect.width.max(rect.height);
    let (lo, hi) = (rect.min().add_scalar(e), rect.max().add_scalar(-e));
    let c = [lo, vector![hi.x, lo.y], hi, vector![lo.x, hi.y]];
    [(c[0], c[1]), (c[1], c[2]), (c[2], c[3]), (c[3], c[0])]
}

fn radial(seed: u64, index: u64) -> Vec<Vector2<f64>> {
    let cfg = RadialCfg {
        vertex_count: VertexCount::Uniform { min: 3, max: 14 },
        ..RadialCfg::default()
    };
    draw_polygon_radial(cfg, ReplayToken { seed, index })
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(48))]

    #[test]
    fn clockwise_flips_under_reversal(seed in any::<u64>(), index in 0u64..1000, shift in 0usize..14) {
        let pts = radial(seed, index);
        prop_assert!(is_valid_polygon(&pts));
        prop_assert!(is_clockwise(&pts));
        let mut rotated = pts.clone();
        rotated.rotate_left(shift % pts.len());
        prop_assert!(is_clockwise(&rotated));
        let reversed: Vec<_> = pts.iter().rev().copied().collect();
        prop_assert!(!is_clockwise(&reversed));
    }

    #[test]
    fn find_is_idempotent(seed in any::<u64>(), index in 0u64..1000) {
        let pts = radial(seed, index);
        let cfg = SubdivisionCfg::default();
        let a = find(&pts, &cfg);
        let b = find(&pts, &cfg);
        prop_assert_eq!(a.x.to_bits(), b.x.to_bits());
        prop_assert_eq!(a.y.to_bits(), b.y.to_bits());
        prop_assert_eq!(a.width.to_bits(), b.width.to_bits());
        prop_assert_eq!(a.height.to_bits(), b.height.to_bits());
        prop_assert_eq!(find_with_grid(&pts, &cfg), find_with_grid(&pts, &cfg));
    }

    #[test]
    fn area_never_shrinks_with_more_rounds(seed in any::<u64>(), index in 0u64..1000) {
        let pts = radial(seed, index);
        let chains: [&[&str]; 4] = [
            &["", "M", "MM", "MMM"],
            &["", "C", "CC", "CCC"],
            &["C", "CM", "CMC"],
            &["M", "MC", "MCC"],
        ];
        for chain in chains {
            let mut prev = 0.0;
            for r in chain {
                let area = find(&pts, &recipe(r)).area();
                prop_assert!(area >= prev - 1e-9, "{:?} at {}: {} after {}", chain, r, area, prev);
                prev = area;
            }
        }
    }

    #[test]
    fn answer_lies_inside_polygon(seed in any::<u64>(), index in 0u64..1000) {
        let cfg = RadialCfg {
            vertex_count: VertexCount::Uniform { min: 6, max: 14 },
            ..RadialCfg::default()
        };
        let pts = draw_polygon_radial(cfg, ReplayToken { seed, index });
        for r in ["", "C", "CC", "MC", "CMC"] {
            let rect = find(&pts, &recipe(r));
            if rect.is_empty() {
                continue;
            }
            let side = inset_sides(&rect);
            for (a, b) in side {
                for k in 0..=16 {
                    let p = a + (b - a) * (k as f64 / 16.0);
                    prop_assert!(point_in_polygon(&pts, p), "{} {:?}: {:?} outside", r, rect, p);
                }
                for i in 0..pts.len() {
                    let (q0, q1) = (pts[i], pts[(i + 1) % pts.len()]);
                    prop_assert!(!segments_intersect(a, b, q0, q1), "{} {:?}: edge {} crosses", r, rect, i);
                }
            }
        }
    }

    #[test]
    fn answer_stays_inside_bounding_box(seed in any::<u64>(), index in 0u64..1000) {
        let pts = radial(seed, index);
        let r = find(&pts, &recipe("MC"));
        let (lo_x, hi_x) = pts.iter().fold((f64::INFINITY, f64::NEG_INFINITY), |(a, b), p| (a.min(p.x), b.max(p.x)));
        let (lo_y, hi_y) = pts.iter().fold((f64::INFINITY, f64::NEG_INFINITY), |(a, b), p| (a.min(p.y), b.max(p.y)));
        prop_assert!(r.width >= 0.0 && r.height >= 0.0);
        if !r.is_empty() {
            prop_assert!(r.x >= lo_x - 1e-12 && r.x + r.width <= hi_x + 1e-12);
            prop_assert!(r.y >= lo_y - 1e-12 && r.y + r.height <= hi_y + 1e-12);
        }
    }
}
