//! Tolerance-based flood fill that clears alpha.
//!
//! The fill grows from a seed through 4-connected neighbors whose color is
//! within a Manhattan tolerance of a target color. Every cell it reaches
//! gets alpha 0; RGB is left untouched so the cleared area can still be
//! inspected or restored.
//!
//! The traversal uses an explicit LIFO frontier rather than recursion, so
//! grid size is bounded only by memory, not by stack depth.

use crate::color::{color_difference, Rgba};
use crate::grid::{Coordinate, PixelGrid};

/// Neighbor offsets in push order: right, left, down, up.
const NEIGHBORS: [(i64, i64); 4] = [(1, 0), (-1, 0), (0, 1), (0, -1)];

/// Make the region connected to `seed` transparent.
///
/// A cell joins the region when `color_difference(cell, target) <=
/// tolerance`; cells outside the tolerance are edges and stop propagation
/// without being modified. Connectivity is 4-directional, so diagonal-only
/// neighbors are never reached directly.
///
/// A seed outside the grid fills nothing. The grid's dimensions never
/// change.
///
/// # Example
///
/// ```
/// use pixel_quantize::{flood_fill_transparency, Coordinate, PixelGrid, Rgba};
///
/// let mut grid = PixelGrid::filled(3, 3, Rgba::WHITE);
/// grid.put_pixel(1, 1, Rgba::BLACK);
///
/// let out = flood_fill_transparency(grid, Coordinate::new(0, 0), Rgba::WHITE, 0);
/// assert_eq!(out.get_pixel(0, 0).a, 0);
/// assert_eq!(out.get_pixel(1, 1), Rgba::BLACK);
/// ```
pub fn flood_fill_transparency(
    mut grid: PixelGrid,
    seed: Coordinate,
    target: Rgba,
    tolerance: u32,
) -> PixelGrid {
    let mut visited = vec![false; grid.pixels().len()];
    let mut frontier = vec![seed];

    while let Some(coord) = frontier.pop() {
        let Some(idx) = grid.index_of(coord) else {
            continue;
        };
        if visited[idx] {
            continue;
        }
        visited[idx] = true;

        let pixel = grid.pixels()[idx];
        if color_difference(pixel, target) > tolerance {
            continue;
        }

        grid.pixels_mut()[idx] = pixel.with_alpha(0);

        for (dx, dy) in NEIGHBORS {
            let neighbor = coord.offset(dx, dy);
            // Out-of-bounds neighbors are pushed and discarded on pop.
            let seen = grid.index_of(neighbor).is_some_and(|i| visited[i]);
            if !seen {
                frontier.push(neighbor);
            }
        }
    }

    grid
}

#[cfg(test)]
mod tests {
    use super::*;

    const BG: Rgba = Rgba::opaque(0, 0, 0);
    const FG: Rgba = Rgba::opaque(255, 0, 0);

    fn alpha_map(grid: &PixelGrid) -> Vec<u8> {
        grid.pixels().iter().map(|p| p.a).collect()
    }

    #[test]
    fn test_uniform_grid_fully_cleared() {
        let grid = PixelGrid::filled(6, 4, BG);
        let out = flood_fill_transparency(grid, Coordinate::new(0, 0), BG, 0);
        assert!(out.pixels().iter().all(|p| p.a == 0 && p.rgb() == BG.rgb()));
    }

    #[test]
    fn test_seed_out_of_bounds_is_noop() {
        let grid = PixelGrid::filled(3, 3, BG);
        for seed in [
            Coordinate::new(-1, 0),
            Coordinate::new(0, -1),
            Coordinate::new(3, 0),
            Coordinate::new(0, 3),
        ] {
            let out = flood_fill_transparency(grid.clone(), seed, BG, 0);
            assert_eq!(out, grid);
        }
    }

    #[test]
    fn test_seed_on_edge_color_is_noop() {
        let grid = PixelGrid::filled(3, 3, FG);
        let out = flood_fill_transparency(grid.clone(), Coordinate::new(1, 1), BG, 10);
        assert_eq!(out, grid);
    }

    #[test]
    fn test_wall_blocks_propagation() {
        // Vertical wall in column 2 splits the grid in two.
        let grid = PixelGrid::from_fn(5, 3, |x, _| if x == 2 { FG } else { BG });
        let out = flood_fill_transparency(grid, Coordinate::new(0, 1), BG, 0);
        #[rustfmt::skip]
        let expected = vec![
            0, 0, 255, 255, 255,
            0, 0, 255, 255, 255,
            0, 0, 255, 255, 255,
        ];
        assert_eq!(alpha_map(&out), expected);
    }

    #[test]
    fn test_diagonal_gap_not_crossed() {
        // Only (2,2) is background on the far side, touching the fill diagonally.
        let grid = PixelGrid::from_fn(3, 3, |x, y| match (x, y) {
            (0, 0) | (1, 0) | (0, 1) | (2, 2) => BG,
            _ => FG,
        });
        let out = flood_fill_transparency(grid, Coordinate::new(0, 0), BG, 0);
        #[rustfmt::skip]
        let expected = vec![
            0,   0,   255,
            0,   255, 255,
            255, 255, 255,
        ];
        assert_eq!(alpha_map(&out), expected);
    }

    #[test]
    fn test_tolerance_inclusive() {
        let near = Rgba::opaque(10, 0, 0);
        let far = Rgba::opaque(11, 0, 0);
        let grid = PixelGrid::from_fn(3, 1, |x, _| match x {
            0 => BG,
            1 => near,
            _ => far,
        });
        let out = flood_fill_transparency(grid, Coordinate::new(0, 0), BG, 10);
        assert_eq!(alpha_map(&out), vec![0, 0, 255]);
    }

    #[test]
    fn test_target_alpha_ignored() {
        let grid = PixelGrid::filled(2, 2, BG);
        let out = flood_fill_transparency(grid, Coordinate::new(1, 1), BG.with_alpha(0), 0);
        assert!(out.pixels().iter().all(|p| p.is_transparent()));
    }

    #[test]
    fn test_result_independent_of_seed_within_region() {
        let grid = PixelGrid::from_fn(6, 6, |x, y| {
            if (x + y) % 5 == 0 && x > 0 {
                FG
            } else {
                BG
            }
        });
        let a = flood_fill_transparency(grid.clone(), Coordinate::new(0, 0), BG, 0);
        let b = flood_fill_transparency(grid, Coordinate::new(0, 3), BG, 0);
        assert_eq!(a, b);
    }

    #[test]
    fn test_large_grid_does_not_overflow_stack() {
        let grid = PixelGrid::filled(512, 512, BG);
        let out = flood_fill_transparency(grid, Coordinate::new(511, 511), BG, 0);
        assert!(out.pixels().iter().all(|p| p.is_transparent()));
    }
}
