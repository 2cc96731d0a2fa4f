use super::error::{GenerationError, Result};
use super::grid::{Cell, Grid, IsizeIndexMatrix};
use super::random_source::RandomSource;
use super::vector_math::vec_sum;

const DIRECTIONS: [(isize, isize); 4] = [(1, 0), (-1, 0), (0, 1), (0, -1)];

/// A 4-direction random walk of `steps` moves starting from the origin.
/// The returned path holds `steps + 1` positions, the origin included.
pub fn random_walk<R: RandomSource + ?Sized>(steps: usize, rng: &mut R) -> Vec<(isize, isize)> {
    let mut path = Vec::with_capacity(steps + 1);
    let mut position = (0, 0);
    path.push(position);
    for _ in 0..steps {
        position = vec_sum(position, DIRECTIONS[rng.integer(0..4) as usize]);
        path.push(position);
    }
    path
}

/// Digs a cave tunnel: every in-bounds position of a walk from `start` becomes land.
/// The walk is free to leave the grid and come back.
pub fn carve_walk<R: RandomSource + ?Sized>(
    mut grid: Grid<Cell>,
    start: (usize, usize),
    steps: usize,
    rng: &mut R,
) -> Result<Grid<Cell>> {
    if start.0 >= grid.width() || start.1 >= grid.height() {
        return Err(GenerationError::invalid_parameter("walk start", format!("{start:?}")));
    }

    let origin = (start.0 as isize, start.1 as isize);
    for step in random_walk(steps, rng) {
        if let Some(cell) = grid.at_mut_checked(vec_sum(origin, step)) {
            *cell = Cell::Land;
        }
    }
    Ok(grid)
}
