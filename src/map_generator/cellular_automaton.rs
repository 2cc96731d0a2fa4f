use super::grid::{Cell, Grid, IsizeIndexMatrix};

/// A cell turns to water when more than this many of its neighbours are water.
const WATER_MAJORITY: usize = 4;

/// Counts water among the 8 Moore neighbours of `coords`.
/// Positions outside the grid count as water, which closes the map with a shoreline.
fn water_neighbours(snapshot: &Grid<Cell>, coords: (isize, isize)) -> usize {
    let mut count = 0;
    for x in -1..=1 {
        for y in -1..=1 {
            if x == 0 && y == 0 {
                continue;
            }
            match snapshot.at_checked((coords.0 + x, coords.1 + y)) {
                Some(Cell::Land) => {}
                Some(Cell::Water) | None => count += 1,
            }
        }
    }
    count
}

/// One synchronous majority step.
///
/// Every cell is recomputed from the neighbourhood of `grid` as it was before the
/// step; the result is written to a fresh buffer, so no cell ever sees a
/// partially updated neighbour. Rows are evaluated in parallel.
pub fn step(grid: &Grid<Cell>) -> Grid<Cell> {
    let mut next = grid.clone();
    next.par_fill_with(|row, column| {
        if water_neighbours(grid, (row as isize, column as isize)) > WATER_MAJORITY {
            Cell::Water
        } else {
            Cell::Land
        }
    });
    next
}

/// A binary map smoothed one step at a time.
///
/// The automaton never stops on its own; callers decide how many steps (frames)
/// they want, typically between 1 and 20.
pub struct CellularAutomaton {
    grid: Grid<Cell>,
    steps: usize,
}

impl CellularAutomaton {
    pub fn new(grid: Grid<Cell>) -> Self {
        Self { grid, steps: 0 }
    }

    pub fn grid(&self) -> &Grid<Cell> {
        &self.grid
    }

    pub fn steps(&self) -> usize {
        self.steps
    }

    /// Advances exactly one step and returns the new state.
    pub fn step(&mut self) -> &Grid<Cell> {
        self.grid = step(&self.grid);
        self.steps += 1;
        &self.grid
    }

    /// Iterator yielding the state after each of the next `n` steps.
    pub fn frames(&mut self, n: usize) -> impl Iterator<Item = Grid<Cell>> + '_ {
        (0..n).map(move |_| self.step().clone())
    }

    pub fn into_grid(self) -> Grid<Cell> {
        self.grid
    }
}
