use super::error::{GenerationError, Result};
use super::grid::{Cell, Grid};
use super::random_source::RandomSource;

/// Percentage of water cells requested from the value noise, in `0..=100`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Density(u8);

impl Density {
    pub fn new(percent: u8) -> Result<Self> {
        if percent > 100 {
            return Err(GenerationError::invalid_parameter("density", percent));
        }
        Ok(Self(percent))
    }

    pub fn percent(self) -> u8 {
        self.0
    }

    /// One threshold draw: land when the draw reaches the density, water otherwise.
    /// With draws in `0..100` a cell is water with probability `density / 100`.
    pub fn roll<R: RandomSource + ?Sized>(self, rng: &mut R) -> Cell {
        if rng.percent() >= self.0 {
            Cell::Land
        } else {
            Cell::Water
        }
    }
}

/// Fills the whole grid with thresholded random cells.
///
/// Draws happen in storage order on the calling thread, so the grid is a pure
/// function of the random stream.
pub fn fill_value_noise<R: RandomSource + ?Sized>(mut grid: Grid<Cell>, density: Density, rng: &mut R) -> Grid<Cell> {
    for cell in grid.cells_mut() {
        *cell = density.roll(rng);
    }
    grid
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::map_generator::random_source::seeded;

    #[test]
    fn density_above_hundred_is_rejected() {
        assert!(Density::new(100).is_ok());
        assert_eq!(Density::new(101), Err(GenerationError::InvalidParameter { name: "density", value: "101".into() }));
        assert_eq!(Density::new(42).unwrap().percent(), 42);
    }

    #[test]
    fn extreme_densities_ignore_the_draws() {
        let mut rng = seeded(3);
        let grid = Grid::new(16, 16, Cell::Land).unwrap();
        let water = fill_value_noise(grid.clone(), Density::new(100).unwrap(), &mut rng);
        assert_eq!(water.count(|c| c.is_water()), 256);
        let land = fill_value_noise(grid, Density::new(0).unwrap(), &mut rng);
        assert_eq!(land.count(|c| c.is_water()), 0);
    }

    #[test]
    fn water_fraction_follows_density() {
        let mut rng = seeded(11);
        for percent in [10u8, 35, 50, 80] {
            let grid = Grid::new(200, 200, Cell::Land).unwrap();
            let grid = fill_value_noise(grid, Density::new(percent).unwrap(), &mut rng);
            let fraction = grid.count(|c| c.is_water()) as f64 / 40000.0;
            assert!((fraction - percent as f64 / 100.0).abs() < 0.02, "density {percent}: {fraction}");
        }
    }

    #[test]
    fn same_seed_same_grid() {
        let grid = Grid::new(32, 32, Cell::Land).unwrap();
        let density = Density::new(45).unwrap();
        let a = fill_value_noise(grid.clone(), density, &mut seeded(5));
        let b = fill_value_noise(grid, density, &mut seeded(5));
        assert_eq!(a, b);
    }
}
