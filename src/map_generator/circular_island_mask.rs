use crate::params::IslandMaskConfig;
use super::grid::{Cell, Grid, IsizeIndexMatrix};
use super::random_source::RandomSource;
use super::value_noise::Density;
use super::vector_math::{cell_point, squared_distance};

/// Carves a rough island out of freshly initialized value noise.
///
/// First everything outside the main circle, centred on the grid, is drowned.
/// Then a few small "variety" circles are dropped at random inside the main
/// circle's bounding square: their cells become water, punching inlets into the
/// coast, and the cells of their bounding squares that lie outside the main
/// circle get a fresh density roll, scattering islets past the silhouette.
///
/// Circles reaching past the border are clipped, never wrapped.
pub fn apply_circular_island_mask<R: RandomSource + ?Sized>(
    mut grid: Grid<Cell>,
    density: Density,
    config: &IslandMaskConfig,
    rng: &mut R,
) -> Grid<Cell> {
    let centre = (grid.width() as f64 / 2.0, grid.height() as f64 / 2.0);
    let radius = config.main_radius(grid.width());
    let radius_squared = radius * radius;

    for row in 0..grid.width() {
        for column in 0..grid.height() {
            if squared_distance(cell_point(row as isize, column as isize), centre) >= radius_squared {
                grid.set(row, column, Cell::Water);
            }
        }
    }

    let small_radius = config.variety_radius(radius);
    let small_radius_squared = small_radius as f64 * small_radius as f64;
    let (width, height) = (grid.width() as isize, grid.height() as isize);
    for _ in 0..config.variety_circles {
        let circle_centre = (
            rng.integer((centre.0 - radius) as i64..(centre.0 + radius) as i64) as isize,
            rng.integer((centre.1 - radius) as i64..(centre.1 + radius) as i64) as isize,
        );
        let circle_point = cell_point(circle_centre.0, circle_centre.1);

        let rows = (circle_centre.0 - small_radius).max(0)..(circle_centre.0 + small_radius).min(width);
        let columns = (circle_centre.1 - small_radius).max(0)..(circle_centre.1 + small_radius).min(height);
        for x in rows {
            for y in columns.clone() {
                let cell = grid.at_mut((x, y));
                let point = cell_point(x, y);
                if squared_distance(point, circle_point) <= small_radius_squared {
                    *cell = Cell::Water;
                }
                if squared_distance(point, centre) >= radius_squared {
                    *cell = density.roll(rng);
                }
            }
        }
    }

    grid
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::map_generator::random_source::seeded;

    fn outside_main_circle(grid: &Grid<Cell>, row: usize, column: usize) -> bool {
        let centre = (grid.width() as f64 / 2.0, grid.height() as f64 / 2.0);
        let radius = IslandMaskConfig::default().main_radius(grid.width());
        squared_distance(cell_point(row as isize, column as isize), centre) >= radius * radius
    }

    #[test]
    fn outer_cutoff_drowns_everything_past_the_main_circle() {
        let config = IslandMaskConfig { variety_circles: 0, ..Default::default() };
        let grid = Grid::new(64, 64, Cell::Land).unwrap();
        let grid = apply_circular_island_mask(grid, Density::new(50).unwrap(), &config, &mut seeded(2));
        for (row, column) in grid.coordinates() {
            assert_eq!(grid[(row, column)].is_water(), outside_main_circle(&grid, row, column));
        }
    }

    #[test]
    fn all_water_with_full_density_stays_water() {
        let grid = Grid::new(128, 128, Cell::Water).unwrap();
        let masked = apply_circular_island_mask(grid.clone(), Density::new(100).unwrap(), &IslandMaskConfig::default(), &mut seeded(4));
        assert_eq!(masked, grid);
    }

    #[test]
    fn land_on_a_drowned_grid_only_comes_from_rerolls() {
        let grid = Grid::new(128, 128, Cell::Water).unwrap();
        let masked = apply_circular_island_mask(grid, Density::new(0).unwrap(), &IslandMaskConfig::default(), &mut seeded(8));
        for (row, column) in masked.coordinates() {
            if masked[(row, column)] == Cell::Land {
                assert!(outside_main_circle(&masked, row, column), "land at ({row}, {column})");
            }
        }
    }

    #[test]
    fn rerolls_scatter_islets_past_the_coast() {
        let config = IslandMaskConfig { variety_circles: 40, ..Default::default() };
        let grid = Grid::new(128, 128, Cell::Water).unwrap();
        let masked = apply_circular_island_mask(grid, Density::new(0).unwrap(), &config, &mut seeded(12));
        let land: Vec<_> = masked.coordinates().filter(|&p| masked[p] == Cell::Land).collect();
        assert!(!land.is_empty());
        assert!(land.iter().all(|&(r, c)| outside_main_circle(&masked, r, c)));
    }

    #[test]
    fn variety_circles_as_large_as_the_island_are_clipped() {
        let config = IslandMaskConfig { variety_circles: 20, variety_radius_divisor: 1.0, ..Default::default() };
        let grid = Grid::new(10, 40, Cell::Land).unwrap();
        let masked = apply_circular_island_mask(grid, Density::new(50).unwrap(), &config, &mut seeded(3));
        assert_eq!((masked.width(), masked.height()), (10, 40));
    }

    #[test]
    fn variety_circles_never_add_land_inside_the_island() {
        let config = IslandMaskConfig { variety_circles: 40, ..Default::default() };
        let grid = Grid::new(96, 96, Cell::Land).unwrap();
        let masked = apply_circular_island_mask(grid, Density::new(100).unwrap(), &config, &mut seeded(6));
        let inside = masked.coordinates().filter(|&(r, c)| !outside_main_circle(&masked, r, c)).count();
        let inside_land = masked.coordinates().filter(|&(r, c)| !outside_main_circle(&masked, r, c) && masked[(r, c)] == Cell::Land).count();
        assert!(inside_land < inside);
        assert!(masked.coordinates().filter(|&(r, c)| outside_main_circle(&masked, r, c)).all(|p| masked[p].is_water()));
    }

    #[test]
    fn tiny_grids_are_clipped() {
        let grid = Grid::new(2, 3, Cell::Land).unwrap();
        let masked = apply_circular_island_mask(grid, Density::new(30).unwrap(), &IslandMaskConfig::default(), &mut seeded(1));
        assert_eq!(masked.width(), 2);
        assert_eq!(masked.height(), 3);
    }
}
