pub mod cellular_automaton;
pub mod circular_island_mask;
pub mod error;
pub mod fractal_noise;
pub mod grid;
pub mod random_source;
pub mod random_walk;
pub mod square_gradient_mask;
pub mod value_noise;
mod performance_profiler;
mod vector_math;

use std::time::Instant;
use tracing::info;
use crate::params::{CaveTunnels, GenerationMode, IslandMaskConfig, MapGeneratorParameters, NoiseConfig};
use cellular_automaton::CellularAutomaton;
use circular_island_mask::apply_circular_island_mask;
use error::Result;
use fractal_noise::NoiseKernel;
use grid::{Cell, Grid};
use performance_profiler::PerformanceProfiler;
use random_source::{seeded, RandomSource};
use random_walk::carve_walk;
use square_gradient_mask::apply_square_gradient_mask;
use value_noise::{fill_value_noise, Density};

/// What a generation run hands to renderers and exporters.
#[derive(Clone, Debug, PartialEq)]
pub enum GeneratedMap {
    /// The initial value noise followed by the grid after each automaton step.
    Frames(Vec<Grid<Cell>>),
    /// A continuous elevation field. Raw fractal sums, or `[0, 1]` when masked.
    Elevation(Grid<f64>),
}

impl GeneratedMap {
    /// The last binary frame, if this is a cellular automaton map.
    pub fn final_frame(&self) -> Option<&Grid<Cell>> {
        match self {
            GeneratedMap::Frames(frames) => frames.last(),
            GeneratedMap::Elevation(_) => None,
        }
    }

    pub fn elevation(&self) -> Option<&Grid<f64>> {
        match self {
            GeneratedMap::Elevation(grid) => Some(grid),
            GeneratedMap::Frames(_) => None,
        }
    }
}

pub struct MapGenerator {
    params: MapGeneratorParameters,
}

impl MapGenerator {
    pub fn new(params: MapGeneratorParameters) -> Self {
        Self { params }
    }

    pub fn params(&self) -> &MapGeneratorParameters {
        &self.params
    }

    /// Runs the configured technique once. All randomness comes from a
    /// generator seeded with `params.seed`.
    pub fn gen(&mut self) -> Result<GeneratedMap> {
        let mut profiler = PerformanceProfiler::new(Instant::now());
        let params = &self.params;
        info!(seed = params.seed, width = params.width, height = params.height, island = params.island, "generating map");

        let mut rng = seeded(params.seed);
        let map = match &params.mode {
            GenerationMode::CellularAutomaton { density, iterations } => {
                let island_mask = params.island.then_some(&params.island_mask);
                let mut grid = initialize_binary_grid_with_mask(params.width, params.height, *density, island_mask, &mut rng)?;
                profiler.log_elapsed_time_in_ms("value noise");

                if let Some(tunnels) = &params.cave_tunnels {
                    grid = carve_tunnels(grid, tunnels, &mut rng)?;
                    profiler.log_elapsed_time_in_ms("cave tunnels");
                }

                let mut frames = Vec::with_capacity(iterations + 1);
                frames.push(grid.clone());
                frames.extend(CellularAutomaton::new(grid).frames(*iterations));
                profiler.log_elapsed_time_in_ms("cellular automaton");

                if let Some(last) = frames.last() {
                    let water = last.count(|c| c.is_water());
                    info!(frames = frames.len(), water_fraction = water as f64 / last.cells().len() as f64, "cellular automaton done");
                }
                GeneratedMap::Frames(frames)
            }
            GenerationMode::FractalNoise { kernel, config } => {
                let grid = generate_fractal_noise(params.width, params.height, config, *kernel, params.island, &mut rng)?;
                profiler.log_elapsed_time_in_ms("fractal noise");

                let (min, max) = grid.min_max();
                info!(?kernel, min, max, "fractal noise done");
                GeneratedMap::Elevation(grid)
            }
        };

        profiler.log_total_elapsed_time_in_ms("map generation");
        Ok(map)
    }
}

/// Allocates a `width`x`height` grid of value noise, water with probability
/// `density / 100`, optionally carved into an island with the default circular mask.
pub fn initialize_binary_grid<R: RandomSource + ?Sized>(
    width: usize,
    height: usize,
    density: u8,
    apply_island_mask: bool,
    rng: &mut R,
) -> Result<Grid<Cell>> {
    let island_mask = IslandMaskConfig::default();
    initialize_binary_grid_with_mask(width, height, density, apply_island_mask.then_some(&island_mask), rng)
}

/// Like [`initialize_binary_grid`], with an explicit island mask configuration.
pub fn initialize_binary_grid_with_mask<R: RandomSource + ?Sized>(
    width: usize,
    height: usize,
    density: u8,
    island_mask: Option<&IslandMaskConfig>,
    rng: &mut R,
) -> Result<Grid<Cell>> {
    let grid = Grid::new(width, height, Cell::Land)?;
    let density = Density::new(density)?;

    let grid = fill_value_noise(grid, density, rng);
    match island_mask {
        Some(config) => {
            config.validate()?;
            Ok(apply_circular_island_mask(grid, density, config, rng))
        }
        None => Ok(grid),
    }
}

/// Digs `tunnels.count` random walks into the grid, each from a random start cell.
pub fn carve_tunnels<R: RandomSource + ?Sized>(mut grid: Grid<Cell>, tunnels: &CaveTunnels, rng: &mut R) -> Result<Grid<Cell>> {
    for _ in 0..tunnels.count {
        let start = (
            rng.integer(0..grid.width() as i64) as usize,
            rng.integer(0..grid.height() as i64) as usize,
        );
        grid = carve_walk(grid, start, tunnels.steps, rng)?;
    }
    Ok(grid)
}

/// One synchronous automaton step. The previous grid is consumed.
pub fn step_automaton(grid: Grid<Cell>) -> Grid<Cell> {
    cellular_automaton::step(&grid)
}

/// Samples a `width`x`height` fractal noise field with the chosen kernel,
/// optionally normalized and tapered into an island by the square gradient.
pub fn generate_fractal_noise<R: RandomSource + ?Sized>(
    width: usize,
    height: usize,
    config: &NoiseConfig,
    kernel: NoiseKernel,
    apply_island_gradient: bool,
    rng: &mut R,
) -> Result<Grid<f64>> {
    let grid = Grid::new(width, height, 0.0)?;
    config.validate()?;

    let grid = kernel.sample(grid, config, rng);
    if apply_island_gradient {
        Ok(apply_square_gradient_mask(grid))
    } else {
        Ok(grid)
    }
}
