//! Map Generator
//!
//! Procedural generation of 2D maps: cave and island shapes from a cellular
//! automaton, elevation from fractal coherent noise.
//!
//! # Features
//!
//! - Seed based generation.
//!     - Every random draw of a run comes from one generator seeded by the parameters. A fixed seed reproduces a map exactly.
//!     - Lower level operations take the random source explicitly, any `rand::Rng` will do.
//! - Cellular automaton.
//!     - The map starts as value noise: each cell is water with probability `density / 100`.
//!     - Each step recomputes every cell from its 8 neighbours, turning it to water when more than 4 of them are water.
//!     - Cells past the border count as water, so maps are closed by a shoreline.
//!     - Steps are driven by the caller, one frame at a time.
//! - Fractal noise.
//!     - Elevation is a sum of octaves of a coherent noise kernel.
//!     - Kernels:
//!         - OpenSimplex, 10 octaves, shifted by a random offset every run
//!         - Perlin, 8 octaves
//! - Island shaping.
//!     - Binary maps are cut by a circle and roughened by smaller random circles.
//!     - Elevation maps are normalized and multiplied by a square gradient falling to zero at the borders.
//! - Random walk.
//!     - Tunnels dug by a 4-direction random walk, optionally carved into the initial cellular automaton grid.
//!
//! # Examples
//!
//! ```
//! // Import the parameters to configure the 'MapGenerator'
//! use terragrid::params::{GenerationMode, MapGeneratorParameters};
//! use terragrid::{GeneratedMap, MapGenerator};
//!
//! # fn main() {
//! // Define the Map Generator parameters using the dedicated struct
//! let params = MapGeneratorParameters {
//!     width: 100,
//!     height: 100,
//!     island: true,
//!     mode: GenerationMode::CellularAutomaton { density: 48, iterations: 6 },
//!     ..Default::default()
//! };
//!
//! // Instantiate the Map Generator with the static method 'new', passing the parameters
//! let mut map_generator = MapGenerator::new(params);
//! let map = map_generator.gen().unwrap();
//!
//! // One frame for the initial noise, one per automaton step
//! if let GeneratedMap::Frames(frames) = map {
//!     assert_eq!(frames.len(), 7);
//! }
//! # }
//! ```
//!
//! The stages can also be driven by hand:
//!
//! ```
//! use rand::SeedableRng;
//! use terragrid::{initialize_binary_grid, step_automaton};
//!
//! let mut rng = rand::rngs::StdRng::seed_from_u64(7);
//! let mut grid = initialize_binary_grid(64, 64, 45, false, &mut rng).unwrap();
//! for _ in 0..4 {
//!     grid = step_automaton(grid);
//! }
//! ```

/// Map Generator
pub mod map_generator;

/// Parameters of the Map Generator
pub mod params;

pub use map_generator::error::{GenerationError, Result};
pub use map_generator::grid::{Cell, Grid, IsizeIndexMatrix};
pub use map_generator::random_source::RandomSource;
pub use map_generator::{
    carve_tunnels, generate_fractal_noise, initialize_binary_grid, initialize_binary_grid_with_mask, step_automaton, GeneratedMap,
    MapGenerator,
};
