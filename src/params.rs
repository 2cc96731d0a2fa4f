use crate::map_generator::error::{GenerationError, Result};
pub use crate::map_generator::fractal_noise::NoiseKernel;

/// Contains parameters passed to `MapGenerator` to tweak its behaviour
///
/// These parameters pick the generation technique and its knobs, the map size and
/// the seed. For most use cases `MapGeneratorParameters::default()` should be ok,
/// and it is recommended when setting parameters to start from a default instance.
///
/// # Examples
/// Users can simply use the default parameters:
/// ```
/// # use terragrid::{*, params::*};
/// let mut map_generator = MapGenerator::new(MapGeneratorParameters::default());
/// let map = map_generator.gen().unwrap();
/// ```
///
/// Or they can change them to their liking:
/// ```
/// # use terragrid::{*, params::*};
/// let params = MapGeneratorParameters {
///     seed: 15, // fixed seed
///     width: 128, // smaller map
///     height: 128,
///     island: true, // carve an island
///     mode: GenerationMode::FractalNoise { kernel: NoiseKernel::Perlin, config: NoiseConfig::default() },
///     ..Default::default() // the rest of the parameters keep their default value
/// };
/// let mut map_generator = MapGenerator::new(params);
/// let map = map_generator.gen().unwrap();
/// ```
#[derive(Clone, Debug)]
pub struct MapGeneratorParameters {
    /// Seed of the run's random generator. A fixed seed reproduces a map exactly.
    pub seed: u64,

    /// number of rows of the map
    pub width: usize,

    /// number of columns of the map
    pub height: usize,

    /// if true the map is shaped into an island: a circular mask for the cellular
    /// automaton, a square gradient for fractal noise
    pub island: bool,

    /// Controls the shape of the circular island mask. Ignored by fractal noise.
    pub island_mask: IslandMaskConfig,

    /// The generation technique and its own parameters.
    pub mode: GenerationMode,

    /// Random walk tunnels dug into the initial cellular automaton grid, if any.
    /// Ignored by fractal noise.
    pub cave_tunnels: Option<CaveTunnels>,
}

impl Default for MapGeneratorParameters {
    /// The default values are the following:
    /// ```
    /// # use terragrid::params::*;
    /// # MapGeneratorParameters {
    /// seed: rand::random(),
    /// width: 256,
    /// height: 256,
    /// island: false,
    /// island_mask: IslandMaskConfig::default(),
    /// mode: GenerationMode::CellularAutomaton { density: 50, iterations: 5 },
    /// cave_tunnels: None,
    /// # };
    /// ```
    fn default() -> Self {
        Self {
            seed: rand::random(),
            width: 256,
            height: 256,
            island: false,
            island_mask: IslandMaskConfig::default(),
            mode: GenerationMode::CellularAutomaton { density: 50, iterations: 5 },
            cave_tunnels: None,
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub enum GenerationMode {
    /// Value noise smoothed by a cellular automaton.
    CellularAutomaton {
        /// percentage of cells starting as water, `0..=100`
        density: u8,
        /// number of automaton steps, each one producing a frame
        iterations: usize,
    },
    /// Multi-octave coherent noise elevation.
    FractalNoise { kernel: NoiseKernel, config: NoiseConfig },
}

/// Tunnels carved as land by 4-direction random walks, each one starting from a
/// random cell of the grid.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct CaveTunnels {
    pub count: usize,
    /// moves of each walk
    pub steps: usize,
}

/// Knobs of the fractal noise sum.
///
/// `frequency` and `fractal_level` both scale the sampled coordinates; the
/// latter is kept as a separate zoom factor applied the same way for every kernel.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct NoiseConfig {
    /// frequency of the first octave
    pub frequency: f64,
    /// amplitude of the first octave
    pub amplitude: f64,
    /// frequency multiplier applied after each octave
    pub lacunarity: f64,
    /// amplitude multiplier applied after each octave
    pub persistence: f64,
    /// zoom factor applied to the sampled coordinates
    pub fractal_level: f64,
}

impl Default for NoiseConfig {
    /// The default values are the following:
    /// ```
    /// # terragrid::params::NoiseConfig {
    /// frequency: 0.02,
    /// amplitude: 64.0,
    /// lacunarity: 2.0,
    /// persistence: 0.5,
    /// fractal_level: 1.0,
    /// # };
    /// ```
    fn default() -> Self {
        Self {
            frequency: 0.02,
            amplitude: 64.0,
            lacunarity: 2.0,
            persistence: 0.5,
            fractal_level: 1.0,
        }
    }
}

impl NoiseConfig {
    /// Rejects configurations that would make every octave after the first vanish
    /// or sample meaningless coordinates. A zero amplitude is accepted.
    pub fn validate(&self) -> Result<()> {
        let fields = [
            ("frequency", self.frequency),
            ("amplitude", self.amplitude),
            ("lacunarity", self.lacunarity),
            ("persistence", self.persistence),
            ("fractal_level", self.fractal_level),
        ];
        for (name, value) in fields {
            if !value.is_finite() {
                return Err(GenerationError::invalid_parameter(name, value));
            }
        }

        if self.frequency <= 0.0 {
            return Err(GenerationError::invalid_parameter("frequency", self.frequency));
        }
        if self.fractal_level <= 0.0 {
            return Err(GenerationError::invalid_parameter("fractal_level", self.fractal_level));
        }
        if self.amplitude < 0.0 {
            return Err(GenerationError::invalid_parameter("amplitude", self.amplitude));
        }
        if self.lacunarity == 0.0 {
            return Err(GenerationError::invalid_parameter("lacunarity", self.lacunarity));
        }
        if self.persistence == 0.0 {
            return Err(GenerationError::invalid_parameter("persistence", self.persistence));
        }
        Ok(())
    }
}

/// Controls the circular island mask of the cellular automaton.
///
/// The main circle is centred on the map with radius
/// `main_radius_factor * width / 2`. Then `variety_circles` circles of radius
/// `main radius / variety_radius_divisor` (truncated to whole cells) drown
/// random spots to break up the coast. The divisor must be at least 1, so a
/// variety circle is never larger than the main one.
#[derive(Clone, Debug, PartialEq)]
pub struct IslandMaskConfig {
    pub main_radius_factor: f64,
    pub variety_circles: usize,
    pub variety_radius_divisor: f64,
}

impl Default for IslandMaskConfig {
    /// The default values are the following:
    /// ```
    /// # terragrid::params::IslandMaskConfig {
    /// main_radius_factor: 0.6,
    /// variety_circles: 6,
    /// variety_radius_divisor: 5.0,
    /// # };
    /// ```
    fn default() -> Self {
        Self {
            main_radius_factor: 0.6,
            variety_circles: 6,
            variety_radius_divisor: 5.0,
        }
    }
}

impl IslandMaskConfig {
    pub fn main_radius(&self, width: usize) -> f64 {
        width as f64 / 2.0 * self.main_radius_factor
    }

    pub fn variety_radius(&self, main_radius: f64) -> isize {
        (main_radius / self.variety_radius_divisor) as isize
    }

    pub fn validate(&self) -> Result<()> {
        if !(self.main_radius_factor.is_finite() && self.main_radius_factor > 0.0) {
            return Err(GenerationError::invalid_parameter("main_radius_factor", self.main_radius_factor));
        }
        if !(self.variety_radius_divisor.is_finite() && self.variety_radius_divisor >= 1.0) {
            return Err(GenerationError::invalid_parameter("variety_radius_divisor", self.variety_radius_divisor));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_configs_are_valid() {
        assert!(NoiseConfig::default().validate().is_ok());
        assert!(IslandMaskConfig::default().validate().is_ok());
    }

    #[test]
    fn variety_circles_larger_than_the_island_are_rejected() {
        for divisor in [1e-9, 0.5, 0.0, f64::INFINITY] {
            let config = IslandMaskConfig { variety_radius_divisor: divisor, ..Default::default() };
            assert!(matches!(
                config.validate(),
                Err(GenerationError::InvalidParameter { name: "variety_radius_divisor", .. })
            ));
        }
        assert!(IslandMaskConfig { variety_radius_divisor: 1.0, ..Default::default() }.validate().is_ok());
    }

    #[test]
    fn collapsing_octaves_are_rejected() {
        for config in [
            NoiseConfig { lacunarity: 0.0, ..Default::default() },
            NoiseConfig { persistence: 0.0, ..Default::default() },
            NoiseConfig { frequency: 0.0, ..Default::default() },
            NoiseConfig { fractal_level: -1.0, ..Default::default() },
            NoiseConfig { amplitude: f64::NAN, ..Default::default() },
        ] {
            assert!(matches!(config.validate(), Err(GenerationError::InvalidParameter { .. })), "{config:?}");
        }
    }

    #[test]
    fn zero_amplitude_is_allowed() {
        assert!(NoiseConfig { amplitude: 0.0, ..Default::default() }.validate().is_ok());
    }

    #[test]
    fn default_island_radii() {
        let config = IslandMaskConfig::default();
        let radius = config.main_radius(256);
        assert_eq!(radius, 76.8);
        assert_eq!(config.variety_radius(radius), 15);
    }
}
