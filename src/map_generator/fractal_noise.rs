use noise::NoiseFn;
use crate::params::NoiseConfig;
use super::grid::Grid;
use super::random_source::RandomSource;

/// Half-width of the random per-run offset added to simplex coordinates.
const OFFSET_RANGE: i64 = 99999;

/// Coherent noise primitive the fractal sum is built on.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum NoiseKernel {
    /// OpenSimplex, 10 octaves, shifted by a random offset every run.
    OpenSimplex,
    /// Perlin, 8 octaves, no offset.
    Perlin,
}

impl NoiseKernel {
    pub fn octaves(self) -> u8 {
        match self {
            NoiseKernel::OpenSimplex => 10,
            NoiseKernel::Perlin => 8,
        }
    }

    /// Seeds the kernel from `rng` and fills `grid` with its fractal sum.
    pub fn sample<R: RandomSource + ?Sized>(self, grid: Grid<f64>, config: &NoiseConfig, rng: &mut R) -> Grid<f64> {
        match self {
            NoiseKernel::OpenSimplex => {
                let offset = [
                    rng.integer(-OFFSET_RANGE..OFFSET_RANGE) as f64,
                    rng.integer(-OFFSET_RANGE..OFFSET_RANGE) as f64,
                ];
                let source = noise::OpenSimplex::new(rng.noise_seed());
                sample_fractal(grid, &Fractal::new(source, self.octaves(), *config).with_offset(offset))
            }
            NoiseKernel::Perlin => {
                let source = noise::Perlin::new(rng.noise_seed());
                sample_fractal(grid, &Fractal::new(source, self.octaves(), *config))
            }
        }
    }
}

/// Sum of `octaves` samples of `f`, each at `lacunarity` times the previous
/// frequency and `persistence` times the previous amplitude.
///
/// The sum is raw: it is not divided back into the kernel's range.
pub struct Fractal<F: NoiseFn<f64, 2>> {
    f: F,
    octaves: u8,
    config: NoiseConfig,
    offset: [f64; 2],
}

impl<F: NoiseFn<f64, 2>> Fractal<F> {
    pub fn new(f: F, octaves: u8, config: NoiseConfig) -> Self {
        Self { f, octaves, config, offset: [0.0, 0.0] }
    }

    /// Shift added to every scaled coordinate, so reruns don't repeat features.
    pub fn with_offset(mut self, offset: [f64; 2]) -> Self {
        self.offset = offset;
        self
    }
}

impl<F: NoiseFn<f64, 2>> NoiseFn<f64, 2> for Fractal<F> {
    fn get(&self, point: [f64; 2]) -> f64 {
        let mut ret = 0f64;

        let mut freq = self.config.frequency;
        let mut ampl = self.config.amplitude;
        for _ in 0..self.octaves {
            let scale = freq * self.config.fractal_level;
            let point = [point[0] * scale + self.offset[0], point[1] * scale + self.offset[1]];
            ret += self.f.get(point) * ampl;

            freq *= self.config.lacunarity;
            ampl *= self.config.persistence;
        }

        ret
    }
}

/// Writes `fractal([row, column])` into every cell, rows in parallel.
pub fn sample_fractal<F: NoiseFn<f64, 2> + Sync>(mut grid: Grid<f64>, fractal: &Fractal<F>) -> Grid<f64> {
    grid.par_fill_with(|row, column| fractal.get([row as f64, column as f64]));
    grid
}

#[cfg(test)]
mod tests {
    use super::*;
    use noise::{Constant, Perlin};
    use crate::map_generator::random_source::seeded;

    fn config(amplitude: f64) -> NoiseConfig {
        NoiseConfig { amplitude, ..Default::default() }
    }

    #[test]
    fn octaves_accumulate_with_persistence() {
        let fractal = Fractal::new(Constant::new(1.0), 3, NoiseConfig { amplitude: 4.0, persistence: 0.5, ..Default::default() });
        assert_eq!(fractal.get([12.0, 7.0]), 7.0);
    }

    #[test]
    fn first_octave_samples_scaled_coordinates() {
        let cfg = NoiseConfig { frequency: 0.03, amplitude: 2.0, fractal_level: 0.25, ..Default::default() };
        let perlin = Perlin::new(17);
        let fractal = Fractal::new(Perlin::new(17), 1, cfg).with_offset([5.0, -3.0]);
        let scale = 0.03 * 0.25;
        let expected = perlin.get([10.0 * scale + 5.0, 4.0 * scale + -3.0]) * 2.0;
        assert_eq!(fractal.get([10.0, 4.0]), expected);
    }

    #[test]
    fn later_octaves_use_lacunarity_and_persistence() {
        let cfg = NoiseConfig { frequency: 0.03, amplitude: 2.0, lacunarity: 3.0, persistence: 0.4, fractal_level: 0.25 };
        let perlin = Perlin::new(17);
        let fractal = Fractal::new(Perlin::new(17), 2, cfg);
        let first = 0.03 * 0.25;
        let second = (0.03 * 3.0) * 0.25;
        let expected = perlin.get([10.0 * first, 4.0 * first]) * 2.0 + perlin.get([10.0 * second, 4.0 * second]) * (2.0 * 0.4);
        assert_eq!(fractal.get([10.0, 4.0]), expected);
    }

    #[test]
    fn zero_amplitude_gives_a_flat_field() {
        for kernel in [NoiseKernel::OpenSimplex, NoiseKernel::Perlin] {
            let grid = Grid::new(24, 24, 1.0).unwrap();
            let field = kernel.sample(grid, &config(0.0), &mut seeded(3));
            assert!(field.cells().iter().all(|&v| v == 0.0));
        }
    }

    #[test]
    fn same_seed_same_field() {
        for kernel in [NoiseKernel::OpenSimplex, NoiseKernel::Perlin] {
            let grid = Grid::new(32, 32, 0.0).unwrap();
            let a = kernel.sample(grid.clone(), &config(64.0), &mut seeded(21));
            let b = kernel.sample(grid, &config(64.0), &mut seeded(21));
            assert_eq!(a, b);
        }
    }

    #[test]
    fn reseeding_changes_the_field() {
        let grid = Grid::new(32, 32, 0.0).unwrap();
        let a = NoiseKernel::OpenSimplex.sample(grid.clone(), &config(64.0), &mut seeded(1));
        let b = NoiseKernel::OpenSimplex.sample(grid, &config(64.0), &mut seeded(2));
        assert_ne!(a, b);
    }

    #[test]
    fn sampled_fields_are_not_flat() {
        let grid = Grid::new(64, 64, 0.0).unwrap();
        let field = NoiseKernel::Perlin.sample(grid, &config(64.0), &mut seeded(12));
        let (min, max) = field.min_max();
        assert!(max > min);
    }
}
