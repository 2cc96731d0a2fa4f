use clap::{Parser, ValueEnum};
use tracing::error;
use tracing_subscriber::EnvFilter;

use terragrid::params::{CaveTunnels, GenerationMode, MapGeneratorParameters, NoiseConfig, NoiseKernel};
use terragrid::{GeneratedMap, Grid, MapGenerator};

const ELEVATION_RAMP: &[u8] = b"~~-.:=+*#^";
// indexed by `Cell::as_u8`
const CELL_GLYPHS: &[u8] = b"#~";
const PREVIEW_SIDE: usize = 64;

#[derive(Clone, Copy, Debug, ValueEnum)]
enum Technique {
    Automaton,
    Simplex,
    Perlin,
}

#[derive(Parser, Debug)]
#[command(name = "terragrid")]
#[command(about = "Generate a procedural map and print a text preview")]
struct Args {
    /// Generation technique
    #[arg(value_enum, default_value = "automaton")]
    technique: Technique,

    /// Side of the (square) map in cells
    #[arg(short, long, default_value = "128")]
    size: usize,

    /// Random seed (uses random seed if not specified)
    #[arg(long)]
    seed: Option<u64>,

    /// Shape the map into an island
    #[arg(short, long)]
    island: bool,

    /// Percentage of cells starting as water (automaton only)
    #[arg(short, long, default_value = "50")]
    density: u8,

    /// Number of automaton steps
    #[arg(short = 'n', long, default_value = "5")]
    iterations: usize,

    /// Random walk tunnels dug into the initial grid (automaton only)
    #[arg(long, default_value = "0")]
    tunnels: usize,

    /// Moves of each tunnel walk
    #[arg(long, default_value = "200")]
    tunnel_steps: usize,

    /// Frequency of the first noise octave
    #[arg(long, default_value = "0.02")]
    frequency: f64,

    /// Amplitude of the first noise octave
    #[arg(long, default_value = "64")]
    amplitude: f64,

    /// Zoom applied to noise coordinates
    #[arg(long, default_value = "1")]
    fractal_level: f64,
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let args = Args::parse();

    let config = NoiseConfig {
        frequency: args.frequency,
        amplitude: args.amplitude,
        fractal_level: args.fractal_level,
        ..Default::default()
    };
    let mode = match args.technique {
        Technique::Automaton => GenerationMode::CellularAutomaton { density: args.density, iterations: args.iterations },
        Technique::Simplex => GenerationMode::FractalNoise { kernel: NoiseKernel::OpenSimplex, config },
        Technique::Perlin => GenerationMode::FractalNoise { kernel: NoiseKernel::Perlin, config },
    };

    let mut params = MapGeneratorParameters {
        width: args.size,
        height: args.size,
        island: args.island,
        mode,
        cave_tunnels: (args.tunnels > 0).then_some(CaveTunnels { count: args.tunnels, steps: args.tunnel_steps }),
        ..Default::default()
    };
    if let Some(seed) = args.seed {
        params.seed = seed;
    }
    println!("Map seed: {}", params.seed);

    let map = match MapGenerator::new(params).gen() {
        Ok(map) => map,
        Err(err) => {
            error!("{err}");
            std::process::exit(1);
        }
    };

    match &map {
        GeneratedMap::Frames(frames) => {
            if let Some(last) = frames.last() {
                print!("{}", preview(last, |cell| CELL_GLYPHS[cell.as_u8() as usize] as char));
            }
        }
        GeneratedMap::Elevation(field) => {
            let (min, max) = field.min_max();
            let span = if max > min { max - min } else { 1.0 };
            print!("{}", preview(field, |v| {
                let level = ((v - min) / span * (ELEVATION_RAMP.len() - 1) as f64).round() as usize;
                ELEVATION_RAMP[level.min(ELEVATION_RAMP.len() - 1)] as char
            }));
        }
    }
}

/// One character per sampled cell, downsampled so the longest side fits the preview.
fn preview<T>(grid: &Grid<T>, glyph: impl Fn(&T) -> char) -> String {
    let stride = (grid.width().max(grid.height()) / PREVIEW_SIDE).max(1);
    let mut out = String::new();
    for row in (0..grid.width()).step_by(stride) {
        for column in (0..grid.height()).step_by(stride) {
            out.push(glyph(&grid[(row, column)]));
        }
        out.push('\n');
    }
    out
}
