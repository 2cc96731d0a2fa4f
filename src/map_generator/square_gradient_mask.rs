use tracing::warn;
use super::error::{GenerationError, Result};
use super::grid::{Grid, IsizeIndexMatrix};
use super::vector_math::is_degenerate_span;

/// Value given to every cell of a flat field when it is normalized for masking.
const DEGENERATE_FIELD_VALUE: f64 = 0.5;

/// Builds the island gradient: concentric square rings around the centre whose
/// value falls linearly from 1 at the centre to 0 at half the grid width.
pub fn square_gradient(width: usize, height: usize) -> Result<Grid<f64>> {
    let mut mask = Grid::new(width, height, 0.0)?;
    fill_square_rings(&mut mask);
    Ok(mask)
}

fn fill_square_rings(mask: &mut Grid<f64>) {
    let centre = ((mask.width() / 2) as isize, (mask.height() / 2) as isize);
    let half = mask.width() / 2;

    for i in 0..half {
        let value = 1.0 - i as f64 / half as f64;
        let i = i as isize;
        for span in -i..=i {
            let ring = [
                (centre.0 - i, centre.1 + span),
                (centre.0 + i, centre.1 + span),
                (centre.0 + span, centre.1 - i),
                (centre.0 + span, centre.1 + i),
            ];
            for coords in ring {
                if let Some(cell) = mask.at_mut_checked(coords) {
                    *cell = value;
                }
            }
        }
    }
}

/// Rescales the field to `[0, 1]` using its own minimum and maximum.
pub fn normalize(grid: &Grid<f64>) -> Result<Grid<f64>> {
    let (min, max) = grid.min_max();
    if is_degenerate_span(min, max) {
        return Err(GenerationError::DegenerateField { value: min });
    }
    Ok(grid.map(|v| (v - min) / (max - min)))
}

/// Normalizes the field and multiplies it by the square gradient, tapering
/// elevation to zero towards the borders.
///
/// A flat field cannot be normalized; it is treated as uniformly mid-height, so
/// the result is the gradient itself scaled by 0.5.
pub fn apply_square_gradient_mask(grid: Grid<f64>) -> Grid<f64> {
    let normalized = match normalize(&grid) {
        Ok(normalized) => normalized,
        Err(err) => {
            warn!("{err}, using {DEGENERATE_FIELD_VALUE} for every cell");
            grid.map(|_| DEGENERATE_FIELD_VALUE)
        }
    };

    let mut mask = normalized.map(|_| 0.0);
    fill_square_rings(&mut mask);

    let mut masked = normalized;
    for (cell, weight) in masked.cells_mut().iter_mut().zip(mask.cells()) {
        *cell *= weight;
    }
    masked
}
