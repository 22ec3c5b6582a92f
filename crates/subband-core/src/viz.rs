//! Sub-band tiling for visual inspection of one decomposition level.

use ndarray::Array2;

use crate::consts::FLAT_BAND_EPSILON;
use crate::error::Result;
use crate::transform::Subbands;

/// Tile the four sub-bands of one level into a single plane:
///
/// ```text
/// approx | horiz
/// vert   | diag
/// ```
///
/// Each band is normalized to the full `[0, 1]` display range independently
/// before tiling; a flat band maps to zeros.
pub fn visualize(bands: &Subbands) -> Result<Array2<f64>> {
    bands.check_consistent()?;
    let (rows, cols) = bands.dims();
    let mut out = Array2::<f64>::zeros((2 * rows, 2 * cols));

    blit(&mut out, &normalize(&bands.approx), 0, 0);
    blit(&mut out, &normalize(&bands.horiz), 0, cols);
    blit(&mut out, &normalize(&bands.vert), rows, 0);
    blit(&mut out, &normalize(&bands.diag), rows, cols);

    Ok(out)
}

/// Rescale a band to `[0, 1]`. A band with no dynamic range maps to zeros
/// rather than dividing by zero.
fn normalize(band: &Array2<f64>) -> Array2<f64> {
    let min = band.iter().copied().fold(f64::INFINITY, f64::min);
    let max = band.iter().copied().fold(f64::NEG_INFINITY, f64::max);
    let range = max - min;

    if range <= FLAT_BAND_EPSILON {
        return Array2::zeros(band.dim());
    }
    band.mapv(|v| (v - min) / range)
}

fn blit(out: &mut Array2<f64>, tile: &Array2<f64>, row_off: usize, col_off: usize) {
    for ((row, col), &value) in tile.indexed_iter() {
        out[[row_off + row, col_off + col]] = value;
    }
}
