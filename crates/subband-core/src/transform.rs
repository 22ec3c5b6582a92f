//! 2D separable wavelet transform: one decomposition level in and out of the
//! four-quadrant sub-band representation.
//!
//! Naming convention, fixed once for the whole crate: the row pass produces a
//! lowpass plane `L` and a highpass plane `H`; the column pass then maps
//! `L -> (approx, vert)` and `H -> (horiz, diag)`. `horiz` therefore responds
//! to horizontal intensity changes (vertical edges), `vert` to vertical ones.

use ndarray::Array2;

use crate::bank::{FilterBank, WaveletFamily};
use crate::error::{Result, SubbandError};
use crate::multirate::{analyze, synthesize};

/// The four sub-bands produced by one 2D decomposition level.
///
/// All four always share identical dimensions: `ceil(R/2) x ceil(C/2)`
/// relative to the decomposed `R x C` plane.
#[derive(Clone, Debug)]
pub struct Subbands {
    pub approx: Array2<f64>,
    pub horiz: Array2<f64>,
    pub vert: Array2<f64>,
    pub diag: Array2<f64>,
}

impl Subbands {
    /// Dimensions shared by the four sub-bands.
    pub fn dims(&self) -> (usize, usize) {
        self.approx.dim()
    }

    pub(crate) fn check_consistent(&self) -> Result<()> {
        let expected = self.approx.dim();
        for band in [&self.horiz, &self.vert, &self.diag] {
            if band.dim() != expected {
                return Err(SubbandError::DimensionMismatch {
                    expected,
                    got: band.dim(),
                });
            }
        }
        Ok(())
    }
}

/// One forward decomposition level: analyze every row with the lowpass and
/// highpass filters, then every column of each result.
pub fn forward(image: &Array2<f64>, family: WaveletFamily) -> Subbands {
    let bank = family.bank();

    let low = analyze_rows(image, &bank.lowpass);
    let high = analyze_rows(image, &bank.highpass);

    Subbands {
        approx: analyze_cols(&low, &bank.lowpass),
        vert: analyze_cols(&low, &bank.highpass),
        horiz: analyze_cols(&high, &bank.lowpass),
        diag: analyze_cols(&high, &bank.highpass),
    }
}

/// Inverse transform with the target size implied as twice the sub-band size.
///
/// Exact recovery of odd-sized planes needs the recorded pre-transform size;
/// use [`inverse_sized`] (as the pyramid does) for that.
pub fn inverse(bands: &Subbands, family: WaveletFamily) -> Result<Array2<f64>> {
    let (rows, cols) = bands.dims();
    inverse_sized(bands, family, (2 * rows, 2 * cols))
}

/// Inverse transform cropped to an exact target size.
///
/// Column synthesis recombines `(approx, vert)` and `(horiz, diag)` into the
/// two row-pass intermediates, row synthesis merges those, and the result is
/// cropped to `target`. Should the synthesized plane be smaller than `target`
/// in a dimension (not the case for sizes produced by [`forward`]), the
/// remainder is zero-padded, so the output is always exactly `target`.
pub fn inverse_sized(
    bands: &Subbands,
    family: WaveletFamily,
    target: (usize, usize),
) -> Result<Array2<f64>> {
    bands.check_consistent()?;
    let bank = family.bank();

    let low = synthesize_cols(&bands.approx, &bands.vert, &bank);
    let high = synthesize_cols(&bands.horiz, &bands.diag, &bank);
    let merged = synthesize_rows(&low, &high, &bank);

    Ok(crop_or_pad(&merged, target))
}

fn analyze_rows(input: &Array2<f64>, taps: &[f64]) -> Array2<f64> {
    let (rows, cols) = input.dim();
    let half = cols.div_ceil(2);
    let mut out = Array2::<f64>::zeros((rows, half));
    let mut buf = Vec::with_capacity(cols);

    for row in 0..rows {
        buf.clear();
        buf.extend(input.row(row).iter().copied());
        for (col, value) in analyze(&buf, taps).into_iter().enumerate() {
            out[[row, col]] = value;
        }
    }

    out
}

fn analyze_cols(input: &Array2<f64>, taps: &[f64]) -> Array2<f64> {
    let (rows, cols) = input.dim();
    let half = rows.div_ceil(2);
    let mut out = Array2::<f64>::zeros((half, cols));
    let mut buf = Vec::with_capacity(rows);

    for col in 0..cols {
        buf.clear();
        buf.extend(input.column(col).iter().copied());
        for (row, value) in analyze(&buf, taps).into_iter().enumerate() {
            out[[row, col]] = value;
        }
    }

    out
}

/// Column synthesis: upsample and filter the lowpass and highpass bands along
/// columns and sum them into one intermediate of doubled height.
fn synthesize_cols(low_band: &Array2<f64>, high_band: &Array2<f64>, bank: &FilterBank) -> Array2<f64> {
    let (rows, cols) = low_band.dim();
    let mut out = Array2::<f64>::zeros((2 * rows, cols));
    let mut low_buf = Vec::with_capacity(rows);
    let mut high_buf = Vec::with_capacity(rows);

    for col in 0..cols {
        low_buf.clear();
        low_buf.extend(low_band.column(col).iter().copied());
        high_buf.clear();
        high_buf.extend(high_band.column(col).iter().copied());

        let low = synthesize(&low_buf, &bank.lowpass);
        let high = synthesize(&high_buf, &bank.highpass);
        for (row, (l, h)) in low.into_iter().zip(high).enumerate() {
            out[[row, col]] = l + h;
        }
    }

    out
}

/// Row synthesis: same recombination as [`synthesize_cols`], along rows,
/// yielding a plane of doubled width.
fn synthesize_rows(low_plane: &Array2<f64>, high_plane: &Array2<f64>, bank: &FilterBank) -> Array2<f64> {
    let (rows, cols) = low_plane.dim();
    let mut out = Array2::<f64>::zeros((rows, 2 * cols));
    let mut low_buf = Vec::with_capacity(cols);
    let mut high_buf = Vec::with_capacity(cols);

    for row in 0..rows {
        low_buf.clear();
        low_buf.extend(low_plane.row(row).iter().copied());
        high_buf.clear();
        high_buf.extend(high_plane.row(row).iter().copied());

        let low = synthesize(&low_buf, &bank.lowpass);
        let high = synthesize(&high_buf, &bank.highpass);
        for (col, (l, h)) in low.into_iter().zip(high).enumerate() {
            out[[row, col]] = l + h;
        }
    }

    out
}

fn crop_or_pad(input: &Array2<f64>, target: (usize, usize)) -> Array2<f64> {
    let (rows, cols) = input.dim();
    let mut out = Array2::<f64>::zeros(target);
    for row in 0..target.0.min(rows) {
        for col in 0..target.1.min(cols) {
            out[[row, col]] = input[[row, col]];
        }
    }
    out
}
