//! Wavelet-domain denoising: shrink detail coefficients, leave the running
//! approximation untouched, reconstruct.

use ndarray::Array2;
use serde::{Deserialize, Serialize};
use tracing::info;

use crate::bank::WaveletFamily;
use crate::error::Result;
use crate::pyramid;

/// Shrinkage rule applied to detail coefficients.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum ThresholdMethod {
    /// `sign(c) * max(|c| - value, 0)`.
    Soft,
    /// `c` if `|c| >= value`, else `0`.
    Hard,
}

/// Parameters for wavelet-domain denoising.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct DenoiseParams {
    pub family: WaveletFamily,
    /// Shrinkage threshold, non-negative, in the units of the input plane.
    pub threshold: f64,
    pub method: ThresholdMethod,
    /// Pyramid depth; must not shrink a dimension below one pixel.
    pub levels: usize,
}

impl Default for DenoiseParams {
    fn default() -> Self {
        Self {
            family: WaveletFamily::Db2,
            threshold: 10.0,
            method: ThresholdMethod::Soft,
            levels: 3,
        }
    }
}

/// Threshold a coefficient matrix elementwise. `value` must be non-negative.
pub fn threshold(coeffs: &Array2<f64>, value: f64, method: ThresholdMethod) -> Array2<f64> {
    match method {
        ThresholdMethod::Soft => coeffs.mapv(|c| c.signum() * (c.abs() - value).max(0.0)),
        ThresholdMethod::Hard => coeffs.mapv(|c| if c.abs() >= value { c } else { 0.0 }),
    }
}

/// Denoise a plane: decompose, threshold every detail sub-band at every
/// level (never `approx`), reconstruct.
pub fn denoise(image: &Array2<f64>, params: &DenoiseParams) -> Result<Array2<f64>> {
    let (rows, cols) = image.dim();
    info!(
        "denoising {rows}x{cols} plane: {:?}, threshold {}, {} level(s)",
        params.method, params.threshold, params.levels
    );

    let mut stack = pyramid::decompose(image, params.family, params.levels)?;
    for level in &mut stack.levels {
        level.bands.horiz = threshold(&level.bands.horiz, params.threshold, params.method);
        level.bands.vert = threshold(&level.bands.vert, params.threshold, params.method);
        level.bands.diag = threshold(&level.bands.diag, params.threshold, params.method);
    }

    pyramid::reconstruct(&stack, params.family)
}
