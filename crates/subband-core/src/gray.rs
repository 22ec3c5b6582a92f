use ndarray::{Array2, Array3, Axis};

use crate::consts::{LUMINANCE_B, LUMINANCE_G, LUMINANCE_R};
use crate::error::{Result, SubbandError};

/// Collapse an interleaved image (rows x cols x channels) to a single
/// grayscale plane.
///
/// A 1-channel image passes through unchanged; 3- and 4-channel images are
/// mixed with BT.601 luminance weights (a fourth alpha channel is ignored).
/// Any other channel count cannot be reduced and fails with
/// `InvalidChannelCount`.
pub fn collapse_channels(image: &Array3<f64>) -> Result<Array2<f64>> {
    let (rows, cols, channels) = image.dim();

    match channels {
        1 => Ok(image.index_axis(Axis(2), 0).to_owned()),
        3 | 4 => {
            let mut plane = Array2::<f64>::zeros((rows, cols));
            for row in 0..rows {
                for col in 0..cols {
                    plane[[row, col]] = LUMINANCE_R * image[[row, col, 0]]
                        + LUMINANCE_G * image[[row, col, 1]]
                        + LUMINANCE_B * image[[row, col, 2]];
                }
            }
            Ok(plane)
        }
        other => Err(SubbandError::InvalidChannelCount(other)),
    }
}
