//! Multi-level decomposition pyramid with explicit per-level size tracking.

use ndarray::Array2;
use tracing::debug;

use crate::bank::WaveletFamily;
use crate::error::{Result, SubbandError};
use crate::transform::{self, Subbands};

/// One level of a decomposition, together with the exact size of the plane
/// that was decomposed at this level.
///
/// `ceil` halving makes the forward size map non-invertible from the sub-band
/// size alone, so the parent size is a field of the level entry itself.
#[derive(Clone, Debug)]
pub struct DecompositionLevel {
    pub bands: Subbands,
    pub parent_dims: (usize, usize),
}

/// Ordered decomposition stack; level 0 is the finest.
#[derive(Clone, Debug)]
pub struct Decomposition {
    pub levels: Vec<DecompositionLevel>,
}

/// Number of times the smaller dimension can be halved (rounding up) before
/// reaching a single pixel.
pub fn max_levels(dims: (usize, usize)) -> usize {
    let mut size = dims.0.min(dims.1);
    let mut levels = 0;
    while size >= 2 {
        size = size.div_ceil(2);
        levels += 1;
    }
    levels
}

/// Decompose a plane into `levels` stacked sub-band quadruples.
///
/// Each iteration records the pre-transform size, applies one forward level,
/// and carries the new `approx` into the next iteration. The level count is
/// validated up front: a count of zero, or one that would shrink a dimension
/// below one pixel, fails with `LevelsExceedImageSize`.
pub fn decompose(
    image: &Array2<f64>,
    family: WaveletFamily,
    levels: usize,
) -> Result<Decomposition> {
    let (rows, cols) = image.dim();
    let max = max_levels((rows, cols));
    if levels == 0 || levels > max {
        return Err(SubbandError::LevelsExceedImageSize {
            levels,
            rows,
            cols,
            max,
        });
    }

    let mut stack = Vec::with_capacity(levels);
    let mut current = image.clone();

    for level in 0..levels {
        let parent_dims = current.dim();
        let bands = transform::forward(&current, family);
        debug!(
            "level {level}: {}x{} -> {}x{} sub-bands",
            parent_dims.0,
            parent_dims.1,
            bands.dims().0,
            bands.dims().1
        );
        current = bands.approx.clone();
        stack.push(DecompositionLevel { bands, parent_dims });
    }

    Ok(Decomposition { levels: stack })
}

/// Reconstruct a plane from a decomposition stack.
///
/// Starts from the coarsest level's `approx` and walks coarsest to finest,
/// inverting each level at its recorded pre-transform size and feeding the
/// cropped result forward as the next level's approximation.
pub fn reconstruct(stack: &Decomposition, family: WaveletFamily) -> Result<Array2<f64>> {
    let coarsest = stack.levels.last().ok_or(SubbandError::EmptyStack)?;
    let mut approx = coarsest.bands.approx.clone();

    for level in stack.levels.iter().rev() {
        let bands = Subbands {
            approx,
            horiz: level.bands.horiz.clone(),
            vert: level.bands.vert.clone(),
            diag: level.bands.diag.clone(),
        };
        approx = transform::inverse_sized(&bands, family, level.parent_dims)?;
    }

    Ok(approx)
}
