use thiserror::Error;

#[derive(Error, Debug)]
pub enum SubbandError {
    #[error("cannot reduce {0} channel(s) to a single grayscale plane")]
    InvalidChannelCount(usize),

    #[error("level count {levels} outside supported range 1..={max} for {rows}x{cols} image")]
    LevelsExceedImageSize {
        levels: usize,
        rows: usize,
        cols: usize,
        max: usize,
    },

    #[error("sub-band dimension mismatch: expected {expected:?}, got {got:?}")]
    DimensionMismatch {
        expected: (usize, usize),
        got: (usize, usize),
    },

    #[error("empty decomposition stack")]
    EmptyStack,
}

pub type Result<T> = std::result::Result<T, SubbandError>;
