use serde::{Deserialize, Serialize};

/// Orthonormal wavelet families available for analysis and synthesis.
///
/// Each family maps to a fixed lowpass tap vector; the matching highpass is
/// always derived by quadrature mirroring, never tabulated on its own.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum WaveletFamily {
    /// Haar (2 taps).
    Haar,
    /// Daubechies-2 (4 taps).
    Db2,
    /// Daubechies-4 (8 taps).
    Db4,
    /// Daubechies-6 (12 taps).
    Db6,
}

const HAAR_LOWPASS: [f64; 2] = [std::f64::consts::FRAC_1_SQRT_2, std::f64::consts::FRAC_1_SQRT_2];

const DB2_LOWPASS: [f64; 4] = [
    0.482_962_913_144_690_25,
    0.836_516_303_737_469,
    0.224_143_868_041_857_35,
    -0.129_409_522_550_921_45,
];

const DB4_LOWPASS: [f64; 8] = [
    0.230_377_813_308_855_23,
    0.714_846_570_552_541_5,
    0.630_880_767_929_590_4,
    -0.027_983_769_416_983_85,
    -0.187_034_811_718_881_14,
    0.030_841_381_835_986_965,
    0.032_883_011_666_982_945,
    -0.010_597_401_784_997_278,
];

const DB6_LOWPASS: [f64; 12] = [
    0.111_540_743_350_080_17,
    0.494_623_890_398_385_4,
    0.751_133_908_021_577_5,
    0.315_250_351_709_243_2,
    -0.226_264_693_965_169_13,
    -0.129_766_867_567_095_63,
    0.097_501_605_587_079_36,
    0.027_522_865_530_016_29,
    -0.031_582_039_318_031_156,
    0.000_553_842_200_993_801_6,
    0.004_777_257_511_010_651,
    -0.001_077_301_084_995_58,
];

/// Matched analysis filter pair for one wavelet family.
#[derive(Clone, Debug)]
pub struct FilterBank {
    pub lowpass: Vec<f64>,
    pub highpass: Vec<f64>,
}

impl WaveletFamily {
    /// Look up the analysis filter pair for this family.
    pub fn bank(self) -> FilterBank {
        let lowpass: &[f64] = match self {
            WaveletFamily::Haar => &HAAR_LOWPASS,
            WaveletFamily::Db2 => &DB2_LOWPASS,
            WaveletFamily::Db4 => &DB4_LOWPASS,
            WaveletFamily::Db6 => &DB6_LOWPASS,
        };
        FilterBank {
            lowpass: lowpass.to_vec(),
            highpass: quadrature_mirror(lowpass),
        }
    }

    /// Filter tap count for this family.
    pub fn tap_count(self) -> usize {
        match self {
            WaveletFamily::Haar => 2,
            WaveletFamily::Db2 => 4,
            WaveletFamily::Db4 => 8,
            WaveletFamily::Db6 => 12,
        }
    }
}

/// Quadrature-mirror construction: `highpass[i] = (-1)^i * lowpass[N-1-i]`.
fn quadrature_mirror(lowpass: &[f64]) -> Vec<f64> {
    let n = lowpass.len();
    (0..n)
        .map(|i| {
            let tap = lowpass[n - 1 - i];
            if i % 2 == 0 {
                tap
            } else {
                -tap
            }
        })
        .collect()
}
