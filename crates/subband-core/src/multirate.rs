//! 1D two-channel multirate filtering: correlate-and-decimate analysis and
//! upsample-and-correlate synthesis.
//!
//! Boundary rule: signals are extended circularly over their even-padded
//! length, with odd-length signals padded by one replicated edge sample.
//! Keeping the per-band output at exactly `ceil(len/2)` samples while
//! remaining exactly invertible requires this periodized extension; the
//! synthesis pass is then the adjoint of the analysis pass and the filter
//! bank reconstructs to machine precision.

/// Analysis pass: correlate `taps` against the signal with tap `j` read at
/// position `2i - j`, decimating by two.
///
/// Output length is `ceil(signal.len() / 2)`. Signals of length 0 or 1 are
/// rejected upstream by pyramid level validation and must not reach here.
pub fn analyze(signal: &[f64], taps: &[f64]) -> Vec<f64> {
    let len = signal.len();
    debug_assert!(len >= 2, "degenerate signal reached the filter bank");

    let padded = len + (len & 1);
    let half = padded / 2;
    let mut out = Vec::with_capacity(half);

    for i in 0..half {
        let mut acc = 0.0;
        for (j, &tap) in taps.iter().enumerate() {
            let p = wrap(2 * i as isize - j as isize, padded);
            // The single pad sample of an odd-length signal replicates the edge.
            let sample = if p < len { signal[p] } else { signal[len - 1] };
            acc += tap * sample;
        }
        out.push(acc);
    }

    out
}

/// Synthesis pass: upsample the band by two (a zero inserted after every
/// sample), then correlate `taps` against it with tap `j` read at position
/// `p + j` under the same circular boundary rule — the adjoint of the
/// analysis indexing, which for an orthonormal bank is its exact inverse.
///
/// Output length is exactly twice the band length; the caller crops to the
/// recorded pre-transform size.
pub fn synthesize(band: &[f64], taps: &[f64]) -> Vec<f64> {
    let len = 2 * band.len();
    let mut upsampled = vec![0.0; len];
    for (i, &value) in band.iter().enumerate() {
        upsampled[2 * i] = value;
    }

    let mut out = Vec::with_capacity(len);
    for p in 0..len {
        let mut acc = 0.0;
        for (j, &tap) in taps.iter().enumerate() {
            acc += tap * upsampled[wrap(p as isize + j as isize, len)];
        }
        out.push(acc);
    }

    out
}

/// Wrap an index into `[0, len)` circularly.
fn wrap(idx: isize, len: usize) -> usize {
    idx.rem_euclid(len as isize) as usize
}
