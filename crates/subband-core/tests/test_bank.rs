use subband_core::bank::WaveletFamily;

const FAMILIES: [WaveletFamily; 4] = [
    WaveletFamily::Haar,
    WaveletFamily::Db2,
    WaveletFamily::Db4,
    WaveletFamily::Db6,
];

#[test]
fn test_tap_counts() {
    assert_eq!(WaveletFamily::Haar.tap_count(), 2);
    assert_eq!(WaveletFamily::Db2.tap_count(), 4);
    assert_eq!(WaveletFamily::Db4.tap_count(), 8);
    assert_eq!(WaveletFamily::Db6.tap_count(), 12);
}

#[test]
fn test_lowpass_highpass_equal_length() {
    for family in FAMILIES {
        let bank = family.bank();
        assert_eq!(bank.lowpass.len(), bank.highpass.len());
        assert_eq!(bank.lowpass.len(), family.tap_count());
    }
}

#[test]
fn test_quadrature_mirror_relation() {
    // highpass[i] = (-1)^i * lowpass[N-1-i]
    for family in FAMILIES {
        let bank = family.bank();
        let n = bank.lowpass.len();
        for i in 0..n {
            let sign = if i % 2 == 0 { 1.0 } else { -1.0 };
            let expected = sign * bank.lowpass[n - 1 - i];
            assert!(
                (bank.highpass[i] - expected).abs() < 1e-15,
                "{family:?} highpass[{i}] = {}, expected {expected}",
                bank.highpass[i]
            );
        }
    }
}

#[test]
fn test_lowpass_sums_to_sqrt2() {
    for family in FAMILIES {
        let sum: f64 = family.bank().lowpass.iter().sum();
        assert!(
            (sum - std::f64::consts::SQRT_2).abs() < 1e-10,
            "{family:?} lowpass sum = {sum}"
        );
    }
}

#[test]
fn test_lowpass_unit_norm() {
    for family in FAMILIES {
        let norm: f64 = family.bank().lowpass.iter().map(|t| t * t).sum();
        assert!(
            (norm - 1.0).abs() < 1e-10,
            "{family:?} lowpass squared norm = {norm}"
        );
    }
}

#[test]
fn test_lowpass_even_shift_orthogonality() {
    // <h, h shifted by 2m> = 0 for m >= 1; required for an orthonormal bank.
    for family in FAMILIES {
        let lo = family.bank().lowpass;
        for shift in (2..lo.len()).step_by(2) {
            let dot: f64 = lo
                .iter()
                .zip(lo.iter().skip(shift))
                .map(|(a, b)| a * b)
                .sum();
            assert!(
                dot.abs() < 1e-10,
                "{family:?} shift {shift} inner product = {dot}"
            );
        }
    }
}

#[test]
fn test_highpass_zero_mean() {
    for family in FAMILIES {
        let sum: f64 = family.bank().highpass.iter().sum();
        assert!(sum.abs() < 1e-10, "{family:?} highpass sum = {sum}");
    }
}

#[test]
fn test_family_serde_round_trip() {
    for family in FAMILIES {
        let json = serde_json::to_string(&family).unwrap();
        let back: WaveletFamily = serde_json::from_str(&json).unwrap();
        assert_eq!(family, back);
    }
}
