//! Standard normal CDF and inverse CDF

use std::f64::consts::SQRT_2;

// Acklam's rational approximation coefficients for the inverse normal CDF
const A: [f64; 6] = [
    -3.969_683_028_665_376e1,
    2.209_460_984_245_205e2,
    -2.759_285_104_469_687e2,
    1.383_577_518_672_69e2,
    -3.066_479_806_614_716e1,
    2.506_628_277_459_239,
];
const B: [f64; 5] = [
    -5.447_609_879_822_406e1,
    1.615_858_368_580_409e2,
    -1.556_989_798_598_866e2,
    6.680_131_188_771_972e1,
    -1.328_068_155_288_572e1,
];
const C: [f64; 6] = [
    -7.784_894_002_430_293e-3,
    -3.223_964_580_411_365e-1,
    -2.400_758_277_161_838,
    -2.549_732_539_343_734,
    4.374_664_141_464_968,
    2.938_163_982_698_783,
];
const D: [f64; 4] = [
    7.784_695_709_041_462e-3,
    3.224_671_290_700_398e-1,
    2.445_134_137_142_996,
    3.754_408_661_907_416,
];

/// Break-point between the tail and central regions
const P_LOW: f64 = 0.024_25;

/// Complementary error function
///
/// Chebyshev fit with fractional error below 1.2e-7 everywhere.
pub fn erfc(x: f64) -> f64 {
    let z = x.abs();
    let t = 1.0 / (1.0 + 0.5 * z);
    let poly = -1.265_512_23
        + t * (1.000_023_68
            + t * (0.374_091_96
                + t * (0.096_784_18
                    + t * (-0.186_288_06
                        + t * (0.278_868_07
                            + t * (-1.135_203_98
                                + t * (1.488_515_87
                                    + t * (-0.822_152_23 + t * 0.170_872_77))))))));
    let ans = t * (-z * z + poly).exp();
    if x >= 0.0 {
        ans
    } else {
        2.0 - ans
    }
}

/// Standard normal cumulative distribution function Φ(x)
pub fn normal_cdf(x: f64) -> f64 {
    0.5 * erfc(-x / SQRT_2)
}

/// Inverse standard normal CDF Φ⁻¹(p)
///
/// Defined on the open interval (0, 1); `p <= 0` maps to -∞ and `p >= 1` to +∞.
pub fn normal_inv_cdf(p: f64) -> f64 {
    if p <= 0.0 {
        return f64::NEG_INFINITY;
    }
    if p >= 1.0 {
        return f64::INFINITY;
    }

    if p < P_LOW {
        let q = (-2.0 * p.ln()).sqrt();
        tail_ratio(q)
    } else if p <= 1.0 - P_LOW {
        let q = p - 0.5;
        let r = q * q;
        let num = ((((A[0] * r + A[1]) * r + A[2]) * r + A[3]) * r + A[4]) * r + A[5];
        let den = ((((B[0] * r + B[1]) * r + B[2]) * r + B[3]) * r + B[4]) * r + 1.0;
        num * q / den
    } else {
        let q = (-2.0 * (1.0 - p).ln()).sqrt();
        -tail_ratio(q)
    }
}

fn tail_ratio(q: f64) -> f64 {
    let num = ((((C[0] * q + C[1]) * q + C[2]) * q + C[3]) * q + C[4]) * q + C[5];
    let den = (((D[0] * q + D[1]) * q + D[2]) * q + D[3]) * q + 1.0;
    num / den
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cdf_known_values() {
        assert!((normal_cdf(0.0) - 0.5).abs() < 1e-7);
        assert!((normal_cdf(1.96) - 0.975).abs() < 1e-4);
        assert!((normal_cdf(-1.0) - 0.158_655).abs() < 1e-5);
    }

    #[test]
    fn test_cdf_symmetry() {
        for &x in &[0.3, 1.0, 2.5, 4.0] {
            assert!((normal_cdf(x) + normal_cdf(-x) - 1.0).abs() < 1e-7);
        }
    }

    #[test]
    fn test_inv_cdf_known_values() {
        assert!(normal_inv_cdf(0.5).abs() < 1e-9);
        assert!((normal_inv_cdf(0.975) - 1.959_964).abs() < 1e-5);
        assert!((normal_inv_cdf(0.01) + 2.326_348).abs() < 1e-5);
    }

    #[test]
    fn test_inv_cdf_reference_quantiles() {
        let cases = [
            (0.001, -3.090_232_306_167_813),
            (0.3, -0.524_400_512_708_040_7),
            (0.975, 1.959_963_984_540_054),
            (0.9999, 3.719_016_485_455_709),
        ];
        for (p, expected) in cases {
            let x = normal_inv_cdf(p);
            assert!((x - expected).abs() < 1e-8, "p={} got {} want {}", p, x, expected);
        }
    }

    #[test]
    fn test_inv_cdf_bounds() {
        assert_eq!(normal_inv_cdf(0.0), f64::NEG_INFINITY);
        assert_eq!(normal_inv_cdf(1.0), f64::INFINITY);
    }

    #[test]
    fn test_inv_cdf_is_monotonic() {
        let mut last = f64::NEG_INFINITY;
        for i in 1..1000 {
            let x = normal_inv_cdf(i as f64 / 1000.0);
            assert!(x > last, "not increasing at {}", i);
            last = x;
        }
    }

    #[test]
    fn test_inv_cdf_inverts_cdf() {
        for &x in &[-3.0, -1.2, 0.0, 0.7, 2.2] {
            assert!((normal_inv_cdf(normal_cdf(x)) - x).abs() < 1e-4);
        }
    }
}
