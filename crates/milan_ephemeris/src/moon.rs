//! Geocentric tropical longitude of the Moon.
//!
//! Truncated lunar-theory series after Meeus, "Astronomical Algorithms"
//! ch. 47: five fundamental arguments as polynomials in Julian centuries,
//! plus the 16 largest periodic longitude terms (coefficients in millionths
//! of a degree). Good to roughly 0.01-0.1 deg, which comfortably resolves
//! nakshatra (13 deg 20') and rashi (30 deg) boundaries.

use crate::julian::jd_to_centuries;
use crate::util::normalize_360;

/// One periodic longitude term: integer multiples of the fundamental
/// arguments D, M, M', F and a sine coefficient in microdegrees.
struct LongitudeTerm {
    d: f64,
    m: f64,
    mp: f64,
    f: f64,
    coeff_microdeg: f64,
}

/// The 16 largest terms of the Meeus ch. 47 longitude table.
const LONGITUDE_TERMS: [LongitudeTerm; 16] = [
    LongitudeTerm { d: 0.0, m: 0.0, mp: 1.0, f: 0.0, coeff_microdeg: 6_288_774.0 },
    LongitudeTerm { d: 2.0, m: 0.0, mp: -1.0, f: 0.0, coeff_microdeg: 1_274_027.0 },
    LongitudeTerm { d: 2.0, m: 0.0, mp: 0.0, f: 0.0, coeff_microdeg: 658_314.0 },
    LongitudeTerm { d: 0.0, m: 0.0, mp: 2.0, f: 0.0, coeff_microdeg: 213_618.0 },
    LongitudeTerm { d: 0.0, m: 1.0, mp: 0.0, f: 0.0, coeff_microdeg: -185_116.0 },
    LongitudeTerm { d: 0.0, m: 0.0, mp: 0.0, f: 2.0, coeff_microdeg: -114_332.0 },
    LongitudeTerm { d: 2.0, m: 0.0, mp: -2.0, f: 0.0, coeff_microdeg: 58_793.0 },
    LongitudeTerm { d: 2.0, m: -1.0, mp: -1.0, f: 0.0, coeff_microdeg: 57_066.0 },
    LongitudeTerm { d: 2.0, m: 0.0, mp: 1.0, f: 0.0, coeff_microdeg: 53_322.0 },
    LongitudeTerm { d: 2.0, m: -1.0, mp: 0.0, f: 0.0, coeff_microdeg: 45_758.0 },
    LongitudeTerm { d: 0.0, m: 1.0, mp: -1.0, f: 0.0, coeff_microdeg: -40_923.0 },
    LongitudeTerm { d: 1.0, m: 0.0, mp: 0.0, f: 0.0, coeff_microdeg: -34_720.0 },
    LongitudeTerm { d: 0.0, m: 1.0, mp: 1.0, f: 0.0, coeff_microdeg: -30_383.0 },
    LongitudeTerm { d: 2.0, m: 0.0, mp: 0.0, f: -2.0, coeff_microdeg: 15_327.0 },
    LongitudeTerm { d: 0.0, m: 0.0, mp: 1.0, f: 2.0, coeff_microdeg: -12_528.0 },
    LongitudeTerm { d: 0.0, m: 0.0, mp: 1.0, f: -2.0, coeff_microdeg: 10_980.0 },
];

/// Tropical ecliptic longitude of the Moon in degrees [0, 360).
pub fn moon_tropical_longitude(jd: f64) -> f64 {
    let t = jd_to_centuries(jd);

    // Fundamental arguments (degrees): mean longitude L', mean elongation D,
    // Sun's mean anomaly M, Moon's mean anomaly M', argument of latitude F.
    let lp = normalize_360(218.316_447_7 + 481_267.881_234_21 * t - 0.001_578_6 * t * t);
    let d = normalize_360(297.850_192_1 + 445_267.111_403_4 * t - 0.001_881_9 * t * t);
    let m = normalize_360(357.529_109_2 + 35_999.050_290_9 * t - 0.000_153_6 * t * t);
    let mp = normalize_360(134.963_396_4 + 477_198.867_505_5 * t + 0.008_741_4 * t * t);
    let f = normalize_360(93.272_095_0 + 483_202.017_523_3 * t - 0.003_653_9 * t * t);

    let mut sum_microdeg = 0.0;
    for term in &LONGITUDE_TERMS {
        let arg = (term.d * d + term.m * m + term.mp * mp + term.f * f).to_radians();
        sum_microdeg += term.coeff_microdeg * arg.sin();
    }

    normalize_360(lp + sum_microdeg / 1.0e6)
}
