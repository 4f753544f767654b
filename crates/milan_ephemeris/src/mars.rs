//! Tropical longitude of Mars from a simplified Keplerian model.
//!
//! Mean longitude and mean anomaly are linear in Julian centuries; the
//! equation of center is a three-term sine series in the mean anomaly.
//! This is a coarse model (degree-level accuracy) but fully continuous and
//! deterministic, which is all the sign-relative Manglik check needs.

use crate::julian::jd_to_centuries;
use crate::util::normalize_360;

/// Equation-of-center sine coefficients for multiples 1-3 of the mean
/// anomaly, in degrees (2e, 5e^2/4, 13e^3/12 for Mars' eccentricity).
const EQUATION_OF_CENTER: [f64; 3] = [10.6912, 0.6228, 0.0503];

/// Tropical ecliptic longitude of Mars in degrees [0, 360).
pub fn mars_tropical_longitude(jd: f64) -> f64 {
    let t = jd_to_centuries(jd);
    let l0 = normalize_360(355.433_275 + 19_140.299_331_3 * t);
    let m = normalize_360(19.373_0 + 19_139.854_75 * t).to_radians();

    let mut center = 0.0;
    for (k, coeff) in EQUATION_OF_CENTER.iter().enumerate() {
        center += coeff * ((k + 1) as f64 * m).sin();
    }

    normalize_360(l0 + center)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::julian::J2000_JD;

    #[test]
    fn longitude_in_range() {
        let mut jd = J2000_JD - 30_000.0;
        while jd < J2000_JD + 30_000.0 {
            let lon = mars_tropical_longitude(jd);
            assert!((0.0..360.0).contains(&lon), "out of range at jd {jd}: {lon}");
            jd += 97.0;
        }
    }

    #[test]
    fn j2000_golden() {
        // L0 = 355.433275, M = 19.3730 at J2000: equation of center ~3.979,
        // so the model gives ~359.412 deg.
        let lon = mars_tropical_longitude(J2000_JD);
        assert!((lon - 359.412).abs() < 0.02, "got {lon}");
    }

    #[test]
    fn anomalistic_period_consistency() {
        // After one anomalistic period (~687.0 days) the mean anomaly
        // repeats, so the longitude advances by almost exactly one
        // revolution plus the small mean-longitude drift.
        let jd = J2000_JD + 5_000.0;
        let a = mars_tropical_longitude(jd);
        let b = mars_tropical_longitude(jd + 686.98);
        let diff = normalize_360(b - a);
        assert!(diff < 0.5 || diff > 359.5, "period drift {diff}");
    }

    #[test]
    fn mean_daily_motion() {
        // Mean motion ~0.524 deg/day; equation of center can swing the
        // instantaneous rate but a 100-day average stays close.
        let jd = J2000_JD + 777.0;
        let span = 100.0;
        let moved = normalize_360(mars_tropical_longitude(jd + span) - mars_tropical_longitude(jd));
        assert!((moved / span - 0.524).abs() < 0.15, "avg motion {}", moved / span);
    }
}
