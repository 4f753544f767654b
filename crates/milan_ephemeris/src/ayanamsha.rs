//! Ayanamsha (tropical-to-sidereal offset) computation.
//!
//! The ayanamsha is the angular offset between the tropical zodiac (defined
//! by the vernal equinox) and the sidereal zodiac (anchored to fixed stars).
//! As the equinox precesses westward the offset grows by ~50.3 arcsec/year.
//!
//! A single Lahiri-style linear model is used: the J2000.0 reference value
//! plus the mean precession rate. Adequate for sign and nakshatra
//! classification over civil-era dates.

use crate::julian::J2000_JD;
use crate::util::normalize_360;

/// Ayanamsha at J2000.0 in degrees.
pub const AYANAMSHA_J2000_DEG: f64 = 23.856;

/// Mean precession rate in degrees per Julian year.
pub const PRECESSION_DEG_PER_YEAR: f64 = 0.01397;

/// Ayanamsha in degrees at the given Julian Day.
pub fn ayanamsha_deg(jd: f64) -> f64 {
    AYANAMSHA_J2000_DEG + PRECESSION_DEG_PER_YEAR * ((jd - J2000_JD) / 365.25)
}

/// Sidereal ecliptic longitude from a tropical longitude, in degrees [0, 360).
pub fn sidereal_from_tropical(tropical_lon_deg: f64, jd: f64) -> f64 {
    normalize_360(tropical_lon_deg - ayanamsha_deg(jd))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reference_at_j2000() {
        assert!((ayanamsha_deg(J2000_JD) - 23.856).abs() < 1e-12);
    }

    #[test]
    fn one_century_forward() {
        // 100 Julian years of precession: 23.856 + 1.397 = 25.253.
        let jd = J2000_JD + 100.0 * 365.25;
        assert!((ayanamsha_deg(jd) - 25.253).abs() < 1e-9);
    }

    #[test]
    fn increases_with_time() {
        assert!(ayanamsha_deg(J2000_JD + 365.25) > ayanamsha_deg(J2000_JD));
    }

    #[test]
    fn sidereal_subtracts_offset() {
        let sid = sidereal_from_tropical(100.0, J2000_JD);
        assert!((sid - (100.0 - 23.856)).abs() < 1e-12);
    }

    #[test]
    fn sidereal_wraps_below_zero() {
        // Tropical 10 deg at J2000 lands at 346.144 sidereal.
        let sid = sidereal_from_tropical(10.0, J2000_JD);
        assert!((sid - 346.144).abs() < 1e-9);
        assert!((0.0..360.0).contains(&sid));
    }
}
