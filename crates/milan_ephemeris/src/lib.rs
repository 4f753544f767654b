//! Pure-math ephemeris engine for Vedic compatibility matching.
//!
//! This crate converts a civil birth timestamp into celestial longitudes:
//! - Calendar date + UTC offset to Julian Day
//! - Julian Day to tropical longitudes of the Moon (truncated Meeus series)
//!   and Mars (simplified Keplerian model)
//! - Tropical to sidereal longitude via a linear ayanamsha
//!
//! Everything here is a deterministic function of its inputs: no I/O, no
//! state, no error paths. Precision targets classification (which 13 deg 20'
//! or 30 deg segment a body falls in), not telescope pointing.

pub mod ayanamsha;
pub mod julian;
pub mod mars;
pub mod moon;
pub mod util;

pub use ayanamsha::{AYANAMSHA_J2000_DEG, ayanamsha_deg, sidereal_from_tropical};
pub use julian::{BirthMoment, DAYS_PER_CENTURY, J2000_JD, jd_to_centuries, julian_day};
pub use mars::mars_tropical_longitude;
pub use moon::moon_tropical_longitude;
pub use util::normalize_360;
