//! Zodiac classification for Vedic compatibility matching.
//!
//! Maps sidereal ecliptic longitudes to:
//! - Nakshatra (27 lunar mansions of 13 deg 20', each with 4 padas)
//! - Rashi (12 signs of 30 deg, each with a planetary lord)
//!
//! plus the classical graha (planet) enum and the BPHS natural-friendship
//! table the Graha Maitri koota scores against.

pub mod graha;
pub mod nakshatra;
pub mod rashi;

pub use graha::{ALL_GRAHAS, Graha, Maitri, naisargika_maitri};
pub use nakshatra::{
    ALL_NAKSHATRAS, NAKSHATRA_SPAN, Nakshatra, NakshatraInfo, PADA_SPAN,
    nakshatra_from_longitude, nakshatra_from_tropical,
};
pub use rashi::{
    ALL_RASHIS, RASHI_SPAN, Rashi, RashiInfo, rashi_from_longitude, rashi_from_tropical,
};
