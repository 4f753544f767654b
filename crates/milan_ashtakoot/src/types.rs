//! Input and result types for the matching boundary.
//!
//! These are the serde-facing shapes: a caller hands in two `BirthDetails`
//! (already geocoded and timezone-resolved) and gets back one `MatchResult`.
//! Result payloads use camelCase keys so the JSON mapping is stable.

use serde::{Deserialize, Serialize};

use crate::error::MatchError;
use milan_ephemeris::BirthMoment;

/// Gender of an individual. Carried through for presentation; the scoring
/// pipeline itself only distinguishes the boy/girl argument positions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Gender {
    Male,
    Female,
    Other,
}

/// Birth data for one individual, as resolved by the calling layer.
///
/// `timezone` is the UTC offset in hours and may be fractional (5.5 for IST).
/// Fields are assumed range-checked; see [`BirthDetails::validate`] for the
/// boundary check recommended before entering the core.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BirthDetails {
    pub name: String,
    pub gender: Gender,
    pub day: u32,
    pub month: u32,
    pub year: i32,
    pub hour: u32,
    pub minute: u32,
    pub second: u32,
    pub place: String,
    pub latitude: f64,
    pub longitude: f64,
    pub timezone: f64,
}

impl BirthDetails {
    /// The civil instant of birth as an ephemeris input.
    pub fn birth_moment(&self) -> BirthMoment {
        BirthMoment::new(
            self.year,
            self.month,
            self.day,
            self.hour,
            self.minute,
            self.second as f64,
            self.timezone,
        )
    }

    /// Boundary validation: rejects out-of-range calendar/time fields and
    /// unresolved coordinates. The core computation never checks these
    /// itself (it is total over all JD values), so callers that skip this
    /// get a mathematically defined but astrologically meaningless result.
    pub fn validate(&self) -> Result<(), MatchError> {
        if !(1..=12).contains(&self.month) {
            return Err(MatchError::InvalidDate("month must be 1-12"));
        }
        if !(1..=days_in_month(self.year, self.month)).contains(&self.day) {
            return Err(MatchError::InvalidDate("day out of range for month"));
        }
        if self.hour > 23 {
            return Err(MatchError::InvalidTime("hour must be 0-23"));
        }
        if self.minute > 59 {
            return Err(MatchError::InvalidTime("minute must be 0-59"));
        }
        if self.second > 59 {
            return Err(MatchError::InvalidTime("second must be 0-59"));
        }
        if !(-12.0..=14.0).contains(&self.timezone) {
            return Err(MatchError::InvalidTime("timezone offset must be -12..14 hours"));
        }
        if !(-90.0..=90.0).contains(&self.latitude)
            || !(-180.0..=180.0).contains(&self.longitude)
        {
            return Err(MatchError::UnresolvedPlace("coordinates out of range"));
        }
        if self.latitude == 0.0 && self.longitude == 0.0 {
            return Err(MatchError::UnresolvedPlace("coordinates missing (0, 0)"));
        }
        Ok(())
    }
}

fn days_in_month(year: i32, month: u32) -> u32 {
    match month {
        1 | 3 | 5 | 7 | 8 | 10 | 12 => 31,
        4 | 6 | 9 | 11 => 30,
        2 => {
            let leap = (year % 4 == 0 && year % 100 != 0) || year % 400 == 0;
            if leap { 29 } else { 28 }
        }
        _ => 0,
    }
}

/// Tri-state outcome of one koota rule.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum KootaStatus {
    Good,
    Average,
    NeedsAttention,
}

/// One koota rule's outcome. `obtained` is always a half-integer, so sums
/// of kootas are exact in f64.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct KootaResult {
    pub name: &'static str,
    pub obtained: f64,
    pub maximum: f64,
    pub description: String,
    pub status: KootaStatus,
}

/// One dosha (affliction) check. `remedy` is attached only when present.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DoshaResult {
    pub name: &'static str,
    pub present: bool,
    pub description: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub remedy: Option<&'static str>,
}

/// Overall verdict bucket, derived solely from the total score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CompatibilityLevel {
    Excellent,
    VeryGood,
    Average,
    NotRecommended,
}

/// Moon nakshatra classification for one individual, in result form.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NakshatraDetails {
    pub index: u8,
    pub name: &'static str,
    pub pada: u8,
}

/// Moon rashi classification for one individual, in result form.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RashiDetails {
    pub index: u8,
    pub name: String,
    pub lord: &'static str,
}

/// Complete match outcome: always exactly 8 kootas and 3 doshas, in fixed
/// canonical order.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MatchResult {
    pub total_score: f64,
    pub max_score: f64,
    pub percentage: u8,
    pub kootas: [KootaResult; 8],
    pub doshas: [DoshaResult; 3],
    pub boy_nakshatra: NakshatraDetails,
    pub girl_nakshatra: NakshatraDetails,
    pub boy_rashi: RashiDetails,
    pub girl_rashi: RashiDetails,
    pub recommendation: String,
    pub compatibility_level: CompatibilityLevel,
}
