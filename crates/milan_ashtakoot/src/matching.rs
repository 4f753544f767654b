//! Match orchestration: birth details in, full Ashtakoot verdict out.
//!
//! Each person's Moon chart is computed independently (JD, sidereal Moon
//! and Mars, nakshatra, rashi); the two charts only meet at the scoring
//! stage. The whole computation is a pure function of its inputs.

use crate::dosha::{bhakoot_dosha, is_manglik, manglik_dosha, nadi_dosha};
use crate::error::MatchError;
use crate::koota::all_kootas;
use crate::types::{
    BirthDetails, CompatibilityLevel, MatchResult, NakshatraDetails, RashiDetails,
};
use milan_ephemeris::{mars_tropical_longitude, moon_tropical_longitude, sidereal_from_tropical};
use milan_zodiac::{NakshatraInfo, RashiInfo, nakshatra_from_longitude, rashi_from_longitude};

/// Maximum obtainable Ashtakoot total.
pub const MAX_SCORE: f64 = 36.0;

/// Per-person intermediates, computed once and shared by every rule.
struct MoonChart {
    nakshatra: NakshatraInfo,
    rashi: RashiInfo,
    mars_rashi_index: u8,
}

fn moon_chart(details: &BirthDetails) -> MoonChart {
    let jd = details.birth_moment().to_julian_day();
    let moon_sid = sidereal_from_tropical(moon_tropical_longitude(jd), jd);
    let mars_sid = sidereal_from_tropical(mars_tropical_longitude(jd), jd);
    MoonChart {
        nakshatra: nakshatra_from_longitude(moon_sid),
        rashi: rashi_from_longitude(moon_sid),
        mars_rashi_index: rashi_from_longitude(mars_sid).rashi_index,
    }
}

impl MoonChart {
    fn nakshatra_details(&self) -> NakshatraDetails {
        NakshatraDetails {
            index: self.nakshatra.nakshatra_index,
            name: self.nakshatra.nakshatra.name(),
            pada: self.nakshatra.pada,
        }
    }

    fn rashi_details(&self) -> RashiDetails {
        RashiDetails {
            index: self.rashi.rashi_index,
            name: self.rashi.rashi.display_name(),
            lord: self.rashi.rashi.lord().english_name(),
        }
    }
}

fn compatibility_level(total: f64) -> CompatibilityLevel {
    if total >= 32.0 {
        CompatibilityLevel::Excellent
    } else if total >= 24.0 {
        CompatibilityLevel::VeryGood
    } else if total >= 18.0 {
        CompatibilityLevel::Average
    } else {
        CompatibilityLevel::NotRecommended
    }
}

fn recommendation(total: f64, level: CompatibilityLevel) -> String {
    match level {
        CompatibilityLevel::Excellent => format!(
            "With a score of {total}/36, this is an excellent match! The couple shares outstanding compatibility. This union is highly favorable according to Vedic astrology."
        ),
        CompatibilityLevel::VeryGood => format!(
            "With a score of {total}/36, this is a very good match. Strong compatibility in most areas. This union is considered favorable and auspicious."
        ),
        CompatibilityLevel::Average => format!(
            "With a score of {total}/36, this is an acceptable match. Some aspects may require understanding and effort. Consulting a learned astrologer is recommended."
        ),
        CompatibilityLevel::NotRecommended => format!(
            "With a score of {total}/36, this match may face challenges. It is advisable to consult an experienced Vedic astrologer for remedies before proceeding."
        ),
    }
}

/// Compute the full Ashtakoot match between two individuals.
///
/// Inputs are assumed pre-validated (see [`BirthDetails::validate`]); the
/// computation itself has no failure paths and is deterministic.
pub fn calculate_match(boy: &BirthDetails, girl: &BirthDetails) -> MatchResult {
    let b = moon_chart(boy);
    let g = moon_chart(girl);

    let kootas = all_kootas(
        b.rashi.rashi_index,
        g.rashi.rashi_index,
        b.nakshatra.nakshatra_index,
        g.nakshatra.nakshatra_index,
    );
    // All obtained values are half-integers; the f64 sum is exact.
    let total_score: f64 = kootas.iter().map(|k| k.obtained).sum();

    let doshas = [
        nadi_dosha(kootas[7].obtained),
        bhakoot_dosha(kootas[6].obtained),
        manglik_dosha(
            is_manglik(b.mars_rashi_index, b.rashi.rashi_index),
            is_manglik(g.mars_rashi_index, g.rashi.rashi_index),
        ),
    ];

    let level = compatibility_level(total_score);

    MatchResult {
        total_score,
        max_score: MAX_SCORE,
        percentage: (total_score / MAX_SCORE * 100.0).round() as u8,
        kootas,
        doshas,
        boy_nakshatra: b.nakshatra_details(),
        girl_nakshatra: g.nakshatra_details(),
        boy_rashi: b.rashi_details(),
        girl_rashi: g.rashi_details(),
        recommendation: recommendation(total_score, level),
        compatibility_level: level,
    }
}

/// Validate both inputs, then compute the match.
pub fn calculate_match_checked(
    boy: &BirthDetails,
    girl: &BirthDetails,
) -> Result<MatchResult, MatchError> {
    boy.validate()?;
    girl.validate()?;
    Ok(calculate_match(boy, girl))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn level_thresholds() {
        assert_eq!(compatibility_level(36.0), CompatibilityLevel::Excellent);
        assert_eq!(compatibility_level(32.0), CompatibilityLevel::Excellent);
        assert_eq!(compatibility_level(31.5), CompatibilityLevel::VeryGood);
        assert_eq!(compatibility_level(24.0), CompatibilityLevel::VeryGood);
        assert_eq!(compatibility_level(23.5), CompatibilityLevel::Average);
        assert_eq!(compatibility_level(18.0), CompatibilityLevel::Average);
        assert_eq!(compatibility_level(17.5), CompatibilityLevel::NotRecommended);
        assert_eq!(compatibility_level(0.0), CompatibilityLevel::NotRecommended);
    }

    #[test]
    fn recommendation_interpolates_score() {
        let text = recommendation(28.0, CompatibilityLevel::VeryGood);
        assert!(text.contains("28/36"), "got: {text}");
        let text = recommendation(16.5, CompatibilityLevel::NotRecommended);
        assert!(text.contains("16.5/36"), "got: {text}");
    }

    #[test]
    fn recommendation_per_level() {
        assert!(recommendation(33.0, CompatibilityLevel::Excellent).contains("excellent match"));
        assert!(recommendation(25.0, CompatibilityLevel::VeryGood).contains("very good match"));
        assert!(recommendation(20.0, CompatibilityLevel::Average).contains("acceptable match"));
        assert!(
            recommendation(10.0, CompatibilityLevel::NotRecommended).contains("face challenges")
        );
    }
}
