//! The three dosha (affliction) checks layered over the koota scores.
//!
//! Nadi and Bhakoot doshas fall directly out of their kootas scoring zero.
//! Manglik dosha looks at Mars's sidereal sign counted from the Moon sign,
//! and is neutralized when both partners carry it.

use crate::types::DoshaResult;

/// Houses (0-indexed sign differences from the Moon sign) in which Mars
/// makes a person Manglik: 1, 2, 4, 7, 8 and 12 counted from the Moon.
pub const MANGLIK_HOUSES: [u8; 6] = [0, 1, 3, 6, 7, 11];

/// Whether Mars in `mars_rashi` afflicts a chart with Moon in `moon_rashi`.
pub fn is_manglik(mars_rashi: u8, moon_rashi: u8) -> bool {
    MANGLIK_HOUSES.contains(&((mars_rashi + 12 - moon_rashi) % 12))
}

/// Nadi Dosha: raised when the Nadi koota scored zero (same nadi).
pub fn nadi_dosha(nadi_obtained: f64) -> DoshaResult {
    let present = nadi_obtained == 0.0;
    DoshaResult {
        name: "Nadi Dosha",
        present,
        description: if present {
            "Both partners have the same Nadi, which may indicate health concerns for offspring."
                .to_string()
        } else {
            "No Nadi Dosha. Partners have different Nadis.".to_string()
        },
        remedy: present.then_some(
            "Nadi Dosha can be mitigated through specific pujas, charitable acts, and consulting an experienced astrologer.",
        ),
    }
}

/// Bhakoot Dosha: raised when the Bhakoot koota scored zero.
pub fn bhakoot_dosha(bhakoot_obtained: f64) -> DoshaResult {
    let present = bhakoot_obtained == 0.0;
    DoshaResult {
        name: "Bhakoot Dosha",
        present,
        description: if present {
            "Unfavorable Rashi combination detected, which may affect financial prosperity and harmony."
                .to_string()
        } else {
            "No Bhakoot Dosha. Rashi positions are favorable.".to_string()
        },
        remedy: present.then_some(
            "Remedies include performing specific havans, wearing recommended gemstones, and charitable donations.",
        ),
    }
}

/// Manglik Dosha: present only when exactly one partner is Manglik.
/// Two Manglik charts neutralize each other.
pub fn manglik_dosha(boy_manglik: bool, girl_manglik: bool) -> DoshaResult {
    let both = boy_manglik && girl_manglik;
    let present = (boy_manglik || girl_manglik) && !both;
    DoshaResult {
        name: "Manglik Dosha",
        present,
        description: if both {
            "Both partners are Manglik — the dosha is considered neutralized.".to_string()
        } else if boy_manglik || girl_manglik {
            format!(
                "{} is Manglik while the other is not. This may require attention.",
                if boy_manglik { "Boy" } else { "Girl" }
            )
        } else {
            "Neither partner is Manglik. No Mangal Dosha concerns.".to_string()
        },
        remedy: present.then_some(
            "Remedies include Kumbh Vivah, reciting Hanuman Chalisa, wearing coral gemstone, and Mangal Shanti Puja.",
        ),
    }
}
