//! Ashtakoot (Guna Milan) compatibility scoring.
//!
//! The public entry point is [`calculate_match`]: two pre-validated
//! [`BirthDetails`] in, one [`MatchResult`] out: always exactly eight
//! kootas (Varna, Vasya, Tara, Yoni, Graha Maitri, Gana, Bhakoot, Nadi,
//! summing to at most 36) and three doshas (Nadi, Bhakoot, Manglik), in
//! fixed canonical order.
//!
//! Everything is stateless and deterministic; concurrent matches need no
//! coordination.

pub mod dosha;
pub mod error;
pub mod koota;
pub mod matching;
pub mod types;

pub use dosha::{MANGLIK_HOUSES, bhakoot_dosha, is_manglik, manglik_dosha, nadi_dosha};
pub use error::MatchError;
pub use koota::{
    Gana, NAKSHATRA_GANA, NAKSHATRA_YONI, Nadi, RASHI_VARNA, VASYA_LISTS, Varna, Yoni,
    all_kootas, bhakoot_koota, gana_koota, graha_maitri_koota, nadi_koota, nadi_of, tara_koota,
    varna_koota, vasya_koota, yoni_koota,
};
pub use matching::{MAX_SCORE, calculate_match, calculate_match_checked};
pub use types::{
    BirthDetails, CompatibilityLevel, DoshaResult, Gender, KootaResult, KootaStatus, MatchResult,
    NakshatraDetails, RashiDetails,
};
