//! The eight Ashtakoot scoring rules.
//!
//! Each rule compares the two individuals' Moon rashi index (0-11) and/or
//! Moon nakshatra index (0-26) against fixed classical tables and produces
//! a [`KootaResult`]. Maxima sum to 36: Varna 1, Vasya 2, Tara 3, Yoni 4,
//! Graha Maitri 5, Gana 6, Bhakoot 7, Nadi 8.
//!
//! Rules take raw indices rather than enums so all lookups stay table
//! driven; the tables themselves carry named index spaces.

use crate::types::{KootaResult, KootaStatus};
use milan_zodiac::{ALL_RASHIS, Maitri, naisargika_maitri};

// ---------------------------------------------------------------------------
// 1. Varna (social/spiritual class) - max 1
// ---------------------------------------------------------------------------

/// The four varna classes, ordered lowest to highest.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Varna {
    Shudra,
    Vaishya,
    Kshatriya,
    Brahmin,
}

impl Varna {
    pub const fn name(self) -> &'static str {
        match self {
            Self::Shudra => "Shudra",
            Self::Vaishya => "Vaishya",
            Self::Kshatriya => "Kshatriya",
            Self::Brahmin => "Brahmin",
        }
    }
}

/// Varna of each rashi: the classical fire/earth/air/water cycle mapped to
/// Kshatriya/Vaishya/Shudra/Brahmin, repeating every four signs.
pub const RASHI_VARNA: [Varna; 12] = [
    Varna::Kshatriya,
    Varna::Vaishya,
    Varna::Shudra,
    Varna::Brahmin,
    Varna::Kshatriya,
    Varna::Vaishya,
    Varna::Shudra,
    Varna::Brahmin,
    Varna::Kshatriya,
    Varna::Vaishya,
    Varna::Shudra,
    Varna::Brahmin,
];

/// Varna koota: full point when the boy's class is not below the girl's.
/// Deliberately asymmetric.
pub fn varna_koota(boy_rashi: u8, girl_rashi: u8) -> KootaResult {
    let bv = RASHI_VARNA[boy_rashi as usize];
    let gv = RASHI_VARNA[girl_rashi as usize];
    let obtained = if bv >= gv { 1.0 } else { 0.0 };
    KootaResult {
        name: "Varna",
        obtained,
        maximum: 1.0,
        description: format!(
            "Boy: {}, Girl: {}. Represents spiritual compatibility and ego levels.",
            bv.name(),
            gv.name()
        ),
        status: if obtained == 1.0 {
            KootaStatus::Good
        } else {
            KootaStatus::NeedsAttention
        },
    }
}

// ---------------------------------------------------------------------------
// 2. Vasya (mutual influence) - max 2
// ---------------------------------------------------------------------------

/// For each rashi, the rashis it holds sway over (classical Vasya lists).
pub const VASYA_LISTS: [&[u8]; 12] = [
    &[4, 7],  // Mesha -> Simha, Vrishchika
    &[3, 6],  // Vrishabha -> Karka, Tula
    &[5],     // Mithuna -> Kanya
    &[7, 8],  // Karka -> Vrishchika, Dhanu
    &[6],     // Simha -> Tula
    &[11, 2], // Kanya -> Meena, Mithuna
    &[5, 9],  // Tula -> Kanya, Makara
    &[3],     // Vrishchika -> Karka
    &[11],    // Dhanu -> Meena
    &[10],    // Makara -> Kumbha
    &[11],    // Kumbha -> Meena
    &[9],     // Meena -> Makara
];

/// Vasya koota: 2 for the same rashi or mutual sway, 1 for one-directional
/// sway, 0 otherwise.
pub fn vasya_koota(boy_rashi: u8, girl_rashi: u8) -> KootaResult {
    if boy_rashi == girl_rashi {
        return KootaResult {
            name: "Vasya",
            obtained: 2.0,
            maximum: 2.0,
            description: "Same Rashi — natural mutual attraction.".to_string(),
            status: KootaStatus::Good,
        };
    }
    let b2g = VASYA_LISTS[boy_rashi as usize].contains(&girl_rashi);
    let g2b = VASYA_LISTS[girl_rashi as usize].contains(&boy_rashi);
    let obtained = match (b2g, g2b) {
        (true, true) => 2.0,
        (true, false) | (false, true) => 1.0,
        (false, false) => 0.0,
    };
    KootaResult {
        name: "Vasya",
        obtained,
        maximum: 2.0,
        description: "Indicates mutual attraction and influence in the relationship."
            .to_string(),
        status: if obtained >= 2.0 {
            KootaStatus::Good
        } else if obtained >= 1.0 {
            KootaStatus::Average
        } else {
            KootaStatus::NeedsAttention
        },
    }
}

// ---------------------------------------------------------------------------
// 3. Tara (birth-star counts) - max 3
// ---------------------------------------------------------------------------

/// Auspicious tara remainders when counting nakshatras from one partner to
/// the other, mod 9.
const TARA_AUSPICIOUS: [u8; 5] = [0, 1, 3, 5, 7];

/// Tara koota: counts in both directions; 3 if both counts land on an
/// auspicious tara, 1.5 if one does, 0 if neither.
pub fn tara_koota(boy_nakshatra: u8, girl_nakshatra: u8) -> KootaResult {
    let b2g = ((girl_nakshatra + 27 - boy_nakshatra) % 27) % 9;
    let g2b = ((boy_nakshatra + 27 - girl_nakshatra) % 27) % 9;
    let ba = TARA_AUSPICIOUS.contains(&b2g);
    let ga = TARA_AUSPICIOUS.contains(&g2b);
    let obtained = match (ba, ga) {
        (true, true) => 3.0,
        (true, false) | (false, true) => 1.5,
        (false, false) => 0.0,
    };
    KootaResult {
        name: "Tara",
        obtained,
        maximum: 3.0,
        description: "Measures destiny compatibility and health aspects of the couple."
            .to_string(),
        status: if obtained >= 3.0 {
            KootaStatus::Good
        } else if obtained >= 1.5 {
            KootaStatus::Average
        } else {
            KootaStatus::NeedsAttention
        },
    }
}

// ---------------------------------------------------------------------------
// 4. Yoni (symbolic animal) - max 4
// ---------------------------------------------------------------------------

/// The 14 yoni animals.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Yoni {
    Horse,
    Elephant,
    Goat,
    Serpent,
    Dog,
    Cat,
    Rat,
    Cow,
    Buffalo,
    Tiger,
    Deer,
    Monkey,
    Mongoose,
    Lion,
}

impl Yoni {
    pub const fn name(self) -> &'static str {
        match self {
            Self::Horse => "Horse",
            Self::Elephant => "Elephant",
            Self::Goat => "Goat",
            Self::Serpent => "Serpent",
            Self::Dog => "Dog",
            Self::Cat => "Cat",
            Self::Rat => "Rat",
            Self::Cow => "Cow",
            Self::Buffalo => "Buffalo",
            Self::Tiger => "Tiger",
            Self::Deer => "Deer",
            Self::Monkey => "Monkey",
            Self::Mongoose => "Mongoose",
            Self::Lion => "Lion",
        }
    }
}

/// Yoni animal of each nakshatra.
pub const NAKSHATRA_YONI: [Yoni; 27] = [
    Yoni::Horse,    // Ashwini
    Yoni::Elephant, // Bharani
    Yoni::Goat,     // Krittika
    Yoni::Serpent,  // Rohini
    Yoni::Serpent,  // Mrigashira
    Yoni::Dog,      // Ardra
    Yoni::Cat,      // Punarvasu
    Yoni::Goat,     // Pushya
    Yoni::Cat,      // Ashlesha
    Yoni::Rat,      // Magha
    Yoni::Rat,      // Purva Phalguni
    Yoni::Cow,      // Uttara Phalguni
    Yoni::Buffalo,  // Hasta
    Yoni::Tiger,    // Chitra
    Yoni::Buffalo,  // Swati
    Yoni::Tiger,    // Vishakha
    Yoni::Deer,     // Anuradha
    Yoni::Deer,     // Jyeshtha
    Yoni::Dog,      // Mula
    Yoni::Monkey,   // Purva Ashadha
    Yoni::Mongoose, // Uttara Ashadha
    Yoni::Monkey,   // Shravana
    Yoni::Lion,     // Dhanishta
    Yoni::Horse,    // Shatabhisha
    Yoni::Lion,     // Purva Bhadrapada
    Yoni::Cow,      // Uttara Bhadrapada
    Yoni::Elephant, // Revati
];

/// Classical enemy pairs among the yoni animals (unordered).
pub const YONI_ENEMIES: [(Yoni, Yoni); 7] = [
    (Yoni::Horse, Yoni::Buffalo),
    (Yoni::Elephant, Yoni::Lion),
    (Yoni::Goat, Yoni::Monkey),
    (Yoni::Serpent, Yoni::Mongoose),
    (Yoni::Dog, Yoni::Deer),
    (Yoni::Cat, Yoni::Rat),
    (Yoni::Cow, Yoni::Tiger),
];

fn yoni_enemies(a: Yoni, b: Yoni) -> bool {
    YONI_ENEMIES
        .iter()
        .any(|&(x, y)| (x == a && y == b) || (y == a && x == b))
}

/// Yoni koota: 4 for the same animal, 0 for an enemy pair, 2 otherwise.
pub fn yoni_koota(boy_nakshatra: u8, girl_nakshatra: u8) -> KootaResult {
    let ba = NAKSHATRA_YONI[boy_nakshatra as usize];
    let ga = NAKSHATRA_YONI[girl_nakshatra as usize];
    let obtained = if ba == ga {
        4.0
    } else if yoni_enemies(ba, ga) {
        0.0
    } else {
        2.0
    };
    KootaResult {
        name: "Yoni",
        obtained,
        maximum: 4.0,
        description: format!(
            "Boy: {}, Girl: {}. Represents physical and sexual compatibility.",
            ba.name(),
            ga.name()
        ),
        status: if obtained >= 3.0 {
            KootaStatus::Good
        } else if obtained >= 2.0 {
            KootaStatus::Average
        } else {
            KootaStatus::NeedsAttention
        },
    }
}

// ---------------------------------------------------------------------------
// 5. Graha Maitri (lords' friendship) - max 5
// ---------------------------------------------------------------------------

/// Graha Maitri koota: 5 for a shared lord; otherwise both directions of
/// the natural-friendship table combine into a 0-5 score.
pub fn graha_maitri_koota(boy_rashi: u8, girl_rashi: u8) -> KootaResult {
    let bl = ALL_RASHIS[boy_rashi as usize].lord();
    let gl = ALL_RASHIS[girl_rashi as usize].lord();

    if bl == gl {
        return KootaResult {
            name: "Graha Maitri",
            obtained: 5.0,
            maximum: 5.0,
            description: format!(
                "Both ruled by {}. Natural mental compatibility.",
                bl.english_name()
            ),
            status: KootaStatus::Good,
        };
    }

    use Maitri::*;
    let obtained = match (naisargika_maitri(bl, gl), naisargika_maitri(gl, bl)) {
        (Friend, Friend) => 5.0,
        (Friend, Neutral) | (Neutral, Friend) => 4.0,
        (Neutral, Neutral) => 3.0,
        (Friend, Enemy) | (Enemy, Friend) => 1.0,
        (Neutral, Enemy) | (Enemy, Neutral) => 0.5,
        (Enemy, Enemy) => 0.0,
    };
    KootaResult {
        name: "Graha Maitri",
        obtained,
        maximum: 5.0,
        description: format!(
            "Boy's lord: {}, Girl's lord: {}. Mental compatibility and friendship.",
            bl.english_name(),
            gl.english_name()
        ),
        status: if obtained >= 4.0 {
            KootaStatus::Good
        } else if obtained >= 2.0 {
            KootaStatus::Average
        } else {
            KootaStatus::NeedsAttention
        },
    }
}

// ---------------------------------------------------------------------------
// 6. Gana (temperament) - max 6
// ---------------------------------------------------------------------------

/// The three gana temperament classes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Gana {
    Dev,
    Manushya,
    Rakshasa,
}

impl Gana {
    pub const fn name(self) -> &'static str {
        match self {
            Self::Dev => "Dev",
            Self::Manushya => "Manushya",
            Self::Rakshasa => "Rakshasa",
        }
    }

    const fn index(self) -> usize {
        self as usize
    }
}

/// Gana of each nakshatra.
pub const NAKSHATRA_GANA: [Gana; 27] = [
    Gana::Dev,      // Ashwini
    Gana::Manushya, // Bharani
    Gana::Rakshasa, // Krittika
    Gana::Manushya, // Rohini
    Gana::Dev,      // Mrigashira
    Gana::Manushya, // Ardra
    Gana::Dev,      // Punarvasu
    Gana::Dev,      // Pushya
    Gana::Rakshasa, // Ashlesha
    Gana::Rakshasa, // Magha
    Gana::Manushya, // Purva Phalguni
    Gana::Manushya, // Uttara Phalguni
    Gana::Dev,      // Hasta
    Gana::Rakshasa, // Chitra
    Gana::Dev,      // Swati
    Gana::Rakshasa, // Vishakha
    Gana::Dev,      // Anuradha
    Gana::Rakshasa, // Jyeshtha
    Gana::Rakshasa, // Mula
    Gana::Manushya, // Purva Ashadha
    Gana::Manushya, // Uttara Ashadha
    Gana::Dev,      // Shravana
    Gana::Rakshasa, // Dhanishta
    Gana::Rakshasa, // Shatabhisha
    Gana::Manushya, // Purva Bhadrapada
    Gana::Manushya, // Uttara Bhadrapada
    Gana::Dev,      // Revati
];

/// Symmetric gana score matrix, rows = boy's gana, columns = girl's gana.
const GANA_SCORE: [[f64; 3]; 3] = [
    [6.0, 5.0, 1.0],
    [5.0, 6.0, 0.0],
    [1.0, 0.0, 6.0],
];

/// Gana koota: fixed 3x3 matrix over the two temperament classes.
pub fn gana_koota(boy_nakshatra: u8, girl_nakshatra: u8) -> KootaResult {
    let bg = NAKSHATRA_GANA[boy_nakshatra as usize];
    let gg = NAKSHATRA_GANA[girl_nakshatra as usize];
    let obtained = GANA_SCORE[bg.index()][gg.index()];
    KootaResult {
        name: "Gana",
        obtained,
        maximum: 6.0,
        description: format!(
            "Boy: {}, Girl: {}. Temperament and behavior compatibility.",
            bg.name(),
            gg.name()
        ),
        status: if obtained >= 5.0 {
            KootaStatus::Good
        } else if obtained >= 3.0 {
            KootaStatus::Average
        } else {
            KootaStatus::NeedsAttention
        },
    }
}

// ---------------------------------------------------------------------------
// 7. Bhakoot (relative sign positions) - max 7
// ---------------------------------------------------------------------------

/// Sign differences (girl minus boy, mod 12) that forfeit the koota:
/// the 2/12, 6/8 and 5/9 position pairs.
const BHAKOOT_AFFLICTED: [u8; 4] = [1, 5, 7, 11];

/// Bhakoot koota: all-or-nothing 7 points on the relative rashi positions.
pub fn bhakoot_koota(boy_rashi: u8, girl_rashi: u8) -> KootaResult {
    let diff = (girl_rashi + 12 - boy_rashi) % 12;
    let obtained = if BHAKOOT_AFFLICTED.contains(&diff) { 0.0 } else { 7.0 };
    KootaResult {
        name: "Bhakoot",
        obtained,
        maximum: 7.0,
        description: "Affects health, wealth, and happiness. Based on relative Rashi positions."
            .to_string(),
        status: if obtained == 7.0 {
            KootaStatus::Good
        } else {
            KootaStatus::NeedsAttention
        },
    }
}

// ---------------------------------------------------------------------------
// 8. Nadi (physiological channel) - max 8
// ---------------------------------------------------------------------------

/// The three nadis.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Nadi {
    Aadi,
    Madhya,
    Antya,
}

impl Nadi {
    pub const fn name(self) -> &'static str {
        match self {
            Self::Aadi => "Aadi (Vata)",
            Self::Madhya => "Madhya (Pitta)",
            Self::Antya => "Antya (Kapha)",
        }
    }
}

/// The nadi zigzag: nakshatras cycle Aadi-Madhya-Antya-Antya-Madhya-Aadi.
pub const NADI_PATTERN: [Nadi; 6] = [
    Nadi::Aadi,
    Nadi::Madhya,
    Nadi::Antya,
    Nadi::Antya,
    Nadi::Madhya,
    Nadi::Aadi,
];

/// Nadi of a nakshatra by index.
pub const fn nadi_of(nakshatra_index: u8) -> Nadi {
    NADI_PATTERN[(nakshatra_index % 6) as usize]
}

/// Nadi koota: the heaviest-weighted rule; 8 when the nadis differ, 0 when
/// they coincide (which also raises Nadi Dosha).
pub fn nadi_koota(boy_nakshatra: u8, girl_nakshatra: u8) -> KootaResult {
    let bn = nadi_of(boy_nakshatra);
    let gn = nadi_of(girl_nakshatra);
    let obtained = if bn != gn { 8.0 } else { 0.0 };
    KootaResult {
        name: "Nadi",
        obtained,
        maximum: 8.0,
        description: format!(
            "Boy: {}, Girl: {}. Most important koota — physiological and hereditary compatibility.",
            bn.name(),
            gn.name()
        ),
        status: if obtained == 8.0 {
            KootaStatus::Good
        } else {
            KootaStatus::NeedsAttention
        },
    }
}

// ---------------------------------------------------------------------------
// All eight in canonical order
// ---------------------------------------------------------------------------

/// Compute all eight kootas in the canonical Ashtakoot order.
pub fn all_kootas(
    boy_rashi: u8,
    girl_rashi: u8,
    boy_nakshatra: u8,
    girl_nakshatra: u8,
) -> [KootaResult; 8] {
    [
        varna_koota(boy_rashi, girl_rashi),
        vasya_koota(boy_rashi, girl_rashi),
        tara_koota(boy_nakshatra, girl_nakshatra),
        yoni_koota(boy_nakshatra, girl_nakshatra),
        graha_maitri_koota(boy_rashi, girl_rashi),
        gana_koota(boy_nakshatra, girl_nakshatra),
        bhakoot_koota(boy_rashi, girl_rashi),
        nadi_koota(boy_nakshatra, girl_nakshatra),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    // --- Varna ---

    #[test]
    fn varna_equal_class_scores() {
        // Mesha (Kshatriya) boy, Simha (Kshatriya) girl.
        let k = varna_koota(0, 4);
        assert_eq!(k.obtained, 1.0);
        assert_eq!(k.status, KootaStatus::Good);
    }

    #[test]
    fn varna_is_asymmetric() {
        // Mithuna (Shudra) boy vs Karka (Brahmin) girl fails; reversed passes.
        let fail = varna_koota(2, 3);
        let pass = varna_koota(3, 2);
        assert_eq!(fail.obtained, 0.0);
        assert_eq!(pass.obtained, 1.0);
    }

    #[test]
    fn varna_table_cycle() {
        for i in 0..12usize {
            assert_eq!(RASHI_VARNA[i], RASHI_VARNA[i % 4], "varna cycles every 4 signs");
        }
    }

    // --- Vasya ---

    #[test]
    fn vasya_same_rashi() {
        let k = vasya_koota(6, 6);
        assert_eq!(k.obtained, 2.0);
        assert_eq!(k.status, KootaStatus::Good);
    }

    #[test]
    fn vasya_mutual() {
        // Mithuna -> Kanya and Kanya -> Mithuna both hold.
        let k = vasya_koota(2, 5);
        assert_eq!(k.obtained, 2.0);
        assert_eq!(k.status, KootaStatus::Good);
    }

    #[test]
    fn vasya_one_directional() {
        // Tula holds sway over Kanya but not the reverse.
        let k = vasya_koota(6, 5);
        assert_eq!(k.obtained, 1.0);
        assert_eq!(k.status, KootaStatus::Average);
    }

    #[test]
    fn vasya_none() {
        // Mesha (0) and Vrishabha (1): neither list mentions the other.
        let k = vasya_koota(0, 1);
        assert_eq!(k.obtained, 0.0);
        assert_eq!(k.status, KootaStatus::NeedsAttention);
    }

    #[test]
    fn vasya_symmetric() {
        for b in 0..12u8 {
            for g in 0..12u8 {
                assert_eq!(
                    vasya_koota(b, g).obtained,
                    vasya_koota(g, b).obtained,
                    "vasya symmetric at ({b}, {g})"
                );
            }
        }
    }

    // --- Tara ---

    #[test]
    fn tara_same_nakshatra_full() {
        // Both counts are 0, which is auspicious.
        let k = tara_koota(10, 10);
        assert_eq!(k.obtained, 3.0);
    }

    #[test]
    fn tara_half_point_case() {
        // bN=0, gN=2: b2g = 2 (inauspicious), g2b = (0-2+27)%27%9 = 7
        // (auspicious) -> 1.5.
        let k = tara_koota(0, 2);
        assert_eq!(k.obtained, 1.5);
        assert_eq!(k.status, KootaStatus::Average);
    }

    #[test]
    fn tara_symmetric() {
        // Both directions are computed, so swapping inputs cannot change
        // the outcome.
        for b in 0..27u8 {
            for g in 0..27u8 {
                assert_eq!(tara_koota(b, g).obtained, tara_koota(g, b).obtained);
            }
        }
    }

    // --- Yoni ---

    #[test]
    fn yoni_same_animal() {
        // Rohini and Mrigashira are both Serpent.
        let k = yoni_koota(3, 4);
        assert_eq!(k.obtained, 4.0);
        assert_eq!(k.status, KootaStatus::Good);
    }

    #[test]
    fn yoni_enemy_pair() {
        // Ashwini (Horse) vs Hasta (Buffalo).
        let k = yoni_koota(0, 12);
        assert_eq!(k.obtained, 0.0);
        assert_eq!(k.status, KootaStatus::NeedsAttention);
    }

    #[test]
    fn yoni_neutral_pair() {
        // Ashwini (Horse) vs Bharani (Elephant): neither same nor enemies.
        let k = yoni_koota(0, 1);
        assert_eq!(k.obtained, 2.0);
        assert_eq!(k.status, KootaStatus::Average);
    }

    #[test]
    fn yoni_enemy_list_is_unordered() {
        assert_eq!(yoni_koota(0, 12).obtained, yoni_koota(12, 0).obtained);
    }

    // --- Graha Maitri ---

    #[test]
    fn graha_maitri_same_lord() {
        // Mesha and Vrishchika are both ruled by Mars.
        let k = graha_maitri_koota(0, 7);
        assert_eq!(k.obtained, 5.0);
        assert!(k.description.contains("Mars"));
    }

    #[test]
    fn graha_maitri_mutual_friends() {
        // Karka (Moon) and Simha (Sun): Moon-Sun friendship both ways.
        let k = graha_maitri_koota(3, 4);
        assert_eq!(k.obtained, 5.0);
    }

    #[test]
    fn graha_maitri_half_point() {
        // Karka (Moon) and Makara (Saturn): Moon->Saturn neutral,
        // Saturn->Moon enemy -> 0.5.
        let k = graha_maitri_koota(3, 9);
        assert_eq!(k.obtained, 0.5);
        assert_eq!(k.status, KootaStatus::NeedsAttention);
    }

    #[test]
    fn graha_maitri_friend_neutral() {
        // Mesha (Mars) and Karka (Moon): Mars->Moon friend,
        // Moon->Mars neutral -> 4.
        let k = graha_maitri_koota(0, 3);
        assert_eq!(k.obtained, 4.0);
        assert_eq!(k.status, KootaStatus::Good);
    }

    #[test]
    fn graha_maitri_both_neutral() {
        // Vrishabha (Venus) and Mesha (Mars): neutral both ways -> 3.
        let k = graha_maitri_koota(1, 0);
        assert_eq!(k.obtained, 3.0);
        assert_eq!(k.status, KootaStatus::Average);
    }

    #[test]
    fn graha_maitri_friend_enemy() {
        // Mithuna (Mercury) and Karka (Moon): Mercury->Moon enemy,
        // Moon->Mercury friend -> 1.
        let k = graha_maitri_koota(2, 3);
        assert_eq!(k.obtained, 1.0);
        assert_eq!(k.status, KootaStatus::NeedsAttention);
    }

    #[test]
    fn graha_maitri_enemies() {
        // Simha (Sun) and Vrishabha (Venus): Sun->Venus enemy,
        // Venus->Sun enemy -> 0.
        let k = graha_maitri_koota(4, 1);
        assert_eq!(k.obtained, 0.0);
    }

    // --- Gana ---

    #[test]
    fn gana_same_class() {
        // Ashwini and Mrigashira are both Dev.
        let k = gana_koota(0, 4);
        assert_eq!(k.obtained, 6.0);
        assert_eq!(k.status, KootaStatus::Good);
    }

    #[test]
    fn gana_dev_manushya() {
        // Ashwini (Dev) vs Bharani (Manushya).
        let k = gana_koota(0, 1);
        assert_eq!(k.obtained, 5.0);
    }

    #[test]
    fn gana_manushya_rakshasa_zero() {
        // Bharani (Manushya) vs Krittika (Rakshasa).
        let k = gana_koota(1, 2);
        assert_eq!(k.obtained, 0.0);
        assert_eq!(k.status, KootaStatus::NeedsAttention);
    }

    #[test]
    fn gana_symmetric() {
        for b in 0..27u8 {
            for g in 0..27u8 {
                assert_eq!(gana_koota(b, g).obtained, gana_koota(g, b).obtained);
            }
        }
    }

    // --- Bhakoot ---

    #[test]
    fn bhakoot_same_sign_passes() {
        assert_eq!(bhakoot_koota(5, 5).obtained, 7.0);
    }

    #[test]
    fn bhakoot_afflicted_positions() {
        // diff 1 (2/12), 5 (6/8), 7 (8/6... the 6-8 axis), 11.
        for &diff in &[1u8, 5, 7, 11] {
            let k = bhakoot_koota(0, diff % 12);
            assert_eq!(k.obtained, 0.0, "diff {diff}");
        }
    }

    #[test]
    fn bhakoot_directional_diff() {
        // The diff is taken girl-minus-boy: boy 0 / girl 5 counts as 5,
        // swapped it counts as 7. Both happen to sit in the afflicted set
        // (it is closed under negation mod 12: 1<->11, 5<->7).
        assert_eq!((5u8 + 12 - 0) % 12, 5);
        assert_eq!((0u8 + 12 - 5) % 12, 7);
        assert_eq!(bhakoot_koota(0, 5).obtained, 0.0);
        assert_eq!(bhakoot_koota(5, 0).obtained, 0.0);
        // Off the afflicted set both directions pass.
        assert_eq!(bhakoot_koota(0, 2).obtained, 7.0);
        assert_eq!(bhakoot_koota(2, 0).obtained, 7.0);
    }

    // --- Nadi ---

    #[test]
    fn nadi_pattern_zigzag() {
        use Nadi::*;
        assert_eq!(NADI_PATTERN, [Aadi, Madhya, Antya, Antya, Madhya, Aadi]);
    }

    #[test]
    fn nadi_same_scores_zero() {
        // Indices 0 and 5 both map to Aadi.
        let k = nadi_koota(0, 5);
        assert_eq!(k.obtained, 0.0);
        assert_eq!(k.status, KootaStatus::NeedsAttention);
    }

    #[test]
    fn nadi_different_scores_eight() {
        // Index 0 (Aadi) vs 1 (Madhya).
        let k = nadi_koota(0, 1);
        assert_eq!(k.obtained, 8.0);
        assert_eq!(k.status, KootaStatus::Good);
    }

    #[test]
    fn nadi_cycle_wraps() {
        assert_eq!(nadi_of(6), nadi_of(0));
        assert_eq!(nadi_of(26), nadi_of(26 % 6));
    }

    // --- Aggregate ---

    #[test]
    fn canonical_order_and_maxima() {
        let kootas = all_kootas(0, 6, 0, 13);
        let names: Vec<_> = kootas.iter().map(|k| k.name).collect();
        assert_eq!(
            names,
            ["Varna", "Vasya", "Tara", "Yoni", "Graha Maitri", "Gana", "Bhakoot", "Nadi"]
        );
        let maxima: Vec<_> = kootas.iter().map(|k| k.maximum).collect();
        assert_eq!(maxima, [1.0, 2.0, 3.0, 4.0, 5.0, 6.0, 7.0, 8.0]);
    }

    #[test]
    fn every_score_within_bounds() {
        for br in 0..12u8 {
            for gr in 0..12u8 {
                for bn in (0..27u8).step_by(3) {
                    for gn in (0..27u8).step_by(3) {
                        for k in all_kootas(br, gr, bn, gn) {
                            assert!(
                                k.obtained >= 0.0 && k.obtained <= k.maximum,
                                "{} out of bounds: {} / {}",
                                k.name,
                                k.obtained,
                                k.maximum
                            );
                        }
                    }
                }
            }
        }
    }

    #[test]
    fn identical_inputs_score_28() {
        // Same rashi and nakshatra: 1+2+3+4+5+6+7+0 (Nadi collides) = 28.
        let total: f64 = all_kootas(4, 4, 15, 15).iter().map(|k| k.obtained).sum();
        assert_eq!(total, 28.0);
    }
}
