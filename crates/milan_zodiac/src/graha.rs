//! The seven classical grahas (rashi lords) and their natural friendships.
//!
//! Rahu and Ketu are excluded: they rule no rashi, so the matching rules
//! never look them up.

/// The 7 classical grahas in traditional order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Graha {
    Surya,
    Chandra,
    Mangal,
    Buddh,
    Guru,
    Shukra,
    Shani,
}

/// All 7 grahas in order (Surya=0 .. Shani=6).
pub const ALL_GRAHAS: [Graha; 7] = [
    Graha::Surya,
    Graha::Chandra,
    Graha::Mangal,
    Graha::Buddh,
    Graha::Guru,
    Graha::Shukra,
    Graha::Shani,
];

impl Graha {
    /// Sanskrit name of the graha.
    pub const fn name(self) -> &'static str {
        match self {
            Self::Surya => "Surya",
            Self::Chandra => "Chandra",
            Self::Mangal => "Mangal",
            Self::Buddh => "Buddh",
            Self::Guru => "Guru",
            Self::Shukra => "Shukra",
            Self::Shani => "Shani",
        }
    }

    /// English name of the graha.
    pub const fn english_name(self) -> &'static str {
        match self {
            Self::Surya => "Sun",
            Self::Chandra => "Moon",
            Self::Mangal => "Mars",
            Self::Buddh => "Mercury",
            Self::Guru => "Jupiter",
            Self::Shukra => "Venus",
            Self::Shani => "Saturn",
        }
    }

    /// 0-based index into ALL_GRAHAS.
    pub const fn index(self) -> u8 {
        self as u8
    }

    /// All 7 grahas in order.
    pub const fn all() -> &'static [Graha; 7] {
        &ALL_GRAHAS
    }
}

/// Natural relationship between two grahas.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Maitri {
    Friend,
    Neutral,
    Enemy,
}

/// Natural (naisargika) friendship between two grahas, per the classical
/// BPHS table. Directional: `naisargika_maitri(a, b)` is a's disposition
/// toward b, which need not equal b's toward a.
pub const fn naisargika_maitri(graha: Graha, other: Graha) -> Maitri {
    use Graha::*;
    use Maitri::*;

    match (graha, other) {
        // Sun: friends Moon, Mars, Jupiter; enemies Venus, Saturn.
        (Surya, Chandra | Mangal | Guru) => Friend,
        (Surya, Shukra | Shani) => Enemy,
        (Surya, Surya | Buddh) => Neutral,

        // Moon: friends Sun, Mercury; no enemies.
        (Chandra, Surya | Buddh) => Friend,
        (Chandra, _) => Neutral,

        // Mars: friends Sun, Moon, Jupiter; enemy Mercury.
        (Mangal, Surya | Chandra | Guru) => Friend,
        (Mangal, Buddh) => Enemy,
        (Mangal, _) => Neutral,

        // Mercury: friends Sun, Venus; enemy Moon.
        (Buddh, Surya | Shukra) => Friend,
        (Buddh, Chandra) => Enemy,
        (Buddh, _) => Neutral,

        // Jupiter: friends Sun, Moon, Mars; enemies Mercury, Venus.
        (Guru, Surya | Chandra | Mangal) => Friend,
        (Guru, Buddh | Shukra) => Enemy,
        (Guru, _) => Neutral,

        // Venus: friends Mercury, Saturn; enemies Sun, Moon.
        (Shukra, Buddh | Shani) => Friend,
        (Shukra, Surya | Chandra) => Enemy,
        (Shukra, _) => Neutral,

        // Saturn: friend Venus; enemies Sun, Moon, Mars.
        (Shani, Shukra) => Friend,
        (Shani, Surya | Chandra | Mangal) => Enemy,
        (Shani, _) => Neutral,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn all_grahas_count() {
        assert_eq!(ALL_GRAHAS.len(), 7);
    }

    #[test]
    fn indices_sequential() {
        for (i, g) in ALL_GRAHAS.iter().enumerate() {
            assert_eq!(g.index() as usize, i);
        }
    }

    #[test]
    fn names_nonempty() {
        for g in ALL_GRAHAS {
            assert!(!g.name().is_empty());
            assert!(!g.english_name().is_empty());
        }
    }

    #[test]
    fn self_relation_is_neutral() {
        for g in ALL_GRAHAS {
            assert_eq!(naisargika_maitri(g, g), Maitri::Neutral, "{} vs self", g.name());
        }
    }

    #[test]
    fn sun_row() {
        assert_eq!(naisargika_maitri(Graha::Surya, Graha::Chandra), Maitri::Friend);
        assert_eq!(naisargika_maitri(Graha::Surya, Graha::Buddh), Maitri::Neutral);
        assert_eq!(naisargika_maitri(Graha::Surya, Graha::Shukra), Maitri::Enemy);
    }

    #[test]
    fn friendship_is_directional() {
        // Moon considers Saturn neutral, Saturn considers Moon an enemy.
        assert_eq!(naisargika_maitri(Graha::Chandra, Graha::Shani), Maitri::Neutral);
        assert_eq!(naisargika_maitri(Graha::Shani, Graha::Chandra), Maitri::Enemy);
        // Jupiter dislikes Venus, Venus is indifferent back.
        assert_eq!(naisargika_maitri(Graha::Guru, Graha::Shukra), Maitri::Enemy);
        assert_eq!(naisargika_maitri(Graha::Shukra, Graha::Guru), Maitri::Neutral);
    }

    #[test]
    fn moon_has_no_enemies() {
        for g in ALL_GRAHAS {
            assert_ne!(naisargika_maitri(Graha::Chandra, g), Maitri::Enemy);
        }
    }

    #[test]
    fn matrix_matches_classical_table() {
        // Row-by-row check against the BPHS 7x7 matrix
        // (1 = friend, 0 = neutral, -1 = enemy).
        let expected: [[i8; 7]; 7] = [
            [0, 1, 1, 0, 1, -1, -1],
            [1, 0, 0, 1, 0, 0, 0],
            [1, 1, 0, -1, 1, 0, 0],
            [1, -1, 0, 0, 0, 1, 0],
            [1, 1, 1, -1, 0, -1, 0],
            [-1, -1, 0, 1, 0, 0, 1],
            [-1, -1, -1, 0, 0, 1, 0],
        ];
        for (i, a) in ALL_GRAHAS.iter().enumerate() {
            for (j, b) in ALL_GRAHAS.iter().enumerate() {
                let want = match expected[i][j] {
                    1 => Maitri::Friend,
                    -1 => Maitri::Enemy,
                    _ => Maitri::Neutral,
                };
                assert_eq!(
                    naisargika_maitri(*a, *b),
                    want,
                    "{} -> {}",
                    a.name(),
                    b.name()
                );
            }
        }
    }
}
