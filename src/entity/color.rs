// src/entity/color.rs
use rand::Rng;
use serde::{Deserialize, Serialize};

/// Background colors a note can be painted with.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum BackgroundColor {
    #[serde(rename = "#FFB6C1")]
    LightPink,
    #[serde(rename = "#B0E0E6")]
    PowderBlue,
    #[serde(rename = "#FFFACD")]
    LemonChiffon,
    #[serde(rename = "#E6E6FA")]
    Lavender,
    #[serde(rename = "#F0FFF0")]
    Honeydew,
}

/// The fixed palette, in the order colors are indexed by the random pick.
pub const PALETTE: [BackgroundColor; 5] = [
    BackgroundColor::LightPink,
    BackgroundColor::PowderBlue,
    BackgroundColor::LemonChiffon,
    BackgroundColor::Lavender,
    BackgroundColor::Honeydew,
];

impl BackgroundColor {
    /// Pick a palette color uniformly at random.
    pub fn random<R: Rng + ?Sized>(rng: &mut R) -> Self {
        PALETTE[rng.gen_range(0..PALETTE.len())]
    }

    pub fn hex(&self) -> &'static str {
        match self {
            BackgroundColor::LightPink => "#FFB6C1",
            BackgroundColor::PowderBlue => "#B0E0E6",
            BackgroundColor::LemonChiffon => "#FFFACD",
            BackgroundColor::Lavender => "#E6E6FA",
            BackgroundColor::Honeydew => "#F0FFF0",
        }
    }
}

impl std::fmt::Display for BackgroundColor {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.hex())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;
    use std::collections::HashSet;

    #[test]
    fn test_palette_has_five_distinct_colors() {
        let hexes: HashSet<&str> = PALETTE.iter().map(|c| c.hex()).collect();
        assert_eq!(hexes.len(), 5);
        assert!(hexes.contains("#FFB6C1"));
        assert!(hexes.contains("#F0FFF0"));
    }

    #[test]
    fn test_random_is_deterministic_for_a_seed() {
        let mut a = StdRng::seed_from_u64(42);
        let mut b = StdRng::seed_from_u64(42);
        let first: Vec<_> = (0..20).map(|_| BackgroundColor::random(&mut a)).collect();
        let second: Vec<_> = (0..20).map(|_| BackgroundColor::random(&mut b)).collect();
        assert_eq!(first, second);
    }

    #[test]
    fn test_random_eventually_covers_palette() {
        let mut rng = StdRng::seed_from_u64(7);
        let seen: HashSet<_> = (0..500).map(|_| BackgroundColor::random(&mut rng)).collect();
        assert_eq!(seen.len(), PALETTE.len());
    }

    #[test]
    fn test_serializes_as_hex() {
        let json = serde_json::to_string(&BackgroundColor::PowderBlue).unwrap();
        assert_eq!(json, "\"#B0E0E6\"");
    }
}
