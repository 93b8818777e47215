//! Impact zones.
//!
//! The zone set is closed. Its declaration order is a display order; the
//! scoring weights below are a priority order, not a numeric magnitude.

use std::fmt;

use serde::{Deserialize, Serialize};

/// One of the seven impact zones an oil can be assigned to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Zone {
    /// `+++`: strongest attraction; carries the optional rank.
    #[serde(rename = "+++")]
    TriplePlus,
    /// `+`: mild attraction.
    #[serde(rename = "+")]
    Plus,
    /// `N`: neutral.
    #[serde(rename = "N")]
    Neutral,
    /// `-`: mild aversion.
    #[serde(rename = "-")]
    Minus,
    /// `---`: strongest aversion.
    #[serde(rename = "---")]
    TripleMinus,
    /// `0`: blocked, no perception.
    #[serde(rename = "0")]
    Zero,
    /// `R`: reversed perception.
    #[serde(rename = "R")]
    Reverse,
}

impl Zone {
    /// All zones in declaration order.
    pub const ALL: [Zone; 7] = [
        Zone::TriplePlus,
        Zone::Plus,
        Zone::Neutral,
        Zone::Minus,
        Zone::TripleMinus,
        Zone::Zero,
        Zone::Reverse,
    ];

    /// Number of zones.
    pub const COUNT: usize = Zone::ALL.len();

    /// Parse a zone token. Returns `None` for anything outside the closed set.
    pub fn parse_str(token: &str) -> Option<Zone> {
        match token {
            "+++" => Some(Zone::TriplePlus),
            "+" => Some(Zone::Plus),
            "N" => Some(Zone::Neutral),
            "-" => Some(Zone::Minus),
            "---" => Some(Zone::TripleMinus),
            "0" => Some(Zone::Zero),
            "R" => Some(Zone::Reverse),
            _ => None,
        }
    }

    /// The zone token as it appears in the tabular source.
    pub fn token(&self) -> &'static str {
        match self {
            Zone::TriplePlus => "+++",
            Zone::Plus => "+",
            Zone::Neutral => "N",
            Zone::Minus => "-",
            Zone::TripleMinus => "---",
            Zone::Zero => "0",
            Zone::Reverse => "R",
        }
    }

    /// Position in [`Zone::ALL`], usable as a counter index.
    pub fn index(&self) -> usize {
        match self {
            Zone::TriplePlus => 0,
            Zone::Plus => 1,
            Zone::Neutral => 2,
            Zone::Minus => 3,
            Zone::TripleMinus => 4,
            Zone::Zero => 5,
            Zone::Reverse => 6,
        }
    }

    /// Scoring weight of a matched fact in this zone.
    pub fn score(&self) -> u32 {
        match self {
            Zone::TriplePlus => 100,
            Zone::TripleMinus => 80,
            Zone::Plus => 60,
            Zone::Minus => 40,
            Zone::Neutral | Zone::Zero | Zone::Reverse => 0,
        }
    }
}

impl fmt::Display for Zone {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.token())
    }
}
