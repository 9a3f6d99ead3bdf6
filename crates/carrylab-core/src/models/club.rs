// ABOUTME: Tagged club taxonomy replacing ad hoc substring matching on club labels
// ABOUTME: Parses launch-monitor club names once into category, number, and loft variants
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Carrylab Contributors

use serde::{Deserialize, Serialize};

use crate::constants::smash_targets;

/// Lowest bare number treated as a wedge loft rather than an iron number
const MIN_WEDGE_LOFT: u8 = 40;

/// Wedge designation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case", tag = "kind", content = "loft")]
pub enum WedgeKind {
    /// Pitching wedge
    Pitching,
    /// Gap / approach wedge
    Gap,
    /// Sand wedge
    Sand,
    /// Lob wedge
    Lob,
    /// Wedge identified by loft in degrees
    Loft(u8),
}

impl WedgeKind {
    /// Nominal loft used for ordering wedges within the bag
    #[must_use]
    pub const fn nominal_loft(self) -> u8 {
        match self {
            Self::Pitching => 46,
            Self::Gap => 50,
            Self::Sand => 56,
            Self::Lob => 60,
            Self::Loft(loft) => loft,
        }
    }
}

/// Club category with its number or loft
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case", tag = "category", content = "detail")]
pub enum ClubKind {
    /// Driver
    Driver,
    /// Fairway wood (3 wood, 5 wood, ...)
    Wood(u8),
    /// Hybrid / rescue
    Hybrid(u8),
    /// Iron by number
    Iron(u8),
    /// Wedge
    Wedge(WedgeKind),
    /// Putter
    Putter,
    /// Label that matches no known club
    Unknown,
}

impl ClubKind {
    /// Classify a launch-monitor club label
    ///
    /// Accepts the spellings launch monitors and spreadsheets commonly use:
    /// `Driver`, `3 Wood`, `3W`, `4 Hybrid`, `4H`, `7 Iron`, `7i`, `PW`,
    /// `Sand Wedge`, `56°`, `56 Wedge`, `Putter`.
    #[must_use]
    pub fn parse(label: &str) -> Self {
        let normalized = label.trim().to_lowercase();
        if normalized.is_empty() {
            return Self::Unknown;
        }

        match normalized.as_str() {
            "driver" | "dr" | "1w" | "1 wood" => return Self::Driver,
            "putter" | "pt" => return Self::Putter,
            "pw" | "pitching wedge" | "pitching" => return Self::Wedge(WedgeKind::Pitching),
            "gw" | "aw" | "gap wedge" | "approach wedge" | "gap" => {
                return Self::Wedge(WedgeKind::Gap)
            }
            "sw" | "sand wedge" | "sand" => return Self::Wedge(WedgeKind::Sand),
            "lw" | "lob wedge" | "lob" => return Self::Wedge(WedgeKind::Lob),
            _ => {}
        }

        let digits: String = normalized
            .chars()
            .take_while(char::is_ascii_digit)
            .collect();
        let Ok(number) = digits.parse::<u8>() else {
            return Self::Unknown;
        };
        let suffix = normalized[digits.len()..]
            .trim()
            .trim_start_matches('-')
            .trim_end_matches('°')
            .trim();

        match suffix {
            "wood" | "w" | "wd" => Self::Wood(number),
            "hybrid" | "h" | "hy" | "hyb" | "rescue" => Self::Hybrid(number),
            "iron" | "i" | "ir" => Self::Iron(number),
            "wedge" | "deg" | "" if number >= MIN_WEDGE_LOFT => {
                Self::Wedge(WedgeKind::Loft(number))
            }
            "" if (2..=9).contains(&number) => Self::Iron(number),
            _ => Self::Unknown,
        }
    }

    /// Whether the label names a putter under any spelling
    #[must_use]
    pub const fn is_putter(self) -> bool {
        matches!(self, Self::Putter)
    }

    /// Category smash-factor target used when no value is configured
    #[must_use]
    pub const fn default_smash_target(self) -> f64 {
        match self {
            Self::Driver => smash_targets::DRIVER,
            Self::Wood(_) => smash_targets::WOOD,
            Self::Hybrid(_) => smash_targets::HYBRID,
            Self::Iron(number) if number <= 4 => smash_targets::LONG_IRON,
            Self::Iron(number) if number <= 7 => smash_targets::MID_IRON,
            Self::Iron(_) => smash_targets::SHORT_IRON,
            Self::Wedge(_) => smash_targets::WEDGE,
            Self::Putter | Self::Unknown => smash_targets::DEFAULT,
        }
    }

    /// Position in a conventional bag, longest club first
    #[must_use]
    pub fn bag_rank(self) -> u16 {
        match self {
            Self::Driver => 0,
            Self::Wood(number) => 100 + u16::from(number),
            Self::Hybrid(number) => 200 + u16::from(number),
            Self::Iron(number) => 300 + u16::from(number),
            Self::Wedge(kind) => 400 + u16::from(kind.nominal_loft()),
            Self::Putter => 900,
            Self::Unknown => 1000,
        }
    }
}
