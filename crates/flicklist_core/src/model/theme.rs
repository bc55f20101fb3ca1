//! Time-of-day theme model.
//!
//! # Responsibility
//! - Define the color/theme value types rendered by the list screen.
//! - Map an hour of day onto one of four fixed palettes.
//!
//! # Invariants
//! - Exactly one current theme exists at a time; themes are recomputed
//!   wholesale, never mutated field-by-field.
//! - The four hour buckets are non-overlapping and cover all 24 hours.

use serde::{Deserialize, Serialize};

/// Opaque RGB color value carried to the presentation layer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Color {
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Stable `#RRGGBB` rendering used on the FFI wire.
    pub fn hex(self) -> String {
        format!("#{:02X}{:02X}{:02X}", self.r, self.g, self.b)
    }
}

/// One named visual palette applied to the whole screen.
///
/// Values are borrowed from the four fixed palettes, so themes are
/// cheap to copy around and impossible to edit in place.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Theme {
    /// Human-readable label of the time bucket.
    pub name: &'static str,
    /// Background gradient stops, ordered top to bottom (at least two).
    pub colors: &'static [Color],
    /// Accent color for interactive elements.
    pub accent: Color,
    /// Primary text color readable against the gradient.
    pub text: Color,
}

/// Time-of-day bucket selecting the active palette.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ThemeKind {
    Morning,
    Afternoon,
    Evening,
    Night,
}

impl ThemeKind {
    /// Maps an hour of day onto its bucket.
    ///
    /// # Contract
    /// - `[6,12)` morning, `[12,18)` afternoon, `[18,22)` evening,
    ///   everything else night.
    /// - Hours >= 24 wrap around the day.
    pub fn for_hour(hour: u32) -> Self {
        match hour % 24 {
            6..=11 => Self::Morning,
            12..=17 => Self::Afternoon,
            18..=21 => Self::Evening,
            _ => Self::Night,
        }
    }

    /// Returns the fixed palette for this bucket.
    ///
    /// Recomputing for the same bucket yields an identical theme value.
    pub fn theme(self) -> Theme {
        match self {
            Self::Morning => Theme {
                name: "Morning",
                colors: MORNING_GRADIENT,
                accent: Color::new(0xF5, 0x9E, 0x0B),
                text: Color::new(0x3A, 0x2E, 0x1F),
            },
            Self::Afternoon => Theme {
                name: "Afternoon",
                colors: AFTERNOON_GRADIENT,
                accent: Color::new(0x0E, 0xA5, 0xE9),
                text: Color::new(0x1E, 0x29, 0x3B),
            },
            Self::Evening => Theme {
                name: "Evening",
                colors: EVENING_GRADIENT,
                accent: Color::new(0xF9, 0x73, 0x16),
                text: Color::new(0xFD, 0xF2, 0xE4),
            },
            Self::Night => Theme {
                name: "Night",
                colors: NIGHT_GRADIENT,
                accent: Color::new(0x81, 0x8C, 0xF8),
                text: Color::new(0xE2, 0xE8, 0xF0),
            },
        }
    }
}

const MORNING_GRADIENT: &[Color] = &[
    Color::new(0xFF, 0xF7, 0xD6),
    Color::new(0xFF, 0xE0, 0xB5),
    Color::new(0xFF, 0xC9, 0x9E),
];

const AFTERNOON_GRADIENT: &[Color] = &[
    Color::new(0xCD, 0xE9, 0xFF),
    Color::new(0x9E, 0xD0, 0xF5),
    Color::new(0x7A, 0xB8, 0xE8),
];

const EVENING_GRADIENT: &[Color] = &[
    Color::new(0x4C, 0x2A, 0x5E),
    Color::new(0x8A, 0x3D, 0x62),
    Color::new(0xD9, 0x6C, 0x4A),
];

const NIGHT_GRADIENT: &[Color] = &[
    Color::new(0x0B, 0x10, 0x26),
    Color::new(0x1B, 0x24, 0x44),
    Color::new(0x2C, 0x38, 0x60),
];
