use serde::{Serialize, Serializer};
use std::fmt;
use std::str::FromStr;

const WHITE: u32 = 0xFFFFFF;
const BLACK: u32 = 0x000000;

/// Valid badge colors along with a few named aliases for quick access.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Color {
    Red,
    Pink,
    Purple,
    DeepPurple,
    Indigo,
    Blue,
    LightBlue,
    Cyan,
    Teal,
    Green,
    LightGreen,
    Lime,
    Yellow,
    Amber,
    Orange,
    DeepOrange,
    Brown,
    Grey,
    BlueGrey,

    // Named values
    Default,
    Fallback,
    Pending,
    Success,
    Warning,
    Failure,
}

impl Color {
    pub const ALL: [Color; 25] = [
        Color::Red,
        Color::Pink,
        Color::Purple,
        Color::DeepPurple,
        Color::Indigo,
        Color::Blue,
        Color::LightBlue,
        Color::Cyan,
        Color::Teal,
        Color::Green,
        Color::LightGreen,
        Color::Lime,
        Color::Yellow,
        Color::Amber,
        Color::Orange,
        Color::DeepOrange,
        Color::Brown,
        Color::Grey,
        Color::BlueGrey,
        Color::Default,
        Color::Fallback,
        Color::Pending,
        Color::Success,
        Color::Warning,
        Color::Failure,
    ];

    /// Concrete hues, without the named aliases.
    pub const HUES: [Color; 19] = [
        Color::Red,
        Color::Pink,
        Color::Purple,
        Color::DeepPurple,
        Color::Indigo,
        Color::Blue,
        Color::LightBlue,
        Color::Cyan,
        Color::Teal,
        Color::Green,
        Color::LightGreen,
        Color::Lime,
        Color::Yellow,
        Color::Amber,
        Color::Orange,
        Color::DeepOrange,
        Color::Brown,
        Color::Grey,
        Color::BlueGrey,
    ];

    /// Picks a hue for `value` that stays the same across requests and
    /// restarts. Case-insensitive, so `Rust` and `rust` share a color.
    pub fn by_hash(value: &str) -> Color {
        let hash = value
            .chars()
            .flat_map(char::to_lowercase)
            .fold(0u32, |hash, c| hash.wrapping_mul(31).wrapping_add(c as u32));
        Color::HUES[hash as usize % Color::HUES.len()]
    }

    /// Background color as a 24-bit RGB value.
    pub const fn background(self) -> u32 {
        match self {
            Color::Red => 0xF44336,
            Color::Pink => 0xE91E63,
            Color::Purple => 0x9C27B0,
            Color::DeepPurple => 0x673AB7,
            Color::Indigo => 0x3F51B5,
            Color::Blue => 0x2196F3,
            Color::LightBlue => 0x03A9F4,
            Color::Cyan => 0x00BCD4,
            Color::Teal => 0x009688,
            Color::Green => 0x4CAF50,
            Color::LightGreen => 0x8BC34A,
            Color::Lime => 0xCDDC39,
            Color::Yellow => 0xFFEB3B,
            Color::Amber => 0xFFC107,
            Color::Orange => 0xFF9800,
            Color::DeepOrange => 0xFF5722,
            Color::Brown => 0x795548,
            Color::Grey => 0x9E9E9E,
            Color::BlueGrey => 0x607D8B,
            alias => alias.target().background(),
        }
    }

    /// Text color as a 24-bit RGB value. White unless the background is too
    /// light to read it.
    pub const fn text(self) -> u32 {
        match self {
            Color::LightBlue
            | Color::Cyan
            | Color::LightGreen
            | Color::Lime
            | Color::Yellow
            | Color::Amber => BLACK,
            Color::Default
            | Color::Fallback
            | Color::Pending
            | Color::Success
            | Color::Warning
            | Color::Failure => self.target().text(),
            _ => WHITE,
        }
    }

    /// Hue a named alias stands for. Hues map onto themselves.
    pub const fn target(self) -> Color {
        match self {
            Color::Default => Color::Blue,
            Color::Fallback => Color::Grey,
            Color::Pending => Color::Teal,
            Color::Success => Color::Green,
            Color::Warning => Color::Orange,
            Color::Failure => Color::Red,
            hue => hue,
        }
    }

    pub fn background_code(self) -> String {
        format!("#{:06X}", self.background())
    }

    pub fn text_code(self) -> String {
        format!("#{:06X}", self.text())
    }

    /// Canonical upper snake case name, e.g. `LIGHT_BLUE`.
    pub const fn name(self) -> &'static str {
        match self {
            Color::Red => "RED",
            Color::Pink => "PINK",
            Color::Purple => "PURPLE",
            Color::DeepPurple => "DEEP_PURPLE",
            Color::Indigo => "INDIGO",
            Color::Blue => "BLUE",
            Color::LightBlue => "LIGHT_BLUE",
            Color::Cyan => "CYAN",
            Color::Teal => "TEAL",
            Color::Green => "GREEN",
            Color::LightGreen => "LIGHT_GREEN",
            Color::Lime => "LIME",
            Color::Yellow => "YELLOW",
            Color::Amber => "AMBER",
            Color::Orange => "ORANGE",
            Color::DeepOrange => "DEEP_ORANGE",
            Color::Brown => "BROWN",
            Color::Grey => "GREY",
            Color::BlueGrey => "BLUE_GREY",
            Color::Default => "DEFAULT",
            Color::Fallback => "FALLBACK",
            Color::Pending => "PENDING",
            Color::Success => "SUCCESS",
            Color::Warning => "WARNING",
            Color::Failure => "FAILURE",
        }
    }

    /// Name as used in request paths, e.g. `light-blue`.
    pub fn slug(self) -> String {
        self.name().to_ascii_lowercase().replace('_', "-")
    }
}

#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
#[error("unknown color: {0}")]
pub struct UnknownColor(pub String);

impl FromStr for Color {
    type Err = UnknownColor;

    /// Case-insensitive, hyphens and underscores are interchangeable.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.trim().to_ascii_uppercase().replace('-', "_");

        Color::ALL
            .into_iter()
            .find(|color| color.name() == normalized)
            .ok_or_else(|| UnknownColor(s.to_string()))
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.slug())
    }
}

impl Serialize for Color {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.slug())
    }
}
