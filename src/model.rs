//! Data model for the chord display widget.
//!
//! These structures capture the musical information (root, quality, fret
//! shapes) and the transient UI state that drives every rendered view.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::ChordError;

// ═══════════════════════════════════════════════════════════════════════
// Notes
// ═══════════════════════════════════════════════════════════════════════

/// One of the twelve pitch classes, spelled with sharps.
///
/// The discriminant is the semitone offset from C.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum NoteName {
    #[serde(rename = "C")]
    C = 0,
    #[serde(rename = "C#")]
    CSharp = 1,
    #[serde(rename = "D")]
    D = 2,
    #[serde(rename = "D#")]
    DSharp = 3,
    #[serde(rename = "E")]
    E = 4,
    #[serde(rename = "F")]
    F = 5,
    #[serde(rename = "F#")]
    FSharp = 6,
    #[serde(rename = "G")]
    G = 7,
    #[serde(rename = "G#")]
    GSharp = 8,
    #[serde(rename = "A")]
    A = 9,
    #[serde(rename = "A#")]
    ASharp = 10,
    #[serde(rename = "B")]
    B = 11,
}

impl NoteName {
    /// All pitch classes in ascending order starting from C.
    pub const ALL: [NoteName; 12] = [
        NoteName::C,
        NoteName::CSharp,
        NoteName::D,
        NoteName::DSharp,
        NoteName::E,
        NoteName::F,
        NoteName::FSharp,
        NoteName::G,
        NoteName::GSharp,
        NoteName::A,
        NoteName::ASharp,
        NoteName::B,
    ];

    /// Semitone offset from C (0..=11).
    pub fn index(self) -> u8 {
        self as u8
    }

    /// Pitch class for any semitone count, wrapping cyclically.
    pub fn from_semitone(semitone: u32) -> NoteName {
        Self::ALL[(semitone % 12) as usize]
    }

    /// Pitch class of a MIDI note number.
    pub fn from_midi(midi: u8) -> NoteName {
        Self::from_semitone(midi as u32)
    }

    pub fn as_str(self) -> &'static str {
        match self {
            NoteName::C => "C",
            NoteName::CSharp => "C#",
            NoteName::D => "D",
            NoteName::DSharp => "D#",
            NoteName::E => "E",
            NoteName::F => "F",
            NoteName::FSharp => "F#",
            NoteName::G => "G",
            NoteName::GSharp => "G#",
            NoteName::A => "A",
            NoteName::ASharp => "A#",
            NoteName::B => "B",
        }
    }

    /// Whether this pitch class sits on a black piano key.
    pub fn is_accidental(self) -> bool {
        self.as_str().ends_with('#')
    }
}

impl fmt::Display for NoteName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for NoteName {
    type Err = ChordError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .iter()
            .copied()
            .find(|n| n.as_str() == s.trim())
            .ok_or_else(|| ChordError::InvalidNoteName(s.to_string()))
    }
}

// ═══════════════════════════════════════════════════════════════════════
// Chord quality & selection
// ═══════════════════════════════════════════════════════════════════════

/// Triad quality. Only major and minor are supported.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ChordQuality {
    #[default]
    Major,
    Minor,
}

impl ChordQuality {
    pub const ALL: [ChordQuality; 2] = [ChordQuality::Major, ChordQuality::Minor];

    /// Semitone intervals above the root, in ascending order.
    pub fn intervals(self) -> [u8; 3] {
        match self {
            ChordQuality::Major => [0, 4, 7],
            ChordQuality::Minor => [0, 3, 7],
        }
    }

    pub fn toggled(self) -> ChordQuality {
        match self {
            ChordQuality::Major => ChordQuality::Minor,
            ChordQuality::Minor => ChordQuality::Major,
        }
    }

    /// Chord-symbol suffix ("" for major, "m" for minor).
    pub fn suffix(self) -> &'static str {
        match self {
            ChordQuality::Major => "",
            ChordQuality::Minor => "m",
        }
    }
}

impl fmt::Display for ChordQuality {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ChordQuality::Major => f.write_str("major"),
            ChordQuality::Minor => f.write_str("minor"),
        }
    }
}

/// The chord currently on display.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ChordSelection {
    pub root: NoteName,
    pub quality: ChordQuality,
}

impl Default for ChordSelection {
    fn default() -> Self {
        Self {
            root: NoteName::C,
            quality: ChordQuality::Major,
        }
    }
}

impl ChordSelection {
    pub fn new(root: NoteName, quality: ChordQuality) -> Self {
        Self { root, quality }
    }

    /// Chord symbol shown in headings, e.g. "A" or "Cm".
    pub fn label(&self) -> String {
        format!("{}{}", self.root, self.quality.suffix())
    }
}

// ═══════════════════════════════════════════════════════════════════════
// Fretboard
// ═══════════════════════════════════════════════════════════════════════

/// Number of strings on a standard guitar.
pub const STRING_COUNT: usize = 6;

/// What one string does in a chord shape.
///
/// Serialized in tablature form: `"x"`, `"0"`, or the fret number.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(into = "String", try_from = "String")]
pub enum FretPosition {
    /// String is not played.
    Muted,
    /// String rings open.
    Open,
    /// String is pressed at the given fret (>= 1).
    Fretted(u8),
}

impl FretPosition {
    /// Fret number for played strings (0 for open), `None` when muted.
    pub fn fret(self) -> Option<u8> {
        match self {
            FretPosition::Muted => None,
            FretPosition::Open => Some(0),
            FretPosition::Fretted(n) => Some(n),
        }
    }

    pub fn is_played(self) -> bool {
        !matches!(self, FretPosition::Muted)
    }
}

impl fmt::Display for FretPosition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FretPosition::Muted => f.write_str("x"),
            FretPosition::Open => f.write_str("0"),
            FretPosition::Fretted(n) => write!(f, "{n}"),
        }
    }
}

impl FromStr for FretPosition {
    type Err = ChordError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "x" | "X" => Ok(FretPosition::Muted),
            "0" => Ok(FretPosition::Open),
            other => match other.parse::<u8>() {
                Ok(n) if n > 0 => Ok(FretPosition::Fretted(n)),
                _ => Err(ChordError::InvalidFretPosition(s.to_string())),
            },
        }
    }
}

impl From<FretPosition> for String {
    fn from(pos: FretPosition) -> Self {
        pos.to_string()
    }
}

impl TryFrom<String> for FretPosition {
    type Error = ChordError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

// ═══════════════════════════════════════════════════════════════════════
// Widget state
// ═══════════════════════════════════════════════════════════════════════

/// Everything the widget remembers between interactions.
///
/// Lives only for the lifetime of the host view; nothing is persisted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct WidgetState {
    pub selection: ChordSelection,
    /// Dark theme active (the default).
    #[serde(default = "default_dark_mode")]
    pub dark_mode: bool,
}

fn default_dark_mode() -> bool {
    true
}

impl Default for WidgetState {
    fn default() -> Self {
        Self {
            selection: ChordSelection::default(),
            dark_mode: default_dark_mode(),
        }
    }
}

/// A user interaction, as delivered by the host.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Action {
    /// A root-note button was pressed.
    SelectRoot { root: NoteName },
    /// The major/minor button was pressed.
    ToggleQuality,
    /// The sun/moon icon was pressed.
    ToggleTheme,
}

impl Action {
    /// Compact identifier used for `data-action` attributes in the SVG.
    pub fn id(&self) -> String {
        match self {
            Action::SelectRoot { root } => format!("select-root:{root}"),
            Action::ToggleQuality => "toggle-quality".to_string(),
            Action::ToggleTheme => "toggle-theme".to_string(),
        }
    }
}
