//! Error type shared by table validation, option parsing and the FFI layer.

use thiserror::Error;

use crate::model::{ChordQuality, NoteName};

#[derive(Error, Debug)]
pub enum ChordError {
    #[error("invalid note name '{0}'")]
    InvalidNoteName(String),

    #[error("invalid fret position '{0}' (expected \"x\", \"0\" or a fret number)")]
    InvalidFretPosition(String),

    #[error("no chord shape for {root} {quality}")]
    MissingShape { root: NoteName, quality: ChordQuality },

    #[error("chord shape for {root} {quality} has {found} strings, expected 6")]
    WrongStringCount {
        root: NoteName,
        quality: ChordQuality,
        found: usize,
    },

    #[error("chord shape for {root} {quality} spans frets {low}..={high}, more than the diagram shows")]
    ShapeTooWide {
        root: NoteName,
        quality: ChordQuality,
        low: u8,
        high: u8,
    },

    #[error("shape spans frets {low}..={high}, more than the diagram shows")]
    DiagramOverflow { low: u8, high: u8 },

    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    #[error("invalid render options: {0}")]
    InvalidOptions(String),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}
