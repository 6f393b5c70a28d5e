//! Render configuration supplied by the host.
//!
//! Every field has a default, so `{}` (or no options at all) renders the
//! standard widget: a 760-unit-wide page with a C4–B5 keyboard.

use serde::{Deserialize, Serialize};

use crate::error::ChordError;

/// Inclusive range of MIDI notes drawn on the piano keyboard.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct NoteRange {
    pub first: u8,
    pub last: u8,
}

impl Default for NoteRange {
    /// C4 to B5.
    fn default() -> Self {
        Self { first: 60, last: 83 }
    }
}

impl NoteRange {
    pub fn contains(&self, midi: u8) -> bool {
        (self.first..=self.last).contains(&midi)
    }

    pub fn iter(&self) -> impl Iterator<Item = u8> {
        self.first..=self.last
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RenderOptions {
    /// SVG width in user units. On phones, pass the screen width in points.
    /// 0 selects the default; negative widths are rejected by
    /// [`RenderOptions::validate`].
    pub width: f64,
    pub note_range: NoteRange,
    pub title: String,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            width: 0.0,
            note_range: NoteRange::default(),
            title: "Interactive Chord Display".to_string(),
        }
    }
}

impl RenderOptions {
    /// Options with only the page width overridden.
    pub fn with_width(width: f64) -> Self {
        Self {
            width,
            ..Self::default()
        }
    }

    /// Parse options from JSON and validate them.
    pub fn from_json(json: &str) -> Result<Self, ChordError> {
        let options: RenderOptions = serde_json::from_str(json)?;
        options.validate()?;
        Ok(options)
    }

    pub fn validate(&self) -> Result<(), ChordError> {
        if !self.width.is_finite() || self.width < 0.0 {
            return Err(ChordError::InvalidOptions(format!(
                "width must be 0 (default) or a positive number, got {}",
                self.width
            )));
        }
        let range = self.note_range;
        if range.first > range.last {
            return Err(ChordError::InvalidOptions(format!(
                "note range {}..={} is inverted",
                range.first, range.last
            )));
        }
        if range.last > 127 {
            return Err(ChordError::InvalidOptions(format!(
                "note range ends at {}, beyond MIDI 127",
                range.last
            )));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_json_uses_defaults() {
        let options = RenderOptions::from_json("{}").unwrap();
        assert_eq!(options, RenderOptions::default());
        assert_eq!(options.note_range, NoteRange { first: 60, last: 83 });
    }

    #[test]
    fn partial_json_overrides() {
        let options = RenderOptions::from_json(r#"{"width": 390, "title": "Chords"}"#).unwrap();
        assert_eq!(options.width, 390.0);
        assert_eq!(options.title, "Chords");
        assert_eq!(options.note_range, NoteRange::default());
    }

    #[test]
    fn negative_width_rejected() {
        assert!(RenderOptions::with_width(0.0).validate().is_ok());
        let err = RenderOptions::from_json(r#"{"width": -390}"#);
        assert!(matches!(err, Err(ChordError::InvalidOptions(_))));
        assert!(RenderOptions::with_width(f64::NAN).validate().is_err());
    }

    #[test]
    fn inverted_range_rejected() {
        let err = RenderOptions::from_json(r#"{"note_range": {"first": 80, "last": 60}}"#);
        assert!(matches!(err, Err(ChordError::InvalidOptions(_))));
    }

    #[test]
    fn out_of_midi_range_rejected() {
        let err = RenderOptions::from_json(r#"{"note_range": {"first": 60, "last": 200}}"#);
        assert!(matches!(err, Err(ChordError::InvalidOptions(_))));
    }
}
