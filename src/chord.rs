//! Chord model — pitch computation and the guitar shape table.
//!
//! Everything here is a pure function of `(root, quality)`. The shape table
//! is validated once when first used and shared read-only afterwards.

use std::collections::HashMap;
use std::sync::OnceLock;

use crate::error::ChordError;
use crate::model::*;

/// MIDI number of middle C, the bottom of the chord octave window.
pub const BASE_OCTAVE_MIDI: u8 = 60;

/// Pitch classes of the open strings in standard tuning, low to high (E A D G B E).
pub const OPEN_STRINGS: [NoteName; STRING_COUNT] = [
    NoteName::E,
    NoteName::A,
    NoteName::D,
    NoteName::G,
    NoteName::B,
    NoteName::E,
];

/// Fret rows drawn below the nut in a chord diagram.
pub const DIAGRAM_FRETS: u8 = 4;

// ═══════════════════════════════════════════════════════════════════════
// Pitches
// ═══════════════════════════════════════════════════════════════════════

/// Absolute MIDI pitches of the chord tones, ascending from the root in the
/// octave starting at middle C.
///
/// Tones that pass B carry into the next octave instead of wrapping below
/// the root, so the result is always strictly ascending.
pub fn chord_notes(root: NoteName, quality: ChordQuality) -> [u8; 3] {
    let root_index = root.index();
    quality.intervals().map(|interval| {
        let semis = root_index + interval;
        BASE_OCTAVE_MIDI + semis % 12 + (semis / 12) * 12
    })
}

/// Pitch-class names of the chord tones, root first.
pub fn chord_tone_names(root: NoteName, quality: ChordQuality) -> [NoteName; 3] {
    chord_notes(root, quality).map(NoteName::from_midi)
}

/// Note sounded by a string at the given position, `None` when muted.
pub fn string_note(string_index: usize, position: FretPosition) -> Option<NoteName> {
    let open = OPEN_STRINGS.get(string_index)?;
    let fret = position.fret()?;
    Some(NoteName::from_semitone(open.index() as u32 + fret as u32))
}

// ═══════════════════════════════════════════════════════════════════════
// Shape table
// ═══════════════════════════════════════════════════════════════════════

/// Raw tablature for one (root, quality) entry, strings E A D G B E.
type RawShape = (NoteName, [&'static str; STRING_COUNT]);

const MAJOR_SHAPES: [RawShape; 12] = [
    (NoteName::C, ["x", "3", "2", "0", "1", "0"]),
    (NoteName::CSharp, ["x", "4", "3", "1", "2", "1"]),
    (NoteName::D, ["x", "x", "0", "2", "3", "2"]),
    (NoteName::DSharp, ["x", "6", "5", "3", "4", "3"]),
    (NoteName::E, ["0", "2", "2", "1", "0", "0"]),
    (NoteName::F, ["1", "3", "3", "2", "1", "1"]),
    (NoteName::FSharp, ["2", "4", "4", "3", "2", "2"]),
    (NoteName::G, ["3", "2", "0", "0", "0", "3"]),
    (NoteName::GSharp, ["4", "6", "6", "5", "4", "4"]),
    (NoteName::A, ["x", "0", "2", "2", "2", "0"]),
    (NoteName::ASharp, ["x", "1", "3", "3", "3", "1"]),
    (NoteName::B, ["x", "2", "4", "4", "4", "2"]),
];

const MINOR_SHAPES: [RawShape; 12] = [
    (NoteName::C, ["x", "3", "5", "5", "4", "3"]),
    (NoteName::CSharp, ["x", "4", "6", "6", "5", "4"]),
    (NoteName::D, ["x", "x", "0", "2", "3", "1"]),
    (NoteName::DSharp, ["x", "6", "8", "8", "7", "6"]),
    (NoteName::E, ["0", "2", "2", "0", "0", "0"]),
    (NoteName::F, ["1", "3", "3", "1", "1", "1"]),
    (NoteName::FSharp, ["2", "4", "4", "2", "2", "2"]),
    (NoteName::G, ["3", "5", "5", "3", "3", "3"]),
    (NoteName::GSharp, ["4", "6", "6", "4", "4", "4"]),
    (NoteName::A, ["x", "0", "2", "2", "1", "0"]),
    (NoteName::ASharp, ["x", "1", "3", "3", "2", "1"]),
    (NoteName::B, ["x", "2", "4", "4", "3", "2"]),
];

/// Exhaustive mapping from `(root, quality)` to a six-string fret shape.
#[derive(Debug, Clone)]
pub struct ChordShapes {
    shapes: HashMap<(NoteName, ChordQuality), [FretPosition; STRING_COUNT]>,
}

impl ChordShapes {
    /// Build and validate a shape table from tablature strings.
    ///
    /// Fails unless all 24 `(root, quality)` pairs are present, each with
    /// exactly six well-formed positions whose fretted span fits in the
    /// diagram window. Later duplicates override earlier ones.
    pub fn from_table<S: AsRef<str>>(
        entries: &[(NoteName, ChordQuality, Vec<S>)],
    ) -> Result<Self, ChordError> {
        let mut shapes = HashMap::with_capacity(entries.len());

        for (root, quality, strings) in entries {
            let (root, quality) = (*root, *quality);
            if strings.len() != STRING_COUNT {
                return Err(ChordError::WrongStringCount {
                    root,
                    quality,
                    found: strings.len(),
                });
            }

            let mut shape = [FretPosition::Muted; STRING_COUNT];
            for (slot, raw) in shape.iter_mut().zip(strings) {
                let raw: &str = raw.as_ref();
                *slot = raw.parse()?;
            }

            check_shape(&shape).map_err(|e| match e {
                ChordError::DiagramOverflow { low, high } => {
                    ChordError::ShapeTooWide { root, quality, low, high }
                }
                other => other,
            })?;

            shapes.insert((root, quality), shape);
        }

        for quality in ChordQuality::ALL {
            for root in NoteName::ALL {
                if !shapes.contains_key(&(root, quality)) {
                    return Err(ChordError::MissingShape { root, quality });
                }
            }
        }

        Ok(Self { shapes })
    }

    /// The built-in open/barre chord table.
    ///
    /// # Panics
    /// Panics on first use if the built-in table fails validation; that is a
    /// defect in the table itself, not a runtime condition.
    pub fn standard() -> &'static ChordShapes {
        static STANDARD: OnceLock<ChordShapes> = OnceLock::new();
        STANDARD.get_or_init(|| {
            let entries: Vec<(NoteName, ChordQuality, Vec<&str>)> = MAJOR_SHAPES
                .iter()
                .map(|(root, s)| (*root, ChordQuality::Major, s.to_vec()))
                .chain(
                    MINOR_SHAPES
                        .iter()
                        .map(|(root, s)| (*root, ChordQuality::Minor, s.to_vec())),
                )
                .collect();

            match ChordShapes::from_table(&entries) {
                Ok(table) => {
                    tracing::info!(entries = table.len(), "built-in chord shape table validated");
                    table
                }
                Err(e) => panic!("built-in chord shape table is invalid: {e}"),
            }
        })
    }

    /// Shape for a chord. Total over every valid `(root, quality)`.
    pub fn get(&self, root: NoteName, quality: ChordQuality) -> [FretPosition; STRING_COUNT] {
        // Construction guarantees every key is present.
        self.shapes
            .get(&(root, quality))
            .copied()
            .unwrap_or([FretPosition::Muted; STRING_COUNT])
    }

    pub fn len(&self) -> usize {
        self.shapes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.shapes.is_empty()
    }
}

/// Fret shape for a chord from the built-in table.
pub fn fret_positions(root: NoteName, quality: ChordQuality) -> [FretPosition; STRING_COUNT] {
    ChordShapes::standard().get(root, quality)
}

/// Lowest and highest fretted fret (open and muted strings ignored).
pub fn fretted_span(shape: &[FretPosition]) -> Option<(u8, u8)> {
    let frets = shape.iter().filter_map(|p| match p {
        FretPosition::Fretted(n) => Some(*n),
        _ => None,
    });
    frets.fold(None, |acc, f| match acc {
        None => Some((f, f)),
        Some((lo, hi)) => Some((lo.min(f), hi.max(f))),
    })
}

/// Check that `shape` can be drawn: six strings, no `Fretted(0)`, and a
/// fretted span that fits the diagram window.
pub fn check_shape(shape: &[FretPosition]) -> Result<(), ChordError> {
    if shape.len() != STRING_COUNT {
        return Err(ChordError::InvalidArgument(format!(
            "shape has {} strings, expected {STRING_COUNT}",
            shape.len()
        )));
    }
    if shape.contains(&FretPosition::Fretted(0)) {
        return Err(ChordError::InvalidFretPosition(
            "fretted at 0 (use an open string)".to_string(),
        ));
    }
    if let Some((low, high)) = fretted_span(shape) {
        if high > DIAGRAM_FRETS && high - low >= DIAGRAM_FRETS {
            return Err(ChordError::DiagramOverflow { low, high });
        }
    }
    Ok(())
}

/// First fret shown in the diagram window.
///
/// 1 when the shape fits under the nut; otherwise the lowest fretted fret.
pub fn diagram_base_fret(shape: &[FretPosition]) -> u8 {
    match fretted_span(shape) {
        Some((low, high)) if high > DIAGRAM_FRETS => low,
        _ => 1,
    }
}
