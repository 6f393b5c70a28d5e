//! Piano keyboard rendering.
//!
//! The widget only needs "draw a keyboard for this range, highlight these
//! keys, label keys through this callback". [`KeyboardRenderer`] captures
//! that capability; [`SvgKeyboard`] is the built-in implementation.

use crate::model::NoteName;
use crate::options::NoteRange;

use super::constants::*;
use super::svg_builder::SvgBuilder;

/// Placement and content of a keyboard within the widget.
#[derive(Debug, Clone, Copy)]
pub struct KeyboardRequest<'a> {
    pub range: NoteRange,
    /// MIDI numbers of the highlighted keys.
    pub active: &'a [u8],
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
    pub dark_mode: bool,
}

/// Key description handed to the label callback.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct KeyInfo {
    pub midi: u8,
    pub is_active: bool,
    pub is_accidental: bool,
    pub key_width: f64,
}

/// Renders a keyboard into an SVG fragment (no `<svg>` wrapper).
pub trait KeyboardRenderer {
    fn render_keyboard(
        &self,
        request: &KeyboardRequest<'_>,
        label: &dyn Fn(&KeyInfo) -> Option<String>,
    ) -> String;
}

/// Flat two-tone keyboard drawn with rectangles.
#[derive(Debug, Clone, Copy, Default)]
pub struct SvgKeyboard;

/// Key fills and border for one theme.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct KeyColors {
    white: &'static str,
    black: &'static str,
    border: &'static str,
}

impl KeyColors {
    fn for_mode(dark_mode: bool) -> Self {
        if dark_mode {
            Self {
                white: DARK_WHITE_KEY_COLOR,
                black: DARK_BLACK_KEY_COLOR,
                border: DARK_KEY_BORDER_COLOR,
            }
        } else {
            Self {
                white: LIGHT_WHITE_KEY_COLOR,
                black: LIGHT_BLACK_KEY_COLOR,
                border: LIGHT_KEY_BORDER_COLOR,
            }
        }
    }
}

/// Horizontal placement of one key.
#[derive(Debug, Clone, Copy, PartialEq)]
pub(crate) struct KeyGeometry {
    pub(crate) midi: u8,
    pub(crate) x: f64,
    pub(crate) width: f64,
    pub(crate) is_accidental: bool,
}

/// Lay out the keys of `range` across `width`, white keys evenly spaced and
/// black keys centered on the boundary between their neighbours.
pub(crate) fn key_geometry(range: NoteRange, width: f64) -> Vec<KeyGeometry> {
    let white_count = range
        .iter()
        .filter(|&m| !NoteName::from_midi(m).is_accidental())
        .count()
        .max(1);
    let white_width = width / white_count as f64;
    let black_width = white_width * BLACK_KEY_WIDTH_RATIO;

    let mut keys = Vec::new();
    let mut whites_before = 0usize;
    for midi in range.iter() {
        if NoteName::from_midi(midi).is_accidental() {
            let center = whites_before as f64 * white_width;
            let x = (center - black_width / 2.0).clamp(0.0, (width - black_width).max(0.0));
            keys.push(KeyGeometry { midi, x, width: black_width, is_accidental: true });
        } else {
            let x = whites_before as f64 * white_width;
            keys.push(KeyGeometry { midi, x, width: white_width, is_accidental: false });
            whites_before += 1;
        }
    }
    keys
}

impl KeyboardRenderer for SvgKeyboard {
    fn render_keyboard(
        &self,
        request: &KeyboardRequest<'_>,
        label: &dyn Fn(&KeyInfo) -> Option<String>,
    ) -> String {
        let mut svg = SvgBuilder::new(request.width, request.height);
        let keys = key_geometry(request.range, request.width);
        let black_height = request.height * BLACK_KEY_HEIGHT_RATIO;
        let colors = KeyColors::for_mode(request.dark_mode);

        svg.begin_group(&[("class", "piano")]);

        // White keys first so black keys overlap them.
        for pass_accidentals in [false, true] {
            for key in keys.iter().filter(|k| k.is_accidental == pass_accidentals) {
                let is_active = request.active.contains(&key.midi);
                let x = request.x + key.x;
                let (height, fill) = match (key.is_accidental, is_active) {
                    (_, true) => (
                        if key.is_accidental { black_height } else { request.height },
                        ACTIVE_KEY_COLOR,
                    ),
                    (true, false) => (black_height, colors.black),
                    (false, false) => (request.height, colors.white),
                };
                svg.rect(x, request.y, key.width, height, fill, colors.border, 1.0);

                let info = KeyInfo {
                    midi: key.midi,
                    is_active,
                    is_accidental: key.is_accidental,
                    key_width: key.width,
                };
                if let Some(text) = label(&info) {
                    let text_color = if key.is_accidental || is_active { "white" } else { "black" };
                    svg.text(
                        x + key.width / 2.0,
                        request.y + height - 8.0,
                        &text,
                        KEY_LABEL_SIZE,
                        "bold",
                        text_color,
                        "middle",
                    );
                }
            }
        }

        svg.end_group();
        svg.into_fragment()
    }
}
