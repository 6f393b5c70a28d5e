//! Guitar chord diagram: nut, four frets, six strings, finger dots and the
//! note each played string sounds.

use crate::chord::{diagram_base_fret, string_note, DIAGRAM_FRETS};
use crate::model::{FretPosition, STRING_COUNT};

use super::constants::*;
use super::svg_builder::SvgBuilder;
use super::theme::Palette;

/// Width taken by a diagram including the position-label gutter.
pub(super) const FRETBOARD_TOTAL_WIDTH: f64 = FRETBOARD_WIDTH + POSITION_GUTTER;

/// Draw a chord diagram with its top-left corner at (`ox`, `oy`).
///
/// Row 0 (above the top line) holds the open/muted markers; rows 1–4 are
/// frets. Shapes reaching past fret 4 are drawn from their lowest fretted
/// fret, the top line loses its nut weight and a "<n>fr" label marks the
/// first row. Callers pass shapes that passed
/// [`check_shape`](crate::chord::check_shape).
pub(super) fn draw_fretboard(
    svg: &mut SvgBuilder,
    ox: f64,
    oy: f64,
    shape: &[FretPosition; STRING_COUNT],
    palette: &Palette,
) {
    let width = FRETBOARD_WIDTH;
    let height = FRETBOARD_HEIGHT;
    let string_spacing = width / STRING_COUNT as f64;
    let fret_spacing = height / 6.0;
    let base_fret = diagram_base_fret(shape);
    let stroke = palette.stroke;

    let base = base_fret.to_string();
    svg.begin_group(&[("class", "fretboard"), ("data-base-fret", base.as_str())]);

    let top_width = if base_fret == 1 { NUT_WIDTH } else { FRET_LINE_WIDTH };
    svg.line(ox, oy + fret_spacing, ox + width, oy + fret_spacing, stroke, top_width);

    for fret in 1..=DIAGRAM_FRETS {
        let y = oy + fret_spacing * (fret as f64 + 1.0);
        svg.line(ox, y, ox + width, y, stroke, FRET_LINE_WIDTH);
    }

    for string in 0..STRING_COUNT {
        let x = ox + string_x(string, string_spacing);
        svg.line(x, oy + fret_spacing, x, oy + fret_spacing * 5.0, stroke, STRING_LINE_WIDTH);
    }

    svg.circle(
        ox + width / 2.0,
        oy + fret_spacing * 3.5,
        ORIENTATION_DOT_RADIUS,
        palette.orientation,
    );

    for (string, &position) in shape.iter().enumerate() {
        let x = ox + string_x(string, string_spacing);
        match position {
            FretPosition::Muted => {
                svg.text(x, oy + fret_spacing * 0.7, "×", MUTED_MARKER_SIZE, "normal", stroke, "middle");
            }
            FretPosition::Open => {
                svg.ring(x, oy + fret_spacing * 0.5, FINGER_DOT_RADIUS, stroke, 1.0);
            }
            FretPosition::Fretted(fret) => {
                let row = (fret.saturating_sub(base_fret) + 1) as f64;
                svg.circle(x, oy + fret_spacing * (row + 0.5), FINGER_DOT_RADIUS, stroke);
            }
        }

        if let Some(note) = string_note(string, position) {
            svg.text(
                x,
                oy + height - STRING_LABEL_INSET,
                note.as_str(),
                STRING_LABEL_SIZE,
                "normal",
                stroke,
                "middle",
            );
        }
    }

    if base_fret > 1 {
        svg.text(
            ox + width + 4.0,
            oy + fret_spacing * 1.5 + POSITION_LABEL_SIZE / 3.0,
            &format!("{base_fret}fr"),
            POSITION_LABEL_SIZE,
            "normal",
            stroke,
            "start",
        );
    }

    svg.end_group();
}

fn string_x(string: usize, spacing: f64) -> f64 {
    spacing * (string as f64 + 0.5)
}
