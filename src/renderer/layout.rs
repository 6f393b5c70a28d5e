//! Layout computation — positions every region of the widget for a given
//! page width. Rendering and hit-testing share this layout, so a tap at any
//! point the renderer drew as a button resolves to that button's action.

use crate::model::{Action, NoteName};
use crate::options::RenderOptions;

use super::constants::*;
use super::fretboard::FRETBOARD_TOTAL_WIDTH;

// ═══════════════════════════════════════════════════════════════════════
// Layout structures
// ═══════════════════════════════════════════════════════════════════════

/// Axis-aligned rectangle in SVG user units.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rect {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

impl Rect {
    pub fn contains(&self, x: f64, y: f64) -> bool {
        x >= self.x && x <= self.x + self.width && y >= self.y && y <= self.y + self.height
    }

    pub fn center(&self) -> (f64, f64) {
        (self.x + self.width / 2.0, self.y + self.height / 2.0)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct WidgetLayout {
    pub width: f64,
    pub height: f64,
    /// Baseline of the title.
    pub title_y: f64,
    /// Title font size, shrunk so the title clears the theme toggle.
    pub title_size: f64,
    pub theme_button: Rect,
    pub note_buttons: Vec<(NoteName, Rect)>,
    pub quality_button: Rect,
    pub piano_heading_y: f64,
    pub piano: Rect,
    pub guitar_heading_y: f64,
    pub fretboard: Rect,
}

impl WidgetLayout {
    /// Action for a tap at (`x`, `y`), if it lands on an interactive region.
    pub fn hit_test(&self, x: f64, y: f64) -> Option<Action> {
        if self.theme_button.contains(x, y) {
            return Some(Action::ToggleTheme);
        }
        if self.quality_button.contains(x, y) {
            return Some(Action::ToggleQuality);
        }
        self.note_buttons
            .iter()
            .find(|(_, rect)| rect.contains(x, y))
            .map(|&(root, _)| Action::SelectRoot { root })
    }
}

// ═══════════════════════════════════════════════════════════════════════
// Layout computation
// ═══════════════════════════════════════════════════════════════════════

/// Estimate the rendered width of `text` for a given font size.
pub(super) fn estimate_text_width(text: &str, font_size: f64) -> f64 {
    text.chars().count() as f64 * font_size * TITLE_CHAR_WIDTH_FACTOR
}

/// Largest size up to [`TITLE_SIZE`] at which `title` fits in `available`.
fn fit_title_size(title: &str, available: f64) -> f64 {
    let natural = estimate_text_width(title, TITLE_SIZE);
    if natural <= available || natural <= 0.0 {
        TITLE_SIZE
    } else {
        TITLE_SIZE * available.max(0.0) / natural
    }
}

/// Page width actually used for `options`: the default when unset, never
/// narrower than the minimum that fits the fretboard and controls.
pub(super) fn effective_width(options: &RenderOptions) -> f64 {
    let width = if options.width > 0.0 && options.width.is_finite() {
        options.width
    } else {
        DEFAULT_PAGE_WIDTH
    };
    width.max(MIN_PAGE_WIDTH)
}

pub(crate) fn compute_layout(options: &RenderOptions) -> WidgetLayout {
    let width = effective_width(options);
    let content_width = width - 2.0 * PAGE_MARGIN;
    let mut y = PAGE_MARGIN_TOP;

    let theme_size = THEME_ICON_SIZE + 2.0 * THEME_BUTTON_PADDING;
    let theme_button = Rect {
        x: width - THEME_BUTTON_INSET - theme_size,
        y: THEME_BUTTON_INSET,
        width: theme_size,
        height: theme_size,
    };

    let title_size = fit_title_size(&options.title, theme_button.x - BUTTON_GAP - PAGE_MARGIN);
    let title_y = y + TITLE_SIZE;
    y += TITLE_HEIGHT;

    // Root buttons wrap like a flex row.
    let per_row = (((content_width + BUTTON_GAP) / (NOTE_BUTTON_WIDTH + BUTTON_GAP)).floor() as usize)
        .clamp(1, NoteName::ALL.len());
    let note_buttons: Vec<(NoteName, Rect)> = NoteName::ALL
        .iter()
        .enumerate()
        .map(|(i, &note)| {
            let (row, col) = (i / per_row, i % per_row);
            let rect = Rect {
                x: PAGE_MARGIN + col as f64 * (NOTE_BUTTON_WIDTH + BUTTON_GAP),
                y: y + row as f64 * (NOTE_BUTTON_HEIGHT + BUTTON_GAP),
                width: NOTE_BUTTON_WIDTH,
                height: NOTE_BUTTON_HEIGHT,
            };
            (note, rect)
        })
        .collect();
    let rows = NoteName::ALL.len().div_ceil(per_row);
    y += rows as f64 * (NOTE_BUTTON_HEIGHT + BUTTON_GAP) - BUTTON_GAP + 10.0;

    let quality_button = Rect {
        x: PAGE_MARGIN,
        y,
        width: QUALITY_BUTTON_WIDTH,
        height: QUALITY_BUTTON_HEIGHT,
    };
    y += QUALITY_BUTTON_HEIGHT + SECTION_GAP;

    let piano_heading_y = y + HEADING_SIZE;
    y += HEADING_HEIGHT;
    let piano = Rect {
        x: PAGE_MARGIN,
        y,
        width: content_width.min(PIANO_MAX_WIDTH),
        height: PIANO_HEIGHT,
    };
    y += PIANO_HEIGHT + SECTION_GAP;

    let guitar_heading_y = y + HEADING_SIZE;
    y += HEADING_HEIGHT;
    let fretboard = Rect {
        x: PAGE_MARGIN,
        y,
        width: FRETBOARD_TOTAL_WIDTH,
        height: FRETBOARD_HEIGHT,
    };
    y += FRETBOARD_HEIGHT + PAGE_MARGIN_BOTTOM;

    WidgetLayout {
        width,
        height: y,
        title_y,
        title_size,
        theme_button,
        note_buttons,
        quality_button,
        piano_heading_y,
        piano,
        guitar_heading_y,
        fretboard,
    }
}
