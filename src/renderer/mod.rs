//! Widget renderer — converts the widget state into SVG output.
//!
//! The renderer lays out the whole widget (title, root buttons, quality
//! toggle, theme toggle, piano, fretboard) and produces a self-contained SVG
//! string that can be displayed in any SVG-capable view. Interactive regions
//! carry a `data-action` attribute naming the [`Action`](crate::Action)
//! they trigger.

mod constants;
mod fretboard;
pub mod icons;
pub mod keyboard;
pub mod layout;
mod svg_builder;
mod theme;

use crate::chord::check_shape;
use crate::error::ChordError;
use crate::model::*;
use crate::options::RenderOptions;
use crate::widget::ChordView;
use crate::widget::DARK_MODE_CLASS;
use constants::*;
use fretboard::{draw_fretboard, FRETBOARD_TOTAL_WIDTH};
use icons::{IconRenderer, SvgIcons, ThemeIcon};
use keyboard::{KeyInfo, KeyboardRenderer, KeyboardRequest, SvgKeyboard};
use layout::{compute_layout, Rect, WidgetLayout};
use svg_builder::SvgBuilder;
use theme::Palette;

// ═══════════════════════════════════════════════════════════════════════
// Public API
// ═══════════════════════════════════════════════════════════════════════

/// Render the widget for `state` with the built-in keyboard and icons.
///
/// `options.width` sets the SVG width in user units; 0 selects the default
/// (760). On phones, pass the screen width in points and the root buttons
/// wrap onto extra rows.
pub fn render_widget_to_svg(state: &WidgetState, options: &RenderOptions) -> String {
    render_widget_with(state, options, &SvgKeyboard, &SvgIcons)
}

/// Render the widget, delegating the piano and the theme icon to the given
/// collaborators.
pub fn render_widget_with(
    state: &WidgetState,
    options: &RenderOptions,
    keyboard: &dyn KeyboardRenderer,
    icons: &dyn IconRenderer,
) -> String {
    let view = state.view();
    let layout = compute_layout(options);
    let palette = Palette::for_mode(view.dark_mode);

    tracing::debug!(
        chord = %view.label,
        dark_mode = view.dark_mode,
        width = layout.width,
        "rendering chord widget"
    );

    let mut svg = SvgBuilder::new(layout.width, layout.height);
    if view.dark_mode {
        svg.set_class(DARK_MODE_CLASS);
    }

    svg.rect(0.0, 0.0, layout.width, layout.height, palette.background, "none", 0.0);

    render_controls(&mut svg, &view, &layout, &palette, options, icons);
    render_piano_section(&mut svg, &view, &layout, &palette, options, keyboard);

    svg.styled_text(
        layout.fretboard.x,
        layout.guitar_heading_y,
        &format!("Guitar - {} Chord", view.label),
        HEADING_SIZE,
        "bold",
        &palette.text,
        "start",
    );
    draw_fretboard(
        &mut svg,
        layout.fretboard.x,
        layout.fretboard.y,
        &view.fret_positions,
        &palette,
    );

    svg.build()
}

/// Render a standalone chord diagram for one shape.
///
/// Fails when the shape cannot be drawn in a four-fret diagram (see
/// [`check_shape`]).
pub fn render_fretboard_to_svg(
    shape: &[FretPosition; STRING_COUNT],
    dark_mode: bool,
) -> Result<String, ChordError> {
    check_shape(shape)?;
    let palette = Palette::for_mode(dark_mode);
    let mut svg = SvgBuilder::new(FRETBOARD_TOTAL_WIDTH, FRETBOARD_HEIGHT);
    if dark_mode {
        svg.set_class(DARK_MODE_CLASS);
    }
    svg.rect(0.0, 0.0, FRETBOARD_TOTAL_WIDTH, FRETBOARD_HEIGHT, palette.background, "none", 0.0);
    draw_fretboard(&mut svg, 0.0, 0.0, shape, &palette);
    Ok(svg.build())
}

/// Resolve a tap on a widget rendered with `options` to an action.
pub fn hit_test(options: &RenderOptions, x: f64, y: f64) -> Option<Action> {
    compute_layout(options).hit_test(x, y)
}

/// The layout a render with `options` would use.
pub fn widget_layout(options: &RenderOptions) -> WidgetLayout {
    compute_layout(options)
}

// ═══════════════════════════════════════════════════════════════════════
// Sections
// ═══════════════════════════════════════════════════════════════════════

fn render_controls(
    svg: &mut SvgBuilder,
    view: &ChordView,
    layout: &WidgetLayout,
    palette: &Palette,
    options: &RenderOptions,
    icons: &dyn IconRenderer,
) {
    svg.styled_text(
        PAGE_MARGIN,
        layout.title_y,
        &options.title,
        layout.title_size,
        "bold",
        &palette.text,
        "start",
    );

    // Theme toggle: bare icon, no button chrome.
    let theme_action = Action::ToggleTheme.id();
    svg.begin_group(&[("class", "theme-toggle"), ("data-action", theme_action.as_str())]);
    let tb = layout.theme_button;
    svg.rect(tb.x, tb.y, tb.width, tb.height, "transparent", "none", 0.0);
    svg.raw(icons.render_icon(
        ThemeIcon::for_mode(view.dark_mode),
        tb.x + THEME_BUTTON_PADDING,
        tb.y + THEME_BUTTON_PADDING,
        THEME_ICON_SIZE,
        &palette.text,
    ));
    svg.end_group();

    for &(note, rect) in &layout.note_buttons {
        let selected = note == view.selection.root;
        let fill = if selected { &palette.highlight } else { &palette.button_bg };
        let action = Action::SelectRoot { root: note }.id();
        let class = if selected { "note-button selected" } else { "note-button" };
        button(svg, rect, note.as_str(), class, &action, fill, palette);
    }

    let quality_label = match view.selection.quality {
        ChordQuality::Major => "Switch to Minor",
        ChordQuality::Minor => "Switch to Major",
    };
    let action = Action::ToggleQuality.id();
    button(
        svg,
        layout.quality_button,
        quality_label,
        "quality-toggle",
        &action,
        &palette.button_bg,
        palette,
    );
}

fn render_piano_section(
    svg: &mut SvgBuilder,
    view: &ChordView,
    layout: &WidgetLayout,
    palette: &Palette,
    options: &RenderOptions,
    keyboard: &dyn KeyboardRenderer,
) {
    svg.styled_text(
        layout.piano.x,
        layout.piano_heading_y,
        &format!("Piano - {} Chord", view.label),
        HEADING_SIZE,
        "bold",
        &palette.text,
        "start",
    );

    let request = KeyboardRequest {
        range: options.note_range,
        active: &view.active_notes,
        x: layout.piano.x,
        y: layout.piano.y,
        width: layout.piano.width,
        height: layout.piano.height,
        dark_mode: view.dark_mode,
    };
    svg.raw(keyboard.render_keyboard(&request, &note_label));
}

/// Active keys are labelled with their note name; other keys stay blank.
fn note_label(key: &KeyInfo) -> Option<String> {
    key.is_active
        .then(|| NoteName::from_midi(key.midi).to_string())
}

fn button(
    svg: &mut SvgBuilder,
    rect: Rect,
    label: &str,
    class: &str,
    action: &str,
    fill: &str,
    palette: &Palette,
) {
    svg.begin_group(&[("class", class), ("data-action", action)]);
    svg.styled_rect(rect.x, rect.y, rect.width, rect.height, BUTTON_RADIUS, fill, &palette.border);
    let (cx, cy) = rect.center();
    svg.styled_text(
        cx,
        cy + BUTTON_FONT_SIZE / 3.0,
        label,
        BUTTON_FONT_SIZE,
        "normal",
        &palette.button_text,
        "middle",
    );
    svg.end_group();
}
