//! Shared constants for the widget renderer (all in SVG user units).

// ── Page & margins ──────────────────────────────────────────────────
pub(super) const DEFAULT_PAGE_WIDTH: f64 = 760.0;
pub(super) const MIN_PAGE_WIDTH: f64 = 320.0;
pub(super) const PAGE_MARGIN: f64 = 30.0;
pub(super) const PAGE_MARGIN_TOP: f64 = 20.0;
pub(super) const PAGE_MARGIN_BOTTOM: f64 = 20.0;
pub(super) const SECTION_GAP: f64 = 20.0;

// ── Header ──────────────────────────────────────────────────────────
pub(super) const TITLE_SIZE: f64 = 28.0;
pub(super) const TITLE_HEIGHT: f64 = 50.0;
pub(super) const TITLE_CHAR_WIDTH_FACTOR: f64 = 0.6; // bold sans-serif
pub(super) const HEADING_SIZE: f64 = 20.0;
pub(super) const HEADING_HEIGHT: f64 = 34.0;

// ── Controls ────────────────────────────────────────────────────────
pub(super) const NOTE_BUTTON_WIDTH: f64 = 40.0;
pub(super) const NOTE_BUTTON_HEIGHT: f64 = 28.0;
pub(super) const BUTTON_GAP: f64 = 5.0;
pub(super) const BUTTON_RADIUS: f64 = 4.0;
pub(super) const BUTTON_FONT_SIZE: f64 = 13.0;
pub(super) const QUALITY_BUTTON_WIDTH: f64 = 130.0;
pub(super) const QUALITY_BUTTON_HEIGHT: f64 = 30.0;
pub(super) const THEME_ICON_SIZE: f64 = 24.0;
pub(super) const THEME_BUTTON_PADDING: f64 = 5.0;
pub(super) const THEME_BUTTON_INSET: f64 = 10.0;

// ── Piano ───────────────────────────────────────────────────────────
pub(super) const PIANO_MAX_WIDTH: f64 = 700.0;
pub(super) const PIANO_HEIGHT: f64 = 140.0;
pub(super) const BLACK_KEY_WIDTH_RATIO: f64 = 0.6;
pub(super) const BLACK_KEY_HEIGHT_RATIO: f64 = 0.62;
pub(super) const KEY_LABEL_SIZE: f64 = 12.0;

// ── Fretboard ───────────────────────────────────────────────────────
pub(super) const FRETBOARD_WIDTH: f64 = 150.0;
pub(super) const FRETBOARD_HEIGHT: f64 = 230.0;
pub(super) const NUT_WIDTH: f64 = 4.0;
pub(super) const FRET_LINE_WIDTH: f64 = 2.0;
pub(super) const STRING_LINE_WIDTH: f64 = 1.0;
pub(super) const FINGER_DOT_RADIUS: f64 = 8.0;
pub(super) const ORIENTATION_DOT_RADIUS: f64 = 4.0;
pub(super) const MUTED_MARKER_SIZE: f64 = 20.0;
pub(super) const STRING_LABEL_SIZE: f64 = 12.0;
pub(super) const STRING_LABEL_INSET: f64 = 15.0;
pub(super) const POSITION_LABEL_SIZE: f64 = 11.0;
pub(super) const POSITION_GUTTER: f64 = 28.0; // room right of the diagram for the "5fr" label

// ── Colors ──────────────────────────────────────────────────────────
pub(super) const DARK_BACKGROUND: &str = "#1e1e1e";
pub(super) const LIGHT_BACKGROUND: &str = "#ffffff";
pub(super) const DARK_INK: &str = "white";
pub(super) const LIGHT_INK: &str = "black";
pub(super) const DARK_ORIENTATION: &str = "#666";
pub(super) const LIGHT_ORIENTATION: &str = "#999";
pub(super) const ACTIVE_KEY_COLOR: &str = "#4a90d9";
pub(super) const LIGHT_WHITE_KEY_COLOR: &str = "#f8f8f8";
pub(super) const LIGHT_BLACK_KEY_COLOR: &str = "#222222";
pub(super) const LIGHT_KEY_BORDER_COLOR: &str = "#555555";
pub(super) const DARK_WHITE_KEY_COLOR: &str = "#d6d6d6";
pub(super) const DARK_BLACK_KEY_COLOR: &str = "#0a0a0a";
pub(super) const DARK_KEY_BORDER_COLOR: &str = "#8a8a8a";
