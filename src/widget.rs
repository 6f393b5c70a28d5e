//! Widget state controller.
//!
//! State transitions are plain functions from one [`WidgetState`] to the
//! next. [`ChordWidget`] owns a state for hosts that keep the widget alive
//! between interactions and keeps the enclosing document's theme flag in
//! sync through a [`ThemeHost`].

use std::collections::BTreeSet;

use crate::chord::{chord_notes, chord_tone_names, fret_positions};
use crate::model::*;
use crate::options::RenderOptions;
use crate::renderer::render_widget_to_svg;

/// Class the enclosing document carries while dark mode is active.
pub const DARK_MODE_CLASS: &str = "dark-mode";

// ═══════════════════════════════════════════════════════════════════════
// Transitions & derived view
// ═══════════════════════════════════════════════════════════════════════

impl WidgetState {
    /// Pick a new root; the quality is kept.
    pub fn select_root(self, root: NoteName) -> Self {
        Self {
            selection: ChordSelection { root, ..self.selection },
            ..self
        }
    }

    pub fn toggle_quality(self) -> Self {
        Self {
            selection: ChordSelection {
                quality: self.selection.quality.toggled(),
                ..self.selection
            },
            ..self
        }
    }

    pub fn toggle_theme(self) -> Self {
        Self {
            dark_mode: !self.dark_mode,
            ..self
        }
    }

    pub fn apply(self, action: Action) -> Self {
        match action {
            Action::SelectRoot { root } => self.select_root(root),
            Action::ToggleQuality => self.toggle_quality(),
            Action::ToggleTheme => self.toggle_theme(),
        }
    }

    /// Everything the renderer needs, derived from the state.
    pub fn view(&self) -> ChordView {
        let ChordSelection { root, quality } = self.selection;
        ChordView {
            selection: self.selection,
            label: self.selection.label(),
            active_notes: chord_notes(root, quality),
            tone_names: chord_tone_names(root, quality),
            fret_positions: fret_positions(root, quality),
            dark_mode: self.dark_mode,
        }
    }
}

/// Derived, read-only view of a [`WidgetState`].
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize)]
pub struct ChordView {
    pub selection: ChordSelection,
    /// Chord symbol, e.g. "A" or "Cm".
    pub label: String,
    /// MIDI pitches highlighted on the piano, ascending.
    pub active_notes: [u8; 3],
    pub tone_names: [NoteName; 3],
    pub fret_positions: [FretPosition; STRING_COUNT],
    pub dark_mode: bool,
}

// ═══════════════════════════════════════════════════════════════════════
// Host document
// ═══════════════════════════════════════════════════════════════════════

/// The document enclosing the widget. Receives the global theme flag so
/// chrome outside the widget can follow the theme.
pub trait ThemeHost {
    fn set_dark_mode(&mut self, enabled: bool);
}

/// Minimal host document that tracks a set of class names, the way a web
/// page's `<body>` class list would.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DocumentClasses {
    classes: BTreeSet<String>,
}

impl DocumentClasses {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn contains(&self, class: &str) -> bool {
        self.classes.contains(class)
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.classes.iter().map(String::as_str)
    }
}

impl ThemeHost for DocumentClasses {
    fn set_dark_mode(&mut self, enabled: bool) {
        if enabled {
            self.classes.insert(DARK_MODE_CLASS.to_string());
        } else {
            self.classes.remove(DARK_MODE_CLASS);
        }
    }
}

// ═══════════════════════════════════════════════════════════════════════
// Controller
// ═══════════════════════════════════════════════════════════════════════

/// Stateful widget instance.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ChordWidget {
    state: WidgetState,
}

impl ChordWidget {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_state(state: WidgetState) -> Self {
        Self { state }
    }

    pub fn state(&self) -> WidgetState {
        self.state
    }

    pub fn view(&self) -> ChordView {
        self.state.view()
    }

    /// Attach to a host document, applying the current theme flag.
    pub fn mount(&self, host: &mut dyn ThemeHost) {
        host.set_dark_mode(self.state.dark_mode);
    }

    /// Apply a user action. Returns `true` if the state changed.
    pub fn dispatch(&mut self, action: Action, host: &mut dyn ThemeHost) -> bool {
        let previous = self.state;
        self.state = previous.apply(action);

        tracing::debug!(
            action = %action.id(),
            chord = %self.state.selection.label(),
            dark_mode = self.state.dark_mode,
            "widget action applied"
        );

        if self.state.dark_mode != previous.dark_mode {
            host.set_dark_mode(self.state.dark_mode);
        }
        self.state != previous
    }

    pub fn render(&self, options: &RenderOptions) -> String {
        render_widget_to_svg(&self.state, options)
    }
}
