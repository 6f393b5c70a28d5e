//! Theme palette derived from the dark-mode flag.
//!
//! Diagram ink is fixed per theme (white on dark, black on light). Chrome
//! colors read the host stylesheet's CSS variables and fall back to built-in
//! values when the host does not define them.

use super::constants::*;

/// Colors used for one render pass.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct Palette {
    pub(crate) background: &'static str,
    /// Lines, dots and labels in diagrams.
    pub(crate) stroke: &'static str,
    pub(crate) orientation: &'static str,
    pub(crate) text: String,
    pub(crate) button_bg: String,
    pub(crate) button_text: String,
    pub(crate) highlight: String,
    pub(crate) border: String,
}

impl Palette {
    pub(crate) fn for_mode(dark: bool) -> Self {
        if dark {
            Self {
                background: DARK_BACKGROUND,
                stroke: DARK_INK,
                orientation: DARK_ORIENTATION,
                text: css_var("--text-color", "#f0f0f0"),
                button_bg: css_var("--button-bg", "#333333"),
                button_text: css_var("--button-text", "#f0f0f0"),
                highlight: css_var("--highlight-color", "#2f6db5"),
                border: css_var("--border-color", "#555555"),
            }
        } else {
            Self {
                background: LIGHT_BACKGROUND,
                stroke: LIGHT_INK,
                orientation: LIGHT_ORIENTATION,
                text: css_var("--text-color", "#111111"),
                button_bg: css_var("--button-bg", "#eeeeee"),
                button_text: css_var("--button-text", "#111111"),
                highlight: css_var("--highlight-color", "#ffd54f"),
                border: css_var("--border-color", "#cccccc"),
            }
        }
    }
}

/// `var(--name, fallback)` expression for `style` attributes.
pub(crate) fn css_var(name: &str, fallback: &str) -> String {
    format!("var({name}, {fallback})")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ink_inverts_between_themes() {
        let dark = Palette::for_mode(true);
        let light = Palette::for_mode(false);
        assert_eq!(dark.stroke, DARK_INK);
        assert_eq!(light.stroke, LIGHT_INK);
        assert_ne!(dark.background, light.background);
        assert_ne!(dark.orientation, light.orientation);
    }

    #[test]
    fn chrome_reads_host_variables() {
        let p = Palette::for_mode(true);
        assert!(p.highlight.starts_with("var(--highlight-color,"));
        assert!(p.border.starts_with("var(--border-color,"));
    }
}
