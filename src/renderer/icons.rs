//! Theme-toggle glyphs.

use super::svg_builder::SvgBuilder;

/// Which glyph the theme toggle shows.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ThemeIcon {
    /// Shown while dark mode is active (switches to light).
    Sun,
    /// Shown while light mode is active (switches to dark).
    Moon,
}

impl ThemeIcon {
    pub fn for_mode(dark_mode: bool) -> Self {
        if dark_mode {
            ThemeIcon::Sun
        } else {
            ThemeIcon::Moon
        }
    }
}

/// Renders a themed icon into an SVG fragment. `color` is a CSS paint
/// expression and may reference host variables.
pub trait IconRenderer {
    fn render_icon(&self, icon: ThemeIcon, x: f64, y: f64, size: f64, color: &str) -> String;
}

/// Outline icons on a 24-unit grid, stroked at width 2.
#[derive(Debug, Clone, Copy, Default)]
pub struct SvgIcons;

const ICON_GRID: f64 = 24.0;

const SUN_PATHS: [&str; 9] = [
    "M16 12a4 4 0 1 1-8 0a4 4 0 1 1 8 0Z",
    "M12 2v2",
    "M12 20v2",
    "m4.93 4.93 1.41 1.41",
    "m17.66 17.66 1.41 1.41",
    "M2 12h2",
    "M20 12h2",
    "m6.34 17.66-1.41 1.41",
    "m19.07 4.93-1.41 1.41",
];

const MOON_PATHS: [&str; 1] = ["M12 3a6 6 0 0 0 9 9 9 9 0 1 1-9-9Z"];

impl IconRenderer for SvgIcons {
    fn render_icon(&self, icon: ThemeIcon, x: f64, y: f64, size: f64, color: &str) -> String {
        let paths: &[&str] = match icon {
            ThemeIcon::Sun => &SUN_PATHS,
            ThemeIcon::Moon => &MOON_PATHS,
        };
        let class = match icon {
            ThemeIcon::Sun => "icon-sun",
            ThemeIcon::Moon => "icon-moon",
        };

        let mut svg = SvgBuilder::new(size, size);
        let transform = format!("translate({:.1},{:.1}) scale({:.3})", x, y, size / ICON_GRID);
        svg.begin_group(&[("class", class), ("transform", transform.as_str())]);
        for d in paths {
            svg.stroked_path(d, color, 2.0);
        }
        svg.end_group();
        svg.into_fragment()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sun_when_dark() {
        assert_eq!(ThemeIcon::for_mode(true), ThemeIcon::Sun);
        assert_eq!(ThemeIcon::for_mode(false), ThemeIcon::Moon);
    }

    #[test]
    fn icon_is_scaled_to_size() {
        let frag = SvgIcons.render_icon(ThemeIcon::Moon, 10.0, 20.0, 48.0, "red");
        assert!(frag.contains("translate(10.0,20.0) scale(2.000)"));
        assert!(frag.contains("class=\"icon-moon\""));
        assert_eq!(frag.matches("<path").count(), 1);
    }
}
