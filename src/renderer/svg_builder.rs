//! SVG builder — accumulates SVG elements and produces the final string.
//!
//! Paint arguments are passed through verbatim, so callers may hand in plain
//! colors (`"white"`) or CSS expressions (`"var(--button-bg, #333)"`) when the
//! element is painted through a `style` attribute.

// ═══════════════════════════════════════════════════════════════════════
// SvgBuilder
// ═══════════════════════════════════════════════════════════════════════

pub(crate) struct SvgBuilder {
    pub(crate) elements: Vec<String>,
    width: f64,
    height: f64,
    class: Option<String>,
}

impl SvgBuilder {
    pub(crate) fn new(width: f64, height: f64) -> Self {
        Self {
            elements: Vec::new(),
            width,
            height,
            class: None,
        }
    }

    /// Class attribute for the root `<svg>` element.
    pub(crate) fn set_class(&mut self, class: &str) {
        self.class = Some(class.to_string());
    }

    pub(crate) fn build(self) -> String {
        let class = self
            .class
            .as_deref()
            .map(|c| format!(r#" class="{}""#, escape_attr(c)))
            .unwrap_or_default();
        let mut svg = format!(
            r#"<svg xmlns="http://www.w3.org/2000/svg"{} viewBox="0 0 {} {}" width="{}" height="{}" style="font-family: -apple-system, 'Segoe UI', Helvetica, Arial, sans-serif;">"#,
            class, self.width, self.height, self.width, self.height
        );
        svg.push('\n');
        for el in &self.elements {
            svg.push_str("  ");
            svg.push_str(el);
            svg.push('\n');
        }
        svg.push_str("</svg>\n");
        svg
    }

    /// Elements only, without the `<svg>` wrapper, for embedding in a larger
    /// document.
    pub(crate) fn into_fragment(self) -> String {
        self.elements.join("\n")
    }

    /// Insert a pre-rendered fragment (e.g. from a collaborator renderer).
    pub(crate) fn raw(&mut self, fragment: String) {
        if !fragment.is_empty() {
            self.elements.push(fragment);
        }
    }

    pub(crate) fn begin_group(&mut self, attrs: &[(&str, &str)]) {
        let mut el = String::from("<g");
        for (name, value) in attrs {
            el.push_str(&format!(r#" {}="{}""#, name, escape_attr(value)));
        }
        el.push('>');
        self.elements.push(el);
    }

    pub(crate) fn end_group(&mut self) {
        self.elements.push("</g>".to_string());
    }

    pub(crate) fn line(&mut self, x1: f64, y1: f64, x2: f64, y2: f64, color: &str, width: f64) {
        self.elements.push(format!(
            r#"<line x1="{:.1}" y1="{:.1}" x2="{:.1}" y2="{:.1}" stroke="{}" stroke-width="{:.1}"/>"#,
            x1, y1, x2, y2, color, width
        ));
    }

    #[allow(clippy::too_many_arguments)]
    pub(crate) fn rect(&mut self, x: f64, y: f64, w: f64, h: f64, fill: &str, stroke: &str, stroke_width: f64) {
        if stroke_width > 0.0 {
            self.elements.push(format!(
                r#"<rect x="{:.1}" y="{:.1}" width="{:.1}" height="{:.1}" fill="{}" stroke="{}" stroke-width="{:.1}"/>"#,
                x, y, w, h, fill, stroke, stroke_width
            ));
        } else {
            self.elements.push(format!(
                r#"<rect x="{:.1}" y="{:.1}" width="{:.1}" height="{:.1}" fill="{}"/>"#,
                x, y, w, h, fill
            ));
        }
    }

    /// Rounded rectangle painted through a `style` attribute, so CSS
    /// variables resolve when the host provides them.
    #[allow(clippy::too_many_arguments)]
    pub(crate) fn styled_rect(&mut self, x: f64, y: f64, w: f64, h: f64, radius: f64, fill: &str, stroke: &str) {
        self.elements.push(format!(
            r#"<rect x="{:.1}" y="{:.1}" width="{:.1}" height="{:.1}" rx="{:.1}" style="fill: {}; stroke: {}; stroke-width: 1"/>"#,
            x, y, w, h, radius, fill, stroke
        ));
    }

    pub(crate) fn circle(&mut self, cx: f64, cy: f64, r: f64, fill: &str) {
        self.elements.push(format!(
            r#"<circle cx="{:.1}" cy="{:.1}" r="{:.1}" fill="{}"/>"#,
            cx, cy, r, fill
        ));
    }

    /// Unfilled circle outline.
    pub(crate) fn ring(&mut self, cx: f64, cy: f64, r: f64, stroke: &str, width: f64) {
        self.elements.push(format!(
            r#"<circle cx="{:.1}" cy="{:.1}" r="{:.1}" stroke="{}" stroke-width="{:.1}" fill="none"/>"#,
            cx, cy, r, stroke, width
        ));
    }

    #[allow(clippy::too_many_arguments)]
    pub(crate) fn text(&mut self, x: f64, y: f64, content: &str, size: f64, weight: &str, fill: &str, anchor: &str) {
        self.elements.push(format!(
            r#"<text x="{:.1}" y="{:.1}" font-size="{:.0}" font-weight="{}" fill="{}" text-anchor="{}">{}</text>"#,
            x, y, size, weight, fill, anchor, escape_text(content)
        ));
    }

    /// Text painted through a `style` attribute (see [`SvgBuilder::styled_rect`]).
    #[allow(clippy::too_many_arguments)]
    pub(crate) fn styled_text(&mut self, x: f64, y: f64, content: &str, size: f64, weight: &str, fill: &str, anchor: &str) {
        self.elements.push(format!(
            r#"<text x="{:.1}" y="{:.1}" font-size="{:.0}" font-weight="{}" style="fill: {}" text-anchor="{}">{}</text>"#,
            x, y, size, weight, fill, anchor, escape_text(content)
        ));
    }

    /// Stroked path outline painted through a `style` attribute.
    pub(crate) fn stroked_path(&mut self, d: &str, stroke: &str, stroke_width: f64) {
        self.elements.push(format!(
            r#"<path d="{}" style="fill: none; stroke: {}; stroke-width: {:.1}; stroke-linecap: round; stroke-linejoin: round"/>"#,
            d, stroke, stroke_width
        ));
    }
}

pub(crate) fn escape_text(content: &str) -> String {
    content
        .replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
}

pub(crate) fn escape_attr(value: &str) -> String {
    escape_text(value).replace('"', "&quot;")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn build_wraps_elements() {
        let mut svg = SvgBuilder::new(100.0, 50.0);
        svg.set_class("dark-mode");
        svg.line(0.0, 0.0, 100.0, 0.0, "white", 2.0);
        let out = svg.build();
        assert!(out.starts_with("<svg"));
        assert!(out.contains(r#"class="dark-mode""#));
        assert!(out.contains(r#"viewBox="0 0 100 50""#));
        assert!(out.trim_end().ends_with("</svg>"));
    }

    #[test]
    fn text_is_escaped() {
        let mut svg = SvgBuilder::new(10.0, 10.0);
        svg.text(0.0, 0.0, "<A&B>", 12.0, "normal", "black", "middle");
        assert!(svg.into_fragment().contains("&lt;A&amp;B&gt;"));
    }

    #[test]
    fn group_attributes_are_escaped() {
        let mut svg = SvgBuilder::new(10.0, 10.0);
        svg.begin_group(&[("data-action", "say \"hi\"")]);
        svg.end_group();
        let frag = svg.into_fragment();
        assert!(frag.starts_with(r#"<g data-action="say &quot;hi&quot;">"#));
        assert!(frag.ends_with("</g>"));
    }
}
