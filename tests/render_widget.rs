//! Rendering tests — render widget states to SVG and inspect the output.

use chordview::{
    fret_positions, hit_test, render_fretboard_to_svg, render_widget_to_svg, render_widget_with,
    widget_layout, Action, ChordError, ChordQuality, FretPosition, IconRenderer, KeyInfo,
    KeyboardRenderer, KeyboardRequest, NoteName, RenderOptions, SvgIcons, ThemeIcon, WidgetState,
};
use pretty_assertions::assert_eq;
use std::cell::RefCell;
use std::path::PathBuf;

fn output_dir() -> PathBuf {
    let dir = PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("test_output");
    std::fs::create_dir_all(&dir).ok();
    dir
}

fn state(root: NoteName, quality: ChordQuality, dark_mode: bool) -> WidgetState {
    let mut state = WidgetState::default().select_root(root);
    if quality == ChordQuality::Minor {
        state = state.toggle_quality();
    }
    if !dark_mode {
        state = state.toggle_theme();
    }
    state
}

/// Text content of every `<text>` element, in document order.
fn texts(doc: &roxmltree::Document) -> Vec<String> {
    doc.descendants()
        .filter(|n| n.has_tag_name("text"))
        .filter_map(|n| n.text().map(str::to_string))
        .collect()
}

fn group_with_class<'a, 'i>(
    doc: &'a roxmltree::Document<'i>,
    class: &str,
) -> roxmltree::Node<'a, 'i> {
    doc.descendants()
        .find(|n| n.has_tag_name("g") && n.attribute("class") == Some(class))
        .unwrap_or_else(|| panic!("no <g class=\"{class}\">"))
}

#[test]
fn render_default_widget() {
    let svg = render_widget_to_svg(&WidgetState::default(), &RenderOptions::default());
    let doc = roxmltree::Document::parse(&svg).expect("SVG should be well-formed XML");
    let root = doc.root_element();

    assert_eq!(root.tag_name().name(), "svg");
    assert_eq!(root.attribute("class"), Some("dark-mode"));
    assert_eq!(root.attribute("width"), Some("760"));

    let texts = texts(&doc);
    assert!(texts.contains(&"Interactive Chord Display".to_string()));
    assert!(texts.contains(&"Piano - C Chord".to_string()));
    assert!(texts.contains(&"Guitar - C Chord".to_string()));
    assert!(texts.contains(&"Switch to Minor".to_string()));

    let out = output_dir().join("c-major-dark.svg");
    std::fs::write(&out, &svg).expect("Failed to write SVG");
    println!("✓ Rendered c-major-dark.svg ({} bytes)", svg.len());
}

#[test]
fn every_root_has_a_button() {
    let svg = render_widget_to_svg(&WidgetState::default(), &RenderOptions::default());
    let doc = roxmltree::Document::parse(&svg).unwrap();
    let actions: Vec<&str> = doc
        .descendants()
        .filter_map(|n| n.attribute("data-action"))
        .filter(|a| a.starts_with("select-root:"))
        .collect();
    let expected: Vec<String> = NoteName::ALL
        .iter()
        .map(|n| format!("select-root:{n}"))
        .collect();
    assert_eq!(actions, expected);

    let selected: Vec<_> = doc
        .descendants()
        .filter(|n| n.attribute("class") == Some("note-button selected"))
        .collect();
    assert_eq!(selected.len(), 1);
    assert_eq!(selected[0].attribute("data-action"), Some("select-root:C"));
}

#[test]
fn a_major_piano_keys_and_labels() {
    let svg = render_widget_to_svg(
        &state(NoteName::A, ChordQuality::Major, true),
        &RenderOptions::default(),
    );
    let doc = roxmltree::Document::parse(&svg).unwrap();
    let piano = group_with_class(&doc, "piano");

    let labels: Vec<&str> = piano
        .descendants()
        .filter(|n| n.has_tag_name("text"))
        .filter_map(|n| n.text())
        .collect();
    // White keys (A, E) are drawn before black keys (C#)
    assert_eq!(labels, vec!["A", "E", "C#"]);

    let keys = piano.descendants().filter(|n| n.has_tag_name("rect")).count();
    assert_eq!(keys, 24);
}

#[test]
fn c_minor_fretboard() {
    let svg = render_widget_to_svg(
        &state(NoteName::C, ChordQuality::Minor, true),
        &RenderOptions::default(),
    );
    let doc = roxmltree::Document::parse(&svg).unwrap();
    assert!(texts(&doc).contains(&"Guitar - Cm Chord".to_string()));
    assert!(texts(&doc).contains(&"Switch to Major".to_string()));

    let board = group_with_class(&doc, "fretboard");
    // x 3 5 5 4 3 reaches fret 5, so the diagram starts at fret 3
    assert_eq!(board.attribute("data-base-fret"), Some("3"));

    let labels: Vec<&str> = board
        .descendants()
        .filter(|n| n.has_tag_name("text") && n.attribute("font-size") == Some("12"))
        .filter_map(|n| n.text())
        .collect();
    assert_eq!(labels, vec!["C", "G", "C", "D#", "G"]);
}

#[test]
fn fretboard_structure() {
    let shape = fret_positions(NoteName::C, ChordQuality::Major);
    let svg = render_fretboard_to_svg(&shape, true).unwrap();
    let doc = roxmltree::Document::parse(&svg).unwrap();
    let board = group_with_class(&doc, "fretboard");

    let lines: Vec<_> = board.descendants().filter(|n| n.has_tag_name("line")).collect();
    // nut + 4 frets + 6 strings
    assert_eq!(lines.len(), 11);
    assert_eq!(lines[0].attribute("stroke-width"), Some("4.0"));
    assert!(lines[1..5].iter().all(|l| l.attribute("stroke-width") == Some("2.0")));
    assert!(lines[5..].iter().all(|l| l.attribute("stroke-width") == Some("1.0")));

    // C major: x 3 2 0 1 0 → 1 muted, 2 open, 3 fretted, orientation dot
    let circles: Vec<_> = board.descendants().filter(|n| n.has_tag_name("circle")).collect();
    assert_eq!(circles.len(), 6);
    let open = circles.iter().filter(|c| c.attribute("fill") == Some("none")).count();
    assert_eq!(open, 2);
    let texts = texts(&doc);
    assert_eq!(texts.iter().filter(|t| t.as_str() == "×").count(), 1);
}

#[test]
fn fretted_dots_stay_inside_the_diagram() {
    for quality in ChordQuality::ALL {
        for root in NoteName::ALL {
            let svg = render_fretboard_to_svg(&fret_positions(root, quality), false).unwrap();
            let doc = roxmltree::Document::parse(&svg).unwrap();
            let height: f64 = doc.root_element().attribute("height").unwrap().parse().unwrap();
            for circle in doc.descendants().filter(|n| n.has_tag_name("circle")) {
                let cy: f64 = circle.attribute("cy").unwrap().parse().unwrap();
                let r: f64 = circle.attribute("r").unwrap().parse().unwrap();
                assert!(cy - r >= 0.0 && cy + r <= height, "{root} {quality}: circle at {cy}");
            }
        }
    }
}

#[test]
fn standalone_fretboard_rejects_undrawable_shapes() {
    use FretPosition::*;
    let zero_fret = [Fretted(0), Open, Open, Open, Open, Open];
    assert!(matches!(
        render_fretboard_to_svg(&zero_fret, true),
        Err(ChordError::InvalidFretPosition(_))
    ));
    let stretch = [Fretted(1), Fretted(9), Muted, Muted, Muted, Muted];
    assert!(matches!(
        render_fretboard_to_svg(&stretch, true),
        Err(ChordError::DiagramOverflow { low: 1, high: 9 })
    ));
}

#[test]
fn standalone_fretboard_windows_a_custom_high_shape() {
    use FretPosition::*;
    let shape = [Muted, Fretted(7), Fretted(9), Fretted(9), Fretted(8), Fretted(7)];
    let svg = render_fretboard_to_svg(&shape, true).unwrap();
    let doc = roxmltree::Document::parse(&svg).unwrap();
    let board = group_with_class(&doc, "fretboard");
    assert_eq!(board.attribute("data-base-fret"), Some("7"));
    for circle in doc.descendants().filter(|n| n.has_tag_name("circle")) {
        let cy: f64 = circle.attribute("cy").unwrap().parse().unwrap();
        assert!(cy + 8.0 <= 230.0, "circle at {cy}");
    }
}

#[test]
fn theme_toggle_inverts_diagram_colors() {
    let dark_state = state(NoteName::G, ChordQuality::Major, true);
    let light_state = dark_state.toggle_theme();
    let options = RenderOptions::default();

    let dark = render_widget_to_svg(&dark_state, &options);
    let light = render_widget_to_svg(&light_state, &options);

    let dark_doc = roxmltree::Document::parse(&dark).unwrap();
    let light_doc = roxmltree::Document::parse(&light).unwrap();

    let strokes = |doc: &roxmltree::Document| -> Vec<String> {
        group_with_class(doc, "fretboard")
            .descendants()
            .filter(|n| n.has_tag_name("line"))
            .filter_map(|n| n.attribute("stroke").map(str::to_string))
            .collect()
    };
    assert!(strokes(&dark_doc).iter().all(|s| s == "white"));
    assert!(strokes(&light_doc).iter().all(|s| s == "black"));

    assert_eq!(light_doc.root_element().attribute("class"), None);
    // Selection is untouched, so headings match
    assert!(texts(&light_doc).contains(&"Guitar - G Chord".to_string()));

    let icon = |doc: &roxmltree::Document| {
        group_with_class(doc, "theme-toggle")
            .descendants()
            .find_map(|n| n.attribute("class").filter(|c| c.starts_with("icon-")))
            .map(str::to_string)
    };
    assert_eq!(icon(&dark_doc).as_deref(), Some("icon-sun"));
    assert_eq!(icon(&light_doc).as_deref(), Some("icon-moon"));

    std::fs::write(output_dir().join("g-major-light.svg"), &light).expect("Failed to write SVG");
}

#[test]
fn hit_test_matches_rendered_buttons() {
    for width in [0.0, 390.0, 1024.0] {
        let options = RenderOptions::with_width(width);
        let layout = widget_layout(&options);

        for (note, rect) in &layout.note_buttons {
            let (x, y) = rect.center();
            assert_eq!(hit_test(&options, x, y), Some(Action::SelectRoot { root: *note }));
        }
        let (x, y) = layout.quality_button.center();
        assert_eq!(hit_test(&options, x, y), Some(Action::ToggleQuality));
        let (x, y) = layout.theme_button.center();
        assert_eq!(hit_test(&options, x, y), Some(Action::ToggleTheme));

        let (x, y) = layout.piano.center();
        assert_eq!(hit_test(&options, x, y), None);
    }
}

#[test]
fn narrow_render_wraps_and_keeps_all_buttons() {
    let svg = render_widget_to_svg(&WidgetState::default(), &RenderOptions::with_width(390.0));
    let doc = roxmltree::Document::parse(&svg).unwrap();
    assert_eq!(doc.root_element().attribute("width"), Some("390"));
    let buttons = doc
        .descendants()
        .filter(|n| n.attribute("class").is_some_and(|c| c.starts_with("note-button")))
        .count();
    assert_eq!(buttons, 12);
    std::fs::write(output_dir().join("c-major-phone.svg"), &svg).expect("Failed to write SVG");
}

fn title_font_size(width: f64) -> f64 {
    let svg = render_widget_to_svg(&WidgetState::default(), &RenderOptions::with_width(width));
    let doc = roxmltree::Document::parse(&svg).unwrap();
    let title = doc
        .descendants()
        .find(|n| n.has_tag_name("text") && n.text() == Some("Interactive Chord Display"))
        .expect("title text");
    title.attribute("font-size").unwrap().parse().unwrap()
}

#[test]
fn title_shrinks_on_phone_width() {
    assert_eq!(title_font_size(0.0), 28.0);
    let phone = title_font_size(390.0);
    assert!(phone < 28.0, "title font size {phone} at width 390");
    // 25 bold characters must end before the theme toggle at x = 346
    assert!(30.0 + 25.0 * 0.6 * phone <= 346.0);
}

// ═══════════════════════════════════════════════════════════════════════
// Collaborators
// ═══════════════════════════════════════════════════════════════════════

/// Records what the widget asks of its keyboard instead of drawing it.
#[derive(Default)]
struct RecordingKeyboard {
    calls: RefCell<Vec<(u8, u8, Vec<u8>, Vec<String>)>>,
}

impl KeyboardRenderer for RecordingKeyboard {
    fn render_keyboard(
        &self,
        request: &KeyboardRequest<'_>,
        label: &dyn Fn(&KeyInfo) -> Option<String>,
    ) -> String {
        let labels = request
            .range
            .iter()
            .filter_map(|midi| {
                label(&KeyInfo {
                    midi,
                    is_active: request.active.contains(&midi),
                    is_accidental: NoteName::from_midi(midi).is_accidental(),
                    key_width: 10.0,
                })
            })
            .collect();
        self.calls.borrow_mut().push((
            request.range.first,
            request.range.last,
            request.active.to_vec(),
            labels,
        ));
        r#"<g class="recorded-keyboard"/>"#.to_string()
    }
}

struct TextIcons;

impl IconRenderer for TextIcons {
    fn render_icon(&self, icon: ThemeIcon, x: f64, y: f64, _size: f64, _color: &str) -> String {
        format!(r#"<text x="{x}" y="{y}">{icon:?}</text>"#)
    }
}

#[test]
fn keyboard_collaborator_receives_range_active_keys_and_labels() {
    let keyboard = RecordingKeyboard::default();
    let svg = render_widget_with(
        &state(NoteName::B, ChordQuality::Minor, false),
        &RenderOptions::default(),
        &keyboard,
        &TextIcons,
    );

    let calls = keyboard.calls.borrow();
    assert_eq!(calls.len(), 1);
    let (first, last, active, labels) = &calls[0];
    assert_eq!((*first, *last), (60, 83));
    assert_eq!(active, &vec![71, 74, 78]);
    assert_eq!(labels, &vec!["B".to_string(), "D".to_string(), "F#".to_string()]);

    assert!(svg.contains(r#"<g class="recorded-keyboard"/>"#));
    assert!(svg.contains(">Moon</text>"));
}

#[test]
fn builtin_icons_use_host_text_color() {
    let frag = SvgIcons.render_icon(ThemeIcon::Sun, 0.0, 0.0, 24.0, "var(--text-color, #fff)");
    assert_eq!(frag.matches("<path").count(), 9);
    assert!(frag.contains("stroke: var(--text-color, #fff)"));
}
