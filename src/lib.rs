//! chordview — chord display widget for piano and guitar.
//!
//! Shows a major or minor triad as highlighted piano keys and as a guitar
//! chord diagram, with a root-note selector, a major/minor toggle and a
//! light/dark theme toggle. The widget renders to a self-contained SVG
//! string; the host feeds user interaction back as [`Action`]s.
//!
//! # Example
//! ```
//! use chordview::{render_widget_to_svg, Action, NoteName, RenderOptions, WidgetState};
//!
//! let state = WidgetState::default()
//!     .apply(Action::SelectRoot { root: NoteName::A })
//!     .apply(Action::ToggleQuality);
//! assert_eq!(state.view().label, "Am");
//!
//! let svg = render_widget_to_svg(&state, &RenderOptions::default());
//! assert!(svg.contains("Guitar - Am Chord"));
//! ```

pub mod chord;
pub mod error;
pub mod model;
pub mod options;
pub mod renderer;
pub mod widget;

#[cfg(target_os = "android")]
pub mod android;

pub use chord::{chord_notes, chord_tone_names, fret_positions, string_note, ChordShapes};
pub use error::ChordError;
pub use model::*;
pub use options::{NoteRange, RenderOptions};
pub use renderer::icons::{IconRenderer, SvgIcons, ThemeIcon};
pub use renderer::keyboard::{KeyInfo, KeyboardRenderer, KeyboardRequest, SvgKeyboard};
pub use renderer::layout::{Rect, WidgetLayout};
pub use renderer::{hit_test, render_fretboard_to_svg, render_widget_to_svg, render_widget_with, widget_layout};
pub use widget::{ChordView, ChordWidget, DocumentClasses, ThemeHost, DARK_MODE_CLASS};

/// Parse widget state from JSON. `None` or blank input yields the default
/// state (C major, dark mode).
pub fn parse_state(json: Option<&str>) -> Result<WidgetState, ChordError> {
    match json.map(str::trim) {
        None | Some("") => Ok(WidgetState::default()),
        Some(json) => Ok(serde_json::from_str(json)?),
    }
}

/// Convert widget state to a JSON string.
pub fn state_to_json(state: &WidgetState) -> Result<String, ChordError> {
    Ok(serde_json::to_string(state)?)
}

/// Apply a JSON-encoded action to a JSON-encoded state and return the new
/// state as JSON. Useful for passing data across FFI boundaries.
pub fn dispatch_json(state_json: Option<&str>, action_json: &str) -> Result<String, ChordError> {
    let state = parse_state(state_json)?;
    let action: Action = serde_json::from_str(action_json)?;
    state_to_json(&state.apply(action))
}

/// Render a JSON-encoded state to SVG.
pub fn render_state_json(state_json: Option<&str>, options: &RenderOptions) -> Result<String, ChordError> {
    options.validate()?;
    let state = parse_state(state_json)?;
    Ok(render_widget_to_svg(&state, options))
}

/// Resolve a tap to a JSON-encoded action, `None` when nothing was hit.
pub fn hit_test_json(options: &RenderOptions, x: f64, y: f64) -> Result<Option<String>, ChordError> {
    options.validate()?;
    hit_test(options, x, y)
        .map(|action| serde_json::to_string(&action))
        .transpose()
        .map_err(ChordError::from)
}

// ═══════════════════════════════════════════════════════════════════════
// C FFI — for iOS (static library) and Android (JNI)
// ═══════════════════════════════════════════════════════════════════════

use std::ffi::{CStr, CString};
use std::os::raw::c_char;

/// Read an optional C string argument. Null means "absent".
///
/// # Safety
/// `ptr` must be null or a valid null-terminated C string.
unsafe fn opt_str<'a>(ptr: *const c_char) -> Result<Option<&'a str>, ChordError> {
    if ptr.is_null() {
        return Ok(None);
    }
    unsafe { CStr::from_ptr(ptr) }
        .to_str()
        .map(Some)
        .map_err(|e| ChordError::InvalidArgument(format!("not UTF-8: {e}")))
}

fn into_c_string(result: Result<String, ChordError>, call: &str) -> *mut c_char {
    match result {
        Ok(s) => CString::new(s).unwrap_or_default().into_raw(),
        Err(e) => {
            tracing::warn!(call, error = %e, "chordview call failed");
            std::ptr::null_mut()
        }
    }
}

/// Render the widget for a JSON state and return SVG as a C string.
/// The caller must free the returned string with `chordview_free_string`.
///
/// `state_json` may be null for the default state. `page_width` sets the
/// SVG width in user units; pass 0.0 to use the default.
///
/// # Safety
/// `state_json` must be null or a valid null-terminated UTF-8 C string.
#[no_mangle]
pub unsafe extern "C" fn chordview_render(state_json: *const c_char, page_width: f64) -> *mut c_char {
    let result = unsafe { opt_str(state_json) }
        .and_then(|json| render_state_json(json, &RenderOptions::with_width(page_width)));
    into_c_string(result, "chordview_render")
}

/// Apply a JSON action to a JSON state and return the new state JSON.
/// The caller must free the returned string with `chordview_free_string`.
///
/// # Safety
/// `state_json` must be null or a valid C string; `action_json` must be a
/// valid null-terminated UTF-8 C string.
#[no_mangle]
pub unsafe extern "C" fn chordview_dispatch(
    state_json: *const c_char,
    action_json: *const c_char,
) -> *mut c_char {
    if action_json.is_null() {
        return std::ptr::null_mut();
    }
    let result = unsafe { opt_str(state_json) }.and_then(|state| {
        let action = unsafe { opt_str(action_json) }?.unwrap_or_default();
        dispatch_json(state, action)
    });
    into_c_string(result, "chordview_dispatch")
}

/// Resolve a tap at (`x`, `y`) on a widget rendered at `page_width` and
/// return the action JSON, or null when the tap hits nothing.
/// The caller must free the returned string with `chordview_free_string`.
#[no_mangle]
pub extern "C" fn chordview_hit_test(page_width: f64, x: f64, y: f64) -> *mut c_char {
    match hit_test_json(&RenderOptions::with_width(page_width), x, y) {
        Ok(Some(json)) => into_c_string(Ok(json), "chordview_hit_test"),
        Ok(None) => std::ptr::null_mut(),
        Err(e) => into_c_string(Err(e), "chordview_hit_test"),
    }
}

/// Free a string previously returned by chordview functions.
///
/// # Safety
/// `ptr` must be a string previously returned by a chordview function, or null.
#[no_mangle]
pub unsafe extern "C" fn chordview_free_string(ptr: *mut c_char) {
    if !ptr.is_null() {
        unsafe {
            let _ = CString::from_raw(ptr);
        }
    }
}
