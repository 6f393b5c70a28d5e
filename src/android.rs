//! JNI bindings for Android.
//!
//! These functions are called from Kotlin via the JNI bridge. State and
//! actions cross the boundary as JSON strings; a null state means the
//! default widget state.

use jni::objects::{JClass, JString};
use jni::sys::{jfloat, jstring};
use jni::JNIEnv;

use crate::{dispatch_json, hit_test_json, render_state_json, ChordError, RenderOptions};

/// Read a nullable Java string. A null reference is `None`; a reference the
/// JVM fails to decode is an error.
fn optional_string(env: &mut JNIEnv, value: &JString) -> Result<Option<String>, ChordError> {
    if value.is_null() {
        return Ok(None);
    }
    match env.get_string(value) {
        Ok(s) => Ok(Some(s.into())),
        Err(e) => Err(ChordError::InvalidArgument(format!("unreadable Java string: {e}"))),
    }
}

fn dispatch_strings(
    env: &mut JNIEnv,
    state_json: &JString,
    action_json: &JString,
) -> Result<String, ChordError> {
    let state = optional_string(env, state_json)?;
    let action = optional_string(env, action_json)?
        .ok_or_else(|| ChordError::InvalidArgument("action JSON is null".to_string()))?;
    dispatch_json(state.as_deref(), &action)
}

fn to_jstring(env: &mut JNIEnv, result: Result<String, ChordError>, call: &str) -> jstring {
    let text = match result {
        Ok(text) => text,
        Err(e) => {
            tracing::warn!(call, error = %e, "chordview JNI call failed");
            return std::ptr::null_mut();
        }
    };
    match env.new_string(&text) {
        Ok(js) => js.into_raw(),
        Err(e) => {
            tracing::warn!(call, error = %e, "chordview JNI string allocation failed");
            std::ptr::null_mut()
        }
    }
}

/// Render the widget for a JSON state to SVG.
///
/// Called from Kotlin as:
///   external fun render(stateJson: String?, pageWidth: Float): String?
#[no_mangle]
pub extern "system" fn Java_com_chordview_app_ChordView_render(
    mut env: JNIEnv,
    _class: JClass,
    state_json: JString,
    page_width: jfloat,
) -> jstring {
    let options = RenderOptions::with_width(page_width as f64);
    let result = optional_string(&mut env, &state_json)
        .and_then(|state| render_state_json(state.as_deref(), &options));
    to_jstring(&mut env, result, "render")
}

/// Apply an action to a state, returning the new state JSON.
///
/// Called from Kotlin as:
///   external fun dispatch(stateJson: String?, actionJson: String): String?
#[no_mangle]
pub extern "system" fn Java_com_chordview_app_ChordView_dispatch(
    mut env: JNIEnv,
    _class: JClass,
    state_json: JString,
    action_json: JString,
) -> jstring {
    let result = dispatch_strings(&mut env, &state_json, &action_json);
    to_jstring(&mut env, result, "dispatch")
}

/// Resolve a tap to an action JSON, or null when nothing was hit.
///
/// Called from Kotlin as:
///   external fun hitTest(pageWidth: Float, x: Float, y: Float): String?
#[no_mangle]
pub extern "system" fn Java_com_chordview_app_ChordView_hitTest(
    mut env: JNIEnv,
    _class: JClass,
    page_width: jfloat,
    x: jfloat,
    y: jfloat,
) -> jstring {
    let options = RenderOptions::with_width(page_width as f64);
    match hit_test_json(&options, x as f64, y as f64) {
        Ok(Some(json)) => to_jstring(&mut env, Ok(json), "hitTest"),
        Ok(None) => std::ptr::null_mut(),
        Err(e) => to_jstring(&mut env, Err(e), "hitTest"),
    }
}
