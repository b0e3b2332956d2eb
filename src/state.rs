//! Location state narrowing
//!
//! The router hands back whatever payload is attached to the current entry.
//! Each field is read only when the payload is an object and the field has
//! exactly the expected JSON type. Anything else is absence, not an error.

use serde_json::{Map, Value};

use crate::types::{Location, LocationState};

/// State key written by the landing marker
pub const LANDING_ROUTE_STATE_KEY: &str = "landingRoute";

/// State key carrying a caller-supplied return address
pub const BACK_URL_STATE_KEY: &str = "backUrl";

/// The envelope stamped onto a session's entry point
pub fn landing_route_state() -> LocationState {
    envelope(LANDING_ROUTE_STATE_KEY, Value::Bool(true))
}

/// The envelope to attach to an outgoing navigation so the destination can
/// return to `current_path`
pub fn build_return_state(current_path: &str) -> LocationState {
    envelope(BACK_URL_STATE_KEY, Value::String(current_path.to_string()))
}

pub fn extract_landing_flag(state: &LocationState) -> Option<bool> {
    state.as_object()?.get(LANDING_ROUTE_STATE_KEY)?.as_bool()
}

pub fn extract_back_url(state: &LocationState) -> Option<String> {
    state
        .as_object()?
        .get(BACK_URL_STATE_KEY)?
        .as_str()
        .map(str::to_string)
}

/// Whether `location` is the session's entry point.
///
/// Only a flag that is exactly `true` counts; `false` reads the same as absent.
pub fn is_landing_route(location: &Location) -> bool {
    extract_landing_flag(&location.state) == Some(true)
}

fn envelope(key: &str, value: Value) -> LocationState {
    let mut map = Map::new();
    map.insert(key.to_string(), value);
    Value::Object(map)
}

// =============================================================================
// Tests
// =============================================================================
