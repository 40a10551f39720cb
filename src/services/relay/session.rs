//! Session Identifiers

use chrono::Utc;
use uuid::Uuid;

/// `session-<unix millis>-<8 hex chars>`
pub fn generate_session_id() -> String {
    let suffix = Uuid::new_v4().simple().to_string();
    format!("session-{}-{}", Utc::now().timestamp_millis(), &suffix[..8])
}

/// Use the caller's session id when it is non-blank, else generate one.
pub fn resolve_session_id(supplied: Option<&str>) -> String {
    match supplied.map(str::trim) {
        Some(id) if !id.is_empty() => id.to_string(),
        _ => generate_session_id(),
    }
}
