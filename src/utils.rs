// Utility modules

use serde::Serialize;

/// Two-space indented JSON used when echoing envelopes back to the user.
pub fn pretty_json<T: Serialize>(value: &T) -> String {
    serde_json::to_string_pretty(value).unwrap_or_else(|e| {
        tracing::warn!("Failed to pretty-print JSON: {}", e);
        String::new()
    })
}
