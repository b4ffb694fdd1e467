//! User Notices

use leptos::prelude::*;

/// Show `message` in a blocking browser alert
pub fn alert(message: &str) {
    if let Err(e) = window().alert_with_message(message) {
        tracing::warn!(error = ?e, %message, "Alert could not be shown");
    }
}
