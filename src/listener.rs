//! # SMS Notification Listener
//!
//! Native side of the listener. The operations are placeholders: they trace
//! their invocation and touch no state, so any call order or count is valid.

use crate::config::LOG_TAG;

/// Starts the SMS listener.
pub fn start_listener() {
    log::debug!(target: LOG_TAG, "Starting native SMS listener");
}

/// Stops the SMS listener.
pub fn stop_listener() {
    log::debug!(target: LOG_TAG, "Stopping native SMS listener");
}

/// Opens the system notification settings screen.
pub fn open_notification_settings() {
    log::debug!(target: LOG_TAG, "Opening notification settings");
}
