//! Plain C-ABI exports, loaded by the Dart side through `dart:ffi`, plus the
//! forwarding bodies of the JNI methods.
//!
//! Symbol names are part of the host contract and must not change.

#![allow(non_snake_case)]

use crate::config::LOG_TAG;
use crate::diagnostics::{guard::guard, logging};
use crate::listener;

/// Shared body of every C export: make sure logging is up, then run `body`
/// under the panic guard.
fn export(entry: &str, body: fn()) {
    logging::init();
    // The exports have no error channel; a caught panic is already logged by `guard`.
    let _ = guard(entry, body);
}

#[no_mangle]
pub extern "C" fn nativeSmsListenerStart() {
    export("nativeSmsListenerStart", listener::start_listener);
}

#[no_mangle]
pub extern "C" fn nativeSmsListenerStop() {
    export("nativeSmsListenerStop", listener::stop_listener);
}

#[no_mangle]
pub extern "C" fn nativeOpenNotificationSettings() {
    export("nativeOpenNotificationSettings", listener::open_notification_settings);
}

// Bodies of the JNI methods. They trace the JNI hop and forward to the C
// exports above, which own the panic guard.

pub fn jni_start_listener() {
    logging::init();
    log::debug!(target: LOG_TAG, "JNI: Starting SMS listener");
    nativeSmsListenerStart();
}

pub fn jni_stop_listener() {
    logging::init();
    log::debug!(target: LOG_TAG, "JNI: Stopping SMS listener");
    nativeSmsListenerStop();
}

pub fn jni_open_notification_settings() {
    logging::init();
    log::debug!(target: LOG_TAG, "JNI: Opening notification settings");
    nativeOpenNotificationSettings();
}
