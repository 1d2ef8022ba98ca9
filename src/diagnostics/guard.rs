use std::panic::{self, AssertUnwindSafe};

use crate::config::LOG_TAG;
use crate::error::{BridgeError, BridgeResult};

/// Runs `body` and converts any panic into [`BridgeError::Panic`].
///
/// Unwinding into the JVM or a Dart isolate is undefined behavior, so every
/// exported function goes through here. The panic is logged at error level.
pub fn guard<F: FnOnce()>(entry: &str, body: F) -> BridgeResult<()> {
    panic::catch_unwind(AssertUnwindSafe(body)).map_err(|payload| {
        let msg = if let Some(s) = payload.downcast_ref::<&str>() {
            s.to_string()
        } else if let Some(s) = payload.downcast_ref::<String>() {
            s.clone()
        } else {
            "Unknown panic".to_string()
        };
        log::error!(target: LOG_TAG, "{}: panic caught: {}", entry, msg);
        BridgeError::Panic(msg)
    })
}
