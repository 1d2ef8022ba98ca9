//! # Native Logging Backend
//!
//! Installs a `log` facade backend for the bridge. On Android this is logcat
//! via `android_logger`, tagged `SmsNotificationListener`; on host builds the
//! records go to stderr through `env_logger`.

use std::sync::Once;

use crate::config::LogConfig;
use crate::error::BridgeResult;

/// Initializes the native logger.
///
/// Idempotent; every exported entry point calls it before logging so that
/// traces are captured no matter which function the host invokes first.
pub fn init() {
    static START: Once = Once::new();
    START.call_once(|| {
        if let Err(e) = init_internal(&LogConfig::from_env()) {
            eprintln!("Rust Logging: Initialization failed: {}", e);
        }
    });
}

#[cfg(target_os = "android")]
fn init_internal(config: &LogConfig) -> BridgeResult<()> {
    android_logger::init_once(
        android_logger::Config::default()
            .with_max_level(config.level)
            .with_tag(config.tag),
    );
    Ok(())
}

#[cfg(not(target_os = "android"))]
fn init_internal(config: &LogConfig) -> BridgeResult<()> {
    env_logger::Builder::new()
        .filter_level(config.level)
        .try_init()?;
    Ok(())
}
