//! Error types for the native bridge.
//!
//! None of these reach the caller: the exported functions are infallible by
//! contract, so errors are logged or written to stderr at the boundary.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum BridgeError {
    #[error("logger already installed: {0}")]
    LoggerInit(#[from] log::SetLoggerError),

    #[error("panic in native entry point: {0}")]
    Panic(String),
}

pub type BridgeResult<T> = Result<T, BridgeError>;
