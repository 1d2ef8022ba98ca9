//! # Native Diagnostics and Logging
//!
//! This module coordinates native-side logging and the panic guard that keeps
//! unwinds from crossing the FFI boundary.

pub mod guard;
pub mod logging;
