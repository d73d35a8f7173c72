// src/shared.rs
use crate::logger::Logger;
use once_cell::sync::Lazy;
use std::sync::{Mutex, MutexGuard, PoisonError};

static LOGGER: Lazy<Mutex<Logger>> = Lazy::new(|| Mutex::new(Logger::default()));

/// The process-wide logger, created on first use with timestamps enabled.
///
/// Holding the guard serializes access; drop it before logging from another
/// thread.
pub fn logger() -> MutexGuard<'static, Logger> {
    LOGGER.lock().unwrap_or_else(PoisonError::into_inner)
}
