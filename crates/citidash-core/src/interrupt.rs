//! Ctrl+C handling for non-interactive commands.
//!
//! The handler only sets a flag. Long-running batch work (archive
//! extraction) polls [`is_interrupted`] between units of work and stops
//! with [`InterruptedError`]. In raw mode the dashboard receives Ctrl+C as a
//! key event; the flag only catches a SIGINT sent from outside.

use std::sync::atomic::{AtomicBool, Ordering};

use anyhow::{Context, Result};

static INTERRUPTED: AtomicBool = AtomicBool::new(false);

#[derive(Debug)]
pub struct InterruptedError;

impl std::fmt::Display for InterruptedError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Interrupted")
    }
}

impl std::error::Error for InterruptedError {}

/// Installs the Ctrl+C handler. A second Ctrl+C exits immediately.
///
/// # Errors
/// Returns an error if a handler is already registered for this process.
pub fn init() -> Result<()> {
    ctrlc::set_handler(trigger_ctrl_c).context("Error setting Ctrl+C handler")
}

/// Requests an interrupt, force-exiting on a second request.
pub fn trigger_ctrl_c() {
    if INTERRUPTED.swap(true, Ordering::SeqCst) {
        std::process::exit(130);
    }
}

/// Checks if an interrupt has been requested.
pub fn is_interrupted() -> bool {
    INTERRUPTED.load(Ordering::SeqCst)
}

/// Returns `Err(InterruptedError)` if an interrupt has been requested.
///
/// # Errors
/// Returns `InterruptedError` after Ctrl+C.
pub fn check() -> Result<(), InterruptedError> {
    if is_interrupted() {
        Err(InterruptedError)
    } else {
        Ok(())
    }
}

/// Resets the interrupt flag.
pub fn reset() {
    INTERRUPTED.store(false, Ordering::SeqCst);
}
