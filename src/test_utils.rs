//! Shared helpers for unit tests.

use std::sync::{Mutex, MutexGuard, PoisonError};

/// Serializes tests that mutate the process environment; `cargo test` runs
/// test functions on parallel threads and the environment is process-global.
static ENV_MUTEX: Mutex<()> = Mutex::new(());

/// Take the environment lock for the duration of a test.
///
/// A poisoned lock is fine to reuse: a failed env test leaves no state the
/// next test does not overwrite itself.
pub fn env_lock() -> MutexGuard<'static, ()> {
    ENV_MUTEX.lock().unwrap_or_else(PoisonError::into_inner)
}
