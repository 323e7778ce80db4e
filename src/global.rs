//! The process-wide store.
//!
//! One [`Store`] mirrored into the process environment, created on first use
//! and kept until exit. A single mutex guards loads and reads, so a load in
//! progress is never observed half-applied.

use std::path::Path;
use std::sync::{Mutex, MutexGuard, OnceLock, PoisonError};

use crate::env::EnvMirror;
use crate::error::Error;
use crate::store::Store;
use crate::value::FromEnvValue;

const DEFAULT_FILE: &str = ".env";

fn store() -> MutexGuard<'static, Store> {
    static STORE: OnceLock<Mutex<Store>> = OnceLock::new();
    STORE
        .get_or_init(|| {
            // SAFETY: building the mirror does not touch the environment.
            // Writes only happen inside `load`, whose caller guarantees
            // exclusive access.
            let mirror = unsafe { EnvMirror::process() };
            Mutex::new(Store::with_mirror(mirror))
        })
        .lock()
        .unwrap_or_else(PoisonError::into_inner)
}

/// Load `.env` from the current working directory into the process-wide
/// store and the process environment.
///
/// # Safety
///
/// See [`load`].
pub unsafe fn dotenv() {
    // SAFETY: forwarded to the caller.
    unsafe { load(DEFAULT_FILE) }
}

/// Load a dotenv file into the process-wide store and the process
/// environment, overwriting existing variables of the same name.
///
/// A missing or unreadable file is ignored. Repeated calls merge into the
/// same table.
///
/// # Safety
///
/// This mutates the process environment. The caller must ensure no other
/// threads concurrently read or write the environment while it runs. Calls
/// to [`get`] are not environment reads and may run concurrently.
pub unsafe fn load(path: impl AsRef<Path>) {
    store().load(path);
}

/// Read a variable from the process-wide store as `T`.
///
/// Returns `None` if nothing loaded `name` or its value does not parse as
/// `T`. Only the store is consulted, never the process environment.
pub fn get<T: FromEnvValue>(name: &str) -> Option<T> {
    store().get(name)
}

/// Like [`get`], but reports why the read failed.
pub fn try_get<T: FromEnvValue>(name: &str) -> Result<T, Error> {
    store().try_get(name)
}

/// Run `f` against the process-wide store while holding its lock.
///
/// Use this to read several values that must come from the same load.
pub fn with_store<R>(f: impl FnOnce(&Store) -> R) -> R {
    f(&store())
}
