//! The environment mirror of a [`Store`](crate::Store).
//!
//! Every pair a store loads is copied here in overwrite mode, so after any
//! load the mirror holds each table key with the table's value. Lookups
//! through the store never come back to the mirror; it exists for other
//! code, such as child processes reading the real environment.

use std::collections::BTreeMap;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EnvMirror {
    sink: Sink,
}

#[derive(Debug, Clone, PartialEq, Eq)]
enum Sink {
    Process,
    Map(BTreeMap<String, String>),
}

impl Default for EnvMirror {
    fn default() -> Self {
        Self::memory()
    }
}

impl EnvMirror {
    /// Mirror into the real process environment.
    ///
    /// # Safety
    ///
    /// Writes go through [`std::env::set_var`]. While a store owning this
    /// mirror is loading, no other thread may read or write the process
    /// environment.
    pub unsafe fn process() -> Self {
        Self {
            sink: Sink::Process,
        }
    }

    /// Mirror into an empty map, leaving the process environment alone.
    pub fn memory() -> Self {
        Self::seeded(BTreeMap::new())
    }

    /// Mirror into a map that already holds variables. Loads overwrite
    /// colliding keys and leave the rest.
    pub fn seeded(map: BTreeMap<String, String>) -> Self {
        Self { sink: Sink::Map(map) }
    }

    pub fn is_process(&self) -> bool {
        matches!(self.sink, Sink::Process)
    }

    /// The backing map, or `None` for the process environment.
    pub fn as_map(&self) -> Option<&BTreeMap<String, String>> {
        match &self.sink {
            Sink::Map(map) => Some(map),
            Sink::Process => None,
        }
    }

    /// What other code sees for `key`. Non-UTF-8 process values are
    /// converted lossily.
    pub fn read(&self, key: &str) -> Option<String> {
        match &self.sink {
            Sink::Process => std::env::var_os(key).map(|raw| raw.to_string_lossy().into_owned()),
            Sink::Map(map) => map.get(key).cloned(),
        }
    }

    /// The parser only hands over keys that are non-empty and free of `=`
    /// and NUL, and values free of NUL, so `set_var` cannot panic here.
    pub(crate) fn write(&mut self, key: &str, value: &str) {
        match &mut self.sink {
            // SAFETY: `Sink::Process` is only built by the unsafe
            // `EnvMirror::process`, whose caller keeps other threads off the
            // environment during loads.
            Sink::Process => unsafe { std::env::set_var(key, value) },
            Sink::Map(map) => {
                map.insert(key.to_owned(), value.to_owned());
            }
        }
    }
}
