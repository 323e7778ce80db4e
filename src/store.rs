use std::collections::BTreeMap;
use std::path::Path;

use tracing::{debug, trace};

use crate::env::EnvMirror;
use crate::error::Error;
use crate::model::{Entry, LoadReport};
use crate::parser::parse_str_with_source;
use crate::value::FromEnvValue;

/// A table of loaded variables and the mirror it writes through to.
///
/// Loads upsert: later assignments replace earlier ones, and keys from
/// earlier loads stay unless a later load assigns them again.
#[derive(Debug, Clone, Default)]
pub struct Store {
    vars: BTreeMap<String, String>,
    mirror: EnvMirror,
}

impl Store {
    /// Create an empty store with an in-memory mirror.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_mirror(mirror: EnvMirror) -> Self {
        Self {
            vars: BTreeMap::new(),
            mirror,
        }
    }

    /// Load a dotenv file, ignoring a missing, unreadable or non-UTF-8 file.
    ///
    /// On failure the table is left as it was and the report is empty.
    pub fn load(&mut self, path: impl AsRef<Path>) -> LoadReport {
        let path = path.as_ref();
        match self.try_load(path) {
            Ok(report) => report,
            Err(err) => {
                debug!(path = %path.display(), error = %err, "ignoring dotenv file");
                LoadReport::default()
            }
        }
    }

    /// Load a dotenv file, reporting why it could not be read.
    pub fn try_load(&mut self, path: impl AsRef<Path>) -> Result<LoadReport, Error> {
        let path = path.as_ref();
        let bytes = std::fs::read(path)?;
        let content = std::str::from_utf8(&bytes)?;

        let parsed = parse_str_with_source(content, Some(path));
        let report = LoadReport {
            loaded: self.apply(parsed.entries),
            skipped: parsed.skipped,
            files_read: 1,
        };
        debug!(
            path = %path.display(),
            loaded = report.loaded,
            skipped = report.skipped,
            "loaded dotenv file"
        );
        Ok(report)
    }

    /// Apply dotenv text that has already been read.
    pub fn load_str(&mut self, input: &str) -> LoadReport {
        let parsed = parse_str_with_source(input, None);
        LoadReport {
            loaded: self.apply(parsed.entries),
            skipped: parsed.skipped,
            files_read: 0,
        }
    }

    fn apply(&mut self, entries: Vec<Entry>) -> usize {
        let loaded = entries.len();
        for entry in entries {
            self.mirror.write(&entry.key, &entry.value);
            self.vars.insert(entry.key, entry.value);
        }
        loaded
    }

    /// Read `name` as `T`, or `None` if it is missing or does not parse.
    pub fn get<T: FromEnvValue>(&self, name: &str) -> Option<T> {
        self.try_get(name).ok()
    }

    /// Read `name` as `T`, reporting whether it was missing or invalid.
    pub fn try_get<T: FromEnvValue>(&self, name: &str) -> Result<T, Error> {
        let raw = self
            .get_raw(name)
            .ok_or_else(|| Error::Missing(name.to_owned()))?;
        T::from_env_value(raw).ok_or_else(|| {
            let expected = T::NAME;
            trace!(key = name, expected, "stored value does not parse");
            Error::InvalidValue {
                key: name.to_owned(),
                value: raw.to_owned(),
                expected,
            }
        })
    }

    pub fn get_raw(&self, name: &str) -> Option<&str> {
        self.vars.get(name).map(String::as_str)
    }

    pub fn contains_key(&self, name: &str) -> bool {
        self.vars.contains_key(name)
    }

    pub fn len(&self) -> usize {
        self.vars.len()
    }

    pub fn is_empty(&self) -> bool {
        self.vars.is_empty()
    }

    /// Iterate over the table in key order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.vars
            .iter()
            .map(|(key, value)| (key.as_str(), value.as_str()))
    }

    pub fn mirror(&self) -> &EnvMirror {
        &self.mirror
    }
}
