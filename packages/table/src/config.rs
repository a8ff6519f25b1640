//! JSON config files for path tables.
//!
//! A config is an array of `{"key": ..., "fragment": ...}` objects in
//! declaration order. An object keyed by section name would lose both order
//! and duplicate detection, so it is not accepted.

use std::fs;
use std::io;
use std::path::Path;

use serde::Deserialize;

use crate::error::{Error, Result};
use crate::table::PathTable;

/// Unvalidated config entry. Validation happens in `PathTable::from_pairs`.
#[derive(Deserialize)]
struct RawEntry {
    key: String,
    fragment: String,
}

impl PathTable {
    /// Parse and validate a table from JSON text.
    pub fn from_json_str(s: &str) -> Result<Self> {
        let raw: Vec<RawEntry> = serde_json::from_str(s)?;
        Self::from_raw(raw)
    }

    /// Parse and validate a table from a JSON reader.
    pub fn from_json_reader<R: io::Read>(reader: R) -> Result<Self> {
        let raw: Vec<RawEntry> = serde_json::from_reader(io::BufReader::new(reader))?;
        Self::from_raw(raw)
    }

    fn from_raw(raw: Vec<RawEntry>) -> Result<Self> {
        PathTable::from_pairs(raw.into_iter().map(|e| (e.key, e.fragment)))
    }

    /// Read a table from a JSON config file.
    pub fn from_json_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        log::debug!("Reading {}...", path.display());

        let text = fs::read_to_string(path).map_err(|source| Error::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_json_str(&text)
    }

    /// Render the table in the config format.
    pub fn to_json_string_pretty(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}
