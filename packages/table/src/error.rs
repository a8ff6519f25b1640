//! Error types for path table construction, lookup and config loading.

use std::io;
use std::path::PathBuf;

/// Errors raised by [`PathTable`](crate::PathTable).
///
/// Construction errors (`DuplicateKey`, `EmptyKey`, `InvalidFragment`) are
/// fatal for the table being built. `UnknownKey` is handed to the caller,
/// which decides whether a missing section matters.
#[derive(thiserror::Error, Debug)]
pub enum Error {
    #[error("duplicate key '{key}' at position {position} (first declared at position {first})")]
    DuplicateKey {
        key: String,
        first: usize,
        position: usize,
    },

    #[error("unknown key '{0}'")]
    UnknownKey(String),

    #[error("empty key at position {position}")]
    EmptyKey { position: usize },

    #[error("invalid fragment '{fragment}' for key '{key}': {message}")]
    InvalidFragment {
        key: String,
        fragment: String,
        message: String,
    },

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("I/O error reading {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

impl Error {
    /// True for errors raised while building a table from entries.
    pub fn is_construction_error(&self) -> bool {
        matches!(
            self,
            Error::DuplicateKey { .. } | Error::EmptyKey { .. } | Error::InvalidFragment { .. }
        )
    }
}

pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;
    use std::error::Error as StdError;

    #[test]
    fn duplicate_key_display() {
        let e = Error::DuplicateKey {
            key: "REGION".to_string(),
            first: 3,
            position: 9,
        };
        let display = format!("{}", e);
        assert!(display.contains("duplicate key 'REGION'"));
        assert!(display.contains("position 9"));
        assert!(display.contains("position 3"));
    }

    #[test]
    fn unknown_key_display() {
        let e = Error::UnknownKey("missing".to_string());
        assert_eq!(format!("{}", e), "unknown key 'missing'");
    }

    #[test]
    fn invalid_fragment_display() {
        let e = Error::InvalidFragment {
            key: "FAMILY".to_string(),
            fragment: "/family".to_string(),
            message: "must be relative".to_string(),
        };
        let display = format!("{}", e);
        assert!(display.contains("'/family'"));
        assert!(display.contains("'FAMILY'"));
        assert!(display.contains("must be relative"));
    }

    #[test]
    fn io_error_display_and_source() {
        let e = Error::Io {
            path: PathBuf::from("split.json"),
            source: io::Error::new(io::ErrorKind::NotFound, "gone"),
        };
        assert!(format!("{}", e).contains("split.json"));
        assert!(StdError::source(&e).is_some());
    }

    #[test]
    fn json_error_conversion() {
        let json_err = serde_json::from_str::<Vec<u8>>("{").unwrap_err();
        let e: Error = json_err.into();
        assert!(matches!(e, Error::Json(_)));
        assert!(format!("{}", e).starts_with("JSON error"));
        assert!(!e.is_construction_error());
    }

    #[test]
    fn construction_errors_are_classified() {
        assert!(Error::EmptyKey { position: 0 }.is_construction_error());
        assert!(!Error::UnknownKey("x".to_string()).is_construction_error());
    }
}
