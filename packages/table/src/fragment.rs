//! Path fragments: where a split section lives relative to the output root.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Separator between fragment components.
pub const SEPARATOR: char = '/';

/// Returns true iff `fragment` names a directory of further-split children.
///
/// A directory fragment ends with [`SEPARATOR`]; anything else names a
/// single file.
///
/// ```rust
/// use xmlsplit_table::is_directory_fragment;
///
/// assert!(is_directory_fragment("regions/"));
/// assert!(!is_directory_fragment("grid_data"));
/// ```
pub fn is_directory_fragment(fragment: &str) -> bool {
    fragment.ends_with(SEPARATOR)
}

/// Errors related to fragment validation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FragmentError {
    /// The fragment string is empty.
    Empty,
    /// The fragment starts with a separator.
    Absolute,
    /// A component is empty, `.` or `..`.
    InvalidComponent {
        component: String,
        position: usize,
        message: String,
    },
}

impl fmt::Display for FragmentError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FragmentError::Empty => write!(f, "fragment is empty"),
            FragmentError::Absolute => write!(f, "fragment must be relative"),
            FragmentError::InvalidComponent {
                component,
                position,
                message,
            } => write!(
                f,
                "invalid component '{}' at position {}: {}",
                component, position, message
            ),
        }
    }
}

impl std::error::Error for FragmentError {}

/// A validated path fragment.
///
/// Three shapes occur in practice: a bare file stem (`grid_data`), a
/// directory (`regions/`) and a nested file (`cai_armies/army`). The raw
/// text is kept verbatim so a fragment always resolves to exactly what was
/// declared.
#[derive(Clone, Debug, Hash, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct PathFragment {
    raw: String,
}

impl PathFragment {
    /// Parse and validate a fragment.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use xmlsplit_table::PathFragment;
    ///
    /// let fragment = PathFragment::parse("cai_armies/army").unwrap();
    /// assert_eq!(fragment.directory(), Some("cai_armies"));
    /// assert_eq!(fragment.file_name(), Some("army"));
    ///
    /// assert!(PathFragment::parse("../escape").is_err());
    /// ```
    pub fn parse(s: &str) -> Result<Self, FragmentError> {
        if s.is_empty() {
            return Err(FragmentError::Empty);
        }
        if s.starts_with(SEPARATOR) {
            return Err(FragmentError::Absolute);
        }

        // A single trailing separator marks a directory and is not a component.
        let body = s.strip_suffix(SEPARATOR).unwrap_or(s);
        for (i, component) in body.split(SEPARATOR).enumerate() {
            Self::validate_component(component, i)?;
        }

        Ok(PathFragment { raw: s.to_string() })
    }

    fn validate_component(component: &str, position: usize) -> Result<(), FragmentError> {
        let message = match component {
            "" => "empty component",
            "." | ".." => "relative traversal is not allowed",
            _ => return Ok(()),
        };
        Err(FragmentError::InvalidComponent {
            component: component.to_string(),
            position,
            message: message.to_string(),
        })
    }

    /// The fragment text exactly as declared.
    pub fn as_str(&self) -> &str {
        &self.raw
    }

    /// True if this fragment expands to a directory of child documents.
    pub fn is_directory(&self) -> bool {
        is_directory_fragment(&self.raw)
    }

    /// Iterate over the non-empty components.
    pub fn components(&self) -> impl Iterator<Item = &str> {
        self.raw.split(SEPARATOR).filter(|c| !c.is_empty())
    }

    /// The directory this fragment places content in.
    ///
    /// For a directory fragment that is the fragment itself without the
    /// trailing separator; for a nested file it is everything before the
    /// last separator; a bare file stem has none.
    pub fn directory(&self) -> Option<&str> {
        if self.is_directory() {
            return Some(&self.raw[..self.raw.len() - 1]);
        }
        self.raw.rsplit_once(SEPARATOR).map(|(dir, _)| dir)
    }

    /// The file name of a single-file fragment. `None` for directories.
    pub fn file_name(&self) -> Option<&str> {
        if self.is_directory() {
            return None;
        }
        self.components().last()
    }
}

impl fmt::Display for PathFragment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.raw)
    }
}

impl AsRef<str> for PathFragment {
    fn as_ref(&self) -> &str {
        &self.raw
    }
}

impl TryFrom<String> for PathFragment {
    type Error = FragmentError;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        PathFragment::parse(&s)
    }
}

impl TryFrom<&str> for PathFragment {
    type Error = FragmentError;

    fn try_from(s: &str) -> Result<Self, Self::Error> {
        PathFragment::parse(s)
    }
}

impl From<PathFragment> for String {
    fn from(fragment: PathFragment) -> String {
        fragment.raw
    }
}

impl PartialEq<str> for PathFragment {
    fn eq(&self, other: &str) -> bool {
        self.raw == other
    }
}

impl PartialEq<&str> for PathFragment {
    fn eq(&self, other: &&str) -> bool {
        self.raw == *other
    }
}
