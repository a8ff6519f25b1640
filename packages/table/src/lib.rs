//! xmlsplit table: where each section of a split ESF XML document lives.
//!
//! A large save-file XML document is split into many smaller files. Each
//! split-out section is named by a symbolic key (an ESF record name such as
//! `CAI_WORLD_UNITS`), and the table maps that key to a path fragment
//! relative to the output directory:
//!
//! - `grid_data`: a single file
//! - `cai_units/unit`: a single file inside a directory
//! - `regions/`: a directory of further-split child documents
//!
//! The table is built once, never mutated, and performs no file I/O beyond
//! optionally reading its own JSON config. Splitters resolve keys to
//! fragments; mergers go the other way with [`PathTable::key_for_fragment`].
//!
//! # Example
//!
//! ```rust
//! use xmlsplit_table::{is_directory_fragment, PathTable, Strictness};
//!
//! let table = PathTable::builtin().unwrap();
//!
//! let fragment = table.resolve("REGION").unwrap();
//! assert_eq!(fragment, "region/");
//! assert!(is_directory_fragment(fragment.as_str()));
//!
//! // Optional sections can be skipped instead of failing.
//! assert!(table.lookup("NOT_A_RECORD", Strictness::Permissive).unwrap().is_none());
//! ```

pub mod builtin;
mod config;
mod error;
mod fragment;
mod table;

pub use error::{Error, Result};
pub use fragment::{is_directory_fragment, FragmentError, PathFragment, SEPARATOR};
pub use table::{Entry, Keys, PathTable, Strictness};
