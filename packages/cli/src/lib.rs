//! # xmlsplit-cli
//!
//! Command-line inspector for xmlsplit path tables.
//!
//! ## Usage
//!
//! ```bash
//! # Show every built-in section and where it is split to
//! xmlsplit-table list
//!
//! # Where does a section go?
//! xmlsplit-table resolve CAI_WORLD_UNITS
//!
//! # Which section owns a split path?
//! xmlsplit-table reverse cai_units/unit
//!
//! # Validate a custom layout, or start one from the built-in table
//! xmlsplit-table dump > split.json
//! xmlsplit-table check split.json
//! ```

pub mod commands;

pub use commands::{run, CliError, Command};
