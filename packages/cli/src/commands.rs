//! Subcommands and their execution.
//!
//! Every command renders its output to a string so the binary only has to
//! print it; tests call [`run`] directly.

use std::fmt::Write as _;
use std::path::{Path, PathBuf};

use clap::Subcommand;

use xmlsplit_table::{PathTable, Strictness};

#[derive(thiserror::Error, Debug)]
pub enum CliError {
    #[error("Table error: {0}")]
    Table(#[from] xmlsplit_table::Error),

    #[error("No key for fragment '{0}'")]
    NoKeyForFragment(String),

    #[error("Format error: {0}")]
    Fmt(#[from] std::fmt::Error),
}

#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// List every entry as key, fragment and kind (dir or file)
    List {
        /// Load the table from a JSON config instead of the built-in one
        #[arg(long)]
        config: Option<PathBuf>,

        /// Only entries that expand to a directory
        #[arg(long, conflicts_with = "files")]
        dirs: bool,

        /// Only entries that expand to a single file
        #[arg(long)]
        files: bool,
    },

    /// Print the fragment a key resolves to
    Resolve {
        key: String,

        /// Load the table from a JSON config instead of the built-in one
        #[arg(long)]
        config: Option<PathBuf>,

        /// Print nothing instead of failing on an unknown key
        #[arg(long)]
        permissive: bool,
    },

    /// Print the key that declared a fragment
    Reverse {
        fragment: String,

        /// Load the table from a JSON config instead of the built-in one
        #[arg(long)]
        config: Option<PathBuf>,
    },

    /// Validate a JSON config file
    Check { file: PathBuf },

    /// Print the built-in table as a JSON config
    Dump,
}

fn load_table(config: Option<&Path>) -> Result<PathTable, CliError> {
    match config {
        Some(path) => Ok(PathTable::from_json_file(path)?),
        None => {
            log::debug!("Using built-in split table");
            Ok(PathTable::builtin()?)
        }
    }
}

fn kind(is_directory: bool) -> &'static str {
    if is_directory {
        "dir"
    } else {
        "file"
    }
}

/// Execute a command and return what it prints.
pub fn run(command: &Command) -> Result<String, CliError> {
    let mut out = String::new();

    match command {
        Command::List {
            config,
            dirs,
            files,
        } => {
            let table = load_table(config.as_deref())?;
            for entry in table
                .entries()
                .filter(|e| !*dirs || e.is_directory())
                .filter(|e| !*files || !e.is_directory())
            {
                writeln!(
                    out,
                    "{}\t{}\t{}",
                    entry.key,
                    entry.fragment,
                    kind(entry.is_directory())
                )?;
            }
        }
        Command::Resolve {
            key,
            config,
            permissive,
        } => {
            let table = load_table(config.as_deref())?;
            let strictness = if *permissive {
                Strictness::Permissive
            } else {
                Strictness::Strict
            };
            if let Some(fragment) = table.lookup(key, strictness)? {
                writeln!(out, "{}", fragment)?;
            }
        }
        Command::Reverse { fragment, config } => {
            let table = load_table(config.as_deref())?;
            let key = table
                .key_for_fragment(fragment)
                .ok_or_else(|| CliError::NoKeyForFragment(fragment.clone()))?;
            writeln!(out, "{}", key)?;
        }
        Command::Check { file } => {
            let table = PathTable::from_json_file(file)?;
            let dirs = table.directory_keys().count();
            writeln!(
                out,
                "{}: {} entries ({} dir, {} file)",
                file.display(),
                table.len(),
                dirs,
                table.len() - dirs
            )?;
        }
        Command::Dump => {
            let table = PathTable::builtin()?;
            writeln!(out, "{}", table.to_json_string_pretty()?)?;
        }
    }

    Ok(out)
}
