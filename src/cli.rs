use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

use crate::render::Format;

/// Edit and render PATH-style directory lists
///
/// paths reads an ordered list of directories from an environment variable
/// (`$PATH` by default) or from a JSON array file, applies one edit and
/// renders the result as an indexed listing, a JSON array or a shell
/// `export` line. Indices may be negative or past the end; they are clamped
/// to the nearest end of the list.
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Config file (defaults to $XDG_CONFIG_HOME/paths/config.toml)
    #[arg(long, global = true, value_name = "FILE", env = "PATHS_CONFIG")]
    pub config: Option<PathBuf>,

    /// Read the list from a JSON array file instead of the environment
    #[arg(long, global = true, value_name = "FILE")]
    pub from: Option<PathBuf>,

    /// Environment variable to read when no file is given
    #[arg(long, global = true, value_name = "NAME")]
    pub env_var: Option<String>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Render the list without changing it
    Show {
        #[command(flatten)]
        output: OutputArgs,
    },

    /// Insert a path at an index (appends when no index is given)
    Insert {
        /// Path to insert
        #[arg(value_name = "PATH")]
        path: String,

        /// Position the new entry ends up at
        #[arg(value_name = "INDEX", allow_negative_numbers = true)]
        index: Option<i64>,

        #[command(flatten)]
        output: OutputArgs,
    },

    /// Remove the entry at an index
    Remove {
        #[arg(value_name = "INDEX", allow_negative_numbers = true)]
        index: i64,

        #[command(flatten)]
        output: OutputArgs,
    },

    /// Move an entry to another index
    Move {
        #[arg(value_name = "SRC", allow_negative_numbers = true)]
        src: i64,

        #[arg(value_name = "DST", allow_negative_numbers = true)]
        dst: i64,

        #[command(flatten)]
        output: OutputArgs,
    },

    /// Overwrite the entry at an index
    Replace {
        #[arg(value_name = "INDEX", allow_negative_numbers = true)]
        index: i64,

        /// New value for the entry
        #[arg(value_name = "PATH")]
        path: String,

        #[command(flatten)]
        output: OutputArgs,
    },

    /// Exchange two entries
    Swap {
        #[arg(value_name = "A", allow_negative_numbers = true)]
        a: i64,

        #[arg(value_name = "B", allow_negative_numbers = true)]
        b: i64,

        #[command(flatten)]
        output: OutputArgs,
    },

    /// Drop repeated entries, keeping the first occurrence
    Dedupe {
        #[command(flatten)]
        output: OutputArgs,
    },

    /// Run the [[render]] pipelines from the config file
    Render {
        #[command(flatten)]
        output: OutputArgs,
    },
}

/// Where and how the resulting list is rendered
#[derive(Args, Debug, Clone, Default)]
pub struct OutputArgs {
    /// Output format [default: indexed]
    #[arg(short, long, value_enum)]
    pub format: Option<Format>,

    /// Overwrite FILE with the rendered list (repeatable)
    #[arg(short, long, value_name = "FILE")]
    pub write: Vec<PathBuf>,

    /// Append the rendered list to FILE (repeatable)
    #[arg(short, long, value_name = "FILE")]
    pub append: Vec<PathBuf>,

    /// Do not print the rendered list on stdout
    #[arg(short, long)]
    pub quiet: bool,

    /// Write the result back to the list file as JSON
    #[arg(long)]
    pub save: bool,
}

impl OutputArgs {
    /// Format to render with, `indexed` when none was given
    pub fn format(&self) -> Format {
        self.format.unwrap_or_default()
    }

    /// Whether any flag shaping the rendered output (not `--save`) was given
    pub fn shapes_output(&self) -> bool {
        self.format.is_some() || !self.write.is_empty() || !self.append.is_empty() || self.quiet
    }
}
