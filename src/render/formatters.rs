use clap::ValueEnum;
use serde::{Deserialize, Serialize};
use serde_json::ser::{PrettyFormatter, Serializer};
use std::fmt::Write;

use super::Formatter;
use crate::error::{PathsError, Result};
use crate::path_list::PathList;

const JSON_INDENT: &[u8] = b"    ";

/// Output format selectable from the command line and the config file
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Format {
    /// Pretty-printed JSON array
    Json,
    /// One `<index>: <entry>` line per entry
    #[default]
    Indexed,
    /// A single `export VAR='a:b:c'` shell line
    Export,
}

impl Format {
    /// Build the formatter for this format. `var` names the exported variable.
    pub fn formatter(self, var: &str) -> Box<dyn Formatter> {
        match self {
            Format::Json => Box::new(Structured),
            Format::Indexed => Box::new(Indexed),
            Format::Export => Box::new(ShellExport::new(var)),
        }
    }
}

/// JSON array indented by four spaces, the same encoding the list files use
#[derive(Debug, Clone, Copy, Default)]
pub struct Structured;

impl Formatter for Structured {
    fn format(&self, list: &PathList) -> Result<String> {
        let mut buf = Vec::new();
        let mut ser =
            Serializer::with_formatter(&mut buf, PrettyFormatter::with_indent(JSON_INDENT));
        list.serialize(&mut ser).map_err(PathsError::Encode)?;
        String::from_utf8(buf).map_err(|e| PathsError::Encode(serde::ser::Error::custom(e)))
    }
}

/// Numbered listing:
///
/// ```text
/// 0: /usr/local/bin
/// 1: /usr/bin
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct Indexed;

impl Formatter for Indexed {
    fn format(&self, list: &PathList) -> Result<String> {
        let mut out = String::new();
        for (index, entry) in list.iter().enumerate() {
            let _ = writeln!(out, "{index}: {entry}");
        }
        Ok(out)
    }
}

/// `export PATH='<entries joined by :>'` with no trailing newline.
///
/// Entries are not escaped: a `'` or `:` inside an entry ends up verbatim
/// in the output.
#[derive(Debug, Clone)]
pub struct ShellExport {
    var: String,
}

impl ShellExport {
    pub fn new(var: impl Into<String>) -> Self {
        Self { var: var.into() }
    }
}

impl Default for ShellExport {
    fn default() -> Self {
        Self::new("PATH")
    }
}

impl Formatter for ShellExport {
    fn format(&self, list: &PathList) -> Result<String> {
        Ok(format!("export {}='{}'", self.var, list.join()))
    }
}
