use std::env::{self, VarError};
use std::fs;
use std::path::PathBuf;
use tracing::debug;

use crate::error::{PathsError, Result};
use crate::path_list::PathList;

/// Default environment variable holding the list
pub const DEFAULT_ENV_VAR: &str = "PATH";

/// Where a [`PathList`] is read from
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PathSource {
    /// A `:`-delimited environment variable
    Env(String),
    /// A file holding a JSON array of strings
    File(PathBuf),
}

impl PathSource {
    /// Read the list.
    ///
    /// An unset variable reads as the empty string, which gives a list with
    /// one empty entry. A variable that is not valid UTF-8 is rejected rather
    /// than rewritten.
    pub fn load(&self) -> Result<PathList> {
        match self {
            PathSource::Env(name) => {
                let value = match env::var(name) {
                    Ok(value) => value,
                    Err(VarError::NotPresent) => String::new(),
                    Err(VarError::NotUnicode(_)) => {
                        return Err(PathsError::NotUnicode { var: name.clone() })
                    }
                };
                let list = PathList::from_delimited(&value);
                debug!(var = %name, entries = list.len(), "Loaded path list from environment");
                Ok(list)
            }
            PathSource::File(path) => {
                let bytes =
                    fs::read(path).map_err(|e| PathsError::io(path.display().to_string(), e))?;
                let list = PathList::from_json(&bytes)?;
                debug!(path = %path.display(), entries = list.len(), "Loaded path list from file");
                Ok(list)
            }
        }
    }

    /// The backing file, if the list came from one
    pub fn file(&self) -> Option<&PathBuf> {
        match self {
            PathSource::File(path) => Some(path),
            PathSource::Env(_) => None,
        }
    }

    pub fn describe(&self) -> String {
        match self {
            PathSource::Env(name) => format!("${name}"),
            PathSource::File(path) => path.display().to_string(),
        }
    }
}

impl Default for PathSource {
    fn default() -> Self {
        PathSource::Env(DEFAULT_ENV_VAR.to_string())
    }
}
