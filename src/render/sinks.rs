use std::fs::{File, OpenOptions};
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use tracing::debug;

use super::Sink;
use crate::error::{PathsError, Result};

/// Prints the text plus a newline on stdout
#[derive(Debug, Clone, Copy, Default)]
pub struct Console;

impl Sink for Console {
    fn send(&self, text: &str) -> Result<()> {
        let mut out = io::stdout().lock();
        writeln!(out, "{text}")
            .and_then(|()| out.flush())
            .map_err(|e| PathsError::io("<stdout>", e))
    }
}

/// Replaces the contents of a file, creating it if needed
#[derive(Debug, Clone)]
pub struct OverwriteFile {
    path: PathBuf,
}

impl OverwriteFile {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

impl Sink for OverwriteFile {
    fn send(&self, text: &str) -> Result<()> {
        debug!(path = %self.path.display(), "Overwriting file");
        let file = File::create(&self.path);
        write_to(&self.path, file, text.as_bytes())
    }
}

/// Appends a newline and then the text to a file, creating it if needed
#[derive(Debug, Clone)]
pub struct AppendFile {
    path: PathBuf,
}

impl AppendFile {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

impl Sink for AppendFile {
    fn send(&self, text: &str) -> Result<()> {
        debug!(path = %self.path.display(), "Appending to file");
        let file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.path);
        write_to(&self.path, file, format!("\n{text}").as_bytes())
    }
}

/// The handle is dropped on return, whether or not the write succeeded.
fn write_to(path: &Path, file: io::Result<File>, bytes: &[u8]) -> Result<()> {
    let target = || path.display().to_string();
    let mut file = file.map_err(|e| PathsError::io(target(), e))?;
    file.write_all(bytes).map_err(|e| PathsError::io(target(), e))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_overwrite_creates_file() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("paths.json");

        OverwriteFile::new(&path).send("[]").unwrap();

        assert_eq!(fs::read_to_string(&path).unwrap(), "[]");
    }

    #[test]
    fn test_overwrite_truncates_existing_content() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("out.txt");
        fs::write(&path, "a much longer previous body").unwrap();

        OverwriteFile::new(&path).send("short").unwrap();

        assert_eq!(fs::read_to_string(&path).unwrap(), "short");
    }

    #[test]
    fn test_append_prefixes_newline() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join(".profile");
        fs::write(&path, "# profile").unwrap();

        let sink = AppendFile::new(&path);
        sink.send("export PATH='/bin'").unwrap();
        sink.send("export PATH='/usr/bin'").unwrap();

        assert_eq!(
            fs::read_to_string(&path).unwrap(),
            "# profile\nexport PATH='/bin'\nexport PATH='/usr/bin'"
        );
    }

    #[test]
    fn test_append_creates_missing_file() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("new.sh");

        AppendFile::new(&path).send("line").unwrap();

        assert_eq!(fs::read_to_string(&path).unwrap(), "\nline");
    }

    #[test]
    fn test_file_sinks_report_io_error_with_target() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("missing-dir").join("out.txt");

        for err in [
            OverwriteFile::new(&path).send("x").unwrap_err(),
            AppendFile::new(&path).send("x").unwrap_err(),
        ] {
            match err {
                PathsError::Io { target, .. } => assert!(target.ends_with("out.txt")),
                other => panic!("unexpected error: {other}"),
            }
        }
    }

    #[test]
    fn test_console_sink_succeeds() {
        assert!(Console.send("0: /bin").is_ok());
    }
}
