use std::{fs, path::{Path, PathBuf}};

use serde::Serialize;

use crate::errors::ImporterError;

/// Writes the final document as two-space indented json, atomically:
/// the bytes land in a temp file next to the destination and are
/// renamed over it once complete
pub struct JsonSink {
    path: PathBuf,
}

impl JsonSink {
    pub fn new(path: impl AsRef<Path>) -> Self {
        Self { path: path.as_ref().to_path_buf() }
    }

    pub fn write<T: Serialize>(&self, value: &T) -> Result<PathBuf, ImporterError> {
        let dir = match self.path.parent() {
            Some(p) if !p.as_os_str().is_empty() => p.to_path_buf(),
            _ => PathBuf::from("."),
        };

        fs::create_dir_all(&dir).map_err(|e|
            ImporterError::Write(format!("create dir {}: {e}", dir.display()))
        )?;

        let temp = tempfile::NamedTempFile::new_in(&dir)
            .map_err(|e| ImporterError::Write(
                format!("tempfile in {}: {e}", dir.display())
            ))?;

        serde_json::to_writer_pretty(temp.as_file(), value)
            .map_err(|e| ImporterError::Write(
                format!("serialize json: {e}")
            ))?;

        temp.persist(&self.path).map_err(|e|
            ImporterError::Write(format!("persist {}: {e}", self.path.display())))?;

        Ok(self.path.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn writes_pretty_json() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("out.json");

        let written = JsonSink::new(&path).write(&vec!["a", "b"]).unwrap();
        assert_eq!(written, path);

        let text = fs::read_to_string(&path).unwrap();
        assert_eq!(text, "[\n  \"a\",\n  \"b\"\n]");
    }

    #[test]
    fn overwrites_existing_output() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("out.json");
        fs::write(&path, "stale contents").unwrap();

        JsonSink::new(&path).write(&serde_json::json!({"k": 1})).unwrap();

        let text = fs::read_to_string(&path).unwrap();
        assert_eq!(text, "{\n  \"k\": 1\n}");
    }

    #[test]
    fn creates_missing_parent_dirs() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("deep").join("out.json");

        JsonSink::new(&path).write(&serde_json::json!([])).unwrap();
        assert!(path.exists());
    }
}
