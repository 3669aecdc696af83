//! File-based trace source.

use crate::model::error::InputError;
use std::fs::File;
use std::io::BufReader;
use std::path::{Path, PathBuf};

/// Recorded JSONL trace on disk.
#[derive(Debug)]
pub struct FileSource {
    path: PathBuf,
    file: File,
}

impl FileSource {
    /// Open the trace file.
    ///
    /// # Errors
    ///
    /// Returns `InputError::FileNotFound` if the file does not exist.
    /// Returns `InputError::Io` for other I/O errors.
    pub fn open(path: impl AsRef<Path>) -> Result<Self, InputError> {
        let path = path.as_ref();

        if !path.exists() {
            return Err(InputError::FileNotFound {
                path: path.to_path_buf(),
            });
        }

        let file = File::open(path)?;
        Ok(Self {
            path: path.to_path_buf(),
            file,
        })
    }

    /// Path the source was opened from.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Buffered reader over the file.
    pub fn into_reader(self) -> BufReader<File> {
        BufReader::new(self.file)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Read;

    #[test]
    fn open_missing_file_is_file_not_found() {
        let missing = std::env::temp_dir().join("pvt_file_source_missing.jsonl");
        assert!(matches!(
            FileSource::open(&missing),
            Err(InputError::FileNotFound { .. })
        ));
    }

    #[test]
    fn open_existing_file_reads_contents() {
        let path = std::env::temp_dir().join("pvt_file_source_existing.jsonl");
        std::fs::write(&path, "{}\n").unwrap();

        let source = FileSource::open(&path).unwrap();
        assert_eq!(source.path(), path.as_path());
        let mut contents = String::new();
        source.into_reader().read_to_string(&mut contents).unwrap();

        let _ = std::fs::remove_file(&path);
        assert_eq!(contents, "{}\n");
    }
}
