use std::io;
use std::path::{Path, PathBuf};

/// Error that occurs when reading a file into memory fails.
#[derive(Debug, thiserror::Error)]
#[error("failed to read file `{path}`: {source}")]
pub struct FileReadError {
    pub path: PathBuf,
    #[source]
    pub source: io::Error,
}

/// Reads the whole file at the given path into a [`String`].
///
/// # Errors
///
/// Returns a [`FileReadError`] if the file cannot be opened or is not valid UTF-8.
///
/// # Example
/// ```no_run
/// # use podwatch::fsutil;
/// let text = fsutil::read_to_string("cfg/config.ini")?;
/// # Ok::<(), fsutil::FileReadError>(())
/// ```
pub fn read_to_string(path: impl AsRef<Path>) -> Result<String, FileReadError> {
    let path = path.as_ref();
    std::fs::read_to_string(path).map_err(|source| FileReadError {
        path: path.to_path_buf(),
        source,
    })
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use super::*;

    #[test]
    fn test_read_to_string_success() {
        let mut tmp = tempfile::NamedTempFile::new().expect("failed to create temp file");
        write!(tmp, "[Containers]\nollama = c1\n").unwrap();
        let text = read_to_string(tmp.path()).expect("should read test file");
        assert_eq!(text, "[Containers]\nollama = c1\n");
    }

    #[test]
    fn test_read_to_string_error() {
        let result = read_to_string("/definitely/does/not/exist.ini");
        assert!(result.is_err());
        let err = result.unwrap_err();
        assert_eq!(err.path, PathBuf::from("/definitely/does/not/exist.ini"));
        assert_eq!(err.source.kind(), std::io::ErrorKind::NotFound);
    }
}
