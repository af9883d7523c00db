use std::fs;
use std::path::Path;

use crate::utils::error::{PagemarkError, Result};

/// Check if a path exists and is a file
pub fn is_file<P: AsRef<Path>>(path: P) -> bool {
    path.as_ref().is_file()
}

/// Read a file to string, naming the path in the error
pub fn read_file<P: AsRef<Path>>(path: P) -> Result<String> {
    let path = path.as_ref();
    if !is_file(path) {
        return Err(PagemarkError::Io(std::io::Error::new(
            std::io::ErrorKind::NotFound,
            format!("File not found: {}", path.display()),
        )));
    }

    Ok(fs::read_to_string(path)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_read_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, "# Title").unwrap();

        assert_eq!(read_file(file.path()).unwrap(), "# Title");
    }

    #[test]
    fn test_read_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let err = read_file(dir.path().join("nope.md")).unwrap_err();
        assert!(err.to_string().contains("nope.md"));
    }
}
