use std::fs;
use std::path::Path;

use tracing::debug;

use crate::error::ConvertError;

/// Read the source text. The extension gate runs before any filesystem
/// access, so a bad path never gets opened.
pub fn load(path: &Path) -> Result<String, ConvertError> {
    if path.extension().and_then(|e| e.to_str()) != Some("txt") {
        return Err(ConvertError::Validation(
            "Input file must have .txt extension".to_string(),
        ));
    }
    if !path.is_file() {
        return Err(ConvertError::NotFound(path.to_path_buf()));
    }

    let text = fs::read_to_string(path)
        .map_err(|e| ConvertError::io("failed to read input file", e))?;
    debug!("Read {} bytes from {}", text.len(), path.display());
    Ok(text.trim().to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rejects_non_txt_extension() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("notes.md");
        fs::write(&path, "plain text inside").unwrap();

        let err = load(&path).unwrap_err();
        assert!(matches!(err, ConvertError::Validation(_)));
        assert_eq!(err.to_string(), "Input file must have .txt extension");
    }

    #[test]
    fn missing_file_is_not_found() {
        let dir = tempfile::tempdir().unwrap();
        let err = load(&dir.path().join("missing.txt")).unwrap_err();
        assert!(matches!(err, ConvertError::NotFound(_)));
        assert!(err.to_string().contains("not found"));
    }

    #[test]
    fn content_comes_back_trimmed() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("hello.txt");
        fs::write(&path, "  Hello world\n\n").unwrap();

        assert_eq!(load(&path).unwrap(), "Hello world");
    }
}
