use std::fs;
use std::path::Path;

use crate::error::ConvertError;

/// Validate the destination path and create its parent directories.
/// Directories that already exist are left alone; directories created here
/// stay behind even if a later step fails.
pub fn prepare(path: &Path) -> Result<(), ConvertError> {
    if path.extension().and_then(|e| e.to_str()) != Some("mp3") {
        return Err(ConvertError::Validation(
            "Output file must have .mp3 extension".to_string(),
        ));
    }

    if let Some(dir) = path.parent().filter(|d| !d.as_os_str().is_empty()) {
        fs::create_dir_all(dir)
            .map_err(|e| ConvertError::io("failed to create output directory", e))?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rejects_non_mp3_extension() {
        let err = prepare(Path::new("result.wav")).unwrap_err();
        assert!(matches!(err, ConvertError::Validation(_)));
        assert_eq!(err.to_string(), "Output file must have .mp3 extension");
    }

    #[test]
    fn creates_nested_directories() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("out/sub/dir/file.mp3");

        prepare(&path).unwrap();
        assert!(dir.path().join("out/sub/dir").is_dir());
    }

    #[test]
    fn existing_directories_are_a_no_op() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("audio.mp3");

        prepare(&path).unwrap();
        prepare(&path).unwrap();
    }
}
