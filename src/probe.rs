//! Builds a [`FileHandle`] from a path on disk, reading metadata only.

use anyhow::{bail, Context, Result};
use std::fs;
use std::path::Path;

use crate::models::FileHandle;

/// Media type implied by the file extension.
pub fn mime_type_for(path: &Path) -> &'static str {
    let extension = path
        .extension()
        .and_then(|e| e.to_str())
        .map(|e| e.to_lowercase())
        .unwrap_or_default();

    match extension.as_str() {
        "pdf" => "application/pdf",
        "doc" => "application/msword",
        "docx" => "application/vnd.openxmlformats-officedocument.wordprocessingml.document",
        "ppt" => "application/vnd.ms-powerpoint",
        "pptx" => "application/vnd.openxmlformats-officedocument.presentationml.presentation",
        "txt" => "text/plain",
        "csv" => "text/csv",
        "jpg" | "jpeg" => "image/jpeg",
        "png" => "image/png",
        "zip" => "application/zip",
        _ => "application/octet-stream",
    }
}

/// Reads size and name of `path`; `mime_override` replaces the guessed type.
pub fn probe_file(path: &Path, mime_override: Option<&str>) -> Result<FileHandle> {
    if !path.exists() {
        bail!("File not found: {}", path.display());
    }

    let metadata = fs::metadata(path)
        .with_context(|| format!("Failed to read metadata for {}", path.display()))?;
    if !metadata.is_file() {
        bail!("Not a regular file: {}", path.display());
    }

    let name = path
        .file_name()
        .and_then(|n| n.to_str())
        .unwrap_or("unknown")
        .to_string();

    let mime_type = mime_override.unwrap_or_else(|| mime_type_for(path));

    Ok(FileHandle::new(name, mime_type, metadata.len()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs::File;
    use std::io::Write;

    #[test]
    fn extension_decides_mime_type() {
        assert_eq!(mime_type_for(Path::new("notes.pdf")), "application/pdf");
        assert_eq!(mime_type_for(Path::new("NOTES.PDF")), "application/pdf");
        assert!(mime_type_for(Path::new("slides.pptx")).contains("presentation"));
        assert_eq!(mime_type_for(Path::new("README")), "application/octet-stream");
    }

    #[test]
    fn probes_name_size_and_type() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("week1.pdf");
        let mut file = File::create(&path).unwrap();
        file.write_all(b"%PDF-1.7 hello").unwrap();

        let handle = probe_file(&path, None).unwrap();
        assert_eq!(handle.name, "week1.pdf");
        assert_eq!(handle.mime_type, "application/pdf");
        assert_eq!(handle.size_bytes, 14);
    }

    #[test]
    fn override_replaces_guessed_type() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("scan");
        File::create(&path).unwrap();

        let handle = probe_file(&path, Some("application/pdf")).unwrap();
        assert_eq!(handle.mime_type, "application/pdf");
        assert_eq!(handle.size_bytes, 0);
    }

    #[test]
    fn missing_path_fails_with_context() {
        let dir = tempfile::tempdir().unwrap();
        let err = probe_file(&dir.path().join("nope.pdf"), None).unwrap_err();
        assert!(err.to_string().contains("File not found"));

        let err = probe_file(dir.path(), None).unwrap_err();
        assert!(err.to_string().contains("Not a regular file"));
    }
}
