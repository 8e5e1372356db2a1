//! File helpers: extensions, previewability and display icons.

use crate::data::FileMeta;
use crate::format::format_bytes;

/// Broad file category, used to pick an icon.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FileKind {
    Image,
    Document,
    Archive,
    Other,
}

impl FileKind {
    pub fn from_content_type(content_type: &str) -> Self {
        match content_type.split('/').next().unwrap_or_default() {
            "image" => Self::Image,
            "text" => Self::Document,
            "application" if content_type.ends_with("/pdf") => Self::Document,
            "application" if content_type.ends_with("/zip") => Self::Archive,
            _ => Self::Other,
        }
    }
}

/// Lower-cased extension of a path, without the dot.
pub fn extension(path: &str) -> Option<String> {
    let name = path.rsplit('/').next().unwrap_or(path);
    match name.rsplit_once('.') {
        Some((stem, ext)) if !stem.is_empty() && !ext.is_empty() => Some(ext.to_lowercase()),
        _ => None,
    }
}

/// Whether the browser can show the file inline as an image.
pub fn can_preview(content_type: &str) -> bool {
    FileKind::from_content_type(content_type) == FileKind::Image
}

/// One line summary for a file list ("avatar.jpg · JPG · 412.7 KB").
pub fn describe(file: &FileMeta) -> String {
    let ext = extension(&file.file_name)
        .map(|e| e.to_uppercase())
        .unwrap_or_else(|| "FILE".to_string());
    format!(
        "{} · {} · {}",
        file.file_name,
        ext,
        format_bytes(file.content_length)
    )
}

/// Content type guessed from a file name's extension.
pub fn content_type_for(file_name: &str) -> &'static str {
    match extension(file_name).as_deref() {
        Some("jpg" | "jpeg") => "image/jpeg",
        Some("png") => "image/png",
        Some("gif") => "image/gif",
        Some("webp") => "image/webp",
        Some("svg") => "image/svg+xml",
        Some("pdf") => "application/pdf",
        Some("zip") => "application/zip",
        Some("txt") => "text/plain",
        Some("md") => "text/markdown",
        Some("csv") => "text/csv",
        _ => "application/octet-stream",
    }
}

/// Metadata for a file picked in the browser, before it is uploaded.
pub fn local_file(file_name: &str, size: u64) -> FileMeta {
    FileMeta {
        file_path: file_name.to_string(),
        file_name: file_name.to_string(),
        content_type: content_type_for(file_name),
        content_length: size,
    }
}

/// Sum of the sizes of `files`.
pub fn total_size(files: &[FileMeta]) -> u64 {
    files.iter().map(|f| f.content_length).sum()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::FILES;

    #[test]
    fn test_extension() {
        assert_eq!(extension("/a/b/photo.JPG").as_deref(), Some("jpg"));
        assert_eq!(extension("archive.tar.gz").as_deref(), Some("gz"));
        assert_eq!(extension("README"), None);
        assert_eq!(extension(".bashrc"), None);
        assert_eq!(extension("/dir.d/file"), None);
    }

    #[test]
    fn test_kind() {
        assert_eq!(FileKind::from_content_type("image/png"), FileKind::Image);
        assert_eq!(FileKind::from_content_type("application/pdf"), FileKind::Document);
        assert_eq!(FileKind::from_content_type("application/zip"), FileKind::Archive);
        assert_eq!(FileKind::from_content_type("video/mp4"), FileKind::Other);
        assert!(can_preview("image/webp"));
        assert!(!can_preview("text/plain"));
    }

    #[test]
    fn test_describe() {
        assert_eq!(describe(&FILES[0]), "avatar.jpg · JPG · 412.7 KB");
    }

    #[test]
    fn test_content_type_for() {
        assert_eq!(content_type_for("Beach.PNG"), "image/png");
        assert_eq!(content_type_for("report.pdf"), "application/pdf");
        assert_eq!(content_type_for("data"), "application/octet-stream");

        let picked = local_file("notes.md", 1_200);
        assert_eq!(picked.content_type, "text/markdown");
        assert_eq!(FileKind::from_content_type(picked.content_type), FileKind::Document);
        assert_eq!(describe(&picked), "notes.md · MD · 1.2 KB");
    }

    #[test]
    fn test_total_size() {
        assert_eq!(total_size(&FILES), 412_733 + 538_211 + 644_902 + 791_560);
    }
}
