//! Selected files and their display helpers.

use crate::error::Result;
use std::path::Path;

const FALLBACK_MIME: &str = "application/octet-stream";

/// A file the user picked for sharing. Only metadata is kept; contents are never read.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SelectedFile {
    pub name: String,
    pub byte_size: u64,
    pub mime_type: String,
}

impl SelectedFile {
    pub fn new(name: impl Into<String>, byte_size: u64, mime_type: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            byte_size,
            mime_type: mime_type.into(),
        }
    }

    /// Builds a selection entry from a path on disk.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Io`](crate::AppError::Io) if the path cannot be
    /// stat'ed, and a validation error if it is a directory.
    pub fn from_path(path: &Path) -> Result<Self> {
        let metadata = std::fs::metadata(path)?;
        if metadata.is_dir() {
            return Err(crate::AppError::validation(format!(
                "{} is a directory",
                path.display()
            )));
        }

        let name = path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_else(|| path.display().to_string());

        Ok(Self::new(name, metadata.len(), guess_mime_type(path)))
    }

    pub fn kind(&self) -> FileKind {
        FileKind::from_mime(&self.mime_type)
    }
}

/// Guesses a mime type from the file extension.
pub fn guess_mime_type(path: &Path) -> &'static str {
    let ext = match path.extension() {
        Some(ext) => ext.to_string_lossy().to_ascii_lowercase(),
        None => return FALLBACK_MIME,
    };

    match ext.as_str() {
        "jpg" | "jpeg" => "image/jpeg",
        "png" => "image/png",
        "gif" => "image/gif",
        "webp" => "image/webp",
        "svg" => "image/svg+xml",
        "heic" => "image/heic",
        "mp4" => "video/mp4",
        "mov" => "video/quicktime",
        "mkv" => "video/x-matroska",
        "webm" => "video/webm",
        "avi" => "video/x-msvideo",
        "mp3" => "audio/mpeg",
        "wav" => "audio/wav",
        "flac" => "audio/flac",
        "ogg" => "audio/ogg",
        "m4a" => "audio/mp4",
        "zip" => "application/zip",
        "rar" => "application/x-rar-compressed",
        "json" => "application/json",
        "html" | "htm" => "text/html",
        "css" => "text/css",
        "txt" | "md" => "text/plain",
        "pdf" => "application/pdf",
        _ => FALLBACK_MIME,
    }
}

/// Visual category of a file, used to pick its icon.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FileKind {
    Image,
    Video,
    Audio,
    Archive,
    Code,
    Generic,
}

impl FileKind {
    pub fn from_mime(mime: &str) -> Self {
        if mime.starts_with("image/") {
            Self::Image
        } else if mime.starts_with("video/") {
            Self::Video
        } else if mime.starts_with("audio/") {
            Self::Audio
        } else if mime.starts_with("application/zip") || mime.starts_with("application/x-rar") {
            Self::Archive
        } else if mime.starts_with("application/json")
            || mime.starts_with("text/html")
            || mime.starts_with("text/css")
        {
            Self::Code
        } else {
            Self::Generic
        }
    }

    pub fn glyph(self) -> &'static str {
        match self {
            Self::Image => "🖼",
            Self::Video => "🎞",
            Self::Audio => "🎵",
            Self::Archive => "📦",
            Self::Code => "</>",
            Self::Generic => "📄",
        }
    }

    /// RGB colour for the icon.
    pub fn color(self) -> [u8; 3] {
        match self {
            Self::Image => [192, 132, 252],
            Self::Video => [248, 113, 113],
            Self::Audio => [251, 146, 60],
            Self::Archive => [250, 204, 21],
            Self::Code => [74, 222, 128],
            Self::Generic => [148, 163, 184],
        }
    }
}

const SIZE_UNITS: &[&str] = &["Bytes", "KB", "MB", "GB", "TB"];

/// Formats a byte count for display, e.g. `1536` → `"1.5 KB"`.
///
/// The value is rounded to `decimals` places and trailing zeros are dropped.
pub fn format_bytes(bytes: u64, decimals: usize) -> String {
    if bytes == 0 {
        return "0 Bytes".to_string();
    }

    let mut exp = 0;
    let mut unit = 1_u64;
    while exp < SIZE_UNITS.len() - 1 && bytes / unit >= 1024 {
        unit *= 1024;
        exp += 1;
    }
    let scaled = bytes as f64 / unit as f64;

    let mut text = format!("{:.*}", decimals, scaled);
    if text.contains('.') {
        let trimmed = text.trim_end_matches('0').trim_end_matches('.').len();
        text.truncate(trimmed);
    }
    format!("{} {}", text, SIZE_UNITS[exp])
}
