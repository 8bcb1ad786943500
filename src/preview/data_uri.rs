//! `data:` URI encoding for previewed files

use base64::{engine::general_purpose::STANDARD, Engine as _};
use std::path::Path;

/// MIME type used when the extension is unknown
pub const FALLBACK_MIME: &str = "application/octet-stream";

/// Infer a MIME type from the file extension
pub fn mime_for_path(path: &Path) -> &'static str {
    let ext = path
        .extension()
        .and_then(|ext| ext.to_str())
        .map(str::to_ascii_lowercase);

    match ext.as_deref() {
        Some("png") => "image/png",
        Some("jpg" | "jpeg" | "jfif") => "image/jpeg",
        Some("gif") => "image/gif",
        Some("webp") => "image/webp",
        Some("svg") => "image/svg+xml",
        Some("bmp") => "image/bmp",
        Some("ico") => "image/x-icon",
        Some("avif") => "image/avif",
        Some("tif" | "tiff") => "image/tiff",
        _ => FALLBACK_MIME,
    }
}

/// Build a base64 `data:` URI
pub fn encode_data_uri(mime: &str, bytes: &[u8]) -> String {
    format!("data:{mime};base64,{}", STANDARD.encode(bytes))
}

/// MIME type of a `data:` URI, if it has one
pub fn data_uri_mime(uri: &str) -> Option<&str> {
    let rest = uri.strip_prefix("data:")?;
    let end = rest.find([';', ','])?;
    Some(&rest[..end]).filter(|mime| !mime.is_empty())
}

/// Length of the encoded payload after the comma
pub fn data_uri_payload_len(uri: &str) -> usize {
    uri.split_once(',').map(|(_, payload)| payload.len()).unwrap_or(0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mime_for_known_extensions() {
        assert_eq!(mime_for_path(Path::new("cat.png")), "image/png");
        assert_eq!(mime_for_path(Path::new("a/b/photo.JPG")), "image/jpeg");
        assert_eq!(mime_for_path(Path::new("logo.svg")), "image/svg+xml");
        assert_eq!(mime_for_path(Path::new("scan.tiff")), "image/tiff");
    }

    #[test]
    fn test_mime_fallback() {
        assert_eq!(mime_for_path(Path::new("notes.txt")), FALLBACK_MIME);
        assert_eq!(mime_for_path(Path::new("Makefile")), FALLBACK_MIME);
    }

    #[test]
    fn test_encode_data_uri() {
        assert_eq!(
            encode_data_uri("image/png", b"hello"),
            "data:image/png;base64,aGVsbG8="
        );
    }

    #[test]
    fn test_encode_empty_file() {
        assert_eq!(encode_data_uri("image/gif", &[]), "data:image/gif;base64,");
    }

    #[test]
    fn test_data_uri_mime() {
        assert_eq!(data_uri_mime("data:image/png;base64,AAAA"), Some("image/png"));
        assert_eq!(data_uri_mime("data:,plain"), None);
        assert_eq!(data_uri_mime("http://example.com"), None);
    }

    #[test]
    fn test_payload_len() {
        assert_eq!(data_uri_payload_len("data:image/png;base64,aGVsbG8="), 8);
        assert_eq!(data_uri_payload_len("garbage"), 0);
    }
}
