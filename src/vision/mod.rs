//! Image handling for the upload → data-URL path.
//!
//! Uploaded bytes never reach the upstream as-is: they are base64-encoded
//! into a `data:` URL and embedded in the chat-completion payload. This
//! module covers MIME type detection, size validation, and the data-URL
//! conversion itself. Image *content* is never validated; that is the
//! upstream's problem.

use base64::Engine;

/// Upload size cap, enforced before base64 expansion.
pub const MAX_IMAGE_SIZE_BYTES: usize = 20 * 1024 * 1024; // 20MB

/// Detect MIME type from magic bytes at the start of image data.
pub fn detect_mime_type(data: &[u8]) -> Option<&'static str> {
    if data.len() < 12 {
        return None;
    }

    if data.starts_with(b"\xFF\xD8\xFF") {
        Some("image/jpeg")
    } else if data.starts_with(b"\x89PNG\r\n\x1a\n") {
        Some("image/png")
    } else if data.starts_with(b"GIF87a") || data.starts_with(b"GIF89a") {
        Some("image/gif")
    } else if data.starts_with(b"RIFF") && data[8..12] == *b"WEBP" {
        Some("image/webp")
    } else {
        None
    }
}

/// Filename extension for a MIME type, with the leading dot.
pub fn extension_for_mime(mime: &str) -> &'static str {
    match mime.to_lowercase().as_str() {
        "image/jpeg" | "image/jpg" => ".jpg",
        "image/png" => ".png",
        "image/gif" => ".gif",
        "image/webp" => ".webp",
        _ => ".img",
    }
}

/// Extension of an uploaded filename (with the leading dot), if it has a
/// plausible one. Anything longer than a handful of alphanumerics is treated
/// as noise rather than an extension.
pub fn extension_from_name(name: &str) -> Option<String> {
    let ext = std::path::Path::new(name).extension()?.to_str()?;
    if ext.is_empty() || ext.len() > 5 || !ext.chars().all(|c| c.is_ascii_alphanumeric()) {
        return None;
    }
    Some(format!(".{}", ext.to_lowercase()))
}

/// Build a `data:` URL embedding the image bytes.
pub fn to_data_url(mime: &str, data: &[u8]) -> String {
    format!(
        "data:{};base64,{}",
        mime,
        base64::engine::general_purpose::STANDARD.encode(data)
    )
}

/// Validate image data size.
pub fn validate_image_size(data_len: usize) -> Result<(), String> {
    if data_len > MAX_IMAGE_SIZE_BYTES {
        return Err(format!(
            "image size {} bytes exceeds maximum of {} bytes (20MB)",
            data_len, MAX_IMAGE_SIZE_BYTES
        ));
    }
    Ok(())
}

/// Syntactic plausibility check for an image reference: a remote URL or an
/// inline `data:` URI. No fetching, no content inspection. Scheme matching
/// is ASCII case-insensitive, as URL schemes are.
pub fn looks_like_image_reference(reference: &str) -> bool {
    ["http://", "https://", "data:"].iter().any(|scheme| {
        reference
            .get(..scheme.len())
            .is_some_and(|prefix| prefix.eq_ignore_ascii_case(scheme))
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    // Tiny 1x1 PNG
    const PNG_BASE64: &str = "iVBORw0KGgoAAAANSUhEUgAAAAEAAAABCAYAAAAfFcSJAAAADUlEQVR42mNk+M9QDwADhgGAWjR9awAAAABJRU5ErkJggg==";

    fn png_bytes() -> Vec<u8> {
        base64::engine::general_purpose::STANDARD
            .decode(PNG_BASE64)
            .unwrap()
    }

    #[test]
    fn test_detect_png_from_magic_bytes() {
        assert_eq!(detect_mime_type(&png_bytes()), Some("image/png"));
    }

    #[test]
    fn test_detect_jpeg_from_magic_bytes() {
        let mut data = vec![0xFF, 0xD8, 0xFF, 0xE0];
        data.extend_from_slice(&[0u8; 16]);
        assert_eq!(detect_mime_type(&data), Some("image/jpeg"));
    }

    #[test]
    fn test_short_or_unknown_data_is_not_detected() {
        assert_eq!(detect_mime_type(b"\xFF\xD8"), None);
        assert_eq!(detect_mime_type(&[0u8; 32]), None);
    }

    #[test]
    fn test_data_url_round_trips_the_payload() {
        let url = to_data_url("image/png", &png_bytes());
        assert!(url.starts_with("data:image/png;base64,"));
        assert!(url.ends_with(PNG_BASE64));
    }

    #[test]
    fn test_extension_from_name() {
        assert_eq!(extension_from_name("photo.JPG").as_deref(), Some(".jpg"));
        assert_eq!(extension_from_name("archive.tar.gz").as_deref(), Some(".gz"));
        assert_eq!(extension_from_name("no_extension"), None);
        assert_eq!(extension_from_name("weird.not-an-ext!"), None);
    }

    #[test]
    fn test_size_validation() {
        assert!(validate_image_size(1024).is_ok());
        assert!(validate_image_size(MAX_IMAGE_SIZE_BYTES).is_ok());
        assert!(validate_image_size(MAX_IMAGE_SIZE_BYTES + 1).is_err());
    }

    #[test]
    fn test_reference_plausibility() {
        assert!(looks_like_image_reference("https://example.com/cat.jpg"));
        assert!(looks_like_image_reference("http://example.com/cat.jpg"));
        assert!(looks_like_image_reference("data:image/png;base64,AAAA"));
        assert!(!looks_like_image_reference("ftp://example.com/cat.jpg"));
        assert!(!looks_like_image_reference("cat.jpg"));
    }

    #[test]
    fn test_reference_scheme_is_case_insensitive() {
        assert!(looks_like_image_reference("HTTP://example.com/cat.jpg"));
        assert!(looks_like_image_reference("HtTpS://Example.com/cat.jpg"));
        assert!(looks_like_image_reference("DATA:image/png;base64,AAAA"));
        assert!(!looks_like_image_reference("FTP://example.com/cat.jpg"));
        // Multi-byte input must not panic the prefix slice
        assert!(!looks_like_image_reference("данные:изображение"));
    }
}
