//! Image upload: file bytes to an embeddable data URI and a fresh image element.

use base64::Engine as _;

use crate::models::design::{new_element_id, ImageElement, Position, Size};

pub const DEFAULT_IMAGE_SIZE: Size = Size {
    width: 200,
    height: 200,
};

const FALLBACK_MIME: &str = "application/octet-stream";

pub fn to_data_uri(mime: Option<&str>, bytes: &[u8]) -> String {
    let mime = mime.filter(|m| !m.trim().is_empty()).unwrap_or(FALLBACK_MIME);
    let encoded = base64::engine::general_purpose::STANDARD.encode(bytes);
    format!("data:{mime};base64,{encoded}")
}

/// New image at the canvas origin, default size, alt text = file name.
pub fn image_from_upload(file_name: &str, mime: Option<&str>, bytes: &[u8]) -> ImageElement {
    ImageElement {
        id: new_element_id(),
        src: to_data_uri(mime, bytes),
        alt: file_name.to_string(),
        position: Position { x: 0.0, y: 0.0 },
        size: DEFAULT_IMAGE_SIZE,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_data_uri_encodes_bytes() {
        assert_eq!(
            to_data_uri(Some("image/png"), b"hello"),
            "data:image/png;base64,aGVsbG8="
        );
    }

    #[test]
    fn test_missing_mime_uses_octet_stream() {
        assert!(to_data_uri(None, b"x").starts_with("data:application/octet-stream;base64,"));
        assert!(to_data_uri(Some(" "), b"x").starts_with("data:application/octet-stream;"));
    }

    #[test]
    fn test_uploaded_image_defaults() {
        let image = image_from_upload("team.jpg", Some("image/jpeg"), &[0xFF, 0xD8]);
        assert_eq!(image.alt, "team.jpg");
        assert_eq!(image.position, Position { x: 0.0, y: 0.0 });
        assert_eq!(image.size, DEFAULT_IMAGE_SIZE);
        assert!(image.src.starts_with("data:image/jpeg;base64,"));
    }
}
