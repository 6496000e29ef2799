//! Test fixtures
//!
//! Factory functions for shares and draft files with sensible defaults.

use std::path::Path;

use base64::engine::general_purpose::STANDARD;
use base64::Engine;

use crate::domain::entities::{DraftFile, Share, ShareId, ShareType};

/// A 1x1 PNG header, enough to sniff as an image
pub const PNG_BYTES: [u8; 16] = [
    0x89, b'P', b'N', b'G', 0x0D, 0x0A, 0x1A, 0x0A, 0x00, 0x00, 0x00, 0x0D, b'I', b'H', b'D', b'R',
];

/// Create a text share created at 2024-01-01T00:00:00Z
pub fn test_share(id: i64, content: &str) -> Share {
    Share {
        id: ShareId(id),
        share_type: ShareType::Text,
        content: content.to_string(),
        created_at: "2024-01-01T00:00:00Z".to_string(),
    }
}

/// Create an image share holding `PNG_BYTES`
pub fn test_image_share(id: i64) -> Share {
    Share {
        id: ShareId(id),
        share_type: ShareType::Image,
        content: STANDARD.encode(PNG_BYTES),
        created_at: "2024-01-01T00:00:00Z".to_string(),
    }
}

/// A draft file named `pixel.png`
pub fn test_png_file() -> DraftFile {
    DraftFile::from_bytes(Path::new("pixel.png"), PNG_BYTES.to_vec())
        .expect("fixture is a valid png")
}
