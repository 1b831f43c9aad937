//! Inline image encoding.

use crate::{FormError, FormResult};

use std::path::Path;

use base64::Engine;
use base64::engine::general_purpose::STANDARD;

/// Source files above this size are rejected before encoding.
pub const MAX_IMAGE_BYTES: u64 = 5 * 1024 * 1024;

/// Media type from the file extension; unknown extensions fall back to a
/// generic binary type.
fn media_type(path: &Path) -> &'static str {
    let ext = path
        .extension()
        .and_then(|ext| ext.to_str())
        .map(str::to_ascii_lowercase);

    match ext.as_deref() {
        Some("png") => "image/png",
        Some("jpg") | Some("jpeg") => "image/jpeg",
        Some("gif") => "image/gif",
        Some("webp") => "image/webp",
        Some("svg") => "image/svg+xml",
        _ => "application/octet-stream",
    }
}

/// Read a file and encode it as a self-contained data URI.
///
/// The size check runs against the file metadata, so an oversized source
/// is rejected without loading it into memory.
pub(crate) async fn encode_data_uri(path: &Path) -> FormResult<String> {
    let metadata = tokio::fs::metadata(path)
        .await
        .map_err(|e| FormError::ImageRead {
            path: path.to_path_buf(),
            source: e,
        })?;

    if metadata.len() > MAX_IMAGE_BYTES {
        return Err(FormError::size_limit(metadata.len(), MAX_IMAGE_BYTES));
    }

    let bytes = tokio::fs::read(path)
        .await
        .map_err(|e| FormError::ImageRead {
            path: path.to_path_buf(),
            source: e,
        })?;

    Ok(format!(
        "data:{};base64,{}",
        media_type(path),
        STANDARD.encode(bytes)
    ))
}
