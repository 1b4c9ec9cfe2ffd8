use std::fs;
use std::path::Path;

use base64::Engine as _;

use crate::error::ClientError;

pub fn detect_mime_type<P: AsRef<Path>>(path: P) -> String {
    mime_guess::from_path(path)
        .first_raw()
        .unwrap_or("image/jpeg")
        .to_string()
}

pub fn encode_image_to_base64(path: &Path) -> Result<String, ClientError> {
    let bytes = fs::read(path).map_err(|source| ClientError::ImageRead {
        path: path.to_path_buf(),
        source,
    })?;
    Ok(encode_bytes_to_base64(&bytes))
}

pub fn encode_bytes_to_base64(bytes: &[u8]) -> String {
    base64::engine::general_purpose::STANDARD.encode(bytes)
}
