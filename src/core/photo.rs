//! # Photo Encoding
//!
//! Generated images travel as base64 text. The draft keeps them as a
//! `data:` URI so the value can be shared as-is; saving to disk decodes it
//! back into JPEG bytes.

use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};

use base64::Engine;
use base64::engine::general_purpose;
use log::info;

/// Media prefix for every photo the image endpoint returns.
pub const JPEG_DATA_URI_PREFIX: &str = "data:image/jpeg;base64,";

const MAX_SLUG_LEN: usize = 48;

#[derive(Debug)]
pub enum PhotoError {
    /// The string is not a `data:<media>;base64,` URI.
    NotDataUri,
    /// The payload is not valid base64.
    Decode(base64::DecodeError),
    Io(std::io::Error),
}

impl fmt::Display for PhotoError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PhotoError::NotDataUri => write!(f, "photo is not a base64 data URI"),
            PhotoError::Decode(e) => write!(f, "invalid image data: {e}"),
            PhotoError::Io(e) => write!(f, "could not save photo: {e}"),
        }
    }
}

impl std::error::Error for PhotoError {}

/// Wraps a base64 JPEG payload in a data URI.
pub fn to_data_uri(payload: &str) -> String {
    format!("{JPEG_DATA_URI_PREFIX}{payload}")
}

/// Checks that `payload` decodes as standard base64.
pub fn validate_payload(payload: &str) -> Result<(), PhotoError> {
    general_purpose::STANDARD
        .decode(payload)
        .map(|_| ())
        .map_err(PhotoError::Decode)
}

/// Decodes any `data:<media>;base64,<payload>` URI into raw bytes.
pub fn decode_data_uri(uri: &str) -> Result<Vec<u8>, PhotoError> {
    let rest = uri.strip_prefix("data:").ok_or(PhotoError::NotDataUri)?;
    let (_media, payload) = rest.split_once(";base64,").ok_or(PhotoError::NotDataUri)?;
    general_purpose::STANDARD
        .decode(payload)
        .map_err(PhotoError::Decode)
}

/// Size of the decoded image computed from the base64 length, without decoding.
pub fn approx_decoded_len(uri: &str) -> Option<usize> {
    let (_, payload) = uri.split_once(";base64,")?;
    let padding = payload.bytes().rev().take_while(|b| *b == b'=').count();
    Some((payload.len() / 4 * 3).saturating_sub(padding))
}

/// Turns a prompt into a file-name-safe slug: lowercase ASCII alphanumerics
/// joined by single dashes. Falls back to `"photo"` when nothing survives.
pub fn slugify(prompt: &str) -> String {
    let mut slug = String::new();
    for c in prompt.chars() {
        if c.is_ascii_alphanumeric() {
            if slug.len() >= MAX_SLUG_LEN {
                break;
            }
            slug.push(c.to_ascii_lowercase());
        } else if !slug.is_empty() && !slug.ends_with('-') {
            slug.push('-');
        }
    }
    let slug = slug.trim_end_matches('-');
    if slug.is_empty() {
        "photo".to_string()
    } else {
        slug.to_string()
    }
}

/// Writes the decoded photo to `<dir>/<slug>.jpg` and returns the path.
pub fn save_photo(uri: &str, dir: &Path, prompt: &str) -> Result<PathBuf, PhotoError> {
    let bytes = decode_data_uri(uri)?;
    fs::create_dir_all(dir).map_err(PhotoError::Io)?;
    let path = dir.join(format!("{}.jpg", slugify(prompt)));
    fs::write(&path, &bytes).map_err(PhotoError::Io)?;
    info!("Saved {} bytes to {}", bytes.len(), path.display());
    Ok(path)
}
