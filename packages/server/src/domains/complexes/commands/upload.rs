//! Base64 upload decoding.

use base64::engine::general_purpose::STANDARD;
use base64::Engine;
use image::ImageFormat;

/// Upload limit for a single decoded file
pub const MAX_UPLOAD_BYTES: usize = 10 * 1024 * 1024;

/// Decoded upload ready for storage
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DecodedFile {
    pub bytes: Vec<u8>,
    pub extension: String,
}

/// Strip an optional `data:<mime>;base64,` prefix and surrounding whitespace.
fn strip_data_uri(input: &str) -> &str {
    let trimmed = input.trim();
    match trimmed.strip_prefix("data:") {
        Some(rest) => rest.split_once(',').map(|(_, data)| data).unwrap_or(rest),
        None => trimmed,
    }
}

fn decode_base64(input: &str) -> Result<Vec<u8>, String> {
    let bytes = STANDARD
        .decode(strip_data_uri(input))
        .map_err(|_| "Upload a valid base64 string.".to_string())?;
    if bytes.is_empty() {
        return Err("The submitted file is empty.".to_string());
    }
    if bytes.len() > MAX_UPLOAD_BYTES {
        return Err(format!(
            "The submitted file exceeds {} MB.",
            MAX_UPLOAD_BYTES / (1024 * 1024)
        ));
    }
    Ok(bytes)
}

/// Decode a base64 image, accepting PNG, JPEG, GIF and WebP only.
///
/// The error string is the user-facing validation message.
pub fn decode_image(input: &str) -> Result<DecodedFile, String> {
    let bytes = decode_base64(input)?;
    let extension = match image::guess_format(&bytes) {
        Ok(ImageFormat::Png) => "png",
        Ok(ImageFormat::Jpeg) => "jpg",
        Ok(ImageFormat::Gif) => "gif",
        Ok(ImageFormat::WebP) => "webp",
        _ => {
            return Err(
                "Upload a valid image. The file you uploaded was either not an image or a corrupted image."
                    .to_string(),
            )
        }
    };
    Ok(DecodedFile {
        bytes,
        extension: extension.to_string(),
    })
}

/// Decode an arbitrary base64 document; the extension comes from `name`.
pub fn decode_document(input: &str, name: &str) -> Result<DecodedFile, String> {
    let bytes = decode_base64(input)?;
    Ok(DecodedFile {
        bytes,
        extension: document_extension(name),
    })
}

/// Lower-cased alphanumeric extension of `name`, or `bin`.
fn document_extension(name: &str) -> String {
    name.rsplit_once('.')
        .map(|(_, ext)| ext.to_ascii_lowercase())
        .filter(|ext| !ext.is_empty() && ext.len() <= 10)
        .filter(|ext| ext.chars().all(|c| c.is_ascii_alphanumeric()))
        .unwrap_or_else(|| "bin".to_string())
}
