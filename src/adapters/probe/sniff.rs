//! Image header sniffing
//!
//! Recovers pixel dimensions from the leading bytes of PNG, GIF, and JPEG
//! streams. Pure byte-slice parsing, no I/O.

use thiserror::Error;

use crate::core::models::ImageDimensions;

/// Errors that can occur while sniffing image headers
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum SniffError {
    /// The bytes do not start with a recognized image signature
    #[error("unrecognized image format")]
    UnsupportedFormat,

    /// The signature was recognized but the dimension header is missing
    #[error("image header truncated before dimensions")]
    Truncated,
}

const PNG_SIGNATURE: [u8; 8] = [0x89, b'P', b'N', b'G', 0x0D, 0x0A, 0x1A, 0x0A];

/// Sniff pixel dimensions from the start of an image byte stream
pub fn sniff_dimensions(bytes: &[u8]) -> Result<ImageDimensions, SniffError> {
    if bytes.starts_with(&PNG_SIGNATURE) {
        return png_dimensions(bytes);
    }
    if bytes.starts_with(b"GIF87a") || bytes.starts_with(b"GIF89a") {
        return gif_dimensions(bytes);
    }
    if bytes.starts_with(&[0xFF, 0xD8]) {
        return jpeg_dimensions(bytes);
    }
    Err(SniffError::UnsupportedFormat)
}

/// PNG: width and height are the first two fields of the IHDR chunk,
/// which must immediately follow the 8-byte signature.
fn png_dimensions(bytes: &[u8]) -> Result<ImageDimensions, SniffError> {
    if bytes.len() < 24 || &bytes[12..16] != b"IHDR" {
        return Err(SniffError::Truncated);
    }
    let width = u32::from_be_bytes([bytes[16], bytes[17], bytes[18], bytes[19]]);
    let height = u32::from_be_bytes([bytes[20], bytes[21], bytes[22], bytes[23]]);
    Ok(ImageDimensions::new(width, height))
}

/// GIF: logical screen width and height, little-endian, right after the
/// 6-byte signature.
fn gif_dimensions(bytes: &[u8]) -> Result<ImageDimensions, SniffError> {
    if bytes.len() < 10 {
        return Err(SniffError::Truncated);
    }
    let width = u16::from_le_bytes([bytes[6], bytes[7]]);
    let height = u16::from_le_bytes([bytes[8], bytes[9]]);
    Ok(ImageDimensions::new(u32::from(width), u32::from(height)))
}

/// JPEG: walk the marker segments until a start-of-frame marker, which
/// carries height then width after a 2-byte length and 1-byte precision.
fn jpeg_dimensions(bytes: &[u8]) -> Result<ImageDimensions, SniffError> {
    let mut i = 2;
    loop {
        let &prefix = bytes.get(i).ok_or(SniffError::Truncated)?;
        if prefix != 0xFF {
            return Err(SniffError::UnsupportedFormat);
        }
        // fill bytes before the marker are legal
        while bytes.get(i + 1) == Some(&0xFF) {
            i += 1;
        }
        let &marker = bytes.get(i + 1).ok_or(SniffError::Truncated)?;
        i += 2;

        match marker {
            // standalone markers carry no payload
            0x01 | 0xD0..=0xD8 => {},
            // end of image or start of entropy-coded data: no frame header found
            0xD9 | 0xDA => return Err(SniffError::Truncated),
            _ => {
                let len_hi = *bytes.get(i).ok_or(SniffError::Truncated)?;
                let len_lo = *bytes.get(i + 1).ok_or(SniffError::Truncated)?;
                let len = usize::from(u16::from_be_bytes([len_hi, len_lo]));
                if len < 2 {
                    return Err(SniffError::UnsupportedFormat);
                }

                if is_start_of_frame(marker) {
                    // segment: length(2) precision(1) height(2) width(2)
                    if i + 7 > bytes.len() {
                        return Err(SniffError::Truncated);
                    }
                    let height = u16::from_be_bytes([bytes[i + 3], bytes[i + 4]]);
                    let width = u16::from_be_bytes([bytes[i + 5], bytes[i + 6]]);
                    return Ok(ImageDimensions::new(u32::from(width), u32::from(height)));
                }

                i += len;
            },
        }
    }
}

/// SOF0-SOF15, excluding DHT, JPG, and DAC which share the range
const fn is_start_of_frame(marker: u8) -> bool {
    matches!(marker, 0xC0..=0xCF) && !matches!(marker, 0xC4 | 0xC8 | 0xCC)
}
