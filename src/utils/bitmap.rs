//! Pixel dimensions of image files
//!
//! Only the file header is decoded. PNG, GIF, BMP and JPEG are recognized;
//! anything else yields `None` and the caller falls back to default sizes.

use std::fs;
use std::path::Path;

const PNG_SIGNATURE: [u8; 8] = [0x89, b'P', b'N', b'G', 0x0D, 0x0A, 0x1A, 0x0A];

/// Width and height of an image file, `None` if unreadable or unsupported
pub fn image_size(path: &Path) -> Option<(i64, i64)> {
    let bytes = match fs::read(path) {
        Ok(bytes) => bytes,
        Err(e) => {
            log::debug!("cannot read image {}: {}", path.display(), e);
            return None;
        }
    };
    image_size_from_bytes(&bytes)
}

/// Width and height from the leading bytes of an image file
pub fn image_size_from_bytes(bytes: &[u8]) -> Option<(i64, i64)> {
    if bytes.starts_with(&PNG_SIGNATURE) {
        png_size(bytes)
    } else if bytes.starts_with(b"GIF87a") || bytes.starts_with(b"GIF89a") {
        gif_size(bytes)
    } else if bytes.starts_with(b"BM") {
        bmp_size(bytes)
    } else if bytes.starts_with(&[0xFF, 0xD8]) {
        jpeg_size(bytes)
    } else {
        None
    }
}

fn be_u16(bytes: &[u8], at: usize) -> Option<u16> {
    let b = bytes.get(at..at + 2)?;
    Some(u16::from_be_bytes([b[0], b[1]]))
}

fn le_u16(bytes: &[u8], at: usize) -> Option<u16> {
    let b = bytes.get(at..at + 2)?;
    Some(u16::from_le_bytes([b[0], b[1]]))
}

fn be_u32(bytes: &[u8], at: usize) -> Option<u32> {
    let b = bytes.get(at..at + 4)?;
    Some(u32::from_be_bytes([b[0], b[1], b[2], b[3]]))
}

fn le_i32(bytes: &[u8], at: usize) -> Option<i32> {
    let b = bytes.get(at..at + 4)?;
    Some(i32::from_le_bytes([b[0], b[1], b[2], b[3]]))
}

// IHDR is always the first chunk
fn png_size(bytes: &[u8]) -> Option<(i64, i64)> {
    if bytes.get(12..16)? != b"IHDR" {
        return None;
    }
    Some((i64::from(be_u32(bytes, 16)?), i64::from(be_u32(bytes, 20)?)))
}

fn gif_size(bytes: &[u8]) -> Option<(i64, i64)> {
    Some((i64::from(le_u16(bytes, 6)?), i64::from(le_u16(bytes, 8)?)))
}

// Height is negative for top-down bitmaps
fn bmp_size(bytes: &[u8]) -> Option<(i64, i64)> {
    let width = le_i32(bytes, 18)?;
    let height = le_i32(bytes, 22)?;
    Some((i64::from(width).abs(), i64::from(height).abs()))
}

fn jpeg_size(bytes: &[u8]) -> Option<(i64, i64)> {
    let mut pos = 2;
    while pos + 4 <= bytes.len() {
        if bytes[pos] != 0xFF {
            return None;
        }
        let marker = bytes[pos + 1];
        if marker == 0xFF {
            pos += 1;
            continue;
        }
        let length = usize::from(be_u16(bytes, pos + 2)?);
        // start-of-frame markers, excluding DHT, JPG and DAC
        if (0xC0..=0xCF).contains(&marker) && !matches!(marker, 0xC4 | 0xC8 | 0xCC) {
            let height = be_u16(bytes, pos + 5)?;
            let width = be_u16(bytes, pos + 7)?;
            return Some((i64::from(width), i64::from(height)));
        }
        pos += 2 + length;
    }
    None
}
