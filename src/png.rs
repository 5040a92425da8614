//! Minimal PNG writer: signature plus an IHDR/IDAT/IEND chunk stream.
//!
//! Only covers what the icon generator needs: 8-bit truecolor with alpha,
//! filter type 0 on every scanline, and a single zlib-compressed IDAT chunk.
//! Deflate is delegated to `flate2` at maximum compression, which keeps the
//! output byte-identical across runs for a fixed bitmap.

use std::io::Write as _;

use flate2::{Compression, write::ZlibEncoder};

use crate::{
    error::{IcongenError, IcongenResult},
    logo::LogoBitmap,
};

/// Fixed 8-byte signature every PNG file starts with.
pub const PNG_SIGNATURE: [u8; 8] = [0x89, b'P', b'N', b'G', 0x0D, 0x0A, 0x1A, 0x0A];

const BIT_DEPTH: u8 = 8;
const COLOR_TYPE_RGBA: u8 = 6;

/// Append one chunk: big-endian payload length, 4-byte ASCII tag, payload,
/// and a big-endian CRC32 computed over tag + payload.
fn push_chunk(out: &mut Vec<u8>, tag: [u8; 4], payload: &[u8]) -> IcongenResult<()> {
    let len = u32::try_from(payload.len())
        .map_err(|_| IcongenError::encode("chunk payload exceeds the 4-byte length field"))?;

    out.extend_from_slice(&len.to_be_bytes());
    out.extend_from_slice(&tag);
    out.extend_from_slice(payload);

    let mut crc = crc32fast::Hasher::new();
    crc.update(&tag);
    crc.update(payload);
    out.extend_from_slice(&crc.finalize().to_be_bytes());
    Ok(())
}

/// 13-byte IHDR payload: dimensions, bit depth, color type, and the fixed
/// compression/filter/interlace methods, all big-endian.
fn ihdr_payload(width: u32, height: u32) -> [u8; 13] {
    let mut out = [0u8; 13];
    out[0..4].copy_from_slice(&width.to_be_bytes());
    out[4..8].copy_from_slice(&height.to_be_bytes());
    out[8] = BIT_DEPTH;
    out[9] = COLOR_TYPE_RGBA;
    // compression = 0, filter = 0, interlace = 0
    out
}

/// Uncompressed scanline stream: one filter-type byte of 0 before each row.
fn scanlines(bitmap: &LogoBitmap) -> Vec<u8> {
    let row_bytes = bitmap.width as usize * 4;
    let mut raw = Vec::with_capacity(bitmap.height as usize * (row_bytes + 1));
    for row in bitmap.data.chunks_exact(row_bytes) {
        raw.push(0);
        raw.extend_from_slice(row);
    }
    raw
}

/// Encode a bitmap as a complete PNG byte stream.
pub fn encode_png(bitmap: &LogoBitmap) -> IcongenResult<Vec<u8>> {
    if bitmap.width == 0 || bitmap.height == 0 {
        return Err(IcongenError::validation("png width/height must be non-zero"));
    }
    let expected = bitmap.width as usize * bitmap.height as usize * 4;
    if bitmap.data.len() != expected {
        return Err(IcongenError::validation(format!(
            "bitmap holds {} bytes, expected {} for {}x{} RGBA",
            bitmap.data.len(),
            expected,
            bitmap.width,
            bitmap.height
        )));
    }

    let mut encoder = ZlibEncoder::new(Vec::new(), Compression::best());
    encoder
        .write_all(&scanlines(bitmap))
        .map_err(|e| IcongenError::encode(format!("deflate scanlines: {e}")))?;
    let idat = encoder
        .finish()
        .map_err(|e| IcongenError::encode(format!("finish zlib stream: {e}")))?;

    let mut out = Vec::with_capacity(PNG_SIGNATURE.len() + idat.len() + 3 * 12 + 13);
    out.extend_from_slice(&PNG_SIGNATURE);
    push_chunk(&mut out, *b"IHDR", &ihdr_payload(bitmap.width, bitmap.height))?;
    push_chunk(&mut out, *b"IDAT", &idat)?;
    push_chunk(&mut out, *b"IEND", &[])?;
    Ok(out)
}
