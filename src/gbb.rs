//! The GBB texture container
//!
//! A container is an 8 byte [`Header`] followed by a run-length
//! compressed stream. Decompressed, the stream holds three
//! `width * height` planes in the order blue, green, red.
//!
//! The stream is a sequence of records, each introduced by a control byte:
//!
//! - `0x00..=0x7F` is a run record: one data byte follows and
//!   expands to `control + 3` copies of itself.
//! - `0x80..=0xFF` is a literal record: `0x100 - control` data
//!   bytes follow and are copied verbatim.

use crate::{image::PixelBuffer, logger::log_header, Result};

mod compressor;
mod decompressor;
mod header;
mod planes;
mod record;
mod statistics;

pub use compressor::compress;
pub use decompressor::decompress;
pub use header::{Header, BITS_PER_PIXEL, HEADER_LENGTH};
pub use planes::{pixels_to_planar, planar_to_pixels, PLANE_COUNT};
pub use record::{Record, Records};
pub use statistics::StreamStatistics;

/// Parse a complete container into its header and pixels
pub fn decode(bytes: &[u8]) -> Result<(Header, PixelBuffer)> {
    let header = Header::parse(bytes)?;
    log_header(&header);
    if header.bits_per_pixel != BITS_PER_PIXEL {
        log::warn!(
            "header declares {} bits per pixel, decoding as {}",
            header.bits_per_pixel,
            BITS_PER_PIXEL
        );
    }
    let planes = decompress(&bytes[HEADER_LENGTH..], header.planar_length())?;
    let image = planar_to_pixels(&planes, header.width, header.height)?;
    Ok((header, image))
}

/// Build a complete container from an image
pub fn encode(image: &PixelBuffer) -> Vec<u8> {
    let header = Header::new(image.width(), image.height());
    let planes = pixels_to_planar(image);
    let stream = compress(&planes);
    log::debug!(
        "encoded {}x{} image, {} planar bytes into {} stream bytes",
        header.width,
        header.height,
        planes.len(),
        stream.len()
    );
    let mut container = Vec::with_capacity(HEADER_LENGTH + stream.len());
    container.extend_from_slice(&header.to_bytes());
    container.extend_from_slice(&stream);
    container
}
