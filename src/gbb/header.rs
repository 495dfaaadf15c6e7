use crate::{binary_stream::ByteReader, error::Error, Result};

pub const HEADER_LENGTH: usize = 8;
/// the only layout this codec reads or writes
pub const BITS_PER_PIXEL: u8 = 24;

const RESERVED_LENGTH: usize = 3;

/// Fixed 8 byte container header, little-endian
///
/// | offset | size | field          |
/// |--------|------|----------------|
/// | 0      | 2    | width          |
/// | 2      | 2    | height         |
/// | 4      | 1    | bits per pixel |
/// | 5      | 3    | reserved       |
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Header {
    pub width: u16,
    pub height: u16,
    pub bits_per_pixel: u8,
}

impl Header {
    pub fn new(width: u16, height: u16) -> Self {
        Self {
            width,
            height,
            bits_per_pixel: BITS_PER_PIXEL,
        }
    }

    /// Reserved bytes are ignored and the bits per pixel value is taken as is.
    pub fn parse(bytes: &[u8]) -> Result<Self> {
        let truncated = || Error::TruncatedHeader {
            length: bytes.len(),
        };
        let mut reader = ByteReader::new(bytes);
        let width = reader.read_u16_le().ok_or_else(truncated)?;
        let height = reader.read_u16_le().ok_or_else(truncated)?;
        let bits_per_pixel = reader.read_u8().ok_or_else(truncated)?;
        reader.skip(RESERVED_LENGTH).ok_or_else(truncated)?;
        Ok(Self {
            width,
            height,
            bits_per_pixel,
        })
    }

    pub fn to_bytes(&self) -> [u8; HEADER_LENGTH] {
        let width = self.width.to_le_bytes();
        let height = self.height.to_le_bytes();
        [
            width[0],
            width[1],
            height[0],
            height[1],
            self.bits_per_pixel,
            0,
            0,
            0,
        ]
    }

    pub fn plane_length(&self) -> usize {
        self.width as usize * self.height as usize
    }

    /// length of all three planes together
    pub fn planar_length(&self) -> usize {
        super::PLANE_COUNT * self.plane_length()
    }
}

#[cfg(test)]
mod tests {
    use super::{Header, BITS_PER_PIXEL};
    use crate::error::Error;

    #[test]
    fn parse_little_endian_fields() {
        let header = Header::parse(&[0x20, 0x03, 0x58, 0x02, 24, 0, 0, 0]).unwrap();
        assert_eq!(header.width, 800);
        assert_eq!(header.height, 600);
        assert_eq!(header.bits_per_pixel, BITS_PER_PIXEL);
    }

    #[test]
    fn reserved_bytes_are_ignored() {
        let header = Header::parse(&[1, 0, 1, 0, 24, 0xAA, 0xBB, 0xCC]).unwrap();
        assert_eq!(header, Header::new(1, 1));
        assert_eq!(header.to_bytes(), [1, 0, 1, 0, 24, 0, 0, 0]);
    }

    #[test]
    fn trailing_bytes_are_not_part_of_header() {
        let header = Header::parse(&[2, 0, 3, 0, 8, 0, 0, 0, 0xFF, 0xFF]).unwrap();
        assert_eq!(header.plane_length(), 6);
        assert_eq!(header.planar_length(), 18);
        assert_eq!(header.bits_per_pixel, 8);
    }

    #[test]
    fn header_fidelity_at_extremes() {
        for (width, height, bits_per_pixel) in
            [(0, 0, 0), (65535, 65535, 255), (1, 65535, 24), (256, 255, 1)]
        {
            let header = Header {
                width,
                height,
                bits_per_pixel,
            };
            assert_eq!(Header::parse(&header.to_bytes()).unwrap(), header);
        }
    }

    #[test]
    fn short_input_is_rejected() {
        for length in 0..8 {
            let bytes = vec![0u8; length];
            match Header::parse(&bytes) {
                Err(Error::TruncatedHeader { length: reported }) => assert_eq!(reported, length),
                other => panic!("Expected truncated header for {} bytes, got {:?}", length, other),
            }
        }
    }
}
