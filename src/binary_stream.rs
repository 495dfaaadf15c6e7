/// Bounds-checked cursor over a borrowed byte slice
///
/// Every read either returns the requested bytes and advances,
/// or returns `None` and leaves the cursor where it was.
pub struct ByteReader<'a> {
    /// the underlying input
    bytes: &'a [u8],
    /// index of the next unread byte
    position: usize,
}

impl<'a> ByteReader<'a> {
    pub fn new(bytes: &'a [u8]) -> ByteReader<'a> {
        ByteReader { bytes, position: 0 }
    }

    pub fn position(&self) -> usize {
        self.position
    }

    pub fn remaining(&self) -> usize {
        self.bytes.len() - self.position
    }

    pub fn is_exhausted(&self) -> bool {
        self.remaining() == 0
    }

    pub fn read_u8(&mut self) -> Option<u8> {
        let byte = *self.bytes.get(self.position)?;
        self.position += 1;
        Some(byte)
    }

    pub fn read_u16_le(&mut self) -> Option<u16> {
        let bytes = self.read_slice(2)?;
        Some(u16::from_le_bytes([bytes[0], bytes[1]]))
    }

    /// read exactly `count` bytes without copying them
    pub fn read_slice(&mut self, count: usize) -> Option<&'a [u8]> {
        let end = self.position.checked_add(count)?;
        let slice = self.bytes.get(self.position..end)?;
        self.position = end;
        Some(slice)
    }

    pub fn skip(&mut self, count: usize) -> Option<()> {
        self.read_slice(count).map(|_| ())
    }
}

#[cfg(test)]
mod test {
    use super::ByteReader;

    #[test]
    fn little_endian_test() {
        let mut reader = ByteReader::new(&[0x34, 0x12, 0xFF]);
        assert_eq!(reader.read_u16_le(), Some(0x1234));
        assert_eq!(reader.read_u8(), Some(0xFF));
        assert!(reader.is_exhausted());
    }

    #[test]
    fn short_read_keeps_position_test() {
        let mut reader = ByteReader::new(&[1, 2, 3]);
        reader.skip(1).expect("skipping one byte should not fail");
        assert_eq!(reader.read_slice(3), None);
        assert_eq!(reader.position(), 1);
        assert_eq!(reader.remaining(), 2);
        assert_eq!(reader.read_slice(2), Some(&[2u8, 3][..]));
    }

    #[test]
    fn empty_input_test() {
        let mut reader = ByteReader::new(&[]);
        assert_eq!(reader.read_u8(), None);
        assert_eq!(reader.read_u16_le(), None);
        assert_eq!(reader.read_slice(0), Some(&[0u8; 0][..]));
    }
}
