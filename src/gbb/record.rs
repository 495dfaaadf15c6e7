use crate::{binary_stream::ByteReader, error::Error, Result};

/// control bytes at or above this value introduce a literal record
pub const LITERAL_CONTROL_THRESHOLD: u8 = 0x80;
pub const MIN_RUN_LENGTH: usize = 3;
pub const MAX_RUN_LENGTH: usize = 130;
pub const MAX_LITERAL_LENGTH: usize = 128;

/// A single record of the compressed stream
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Record<'a> {
    Run { length: usize, value: u8 },
    Literal(&'a [u8]),
}

impl Record<'_> {
    /// number of planar bytes this record expands to
    pub fn expanded_length(&self) -> usize {
        match self {
            Self::Run { length, .. } => *length,
            Self::Literal(bytes) => bytes.len(),
        }
    }

    pub fn control_byte(&self) -> u8 {
        match self {
            Self::Run { length, .. } => {
                debug_assert!((MIN_RUN_LENGTH..=MAX_RUN_LENGTH).contains(length));
                (length - MIN_RUN_LENGTH) as u8
            }
            Self::Literal(bytes) => {
                debug_assert!((1..=MAX_LITERAL_LENGTH).contains(&bytes.len()));
                (0x100 - bytes.len()) as u8
            }
        }
    }

    pub fn write_to(&self, output: &mut Vec<u8>) {
        output.push(self.control_byte());
        match self {
            Self::Run { value, .. } => output.push(*value),
            Self::Literal(bytes) => output.extend_from_slice(bytes),
        }
    }
}

/// Iterator over the records of a compressed stream
///
/// Yields at most one error, after which iteration ends.
pub struct Records<'a> {
    reader: ByteReader<'a>,
    failed: bool,
}

impl<'a> Records<'a> {
    pub fn new(stream: &'a [u8]) -> Self {
        Self {
            reader: ByteReader::new(stream),
            failed: false,
        }
    }

    fn read_run(&mut self, offset: usize, control: u8) -> Result<Record<'a>> {
        let value = self.reader.read_u8().ok_or(Error::TruncatedStream {
            offset,
            needed: 1,
            available: 0,
        })?;
        Ok(Record::Run {
            length: control as usize + MIN_RUN_LENGTH,
            value,
        })
    }

    fn read_literal(&mut self, offset: usize, control: u8) -> Result<Record<'a>> {
        let count = 0x100 - control as usize;
        let available = self.reader.remaining();
        let bytes = self.reader.read_slice(count).ok_or(Error::TruncatedStream {
            offset,
            needed: count,
            available,
        })?;
        Ok(Record::Literal(bytes))
    }
}

impl<'a> Iterator for Records<'a> {
    type Item = Result<Record<'a>>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.failed {
            return None;
        }
        let offset = self.reader.position();
        let control = self.reader.read_u8()?;
        let record = if control < LITERAL_CONTROL_THRESHOLD {
            self.read_run(offset, control)
        } else {
            self.read_literal(offset, control)
        };
        self.failed = record.is_err();
        Some(record)
    }
}

#[cfg(test)]
mod tests {
    use super::{Record, Records};
    use crate::error::Error;

    #[test]
    fn control_byte_ranges() {
        assert_eq!(Record::Run { length: 3, value: 0 }.control_byte(), 0x00);
        assert_eq!(Record::Run { length: 130, value: 0 }.control_byte(), 0x7F);
        assert_eq!(Record::Literal(&[0]).control_byte(), 0xFF);
        assert_eq!(Record::Literal(&[0; 127]).control_byte(), 0x81);
        assert_eq!(Record::Literal(&[0; 128]).control_byte(), 0x80);
    }

    #[test]
    fn parse_mixed_records() {
        let stream = [0x02, 7, 0xFE, 1, 2, 0x7F, 9, 0x80];
        let literal = [0u8; 128];
        let mut stream = stream.to_vec();
        stream.extend_from_slice(&literal);
        let records: Vec<Record> = Records::new(&stream).collect::<Result<_, _>>().unwrap();
        assert_eq!(
            records,
            vec![
                Record::Run { length: 5, value: 7 },
                Record::Literal(&[1, 2]),
                Record::Run {
                    length: 130,
                    value: 9
                },
                Record::Literal(&literal),
            ]
        );
    }

    #[test]
    fn run_without_data_byte() {
        let mut records = Records::new(&[0xFF, 1, 0x05]);
        assert!(records.next().unwrap().is_ok());
        match records.next() {
            Some(Err(Error::TruncatedStream {
                offset: 2,
                needed: 1,
                available: 0,
            })) => {}
            other => panic!("Expected truncated stream, got {:?}", other),
        }
        assert!(records.next().is_none());
    }

    #[test]
    fn literal_past_end() {
        let mut records = Records::new(&[0xFC, 1, 2]);
        match records.next() {
            Some(Err(Error::TruncatedStream {
                offset: 0,
                needed: 4,
                available: 2,
            })) => {}
            other => panic!("Expected truncated stream, got {:?}", other),
        }
    }

    #[test]
    fn write_records() {
        let mut output = Vec::new();
        Record::Run { length: 4, value: 0xAB }.write_to(&mut output);
        Record::Literal(&[1, 2, 3]).write_to(&mut output);
        assert_eq!(output, vec![0x01, 0xAB, 0xFD, 1, 2, 3]);
    }
}
