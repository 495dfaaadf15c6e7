use super::record::{Record, Records, MAX_RUN_LENGTH};
use crate::{error::Error, Result};

/// Expand a compressed stream into planar bytes
///
/// The whole stream is consumed. The result must be exactly
/// `expected_length` bytes long, anything else is a [`Error::SizeMismatch`].
/// Output never grows past `expected_length`: the first record that would
/// overflow it fails immediately.
pub fn decompress(stream: &[u8], expected_length: usize) -> Result<Vec<u8>> {
    // a two byte run record is the densest encoding, so the stream bounds the output
    let capacity_bound = (stream.len() / 2).saturating_mul(MAX_RUN_LENGTH);
    let mut planes = Vec::with_capacity(expected_length.min(capacity_bound));
    let mut run_records = 0usize;
    let mut literal_records = 0usize;
    for record in Records::new(stream) {
        let record = record?;
        let expanded_length = planes.len() + record.expanded_length();
        if expanded_length > expected_length {
            return Err(Error::SizeMismatch {
                expected: expected_length,
                actual: expanded_length,
            });
        }
        match record {
            Record::Run { length, value } => {
                planes.resize(planes.len() + length, value);
                run_records += 1;
            }
            Record::Literal(bytes) => {
                planes.extend_from_slice(bytes);
                literal_records += 1;
            }
        }
    }
    log::debug!(
        "decompressed {} stream bytes from {} run and {} literal records into {} bytes",
        stream.len(),
        run_records,
        literal_records,
        planes.len()
    );
    if planes.len() != expected_length {
        return Err(Error::SizeMismatch {
            expected: expected_length,
            actual: planes.len(),
        });
    }
    Ok(planes)
}

#[cfg(test)]
mod tests {
    use super::decompress;
    use crate::error::Error;

    #[test]
    fn expand_run() {
        assert_eq!(decompress(&[0x00, 0x42], 3).unwrap(), vec![0x42; 3]);
        assert_eq!(decompress(&[0x7F, 0x42], 130).unwrap(), vec![0x42; 130]);
    }

    #[test]
    fn expand_literal() {
        assert_eq!(
            decompress(&[0xFA, 10, 20, 30, 40, 50, 60], 6).unwrap(),
            vec![10, 20, 30, 40, 50, 60]
        );
    }

    #[test]
    fn expand_longest_literal() {
        let mut stream = vec![0x80];
        stream.extend(0..128u8);
        assert_eq!(decompress(&stream, 128).unwrap(), (0..128u8).collect::<Vec<u8>>());
    }

    #[test]
    fn expand_mixed_records() {
        let stream = [0x01, 5, 0xFF, 6, 0x00, 7];
        assert_eq!(
            decompress(&stream, 8).unwrap(),
            vec![5, 5, 5, 5, 6, 7, 7, 7]
        );
    }

    #[test]
    fn empty_stream() {
        assert_eq!(decompress(&[], 0).unwrap(), Vec::<u8>::new());
    }

    #[test]
    fn short_output_is_rejected() {
        match decompress(&[0x00, 1], 4) {
            Err(Error::SizeMismatch {
                expected: 4,
                actual: 3,
            }) => {}
            other => panic!("Expected size mismatch, got {:?}", other),
        }
    }

    #[test]
    fn long_output_is_rejected() {
        match decompress(&[0x01, 1], 3) {
            Err(Error::SizeMismatch {
                expected: 3,
                actual: 4,
            }) => {}
            other => panic!("Expected size mismatch, got {:?}", other),
        }
    }

    #[test]
    fn truncated_record_is_rejected() {
        match decompress(&[0x00, 1, 0x10], 3) {
            Err(Error::TruncatedStream { offset: 2, .. }) => {}
            other => panic!("Expected truncated stream, got {:?}", other),
        }
    }

    #[test]
    fn overlong_stream_stops_at_first_excess_record() {
        let stream = [0x7F, 0xAA].repeat(1 << 16);
        match decompress(&stream, 3) {
            Err(Error::SizeMismatch {
                expected: 3,
                actual: 130,
            }) => {}
            other => panic!("Expected size mismatch, got {:?}", other),
        }
    }

    #[test]
    fn excess_after_exact_fill_is_rejected() {
        match decompress(&[0x00, 1, 0xFF, 2], 3) {
            Err(Error::SizeMismatch {
                expected: 3,
                actual: 4,
            }) => {}
            other => panic!("Expected size mismatch, got {:?}", other),
        }
    }

    #[test]
    fn huge_header_does_not_preallocate() {
        match decompress(&[0x00, 1], usize::MAX / 2) {
            Err(Error::SizeMismatch { actual: 3, .. }) => {}
            other => panic!("Expected size mismatch, got {:?}", other),
        }
    }
}
