use super::record::{Record, Records};
use crate::Result;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct StreamStatistics {
    pub run_records: usize,
    pub literal_records: usize,
    /// planar bytes produced by run records
    pub run_bytes: usize,
    /// planar bytes produced by literal records
    pub literal_bytes: usize,
}

impl StreamStatistics {
    /// Walk a compressed stream without expanding it
    pub fn collect(stream: &[u8]) -> Result<Self> {
        let mut statistics = Self::default();
        for record in Records::new(stream) {
            match record? {
                Record::Run { length, .. } => {
                    statistics.run_records += 1;
                    statistics.run_bytes += length;
                }
                Record::Literal(bytes) => {
                    statistics.literal_records += 1;
                    statistics.literal_bytes += bytes.len();
                }
            }
        }
        Ok(statistics)
    }

    pub fn expanded_length(&self) -> usize {
        self.run_bytes + self.literal_bytes
    }
}
