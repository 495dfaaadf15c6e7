use super::record::{Record, MAX_RUN_LENGTH, MIN_RUN_LENGTH};

/// Literal records are capped one byte below what the format allows.
/// Existing files were written with this limit.
const MAX_ENCODED_LITERAL_LENGTH: usize = 127;

/// Compress planar bytes into a stream of run and literal records
///
/// Greedy, left to right: a run of at least three equal bytes becomes a
/// run record, everything else is gathered into literal records that stop
/// right before the next run of three.
pub fn compress(planes: &[u8]) -> Vec<u8> {
    Compressor::new(planes).compress()
}

struct Compressor<'a> {
    planes: &'a [u8],
    position: usize,
    output: Vec<u8>,
}

impl<'a> Compressor<'a> {
    fn new(planes: &'a [u8]) -> Self {
        Self {
            planes,
            position: 0,
            output: Vec::with_capacity(planes.len() / 2 + 1),
        }
    }

    fn compress(mut self) -> Vec<u8> {
        while self.position < self.planes.len() {
            let record = self.next_record();
            record.write_to(&mut self.output);
            self.position += record.expanded_length();
        }
        self.output
    }

    fn next_record(&self) -> Record<'a> {
        let run_length = self.run_length_at(self.position);
        if run_length >= MIN_RUN_LENGTH {
            return Record::Run {
                length: run_length,
                value: self.planes[self.position],
            };
        }
        let planes = self.planes;
        Record::Literal(&planes[self.position..self.literal_end()])
    }

    fn run_length_at(&self, start: usize) -> usize {
        let value = self.planes[start];
        self.planes[start..]
            .iter()
            .take(MAX_RUN_LENGTH)
            .take_while(|&&byte| byte == value)
            .count()
    }

    fn literal_end(&self) -> usize {
        let mut end = self.position;
        while end < self.planes.len()
            && end - self.position < MAX_ENCODED_LITERAL_LENGTH
            && !self.starts_run(end)
        {
            end += 1;
        }
        end
    }

    fn starts_run(&self, index: usize) -> bool {
        match self.planes.get(index..index + MIN_RUN_LENGTH) {
            Some([first, second, third]) => first == second && second == third,
            _ => false,
        }
    }
}
