use std::io::Read;

use super::super::{ImageReader, PixelBuffer};
use crate::error::Error;
use crate::gbb::{self, Header};

/// Reader for GBB texture containers
pub struct GbbImageReader<T: Read> {
    reader: T,
    header: Option<Header>,
}

impl<T: Read> GbbImageReader<T> {
    pub fn new(reader: T) -> Self {
        Self {
            reader,
            header: None,
        }
    }

    /// header of the last successfully read container
    pub fn header(&self) -> Option<Header> {
        self.header
    }
}

impl<T: Read> ImageReader for GbbImageReader<T> {
    fn read_image(&mut self) -> crate::Result<PixelBuffer> {
        let mut bytes = Vec::new();
        self.reader
            .read_to_end(&mut bytes)
            .map_err(Error::FailedToReadImageData)?;
        let (header, image) = gbb::decode(&bytes)?;
        self.header = Some(header);
        Ok(image)
    }
}
