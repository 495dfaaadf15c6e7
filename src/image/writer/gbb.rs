use std::io::Write;

use crate::{
    error::Error,
    gbb,
    image::{ImageWriter, PixelBuffer},
};

pub struct GbbImageWriter<'a, T: Write> {
    writer: T,
    image: &'a PixelBuffer,
}

impl<'a, T: Write> GbbImageWriter<'a, T> {
    pub fn new(writer: T, image: &'a PixelBuffer) -> Self {
        Self { writer, image }
    }
}

impl<T: Write> ImageWriter for GbbImageWriter<'_, T> {
    fn write_image(&mut self) -> crate::Result<()> {
        let container = gbb::encode(self.image);
        self.writer
            .write_all(&container)
            .map_err(Error::FailedToWriteImageData)?;
        self.writer.flush().map_err(Error::FailedToWriteImageData)
    }
}
