use std::io::Write;

use crate::{
    error::Error,
    image::{ImageWriter, PixelBuffer},
};

const MAX_VALUE: u8 = u8::MAX;

/// Writer for ASCII (P3) portable pixmaps, one image row per line
pub struct PPMImageWriter<'a, T: Write> {
    writer: T,
    image: &'a PixelBuffer,
}

impl<'a, T: Write> PPMImageWriter<'a, T> {
    pub fn new(writer: T, image: &'a PixelBuffer) -> Self {
        Self { writer, image }
    }

    fn write_header(&mut self) -> std::io::Result<()> {
        writeln!(self.writer, "P3")?;
        writeln!(self.writer, "{} {}", self.image.width(), self.image.height())?;
        writeln!(self.writer, "{}", MAX_VALUE)
    }

    fn write_pixmap(&mut self) -> std::io::Result<()> {
        self.write_header()?;
        self.write_rows()?;
        self.writer.flush()
    }

    fn write_rows(&mut self) -> std::io::Result<()> {
        for row in self.image.rows() {
            let line = row
                .iter()
                .map(|pixel| format!("{} {} {}", pixel.red, pixel.green, pixel.blue))
                .collect::<Vec<String>>()
                .join("  ");
            writeln!(self.writer, "{}", line)?;
        }
        Ok(())
    }
}

impl<T: Write> ImageWriter for PPMImageWriter<'_, T> {
    fn write_image(&mut self) -> crate::Result<()> {
        self.write_pixmap().map_err(Error::FailedToWriteImageData)
    }
}
