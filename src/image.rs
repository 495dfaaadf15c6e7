use crate::{color::Rgb, error::Error};

pub mod reader;
pub mod writer;

pub trait ImageReader {
    fn read_image(&mut self) -> crate::Result<PixelBuffer>;
}

pub trait ImageWriter {
    fn write_image(&mut self) -> crate::Result<()>;
}

/// Interleaved RGB image, row-major, one triplet per pixel
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PixelBuffer {
    width: u16,
    height: u16,
    pixels: Vec<Rgb>,
}

impl PixelBuffer {
    pub fn new(width: u16, height: u16, pixels: Vec<Rgb>) -> crate::Result<Self> {
        let expected = width as usize * height as usize;
        if pixels.len() != expected {
            return Err(Error::PixelCountMismatch {
                expected,
                actual: pixels.len(),
            });
        }
        Ok(Self {
            width,
            height,
            pixels,
        })
    }

    /// Image with every pixel set to `fill`
    pub fn filled(width: u16, height: u16, fill: Rgb) -> Self {
        Self {
            width,
            height,
            pixels: vec![fill; width as usize * height as usize],
        }
    }

    pub fn width(&self) -> u16 {
        self.width
    }

    pub fn height(&self) -> u16 {
        self.height
    }

    pub fn dimensions(&self) -> (u16, u16) {
        (self.width, self.height)
    }

    pub fn pixel_count(&self) -> usize {
        self.pixels.len()
    }

    pub fn pixels(&self) -> &[Rgb] {
        &self.pixels
    }

    pub fn pixel(&self, column_index: u16, row_index: u16) -> Option<Rgb> {
        if column_index >= self.width || row_index >= self.height {
            return None;
        }
        let index = column_index as usize + row_index as usize * self.width as usize;
        self.pixels.get(index).copied()
    }

    pub fn rows(&self) -> impl Iterator<Item = &[Rgb]> {
        // a zero width image has no pixels, so any nonzero chunk size yields no rows
        self.pixels.chunks(self.width.max(1) as usize)
    }
}

#[cfg(test)]
mod test {
    use super::PixelBuffer;
    use crate::{color::Rgb, error::Error};

    fn create_test_image() -> PixelBuffer {
        let pixels = (0..6u8).map(|v| Rgb::new(v, v * 2, v * 3)).collect();
        PixelBuffer::new(3, 2, pixels).unwrap()
    }

    #[test]
    fn pixel_lookup_test() {
        let image = create_test_image();
        assert_eq!(image.pixel(0, 0), Some(Rgb::new(0, 0, 0)));
        assert_eq!(image.pixel(2, 0), Some(Rgb::new(2, 4, 6)));
        assert_eq!(image.pixel(1, 1), Some(Rgb::new(4, 8, 12)));
        assert_eq!(image.pixel(3, 0), None);
        assert_eq!(image.pixel(0, 2), None);
    }

    #[test]
    fn rows_test() {
        let image = create_test_image();
        let rows: Vec<&[Rgb]> = image.rows().collect();
        assert_eq!(rows.len(), 2);
        assert_eq!(rows[1][0], Rgb::new(3, 6, 9));
    }

    #[test]
    fn pixel_count_mismatch_test() {
        let result = PixelBuffer::new(2, 2, vec![Rgb::default(); 3]);
        if let Err(Error::PixelCountMismatch { expected, actual }) = result {
            assert_eq!(expected, 4);
            assert_eq!(actual, 3);
            return;
        }
        panic!("Pixel count mismatch not detected");
    }

    #[test]
    fn empty_image_test() {
        let image = PixelBuffer::new(0, 5, Vec::new()).unwrap();
        assert_eq!(image.pixel_count(), 0);
        assert_eq!(image.rows().count(), 0);
    }
}
