use crate::{color::Rgb, error::Error, image::PixelBuffer, Result};

pub const PLANE_COUNT: usize = 3;

/// Interleave blue, green and red planes into RGB pixels
pub fn planar_to_pixels(planes: &[u8], width: u16, height: u16) -> Result<PixelBuffer> {
    let plane_length = width as usize * height as usize;
    if planes.len() != PLANE_COUNT * plane_length {
        return Err(Error::SizeMismatch {
            expected: PLANE_COUNT * plane_length,
            actual: planes.len(),
        });
    }
    let (blue, rest) = planes.split_at(plane_length);
    let (green, red) = rest.split_at(plane_length);
    let pixels = red
        .iter()
        .zip(green)
        .zip(blue)
        .map(|((&red, &green), &blue)| Rgb { red, green, blue })
        .collect();
    PixelBuffer::new(width, height, pixels)
}

/// Split RGB pixels into blue, green and red planes
pub fn pixels_to_planar(image: &PixelBuffer) -> Vec<u8> {
    let plane_length = image.pixel_count();
    let mut planes = vec![0; PLANE_COUNT * plane_length];
    let (blue, rest) = planes.split_at_mut(plane_length);
    let (green, red) = rest.split_at_mut(plane_length);
    for (index, pixel) in image.pixels().iter().enumerate() {
        blue[index] = pixel.blue;
        green[index] = pixel.green;
        red[index] = pixel.red;
    }
    planes
}
