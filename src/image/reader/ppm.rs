use std::io::Read;

use super::super::ImageReader;
use super::super::PixelBuffer;
use crate::color::{RangeColorFormat, Rgb};
use crate::error::Error;

/// Reader for ASCII (P3) portable pixmaps
pub struct PPMImageReader<T: Read> {
    reader: T,
}

impl<T: Read> PPMImageReader<T> {
    pub fn new(reader: T) -> Self {
        Self { reader }
    }
}

impl<T: Read> ImageReader for PPMImageReader<T> {
    fn read_image(&mut self) -> crate::Result<PixelBuffer> {
        let mut tokenizer = PPMTokenizer::new(&mut self.reader);
        let result = PPMParser::new(&mut tokenizer).parse_tokens();
        match tokenizer.error.take() {
            Some(error) => Err(Error::FailedToReadImageData(error)),
            None => result,
        }
    }
}

struct PPMTokenizer<'a, R: Read> {
    reader: &'a mut R,
    buffer: Vec<u8>,
    error: Option<std::io::Error>,
}

impl<'a, R: Read> PPMTokenizer<'a, R> {
    pub fn new(reader: &'a mut R) -> Self {
        PPMTokenizer {
            reader,
            buffer: Vec::new(),
            error: None,
        }
    }

    fn read_byte(&mut self) -> Option<u8> {
        let mut byte = [0; 1];
        loop {
            match self.reader.read(&mut byte) {
                Ok(0) => return None,
                Ok(_) => return Some(byte[0]),
                Err(e) if e.kind() == std::io::ErrorKind::Interrupted => continue,
                Err(e) => {
                    self.error = Some(e);
                    return None;
                }
            }
        }
    }
}

impl<R: Read> Iterator for PPMTokenizer<'_, R> {
    type Item = String;

    fn next(&mut self) -> Option<Self::Item> {
        self.buffer.clear();
        let mut in_comment = false;

        while let Some(byte) = self.read_byte() {
            if in_comment {
                if byte == b'\n' {
                    in_comment = false;
                }
                continue;
            }
            if byte == b'#' {
                in_comment = true;
                continue;
            }
            if byte.is_ascii_whitespace() {
                if !self.buffer.is_empty() {
                    break;
                }
            } else {
                self.buffer.push(byte);
            }
        }

        if self.buffer.is_empty() {
            return None;
        }

        // non UTF-8 tokens can never parse as numbers; keep them lossy and let the parser fail
        Some(String::from_utf8_lossy(&self.buffer).into_owned())
    }
}

const P3_HEADER_TOKEN_NAME: &str = "P3 Header";
const WIDTH_HEADER_TOKEN_NAME: &str = "Width Header";
const HEIGHT_HEADER_TOKEN_NAME: &str = "Height Header";
const MAX_VALUE_HEADER_TOKEN_NAME: &str = "Max Value Header";
const COLOR_COMPONENT_VALUE_TOKEN_NAME: &str = "Color Component Value";

#[derive(Clone, Copy)]
struct Dot {
    buffer: [u16; 3],
    index: usize,
}

impl Dot {
    fn new() -> Self {
        Self {
            buffer: [u16::default(); 3],
            index: 0,
        }
    }

    fn red(&self) -> u16 {
        self.buffer[0]
    }

    fn green(&self) -> u16 {
        self.buffer[1]
    }

    fn blue(&self) -> u16 {
        self.buffer[2]
    }

    fn push_color_component(&mut self, component: u16) {
        if self.is_complete() {
            return;
        }
        self.buffer[self.index] = component;
        self.index += 1;
    }

    fn is_complete(&self) -> bool {
        self.index == 3
    }

    fn reset(&mut self) {
        self.index = 0;
    }

    fn is_empty(&self) -> bool {
        self.index == 0
    }
}

struct PPMParser<'a, T> {
    tokenizer: &'a mut T,
}

impl<'a, T> PPMParser<'a, T>
where
    T: Iterator<Item = String>,
{
    fn new(tokenizer: &'a mut T) -> Self {
        Self { tokenizer }
    }

    fn parse_tokens(&mut self) -> crate::Result<PixelBuffer> {
        let header = self.parse_header()?;
        Self::check_header_version(&header)?;
        let width = self.parse_width()?;
        let height = self.parse_height()?;
        let max_value = self.parse_max_value()?;
        let dots = self.parse_all_dots()?;
        Self::check_parsed_dots_length_match_header_information(&dots, width, height)?;
        let pixels = dots
            .into_iter()
            .map(|d| RangeColorFormat::new(max_value, d.red(), d.green(), d.blue()).map(Rgb::from))
            .collect::<crate::Result<Vec<Rgb>>>()?;
        log::debug!("parsed {}x{} PPM image, max value {}", width, height, max_value);
        PixelBuffer::new(width, height, pixels)
    }

    fn check_parsed_dots_length_match_header_information(
        dots: &[Dot],
        width: u16,
        height: u16,
    ) -> crate::Result<()> {
        let expected_number_of_dots = width as usize * height as usize;
        if dots.len() != expected_number_of_dots {
            return Err(Error::MismatchOfSizeBetweenHeaderAndValues);
        }
        Ok(())
    }

    fn check_header_version(header: &str) -> crate::Result<()> {
        if header != "P3" {
            return Err(Error::PPMFileDoesNotContainRequiredToken(
                P3_HEADER_TOKEN_NAME,
            ));
        }
        Ok(())
    }

    fn parse_header(&mut self) -> crate::Result<String> {
        self.tokenizer
            .next()
            .ok_or(Error::PPMFileDoesNotContainRequiredToken(
                P3_HEADER_TOKEN_NAME,
            ))
    }

    fn parse_dimension(&mut self, token_name: &'static str) -> crate::Result<u16> {
        self.tokenizer
            .next()
            .ok_or(Error::PPMFileDoesNotContainRequiredToken(token_name))?
            .parse()
            .map_err(|_| Error::ParsingOfTokenFailed(token_name))
    }

    fn parse_width(&mut self) -> crate::Result<u16> {
        self.parse_dimension(WIDTH_HEADER_TOKEN_NAME)
    }

    fn parse_height(&mut self) -> crate::Result<u16> {
        self.parse_dimension(HEIGHT_HEADER_TOKEN_NAME)
    }

    fn parse_max_value(&mut self) -> crate::Result<u16> {
        let max_value = self.parse_dimension(MAX_VALUE_HEADER_TOKEN_NAME)?;
        if max_value == 0 {
            return Err(Error::ParsingOfTokenFailed(MAX_VALUE_HEADER_TOKEN_NAME));
        }
        Ok(max_value)
    }

    fn parse_all_dots(&mut self) -> crate::Result<Vec<Dot>> {
        let mut current_dot = Dot::new();
        let mut dots = Vec::new();
        for token in self.tokenizer.by_ref() {
            let component = Self::parse_color_value(&token)?;
            current_dot.push_color_component(component);
            if current_dot.is_complete() {
                dots.push(current_dot);
                current_dot.reset();
            }
        }
        Self::check_pixel_was_complete(&current_dot)?;
        Ok(dots)
    }

    fn check_pixel_was_complete(dot: &Dot) -> crate::Result<()> {
        if !dot.is_empty() {
            return Err(Error::IncompletePixelParsed(dot.index));
        }
        Ok(())
    }

    fn parse_color_value(token: &str) -> crate::Result<u16> {
        token
            .parse()
            .map_err(|_| Error::ParsingOfTokenFailed(COLOR_COMPONENT_VALUE_TOKEN_NAME))
    }
}
