use std::fmt::Display;

#[derive(Debug)]
pub enum Error {
    TruncatedHeader {
        length: usize,
    },
    TruncatedStream {
        offset: usize,
        needed: usize,
        available: usize,
    },
    SizeMismatch {
        expected: usize,
        actual: usize,
    },
    PixelCountMismatch {
        expected: usize,
        actual: usize,
    },
    PPMFileDoesNotContainRequiredToken(&'static str),
    ParsingOfTokenFailed(&'static str),
    IncompletePixelParsed(usize),
    MismatchOfSizeBetweenHeaderAndValues,
    ColorValueExceedsMaxValue(u16, u16),
    UnableToOpenInputFileForReading(String, std::io::Error),
    UnableToOpenOutputFileForWriting(String, std::io::Error),
    FailedToReadImageData(std::io::Error),
    FailedToWriteImageData(std::io::Error),
    FailedToCreateBackup(String, std::io::Error),
    NoImageLoaded,
    DimensionMismatch {
        expected: (u16, u16),
        actual: (u16, u16),
    },
    ExportWorkerFailed(String),
}

impl Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::TruncatedHeader { length } => {
                write!(
                    f,
                    "Container header is truncated. Expected 8 bytes, but got {}.",
                    length
                )
            }
            Self::TruncatedStream {
                offset,
                needed,
                available,
            } => {
                write!(
                    f,
                    "Record at stream offset {} needs {} data bytes, but only {} remain",
                    offset, needed, available
                )
            }
            Self::SizeMismatch { expected, actual } => {
                write!(
                    f,
                    "Decompressed planes have {} bytes, but the header requires {}",
                    actual, expected
                )
            }
            Self::PixelCountMismatch { expected, actual } => {
                write!(
                    f,
                    "Pixel buffer holds {} pixels, but its dimensions require {}",
                    actual, expected
                )
            }
            Self::PPMFileDoesNotContainRequiredToken(token_name) => {
                write!(f, "Expected token '{}' not found in PPM file", token_name)
            }
            Self::ParsingOfTokenFailed(token_name) => {
                write!(f, "Parsing of token '{}' failed", token_name)
            }
            Self::IncompletePixelParsed(number_of_tokens_parsed) => {
                write!(
                    f,
                    "Incomplete pixel parsed. Expected 3 components, but got {}.",
                    number_of_tokens_parsed
                )
            }
            Self::MismatchOfSizeBetweenHeaderAndValues => {
                write!(
                    f,
                    "Number of pixels does not match the size provided in header"
                )
            }
            Self::ColorValueExceedsMaxValue(value, max) => {
                write!(
                    f,
                    "Color value {} is greater than the max value of {}",
                    value, max
                )
            }
            Self::UnableToOpenInputFileForReading(path, error) => {
                write!(
                    f,
                    "Unable to open input file '{}' for reading: {}",
                    path, error
                )
            }
            Self::UnableToOpenOutputFileForWriting(path, error) => {
                write!(
                    f,
                    "Unable to open output file '{}' for writing: {}",
                    path, error
                )
            }
            Self::FailedToReadImageData(error) => {
                write!(f, "Failed to read image data: {}", error)
            }
            Self::FailedToWriteImageData(error) => {
                write!(f, "Failed to write image data: {}", error)
            }
            Self::FailedToCreateBackup(path, error) => {
                write!(f, "Failed to create backup '{}': {}", path, error)
            }
            Self::NoImageLoaded => write!(f, "No image loaded"),
            Self::DimensionMismatch { expected, actual } => {
                write!(
                    f,
                    "Replacement image is {}x{}, but the loaded texture is {}x{}",
                    actual.0, actual.1, expected.0, expected.1
                )
            }
            Self::ExportWorkerFailed(path) => {
                write!(f, "Export worker for '{}' terminated unexpectedly", path)
            }
        }
    }
}

impl std::error::Error for Error {}
