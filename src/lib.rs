use std::{
    fs::{File, OpenOptions},
    io::{BufReader, Read},
    path::{Path, PathBuf},
};

pub use cli::CLIParser;
pub use error::Error;
use image::{reader::ppm::PPMImageReader, ImageReader};
use threadpool::ThreadPool;

pub mod binary_stream;
mod cli;
pub mod color;
mod error;
pub mod export;
pub mod gbb;
pub mod image;
mod logger;
pub mod session;

pub use export::ExportOutcome;
pub use gbb::{decode, encode, Header, StreamStatistics};
pub use image::PixelBuffer;
pub use session::{Metadata, Session};

pub type Result<T> = std::result::Result<T, error::Error>;

pub enum Arguments {
    Info {
        input_file: PathBuf,
    },
    Export {
        input_files: Vec<PathBuf>,
        output_directory: Option<PathBuf>,
        number_of_threads: usize,
    },
    Replace {
        input_file: PathBuf,
        image_file: PathBuf,
    },
    Roundtrip {
        input_file: PathBuf,
    },
}

pub struct TextureInfo {
    pub header: Header,
    pub statistics: StreamStatistics,
    pub container_length: usize,
}

fn open_input_file(file_path: &Path) -> Result<File> {
    File::open(file_path).map_err(|e| {
        Error::UnableToOpenInputFileForReading(file_path.display().to_string(), e)
    })
}

fn open_output_file(file_path: &Path) -> Result<File> {
    OpenOptions::new()
        .write(true)
        .create(true)
        .truncate(true)
        .open(file_path)
        .map_err(|e| {
            Error::UnableToOpenOutputFileForWriting(file_path.display().to_string(), e)
        })
}

fn read_file(file_path: &Path) -> Result<Vec<u8>> {
    let mut bytes = Vec::new();
    BufReader::new(open_input_file(file_path)?)
        .read_to_end(&mut bytes)
        .map_err(Error::FailedToReadImageData)?;
    Ok(bytes)
}

/// Header and record statistics of a texture, fully validated
pub fn read_texture_info(input_file: &Path) -> Result<TextureInfo> {
    let bytes = read_file(input_file)?;
    let (header, _) = gbb::decode(&bytes)?;
    let statistics = StreamStatistics::collect(&bytes[gbb::HEADER_LENGTH..])?;
    Ok(TextureInfo {
        header,
        statistics,
        container_length: bytes.len(),
    })
}

pub fn export_gbb_to_ppm(
    input_files: &[PathBuf],
    output_directory: Option<&Path>,
    number_of_threads: usize,
) -> Vec<ExportOutcome> {
    let threadpool = ThreadPool::new(number_of_threads.max(1));
    export::export_all(input_files, output_directory, &threadpool)
}

/// Replace the pixels of a texture with a PPM image and save it in place
///
/// Returns whether a backup of the original texture was created.
pub fn replace_texture(input_file: &Path, image_file: &Path) -> Result<bool> {
    let mut session = Session::new();
    session.load(input_file)?;
    let replacement = PPMImageReader::new(BufReader::new(open_input_file(image_file)?))
        .read_image()?;
    session.replace_image(replacement)?;
    session.save()
}

/// Decode and re-encode a texture in memory, true if the pixels survive unchanged
pub fn check_roundtrip(input_file: &Path) -> Result<bool> {
    let bytes = read_file(input_file)?;
    let (_, image) = gbb::decode(&bytes)?;
    let (_, reencoded) = gbb::decode(&gbb::encode(&image))?;
    Ok(reencoded == image)
}
