use std::{
    collections::HashSet,
    ffi::OsString,
    fs,
    io::{self, BufReader, BufWriter, Write},
    path::{Path, PathBuf},
};

use crate::{
    error::Error,
    gbb,
    image::{writer::gbb::GbbImageWriter, ImageWriter, PixelBuffer},
    open_input_file, open_output_file, read_file, Result,
};

const BACKUP_EXTENSION: &str = ".bak";
const TEMPORARY_EXTENSION: &str = ".tmp";

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Metadata {
    pub width: u16,
    pub height: u16,
}

impl std::fmt::Display for Metadata {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "Dimensions: {}x{}\nFormat: 24-bit RGB",
            self.width, self.height
        )
    }
}

/// Editing state of one loaded texture
///
/// Before the first save over a source file, the original bytes are copied
/// to `<source>.bak`. This happens at most once per source path and session,
/// and an already existing backup file is never overwritten.
#[derive(Default)]
pub struct Session {
    image: Option<PixelBuffer>,
    source_path: Option<PathBuf>,
    backed_up: HashSet<PathBuf>,
}

impl Session {
    pub fn new() -> Self {
        Self::default()
    }

    /// Load a container, replacing the current image only on success
    pub fn load(&mut self, path: &Path) -> Result<&PixelBuffer> {
        let (_, image) = gbb::decode(&read_file(path)?)?;
        log::info!(
            "loaded {} ({}x{})",
            path.display(),
            image.width(),
            image.height()
        );
        self.source_path = Some(path.to_path_buf());
        Ok(self.image.insert(image))
    }

    pub fn image(&self) -> Option<&PixelBuffer> {
        self.image.as_ref()
    }

    pub fn source_path(&self) -> Option<&Path> {
        self.source_path.as_deref()
    }

    pub fn metadata(&self) -> Option<Metadata> {
        self.image.as_ref().map(|image| Metadata {
            width: image.width(),
            height: image.height(),
        })
    }

    /// Swap in new pixels of the same dimensions as the loaded image
    pub fn replace_image(&mut self, replacement: PixelBuffer) -> Result<()> {
        let current = self.image.as_ref().ok_or(Error::NoImageLoaded)?;
        if current.dimensions() != replacement.dimensions() {
            return Err(Error::DimensionMismatch {
                expected: current.dimensions(),
                actual: replacement.dimensions(),
            });
        }
        self.image = Some(replacement);
        Ok(())
    }

    /// Encode the current image over its source file
    ///
    /// The container is written to a sibling temporary file that is then
    /// renamed over the source, so a failed write leaves the source as it was.
    /// Returns whether a backup was created by this call.
    pub fn save(&mut self) -> Result<bool> {
        let (image, source_path) = match (&self.image, &self.source_path) {
            (Some(image), Some(source_path)) => (image, source_path.clone()),
            _ => return Err(Error::NoImageLoaded),
        };
        let container = gbb::encode(image);
        let backup_created = self.ensure_backup(&source_path)?;
        replace_file(&source_path, &container)?;
        log::info!(
            "saved {} ({} bytes)",
            source_path.display(),
            container.len()
        );
        Ok(backup_created)
    }

    /// Encode the current image into a different file, leaving the source alone
    pub fn save_as(&self, path: &Path) -> Result<()> {
        let image = self.image.as_ref().ok_or(Error::NoImageLoaded)?;
        let writer = BufWriter::new(open_output_file(path)?);
        GbbImageWriter::new(writer, image).write_image()
    }

    fn ensure_backup(&mut self, source_path: &Path) -> Result<bool> {
        if self.backed_up.contains(source_path) {
            return Ok(false);
        }
        let backup_path = backup_path(source_path);
        if backup_path.exists() {
            log::info!("keeping existing backup {}", backup_path.display());
            self.backed_up.insert(source_path.to_path_buf());
            return Ok(false);
        }
        copy_to_backup(source_path, &backup_path)?;
        log::info!("created backup {}", backup_path.display());
        self.backed_up.insert(source_path.to_path_buf());
        Ok(true)
    }
}

/// `texture.GBB` is backed up as `texture.GBB.bak`
pub fn backup_path(source_path: &Path) -> PathBuf {
    sibling_path(source_path, BACKUP_EXTENSION)
}

fn sibling_path(path: &Path, extension: &str) -> PathBuf {
    let mut file_name: OsString = path.as_os_str().to_owned();
    file_name.push(extension);
    PathBuf::from(file_name)
}

fn replace_file(path: &Path, contents: &[u8]) -> Result<()> {
    let temporary_path = sibling_path(path, TEMPORARY_EXTENSION);
    let written = write_file(&temporary_path, contents).and_then(|_| {
        fs::rename(&temporary_path, path)
            .map_err(|e| Error::UnableToOpenOutputFileForWriting(path.display().to_string(), e))
    });
    if written.is_err() && temporary_path.is_file() {
        let _ = fs::remove_file(&temporary_path);
    }
    written
}

fn write_file(path: &Path, contents: &[u8]) -> Result<()> {
    let mut writer = BufWriter::new(open_output_file(path)?);
    writer
        .write_all(contents)
        .and_then(|_| writer.flush())
        .and_then(|_| writer.get_ref().sync_all())
        .map_err(Error::FailedToWriteImageData)
}

fn copy_to_backup(source_path: &Path, backup_path: &Path) -> Result<()> {
    let backup_error = |e: io::Error| Error::FailedToCreateBackup(backup_path.display().to_string(), e);
    let mut original = BufReader::new(open_input_file(source_path)?);
    let backup = fs::OpenOptions::new()
        .write(true)
        .create_new(true)
        .open(backup_path)
        .map_err(backup_error)?;
    let mut backup = BufWriter::new(backup);
    io::copy(&mut original, &mut backup)
        .and_then(|_| backup.flush())
        .map_err(backup_error)?;
    Ok(())
}
