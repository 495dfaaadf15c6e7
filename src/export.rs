use std::{
    io::{BufReader, BufWriter},
    path::{Path, PathBuf},
    sync::mpsc,
};

use threadpool::ThreadPool;

use crate::{
    error::Error,
    image::{
        reader::gbb::GbbImageReader, writer::ppm::PPMImageWriter, ImageReader, ImageWriter,
    },
    open_input_file, open_output_file, Result,
};

const PPM_EXTENSION: &str = "ppm";

pub struct ExportOutcome {
    pub input_file: PathBuf,
    pub result: Result<PathBuf>,
}

/// `textures/wall.GBB` becomes `wall.ppm` next to the input or inside `output_directory`
pub fn ppm_output_path(input_file: &Path, output_directory: Option<&Path>) -> PathBuf {
    let mut output_file = match output_directory {
        Some(directory) => directory.join(input_file.file_name().unwrap_or_default()),
        None => input_file.to_path_buf(),
    };
    output_file.set_extension(PPM_EXTENSION);
    output_file
}

pub fn convert_gbb_to_ppm(input_file: &Path, output_file: &Path) -> Result<()> {
    let image = GbbImageReader::new(BufReader::new(open_input_file(input_file)?)).read_image()?;
    let output = open_output_file(output_file)?;
    PPMImageWriter::new(BufWriter::new(output), &image).write_image()?;
    log::info!(
        "exported {} to {}",
        input_file.display(),
        output_file.display()
    );
    Ok(())
}

/// Convert every input on the pool, outcomes in input order
pub fn export_all(
    input_files: &[PathBuf],
    output_directory: Option<&Path>,
    threadpool: &ThreadPool,
) -> Vec<ExportOutcome> {
    let (sender, receiver) = mpsc::channel();
    for (index, input_file) in input_files.iter().enumerate() {
        let sender = sender.clone();
        let input_file = input_file.clone();
        let output_file = ppm_output_path(&input_file, output_directory);
        threadpool.execute(move || {
            let result = convert_gbb_to_ppm(&input_file, &output_file).map(|_| output_file);
            let _ = sender.send((index, result));
        });
    }
    drop(sender);

    let mut results: Vec<Option<Result<PathBuf>>> = input_files.iter().map(|_| None).collect();
    for (index, result) in receiver {
        results[index] = Some(result);
    }
    input_files
        .iter()
        .zip(results)
        .map(|(input_file, result)| ExportOutcome {
            input_file: input_file.clone(),
            result: result.unwrap_or_else(|| {
                Err(Error::ExportWorkerFailed(input_file.display().to_string()))
            }),
        })
        .collect()
}
