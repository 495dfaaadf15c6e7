use std::env::args_os;
use std::process::ExitCode;

use gbb_texture_tool::{
    check_roundtrip, export_gbb_to_ppm, read_texture_info, replace_texture, Arguments, CLIParser,
};

fn run(arguments: &Arguments) -> gbb_texture_tool::Result<()> {
    match arguments {
        Arguments::Info { input_file } => {
            let info = read_texture_info(input_file)?;
            println!("Dimensions: {}x{}", info.header.width, info.header.height);
            println!("Bits per pixel: {}", info.header.bits_per_pixel);
            println!("Container size: {} bytes", info.container_length);
            println!(
                "Run records: {} ({} bytes)",
                info.statistics.run_records, info.statistics.run_bytes
            );
            println!(
                "Literal records: {} ({} bytes)",
                info.statistics.literal_records, info.statistics.literal_bytes
            );
        }
        Arguments::Export {
            input_files,
            output_directory,
            number_of_threads,
        } => {
            let outcomes =
                export_gbb_to_ppm(input_files, output_directory.as_deref(), *number_of_threads);
            let mut first_error = None;
            for outcome in outcomes {
                match outcome.result {
                    Ok(output_file) => println!(
                        "{} -> {}",
                        outcome.input_file.display(),
                        output_file.display()
                    ),
                    Err(e) => {
                        eprintln!("{}: {}", outcome.input_file.display(), e);
                        first_error.get_or_insert(e);
                    }
                }
            }
            if let Some(e) = first_error {
                return Err(e);
            }
        }
        Arguments::Replace {
            input_file,
            image_file,
        } => {
            if replace_texture(input_file, image_file)? {
                println!("Saved {} (backup created)", input_file.display());
            } else {
                println!("Saved {}", input_file.display());
            }
        }
        Arguments::Roundtrip { input_file } => {
            if check_roundtrip(input_file)? {
                println!("Roundtrip successful");
            } else {
                println!("Roundtrip changed pixels");
            }
        }
    }
    Ok(())
}

fn main() -> ExitCode {
    let mut cli_parser = CLIParser::default();
    let arguments = cli_parser.parse(args_os());
    match run(&arguments) {
        Ok(_) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Operation failed because of: {}", e);
            ExitCode::FAILURE
        }
    }
}
