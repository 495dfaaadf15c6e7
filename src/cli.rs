use crate::Arguments;
use clap::{
    arg, crate_authors, crate_description, crate_name, crate_version, value_parser, Arg,
    ArgAction, ArgMatches, Command,
};
use std::ffi::OsString;
use std::path::PathBuf;
use std::{io, thread};

const INFO_COMMAND: &str = "info";
const EXPORT_COMMAND: &str = "export";
const REPLACE_COMMAND: &str = "replace";
const ROUNDTRIP_COMMAND: &str = "roundtrip";

pub struct CLIParser {
    command: Command,
}

impl CLIParser {
    pub fn new() -> Self {
        let command = Self::create_base_command();
        let command = Self::register_subcommands(command);
        CLIParser { command }
    }

    pub fn parse<I, T>(&mut self, itr: I) -> Arguments
    where
        I: IntoIterator<Item = T>,
        T: Into<OsString> + Clone,
    {
        let matches = self
            .command
            .try_get_matches_from_mut(itr)
            .unwrap_or_else(|e| e.exit());
        Self::extract_arguments(&matches)
    }

    fn register_subcommands(command: Command) -> Command {
        command
            .subcommand_required(true)
            .arg_required_else_help(true)
            .subcommand(Self::create_info_command())
            .subcommand(Self::create_export_command())
            .subcommand(Self::create_replace_command())
            .subcommand(Self::create_roundtrip_command())
    }

    fn register_input_file_argument(command: Command) -> Command {
        command.arg(Self::create_input_file_argument())
    }

    fn register_input_files_argument(command: Command) -> Command {
        command.arg(Self::create_input_files_argument())
    }

    fn register_output_directory_argument(command: Command) -> Command {
        command.arg(Self::create_output_directory_argument())
    }

    fn register_threads_argument(command: Command) -> Command {
        command.arg(Self::create_threads_argument())
    }

    fn register_image_file_argument(command: Command) -> Command {
        command.arg(Self::create_image_file_argument())
    }

    fn create_base_command() -> Command {
        Command::new(crate_name!())
            .version(crate_version!())
            .author(crate_authors!())
            .about(crate_description!())
    }

    fn create_info_command() -> Command {
        let command =
            Command::new(INFO_COMMAND).about("Show dimensions and record statistics of a texture");
        Self::register_input_file_argument(command)
    }

    fn create_export_command() -> Command {
        let command = Command::new(EXPORT_COMMAND).about("Export textures as PPM images");
        let command = Self::register_input_files_argument(command);
        let command = Self::register_output_directory_argument(command);
        Self::register_threads_argument(command)
    }

    fn create_replace_command() -> Command {
        let command = Command::new(REPLACE_COMMAND)
            .about("Replace the pixels of a texture with a PPM image and save it in place");
        let command = Self::register_input_file_argument(command);
        Self::register_image_file_argument(command)
    }

    fn create_roundtrip_command() -> Command {
        let command = Command::new(ROUNDTRIP_COMMAND)
            .about("Check that a texture survives decoding and encoding unchanged");
        Self::register_input_file_argument(command)
    }

    fn create_input_file_argument() -> Arg {
        Arg::new("input_file")
            .help("Path to GBB texture file")
            .value_parser(value_parser!(PathBuf))
            .required(true)
    }

    fn create_input_files_argument() -> Arg {
        Arg::new("input_files")
            .help("Paths to GBB texture files")
            .value_parser(value_parser!(PathBuf))
            .action(ArgAction::Append)
            .num_args(1..)
            .required(true)
    }

    fn create_output_directory_argument() -> Arg {
        arg!(output_directory: -o --output_directory <DIRECTORY> "Directory for exported images, defaults to next to each texture")
            .required(false)
            .value_parser(value_parser!(PathBuf))
    }

    fn create_threads_argument() -> Arg {
        arg!(-t --threads <THREADS> "Number of Threads")
            .default_value(get_number_of_threads().unwrap_or(1).to_string())
            .required(false)
            .value_parser(value_parser!(usize))
    }

    fn create_image_file_argument() -> Arg {
        Arg::new("image_file")
            .help("Path to PPM (P3) replacement image")
            .value_parser(value_parser!(PathBuf))
            .required(true)
    }

    fn extract_arguments(matches: &ArgMatches) -> Arguments {
        match matches.subcommand() {
            Some((INFO_COMMAND, matches)) => Arguments::Info {
                input_file: Self::extract_input_file_argument(matches),
            },
            Some((EXPORT_COMMAND, matches)) => Arguments::Export {
                input_files: Self::extract_input_files_argument(matches),
                output_directory: Self::extract_output_directory_argument(matches),
                number_of_threads: Self::extract_threads_argument(matches),
            },
            Some((REPLACE_COMMAND, matches)) => Arguments::Replace {
                input_file: Self::extract_input_file_argument(matches),
                image_file: Self::extract_image_file_argument(matches),
            },
            Some((ROUNDTRIP_COMMAND, matches)) => Arguments::Roundtrip {
                input_file: Self::extract_input_file_argument(matches),
            },
            _ => unreachable!("A subcommand is required by the parser"),
        }
    }

    fn extract_input_file_argument(matches: &ArgMatches) -> PathBuf {
        matches
            .get_one::<PathBuf>("input_file")
            .expect("Required argument input_file not provided")
            .clone()
    }

    fn extract_input_files_argument(matches: &ArgMatches) -> Vec<PathBuf> {
        matches
            .get_many::<PathBuf>("input_files")
            .expect("Required argument input_files not provided")
            .cloned()
            .collect()
    }

    fn extract_output_directory_argument(matches: &ArgMatches) -> Option<PathBuf> {
        matches.get_one::<PathBuf>("output_directory").cloned()
    }

    fn extract_threads_argument(matches: &ArgMatches) -> usize {
        matches
            .get_one::<usize>("threads")
            .expect("Required argument threads not provided")
            .to_owned()
    }

    fn extract_image_file_argument(matches: &ArgMatches) -> PathBuf {
        matches
            .get_one::<PathBuf>("image_file")
            .expect("Required argument image_file not provided")
            .clone()
    }
}

impl Default for CLIParser {
    fn default() -> Self {
        Self::new()
    }
}

fn get_number_of_threads() -> io::Result<usize> {
    Ok(thread::available_parallelism()?.get())
}
