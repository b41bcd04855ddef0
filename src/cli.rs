use crate::color::Color;
use crate::processor::ColorReplacementOptions;
use crate::Arguments;
use clap::{
    arg, crate_authors, crate_description, crate_name, crate_version, value_parser, Arg,
    ArgMatches, Command,
};
use std::ffi::OsString;
use std::path::PathBuf;
use std::str::FromStr;

pub const REPLACE_COLOR_COMMAND: &str = "replace-color";

const COLOR_FORMATS: &str = "RRGGBBAA or RRGGBB, optionally prefixed with '#'";

pub struct CLIParser {
    command: Command,
}

impl CLIParser {
    pub fn new() -> Self {
        let command = Self::create_base_command();
        let command = command.subcommand(Self::create_replace_color_command());
        CLIParser { command }
    }

    pub fn parse<I, T>(&mut self, itr: I) -> Arguments
    where
        I: IntoIterator<Item = T>,
        T: Into<OsString> + Clone,
    {
        self.try_parse(itr).unwrap_or_else(|e| e.exit())
    }

    pub fn try_parse<I, T>(&mut self, itr: I) -> clap::error::Result<Arguments>
    where
        I: IntoIterator<Item = T>,
        T: Into<OsString> + Clone,
    {
        let matches = self.command.try_get_matches_from_mut(itr)?;
        match matches.subcommand() {
            Some((REPLACE_COLOR_COMMAND, sub_matches)) => Ok(Self::extract_arguments(sub_matches)),
            _ => Err(self
                .command
                .error(clap::error::ErrorKind::MissingSubcommand, "No command given")),
        }
    }

    fn create_base_command() -> Command {
        Command::new(crate_name!())
            .version(crate_version!())
            .author(crate_authors!())
            .about(crate_description!())
            .subcommand_required(true)
            .arg_required_else_help(true)
    }

    fn create_replace_color_command() -> Command {
        let command = Command::new(REPLACE_COLOR_COMMAND)
            .about("Replace a specific color in the image with another color")
            .after_help(format!(
                "Colors are given as {}.\n\nExample:\n  {} {} -i input.png -o output.png -s FF0000 -t \"#00FF0080\" --tolerance 10",
                COLOR_FORMATS,
                crate_name!(),
                REPLACE_COLOR_COMMAND
            ));
        Self::register_arguments(command)
    }

    fn register_arguments(command: Command) -> Command {
        let command = Self::register_input_file_argument(command);
        let command = Self::register_output_file_argument(command);
        let command = Self::register_source_color_argument(command);
        let command = Self::register_target_color_argument(command);
        let command = Self::register_tolerance_argument(command);
        let command = Self::register_threads_argument(command);
        Self::register_verbose_argument(command)
    }

    fn register_input_file_argument(command: Command) -> Command {
        command.arg(Self::create_input_file_argument())
    }

    fn register_output_file_argument(command: Command) -> Command {
        command.arg(Self::create_output_file_argument())
    }

    fn register_source_color_argument(command: Command) -> Command {
        command.arg(Self::create_source_color_argument())
    }

    fn register_target_color_argument(command: Command) -> Command {
        command.arg(Self::create_target_color_argument())
    }

    fn register_tolerance_argument(command: Command) -> Command {
        command.arg(Self::create_tolerance_argument())
    }

    fn register_threads_argument(command: Command) -> Command {
        command.arg(Self::create_threads_argument())
    }

    fn register_verbose_argument(command: Command) -> Command {
        command.arg(Self::create_verbose_argument())
    }

    fn create_input_file_argument() -> Arg {
        arg!(input_file: -i --input <INPUT> "Path to the input image")
            .value_parser(value_parser!(PathBuf))
            .required(true)
    }

    fn create_output_file_argument() -> Arg {
        arg!(output_file: -o --output <OUTPUT> "Path to the output image, format follows the extension")
            .value_parser(value_parser!(PathBuf))
            .required(true)
    }

    fn create_color_argument(
        id: &'static str,
        short: char,
        long: &'static str,
        help: &str,
    ) -> Arg {
        Arg::new(id)
            .short(short)
            .long(long)
            .value_name("COLOR")
            .help(format!("{} ({})", help, COLOR_FORMATS))
            .value_parser(Color::from_str)
            .required(true)
    }

    fn create_source_color_argument() -> Arg {
        Self::create_color_argument("source_color", 's', "source-color", "Color to replace")
    }

    fn create_target_color_argument() -> Arg {
        Self::create_color_argument("target_color", 't', "target-color", "Replacement color")
    }

    fn create_tolerance_argument() -> Arg {
        arg!(--tolerance <TOLERANCE> "Maximum per-channel difference (0-255) for a pixel to match, 0 means exact match")
            .default_value("0")
            .value_parser(value_parser!(u8))
    }

    fn create_threads_argument() -> Arg {
        arg!(--threads <THREADS> "Number of threads, rows are split between them")
            .default_value("1")
            .required(false)
            .value_parser(value_parser!(usize))
    }

    fn create_verbose_argument() -> Arg {
        arg!(-v --verbose "Print resolved colors, tolerance and image dimensions")
    }

    fn extract_arguments(matches: &ArgMatches) -> Arguments {
        Arguments {
            input_file: Self::extract_input_file_argument(matches),
            output_file: Self::extract_output_file_argument(matches),
            verbose: Self::extract_verbose_argument(matches),
            options: ColorReplacementOptions {
                source_color: Self::extract_source_color_argument(matches),
                target_color: Self::extract_target_color_argument(matches),
                tolerance: Self::extract_tolerance_argument(matches),
                number_of_threads: Self::extract_threads_argument(matches),
            },
        }
    }

    fn extract_input_file_argument(matches: &ArgMatches) -> PathBuf {
        matches
            .get_one::<PathBuf>("input_file")
            .expect("Required argument input_file not provided")
            .clone()
    }

    fn extract_output_file_argument(matches: &ArgMatches) -> PathBuf {
        matches
            .get_one::<PathBuf>("output_file")
            .expect("Required argument output_file not provided")
            .clone()
    }

    fn extract_source_color_argument(matches: &ArgMatches) -> Color {
        *matches
            .get_one::<Color>("source_color")
            .expect("Required argument source_color not provided")
    }

    fn extract_target_color_argument(matches: &ArgMatches) -> Color {
        *matches
            .get_one::<Color>("target_color")
            .expect("Required argument target_color not provided")
    }

    fn extract_tolerance_argument(matches: &ArgMatches) -> u8 {
        *matches
            .get_one::<u8>("tolerance")
            .expect("Tolerance must be provided, but was unset.")
    }

    fn extract_threads_argument(matches: &ArgMatches) -> usize {
        *matches
            .get_one::<usize>("threads")
            .expect("Number of threads must be provided, but was unset.")
    }

    fn extract_verbose_argument(matches: &ArgMatches) -> bool {
        matches.get_flag("verbose")
    }
}

impl Default for CLIParser {
    fn default() -> Self {
        Self::new()
    }
}
