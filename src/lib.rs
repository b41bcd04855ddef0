use std::path::{Path, PathBuf};

pub use crate::image::Image;
pub use cli::CLIParser;
pub use color::Color;
pub use error::Error;
use processor::{ColorReplacementOptions, ColorReplacer, ImageProcessor};

mod cli;
pub mod color;
pub mod error;
pub mod image;
pub mod logger;
pub mod processor;
pub mod replacer;

pub type Result<T> = std::result::Result<T, error::Error>;

pub struct Arguments {
    input_file: PathBuf,
    output_file: PathBuf,
    verbose: bool,
    options: ColorReplacementOptions,
}

impl Arguments {
    pub fn input_file(&self) -> &Path {
        &self.input_file
    }

    pub fn output_file(&self) -> &Path {
        &self.output_file
    }

    pub fn verbose(&self) -> bool {
        self.verbose
    }

    pub fn options(&self) -> &ColorReplacementOptions {
        &self.options
    }
}

pub fn replace_color(arguments: &Arguments) -> Result<()> {
    log::debug!("Processing image: {}", arguments.input_file.display());
    log::debug!("Output path: {}", arguments.output_file.display());
    let processor = ColorReplacer::new(arguments.options);
    log::debug!("Running {}: {}", processor.name(), processor.description());
    processor.process(&arguments.input_file, &arguments.output_file)
}
