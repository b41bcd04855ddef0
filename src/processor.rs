use std::path::Path;
use std::thread;

use threadpool::ThreadPool;

use crate::color::Color;
use crate::image::reader::read_image;
use crate::image::writer::{output_format, write_image};
use crate::replacer::{replace_parallel, replace_with_report};
use crate::Result;

/// A file-to-file image operation selectable from the command line.
pub trait ImageProcessor {
    fn name(&self) -> &'static str;

    fn description(&self) -> &'static str;

    fn process(&self, input_file: &Path, output_file: &Path) -> Result<()>;
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ColorReplacementOptions {
    pub source_color: Color,
    pub target_color: Color,
    pub tolerance: u8,
    pub number_of_threads: usize,
}

impl Default for ColorReplacementOptions {
    fn default() -> Self {
        ColorReplacementOptions {
            source_color: Color::default(),
            target_color: Color::default(),
            tolerance: 0,
            number_of_threads: 1,
        }
    }
}

/// Workers worth spawning: never more than there are rows to hand out or
/// cores to run them on.
fn number_of_workers(requested: usize, rows: u32) -> usize {
    let available = thread::available_parallelism().map_or(1, |count| count.get());
    requested.min(rows as usize).min(available).max(1)
}

pub struct ColorReplacer {
    options: ColorReplacementOptions,
}

impl ColorReplacer {
    pub fn new(options: ColorReplacementOptions) -> Self {
        ColorReplacer { options }
    }
}

impl ImageProcessor for ColorReplacer {
    fn name(&self) -> &'static str {
        "replace-color"
    }

    fn description(&self) -> &'static str {
        "Replace a specific color in the image with another color"
    }

    fn process(&self, input_file: &Path, output_file: &Path) -> Result<()> {
        let options = &self.options;
        log::debug!("Source color: {}", options.source_color);
        log::debug!("Target color: {}", options.target_color);
        log::debug!("Tolerance: {}", options.tolerance);
        let format = output_format(output_file)?;

        let image = read_image(input_file)?;
        log::debug!("Image dimensions: {}x{}", image.width(), image.height());

        let workers = number_of_workers(options.number_of_threads, image.height());
        let replacement = if workers > 1 {
            log::debug!("Using {} worker threads", workers);
            let threadpool = ThreadPool::new(workers);
            replace_parallel(
                &image,
                options.source_color,
                options.target_color,
                options.tolerance,
                &threadpool,
            )?
        } else {
            replace_with_report(
                &image,
                options.source_color,
                options.target_color,
                options.tolerance,
            )?
        };
        log::info!("Replaced {} pixels", replacement.replaced_pixels);

        write_image(&replacement.image, output_file, format)
    }
}
