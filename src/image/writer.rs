use std::fs;
use std::path::Path;

use image::ImageFormat;

use super::{path_to_string, Image};
use crate::error::Error;
use crate::Result;

fn create_parent_directory(file_path: &Path) -> Result<()> {
    match file_path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() && !parent.exists() => {
            log::debug!("Creating output directory {}", parent.display());
            fs::create_dir_all(parent)
                .map_err(|e| Error::UnableToCreateOutputDirectory(path_to_string(parent), e))
        }
        _ => Ok(()),
    }
}

/// Resolves the encoding from the file extension without touching the file.
pub fn output_format(file_path: &Path) -> Result<ImageFormat> {
    ImageFormat::from_path(file_path)
        .map_err(|_| Error::UnsupportedOutputFormat(path_to_string(file_path)))
}

fn drops_alpha(image: &Image, format: ImageFormat) -> bool {
    format == ImageFormat::Jpeg && image.dots().iter().any(|dot| dot.alpha() != u8::MAX)
}

/// Encodes the image as `format`, usually resolved by [`output_format`].
pub fn write_image(
    image: &Image,
    file_path: &Path,
    format: ImageFormat,
) -> Result<()> {
    create_parent_directory(file_path)?;
    let buffer = image::RgbaImage::from(image);
    let encoded = if format == ImageFormat::Jpeg {
        if drops_alpha(image, format) {
            log::warn!(
                "{} has no alpha channel, transparent pixels are written opaque",
                file_path.display()
            );
        }
        image::DynamicImage::ImageRgba8(buffer)
            .into_rgb8()
            .save_with_format(file_path, format)
    } else {
        buffer.save_with_format(file_path, format)
    };
    encoded.map_err(|e| Error::UnableToEncodeImage(path_to_string(file_path), e))?;
    log::info!("Image saved to: {}", file_path.display());
    Ok(())
}
