use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use super::{path_to_string, Image};
use crate::error::Error;
use crate::Result;

fn open_input_file(file_path: &Path) -> Result<File> {
    if !file_path.exists() {
        return Err(Error::InputFileNotFound(path_to_string(file_path)));
    }
    File::open(file_path)
        .map_err(|e| Error::UnableToOpenInputFileForReading(path_to_string(file_path), e))
}

/// Decodes any format `image` understands and converts it to RGBA.
pub fn read_image(file_path: &Path) -> Result<Image> {
    let input_file = open_input_file(file_path)?;
    let decoded = image::ImageReader::new(BufReader::new(input_file))
        .with_guessed_format()
        .map_err(|e| Error::UnableToOpenInputFileForReading(path_to_string(file_path), e))?
        .decode()
        .map_err(|e| Error::UnableToDecodeImage(path_to_string(file_path), e))?;
    if !matches!(decoded, image::DynamicImage::ImageRgba8(_)) {
        log::info!("Converting image from {:?} to RGBA", decoded.color());
    }
    Ok(Image::from(&decoded.into_rgba8()))
}

#[cfg(test)]
mod tests {
    use std::path::PathBuf;

    use super::read_image;
    use crate::error::Error;

    #[test]
    fn read_missing_file() {
        let path = PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("tests/does_not_exist.png");
        match read_image(&path) {
            Err(Error::InputFileNotFound(name)) => assert!(name.ends_with("does_not_exist.png")),
            other => panic!("Expected missing file error, got {:?}", other.map(|_| ())),
        }
    }

    #[test]
    fn read_file_that_is_not_an_image() {
        let path = PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("Cargo.toml");
        assert!(matches!(
            read_image(&path),
            Err(Error::UnableToDecodeImage(_, _))
        ));
    }
}
