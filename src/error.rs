use std::fmt::Display;

#[derive(Debug)]
pub enum Error {
    InvalidColorFormat {
        input: String,
        reason: ColorFormatViolation,
    },
    InputFileNotFound(String),
    UnableToOpenInputFileForReading(String, std::io::Error),
    UnableToDecodeImage(String, image::ImageError),
    UnableToCreateOutputDirectory(String, std::io::Error),
    UnsupportedOutputFormat(String),
    UnableToEncodeImage(String, image::ImageError),
    EmptyImage,
    WorkerPoolFailed,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColorFormatViolation {
    WrongLength(usize),
    NonHexCharacters,
}

impl Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidColorFormat { input, reason } => match reason {
                ColorFormatViolation::WrongLength(length) => write!(
                    f,
                    "Invalid hex color '{}'. Expected 6 or 8 hex digits (RRGGBB or RRGGBBAA, optional '#'), got {}",
                    input, length
                ),
                ColorFormatViolation::NonHexCharacters => write!(
                    f,
                    "Invalid hex color '{}'. Contains non-hexadecimal characters, expected RRGGBB or RRGGBBAA",
                    input
                ),
            },
            Self::InputFileNotFound(path) => {
                write!(f, "Input file '{}' not found", path)
            }
            Self::UnableToOpenInputFileForReading(path, error) => {
                write!(
                    f,
                    "Unable to open input file '{}' for reading: {}",
                    path, error
                )
            }
            Self::UnableToDecodeImage(path, error) => {
                write!(f, "Unable to decode image '{}': {}", path, error)
            }
            Self::UnableToCreateOutputDirectory(path, error) => {
                write!(
                    f,
                    "Unable to create output directory '{}': {}",
                    path, error
                )
            }
            Self::UnsupportedOutputFormat(path) => {
                write!(
                    f,
                    "Unable to infer an image format from output path '{}'",
                    path
                )
            }
            Self::UnableToEncodeImage(path, error) => {
                write!(f, "Unable to write image '{}': {}", path, error)
            }
            Self::EmptyImage => write!(f, "Image has no pixels, width and height must be > 0"),
            Self::WorkerPoolFailed => {
                write!(f, "A worker thread exited before delivering its rows")
            }
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::UnableToOpenInputFileForReading(_, error)
            | Self::UnableToCreateOutputDirectory(_, error) => Some(error),
            Self::UnableToDecodeImage(_, error) | Self::UnableToEncodeImage(_, error) => {
                Some(error)
            }
            _ => None,
        }
    }
}
