use crate::color::Color;

pub mod reader;
pub mod writer;

fn path_to_string(file_path: &std::path::Path) -> String {
    file_path.to_string_lossy().into_owned()
}

/// Row-major grid of RGBA pixels.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Image {
    width: u32,
    height: u32,
    dots: Vec<Color>,
}

impl Image {
    /// Creates an image from row-major pixels.
    ///
    /// # Panics
    ///
    /// Panics if `dots` does not hold exactly `width * height` pixels.
    pub fn new(width: u32, height: u32, dots: Vec<Color>) -> Self {
        if dots.len() != width as usize * height as usize {
            panic!(
                "Image of {}x{} needs {} pixels, but got {}",
                width,
                height,
                width as usize * height as usize,
                dots.len()
            );
        }
        Image {
            width,
            height,
            dots,
        }
    }

    pub fn filled(width: u32, height: u32, color: Color) -> Self {
        Self::new(width, height, vec![color; width as usize * height as usize])
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    pub fn is_empty(&self) -> bool {
        self.width == 0 || self.height == 0
    }

    pub fn dot(&self, column_index: u32, row_index: u32) -> Color {
        let index = column_index as usize + row_index as usize * self.width as usize;
        self.dots[index]
    }

    pub fn dots(&self) -> &[Color] {
        &self.dots
    }
}

impl From<&image::RgbaImage> for Image {
    fn from(value: &image::RgbaImage) -> Self {
        let dots = value.pixels().map(|pixel| Color::from(*pixel)).collect();
        Image::new(value.width(), value.height(), dots)
    }
}

impl From<&Image> for image::RgbaImage {
    fn from(value: &Image) -> Self {
        let raw: Vec<u8> = value
            .dots
            .iter()
            .flat_map(|dot| <[u8; 4]>::from(*dot))
            .collect();
        image::RgbaImage::from_raw(value.width, value.height, raw)
            .expect("Image invariant guarantees width * height pixels")
    }
}
