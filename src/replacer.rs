use std::sync::mpsc;

use threadpool::ThreadPool;

use crate::color::Color;
use crate::error::Error;
use crate::image::Image;
use crate::Result;

pub struct Replacement {
    pub image: Image,
    pub replaced_pixels: usize,
}

fn replace_dots(
    dots: &[Color],
    source: Color,
    target: Color,
    tolerance: u8,
) -> (Vec<Color>, usize) {
    let mut replaced_pixels = 0;
    let output = dots
        .iter()
        .map(|dot| {
            if dot.matches(&source, tolerance) {
                replaced_pixels += 1;
                target
            } else {
                *dot
            }
        })
        .collect();
    (output, replaced_pixels)
}

fn ensure_not_empty(image: &Image) -> Result<()> {
    if image.is_empty() {
        return Err(Error::EmptyImage);
    }
    Ok(())
}

/// Builds a new image where every pixel whose channels all lie within
/// `tolerance` of `source` becomes `target`. The input is left untouched.
pub fn replace(image: &Image, source: Color, target: Color, tolerance: u8) -> Result<Image> {
    replace_with_report(image, source, target, tolerance).map(|replacement| replacement.image)
}

pub fn replace_with_report(
    image: &Image,
    source: Color,
    target: Color,
    tolerance: u8,
) -> Result<Replacement> {
    ensure_not_empty(image)?;
    let (dots, replaced_pixels) = replace_dots(image.dots(), source, target, tolerance);
    Ok(Replacement {
        image: Image::new(image.width(), image.height(), dots),
        replaced_pixels,
    })
}

/// Same result as [`replace_with_report`], with rows split into one band per
/// pool worker.
pub fn replace_parallel(
    image: &Image,
    source: Color,
    target: Color,
    tolerance: u8,
    threadpool: &ThreadPool,
) -> Result<Replacement> {
    ensure_not_empty(image)?;
    let width = image.width() as usize;
    let height = image.height() as usize;
    let rows_per_band = height.div_ceil(threadpool.max_count().max(1));
    let bands: Vec<Vec<Color>> = image
        .dots()
        .chunks(rows_per_band * width)
        .map(<[Color]>::to_vec)
        .collect();
    let number_of_bands = bands.len();
    log::debug!(
        "Splitting {} rows into {} bands of up to {} rows",
        height,
        number_of_bands,
        rows_per_band
    );

    let (sender, receiver) = mpsc::channel();
    for (band_index, band) in bands.into_iter().enumerate() {
        let sender = sender.clone();
        threadpool.execute(move || {
            let result = replace_dots(&band, source, target, tolerance);
            // the receiver only disappears if the caller already gave up
            let _ = sender.send((band_index, result));
        });
    }
    drop(sender);

    let mut results: Vec<Option<(Vec<Color>, usize)>> = vec![None; number_of_bands];
    for (band_index, result) in receiver.iter().take(number_of_bands) {
        results[band_index] = Some(result);
    }

    let mut dots = Vec::with_capacity(width * height);
    let mut replaced_pixels = 0;
    for result in results {
        let (band, band_replaced) = result.ok_or(Error::WorkerPoolFailed)?;
        dots.extend(band);
        replaced_pixels += band_replaced;
    }
    Ok(Replacement {
        image: Image::new(image.width(), image.height(), dots),
        replaced_pixels,
    })
}
