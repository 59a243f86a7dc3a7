use fast_image_resize::{FilterType, ResizeAlg, ResizeOptions, Resizer};
use image::DynamicImage;

use crate::{error::ResizeError, im_err};

/// Resamples the image to exactly `width` x `height` with a 3-lobe Lanczos
/// filter. The aspect ratio is not preserved.
pub fn resize(image: &mut DynamicImage, width: u32, height: u32) -> Result<(), ResizeError> {
    if image.width() == width && image.height() == height {
        return Ok(());
    }
    let mut resizer = Resizer::new();
    let mut dst_image = DynamicImage::new(width, height, image.color());
    let options =
        ResizeOptions::default().resize_alg(ResizeAlg::Convolution(FilterType::Lanczos3));
    resizer
        .resize(image, &mut dst_image, Some(&options))
        .map_err(|error| im_err!("unable to resize image: {error}"))?;
    *image = dst_image;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn resizes_to_exact_dimensions() {
        let mut image = DynamicImage::ImageRgb8(image::RgbImage::new(10, 8));
        resize(&mut image, 200, 100).unwrap();
        assert_eq!((image.width(), image.height()), (200, 100));
    }

    #[test]
    fn upscales_too() {
        let mut image = DynamicImage::ImageRgba8(image::RgbaImage::new(4, 4));
        resize(&mut image, 64, 64).unwrap();
        assert_eq!((image.width(), image.height()), (64, 64));
        assert_eq!(image.color(), image::ColorType::Rgba8);
    }

    #[test]
    fn matching_dimensions_are_a_no_op() {
        let mut image = DynamicImage::ImageRgb8(image::RgbImage::new(5, 5));
        resize(&mut image, 5, 5).unwrap();
        assert_eq!((image.width(), image.height()), (5, 5));
    }
}
