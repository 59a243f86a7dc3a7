use std::borrow::Cow;
use std::io::Write;

use image::codecs::jpeg::JpegEncoder;
use image::{ColorType, DynamicImage};

use crate::{error::ResizeError, im_try};

/// Quality of all JPEG output, out of 100.
const QUALITY: u8 = 90;

pub fn encode<W: Write>(image: &DynamicImage, writer: &mut W) -> Result<(), ResizeError> {
    let encoder = JpegEncoder::new_with_quality(writer, QUALITY);
    let pixels = discard_unrepresentable_channels(image);
    Ok(im_try!(pixels.write_with_encoder(encoder)))
}

/// The JPEG codec cannot represent alpha or more than 8 bits per channel,
/// and the encoder in `image` rejects such buffers instead of converting.
fn discard_unrepresentable_channels(image: &DynamicImage) -> Cow<'_, DynamicImage> {
    match image.color() {
        ColorType::L8 | ColorType::Rgb8 => Cow::Borrowed(image),
        ColorType::La8 | ColorType::L16 | ColorType::La16 => {
            Cow::Owned(DynamicImage::ImageLuma8(image.to_luma8()))
        }
        _ => Cow::Owned(DynamicImage::ImageRgb8(image.to_rgb8())),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn representable_buffers_are_borrowed() {
        let rgb = DynamicImage::ImageRgb8(image::RgbImage::new(2, 2));
        assert!(matches!(
            discard_unrepresentable_channels(&rgb),
            Cow::Borrowed(_)
        ));
    }

    #[test]
    fn alpha_and_high_depth_are_reduced() {
        let rgba = DynamicImage::ImageRgba8(image::RgbaImage::new(2, 2));
        assert_eq!(
            discard_unrepresentable_channels(&rgba).color(),
            ColorType::Rgb8
        );

        let luma16: image::ImageBuffer<image::Luma<u16>, Vec<u16>> =
            image::ImageBuffer::new(2, 2);
        let luma16 = DynamicImage::ImageLuma16(luma16);
        assert_eq!(
            discard_unrepresentable_channels(&luma16).color(),
            ColorType::L8
        );
    }
}
