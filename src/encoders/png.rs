use std::io::Write;

use image::codecs::png::PngEncoder;
use image::DynamicImage;

use crate::{error::ResizeError, im_try};

/// PNG output is lossless and uses the encoder's default settings.
pub fn encode<W: Write>(image: &DynamicImage, writer: &mut W) -> Result<(), ResizeError> {
    let encoder = PngEncoder::new(writer);
    Ok(im_try!(image.write_with_encoder(encoder)))
}
