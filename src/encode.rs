use std::{
    fs::File,
    io::{BufWriter, Write},
    path::Path,
};

use image::{DynamicImage, ImageFormat};

use crate::args::ConvertTarget;
use crate::encoders;
use crate::{error::ResizeError, im_err, im_try};

/// Encodes the image to `path`, creating the file or silently truncating
/// an existing one. An explicit conversion target wins; otherwise the codec
/// matching the detected input format is used.
///
/// The format is resolved before the file is created, so a rejected format
/// leaves no output file behind.
pub fn encode(
    image: &DynamicImage,
    path: &Path,
    detected: ImageFormat,
    convert: Option<ConvertTarget>,
) -> Result<(), ResizeError> {
    let format = choose_encoding_format(detected, convert)?;

    // `File::create` automatically truncates (overwrites) the file if it exists.
    let file = File::create(path)
        .map_err(|error| im_err!("unable to open image `{}': {error}", path.display()))?;
    // Wrap in BufWriter for performance
    let mut writer = BufWriter::new(file);

    match format {
        #[cfg(feature = "png")]
        ImageFormat::Png => encoders::png::encode(image, &mut writer)?,
        #[cfg(feature = "jpeg")]
        ImageFormat::Jpeg => encoders::jpeg::encode(image, &mut writer)?,
        _ => return Err(im_err!("unsupported image format")),
    }

    // The buffers will be flushed automatically when the writer goes out of scope,
    // but that will not report any errors. This handles errors.
    im_try!(writer.flush());

    Ok(())
}

/// Only PNG and JPEG can be written. Every other detected format must be
/// converted explicitly, and without a conversion target it is an error.
fn choose_encoding_format(
    detected: ImageFormat,
    convert: Option<ConvertTarget>,
) -> Result<ImageFormat, ResizeError> {
    match convert {
        Some(ConvertTarget::Jpg) => Ok(ImageFormat::Jpeg),
        Some(ConvertTarget::Png) => Ok(ImageFormat::Png),
        None => match detected {
            ImageFormat::Png => Ok(ImageFormat::Png),
            ImageFormat::Jpeg => Ok(ImageFormat::Jpeg),
            _ => Err(im_err!("unsupported image format")),
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn conversion_target_overrides_detected_format() {
        let format =
            choose_encoding_format(ImageFormat::Png, Some(ConvertTarget::Jpg)).unwrap();
        assert_eq!(format, ImageFormat::Jpeg);

        let format =
            choose_encoding_format(ImageFormat::Bmp, Some(ConvertTarget::Png)).unwrap();
        assert_eq!(format, ImageFormat::Png);
    }

    #[test]
    fn detected_format_is_kept_without_conversion() {
        assert_eq!(
            choose_encoding_format(ImageFormat::Png, None).unwrap(),
            ImageFormat::Png
        );
        assert_eq!(
            choose_encoding_format(ImageFormat::Jpeg, None).unwrap(),
            ImageFormat::Jpeg
        );
    }

    #[test]
    fn other_detected_formats_are_rejected() {
        let err = choose_encoding_format(ImageFormat::Bmp, None).unwrap_err();
        assert!(err.0.contains("unsupported image format"));
    }
}
