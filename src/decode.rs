use std::path::Path;

use image::{DynamicImage, ImageFormat, ImageReader};

use crate::{error::ResizeError, im_err, im_try};

/// Opens the file and decodes it, guessing the format from the file
/// contents rather than trusting the extension.
pub fn decode(path: &Path) -> Result<(DynamicImage, ImageFormat), ResizeError> {
    let reader = ImageReader::open(path)
        .map_err(|error| im_err!("unable to open image `{}': {error}", path.display()))?;
    let reader = im_try!(reader.with_guessed_format());
    let format = reader
        .format()
        .ok_or_else(|| im_err!("unrecognized image format in `{}'", path.display()))?;
    let image = reader
        .decode()
        .map_err(|error| im_err!("unable to decode image `{}': {error}", path.display()))?;
    Ok((image, format))
}

/// Human-readable name of a detected format for the status report.
pub fn format_name(format: ImageFormat) -> &'static str {
    match format {
        ImageFormat::Png => "png",
        ImageFormat::Jpeg => "jpeg",
        other => other.extensions_str().first().copied().unwrap_or("unknown"),
    }
}
