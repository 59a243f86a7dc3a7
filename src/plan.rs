use std::path::PathBuf;

use crate::args::ConvertTarget;
use crate::decode::{decode, format_name};
use crate::encode::encode;
use crate::error::ResizeError;
use crate::filename::output_path;
use crate::resize::resize;

pub const DEFAULT_WIDTH: u32 = 500;
pub const DEFAULT_HEIGHT: u32 = 500;

/// One whole invocation: a single input file, the target dimensions,
/// and an optional container conversion.
#[derive(Debug, Clone, PartialEq)]
pub struct ResizePlan {
    pub input: PathBuf,
    pub width: u32,
    pub height: u32,
    pub convert: Option<ConvertTarget>,
}

impl Default for ResizePlan {
    fn default() -> Self {
        Self {
            input: PathBuf::new(),
            width: DEFAULT_WIDTH,
            height: DEFAULT_HEIGHT,
            convert: None,
        }
    }
}

impl ResizePlan {
    /// Runs the whole pipeline: decode, resize, report, encode.
    /// Any failure aborts the run; there is no partial recovery.
    pub fn execute(&self) -> Result<(), ResizeError> {
        let (mut image, detected) = decode(&self.input)?;

        resize(&mut image, self.width, self.height)?;

        let output = output_path(&self.input, self.width, self.height, self.convert);

        println!("Input file: {}", self.input.display());
        println!("Detected format: {}", format_name(detected));
        println!("Output file: {}", output.display());
        println!(
            "Requested conversion: {}",
            self.convert.map(ConvertTarget::extension).unwrap_or("")
        );

        encode(&image, &output, detected, self.convert)?;

        println!("Resized image saved to {}", output.display());
        Ok(())
    }
}
