use std::ffi::{OsStr, OsString};
use std::path::{Path, PathBuf};

use crate::args::ConvertTarget;

/// Derives the output file name: the input name with its final extension
/// removed, then `_{width}x{height}`, then either the extension of the
/// requested conversion or the original extension.
///
/// An input without an extension produces an output without one, unless a
/// conversion supplies it. The parent directory is kept as-is.
pub fn output_path(
    input: &Path,
    width: u32,
    height: u32,
    convert: Option<ConvertTarget>,
) -> PathBuf {
    let stem = input.file_stem().unwrap_or_else(|| OsStr::new(""));
    let mut name = OsString::from(stem);
    name.push(format!("_{width}x{height}"));

    match convert {
        Some(target) => {
            name.push(".");
            name.push(target.extension());
        }
        None => {
            if let Some(ext) = input.extension() {
                name.push(".");
                name.push(ext);
            }
        }
    }

    input.with_file_name(name)
}
