//! Command-line argument parsing.
//!
//! We cannot use an argument parsing library because the flags are
//! unconventional: every flag is accepted with either one dash or two, and
//! any token that is not a known flag is an input filename. So we need to
//! hand-roll our own scanner.

use std::ffi::{OsStr, OsString};
use std::path::PathBuf;

use crate::{error::ResizeError, im_err, plan::ResizePlan};

use strum::{EnumString, IntoStaticStr, VariantArray};

#[derive(EnumString, IntoStaticStr, VariantArray, Debug, Clone, Copy, PartialEq, Eq)]
#[strum(serialize_all = "snake_case")]
pub enum Arg {
    Width,
    Height,
    Convert,
}

impl Arg {
    pub fn help_text(&self) -> &'static str {
        match self {
            Arg::Width => "target width in pixels (default 500)",
            Arg::Height => "target height in pixels (default 500)",
            Arg::Convert => "force the output format, `jpg' or `png'",
        }
    }
}

/// The user-requested output container format.
/// When absent, the detected input format is kept.
#[derive(EnumString, Debug, Clone, Copy, PartialEq, Eq)]
#[strum(serialize_all = "lowercase")]
pub enum ConvertTarget {
    Jpg,
    Png,
}

impl ConvertTarget {
    pub fn extension(self) -> &'static str {
        match self {
            ConvertTarget::Jpg => "jpg",
            ConvertTarget::Png => "png",
        }
    }
}

pub fn parse_args(args: Vec<OsString>) -> Result<ResizePlan, ResizeError> {
    let mut plan = ResizePlan::default();
    let mut input: Option<PathBuf> = None;

    let mut iter = args.into_iter().skip(1); // skip argv[0], path to our binary
    while let Some(raw_arg) = iter.next() {
        if let Some(arg) = known_flag(&raw_arg) {
            let arg_name: &'static str = arg.into();
            let value = iter
                .next()
                .ok_or_else(|| im_err!("argument requires a value: {arg_name}"))?;
            match arg {
                Arg::Width => plan.width = parse_dimension(arg, &value)?,
                Arg::Height => plan.height = parse_dimension(arg, &value)?,
                Arg::Convert => plan.convert = Some(parse_convert(&value)?),
            }
        } else if input.is_some() {
            return Err(im_err!("multiple input files not supported"));
        } else {
            input = Some(PathBuf::from(raw_arg));
        }
    }

    plan.input = input.ok_or_else(|| im_err!("missing image file argument"))?;
    Ok(plan)
}

/// Matches the exact flag spellings only. A dash-prefixed token that is not
/// a known flag is left for the caller to treat as a filename, which is
/// what the scanner's fallthrough arm does.
fn known_flag(token: &OsStr) -> Option<Arg> {
    let token = token.to_str()?;
    let name = token
        .strip_prefix("--")
        .or_else(|| token.strip_prefix('-'))?;
    Arg::try_from(name).ok()
}

fn parse_dimension(arg: Arg, value: &OsStr) -> Result<u32, ResizeError> {
    let arg_name: &'static str = arg.into();
    value
        .to_str()
        .and_then(|s| s.trim().parse::<u32>().ok())
        .ok_or_else(|| {
            im_err!(
                "invalid argument for option `-{arg_name}': {}",
                value.to_string_lossy()
            )
        })
}

fn parse_convert(value: &OsStr) -> Result<ConvertTarget, ResizeError> {
    value
        .to_str()
        .and_then(|s| ConvertTarget::try_from(s).ok())
        .ok_or_else(|| {
            im_err!(
                "invalid argument for option `-convert': {} (must be `jpg' or `png')",
                value.to_string_lossy()
            )
        })
}
