use std::ffi::OsStr;

use current_platform::CURRENT_PLATFORM;
use strum::VariantArray;

use crate::args::Arg;

pub fn maybe_print_help_and_exit(bin_name: &str) {
    if let Some(arg) = std::env::args_os().nth(1) {
        if arg.as_os_str() == OsStr::new("--help") || arg.as_os_str() == OsStr::new("-help") {
            print_help(bin_name);
            std::process::exit(0);
        }
    }
}

fn print_help(bin_name: &str) {
    println!("Version: {}", version_string());
    println!("License: {}", env!("CARGO_PKG_LICENSE"));
    println!("Usage: {bin_name} [options ...] file");
    println!();
    println!("Options:");
    for arg in Arg::VARIANTS {
        let name: &'static str = arg.into();
        println!("  -{name:19} {}", arg.help_text());
    }
    println!();
    println!("The output is written next to the input as {{name}}_{{width}}x{{height}}{{ext}}.");
}

fn version_string() -> String {
    let cpu = CURRENT_PLATFORM.split('-').next().unwrap_or("unknown");
    let version = env!("CARGO_PKG_VERSION");
    let repo = env!("CARGO_PKG_REPOSITORY");

    format!("imgresize {version} {cpu} {repo}")
}
