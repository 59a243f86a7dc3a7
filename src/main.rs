use std::ffi::OsString;

use imgresize::{args, error::ResizeError, help};

fn main() {
    help::maybe_print_help_and_exit("imgresize");

    let arguments: Vec<_> = std::env::args_os().collect();
    if let Err(e) = real_main(arguments) {
        eprintln!("{}", e);
        std::process::exit(1);
    }
}

fn real_main(arguments: Vec<OsString>) -> Result<(), ResizeError> {
    let plan = args::parse_args(arguments)?;
    plan.execute()
}
