use clap::Parser;
use std::process;
use vpass_converter::cli::{args::Args, commands};

fn main() {
    // Parse command line arguments
    let args = Args::parse();

    match commands::run(args) {
        Ok(_stats) => {
            // Success - stats have already been reported by the command
            process::exit(0);
        }
        Err(error) => {
            // Error occurred - print the cause chain to stderr and exit
            // with a non-zero code
            eprintln!("Error: {}", error);
            let mut source = std::error::Error::source(&error);
            while let Some(cause) = source {
                eprintln!("  caused by: {}", cause);
                source = std::error::Error::source(cause);
            }
            process::exit(1);
        }
    }
}
