//! pickline CLI binary.

use std::fs::File;
use std::io::Write;
use std::process;

use clap::Parser;
use env_logger::{Builder, Target};
use log::LevelFilter;

use pickline::cli::args::*;
use pickline::cli::commands::*;
use pickline::cli::log_gate::LogGate;

fn main() {
    // Parse command line arguments using clap
    let args = PicklineArgs::parse();

    let log_level = match args.verbosity() {
        0 => LevelFilter::Error, // Quiet mode
        1 => LevelFilter::Warn,  // Default
        2 => LevelFilter::Info,  // Verbose
        _ => LevelFilter::Debug, // Very verbose (3+)
    };

    let mut builder = Builder::new();
    builder
        .filter_level(log_level)
        .format(|buf, record| writeln!(buf, "[{}] {}", record.level(), record.args()));

    // The terminal belongs to the UI while a session runs, so stderr
    // output is held back until it closes.
    let log_gate = match &args.log_file {
        Some(path) => match File::create(path) {
            Ok(file) => LogGate::new(Box::new(file)),
            Err(e) => {
                eprintln!("Error: cannot open log file {}: {e}", path.display());
                process::exit(1);
            }
        },
        None => LogGate::stderr(),
    };
    builder.target(Target::Pipe(Box::new(log_gate.writer())));
    builder.init();

    match execute_command(args, &log_gate) {
        Ok(code) => process::exit(code),
        Err(e) => {
            eprintln!("Error: {e}");
            process::exit(1);
        }
    }
}
