use std::io::{self, BufRead, Write};
use std::path::{Path, PathBuf};
use std::process::exit;

use crate::args::Args;
use clap::Parser;
use simplelog::{ColorChoice, Config, LevelFilter, TermLogger, TerminalMode};
use web_deslop::{DeslopError, Deslopper};

mod args;

pub fn main() {
    let args = Args::parse();

    let level = if args.debug {
        LevelFilter::Debug
    } else {
        LevelFilter::Info
    };
    if let Err(error) = TermLogger::init(
        level,
        Config::default(),
        TerminalMode::Mixed,
        ColorChoice::Auto,
    ) {
        eprintln!("Failed to set up logging: {error}");
    }

    let input_file = match args.input_path() {
        Some(input_file) => input_file,
        None => {
            println!("Some arguments are missing. Please provide them interactively.");
            prompt_path("Enter input file path: ")
        }
    };

    if let Err(error) = deslop_file(&input_file) {
        println!("{error}");
        exit(1);
    }
}

fn prompt_path(prompt: &str) -> PathBuf {
    print!("{prompt}");
    let _ = io::stdout().flush();

    let mut line = String::new();
    if let Err(error) = io::stdin().lock().read_line(&mut line) {
        log::warn!("Failed to read from stdin: {error}");
    }

    PathBuf::from(line.trim())
}

fn deslop_file(input_file: &Path) -> Result<(), DeslopError> {
    println!("Starting to process file: {}", input_file.display());

    let deslopper = Deslopper::builtin()?;
    let report = deslopper.process_file_with(input_file, Path::new(""), |characters| {
        println!("Read {characters} characters from input file")
    })?;

    println!("Cleaned data written to {}", report.output_path.display());
    println!("Original text contained {} tokens", report.original_tokens);
    println!(
        "Detected and removed {} tokens of slop.",
        report.tokens_removed()
    );
    log::debug!("{} chunks dropped", report.dropped_chunks);

    Ok(())
}
