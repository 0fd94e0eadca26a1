use std::io::{self, Write};
use std::path::PathBuf;

use clap::{Parser, ValueEnum};
use pragma_includes::{concatenate, includes};

#[derive(Clone, Debug, ValueEnum)]
enum OutputFormat {
    /// One resolved path per line
    Paths,
    /// Resolved paths as a JSON array
    Json,
    /// The concatenated source text
    Source,
}

#[derive(Debug, Parser)]
struct Cli {
    /// What to print
    #[arg(long, value_enum, default_value = "paths")]
    pub format: OutputFormat,

    /// Root shader files to resolve `#pragma use` directives of
    #[arg(required = true)]
    pub roots: Vec<PathBuf>,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    let cli = Cli::parse();

    let files = includes(&cli.roots)?;
    let mut stdout = io::stdout().lock();
    match cli.format {
        OutputFormat::Paths => {
            for file in &files {
                writeln!(stdout, "{}", file.as_path().display())?;
            }
        }
        OutputFormat::Json => {
            let paths: Vec<_> = files.iter().map(|file| file.as_path()).collect();
            writeln!(stdout, "{}", serde_json::to_string_pretty(&paths)?)?;
        }
        OutputFormat::Source => {
            write!(stdout, "{}", concatenate(&files)?)?;
        }
    };

    Ok(())
}
