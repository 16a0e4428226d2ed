//! lcut: select byte ranges or delimited fields from lines of text.
//!
//! Usage: lcut (-b LIST | -f LIST) [OPTIONS] [FILE]...

use clap::{ArgGroup, Parser};
use log::debug;
use std::io::{self, BufWriter, Write};
use std::path::PathBuf;
use std::process;

use linecut::lines::{CutError, LineReader};
use linecut::selector::{process_lines, ByteSelector, FieldSelector, LineProcessor};

#[derive(Parser)]
#[command(name = "lcut")]
#[command(version)]
#[command(about = "Select byte ranges or delimited fields from lines of text", long_about = None)]
#[command(group(ArgGroup::new("mode").required(true).args(["bytes", "fields"])))]
struct Cli {
    /// Select these byte positions from each line (e.g. "1-2,4,7-9")
    #[arg(short = 'b', long, value_name = "LIST")]
    bytes: Option<String>,

    /// Select these delimiter-separated fields from each line
    #[arg(short = 'f', long, value_name = "LIST")]
    fields: Option<String>,

    /// Field delimiter (field mode only; default: tab)
    #[arg(
        short = 'd',
        long,
        value_name = "DELIM",
        requires = "fields",
        value_parser = parse_delimiter
    )]
    delimiter: Option<String>,

    /// Invert the selection
    #[arg(long)]
    complement: bool,

    /// Print the resolved options and file list before processing
    #[arg(short, long)]
    verbose: bool,

    /// Input files (use - for stdin; no files reads stdin)
    #[arg(value_name = "FILE")]
    files: Vec<PathBuf>,
}

fn parse_delimiter(s: &str) -> Result<String, String> {
    if s.is_empty() {
        Err("delimiter must not be empty".to_string())
    } else {
        Ok(s.to_string())
    }
}

fn main() {
    let cli = Cli::parse();

    init_logging(cli.verbose);

    if let Err(e) = run(cli) {
        eprintln!("Error: {}", e);
        process::exit(1);
    }
}

fn init_logging(verbose: bool) {
    let level = if verbose {
        log::LevelFilter::Debug
    } else {
        log::LevelFilter::Warn
    };
    env_logger::Builder::new()
        .filter_level(level)
        .parse_default_env()
        .init();
}

fn run(cli: Cli) -> Result<(), CutError> {
    match (&cli.bytes, &cli.fields) {
        (Some(spec), None) => {
            let selector = ByteSelector::new(spec, cli.complement)?;
            debug!(
                "byte mode, positions {}, complement {}, files {:?}",
                selector.intervals(),
                cli.complement,
                cli.files
            );
            run_files(&selector, &cli.files)
        }
        (None, Some(spec)) => {
            let delimiter = cli.delimiter.as_deref().unwrap_or("\t");
            let selector = FieldSelector::new(spec, delimiter, cli.complement)?;
            debug!(
                "field mode, positions {}, delimiter {:?}, complement {}, files {:?}",
                selector.intervals(),
                delimiter,
                cli.complement,
                cli.files
            );
            run_files(&selector, &cli.files)
        }
        // clap's arg group guarantees exactly one mode flag.
        _ => unreachable!(),
    }
}

fn run_files<P: LineProcessor>(processor: &P, files: &[PathBuf]) -> Result<(), CutError> {
    let stdout = io::stdout();
    let mut handle = BufWriter::new(stdout.lock());

    if files.is_empty() {
        let stdin = io::stdin();
        let reader = LineReader::new(stdin.lock());
        process_lines(processor, reader, &mut handle)?;
    } else {
        for path in files {
            if path.as_os_str() == "-" {
                let stdin = io::stdin();
                let reader = LineReader::new(stdin.lock());
                process_lines(processor, reader, &mut handle)?;
                continue;
            }

            // A file that cannot be opened or read is reported and skipped;
            // the remaining files are still processed.
            let reader = match LineReader::from_path(path) {
                Ok(reader) => reader,
                Err(e) => {
                    eprintln!("lcut: {}: {}", path.display(), e);
                    continue;
                }
            };
            if let Err(e) = process_lines(processor, reader, &mut handle) {
                eprintln!("lcut: {}: {}", path.display(), e);
            }
        }
    }

    handle.flush().map_err(CutError::Io)?;
    Ok(())
}
