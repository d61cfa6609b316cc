use crate::infrastructure::event_ndjson::NdjsonPrinter;
use crate::usecase::event::EventSink;
use crate::usecase::pipeline::{run_sort, run_verify, RunError};
use anyhow::{anyhow, Context, Result};
use std::env;
use std::path::{Path, PathBuf};
use std::time::{SystemTime, UNIX_EPOCH};

// Paths used when no flags are given, so a bare `sort` run works from the
// directory holding the report.
pub const DEFAULT_SOURCE: &str = "all-region.csv";
pub const DEFAULT_DEST: &str = "retailers.json";

pub fn run() -> Result<(), RunError> {
    let args: Vec<String> = env::args().collect();
    run_with_args(&args)
}

pub fn run_with_args(args: &[String]) -> Result<(), RunError> {
    let cmd = Cli::parse(args)?;

    match cmd {
        Cli::Sort {
            input,
            output,
            emit_events,
            backup,
            dry_run,
        } => {
            if !dry_run && is_same_file(&input, &output) {
                if !backup {
                    return Err(RunError::Failure(anyhow!(
                        "refusing to overwrite input without --backup: {input}"
                    )));
                }
                let _backup_path = create_timestamped_backup(Path::new(&input))
                    .with_context(|| format!("creating backup for: {input}"))?;
            }

            let printer = NdjsonPrinter;
            let sink: Option<&dyn EventSink> = if emit_events { Some(&printer) } else { None };

            let stats = run_sort(&input, &output, dry_run, sink)?;

            if !dry_run {
                println!("wrote {} records to {}", stats.records_written, output);
            }
            eprintln!("{}", stats.summary_line());

            Ok(())
        }

        Cli::Verify { input } => {
            let count = run_verify(&input)?;
            eprintln!("ok: {count} records in tier order");
            Ok(())
        }
    }
}

#[derive(Debug)]
enum Cli {
    Sort {
        input: String,
        output: String,
        emit_events: bool,
        backup: bool,
        dry_run: bool,
    },
    Verify {
        input: String,
    },
}

impl Cli {
    fn parse(args: &[String]) -> Result<Self> {
        // Expected:
        // <bin> sort [--in/--input <report.csv>] [--out/--output <dest.json>] [--emit-events] [--backup] [--dry-run]
        // <bin> verify [--in/--input <dest.json>]
        if args.len() < 2 {
            return Err(anyhow!(usage()));
        }

        match args[1].as_str() {
            "sort" => Self::parse_sort(args),
            "verify" => Self::parse_verify(args),
            "-h" | "--help" => Err(anyhow!(usage())),
            _ => Err(anyhow!(usage())),
        }
    }

    fn parse_sort(args: &[String]) -> Result<Self> {
        let mut input: Option<String> = None;
        let mut output: Option<String> = None;
        let mut emit_events = false;
        let mut backup = false;
        let mut dry_run = false;

        let mut i = 2;
        while i < args.len() {
            match args[i].as_str() {
                "--in" | "--input" => {
                    i += 1;
                    input = Some(value_for(args, i, "--in/--input")?);
                }
                "--out" | "--output" => {
                    i += 1;
                    output = Some(value_for(args, i, "--out/--output")?);
                }
                "--emit-events" => {
                    emit_events = true;
                }
                "--dry-run" => {
                    dry_run = true;
                }
                "--backup" => {
                    backup = true;
                }
                "-h" | "--help" => return Err(anyhow!(usage())),
                other => return Err(anyhow!(format!("unknown arg: {other}\n\n{}", usage()))),
            }
            i += 1;
        }

        Ok(Cli::Sort {
            input: input.unwrap_or_else(|| DEFAULT_SOURCE.to_string()),
            output: output.unwrap_or_else(|| DEFAULT_DEST.to_string()),
            emit_events,
            backup,
            dry_run,
        })
    }

    fn parse_verify(args: &[String]) -> Result<Self> {
        let mut input: Option<String> = None;

        let mut i = 2;
        while i < args.len() {
            match args[i].as_str() {
                "--in" | "--input" => {
                    i += 1;
                    input = Some(value_for(args, i, "--in/--input")?);
                }
                "-h" | "--help" => return Err(anyhow!(usage())),
                other => return Err(anyhow!(format!("unknown arg: {other}\n\n{}", usage()))),
            }
            i += 1;
        }

        Ok(Cli::Verify {
            input: input.unwrap_or_else(|| DEFAULT_DEST.to_string()),
        })
    }
}

fn value_for(args: &[String], i: usize, flag: &str) -> Result<String> {
    args.get(i)
        .cloned()
        .ok_or_else(|| anyhow!(format!("missing value for {flag}\n\n{}", usage())))
}

fn usage() -> &'static str {
    "Usage:\n  retailers sort [--in/--input <report.csv>] [--out/--output <dest.json>] [--emit-events] [--backup] [--dry-run]\n  retailers verify [--in/--input <dest.json>]\n\nDefaults:\n  --in all-region.csv, --out retailers.json\n\nEvents:\n  If --emit-events is set, NDJSON events are written to stdout; summary goes to stderr.\n\nSafety:\n  If the output path equals the input path, --backup is required and a timestamped backup is created in the same directory."
}

fn is_same_file(a: &str, b: &str) -> bool {
    let a = std::fs::canonicalize(a).unwrap_or_else(|_| PathBuf::from(a));
    let b = std::fs::canonicalize(b).unwrap_or_else(|_| PathBuf::from(b));
    a == b
}

fn create_timestamped_backup(input: &Path) -> Result<PathBuf> {
    let file_name = input
        .file_name()
        .and_then(|s| s.to_str())
        .ok_or_else(|| anyhow!("input file name is not valid UTF-8"))?;

    let ts = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap_or_default()
        .as_millis();

    let backup_name = format!("{file_name}.bak.{ts}");
    let backup_path = input.with_file_name(backup_name);
    std::fs::copy(input, &backup_path).with_context(|| format!("copying {file_name} to backup"))?;
    Ok(backup_path)
}
