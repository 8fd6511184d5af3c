use std::ffi::OsString;
use std::io;
use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use log::LevelFilter;
use simple_logger::SimpleLogger;

use org_record_sort::malformed_rows::MalformedRows;
use org_record_sort::order::Order;
use org_record_sort::output::write_sorted;
use org_record_sort::record_field::RecordField;
use org_record_sort::sort::Sort;

const NO_INPUT_FILE: &str =
    "No input file provided. Please use the 'input.file' flag to provide a CSV input file.";

/// Sort a CSV file of organization records and print them
#[derive(Parser, Debug)]
#[command(name = "org-record-sort", version, about)]
struct Cli {
    /// CSV input file
    #[arg(long = "input.file", value_name = "PATH")]
    input_file: Option<String>,

    /// Record field to sort by
    #[arg(long = "sort.field", value_name = "FIELD", default_value = "name")]
    sort_field: RecordField,

    /// Sort order, asc or desc
    #[arg(long = "sort.order", value_name = "ORDER", default_value = "asc")]
    sort_order: Order,

    /// What to do with malformed rows: truncate, skip or fail
    #[arg(long = "on.malformed", value_name = "POLICY", default_value = "truncate")]
    on_malformed: MalformedRows,

    /// Sort on the main thread instead of a worker thread
    #[arg(long = "no-worker")]
    no_worker: bool,
}

const LONG_FLAGS: [&str; 5] = ["input.file", "sort.field", "sort.order", "on.malformed", "no-worker"];

// accept the single dash form of the long flags, -input.file and -input.file=PATH
fn normalize_args<I: IntoIterator<Item = OsString>>(args: I) -> Vec<OsString> {
    args.into_iter()
        .map(|arg| {
            let single_dash = arg
                .to_str()
                .and_then(|a| a.strip_prefix('-'))
                .filter(|rest| !rest.starts_with('-'))
                .map(|rest| rest.split('=').next().unwrap_or(rest))
                .is_some_and(|name| LONG_FLAGS.contains(&name));
            if single_dash {
                let mut long = OsString::from("-");
                long.push(&arg);
                long
            } else {
                arg
            }
        })
        .collect()
}

fn main() -> ExitCode {
    // stdout carries the sorted records only, logs go to stderr
    if let Err(e) = SimpleLogger::new()
        .with_level(LevelFilter::Warn)
        .with_utc_timestamps()
        .env()
        .init() {
        eprintln!("Failed to initialize logging: {}", e);
    }

    let cli = Cli::parse_from(normalize_args(std::env::args_os()));
    let input_file = match cli.input_file.filter(|path| !path.is_empty()) {
        Some(input_file) => PathBuf::from(input_file),
        None => {
            println!("{}", NO_INPUT_FILE);
            return ExitCode::from(1);
        }
    };

    let mut sort = Sort::new(input_file);
    sort.with_field(cli.sort_field);
    sort.with_order(cli.sort_order);
    sort.with_malformed_rows(cli.on_malformed);
    sort.with_worker(!cli.no_worker);

    let records = match sort.sort() {
        Ok(records) => records,
        Err(e) => {
            eprintln!("Error reading CSV: {}", e);
            return ExitCode::from(1);
        }
    };

    if let Err(e) = write_sorted(&mut io::stdout().lock(), &records) {
        eprintln!("Error writing records: {}", e);
        return ExitCode::from(1);
    }
    ExitCode::SUCCESS
}
