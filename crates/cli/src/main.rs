//! Valve CLI: the transcoder and response merger over files and stdin.
//!
//! - `valve encode --mnemonics DEPT,GR [--lenient] [FILE]`: payload JSON
//! - `valve data [FILE]`: nested-array data string only
//! - `valve merge [--schema VERSION] --object TYPE FILE...`: merged document
//!
//! Exit code is 0 on success and 1 on any error, with the message on stderr.

mod commands;
mod parse;

use std::io::Read;
use std::path::{Path, PathBuf};
use std::process;

use tracing::debug;
use tracing_subscriber::EnvFilter;
use witsml_valve::{LogRowSet, MnemonicList, ObjectType, RowWidthCheck, SchemaVersion, Valve};

use commands::build_cli;
use parse::{matches_to_action, CliAction, Input};

fn main() {
    let matches = build_cli().get_matches();

    init_tracing(matches.get_flag("verbose"));

    let valve = match open_valve(matches.get_one::<String>("config").map(Path::new)) {
        Ok(valve) => valve,
        Err(e) => {
            eprintln!("{}", e);
            process::exit(1);
        }
    };

    let exit_code = match matches_to_action(&matches).and_then(|action| run(&valve, action)) {
        Ok(output) => {
            println!("{}", output);
            0
        }
        Err(e) => {
            eprintln!("{}", e);
            1
        }
    };
    process::exit(exit_code);
}

fn init_tracing(verbose: bool) {
    let filter = if verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_env("RUST_LOG").unwrap_or_else(|_| EnvFilter::new("warn"))
    };
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(filter)
        .init();
}

fn open_valve(config: Option<&Path>) -> Result<Valve, String> {
    match config {
        Some(path) => Valve::open(path).map_err(|e| format!("Failed to load options: {}", e)),
        None => Ok(Valve::new()),
    }
}

/// Execute one action and return what goes to stdout.
fn run(valve: &Valve, action: CliAction) -> Result<String, String> {
    match action {
        CliAction::Encode {
            mnemonics,
            lenient,
            input,
        } => encode(valve, &mnemonics, lenient, &read_input(&input)?),
        CliAction::Data { input } => {
            let rows = parse_rows(&read_input(&input)?)?;
            witsml_valve::encode_rows(&rows).map_err(|e| e.to_string())
        }
        CliAction::Merge {
            schema,
            object,
            files,
        } => merge(valve, schema, object, &files),
    }
}

fn encode(valve: &Valve, mnemonics: &MnemonicList, lenient: bool, text: &str) -> Result<String, String> {
    let rows = parse_rows(text)?;
    let lenient_valve;
    let valve = if lenient {
        lenient_valve = Valve::with_options(valve.options().clone().row_width(RowWidthCheck::Off));
        &lenient_valve
    } else {
        valve
    };
    let payload = valve.payload(mnemonics, &rows).map_err(|e| e.to_string())?;
    payload.to_json().map_err(|e| e.to_string())
}

fn merge(
    valve: &Valve,
    schema: Option<SchemaVersion>,
    object: ObjectType,
    files: &[PathBuf],
) -> Result<String, String> {
    let fragments = files
        .iter()
        .map(|path| read_file(path))
        .collect::<Result<Vec<_>, _>>()?;
    let version = schema.unwrap_or(valve.options().default_schema);
    debug!(fragments = fragments.len(), %version, object = object.name(), "merging files");
    valve
        .merge_at(&fragments, version, object)
        .map_err(|e| e.to_string())
}

/// Rows from text, one per line; blank lines are skipped.
fn parse_rows(text: &str) -> Result<LogRowSet, String> {
    LogRowSet::parse_lines(text.lines().filter(|line| !line.trim().is_empty()))
        .map_err(|e| e.to_string())
}

fn read_input(input: &Input) -> Result<String, String> {
    match input {
        Input::Stdin => {
            let mut text = String::new();
            std::io::stdin()
                .read_to_string(&mut text)
                .map_err(|e| format!("Failed to read stdin: {}", e))?;
            Ok(text)
        }
        Input::File(path) => read_file(path),
    }
}

fn read_file(path: &Path) -> Result<String, String> {
    std::fs::read_to_string(path).map_err(|e| format!("Failed to read {}: {}", path.display(), e))
}
