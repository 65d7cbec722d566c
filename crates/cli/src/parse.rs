//! ArgMatches → CliAction conversion.
//!
//! Tag strings (schema versions, object types, mnemonic lists) are parsed
//! here so a bad argument fails before any input is read.

use clap::ArgMatches;
use std::path::PathBuf;
use witsml_valve::{MnemonicList, ObjectType, SchemaVersion};

/// Where log rows are read from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Input {
    Stdin,
    File(PathBuf),
}

/// The result of parsing the command line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CliAction {
    /// Rows to payload JSON.
    Encode {
        mnemonics: MnemonicList,
        lenient: bool,
        input: Input,
    },
    /// Rows to the bare data string.
    Data { input: Input },
    /// Fragments to one document. `schema` falls back to the configured default.
    Merge {
        schema: Option<SchemaVersion>,
        object: ObjectType,
        files: Vec<PathBuf>,
    },
}

/// Convert clap ArgMatches into a CliAction.
pub fn matches_to_action(matches: &ArgMatches) -> Result<CliAction, String> {
    let (sub_name, m) = matches
        .subcommand()
        .ok_or_else(|| "No command provided".to_string())?;

    match sub_name {
        "encode" => {
            let raw = m
                .get_one::<String>("mnemonics")
                .ok_or("Missing --mnemonics")?;
            let mnemonics = MnemonicList::parse(raw);
            if mnemonics.is_empty() {
                return Err("Mnemonic list is empty".to_string());
            }
            Ok(CliAction::Encode {
                mnemonics,
                lenient: m.get_flag("lenient"),
                input: input(m),
            })
        }
        "data" => Ok(CliAction::Data { input: input(m) }),
        "merge" => {
            let schema = m
                .get_one::<String>("schema")
                .map(|s| s.parse::<SchemaVersion>())
                .transpose()
                .map_err(|e| e.to_string())?;
            let object = m
                .get_one::<String>("object")
                .ok_or("Missing --object")?
                .parse::<ObjectType>()
                .map_err(|e| e.to_string())?;
            let files = m
                .get_many::<String>("files")
                .map(|files| files.map(PathBuf::from).collect())
                .unwrap_or_default();
            Ok(CliAction::Merge {
                schema,
                object,
                files,
            })
        }
        other => Err(format!("Unknown command: {}", other)),
    }
}

fn input(m: &ArgMatches) -> Input {
    match m.get_one::<String>("file") {
        Some(path) if path != "-" => Input::File(PathBuf::from(path)),
        _ => Input::Stdin,
    }
}
