//! Clap command tree for the `valve` binary.

use clap::{Arg, ArgAction, Command};

/// Build the full command tree.
pub fn build_cli() -> Command {
    Command::new("valve")
        .about("Shape WITSML log data for the data platform and merge rendered responses")
        .version(env!("CARGO_PKG_VERSION"))
        .subcommand_required(true)
        .arg_required_else_help(true)
        .arg(
            Arg::new("config")
                .long("config")
                .short('c')
                .value_name("PATH")
                .global(true)
                .help("TOML options file"),
        )
        .arg(
            Arg::new("verbose")
                .long("verbose")
                .short('v')
                .global(true)
                .action(ArgAction::SetTrue)
                .help("Log at debug level to stderr"),
        )
        .subcommand(encode_cmd())
        .subcommand(data_cmd())
        .subcommand(merge_cmd())
}

fn input_arg() -> Arg {
    Arg::new("file")
        .value_name("FILE")
        .help("Delimited log rows, one per line (stdin if omitted)")
}

fn encode_cmd() -> Command {
    Command::new("encode")
        .about("Print the {mnemonicList, data} payload for log rows")
        .arg(
            Arg::new("mnemonics")
                .long("mnemonics")
                .short('m')
                .value_name("LIST")
                .required(true)
                .help("Comma-separated mnemonics, index channel first"),
        )
        .arg(
            Arg::new("lenient")
                .long("lenient")
                .action(ArgAction::SetTrue)
                .help("Accept rows whose width differs from the mnemonic list"),
        )
        .arg(input_arg())
}

fn data_cmd() -> Command {
    Command::new("data")
        .about("Print only the nested-array data string for log rows")
        .arg(input_arg())
}

fn merge_cmd() -> Command {
    Command::new("merge")
        .about("Merge single-object XML documents under one root")
        .arg(
            Arg::new("schema")
                .long("schema")
                .short('s')
                .value_name("VERSION")
                .help("Schema version of the fragments (1.3.1.1 or 1.4.1.1)"),
        )
        .arg(
            Arg::new("object")
                .long("object")
                .short('o')
                .value_name("TYPE")
                .required(true)
                .help("Data object type, e.g. well, wellbore, log"),
        )
        .arg(
            Arg::new("files")
                .value_name("FILE")
                .num_args(1..)
                .required(true)
                .help("Fragment documents, merged in the order given"),
        )
}
