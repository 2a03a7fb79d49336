//! Command-line interface for dds
//! This binary parses local DDS files and re-emits them in different formats,
//! or checks their brace balance without parsing.
//!
//! Usage:
//!   dds parse `<path>` [--format `<format>`]  - Parse a DDS file and print it
//!   dds check `<path>`                      - Check brace balance only

use clap::{Arg, Command};
use tracing_subscriber::EnvFilter;

use dds::dds::formats::{DdsText, FormatOptions};
use dds::dds::parsing::{check_braces_matching, parse_dataset};

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let matches = Command::new("dds")
        .version(env!("CARGO_PKG_VERSION"))
        .about("A tool for inspecting DDS (Dataset Descriptor Structure) files")
        .subcommand_required(true)
        .arg_required_else_help(true)
        .subcommand(
            Command::new("parse")
                .about("Parse a DDS file and print the result")
                .arg(
                    Arg::new("path")
                        .help("Path to the DDS file to parse")
                        .required(true)
                        .index(1),
                )
                .arg(
                    Arg::new("format")
                        .long("format")
                        .short('f')
                        .help("Output format ('compact', 'pretty', 'json', 'yaml')")
                        .default_value("pretty"),
                ),
        )
        .subcommand(
            Command::new("check")
                .about("Check the brace balance of a DDS file")
                .arg(
                    Arg::new("path")
                        .help("Path to the DDS file to check")
                        .required(true)
                        .index(1),
                ),
        )
        .get_matches();

    match matches.subcommand() {
        Some(("parse", parse_matches)) => {
            let path = parse_matches.get_one::<String>("path").unwrap();
            let format = parse_matches.get_one::<String>("format").unwrap();
            handle_parse_command(path, format);
        }
        Some(("check", check_matches)) => {
            let path = check_matches.get_one::<String>("path").unwrap();
            handle_check_command(path);
        }
        _ => unreachable!(),
    }
}

fn read_source(path: &str) -> String {
    std::fs::read_to_string(path).unwrap_or_else(|e| {
        eprintln!("Error reading file: {}", e);
        std::process::exit(1);
    })
}

/// Handle the parse command
fn handle_parse_command(path: &str, format: &str) {
    let source = read_source(path);
    let dataset = parse_dataset(&source).unwrap_or_else(|e| {
        eprintln!("Parse error: {}", e);
        std::process::exit(1);
    });

    let output = match format {
        "compact" => dataset.text(),
        "pretty" => dataset.text_formatted(&FormatOptions::pretty()),
        "json" => serde_json::to_string_pretty(&dataset).unwrap_or_else(|e| {
            eprintln!("Serialization error: {}", e);
            std::process::exit(1);
        }),
        "yaml" => serde_yaml::to_string(&dataset).unwrap_or_else(|e| {
            eprintln!("Serialization error: {}", e);
            std::process::exit(1);
        }),
        other => {
            eprintln!("Unknown output format: {}", other);
            std::process::exit(1);
        }
    };

    println!("{}", output);
}

/// Handle the check command
fn handle_check_command(path: &str) {
    let source = read_source(path);
    match check_braces_matching(&source) {
        Ok(()) => println!("braces match"),
        Err(e) => {
            eprintln!("{}", e);
            std::process::exit(1);
        }
    }
}
