//! Command-line interface of the reaction network compiler
//!
//! Usage:
//!   kinetlang `<path>`                      - compile and print the model
//!   kinetlang `<path>` -o `<output>`        - compile and write the model as JSON

use clap::{Arg, ArgAction, Command};
use log::error;
use simplelog::{ColorChoice, Config, LevelFilter, TermLogger, TerminalMode};
use std::path::Path;
use std::process;

use crate::NetParser::netmodel::DuplicatePolicy;
use crate::NetParser::parser_api::ReactionNetParser;
use crate::Utils::file_io::save_model_json;

pub fn run_cli() {
    let matches = Command::new("kinetlang")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Compiler for the reaction network simulation library")
        .arg(
            Arg::new("input")
                .help("Input file with reaction network statements")
                .required(true)
                .index(1),
        )
        .arg(
            Arg::new("output")
                .long("output")
                .short('o')
                .help("Output file for the compiled model (JSON)"),
        )
        .arg(
            Arg::new("strict-duplicates")
                .long("strict-duplicates")
                .help("Treat repeated initial condition declarations as errors")
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new("quiet")
                .long("quiet")
                .short('q')
                .help("Only log errors")
                .action(ArgAction::SetTrue),
        )
        .get_matches();

    let level = if matches.get_flag("quiet") {
        LevelFilter::Error
    } else {
        LevelFilter::Info
    };
    let _ = TermLogger::init(
        level,
        Config::default(),
        TerminalMode::Mixed,
        ColorChoice::Auto,
    );

    let input = matches.get_one::<String>("input").expect("input is required");

    let mut parser = ReactionNetParser::new();
    if matches.get_flag("strict-duplicates") {
        parser.set_duplicate_policy(DuplicatePolicy::Error);
    }

    let model = parser.parse_file(Path::new(input)).unwrap_or_else(|e| {
        error!("{}", e);
        process::exit(1);
    });

    match matches.get_one::<String>("output") {
        Some(output) => {
            if let Err(e) = save_model_json(&model, Path::new(output)) {
                error!("{}", e);
                process::exit(1);
            }
        }
        None => model.pretty_print(),
    }
}
