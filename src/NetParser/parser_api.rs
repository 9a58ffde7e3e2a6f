//! # Reaction Network Parser API Module
//!
//! ## Purpose
//! This module is the entry point of the compiler front-end. It drives the
//! whole pass over an input document: line filtering, statement splitting,
//! identifier and value parsing, and the aggregation of the parsed
//! statements into the three output maps.
//!
//! ## Main Data Structures
//! - `ReactionNetParser`: the parser configuration (statement separator,
//!   duplicate policy) and the parsing methods
//!
//! ## Usage Pattern
//! ```rust
//! use KiNetLang::NetParser::parser_api::ReactionNetParser;
//! let parser = ReactionNetParser::new();
//! let model = parser
//!     .parse_str("X : 1.0\nX -> Y : 0.2\n<- X : 0.3")
//!     .unwrap();
//! assert_eq!(model.initial["X"], 1.0);
//! ```
//!
//! The pass is fail-fast: the first error aborts it, so either a complete
//! model is produced or the error with its source line number is the only
//! output.

use log::info;
use std::path::Path;

use crate::NetParser::identifiers::Identifier;
use crate::NetParser::netmodel::{DuplicatePolicy, ParsedModel, ParsedStatement};
use crate::NetParser::parse_errors::ParseError;
use crate::NetParser::statements::{cooked_lines, split_statement};
use crate::NetParser::values::parse_value;
use crate::Utils::file_io::read_statement_lines;

/// parser configuration and the compilation pass
#[derive(Debug, Clone)]
pub struct ReactionNetParser {
    /// character separating the name part of a statement from its value part
    pub separator: char,
    /// behavior on repeated initial condition declarations
    pub on_duplicate: DuplicatePolicy,
}

impl ReactionNetParser {
    pub fn new() -> Self {
        Self {
            separator: ':',
            on_duplicate: DuplicatePolicy::Warn,
        }
    }

    pub fn with_separator(separator: char) -> Self {
        Self {
            separator,
            on_duplicate: DuplicatePolicy::Warn,
        }
    }

    pub fn set_duplicate_policy(&mut self, policy: DuplicatePolicy) {
        self.on_duplicate = policy;
    }

    /// Parses one cooked statement line into its structured form
    pub fn parse_statement(
        &self,
        line: &str,
        line_number: usize,
    ) -> Result<ParsedStatement, ParseError> {
        let (name, value) = split_statement(line, line_number, self.separator)?;
        let identifier = Identifier::parse(name, line_number)?;
        let value = parse_value(value, line_number)?;
        Ok(ParsedStatement {
            line_number,
            identifier,
            value,
        })
    }

    /// Runs the whole pass over a sequence of raw lines: filter, parse and
    /// fold every statement into the model
    pub fn parse_lines<'a, I>(&self, lines: I) -> Result<ParsedModel, ParseError>
    where
        I: IntoIterator<Item = &'a str>,
    {
        let mut model = ParsedModel::new();
        for (line_number, line) in cooked_lines(lines) {
            let statement = self.parse_statement(line, line_number)?;
            model.insert_statement(&statement, self.on_duplicate)?;
        }
        Ok(model)
    }

    pub fn parse_str(&self, text: &str) -> Result<ParsedModel, ParseError> {
        self.parse_lines(text.lines())
    }

    /// Reads the input file and compiles it. The file handle is released as
    /// soon as the raw lines are in memory
    pub fn parse_file(&self, path: &Path) -> Result<ParsedModel, ParseError> {
        let lines = read_statement_lines(path)?;
        let model = self.parse_lines(lines.iter().map(|line| line.as_str()))?;
        info!(
            "'{}' compiled: {} initial conditions, {} reactions, {} drains",
            path.display(),
            model.initial.len(),
            model.params.len(),
            model.drain.len()
        );
        Ok(model)
    }
}
