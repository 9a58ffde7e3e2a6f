//! # Parsed Network Model Module
//!
//! ## Purpose
//! Holds the result of a compilation pass: the three maps consumed by the
//! numerical simulator. Statements are folded into the maps one by one,
//! each statement kind with its own arity rule.
//!
//! ## Main Data Structures
//! - `ParsedModel`: the three output maps
//!   - `initial`: {species -> starting concentration}
//!   - `params`: {canonical reaction string -> rate constant(s)}, a
//!     reversible reaction declared with two values stores the pair
//!     (forward, reverse)
//!   - `drain`: {species -> drain parameters}, the outflow and inflow
//!     sub-fields are populated independently and merged per species
//! - `ParsedStatement`: one statement after parsing, still carrying its
//!   source line number for error reporting during aggregation
//! - `DuplicatePolicy`: what to do when an initial condition is declared
//!   twice for the same species

use log::warn;
use prettytable::{Cell, Row, Table};
use serde::Serialize;
use std::collections::HashMap;

use crate::NetParser::identifiers::{Identifier, IdentifierKind};
use crate::NetParser::parse_errors::ParseError;

/// rate constant(s) of a reaction, a reversible reaction declared with two
/// values keeps them as (forward, reverse)
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(untagged)]
pub enum RateConst {
    Single(f64),
    Pair(f64, f64),
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct OutflowParams {
    pub factor: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct InflowParams {
    pub constant: f64,
}

/// drain parameters of one species, either sub-field may be absent
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize)]
pub struct DrainParams {
    #[serde(rename = "out", skip_serializing_if = "Option::is_none")]
    pub outflow: Option<OutflowParams>,
    #[serde(rename = "in", skip_serializing_if = "Option::is_none")]
    pub inflow: Option<InflowParams>,
}

/// behavior on a repeated initial condition declaration for the same species
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DuplicatePolicy {
    /// later statement silently replaces the earlier one
    Overwrite,
    /// later statement replaces the earlier one and a warning is logged
    Warn,
    /// repeated declaration aborts the pass
    Error,
}

/// one statement of the input file after parsing
#[derive(Debug, Clone, PartialEq)]
pub struct ParsedStatement {
    pub line_number: usize,
    pub identifier: Identifier,
    pub value: Vec<f64>,
}

#[derive(Debug, Clone, Default, Serialize)]
pub struct ParsedModel {
    pub initial: HashMap<String, f64>,
    pub params: HashMap<String, RateConst>,
    pub drain: HashMap<String, DrainParams>,
}

impl ParsedModel {
    pub fn new() -> Self {
        Self {
            initial: HashMap::new(),
            params: HashMap::new(),
            drain: HashMap::new(),
        }
    }

    /////////////////////////////////AGGREGATION///////////////////////////////////////////

    /// Folds one parsed statement into the maps. Arity rules per kind:
    /// initial conditions, one-way reactions and drains take exactly one
    /// value, a reversible reaction takes one or two
    pub fn insert_statement(
        &mut self,
        statement: &ParsedStatement,
        on_duplicate: DuplicatePolicy,
    ) -> Result<(), ParseError> {
        let line = statement.line_number;
        let identifier = &statement.identifier;
        let value = &statement.value;
        match identifier.kind {
            IdentifierKind::InitialCondition => {
                if value.len() > 1 {
                    return Err(ParseError::TooManyValues { line });
                }
                let symbol = Self::single_symbol(identifier, line)?;
                if self.initial.contains_key(&symbol) {
                    match on_duplicate {
                        DuplicatePolicy::Overwrite => {}
                        DuplicatePolicy::Warn => warn!(
                            "line {}: initial condition for '{}' declared again, previous value replaced",
                            line, symbol
                        ),
                        DuplicatePolicy::Error => {
                            return Err(ParseError::DuplicateInitialCondition { line, symbol });
                        }
                    }
                }
                self.initial.insert(symbol, value[0]);
            }
            IdentifierKind::ReversibleReaction => match value.len() {
                1 => {
                    self.params
                        .insert(identifier.stringify_reaction(), RateConst::Single(value[0]));
                }
                2 => {
                    self.params.insert(
                        identifier.stringify_reaction(),
                        RateConst::Pair(value[0], value[1]),
                    );
                }
                _ => return Err(ParseError::TooManyValuesReversible { line }),
            },
            IdentifierKind::ForwardReaction | IdentifierKind::ReverseAliasReaction => {
                if value.len() != 1 {
                    return Err(ParseError::TooManyValuesOneWay { line });
                }
                self.params
                    .insert(identifier.stringify_reaction(), RateConst::Single(value[0]));
            }
            IdentifierKind::DrainOutflow => {
                if value.len() != 1 {
                    return Err(ParseError::TooManyValuesDrain { line });
                }
                let symbol = Self::single_symbol(identifier, line)?;
                let entry = self.drain.entry(symbol).or_default();
                entry.outflow = Some(OutflowParams { factor: value[0] });
            }
            IdentifierKind::DrainInflow => {
                if value.len() != 1 {
                    return Err(ParseError::TooManyValuesDrain { line });
                }
                let symbol = Self::single_symbol(identifier, line)?;
                let entry = self.drain.entry(symbol).or_default();
                entry.inflow = Some(InflowParams { constant: value[0] });
            }
        }
        Ok(())
    }

    // the identifier parser guarantees a symbol for these kinds, but the
    // aggregator can be fed hand-built identifiers as well
    fn single_symbol(identifier: &Identifier, line: usize) -> Result<String, ParseError> {
        match identifier.left_symbols.first() {
            Some(symbol) => Ok(symbol.clone()),
            None => Err(ParseError::EmptySymbolDeclaration { line }),
        }
    }

    /////////////////////////////////PRESENTATION///////////////////////////////////////////

    /// prints the three maps as tables
    pub fn pretty_print(&self) {
        let mut initial_table = Table::new();
        initial_table.add_row(Row::new(vec![Cell::new("species"), Cell::new("initial value")]));
        let mut initial_keys: Vec<&String> = self.initial.keys().collect();
        initial_keys.sort();
        for symbol in initial_keys {
            initial_table.add_row(Row::new(vec![
                Cell::new(symbol),
                Cell::new(&self.initial[symbol].to_string()),
            ]));
        }

        let mut params_table = Table::new();
        params_table.add_row(Row::new(vec![Cell::new("reaction"), Cell::new("rate constant(s)")]));
        let mut params_keys: Vec<&String> = self.params.keys().collect();
        params_keys.sort();
        for reaction in params_keys {
            let rendered = match self.params[reaction] {
                RateConst::Single(k) => k.to_string(),
                RateConst::Pair(k_forward, k_reverse) => {
                    format!("{}, {}", k_forward, k_reverse)
                }
            };
            params_table.add_row(Row::new(vec![Cell::new(reaction), Cell::new(&rendered)]));
        }

        let mut drain_table = Table::new();
        drain_table.add_row(Row::new(vec![
            Cell::new("species"),
            Cell::new("outflow factor"),
            Cell::new("inflow constant"),
        ]));
        let mut drain_keys: Vec<&String> = self.drain.keys().collect();
        drain_keys.sort();
        for symbol in drain_keys {
            let drain = &self.drain[symbol];
            let outflow = match drain.outflow {
                Some(out) => out.factor.to_string(),
                None => "-".to_string(),
            };
            let inflow = match drain.inflow {
                Some(inflow) => inflow.constant.to_string(),
                None => "-".to_string(),
            };
            drain_table.add_row(Row::new(vec![
                Cell::new(symbol),
                Cell::new(&outflow),
                Cell::new(&inflow),
            ]));
        }

        println!("initial conditions:");
        initial_table.printstd();
        println!("reaction parameters:");
        params_table.printstd();
        println!("drain parameters:");
        drain_table.printstd();
    }
}
