use thiserror::Error;

/// error types for the reaction network compiler, every parse failure names
/// the 1-based source line it was detected at
#[derive(Debug, Error)]
pub enum ParseError {
    #[error("Error at line {line}: unexpected statement")]
    MalformedStatement { line: usize },
    #[error("Error at line {line}: invalid identifier symbol '{token}'")]
    InvalidSymbol { line: usize, token: String },
    #[error("Error at line {line}: invalid multiplier")]
    InvalidMultiplier { line: usize },
    #[error("Error at line {line}: no symbols supplied")]
    EmptySymbolDeclaration { line: usize },
    #[error("Error at line {line}: empty symbol declaration on both reaction sides")]
    EmptyReactionSide { line: usize },
    #[error("Error at line {line}: drain parameter statements does not support multipliers")]
    DrainMultiplierUnsupported { line: usize },
    #[error("Error at line {line}: non-numeric value '{value}' is not allowed")]
    NonNumericValue { line: usize, value: String },
    #[error("Error at line {line}: cannot parse '{value}' as a number")]
    InvalidLiteral { line: usize, value: String },
    #[error("Error at line {line}: initial condition declaration expects 1 value")]
    TooManyValues { line: usize },
    #[error("Error at line {line}: too many values declared for two-way reaction")]
    TooManyValuesReversible { line: usize },
    #[error("Error at line {line}: too many values declared for one-way reaction")]
    TooManyValuesOneWay { line: usize },
    #[error("Error at line {line}: too many values declared for drain parameter")]
    TooManyValuesDrain { line: usize },
    #[error("Error at line {line}: duplicate initial condition for species '{symbol}'")]
    DuplicateInitialCondition { line: usize, symbol: String },
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

impl ParseError {
    /// source line the failure was detected at, None for IO and serialization
    /// failures which are not tied to a statement
    pub fn line(&self) -> Option<usize> {
        match self {
            ParseError::MalformedStatement { line }
            | ParseError::InvalidSymbol { line, .. }
            | ParseError::InvalidMultiplier { line }
            | ParseError::EmptySymbolDeclaration { line }
            | ParseError::EmptyReactionSide { line }
            | ParseError::DrainMultiplierUnsupported { line }
            | ParseError::NonNumericValue { line, .. }
            | ParseError::InvalidLiteral { line, .. }
            | ParseError::TooManyValues { line }
            | ParseError::TooManyValuesReversible { line }
            | ParseError::TooManyValuesOneWay { line }
            | ParseError::TooManyValuesDrain { line }
            | ParseError::DuplicateInitialCondition { line, .. } => Some(*line),
            ParseError::Io(_) | ParseError::Serialization(_) => None,
        }
    }
}
