use log::{error, info};
use std::fs::File;
use std::io::{BufRead, BufReader, Write};
use std::path::Path;

use crate::NetParser::netmodel::ParsedModel;
use crate::NetParser::parse_errors::ParseError;

/// Reads a statement file into a vector of raw lines. The file handle lives
/// only for the duration of the read
pub fn read_statement_lines(path: &Path) -> Result<Vec<String>, ParseError> {
    if !path.exists() {
        error!("file '{}' does not exist", path.display());
        return Err(ParseError::Io(std::io::Error::new(
            std::io::ErrorKind::NotFound,
            format!("file '{}' does not exist", path.display()),
        )));
    }
    let file = File::open(path)?;
    let reader = BufReader::new(file);
    let lines: Vec<String> = reader.lines().collect::<Result<_, _>>()?;
    Ok(lines)
}

/// Writes the compiled model to a JSON file
pub fn save_model_json(model: &ParsedModel, path: &Path) -> Result<(), ParseError> {
    let serialized = serde_json::to_string_pretty(model)?;
    let mut file = File::create(path)?;
    file.write_all(serialized.as_bytes())?;
    info!("parsed model written to '{}'", path.display());
    Ok(())
}
