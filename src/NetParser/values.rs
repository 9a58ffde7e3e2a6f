use crate::NetParser::parse_errors::ParseError;
use regex::Regex;

/// lexical check for numeric literals, integer and floating point forms with
/// an optional sign and exponent are accepted
pub fn is_numeric(token: &str) -> bool {
    let re = Regex::new(r"^[+-]?(\d+\.?\d*|\.\d+)([eE][+-]?\d+)?$").unwrap();
    re.is_match(token)
}

/// Parses the value part of a statement. A comma-separated list yields a
/// tuple of numbers, a bare literal yields a one-element tuple
pub fn parse_value(raw: &str, line_number: usize) -> Result<Vec<f64>, ParseError> {
    if raw.contains(',') {
        let mut values = Vec::new();
        for piece in raw.split(',') {
            let piece = piece.trim();
            if !is_numeric(piece) {
                return Err(ParseError::NonNumericValue {
                    line: line_number,
                    value: piece.to_string(),
                });
            }
            let number = piece.parse::<f64>().map_err(|_| ParseError::NonNumericValue {
                line: line_number,
                value: piece.to_string(),
            })?;
            values.push(number);
        }
        Ok(values)
    } else {
        let literal = raw.trim();
        if !is_numeric(literal) {
            return Err(ParseError::InvalidLiteral {
                line: line_number,
                value: literal.to_string(),
            });
        }
        let number = literal.parse::<f64>().map_err(|_| ParseError::InvalidLiteral {
            line: line_number,
            value: literal.to_string(),
        })?;
        Ok(vec![number])
    }
}
