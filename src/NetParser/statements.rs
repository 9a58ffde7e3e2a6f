use crate::NetParser::parse_errors::ParseError;

/// Pairs every surviving line with its 1-based number in the original input.
/// A line is dropped when, after trimming, it is empty or starts with '#',
/// the numbering still counts the dropped lines so errors point at the file
pub fn cooked_lines<'a, I>(lines: I) -> impl Iterator<Item = (usize, &'a str)>
where
    I: IntoIterator<Item = &'a str>,
{
    lines
        .into_iter()
        .enumerate()
        .map(|(i, raw)| (i + 1, raw.trim()))
        .filter(|(_, line)| !line.is_empty() && !line.starts_with('#'))
}

/// Splits a statement on the first occurrence of the separator into its name
/// and value parts, both trimmed
pub fn split_statement(
    line: &str,
    line_number: usize,
    separator: char,
) -> Result<(&str, &str), ParseError> {
    match line.split_once(separator) {
        Some((name, value)) => Ok((name.trim(), value.trim())),
        None => Err(ParseError::MalformedStatement { line: line_number }),
    }
}
