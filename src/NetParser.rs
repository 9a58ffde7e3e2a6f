/// Error taxonomy of the compiler: every failure carries the 1-based number
/// of the source line where it was detected, parsing stops at the first error
pub mod parse_errors;
/// Filtering of raw input lines (blank lines and whole-line comments are
/// dropped, surviving lines keep their original 1-based numbers) and
/// splitting of a statement into its name and value parts
pub mod statements;
/// eng
/// The module takes as input the name part of a statement and produces a structured identifier.
/// The name is classified into one of six statement kinds by its operator punctuation:
/// drain inflow '-> X', drain outflow '<- X', reversible reaction 'A <=> B',
/// forward reaction 'A -> B', reverse-written forward reaction 'A <- B' and initial condition 'X'.
/// Multiplier pairs like '2 A' are expanded into repeated symbols, so '2 A + B -> C'
/// reads as 'A + A + B -> C'. The module also renders identifiers back to the
/// canonical reaction string which serves as the key of the parameter map.
/// ru
/// Модуль берет на вход имя оператора и выдает структурированный идентификатор.
/// Имя классифицируется на один из шести видов по его пунктуации:
/// приток '-> X', отток '<- X', обратимая реакция 'A <=> B', прямая реакция 'A -> B',
/// прямая реакция записанная справа налево 'A <- B' и начальное условие 'X'.
/// Пары множителей вида '2 A' разворачиваются в повторяющиеся символы, так что '2 A + B -> C'
/// читается как 'A + A + B -> C'. Модуль также превращает идентификатор обратно в
/// каноническую строку реакции, которая служит ключом в карте параметров.
pub mod identifiers;
/// Parsing of the value part of a statement: a single numeric literal or a
/// comma-separated tuple of numeric literals
pub mod values;
/// The three output maps of the compiler (initial conditions, reaction rate
/// parameters, drain parameters) and the aggregation of parsed statements
/// into them with per-kind arity rules
pub mod netmodel;
///  # Examples
/// ```
/// use KiNetLang::NetParser::parser_api::ReactionNetParser;
/// let parser = ReactionNetParser::new();
/// let model = parser
///     .parse_str("X : 1.0\nX -> Y : 0.2\nY <=> Z : 0.1, 0.05")
///     .unwrap();
/// println!("initial: {:?}", model.initial);
/// println!("params: {:?}", model.params);
/// ```
pub mod parser_api;
pub mod parser_tests;
