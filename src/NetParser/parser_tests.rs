/////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////
// TESTS
//////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////
#[cfg(test)]
mod tests {
    use crate::NetParser::identifiers::{Identifier, IdentifierKind, expand_symbols};
    use crate::NetParser::netmodel::{DuplicatePolicy, RateConst};
    use crate::NetParser::parse_errors::ParseError;
    use crate::NetParser::parser_api::ReactionNetParser;
    use crate::Utils::file_io::save_model_json;
    use approx::assert_relative_eq;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_end_to_end_example() {
        let source = "X : 1.0\n\
                      X -> Y : 0.2\n\
                      Y <=> Z : 0.1, 0.05\n\
                      <- X : 0.3\n\
                      -> X : 0.9\n";
        let parser = ReactionNetParser::new();
        let model = parser.parse_str(source).unwrap();

        assert_eq!(model.initial.len(), 1);
        assert_relative_eq!(model.initial["X"], 1.0);

        assert_eq!(model.params.len(), 2);
        assert_eq!(model.params["X -> Y"], RateConst::Single(0.2));
        assert_eq!(model.params["Y <=> Z"], RateConst::Pair(0.1, 0.05));

        assert_eq!(model.drain.len(), 1);
        let drain = &model.drain["X"];
        assert_relative_eq!(drain.outflow.unwrap().factor, 0.3);
        assert_relative_eq!(drain.inflow.unwrap().constant, 0.9);
    }

    #[test]
    fn test_expansion_is_deterministic_and_order_preserving() {
        let expanded = expand_symbols(&["2", "A", "B"], 1).unwrap();
        assert_eq!(expanded, vec!["A", "A", "B"]);
        // same input, same output
        assert_eq!(expand_symbols(&["2", "A", "B"], 1).unwrap(), expanded);
    }

    #[test]
    fn test_reaction_direction_aliasing_collides() {
        let parser = ReactionNetParser::new();
        let model = parser.parse_str("B -> A : 0.2\nA <- B : 0.5").unwrap();
        // both statements canonicalize to the same key, the later wins
        assert_eq!(model.params.len(), 1);
        assert_eq!(model.params["B -> A"], RateConst::Single(0.5));
    }

    #[test]
    fn test_stringify_roundtrip() {
        for name in ["2 A + B -> C", "A + B <=> 3 C", "C <- A + B"] {
            let identifier = Identifier::parse(name, 1).unwrap();
            let canonical = identifier.stringify_reaction();
            let reparsed = Identifier::parse(&canonical, 1).unwrap();
            assert_eq!(reparsed.stringify_reaction(), canonical);
        }
    }

    #[test]
    fn test_reversible_arity() {
        let parser = ReactionNetParser::new();

        let model = parser.parse_str("A <=> B : 0.1").unwrap();
        assert_eq!(model.params["A <=> B"], RateConst::Single(0.1));

        let model = parser.parse_str("A <=> B : 0.1, 0.2").unwrap();
        assert_eq!(model.params["A <=> B"], RateConst::Pair(0.1, 0.2));

        let err = parser.parse_str("A <=> B : 0.1, 0.2, 0.3").unwrap_err();
        assert!(matches!(err, ParseError::TooManyValuesReversible { line: 1 }));
    }

    #[test]
    fn test_one_way_and_drain_arity() {
        let parser = ReactionNetParser::new();

        let err = parser.parse_str("A -> B : 0.1, 0.2").unwrap_err();
        assert!(matches!(err, ParseError::TooManyValuesOneWay { line: 1 }));

        let err = parser.parse_str("B <- A : 0.1, 0.2").unwrap_err();
        assert!(matches!(err, ParseError::TooManyValuesOneWay { line: 1 }));

        let err = parser.parse_str("<- X : 0.1, 0.2").unwrap_err();
        assert!(matches!(err, ParseError::TooManyValuesDrain { line: 1 }));
    }

    #[test]
    fn test_drain_merge_is_order_independent() {
        let parser = ReactionNetParser::new();
        let first = parser.parse_str("<- X : 0.5\n-> X : 1.0").unwrap();
        let second = parser.parse_str("-> X : 1.0\n<- X : 0.5").unwrap();
        for model in [first, second] {
            let drain = &model.drain["X"];
            assert_relative_eq!(drain.outflow.unwrap().factor, 0.5);
            assert_relative_eq!(drain.inflow.unwrap().constant, 1.0);
        }
    }

    #[test]
    fn test_trailing_multiplier_fails() {
        let parser = ReactionNetParser::new();
        let err = parser.parse_str("A 2 : 1.0").unwrap_err();
        assert!(matches!(err, ParseError::InvalidMultiplier { line: 1 }));
    }

    #[test]
    fn test_comments_and_blanks_only() {
        let parser = ReactionNetParser::new();
        let model = parser
            .parse_str("# reaction network\n\n   \n# nothing else\n")
            .unwrap();
        assert!(model.initial.is_empty());
        assert!(model.params.is_empty());
        assert!(model.drain.is_empty());
    }

    #[test]
    fn test_line_numbers_count_filtered_lines() {
        let parser = ReactionNetParser::new();
        // the offending statement sits on line 4 of the original input
        let err = parser
            .parse_str("# header\n\nX : 1.0\nno separator here\n")
            .unwrap_err();
        assert!(matches!(err, ParseError::MalformedStatement { line: 4 }));
    }

    #[test]
    fn test_empty_reaction_side() {
        let parser = ReactionNetParser::new();
        let err = parser.parse_str("<=> : 0.1").unwrap_err();
        assert!(matches!(err, ParseError::EmptyReactionSide { line: 1 }));
    }

    #[test]
    fn test_invalid_symbol_reports_token() {
        let parser = ReactionNetParser::new();
        let err = parser.parse_str("A + B2! -> C : 0.1").unwrap_err();
        match err {
            ParseError::InvalidSymbol { line, token } => {
                assert_eq!(line, 1);
                assert_eq!(token, "B2!");
            }
            other => panic!("unexpected error {:?}", other),
        }
    }

    #[test]
    fn test_initial_condition_uses_first_symbol() {
        let parser = ReactionNetParser::new();
        let model = parser.parse_str("X Y : 2.0").unwrap();
        assert_eq!(model.initial.len(), 1);
        assert_relative_eq!(model.initial["X"], 2.0);
    }

    #[test]
    fn test_duplicate_initial_condition_policies() {
        // default policy overwrites (and warns through the log facade)
        let parser = ReactionNetParser::new();
        let model = parser.parse_str("X : 1.0\nX : 2.0").unwrap();
        assert_relative_eq!(model.initial["X"], 2.0);

        let mut strict = ReactionNetParser::new();
        strict.set_duplicate_policy(DuplicatePolicy::Error);
        let err = strict.parse_str("X : 1.0\nX : 2.0").unwrap_err();
        match err {
            ParseError::DuplicateInitialCondition { line, symbol } => {
                assert_eq!(line, 2);
                assert_eq!(symbol, "X");
            }
            other => panic!("unexpected error {:?}", other),
        }

        let mut silent = ReactionNetParser::new();
        silent.set_duplicate_policy(DuplicatePolicy::Overwrite);
        let model = silent.parse_str("X : 1.0\nX : 3.0").unwrap();
        assert_relative_eq!(model.initial["X"], 3.0);
    }

    #[test]
    fn test_custom_separator() {
        let parser = ReactionNetParser::with_separator('=');
        let model = parser.parse_str("X = 1.0").unwrap();
        assert_relative_eq!(model.initial["X"], 1.0);
    }

    #[test]
    fn test_parse_file_and_json_output() {
        let mut input = NamedTempFile::new().unwrap();
        write!(
            input,
            "X : 1.0\nX -> Y : 0.2\nY <=> Z : 0.1, 0.05\n<- X : 0.3\n-> X : 0.9\n"
        )
        .unwrap();

        let parser = ReactionNetParser::new();
        let model = parser.parse_file(input.path()).unwrap();
        assert_relative_eq!(model.initial["X"], 1.0);

        let output = NamedTempFile::new().unwrap();
        save_model_json(&model, output.path()).unwrap();
        let written = std::fs::read_to_string(output.path()).unwrap();
        let parsed: serde_json::Value = serde_json::from_str(&written).unwrap();
        assert_eq!(parsed["initial"]["X"], serde_json::json!(1.0));
        assert_eq!(parsed["params"]["X -> Y"], serde_json::json!(0.2));
        // a two-valued reversible reaction serializes as the pair
        assert_eq!(
            parsed["params"]["Y <=> Z"],
            serde_json::json!([0.1, 0.05])
        );
        assert_eq!(parsed["drain"]["X"]["out"]["factor"], serde_json::json!(0.3));
        assert_eq!(
            parsed["drain"]["X"]["in"]["constant"],
            serde_json::json!(0.9)
        );
    }

    #[test]
    fn test_one_sided_drain_omits_absent_field() {
        let parser = ReactionNetParser::new();
        let model = parser.parse_str("<- X : 0.3").unwrap();
        let serialized = serde_json::to_value(&model).unwrap();
        assert_eq!(
            serialized["drain"]["X"]["out"]["factor"],
            serde_json::json!(0.3)
        );
        assert!(serialized["drain"]["X"].get("in").is_none());
    }

    #[test]
    fn test_missing_file() {
        let parser = ReactionNetParser::new();
        let err = parser
            .parse_file(std::path::Path::new("no_such_network.txt"))
            .unwrap_err();
        assert!(matches!(err, ParseError::Io(_)));
    }

    #[test]
    fn test_classification_is_total() {
        // anything without operator punctuation is an initial condition
        for name in ["X", "X Y", "2 X", "water"] {
            assert_eq!(
                IdentifierKind::classify(name),
                IdentifierKind::InitialCondition
            );
        }
    }
}
