//! Property-based invariants of the parser.
//!
//! 1. Text without markup tokens round-trips unchanged, with the base attributes everywhere.
//! 2. Escaped tokens stay literal whatever they wrap, whether the leading or the trailing
//!    token carries the backslash.
//! 3. Any input, markup or not, yields runs that exactly cover the text.
//! 4. Private-use characters typed by the user are never mistaken for hidden code.

use markstyle::{Parser, ParserOptions, Run};
use proptest::prelude::*;

fn token_free() -> impl Strategy<Value = String> {
    "[a-zA-Z0-9 ,]{0,64}"
}

fn private_use_text() -> impl Strategy<Value = String> {
    "[a-f0-9 \u{E000}\u{E001}]{0,32}"
}

fn markup_soup() -> impl Strategy<Value = String> {
    r"[a-z*_`#>\[\]()!\\ \n+-]{0,48}"
}

proptest! {
    #[test]
    fn token_free_text_is_identity(input in token_free()) {
        let parser = Parser::new().unwrap();
        let base = ParserOptions::default().base_attributes();
        let styled = parser.parse(&input);

        prop_assert_eq!(styled.text(), input.as_str());
        if input.is_empty() {
            prop_assert!(styled.runs().is_empty());
        } else {
            prop_assert_eq!(styled.runs().len(), 1);
            prop_assert_eq!(styled.attributes_at(0), Some(&base));
        }
    }

    #[test]
    fn escaped_tokens_are_literal(content in "[a-z ]{1,12}") {
        let parser = Parser::new().unwrap();
        for token in ["*", "**", "__", "`"] {
            let input = format!("\\{token}{content}{token}");
            let styled = parser.parse(&input);
            prop_assert_eq!(styled.text(), input.as_str());
            prop_assert_eq!(styled.runs().len(), 1);
        }
    }

    #[test]
    fn escaped_trailing_tokens_are_literal(content in "[a-z][a-z ]{0,11}") {
        let parser = Parser::new().unwrap();
        for token in ["*", "**", "__", "`"] {
            let input = format!("{token}{content}\\{token}");
            let styled = parser.parse(&input);
            prop_assert_eq!(styled.text(), input.as_str());
            prop_assert_eq!(styled.runs().len(), 1);
        }
    }

    #[test]
    fn private_use_text_is_identity(input in private_use_text()) {
        let parser = Parser::new().unwrap();
        let styled = parser.parse(&input);

        prop_assert_eq!(styled.text(), input.as_str());
        prop_assert!(styled.runs().len() <= 1);
    }

    #[test]
    fn runs_cover_text(input in markup_soup()) {
        let parser = Parser::new().unwrap();
        let styled = parser.parse(&input);

        let total: usize = styled.runs().iter().map(Run::len).sum();
        prop_assert_eq!(total, styled.len());
        prop_assert!(styled.runs().iter().all(|run| !run.is_empty()));
        for pair in styled.runs().windows(2) {
            prop_assert_ne!(pair[0].attributes(), pair[1].attributes());
        }
        prop_assert!(styled
            .attributed_ranges()
            .all(|(_, attributes)| attributes.font.is_some()));
    }
}
