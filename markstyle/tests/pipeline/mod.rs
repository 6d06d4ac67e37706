//! Custom elements and their position in the pipeline.

use markstyle::elements::CommonElement;
use markstyle::{
    Attributes, BaseStyle, Color, Element, MatchResult, Parser, Pattern, PatternOptions,
    StyledText,
};

/// Replaces every match of a pattern with fixed text.
struct Replace {
    name: &'static str,
    pattern: Pattern,
    with: &'static str,
}

impl Replace {
    fn boxed(name: &'static str, source: &str, with: &'static str) -> Box<dyn Element> {
        Box::new(Replace {
            name,
            pattern: Pattern::compile(name, source, PatternOptions::default()).unwrap(),
            with,
        })
    }
}

impl Element for Replace {
    fn name(&self) -> &str {
        self.name
    }

    fn pattern(&self) -> &Pattern {
        &self.pattern
    }

    fn apply(&self, found: &MatchResult, buffer: &mut StyledText) {
        buffer.replace_range(found.whole.clone(), self.with);
    }
}

fn wrap() -> Box<dyn Element> {
    Replace::boxed("wrap", r"x", "[x]")
}

fn strip() -> Box<dyn Element> {
    Replace::boxed("strip", r"[\[\]]", "")
}

#[test]
fn test_custom_elements_run_in_insertion_order() {
    let mut parser = Parser::new().unwrap();
    parser.add_custom_element(wrap());
    parser.add_custom_element(strip());
    assert_eq!(parser.parse("x").text(), "x");

    let mut parser = Parser::new().unwrap();
    parser.add_custom_element(strip());
    parser.add_custom_element(wrap());
    assert_eq!(parser.parse("x").text(), "[x]");
}

#[test]
fn test_insert_custom_element_reorders() {
    let mut parser = Parser::new().unwrap();
    parser.add_custom_element(wrap());
    parser.insert_custom_element(0, strip());
    assert_eq!(parser.pipeline().custom_names(), vec!["strip", "wrap"]);
    assert_eq!(parser.parse("x").text(), "[x]");

    assert!(parser.remove_custom_element("strip").is_some());
    assert_eq!(parser.parse("x").text(), "[x]");
}

#[test]
fn test_custom_elements_run_after_defaults() {
    let mut parser = Parser::new().unwrap();
    parser.add_custom_element(Replace::boxed("stars", r"\*\*", "##"));

    let styled = parser.parse("**a**");
    assert_eq!(styled.text(), "a");
}

#[test]
fn test_custom_elements_run_before_unescaping() {
    let mut parser = Parser::new().unwrap();
    parser.add_custom_element(Replace::boxed("plus", r"\*", "+"));

    let styled = parser.parse("`a*b` c*d");
    assert_eq!(styled.text(), "a*b c+d");
}

#[test]
fn test_common_custom_element_follows_restyle() {
    let mut parser = Parser::new().unwrap();
    let strike = CommonElement::new(
        "strikethrough",
        r"(?P<lead>~~)(?P<content>.+?)(?P<trail>~~)",
        Attributes::new().with_foreground(Color::GRAY),
    )
    .unwrap();
    parser.add_custom_element(Box::new(strike));

    let styled = parser.parse("a ~~b~~");
    assert_eq!(styled.text(), "a b");
    assert_eq!(styled.attributes_at(2).unwrap().foreground, Some(Color::GRAY));

    parser.restyle(BaseStyle {
        color: Color::BLUE,
        ..BaseStyle::default()
    });
    let styled = parser.parse("a ~~b~~");
    assert_eq!(styled.attributes_at(0).unwrap().foreground, Some(Color::BLUE));
    assert_eq!(styled.attributes_at(2).unwrap().foreground, Some(Color::GRAY));
}

#[test]
fn test_parser_is_shareable_across_threads() {
    let parser = std::sync::Arc::new(Parser::new().unwrap());
    let handles: Vec<_> = (0..4)
        .map(|i| {
            let parser = std::sync::Arc::clone(&parser);
            std::thread::spawn(move || parser.parse(&format!("**{i}**")).text().to_string())
        })
        .collect();

    let texts: Vec<String> = handles.into_iter().map(|h| h.join().unwrap()).collect();
    assert_eq!(texts, vec!["0", "1", "2", "3"]);
}
