//! Bold, italic and code spans through the full parser.

use crate::common::{dump, offset_of, parse};
use insta::assert_snapshot;
use markstyle::elements::Bold;
use markstyle::{run_element, Font, Parser, StyledText};

fn font_at(styled: &StyledText, position: usize) -> Font {
    styled
        .attributes_at(position)
        .and_then(|attributes| attributes.font.clone())
        .expect("every character carries a font")
}

#[test]
fn test_bold_span() {
    let styled = parse("Hello **world**");
    assert_snapshot!(dump(&styled), @r#"
    "Hello "
    "world" bold
    "#);
}

#[test]
fn test_bold_and_italic_in_one_line() {
    let styled = parse("**bold** and *italic*");
    assert_snapshot!(dump(&styled), @r#"
    "bold" bold
    " and "
    "italic" italic
    "#);
}

#[test]
fn test_underscore_bold() {
    let styled = parse("__strong__ words");
    assert_eq!(styled.text(), "strong words");
    assert!(font_at(&styled, 0).is_bold());
    assert!(!font_at(&styled, 7).is_bold());
}

#[test]
fn test_escaped_tokens_stay_literal() {
    for input in ["\\*text*", "\\**text**", "\\__text__", "\\`text`"] {
        let styled = parse(input);
        assert_eq!(styled.text(), input, "escaped input {input:?} must not change");
        assert_eq!(styled.runs().len(), 1, "escaped input {input:?} must not be styled");
    }
}

#[test]
fn test_escaped_trailing_tokens_stay_literal() {
    for input in ["*text\\*", "**text\\**", "__text\\__", "`text\\`"] {
        let styled = parse(input);
        assert_eq!(styled.text(), input, "escaped input {input:?} must not change");
        assert_eq!(styled.runs().len(), 1, "escaped input {input:?} must not be styled");
    }
}

#[test]
fn test_mixed_bold_tokens() {
    let styled = parse("**a__b**");
    assert_snapshot!(dump(&styled), @r#""a__b" bold"#);

    let styled = parse("**a__ and __b**");
    assert_snapshot!(dump(&styled), @r#""a and b" bold"#);
}

#[test]
fn test_typed_private_use_characters_are_kept() {
    let input = "\u{E000}2a\u{E001} and `\u{E000}`";
    let styled = parse(input);
    assert_eq!(styled.text(), "\u{E000}2a\u{E001} and \u{E000}");
    let code = offset_of(&styled, "and ") + "and ".len();
    assert_eq!(font_at(&styled, code), Font::monospace(12.0));
    assert_ne!(font_at(&styled, 0), Font::monospace(12.0));
}

#[test]
fn test_unescaped_tokens_are_stripped() {
    let italic = parse("*text*");
    assert_eq!(italic.text(), "text");
    assert!(font_at(&italic, 0).italic);

    let bold = parse("**text**");
    assert_eq!(bold.text(), "text");
    assert!(font_at(&bold, 0).is_bold());

    let underscored = parse("__text__");
    assert_eq!(underscored.text(), "text");
    assert!(font_at(&underscored, 0).is_bold());

    let code = parse("`text`");
    assert_eq!(code.text(), "text");
    assert_eq!(font_at(&code, 0), Font::monospace(12.0));
}

#[test]
fn test_code_hides_markup() {
    let styled = parse("`**x**` and **y**");
    assert_snapshot!(dump(&styled), @r#"
    "**x**" monospace
    " and "
    "y" bold
    "#);
}

#[test]
fn test_list_marker_is_never_italic() {
    let styled = parse("* item");
    assert_eq!(styled.text(), "  • item");
    let item = offset_of(&styled, "item");
    assert!(!font_at(&styled, item).italic);

    let mut parser = Parser::new().unwrap();
    parser.set_automatic_list_conversion(false);
    let styled = parser.parse("* item*");
    assert_eq!(styled.text(), "* item*");
}

#[test]
fn test_inline_italic_after_text() {
    let styled = parse("hello *world*");
    assert_eq!(styled.text(), "hello world");
    assert!(font_at(&styled, offset_of(&styled, "world")).italic);
    assert!(!font_at(&styled, 0).italic);
}

#[test]
fn test_bold_is_idempotent() {
    let styled = parse("**a** b");
    let mut again = styled.clone();
    let summary = run_element(&Bold::new().unwrap(), &mut again);

    assert_eq!(summary.matches, 0);
    assert_eq!(again, styled);
}

#[test]
fn test_multibyte_content() {
    let styled = parse("café **crème** brûlée");
    assert_eq!(styled.text(), "café crème brûlée");
    assert!(font_at(&styled, offset_of(&styled, "crème")).is_bold());
    assert!(!font_at(&styled, offset_of(&styled, "brûlée")).is_bold());
}
