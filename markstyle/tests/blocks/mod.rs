//! Headers, lists and quotes through the full parser.

use crate::common::{dump, parse};
use insta::assert_snapshot;

#[test]
fn test_header_then_body() {
    let styled = parse("# Title\nbody");
    assert_snapshot!(dump(&styled), @r#"
    "Title" size=16 bold
    "\nbody"
    "#);
}

#[test]
fn test_header_levels() {
    let styled = parse("## Two\n###### Six");
    assert_snapshot!(dump(&styled), @r#"
    "Two" size=14 bold
    "\n"
    "Six" size=6 bold
    "#);
}

#[test]
fn test_header_with_inline_markup() {
    let styled = parse("# A *quiet* title");
    assert_eq!(styled.text(), "A quiet title");
    let font = styled.attributes_at(2).unwrap().font.clone().unwrap();
    assert!(font.italic);
    assert!(!font.is_bold());
}

#[test]
fn test_nested_list() {
    let styled = parse("- one\n  - two");
    assert_snapshot!(dump(&styled), @r#"
    "  • one" indent=12
    "\n"
    "    • two" indent=24
    "#);
}

#[test]
fn test_list_items_with_bold() {
    let styled = parse("+ **first**\n* second");
    assert_eq!(styled.text(), "  • first\n  • second");
    let first = styled.text().find("first").unwrap();
    assert!(styled.attributes_at(first).unwrap().font.as_ref().unwrap().is_bold());
}

#[test]
fn test_quote() {
    let styled = parse("> quoted");
    assert_snapshot!(dump(&styled), @r#""  quoted" indent=12"#);
}

#[test]
fn test_nested_quote() {
    let styled = parse(">> deeper");
    assert_eq!(styled.text(), "    deeper");
    let paragraph = styled.attributes_at(0).unwrap().paragraph.clone().unwrap();
    assert_eq!(paragraph.head_indent, 24.0);
}

#[test]
fn test_markers_inside_a_line_are_text() {
    let styled = parse("1 > 0 and a - b and c # d");
    assert_eq!(styled.text(), "1 > 0 and a - b and c # d");
    assert_eq!(styled.runs().len(), 1);
}

#[test]
fn test_crlf_line_endings_stay_unstyled() {
    let styled = parse("# T\r\n- a\r\n> q");
    assert_snapshot!(dump(&styled), @r#"
    "T" size=16 bold
    "\r\n"
    "  • a" indent=12
    "\r\n"
    "  q" indent=12
    "#);
}
