//! Links, automatic links and images through the full parser.

use crate::common::{dump, parse};
use insta::assert_snapshot;
use markstyle::url::Url;
use markstyle::{
    AttachmentHandle, Parser, ParserOptions, RenderedAttachment, Size, StyledText,
    OBJECT_REPLACEMENT_CHARACTER,
};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

fn link_at(styled: &StyledText, position: usize) -> Option<String> {
    styled
        .attributes_at(position)
        .and_then(|attributes| attributes.link.as_ref())
        .map(Url::to_string)
}

#[test]
fn test_link_keeps_label_only() {
    let styled = parse("[label](http://x.test/a)");
    assert_snapshot!(dump(&styled), @r#""label" link=http://x.test/a"#);
}

#[test]
fn test_link_inside_sentence() {
    let styled = parse("Read [the docs](https://x.test/docs) first.");
    assert_snapshot!(dump(&styled), @r#"
    "Read "
    "the docs" link=https://x.test/docs
    " first."
    "#);
}

#[test]
fn test_bold_link_label() {
    let styled = parse("[**big**](http://x.test/)");
    assert_eq!(styled.text(), "big");
    let attributes = styled.attributes_at(0).unwrap();
    assert!(attributes.font.as_ref().unwrap().is_bold());
    assert_eq!(link_at(&styled, 0).as_deref(), Some("http://x.test/"));
}

#[test]
fn test_relative_link_without_base_is_left_alone() {
    let styled = parse("[intro](intro.html)");
    assert_eq!(styled.text(), "[intro](intro.html)");
}

#[test]
fn test_relative_link_with_base() {
    let options = ParserOptions {
        base_url: Some(Url::parse("https://x.test/guide/").unwrap()),
        ..ParserOptions::default()
    };
    let parser = Parser::with_options(options).unwrap();
    let styled = parser.parse("[intro](intro.html)");

    assert_eq!(styled.text(), "intro");
    assert_eq!(
        link_at(&styled, 0).as_deref(),
        Some("https://x.test/guide/intro.html")
    );
}

#[test]
fn test_automatic_link() {
    let styled = parse("visit www.x.test.");
    assert_snapshot!(dump(&styled), @r#"
    "visit "
    "www.x.test" link=http://www.x.test/
    "."
    "#);
}

#[test]
fn test_automatic_link_skips_explicit_links() {
    let styled = parse("[http://x.test](http://y.test)");
    assert_eq!(styled.text(), "http://x.test");
    assert_eq!(link_at(&styled, 0).as_deref(), Some("http://y.test/"));
    assert_eq!(styled.runs().len(), 1);
}

#[test]
fn test_image_without_renderer() {
    let styled = parse("![alt](http://x.test/img.png)");

    assert_eq!(styled.text(), OBJECT_REPLACEMENT_CHARACTER.to_string());
    let attributes = styled.attributes_at(0).unwrap();
    let attachment = attributes.attachment.as_ref().unwrap();
    assert!(attachment.is_placeholder());
    assert_eq!(
        attachment.source.as_ref().map(Url::as_str),
        Some("http://x.test/img.png")
    );
    assert_eq!(link_at(&styled, 0).as_deref(), Some("http://x.test/img.png"));
}

#[test]
fn test_image_with_renderer() {
    let calls = Arc::new(AtomicUsize::new(0));
    let counter = Arc::clone(&calls);
    let mut parser = Parser::new().unwrap();
    parser.set_max_image_size(Some(Size::new(50.0, 50.0)));
    parser.set_attachment_renderer(Some(Arc::new(move |url: &Url| {
        counter.fetch_add(1, Ordering::SeqCst);
        Some(RenderedAttachment::new(
            AttachmentHandle::new(url.path().to_string()),
            Size::new(100.0, 200.0),
        ))
    })));

    let styled = parser.parse("a ![one](http://x.test/1.png) b ![two](http://x.test/2.png)");

    assert_eq!(calls.load(Ordering::SeqCst), 2);
    let placeholder = OBJECT_REPLACEMENT_CHARACTER.to_string();
    assert_eq!(styled.text(), format!("a {placeholder} b {placeholder}"));

    let first = styled.attributes_at(2).unwrap().attachment.clone().unwrap();
    assert_eq!(first.display_size, Some(Size::new(25.0, 50.0)));
    assert_eq!(
        first.handle.unwrap().downcast_ref::<String>().map(String::as_str),
        Some("/1.png")
    );
}

#[test]
fn test_escaped_image_is_not_a_link_either() {
    let styled = parse("\\![alt](http://x.test/img.png)");
    assert_eq!(styled.text(), "\\![alt](http://x.test/img.png)");
}

#[test]
fn test_escaped_closing_bracket_keeps_link_literal() {
    let styled = parse("[a\\](http://x.test)");
    assert_eq!(styled.text(), "[a\\](http://x.test)");
    assert_eq!(link_at(&styled, 1), None);
}

#[test]
fn test_escaped_closing_bracket_keeps_image_literal() {
    let styled = parse("![a\\](http://x.test/i.png)");
    assert_eq!(styled.text(), "![a\\](http://x.test/i.png)");
    assert!(!styled.text().contains(OBJECT_REPLACEMENT_CHARACTER));
    assert!(styled.attributed_ranges().all(|(_, a)| a.attachment.is_none()));
}
