//! Shared helpers: a compact textual dump of styled text for snapshots.

use markstyle::{Attributes, Font, Parser, StyledText};

/// Parses `markdown` with a default parser.
pub fn parse(markdown: &str) -> StyledText {
    Parser::new().expect("default parser").parse(markdown)
}

/// Tags describing how `attributes` differ from the default base style.
pub fn tags(attributes: &Attributes) -> Vec<String> {
    let mut tags = Vec::new();
    if let Some(font) = &attributes.font {
        tags.extend(font_tags(font));
    }
    if let Some(paragraph) = &attributes.paragraph {
        if paragraph.head_indent > 0.0 {
            tags.push(format!("indent={}", paragraph.head_indent));
        }
    }
    if let Some(link) = &attributes.link {
        tags.push(format!("link={link}"));
    }
    if let Some(attachment) = &attributes.attachment {
        tags.push(if attachment.is_placeholder() {
            "placeholder".to_string()
        } else {
            "attachment".to_string()
        });
    }
    tags
}

fn font_tags(font: &Font) -> Vec<String> {
    let mut tags = Vec::new();
    if font.family != markstyle::style::SYSTEM_FONT_FAMILY {
        tags.push(font.family.clone());
    }
    if font.size != 12.0 {
        tags.push(format!("size={}", font.size));
    }
    if font.is_bold() {
        tags.push("bold".to_string());
    }
    if font.italic {
        tags.push("italic".to_string());
    }
    tags
}

/// One line per run: the quoted run text, followed by its tags.
pub fn dump(styled: &StyledText) -> String {
    styled
        .attributed_ranges()
        .map(|(range, attributes)| {
            let text = format!("{:?}", &styled.text()[range]);
            let tags = tags(attributes);
            if tags.is_empty() {
                text
            } else {
                format!("{text} {}", tags.join(" "))
            }
        })
        .collect::<Vec<_>>()
        .join("\n")
}

/// Byte offset of the first occurrence of `needle`.
pub fn offset_of(styled: &StyledText, needle: &str) -> usize {
    styled
        .text()
        .find(needle)
        .unwrap_or_else(|| panic!("{needle:?} not found in {:?}", styled.text()))
}
