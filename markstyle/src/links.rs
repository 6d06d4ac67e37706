//! Turning raw link targets into URLs

use percent_encoding::{utf8_percent_encode, AsciiSet, CONTROLS};
use url::Url;

/// Characters that are not allowed to appear unencoded in a link target
const LINK_ENCODE_SET: &AsciiSet = &CONTROLS
    .add(b' ')
    .add(b'"')
    .add(b'<')
    .add(b'>')
    .add(b'`')
    .add(b'{')
    .add(b'}')
    .add(b'|')
    .add(b'\\')
    .add(b'^');

/// Resolves a raw link target.
///
/// Tries the target as written, then percent-encoded, then joined onto `base`. Empty targets
/// and targets that fail every attempt resolve to `None`.
pub fn resolve_link(raw: &str, base: Option<&Url>) -> Option<Url> {
    let raw = raw.trim();
    if raw.is_empty() {
        return None;
    }
    if let Ok(url) = Url::parse(raw) {
        return Some(url);
    }

    let encoded = utf8_percent_encode(raw, LINK_ENCODE_SET).to_string();
    if let Ok(url) = Url::parse(&encoded) {
        return Some(url);
    }
    base.and_then(|base| base.join(&encoded).ok())
}

/// The text between the rightmost `(` of `matched` and its final character.
///
/// Link and image matches end with `)`, so this is the raw target.
pub fn raw_target(matched: &str) -> Option<&str> {
    let open = matched.rfind('(')?;
    let close = matched.len().checked_sub(1)?;
    matched.get(open + 1..close.max(open + 1))
}
