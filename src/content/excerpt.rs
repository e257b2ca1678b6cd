//! Plain-text excerpts for descriptions.

use crate::utils::html::{collapse_whitespace, strip_tags, unescape};

/// Plain text of `html`, cut on a word boundary to at most `max_chars`
/// characters plus a trailing `…`.
pub fn excerpt(html: &str, max_chars: usize) -> String {
    let text = collapse_whitespace(&unescape(&strip_tags(html)));

    if text.chars().count() <= max_chars {
        return text;
    }

    let cut = text
        .char_indices()
        .nth(max_chars)
        .map_or(text.len(), |(idx, _)| idx);
    let head = &text[..cut];

    // Back off to the last full word unless the cut already sits on one.
    let head = if text[cut..].starts_with(' ') {
        head
    } else {
        match head.rfind(' ') {
            Some(space) if space > 0 => &head[..space],
            _ => head,
        }
    };

    let head = head.trim_end_matches(|c: char| c.is_ascii_punctuation() || c.is_whitespace());
    format!("{head}…")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_short_text_unchanged() {
        assert_eq!(excerpt("<p>Hello  <b>world</b></p>", 160), "Hello world");
    }

    #[test]
    fn test_entities_decoded() {
        assert_eq!(excerpt("<p>Tom &amp; Jerry</p>", 160), "Tom & Jerry");
    }

    #[test]
    fn test_cut_on_word_boundary() {
        let out = excerpt("<p>The quick brown fox jumps over the lazy dog</p>", 18);
        assert_eq!(out, "The quick brown…");
    }

    #[test]
    fn test_trailing_punctuation_trimmed() {
        let out = excerpt("First sentence, second part continues here", 20);
        assert_eq!(out, "First sentence…");
    }

    #[test]
    fn test_single_long_word() {
        let out = excerpt("Supercalifragilistic", 5);
        assert_eq!(out, "Super…");
    }

    #[test]
    fn test_multibyte() {
        let out = excerpt("héllo wörld ümlaut", 11);
        assert_eq!(out, "héllo wörld…");
    }
}
