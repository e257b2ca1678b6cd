//! Reading-time estimate.

use std::fmt;

use serde::{Serialize, Serializer};

use crate::utils::html::strip_tags;

/// Whole minutes of reading, never less than one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct ReadTime(u32);

impl ReadTime {
    pub const fn minutes(self) -> u32 {
        self.0
    }
}

impl fmt::Display for ReadTime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} min read", self.0)
    }
}

impl Serialize for ReadTime {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

/// Count whitespace-separated words of the text inside `html`.
pub fn word_count(html: &str) -> usize {
    strip_tags(html).split_whitespace().count()
}

/// `ceil(words / wpm)`, floored at one minute.
pub fn estimate_read_time(html: &str, wpm: u32) -> ReadTime {
    let words = word_count(html) as u64;
    let minutes = words.div_ceil(u64::from(wpm.max(1))).max(1);
    ReadTime(u32::try_from(minutes).unwrap_or(u32::MAX))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn words(n: usize) -> String {
        vec!["word"; n].join(" ")
    }

    #[test]
    fn test_blog_speed() {
        let html = format!("<p>{}</p>", words(450));
        assert_eq!(estimate_read_time(&html, 225).to_string(), "2 min read");

        let html = format!("<p>{}</p>", words(451));
        assert_eq!(estimate_read_time(&html, 225).to_string(), "3 min read");
    }

    #[test]
    fn test_minimum_one_minute() {
        assert_eq!(estimate_read_time("", 225).minutes(), 1);
        assert_eq!(estimate_read_time("<img src=x>", 200).minutes(), 1);
    }

    #[test]
    fn test_tags_separate_words() {
        assert_eq!(word_count("<p>one</p><p>two</p>"), 2);
        assert_eq!(word_count("<p>one <b>two</b>\nthree</p>"), 3);
    }

    #[test]
    fn test_zero_wpm_does_not_panic() {
        assert_eq!(estimate_read_time("a b c", 0).minutes(), 3);
    }

    #[test]
    fn test_serializes_as_text() {
        let json = serde_json::to_string(&ReadTime(4)).unwrap();
        assert_eq!(json, "\"4 min read\"");
    }
}
