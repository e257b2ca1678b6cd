//! `folio normalize`: stored content → HTML, plus reading time.

use anyhow::Result;
use serde::Serialize;

use super::args::NormalizeArgs;
use super::common::{read_input, write_output};
use crate::config::SiteConfig;
use crate::content::{ContentDocument, ReadTime, estimate_read_time, excerpt, word_count};
use crate::{debug, log};

/// `--json` output.
#[derive(Debug, Serialize)]
pub struct Normalized {
    pub html: String,
    pub read_time: ReadTime,
    pub words: usize,
    pub excerpt: String,
}

/// Execute normalize command
pub fn run_normalize(args: &NormalizeArgs, config: &SiteConfig) -> Result<()> {
    let raw = read_input(&args.input)?;
    let wpm = args.wpm.unwrap_or(config.content.blog_wpm);
    let normalized = normalize_input(&raw, wpm, config.content.excerpt_length);

    if args.json {
        return write_output("normalize", None, &serde_json::to_string_pretty(&normalized)?);
    }

    log!("normalize"; "{} words, {}", normalized.words, normalized.read_time);
    write_output("normalize", None, &normalized.html)
}

fn normalize_input(raw: &str, wpm: u32, excerpt_length: usize) -> Normalized {
    let document = ContentDocument::decode_str(raw);
    debug!("normalize"; "{}", if document.is_blocks() { "block list" } else { "html" });

    let html = document.into_html();
    Normalized {
        read_time: estimate_read_time(&html, wpm),
        words: word_count(&html),
        excerpt: excerpt(&html, excerpt_length),
        html,
    }
}
