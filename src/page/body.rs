//! Crawler-readable markup placed inside `#root`.
//!
//! The SPA replaces it on mount; it only needs to carry the text.

use crate::content::ReadTime;
use crate::store::{Collection, ContentRecord};
use crate::utils::html::{escape, escape_attr};

/// Detail page: title, byline, tags and the normalized body.
pub fn article(record: &ContentRecord, body_html: &str, read_time: ReadTime) -> String {
    let mut html = String::with_capacity(body_html.len() + 512);

    html.push_str("<article>\n<header>\n");
    html.push_str(&format!("<h1>{}</h1>\n", escape(&record.title)));

    html.push_str("<p class=\"byline\">");
    if let Some(created) = record.created() {
        html.push_str(&format!(
            "<time datetime=\"{}\">{}</time> · ",
            created.to_rfc3339(),
            created.to_long_date()
        ));
    }
    html.push_str(&format!("<span>{read_time}</span></p>\n"));

    if !record.tags.is_empty() {
        html.push_str("<ul class=\"tags\">");
        for tag in &record.tags {
            html.push_str(&format!("<li>{}</li>", escape(tag)));
        }
        html.push_str("</ul>\n");
    }
    html.push_str("</header>\n");

    if let Some(image) = &record.image {
        html.push_str(&format!(
            "<img src=\"{}\" alt=\"{}\">\n",
            escape_attr(image),
            escape_attr(&record.title)
        ));
    }

    html.push_str("<div class=\"content\">");
    html.push_str(body_html);
    html.push_str("</div>\n</article>");
    html
}

/// List page: one link per record with its summary.
pub fn listing(collection: Collection, records: &[ContentRecord], excerpt_length: usize) -> String {
    let mut html = format!(
        "<section>\n<h1>{}</h1>\n<ul>\n",
        escape(collection.heading())
    );

    for record in records {
        let href = collection.detail_route(&record.id).to_encoded();
        html.push_str(&format!(
            "<li><a href=\"{}\">{}</a>",
            escape_attr(&href),
            escape(&record.title)
        ));
        let summary = record.summary(excerpt_length);
        if !summary.is_empty() {
            html.push_str(&format!("<p>{}</p>", escape(&summary)));
        }
        html.push_str("</li>\n");
    }

    html.push_str("</ul>\n</section>");
    html
}
