//! HTTP response handlers.

use crate::seo::PreviewError;
use crate::utils::mime::types::{HTML, PLAIN, XML};
use anyhow::{Context, Result, anyhow};
use std::{fs, path::Path};
use tiny_http::{Header, Method, Request, Response, StatusCode};

/// Preview cards are addressed by their query, so they never change.
const IMMUTABLE: &str = "public, max-age=31536000, immutable";

/// Respond with a static file from the bundle.
pub fn respond_file(request: Request, path: &Path) -> Result<()> {
    let content_type = crate::utils::mime::from_path(path);

    if is_head_request(&request) {
        return send_head(request, 200, content_type, &[]);
    }

    // Check for Range header (video/audio seeking)
    if let Some(range) = get_range_header(&request) {
        return respond_range(request, path, content_type, &range);
    }

    let body = fs::read(path).with_context(|| format!("Failed to read {}", path.display()))?;
    send_body(request, 200, content_type, &[], body)
}

/// Handle Range request for media files (video/audio seeking).
fn respond_range(
    request: Request,
    path: &Path,
    content_type: &'static str,
    range: &str,
) -> Result<()> {
    use std::io::{Read, Seek, SeekFrom};

    let file_size = fs::metadata(path)?.len();
    if file_size == 0 {
        return send_body(request, 200, content_type, &[], Vec::new());
    }

    let range = range.strip_prefix("bytes=").unwrap_or(range);
    let (start, end) = parse_range(range, file_size);
    if start > end {
        let unsatisfiable = format!("bytes */{file_size}");
        return send_body(
            request,
            416,
            PLAIN,
            &[("Content-Range", &unsatisfiable)],
            b"416 Range Not Satisfiable".to_vec(),
        );
    }

    let length = end - start + 1;

    let mut file = fs::File::open(path)?;
    file.seek(SeekFrom::Start(start))?;
    let reader = file.take(length);

    let content_range = format!("bytes {start}-{end}/{file_size}");
    let response = Response::new(
        StatusCode(206),
        vec![
            header("Content-Type", content_type)?,
            header("Content-Range", &content_range)?,
            header("Accept-Ranges", "bytes")?,
        ],
        reader,
        usize::try_from(length).ok(),
        None,
    );

    request.respond(response)?;
    Ok(())
}

/// Parse Range header value "start-end" into inclusive byte offsets.
fn parse_range(range: &str, file_size: u64) -> (u64, u64) {
    let last = file_size - 1;

    match range.trim().split_once('-') {
        // "-500" - last 500 bytes
        Some(("", suffix)) => {
            let suffix: u64 = suffix.trim().parse().unwrap_or(0);
            (file_size.saturating_sub(suffix), last)
        }
        // "0-" and "0-499"
        Some((start, end)) => {
            let start: u64 = start.trim().parse().unwrap_or(0);
            let end: u64 = end.trim().parse().unwrap_or(last);
            (start, end.min(last))
        }
        None => (0, last),
    }
}

/// Extract Range header from request.
fn get_range_header(request: &Request) -> Option<String> {
    header_value(request, "range")
}

/// Value of a request header, matched case-insensitively.
pub fn header_value(request: &Request, name: &str) -> Option<String> {
    request
        .headers()
        .iter()
        .find(|h| h.field.as_str().as_str().eq_ignore_ascii_case(name))
        .map(|h| h.value.to_string())
}

/// Respond with a rendered HTML document.
pub fn respond_html(request: Request, body: String) -> Result<()> {
    if is_head_request(&request) {
        return send_head(request, 200, HTML, &[]);
    }
    send_body(request, 200, HTML, &[], body.into_bytes())
}

/// Respond with a preview card, or the reason it could not be rendered.
pub fn respond_card(request: Request, card: Result<String, PreviewError>) -> Result<()> {
    let (status, content_type, body) = card_parts(card);
    let extra: &[(&str, &str)] = if status == 200 {
        &[("Cache-Control", IMMUTABLE)]
    } else {
        &[]
    };

    if is_head_request(&request) {
        return send_head(request, status, content_type, extra);
    }
    send_body(request, status, content_type, extra, body.into_bytes())
}

/// Status, content type and body for a card result.
fn card_parts(card: Result<String, PreviewError>) -> (u16, &'static str, String) {
    match card {
        Ok(html) => (200, HTML, html),
        Err(e) => (500, PLAIN, card_error_body(&e)),
    }
}

fn card_error_body(error: &PreviewError) -> String {
    format!("Failed to generate OG image: {error}")
}

/// Respond with the generated sitemap.
pub fn respond_xml(request: Request, xml: String) -> Result<()> {
    if is_head_request(&request) {
        return send_head(request, 200, XML, &[]);
    }
    send_body(request, 200, XML, &[], xml.into_bytes())
}

/// Respond with 302 Found.
pub fn respond_redirect(request: Request, location: &str) -> Result<()> {
    let response = Response::empty(StatusCode(302)).with_header(header("Location", location)?);
    request.respond(response)?;
    Ok(())
}

/// Respond with 405 Method Not Allowed.
pub fn respond_method_not_allowed(request: Request) -> Result<()> {
    send_body(
        request,
        405,
        PLAIN,
        &[("Allow", "GET, HEAD")],
        b"405 Method Not Allowed".to_vec(),
    )
}

/// Respond with 503 Service Unavailable (server shutting down).
pub fn respond_unavailable(request: Request) -> Result<()> {
    send_body(request, 503, PLAIN, &[], b"503 Service Unavailable".to_vec())
}

pub fn is_head_request(request: &Request) -> bool {
    request.method() == &Method::Head
}

fn send_head(
    request: Request,
    status: u16,
    content_type: &str,
    extra: &[(&str, &str)],
) -> Result<()> {
    let mut response =
        Response::empty(StatusCode(status)).with_header(header("Content-Type", content_type)?);
    for (key, value) in extra {
        response.add_header(header(key, value)?);
    }
    request.respond(response)?;
    Ok(())
}

fn send_body(
    request: Request,
    status: u16,
    content_type: &str,
    extra: &[(&str, &str)],
    body: Vec<u8>,
) -> Result<()> {
    let mut response = Response::from_data(body)
        .with_status_code(StatusCode(status))
        .with_header(header("Content-Type", content_type)?);
    for (key, value) in extra {
        response.add_header(header(key, value)?);
    }
    request.respond(response)?;
    Ok(())
}

fn header(key: &str, value: &str) -> Result<Header> {
    Header::from_bytes(key.as_bytes(), value.as_bytes())
        .map_err(|()| anyhow!("invalid header {key}: {value:?}"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_range() {
        assert_eq!(parse_range("0-499", 1000), (0, 499));
        assert_eq!(parse_range("500-", 1000), (500, 999));
        assert_eq!(parse_range("-200", 1000), (800, 999));
        assert_eq!(parse_range("900-5000", 1000), (900, 999));
        assert_eq!(parse_range("garbage", 1000), (0, 999));
    }

    #[test]
    fn test_parse_range_past_end() {
        let (start, end) = parse_range("2000-", 1000);
        assert!(start > end);
    }

    #[test]
    fn test_card_parts() {
        let (status, content_type, body) = card_parts(Ok("<html></html>".into()));
        assert_eq!((status, content_type), (200, HTML));
        assert_eq!(body, "<html></html>");

        let error = PreviewError::TitleTooLong { len: 301, max: 300 };
        let (status, content_type, body) = card_parts(Err(error));
        assert_eq!((status, content_type), (500, PLAIN));
        assert!(body.starts_with("Failed to generate OG image:"));
        assert!(body.ends_with("at most 300 are allowed"));
    }

    #[test]
    fn test_card_error_body() {
        let error = PreviewError::InvalidImage("ftp://x".into());
        assert_eq!(
            card_error_body(&error),
            "Failed to generate OG image: image 'ftp://x' is not an absolute http(s) URL"
        );
    }

    #[test]
    fn test_header() {
        assert!(header("Location", "/blogs").is_ok());
        assert!(header("Location", "/ünïcode").is_err());
    }
}
