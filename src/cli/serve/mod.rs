//! HTTP server: preview cards, sitemap, bundle files and prerendered pages.
//!
//! ```text
//! request ─► /api/og        ─► preview card (immutable)
//!        ├─► /sitemap.xml   ─► sitemap
//!        ├─► public/<file>  ─► static file
//!        └─► anything else  ─► prerendered document (or 302 to the list)
//! ```

mod lifecycle;
mod path;
mod response;

use crate::{
    config::SiteConfig,
    core::RoutePath,
    debug,
    generator::Sitemap,
    log,
    page::{Prepared, Prerenderer},
    seo::PreviewImageRenderer,
    store::{FileSource, RecordSource},
};
use anyhow::{Context, Result};
use std::net::SocketAddr;
use std::sync::Arc;
use tiny_http::{Method, Request, Server};

/// Everything a request handler needs. Cloned into each worker task.
#[derive(Clone)]
struct ServeContext {
    config: Arc<SiteConfig>,
    source: Arc<dyn RecordSource>,
}

/// Bound server ready to accept requests
pub struct BoundServer {
    server: Arc<Server>,
    addr: SocketAddr,
    context: ServeContext,
}

/// Bind the HTTP server without starting the request loop
pub fn bind_server(config: Arc<SiteConfig>) -> Result<BoundServer> {
    let (server, addr) = lifecycle::bind_with_retry(config.serve.interface, config.serve.port)?;
    let server = Arc::new(server);
    lifecycle::register_server_for_shutdown(Arc::clone(&server));

    log!("serve"; "http://{}", addr);
    debug!("serve"; "records from {}", config.content.dir.display());

    let source: Arc<dyn RecordSource> = Arc::new(FileSource::new(&config.content.dir));
    Ok(BoundServer {
        server,
        addr,
        context: ServeContext { config, source },
    })
}

impl BoundServer {
    /// Get the bound address.
    pub fn addr(&self) -> SocketAddr {
        self.addr
    }

    /// Start the request loop (blocking until Ctrl+C).
    pub fn run(self) -> Result<()> {
        run_request_loop(&self.server, &self.context)
    }
}

/// Bind and serve until shutdown.
pub fn serve_site(config: Arc<SiteConfig>) -> Result<()> {
    let bound = bind_server(config)?;
    debug!("serve"; "listening on {}", bound.addr());
    bound.run()
}

fn run_request_loop(server: &Server, context: &ServeContext) -> Result<()> {
    let pool = rayon::ThreadPoolBuilder::new()
        .num_threads(context.config.serve.workers)
        .thread_name(|i| format!("folio-http-{i}"))
        .build()
        .context("failed to create request thread pool")?;

    for request in server.incoming_requests() {
        let context = context.clone();
        pool.spawn(move || {
            if let Err(e) = handle_request(request, &context) {
                log!("serve"; "request error: {e}");
            }
        });
    }
    Ok(())
}

/// Handle a single HTTP request
fn handle_request(request: Request, context: &ServeContext) -> Result<()> {
    // Early exit if shutdown requested
    if crate::core::is_shutdown() {
        return response::respond_unavailable(request);
    }

    if !matches!(request.method(), Method::Get | Method::Head) {
        return response::respond_method_not_allowed(request);
    }

    let config = context.config.as_ref();
    let url = request.url().to_string();
    debug!("request"; "{} {}", request.method(), url);

    let raw_path = url.split(['?', '#']).next().unwrap_or(&url);

    if raw_path == config.preview.endpoint {
        let card = PreviewImageRenderer::new(config).render_url(&url);
        if let Err(e) = &card {
            log!("og"; "{url}: {e}");
        }
        return response::respond_card(request, card);
    }

    if raw_path == "/sitemap.xml" {
        let sitemap = Sitemap::build(config, context.source.as_ref())?;
        return response::respond_xml(request, sitemap.into_xml());
    }

    if let Some(file) = path::resolve_path(&url, &config.serve.public) {
        return response::respond_file(request, &file);
    }

    let prerenderer = Prerenderer::new(config, context.source.as_ref());
    let accept = response::header_value(&request, "accept");
    if !accepts_html(accept.as_deref()) {
        return response::respond_html(request, prerenderer.shell());
    }

    match prerenderer.prepare(&RoutePath::from_browser(&url)) {
        Prepared::Page { meta, body } => {
            response::respond_html(request, prerenderer.document(&meta, &body))
        }
        Prepared::Redirect(location) => response::respond_redirect(request, location),
    }
}

/// Whether an `Accept` header admits an HTML document. A missing header
/// admits anything.
fn accepts_html(accept: Option<&str>) -> bool {
    let Some(accept) = accept else {
        return true;
    };
    accept.split(',').any(|range| {
        let media = range.split(';').next().unwrap_or_default().trim();
        ["text/html", "text/*", "*/*"]
            .iter()
            .any(|html| media.eq_ignore_ascii_case(html))
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_accepts_html() {
        assert!(accepts_html(None));
        assert!(accepts_html(Some("text/html,application/xhtml+xml;q=0.9")));
        assert!(accepts_html(Some("*/*")));
        assert!(accepts_html(Some("application/json, text/*;q=0.5")));
        assert!(!accepts_html(Some("application/json")));
        assert!(!accepts_html(Some("image/avif,image/webp")));
    }

    #[test]
    fn test_accepts_html_ignores_case() {
        assert!(accepts_html(Some("Text/HTML")));
        assert!(accepts_html(Some("application/json, TEXT/*;q=0.1")));
        assert!(!accepts_html(Some("Application/JSON")));
    }
}
