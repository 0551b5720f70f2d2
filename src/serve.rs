//! Development server.
//!
//! A lightweight HTTP server built on `tiny_http`. Unlike the static
//! build, pages are rendered per request from the loaded profile, so the
//! query-string forms of interaction state work here:
//!
//! - `/blog/?more=2` load-more after two presses
//! - `/projects/?filter=Go&q=cli` filter and search together
//!
//! Anything that is not a page route (feed, sitemap, images) is served
//! from the build output directory.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────┐        ┌──────────────────────┐
//! │   Main Thread   │        │  Arc<ProfileStore>   │
//! │  (HTTP Server)  │───────►│  (read-only)         │
//! └────────┬────────┘        └──────────────────────┘
//!          │
//!          ▼
//!   Route::parse ──► render ──► Response
//!          │
//!          └── NotFound ──► config.build.output file or 404 page
//! ```

use crate::{
    build::NOT_FOUND_FILE,
    config::{SiteConfig, cfg},
    log,
    profile::ProfileStore,
    render::{self, Page},
    route::Route,
};
use anyhow::{Context, Result, anyhow};
use std::{
    fs,
    net::{IpAddr, SocketAddr},
    path::Path,
    sync::Arc,
};
use tiny_http::{Header, Request, Response, Server};

/// Try binding to port, retry with incremented port if in use
const MAX_PORT_RETRIES: u16 = 10;

// ============================================================================
// Server Entry Point
// ============================================================================

/// Start the development server.
///
/// Binds to the configured interface and port (with auto-retry on port
/// conflict) and handles requests until Ctrl+C is received.
pub fn serve_site(store: Arc<ProfileStore>) -> Result<()> {
    let c = cfg();
    let interface: IpAddr = c
        .serve
        .interface
        .parse()
        .with_context(|| format!("Invalid interface `{}`", c.serve.interface))?;

    let (server, addr) = try_bind_port(interface, c.serve.port, MAX_PORT_RETRIES)?;
    let server = Arc::new(server);

    // Set up Ctrl+C handler for graceful shutdown
    let server_for_signal = Arc::clone(&server);
    ctrlc::set_handler(move || {
        log!("serve"; "shutting down...");
        server_for_signal.unblock();
    })
    .context("Failed to set Ctrl+C handler")?;

    log!("serve"; "http://{}", addr);

    for request in server.incoming_requests() {
        if let Err(e) = handle_request(request, &store, &cfg()) {
            log!("serve"; "request error: {e}");
        }
    }

    Ok(())
}

/// Try to bind to a port, retrying with incremented port numbers if in use.
fn try_bind_port(interface: IpAddr, base_port: u16, max_retries: u16) -> Result<(Server, SocketAddr)> {
    let mut last_error = None;

    for offset in 0..max_retries {
        let port = base_port.saturating_add(offset);
        let addr = SocketAddr::new(interface, port);

        match Server::http(addr) {
            Ok(server) => {
                if offset > 0 {
                    log!("serve"; "port {} in use, using {} instead", base_port, port);
                }
                return Ok((server, addr));
            }
            Err(e) => last_error = Some(e),
        }
    }

    Err(anyhow!(
        "Failed to bind after {} attempts (ports {}-{}): {}",
        max_retries,
        base_port,
        base_port.saturating_add(max_retries.saturating_sub(1)),
        last_error.map(|e| e.to_string()).unwrap_or_default()
    ))
}

// ============================================================================
// Request Handling
// ============================================================================

/// Handle a single HTTP request.
///
/// Resolution order:
/// 1. Page route → render from the store
/// 2. File in the output directory → serve file
/// 3. Nothing found → 404 page
fn handle_request(request: Request, store: &ProfileStore, config: &SiteConfig) -> Result<()> {
    let route = Route::parse(request.url());

    if route == Route::NotFound
        && let Some(path) = output_file(&config.build.output, request.url())
    {
        return serve_file(request, &path);
    }

    let page = render::render(&route, store, config);
    if page.is_not_found() {
        log!("serve"; "404 {}", request.url());
    }
    serve_page(request, page)
}

/// Resolve a request to an existing file under the output directory.
///
/// Paths that climb out of the output directory are rejected, and so is
/// the built 404 page, which is rendered with its 404 status instead.
fn output_file(output: &Path, url: &str) -> Option<std::path::PathBuf> {
    let path = url.split('?').next().unwrap_or(url);
    let path = urlencoding::decode(path).ok()?;
    let relative = path.trim_matches('/');
    if relative.is_empty()
        || relative == NOT_FOUND_FILE
        || relative.split('/').any(|seg| seg == "..")
    {
        return None;
    }
    let local = output.join(relative);
    local.is_file().then_some(local)
}

// ============================================================================
// Response Helpers
// ============================================================================

fn content_type_header(value: &str) -> Result<Header> {
    Header::from_bytes("Content-Type", value).map_err(|_| anyhow!("invalid header value `{value}`"))
}

/// Serve a rendered page with its status.
fn serve_page(request: Request, page: Page) -> Result<()> {
    let response = Response::from_string(page.html)
        .with_status_code(page.status)
        .with_header(content_type_header("text/html; charset=utf-8")?);
    request.respond(response)?;
    Ok(())
}

/// Serve a file with appropriate content type.
fn serve_file(request: Request, path: &Path) -> Result<()> {
    let content = fs::read(path).with_context(|| format!("Failed to read {}", path.display()))?;
    let response =
        Response::from_data(content).with_header(content_type_header(guess_content_type(path))?);
    request.respond(response)?;
    Ok(())
}

// ============================================================================
// Content Type Detection
// ============================================================================

/// Guess MIME content type from file extension.
///
/// Returns `application/octet-stream` for unknown extensions.
fn guess_content_type(path: &Path) -> &'static str {
    match path.extension().and_then(|e| e.to_str()) {
        // Web content
        Some("html" | "htm") => "text/html; charset=utf-8",
        Some("css") => "text/css; charset=utf-8",
        Some("js" | "mjs") => "application/javascript; charset=utf-8",
        Some("json") => "application/json; charset=utf-8",
        Some("xml") => "application/xml; charset=utf-8",

        // Images
        Some("svg") => "image/svg+xml",
        Some("png") => "image/png",
        Some("jpg" | "jpeg") => "image/jpeg",
        Some("gif") => "image/gif",
        Some("webp") => "image/webp",
        Some("avif") => "image/avif",
        Some("ico") => "image/x-icon",

        // Documents
        Some("pdf") => "application/pdf",
        Some("txt") => "text/plain; charset=utf-8",

        // Default binary
        _ => "application/octet-stream",
    }
}
