//! Persistence API Module
//!
//! The stateless HTTP layer mapping five operations (create, fetch, replace,
//! delete, health) onto the sticky-set store.
//!
//! ## Overview
//! Requests are independent; each handler validates its input, performs a
//! single store operation, and maps failures to the error taxonomy in
//! [`error`]. The only shared state is the cloned [`StoreHandle`].
//!
//! ## Routing
//! - `/api/` and `/api/:id` carry the JSON operations; `/api/get/health`
//!   reports aggregate statistics.
//! - A request whose path is a single 24-hex segment is rewritten to the
//!   board shell (`index.html`) before asset lookup, so a shared link opens
//!   the front-end instead of 404ing.
//! - Everything else falls through to the static asset directory; unmatched
//!   paths produce the JSON "Endpoint not found" body.
//!
//! ## Submodules
//! - **`error`**: the validation / format / not-found / internal taxonomy.
//! - **`handlers`**: HTTP request handlers for the Axum web server.
//! - **`protocol`**: wire DTOs shared with the board's API client.

pub mod error;
pub mod handlers;
pub mod protocol;


use crate::store::handle::StoreHandle;
use crate::store::types::SetId;

use axum::extract::Request;
use axum::handler::HandlerWithoutStateExt;
use axum::http::{Method, Uri};
use axum::middleware::{self, Next};
use axum::response::Response;
use axum::routing::{get, post};
use axum::Router;
use std::path::PathBuf;
use tower_http::services::ServeDir;

/// Builds the complete application router over the given store handle.
///
/// Static assets are served verbatim from `static_dir`; the directory is read
/// per request, so assets can change without a restart.
pub fn router(handle: StoreHandle, static_dir: PathBuf) -> Router {
    let assets = ServeDir::new(static_dir)
        .call_fallback_on_method_not_allowed(true)
        .not_found_service(handlers::endpoint_not_found.into_service());

    Router::new()
        .route("/api/", post(handlers::create_set))
        .route("/api/get/health", get(handlers::health))
        .route(
            "/api/:id",
            get(handlers::fetch_set)
                .put(handlers::replace_set)
                .delete(handlers::delete_set),
        )
        .fallback_service(assets)
        .layer(middleware::from_fn(shell_rewrite))
        .with_state(handle)
}

/// Rewrites `GET /<24-hex>` to the board shell.
///
/// Only a single path segment that parses as a set id is rewritten; every
/// other path (including `/api/...`, which always has more segments) passes
/// through untouched and is resolved against the static directory.
async fn shell_rewrite(mut req: Request, next: Next) -> Response {
    if req.method() == Method::GET
        && let Some(segment) = req.uri().path().strip_prefix('/')
        && !segment.contains('/')
        && SetId::parse(segment).is_some()
    {
        *req.uri_mut() = Uri::from_static("/index.html");
    }

    next.run(req).await
}
