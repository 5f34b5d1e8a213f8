//! Router assembly.
//!
//! SYSTEM CONTEXT
//! ==============
//! One Axum router serves the Leptos SSR roster page, the compiled client
//! bundle under `/pkg`, and a liveness probe.

#[cfg(test)]
#[path = "routes_test.rs"]
mod routes_test;

use std::path::PathBuf;

use axum::Router;
use axum::http::StatusCode;
use axum::routing::get;
use leptos::prelude::*;
use leptos_axum::{LeptosRoutes, generate_route_list};
use tower_http::compression::CompressionLayer;
use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;

/// Full application: SSR routes + static bundle + service endpoints.
pub fn app(leptos_options: LeptosOptions) -> Router {
    let routes = generate_route_list(client::app::App);
    let (pkg_route, pkg_dir) = pkg_mount(&leptos_options);

    let leptos_router = Router::new()
        .leptos_routes(&leptos_options, routes, {
            let opts = leptos_options.clone();
            move || client::app::shell(opts.clone())
        })
        .with_state(leptos_options);

    service_routes()
        .merge(leptos_router)
        .nest_service(&pkg_route, ServeDir::new(pkg_dir))
        .layer(CompressionLayer::new())
        .layer(TraceLayer::new_for_http())
}

/// Routes that do not depend on the Leptos app.
fn service_routes() -> Router {
    Router::new().route("/healthz", get(healthz))
}

/// URL prefix and directory for the compiled WASM/JS/CSS bundle.
fn pkg_mount(options: &LeptosOptions) -> (String, PathBuf) {
    let pkg = options.site_pkg_dir.trim_matches('/');
    (format!("/{pkg}"), PathBuf::from(options.site_root.as_ref()).join(pkg))
}

async fn healthz() -> StatusCode {
    StatusCode::OK
}
