//! HTTP server rendering the card search page
//!
//! Routes are organized into modules:
//! - routes::search: Search page, results fragment, JSON search and games

pub mod error;
pub mod routes;

use axum::response::IntoResponse;
use axum::{routing::get, Router};
use std::sync::Arc;
use tcgsearch_client::PricingApi;
use tcgsearch_config::Config;
use tokio::net::TcpListener;
use tower_http::cors::CorsLayer;

pub use error::ApiError;

/// Application state
#[derive(Clone)]
pub struct AppState {
    pub api: Arc<dyn PricingApi>,
}

impl AppState {
    pub fn new(api: Arc<dyn PricingApi>) -> Self {
        Self { api }
    }
}

/// Create the application router
pub fn create_router(state: AppState) -> Router {
    use routes::search::{api_games, api_search, page_search};

    let json_api = Router::new()
        .route("/api/health", get(health_check))
        .route("/api/games", get(api_games))
        .route("/api/search", get(api_search))
        .layer(CorsLayer::permissive());

    Router::new()
        .route("/", get(page_search))
        .merge(json_api)
        .with_state(state)
}

/// Health check endpoint
async fn health_check() -> &'static str {
    "OK"
}

// ==================== Template Functions ====================

/// Base HTML template
pub fn base_html(title: &str, content: &str) -> String {
    format!(
        r#"<!DOCTYPE html>
<html lang="en">
<head>
    <meta charset="UTF-8">
    <meta name="viewport" content="width=device-width, initial-scale=1.0">
    <meta name="description" content="Search for your favorite TCG cards">
    <title>{}</title>
    <script src="https://unpkg.com/htmx.org@1.9.10"></script>
    <script src="https://cdn.tailwindcss.com"></script>
    <style>
        .htmx-indicator {{ opacity: 0; transition: opacity 0.3s; }}
        .htmx-request .htmx-indicator {{ opacity: 1; }}
        .htmx-request.htmx-indicator {{ opacity: 1; }}
    </style>
</head>
<body class="min-h-screen bg-gradient-to-b from-white via-gray-50 to-gray-100 dark:from-[#030312] dark:via-[#000000] dark:to-[#000000] text-gray-900 dark:text-gray-100 antialiased">
    {}
</body>
</html>"#,
        tcgsearch_utils::escape_html(title),
        content
    )
}

/// Centered card layout with footer
pub fn page_layout(inner_content: &str) -> String {
    format!(
        r#"<div class='min-h-screen flex items-start justify-center py-20 px-6'>
    <div class='w-full max-w-4xl'>
        <main class='mx-auto bg-white/60 dark:bg-gray-900/50 backdrop-blur-md border border-gray-100 dark:border-gray-800 rounded-3xl shadow-2xl p-8'>
            {}
        </main>
        <footer class='mt-6 text-center text-sm text-gray-500 dark:text-gray-400'>
            Secure TCG Search — private API key used on the server
        </footer>
    </div>
</div>"#,
        inner_content
    )
}

/// Check if request is from HTMX (partial page update)
pub fn is_htmx_request(headers: &axum::http::HeaderMap) -> bool {
    headers.get("hx-request").is_some()
}

/// HTML response whose body depends on `HX-Request`
pub fn page_response(html: String) -> axum::response::Response {
    (
        [(axum::http::header::VARY, "HX-Request")],
        axum::response::Html(html),
    )
        .into_response()
}

/// Start the HTTP server
///
/// Binds to the configured address and serves until Ctrl-C.
pub async fn start_server(config: &Config, api: Arc<dyn PricingApi>) -> Result<(), ApiError> {
    let addr = config.bind_address();
    let router = create_router(AppState::new(api));

    let listener = TcpListener::bind(&addr).await.map_err(|source| ApiError::Bind {
        addr: addr.clone(),
        source,
    })?;
    log::info!("Starting tcgsearch server on http://{}", addr);
    log::info!("Available routes:");
    log::info!("  - / (Card search)");
    log::info!("  - /api/search, /api/games (JSON)");
    log::info!("  - /api/health");

    axum::serve(listener, router)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .map_err(ApiError::Serve)?;

    log::info!("Server stopped gracefully");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        log::error!("Failed to listen for shutdown signal: {}", e);
        std::future::pending::<()>().await;
    }
}
