use axum::extract::DefaultBodyLimit;
use axum::middleware;
use axum::routing::{get, post};
use axum::Router;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::{DefaultMakeSpan, DefaultOnResponse, TraceLayer};
use tracing::Level;

use crate::application::ports::AiClient;
use crate::infrastructure::observability::request_id_middleware;
use crate::presentation::handlers::{
    from_base64_handler, from_classpath_handler, from_files_handler, from_urls_handler,
    health_handler,
};
use crate::presentation::state::AppState;

/// Uploaded audio can be large; the axum default of 2 MiB is too tight.
const MAX_BODY_BYTES: usize = 32 * 1024 * 1024;

pub fn create_router<C>(state: AppState<C>) -> Router
where
    C: AiClient + 'static,
{
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    let trace_layer = TraceLayer::new_for_http()
        .make_span_with(DefaultMakeSpan::new().level(Level::INFO))
        .on_response(DefaultOnResponse::new().level(Level::INFO));

    Router::new()
        .route("/health", get(health_handler))
        .route(
            "/api/v1/audio/analysis/from-classpath",
            post(from_classpath_handler::<C>),
        )
        .route(
            "/api/v1/audio/analysis/from-files",
            post(from_files_handler::<C>),
        )
        .route(
            "/api/v1/audio/analysis/from-urls",
            post(from_urls_handler::<C>),
        )
        .route(
            "/api/v1/audio/analysis/from-base64",
            post(from_base64_handler::<C>),
        )
        .layer(DefaultBodyLimit::max(MAX_BODY_BYTES))
        .layer(middleware::from_fn(request_id_middleware))
        .layer(trace_layer)
        .layer(cors)
        .with_state(state)
}
