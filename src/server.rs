use std::sync::Arc;

use axum::extract::{Query, State};
use axum::routing::get;
use axum::{Json, Router};
use tower_http::trace::TraceLayer;

use crate::config::ResolverConfig;
use crate::search::diagnostics::DiagnosticSink;
use crate::search::{resolve_query, VersionQuery};

#[derive(Clone)]
struct AppState {
    config: Arc<ResolverConfig>,
    diagnostics: Arc<dyn DiagnosticSink>,
}

/// HTTP surface for hosts that can not link the library:
///  `GET /versions?url=..&groupId=..&artifactId=..[&packaging=..][&classifier=..][&repositoryId=..][&format=version]`
pub fn router(config: ResolverConfig, diagnostics: Arc<dyn DiagnosticSink>) -> Router {
    let state = AppState {
        config: Arc::new(config),
        diagnostics,
    };

    Router::new()
        .route("/health", get(health))
        .route("/versions", get(versions))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

async fn health() -> &'static str {
    "ok"
}

async fn versions(State(state): State<AppState>, Query(query): Query<VersionQuery>) -> Json<Vec<String>> {
    Json(resolve_query(&query, &state.config, state.diagnostics.clone()).await)
}
