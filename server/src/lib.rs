use anyhow::Result;
use axum::{extract::{Query, State}, http::StatusCode, routing::get, Json, Router};
use serde::{Deserialize, Serialize};
use std::fs::File;
use std::io::BufReader;
use std::path::Path;
use std::sync::Arc;
use tfidf_core::corpus::read_tsv;
use tfidf_core::{PipelineConfig, RankingResult, TfIdfIndex, TsvLayout};
use tower_http::cors::{AllowOrigin, Any, CorsLayer};
use tower_http::trace::TraceLayer;

#[derive(Deserialize)]
pub struct SearchParams {
    pub q: String,
}

#[derive(Serialize)]
pub struct SearchResponse {
    pub query: String,
    pub took_s: f64,
    pub num_docs: usize,
    pub best: RankingResult,
}

#[derive(Clone)]
pub struct AppState {
    pub index: Arc<TfIdfIndex>,
}

/// Load a TSV corpus, build its index, and wire up the routes.
pub fn build_app<P: AsRef<Path>>(corpus: P, layout: &TsvLayout, config: &PipelineConfig) -> Result<Router> {
    let f = File::open(corpus.as_ref())?;
    let docs = read_tsv(BufReader::new(f), layout)?;
    let index = TfIdfIndex::build(&docs, config)?;
    Ok(router(index))
}

pub fn router(index: TfIdfIndex) -> Router {
    let app_state = AppState { index: Arc::new(index) };

    // CORS: read CORS_ALLOW_ORIGIN (comma-separated) or allow Any by default
    let cors = match std::env::var("CORS_ALLOW_ORIGIN") {
        Ok(val) => {
            let origins: Vec<_> = val
                .split(',')
                .filter_map(|s| s.trim().parse().ok())
                .collect();
            if origins.is_empty() {
                CorsLayer::new().allow_origin(Any).allow_methods(Any).allow_headers(Any)
            } else {
                CorsLayer::new().allow_origin(AllowOrigin::list(origins)).allow_methods(Any).allow_headers(Any)
            }
        }
        Err(_) => CorsLayer::new().allow_origin(Any).allow_methods(Any).allow_headers(Any),
    };

    Router::new()
        .route("/health", get(|| async { "ok" }))
        .route("/search", get(search_handler))
        .with_state(app_state)
        .layer(cors)
        .layer(TraceLayer::new_for_http())
}

pub async fn search_handler(
    State(state): State<AppState>,
    Query(params): Query<SearchParams>,
) -> Result<Json<SearchResponse>, (StatusCode, String)> {
    let start = std::time::Instant::now();
    // The term is hashed as-is; only surrounding whitespace is dropped.
    let term = params.q.trim();
    if term.is_empty() {
        return Err((StatusCode::BAD_REQUEST, "query parameter q must not be empty".into()));
    }
    let best = state
        .index
        .best_match(term)
        .map_err(|e| (StatusCode::INTERNAL_SERVER_ERROR, e.to_string()))?;
    let elapsed = start.elapsed();
    tracing::debug!(term, id = %best.id, score = best.score, "search");
    Ok(Json(SearchResponse { query: term.to_owned(), took_s: elapsed.as_secs_f64(), num_docs: state.index.num_docs(), best }))
}
