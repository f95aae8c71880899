use crate::analyzer::{AnalysisSummary, Analyzer, WordAnalysis};
use axum::{
    extract::{Query, State},
    response::{IntoResponse, Json},
    routing::get,
    Router,
};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tower_http::{cors::CorsLayer, trace::TraceLayer};

// ========== Request/Response Types ==========

#[derive(Debug, Deserialize)]
pub struct WordRequest {
    pub word: String,
}

#[derive(Debug, Deserialize)]
pub struct AnalyzeRequest {
    pub text: String,
}

#[derive(Debug, Serialize)]
pub struct TransformResponse {
    pub word: String,
    pub result: String,
}

#[derive(Debug, Serialize)]
pub struct AnalyzeResponse {
    pub analyses: Vec<WordAnalysis>,
    pub summary: AnalysisSummary,
}

#[derive(Debug, Serialize)]
pub struct ApiResponse<T> {
    pub success: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<T>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

impl<T> ApiResponse<T> {
    fn success(data: T) -> Self {
        Self {
            success: true,
            data: Some(data),
            message: None,
        }
    }
}

// ========== Handlers ==========
// The transforms are total, so every handler is infallible: a lookup miss
// or an empty stem is a normal response, not an error.

async fn health_check() -> impl IntoResponse {
    Json(ApiResponse::success("OK"))
}

async fn stem_word(
    State(analyzer): State<Arc<Analyzer>>,
    Query(req): Query<WordRequest>,
) -> impl IntoResponse {
    let analysis = analyzer.analyze_word(&req.word);

    Json(ApiResponse::success(TransformResponse {
        word: req.word,
        result: analysis.rule_stem,
    }))
}

async fn lemmatize_word(
    State(analyzer): State<Arc<Analyzer>>,
    Query(req): Query<WordRequest>,
) -> impl IntoResponse {
    let analysis = analyzer.analyze_word(&req.word);

    Json(ApiResponse::success(TransformResponse {
        word: req.word,
        result: analysis.lemma,
    }))
}

async fn analyze_text(
    State(analyzer): State<Arc<Analyzer>>,
    Query(req): Query<AnalyzeRequest>,
) -> impl IntoResponse {
    let analyses = analyzer.analyze_text(&req.text);
    let summary = analyzer.summarize(&analyses);

    Json(ApiResponse::success(AnalyzeResponse { analyses, summary }))
}

// ========== Router ==========

pub fn create_router(analyzer: Arc<Analyzer>) -> Router {
    Router::new()
        .route("/health", get(health_check))
        .route("/stem", get(stem_word))
        .route("/lemma", get(lemmatize_word))
        .route("/analyze", get(analyze_text))
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(analyzer)
}
