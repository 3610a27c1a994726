pub mod records;

use anyhow::Result;
use axum::{extract::{Query, State}, http::StatusCode, routing::get, Json, Router};
use parking_lot::RwLock;
use qna_core::fuzzy::search_score;
use qna_core::TfIdfIndex;
use records::{load_questions, next_record_id, Question};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tower_http::cors::{Any, CorsLayer, AllowOrigin};
use tower_http::trace::TraceLayer;
use tracing::{info, warn};

/// Upper bound on results per request regardless of what the client asks for.
pub const MAX_LIMIT: usize = 100;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SearchType {
    #[default]
    Tfidf,
    Fuzzy,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchParams {
    #[serde(default)]
    pub query: String,
    #[serde(default)]
    pub search_type: SearchType,
    pub limit: Option<usize>,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ListParams {
    pub assigned_to: Option<String>,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchResponse {
    pub query: String,
    pub search_type: SearchType,
    pub took_s: f64,
    pub total_hits: usize,
    pub results: Vec<SearchHit>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchHit {
    pub record_id: String,
    pub question: String,
    pub answer: String,
    pub score: f64,
}

#[derive(Clone)]
pub struct AppState {
    pub questions: Arc<RwLock<Vec<Question>>>,
    pub default_limit: usize,
}

impl AppState {
    pub fn new(questions: Vec<Question>, default_limit: usize) -> Self {
        Self { questions: Arc::new(RwLock::new(questions)), default_limit }
    }
}

pub fn build_app(records_path: String, default_limit: usize) -> Result<Router> {
    let questions = load_questions(&records_path)?;
    info!(records = questions.len(), path = %records_path, "question records loaded");
    Ok(router(AppState::new(questions, default_limit)))
}

pub fn router(app_state: AppState) -> Router {
    // CORS: read CORS_ALLOW_ORIGIN (comma-separated) or allow Any by default
    let cors = match std::env::var("CORS_ALLOW_ORIGIN") {
        Ok(val) => {
            let origins: Vec<_> = val
                .split(',')
                .filter_map(|s| s.trim().parse().ok())
                .collect();
            if origins.is_empty() {
                warn!("CORS_ALLOW_ORIGIN set but no origin parsed, allowing any");
                CorsLayer::new().allow_origin(Any).allow_methods(Any).allow_headers(Any)
            } else {
                CorsLayer::new().allow_origin(AllowOrigin::list(origins)).allow_methods(Any).allow_headers(Any)
            }
        }
        Err(_) => CorsLayer::new().allow_origin(Any).allow_methods(Any).allow_headers(Any),
    };

    Router::new()
        .route("/health", get(|| async { "ok" }))
        .route("/api/questions", get(list_questions).post(create_question))
        .route("/api/questions/search", get(search_handler))
        .with_state(app_state)
        .layer(cors)
        .layer(TraceLayer::new_for_http())
}

pub async fn search_handler(State(state): State<AppState>, Query(params): Query<SearchParams>) -> Json<SearchResponse> {
    let start = std::time::Instant::now();
    let limit = params.limit.unwrap_or(state.default_limit).min(MAX_LIMIT);
    let (total_hits, results) = run_search(&state.questions.read(), &params.query, params.search_type, limit);
    let elapsed = start.elapsed();
    info!(query = %params.query, search_type = ?params.search_type, total_hits, "search served");
    Json(SearchResponse {
        query: params.query,
        search_type: params.search_type,
        took_s: elapsed.as_secs_f64(),
        total_hits,
        results,
    })
}

/// Rank `questions` against `query`, returning the hit count before truncation and the top `limit` hits.
pub fn run_search(questions: &[Question], query: &str, search_type: SearchType, limit: usize) -> (usize, Vec<SearchHit>) {
    let mut scored: Vec<(String, f64)> = match search_type {
        SearchType::Tfidf => {
            // fresh index per request, never shared between callers
            let mut index = TfIdfIndex::new();
            for q in questions {
                index.add_document(q.id.clone(), &q.searchable_text());
            }
            let ranked = index.search(query, usize::MAX);
            index.clear();
            ranked.into_iter().map(|r| (r.id, r.score)).collect()
        }
        SearchType::Fuzzy => {
            let mut ranked: Vec<(String, f64)> = questions
                .iter()
                .map(|q| (q.id.clone(), search_score(&q.searchable_text(), query)))
                .filter(|(_, score)| *score > 0.0)
                .collect();
            ranked.sort_by(|a, b| b.1.total_cmp(&a.1));
            ranked
        }
    };
    let total_hits = scored.len();
    scored.truncate(limit);

    let results = scored
        .into_iter()
        .filter_map(|(id, score)| {
            let q = questions.iter().find(|q| q.id == id)?;
            Some(SearchHit { record_id: id, question: q.question.clone(), answer: q.answer.clone(), score })
        })
        .collect();
    (total_hits, results)
}

pub async fn list_questions(State(state): State<AppState>, Query(params): Query<ListParams>) -> Json<Vec<Question>> {
    let questions = state.questions.read();
    let listed = match params.assigned_to.as_deref() {
        Some(assignee) => questions.iter().filter(|q| q.assigned_to == assignee).cloned().collect(),
        None => questions.clone(),
    };
    Json(listed)
}

pub async fn create_question(State(state): State<AppState>, Json(mut question): Json<Question>) -> Result<(StatusCode, Json<Question>), (StatusCode, String)> {
    if question.question.trim().is_empty() {
        return Err((StatusCode::BAD_REQUEST, "question must not be empty".into()));
    }
    let mut questions = state.questions.write();
    if question.id.is_empty() {
        question.id = next_record_id(&questions);
    }
    info!(id = %question.id, "question created");
    questions.push(question.clone());
    Ok((StatusCode::CREATED, Json(question)))
}
