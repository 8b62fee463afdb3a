use actix_web::{web, HttpResponse, Responder};
use validator::Validate;
use crate::config::MatchingSettings;
use crate::core::{normalize, CompatibilityEngine, RankOptions};
use crate::models::{ErrorResponse, HealthResponse, RankRequest, RankResponse, ScoreRequest, ScoreResponse};

/// Application state shared across all handlers
#[derive(Clone)]
pub struct AppState {
    pub engine: CompatibilityEngine,
    pub matching: MatchingSettings,
}

/// Configure all compatibility routes
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg
        .route("/health", web::get().to(health_check))
        .route("/compatibility/score", web::post().to(score))
        .route("/compatibility/breakdown", web::post().to(breakdown))
        .route("/compatibility/rank", web::post().to(rank));
}

/// Health check endpoint
async fn health_check() -> impl Responder {
    HttpResponse::Ok().json(HealthResponse {
        status: "healthy".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        timestamp: chrono::Utc::now(),
    })
}

/// Score a pair of profiles
///
/// POST /api/v1/compatibility/score
///
/// Request body:
/// ```json
/// {
///   "strategy": "roommate-match",
///   "a": { "noisePreference": "Medio", "interests": ["Cine"], "commuteOrSearchDistance": 10 },
///   "b": { "noisePreference": 2, "interests": ["Cine"] }
/// }
/// ```
async fn score(
    state: web::Data<AppState>,
    req: web::Json<ScoreRequest>,
) -> impl Responder {
    let req = req.into_inner();
    let score = state
        .engine
        .score(&normalize(&req.a), &normalize(&req.b), req.strategy);

    tracing::debug!(
        "Scored {:?} against {:?} with {}: {}",
        req.a.user_id,
        req.b.user_id,
        req.strategy,
        score
    );

    HttpResponse::Ok().json(ScoreResponse {
        strategy: req.strategy,
        score,
    })
}

/// Explain the score of a pair of profiles
///
/// POST /api/v1/compatibility/breakdown
///
/// Same body as `/compatibility/score`; responds with per-dimension
/// sub-scores and the shared interests and lifestyle tags.
async fn breakdown(
    state: web::Data<AppState>,
    req: web::Json<ScoreRequest>,
) -> impl Responder {
    let req = req.into_inner();
    let breakdown = state
        .engine
        .breakdown(&normalize(&req.a), &normalize(&req.b), req.strategy);

    HttpResponse::Ok().json(breakdown)
}

/// Rank candidates against a subject
///
/// POST /api/v1/compatibility/rank
///
/// Request body:
/// ```json
/// {
///   "strategy": "listing-match",
///   "subject": { "userId": "u1", "city": "Madrid", "tags": ["tech"] },
///   "candidates": [{ "userId": "o1", "city": "madrid", "tags": ["tech", "social"] }],
///   "limit": 20,
///   "minScore": 0
/// }
/// ```
async fn rank(
    state: web::Data<AppState>,
    req: web::Json<RankRequest>,
) -> impl Responder {
    if let Err(errors) = req.validate() {
        tracing::info!("Validation failed for rank request: field_errors={:?}", errors);
        return HttpResponse::BadRequest().json(ErrorResponse {
            error: "Validation failed".to_string(),
            message: errors.to_string(),
            status_code: 400,
        });
    }

    let options = RankOptions {
        limit: state.matching.effective_limit(req.limit),
        min_score: req.min_score.unwrap_or(state.matching.min_score),
    };

    tracing::info!(
        "Ranking {} candidates for {:?} with {}, limit: {}",
        req.candidates.len(),
        req.subject.user_id,
        req.strategy,
        options.limit
    );

    let result = state
        .engine
        .rank(&req.subject, &req.candidates, req.strategy, options);

    let response = RankResponse {
        matches: result.matches,
        total_candidates: result.total_candidates,
    };

    tracing::info!(
        "Returning {} matches for {:?} (from {} candidates)",
        response.matches.len(),
        req.subject.user_id,
        response.total_candidates
    );

    HttpResponse::Ok().json(response)
}
