use actix_web::{web, HttpResponse, Responder};
use validator::Validate;
use crate::core::{generate_vibe, ChatEngine, ReplyOutcome};
use crate::models::{ChatRequest, ChatResponse, ErrorResponse, HealthResponse, VibeRequest, VibeResponse};
use crate::services::VenueCatalog;
use std::sync::Arc;

/// Application state shared across all handlers
#[derive(Clone)]
pub struct AppState {
    pub catalog: Arc<VenueCatalog>,
    pub engine: ChatEngine,
}

/// Configure all chat-related routes
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg
        .route("/health", web::get().to(health_check))
        .route("/chat", web::post().to(chat))
        .route("/generate-vibe", web::post().to(vibe));
}

/// Health check endpoint
async fn health_check(state: web::Data<AppState>) -> impl Responder {
    HttpResponse::Ok().json(HealthResponse {
        status: "healthy".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        venues: state.catalog.len(),
        timestamp: chrono::Utc::now(),
    })
}

/// Chat endpoint
///
/// POST /chat
///
/// Request body:
/// ```json
/// { "message": "O cafenea linistita in Cluj pentru invatat" }
/// ```
///
/// Always answers 200 with `{ "reply": "..." }`; empty messages and requests
/// with no matching venue get a fixed guidance text.
async fn chat(
    state: web::Data<AppState>,
    req: web::Json<ChatRequest>,
) -> impl Responder {
    let message = req.message();
    tracing::debug!("Chat request: {:?}", message);

    let reply = state.engine.reply(&state.catalog, message, &mut rand::rng());

    match reply.outcome {
        ReplyOutcome::EmptyInput => tracing::info!("Empty chat message, returning guidance"),
        ReplyOutcome::NoMatch => tracing::info!("No venue matched chat request"),
        ReplyOutcome::Recommended { count, fallback_applied } => tracing::info!(
            "Recommended {} venues (fallback: {})",
            count,
            fallback_applied
        ),
    }

    HttpResponse::Ok().json(ChatResponse { reply: reply.reply })
}

/// Vibe rewrite endpoint
///
/// POST /generate-vibe
///
/// Request body:
/// ```json
/// { "name": "string", "short_description": "string", "address": "string" }
/// ```
async fn vibe(req: web::Json<VibeRequest>) -> impl Responder {
    if let Err(errors) = req.validate() {
        tracing::info!("Validation failed for generate-vibe request: {:?}", errors);
        return HttpResponse::BadRequest().json(ErrorResponse {
            error: "Validation failed".to_string(),
            message: errors.to_string(),
            status_code: 400,
        });
    }

    let vibe_description = generate_vibe(
        req.name.as_deref(),
        req.short_description.as_deref(),
        req.address.as_deref(),
        &mut rand::rng(),
    );

    HttpResponse::Ok().json(VibeResponse { vibe_description })
}
