use axum::{
    Json,
    extract::{State, rejection::JsonRejection},
    http::StatusCode,
};
use tracing::{Instrument, debug, error, info, info_span, warn};
use uuid::Uuid;

use crate::{
    error::AppError,
    message::{ChatRequest, ChatResponse},
    services::{email_extractor::extract_email, gemini::LlmError},
    state::SharedState,
};

use super::LIVENESS_TEXT;

pub const MISSING_MESSAGE: &str = "Invalid request: message field is required";

pub async fn home_handler() -> &'static str {
    LIVENESS_TEXT
}

pub async fn preflight_handler() -> StatusCode {
    StatusCode::OK
}

pub async fn chat_handler(
    State(state): State<SharedState>,
    payload: Result<Json<ChatRequest>, JsonRejection>,
) -> Result<Json<ChatResponse>, AppError> {
    let message = match payload {
        Ok(Json(ChatRequest {
            message: Some(message),
        })) if !message.is_empty() => message,
        Ok(_) => return Err(AppError::BadRequest(MISSING_MESSAGE.to_string())),
        Err(rejection) => {
            warn!(%rejection, "rejected chat payload");
            return Err(AppError::BadRequest(MISSING_MESSAGE.to_string()));
        }
    };

    let span = info_span!("chat", request_id = %Uuid::new_v4());
    let response = handle_message(&state, &message).instrument(span).await;
    Ok(Json(ChatResponse { response }))
}

/// Domain half of an address; safe to put in `info` logs.
fn email_domain(email: &str) -> &str {
    email.rsplit_once('@').map_or("", |(_, domain)| domain)
}

async fn handle_message(state: &SharedState, message: &str) -> String {
    if let Some(email) = extract_email(message) {
        info!(domain = email_domain(email), "email extracted");
        debug!(email, "extracted address");
        state.remember_email(email).await;
        // Best-effort: a lost row must never fail the chat reply.
        if let Err(e) = state.store.save_email(email).await {
            error!(error = %e, "failed to save email");
        }
    }

    match state.model.respond(message).await {
        Ok(reply) => reply,
        Err(LlmError::MissingApiKey) => LlmError::MissingApiKey.to_string(),
        Err(e) => {
            // The provider error text is returned as an ordinary reply.
            warn!(error = %e, "conversation client failed");
            e.to_string()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn logged_domain_drops_local_part() {
        assert_eq!(email_domain("jane.doe@example.co.uk"), "example.co.uk");
        assert!(!email_domain("jane.doe@example.co.uk").contains("jane"));
        assert_eq!(email_domain("no-at-sign"), "");
    }
}
