use super::types::{ErrorResponse, GenerateRequest, GenerateResponse};
use crate::{Error, generator::Generator};
use axum::{extract::State, http::StatusCode, response::Json};
use std::sync::Arc;
use tracing::{error, info};
use uuid::Uuid;

#[derive(Clone)]
pub struct AppState {
    pub generator: Arc<Generator>,
}

pub async fn generate(
    State(state): State<AppState>,
    Json(request): Json<GenerateRequest>,
) -> Result<Json<GenerateResponse>, (StatusCode, Json<ErrorResponse>)> {
    let request_id = Uuid::new_v4();
    info!(
        "Received generation request {} with {} parameters",
        request_id,
        request.params.len()
    );

    match state.generator.generate(&request.params).await {
        Ok(text) => {
            info!("Completed generation request {}", request_id);
            Ok(Json(GenerateResponse { text }))
        }
        Err(e) => {
            error!("Generation request {} failed: {}", request_id, e);
            Err((
                status_for(&e),
                Json(ErrorResponse {
                    error: e.to_string(),
                }),
            ))
        }
    }
}

/// One distinct status per error kind, so callers can tell a bad request from
/// a bad credential from a provider outage.
fn status_for(err: &Error) -> StatusCode {
    match err {
        Error::MissingParameter { .. } => StatusCode::UNPROCESSABLE_ENTITY,
        Error::Authentication(_) => StatusCode::UNAUTHORIZED,
        Error::RateLimited(_) => StatusCode::TOO_MANY_REQUESTS,
        Error::Timeout(_) => StatusCode::GATEWAY_TIMEOUT,
        Error::RemoteService(_) | Error::MalformedResponse(_) | Error::Network(_) => {
            StatusCode::BAD_GATEWAY
        }
        _ => StatusCode::INTERNAL_SERVER_ERROR,
    }
}
