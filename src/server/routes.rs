//! Request handlers for the gateway's two endpoints

use axum::extract::rejection::JsonRejection;
use axum::extract::State;
use axum::Json;
use serde::Serialize;
use serde_json::{json, Value};

use crate::error::LookupError;
use crate::server::error::AppError;
use crate::server::AppState;
use crate::types::{ImageHit, LookupRequest, ProviderId};

/// GET / — liveness probe
pub async fn health() -> Json<Value> {
    Json(json!({ "status": "image lookup gateway running" }))
}

/// Success body for an image lookup
#[derive(Debug, Serialize)]
pub struct LookupResponse {
    pub success: bool,
    pub image_url: String,
    pub photographer: String,
    pub provider: ProviderId,
}

impl From<ImageHit> for LookupResponse {
    fn from(hit: ImageHit) -> Self {
        Self {
            success: true,
            image_url: hit.image_url,
            photographer: hit.photographer,
            provider: hit.provider,
        }
    }
}

/// POST /generate-image — look up the first matching image.
///
/// Body shapes that fail to deserialize are rejected here as validation
/// errors; they never reach the lookup.
pub async fn generate_image(
    State(state): State<AppState>,
    payload: Result<Json<LookupRequest>, JsonRejection>,
) -> Result<Json<LookupResponse>, AppError> {
    let Json(request) =
        payload.map_err(|rejection| LookupError::Validation(rejection.body_text()))?;

    let hit = crate::lookup_image(&request, state.provider.as_ref()).await?;

    Ok(Json(hit.into()))
}
