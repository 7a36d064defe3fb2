use axum::{extract::State, Json};
use std::sync::Arc;

use crate::api::MessageResponse;
use crate::app::AppState;
use crate::domain::ContactRequest;
use crate::error::{ApiError, ApiResult};

/// Forward a contact submission through the provider chain
pub async fn submit_contact(
    State(state): State<Arc<AppState>>,
    Json(request): Json<ContactRequest>,
) -> ApiResult<Json<MessageResponse>> {
    request.validate().map_err(ApiError::BadRequest)?;

    tracing::info!(
        interest = %request.interest,
        property_id = ?request.property_id,
        "Contact submission received"
    );

    let provider = state.forwarder.submit(&request).await?;

    tracing::debug!(provider = provider.name(), "Submission accepted");

    Ok(Json(MessageResponse::with_code(
        "Thanks! Your message has been sent.",
        "CONTACT_FORWARDED",
    )))
}
