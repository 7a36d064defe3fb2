use axum::{extract::State, Json};
use serde::Serialize;
use std::sync::Arc;

use crate::app::AppState;

#[derive(Serialize)]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
    pub content: ContentHealth,
    pub contact: ContactHealth,
}

#[derive(Serialize)]
pub struct ContentHealth {
    pub properties: usize,
    pub blog_posts: usize,
    pub neighborhoods: usize,
    pub area_items: usize,
}

#[derive(Serialize)]
pub struct ContactHealth {
    pub configured: bool,
    pub providers: Vec<&'static str>,
}

/// Health check endpoint - public.
///
/// Content is loaded at startup, so a running process always serves it;
/// the status degrades when no contact provider is configured.
pub async fn health_check(State(state): State<Arc<AppState>>) -> Json<HealthResponse> {
    let providers: Vec<&'static str> = state
        .forwarder
        .providers()
        .iter()
        .map(|provider| provider.name())
        .collect();

    let status = if providers.is_empty() {
        "degraded"
    } else {
        "healthy"
    };

    Json(HealthResponse {
        status: status.to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        content: ContentHealth {
            properties: state.catalog.properties.len(),
            blog_posts: state.catalog.blog_posts.len(),
            neighborhoods: state.catalog.neighborhoods.len(),
            area_items: state.catalog.area_item_count(),
        },
        contact: ContactHealth {
            configured: !providers.is_empty(),
            providers,
        },
    })
}
