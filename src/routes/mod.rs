pub mod admin;
pub mod blog;
pub mod contact;
pub mod explore;
pub mod health;
pub mod neighborhoods;
pub mod properties;

use axum::{routing::delete, routing::get, routing::post, routing::put, Router};
use std::sync::Arc;

use crate::app::AppState;

/// Build the API router with all routes
pub fn api_router() -> Router<Arc<AppState>> {
    Router::new()
        // Public routes
        .route("/health", get(health::health_check))
        // Properties
        .route("/properties", get(properties::list_properties))
        .route("/properties/featured", get(properties::featured_properties))
        .route("/properties/:property_id", get(properties::get_property))
        // Blog
        .route("/blog", get(blog::list_posts))
        .route("/blog/featured", get(blog::featured_post))
        .route("/blog/:post_id", get(blog::get_post))
        .route("/blog/:post_id/related", get(blog::related_posts))
        // Neighborhoods
        .route("/neighborhoods", get(neighborhoods::list_neighborhoods))
        .route("/neighborhoods/:slug", get(neighborhoods::get_neighborhood))
        .route(
            "/neighborhoods/:slug/properties",
            get(neighborhoods::neighborhood_properties),
        )
        // Explore the area
        .route("/explore", get(explore::list_categories))
        .route("/explore/:category", get(explore::list_items))
        .route("/explore/:category/:slug", get(explore::get_item))
        // Contact
        .route("/contact", post(contact::submit_contact))
        // Admin mutations (always 501; content is edited at the source)
        .route("/properties", post(admin::create_property))
        .route("/properties/:property_id", put(admin::update_property))
        .route("/properties/:property_id", delete(admin::delete_property))
        .route("/blog", post(admin::create_post))
        .route("/blog/:post_id", put(admin::update_post))
        .route("/blog/:post_id", delete(admin::delete_post))
        .route("/neighborhoods", post(admin::create_neighborhood))
        .route("/neighborhoods/:slug", put(admin::update_neighborhood))
        .route("/neighborhoods/:slug", delete(admin::delete_neighborhood))
}
