use anyhow::Result;

use homeplace_backend::services::ContactForwarder;
use homeplace_backend::store::Catalog;
use homeplace_backend::{app, config, logging};

#[tokio::main]
async fn main() -> Result<()> {
    // Load environment variables
    dotenvy::dotenv().ok();

    // Load configuration
    let settings = config::Settings::from_env()?;

    // Initialize logging
    logging::init_logging(&settings.env);

    tracing::info!(
        env = ?settings.env,
        server_addr = %settings.server_addr,
        content_dir = %settings.content_dir.display(),
        "Starting HomePlace backend"
    );

    // Load the content catalog; malformed content fails startup
    let catalog = Catalog::load(&settings.content_dir)?;
    tracing::info!(
        properties = catalog.properties.len(),
        blog_posts = catalog.blog_posts.len(),
        neighborhoods = catalog.neighborhoods.len(),
        area_items = catalog.area_item_count(),
        "Content catalog loaded"
    );

    // Create the contact submission forwarder
    let forwarder = ContactForwarder::from_settings(&settings)?;
    if forwarder.providers().is_empty() {
        tracing::warn!("No contact provider configured - submissions will be rejected");
    }

    // Create application state
    let state = app::AppState::new(settings.clone(), catalog, forwarder);

    // Build application
    let app = app::create_app(state);

    // Start server
    let listener = tokio::net::TcpListener::bind(&settings.server_addr).await?;
    tracing::info!("Listening on {}", settings.server_addr);

    axum::serve(listener, app).await?;

    Ok(())
}
