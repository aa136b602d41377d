//! Product service binary.

use product_service::config::Config;
use product_service::database;
use product_service::error::Result;
use product_service::observability::init_tracing;
use product_service::repository::PgProductRepository;
use product_service::routes;
use product_service::server::Server;
use product_service::state::AppState;

#[tokio::main]
async fn main() -> Result<()> {
    // Load configuration
    let config = Config::load()?;

    // Initialize tracing
    init_tracing(&config)?;

    tracing::info!("Starting {}", config.service.name);

    // Connect to the store; the repository is constructed once and handed to
    // every handler through the application state.
    let pool = database::create_pool(&config.database).await?;
    let repository = PgProductRepository::new(pool);

    let state = AppState::new(config.clone(), repository);
    let app = routes::app_router(state);

    // Run server
    Server::new(config).serve(app).await
}
