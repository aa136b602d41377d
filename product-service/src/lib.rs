//! # product-service
//!
//! REST API exposing a product catalog backed by PostgreSQL.
//!
//! Every request flows through the same pipeline: the route table hands it
//! to the endpoint's declared validation rules, the gate turns any failures
//! into a 400 `{errors: [...]}` response, and only well-formed input reaches
//! a handler. Handlers talk to the store through the
//! [`repository::ProductRepository`] trait and shape a uniform `{data: ...}`
//! envelope.
//!
//! ## Example
//!
//! ```rust,no_run
//! use product_service::config::Config;
//! use product_service::database;
//! use product_service::error::Result;
//! use product_service::observability::init_tracing;
//! use product_service::repository::PgProductRepository;
//! use product_service::routes;
//! use product_service::server::Server;
//! use product_service::state::AppState;
//!
//! #[tokio::main]
//! async fn main() -> Result<()> {
//!     let config = Config::load()?;
//!     init_tracing(&config)?;
//!
//!     let pool = database::create_pool(&config.database).await?;
//!     let state = AppState::new(config.clone(), PgProductRepository::new(pool));
//!     let app = routes::app_router(state);
//!
//!     Server::new(config).serve(app).await
//! }
//! ```

pub mod config;
pub mod database;
pub mod error;
pub mod handlers;
pub mod health;
pub mod models;
pub mod observability;
pub mod repository;
pub mod responses;
pub mod routes;
pub mod server;
pub mod state;
pub mod validation;
