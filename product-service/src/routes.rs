//! Route table.
//!
//! Declarative wiring only: each route binds a method and path to its
//! handler; the handler's declared rule list and the gate run first on every
//! request.

use axum::{
    routing::{get, post},
    Router,
};

use crate::handlers::products;
use crate::health::{health, readiness};
use crate::repository::ProductRepository;
use crate::state::AppState;

/// Product resource routes, nested under `/api` by [`app_router`].
pub fn api_router<R: ProductRepository>() -> Router<AppState<R>> {
    Router::new()
        .route("/products", get(products::list_products::<R>))
        .route("/product", post(products::create_product::<R>))
        .route(
            "/product/{id}",
            get(products::get_product::<R>)
                .put(products::update_product::<R>)
                .patch(products::update_availability::<R>)
                .delete(products::delete_product::<R>),
        )
}

/// Full application router: the API plus health probes.
pub fn app_router<R: ProductRepository>(state: AppState<R>) -> Router {
    Router::new()
        .nest("/api", api_router::<R>())
        .route("/health", get(health::<R>))
        .route("/ready", get(readiness::<R>))
        .with_state(state)
}
