//! Repository trait definition.
//!
//! Uses RPITIT (Return Position Impl Trait In Traits), available since Rust
//! 1.75, for async trait methods without `async_trait`.

use std::future::Future;

use super::error::RepositoryError;
use crate::models::{NewProduct, Product, UpdateProduct};

/// Result type for repository operations.
pub type RepositoryResult<T> = std::result::Result<T, RepositoryError>;

/// Persistence interface for products.
///
/// Handlers depend on this trait only; the concrete store is chosen at
/// process start ([`PgProductRepository`](super::PgProductRepository) in
/// production, [`InMemoryProductRepository`](super::InMemoryProductRepository)
/// in tests).
pub trait ProductRepository: Send + Sync + 'static {
    /// All products, ordered by name ascending.
    fn find_all(&self) -> impl Future<Output = RepositoryResult<Vec<Product>>> + Send;

    /// Returns `Ok(None)` when no product with `id` exists.
    fn find_by_id(&self, id: i64)
        -> impl Future<Output = RepositoryResult<Option<Product>>> + Send;

    /// Inserts a new product and returns it with its store-assigned id and
    /// timestamps.
    fn create(&self, data: NewProduct) -> impl Future<Output = RepositoryResult<Product>> + Send;

    /// Replaces `name`, `price` and `availability` on the row with `id`.
    /// Returns `Ok(None)` when the row no longer exists.
    fn update(
        &self,
        id: i64,
        data: UpdateProduct,
    ) -> impl Future<Output = RepositoryResult<Option<Product>>> + Send;

    /// Removes the row with `id`. Returns `true` when a row was deleted.
    fn delete(&self, id: i64) -> impl Future<Output = RepositoryResult<bool>> + Send;

    /// Cheap connectivity probe for the readiness check.
    fn ping(&self) -> impl Future<Output = RepositoryResult<()>> + Send;
}
