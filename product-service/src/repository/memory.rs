//! In-memory product repository.
//!
//! Intended for tests and database-less local runs. Not optimized for
//! performance.

use std::collections::BTreeMap;
use std::sync::RwLock;

use chrono::Utc;

use super::error::{RepositoryError, RepositoryErrorKind, RepositoryOperation};
use super::traits::{ProductRepository, RepositoryResult};
use crate::models::{NewProduct, Product, UpdateProduct};

#[derive(Debug, Default)]
struct Store {
    next_id: i64,
    rows: BTreeMap<i64, Product>,
}

/// Product repository backed by process memory.
#[derive(Debug, Default)]
pub struct InMemoryProductRepository {
    store: RwLock<Store>,
}

impl InMemoryProductRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

fn poisoned(operation: RepositoryOperation) -> RepositoryError {
    RepositoryError::new(operation, RepositoryErrorKind::Other, "lock poisoned")
}

impl ProductRepository for InMemoryProductRepository {
    async fn find_all(&self) -> RepositoryResult<Vec<Product>> {
        let store = self
            .store
            .read()
            .map_err(|_| poisoned(RepositoryOperation::FindAll))?;

        let mut products: Vec<Product> = store.rows.values().cloned().collect();
        products.sort_by(|a, b| a.name.cmp(&b.name));
        Ok(products)
    }

    async fn find_by_id(&self, id: i64) -> RepositoryResult<Option<Product>> {
        let store = self
            .store
            .read()
            .map_err(|_| poisoned(RepositoryOperation::FindById))?;

        Ok(store.rows.get(&id).cloned())
    }

    async fn create(&self, data: NewProduct) -> RepositoryResult<Product> {
        let mut store = self
            .store
            .write()
            .map_err(|_| poisoned(RepositoryOperation::Create))?;

        store.next_id += 1;
        let now = Utc::now();
        let product = Product {
            id: store.next_id,
            name: data.name,
            price: data.price,
            availability: data.availability,
            created_at: now,
            updated_at: now,
        };
        store.rows.insert(product.id, product.clone());
        Ok(product)
    }

    async fn update(&self, id: i64, data: UpdateProduct) -> RepositoryResult<Option<Product>> {
        let mut store = self
            .store
            .write()
            .map_err(|_| poisoned(RepositoryOperation::Update))?;

        let Some(product) = store.rows.get_mut(&id) else {
            return Ok(None);
        };
        product.name = data.name;
        product.price = data.price;
        product.availability = data.availability;
        product.updated_at = Utc::now();
        Ok(Some(product.clone()))
    }

    async fn delete(&self, id: i64) -> RepositoryResult<bool> {
        let mut store = self
            .store
            .write()
            .map_err(|_| poisoned(RepositoryOperation::Delete))?;

        Ok(store.rows.remove(&id).is_some())
    }

    async fn ping(&self) -> RepositoryResult<()> {
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn monitor(name: &str, price: f64) -> NewProduct {
        NewProduct {
            name: name.to_string(),
            price,
            availability: true,
        }
    }

    #[tokio::test]
    async fn test_create_assigns_increasing_ids() {
        let repo = InMemoryProductRepository::new();
        let first = repo.create(monitor("Monitor Curvo", 399.0)).await.unwrap();
        let second = repo.create(monitor("Teclado", 59.0)).await.unwrap();

        assert_eq!(first.id, 1);
        assert_eq!(second.id, 2);
        assert!(first.availability);
    }

    #[tokio::test]
    async fn test_find_all_is_sorted_by_name() {
        let repo = InMemoryProductRepository::new();
        repo.create(monitor("Teclado", 59.0)).await.unwrap();
        repo.create(monitor("Monitor Curvo", 399.0)).await.unwrap();

        let names: Vec<String> = repo
            .find_all()
            .await
            .unwrap()
            .into_iter()
            .map(|p| p.name)
            .collect();
        assert_eq!(names, ["Monitor Curvo", "Teclado"]);
    }

    #[tokio::test]
    async fn test_update_missing_row_returns_none() {
        let repo = InMemoryProductRepository::new();
        let updated = repo
            .update(
                99,
                UpdateProduct {
                    name: "Monitor Curvo".to_string(),
                    price: 399.0,
                    availability: false,
                },
            )
            .await
            .unwrap();
        assert!(updated.is_none());
    }

    #[tokio::test]
    async fn test_update_replaces_fields() {
        let repo = InMemoryProductRepository::new();
        let created = repo.create(monitor("Monitor Curvo", 399.0)).await.unwrap();

        let updated = repo
            .update(
                created.id,
                UpdateProduct {
                    name: "Monitor Plano".to_string(),
                    price: 299.0,
                    availability: false,
                },
            )
            .await
            .unwrap()
            .unwrap();

        assert_eq!(updated.id, created.id);
        assert_eq!(updated.name, "Monitor Plano");
        assert_eq!(updated.price, 299.0);
        assert!(!updated.availability);
    }

    #[tokio::test]
    async fn test_delete_is_final() {
        let repo = InMemoryProductRepository::new();
        let created = repo.create(monitor("Monitor Curvo", 399.0)).await.unwrap();

        assert!(repo.delete(created.id).await.unwrap());
        assert!(!repo.delete(created.id).await.unwrap());
        assert!(repo.find_by_id(created.id).await.unwrap().is_none());
    }
}
