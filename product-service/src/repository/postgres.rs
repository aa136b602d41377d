//! PostgreSQL-backed product repository.

use sqlx::PgPool;

use super::error::{RepositoryError, RepositoryErrorKind, RepositoryOperation};
use super::traits::{ProductRepository, RepositoryResult};
use crate::models::{NewProduct, Product, UpdateProduct};

/// Product repository over a `products` table.
#[derive(Clone)]
pub struct PgProductRepository {
    pool: PgPool,
}

impl PgProductRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

impl ProductRepository for PgProductRepository {
    async fn find_all(&self) -> RepositoryResult<Vec<Product>> {
        sqlx::query_as::<_, Product>(
            "SELECT id, name, price, availability, created_at, updated_at \
             FROM products ORDER BY name ASC",
        )
        .fetch_all(&self.pool)
        .await
        .map_err(|e| classify(RepositoryOperation::FindAll, e))
    }

    async fn find_by_id(&self, id: i64) -> RepositoryResult<Option<Product>> {
        sqlx::query_as::<_, Product>(
            "SELECT id, name, price, availability, created_at, updated_at \
             FROM products WHERE id = $1",
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| classify(RepositoryOperation::FindById, e))
    }

    async fn create(&self, data: NewProduct) -> RepositoryResult<Product> {
        sqlx::query_as::<_, Product>(
            "INSERT INTO products (name, price, availability) VALUES ($1, $2, $3) \
             RETURNING id, name, price, availability, created_at, updated_at",
        )
        .bind(&data.name)
        .bind(data.price)
        .bind(data.availability)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| classify(RepositoryOperation::Create, e))
    }

    async fn update(&self, id: i64, data: UpdateProduct) -> RepositoryResult<Option<Product>> {
        sqlx::query_as::<_, Product>(
            "UPDATE products SET name = $2, price = $3, availability = $4, updated_at = now() \
             WHERE id = $1 \
             RETURNING id, name, price, availability, created_at, updated_at",
        )
        .bind(id)
        .bind(&data.name)
        .bind(data.price)
        .bind(data.availability)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| classify(RepositoryOperation::Update, e))
    }

    async fn delete(&self, id: i64) -> RepositoryResult<bool> {
        let result = sqlx::query("DELETE FROM products WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(|e| classify(RepositoryOperation::Delete, e))?;

        Ok(result.rows_affected() > 0)
    }

    async fn ping(&self) -> RepositoryResult<()> {
        sqlx::query("SELECT 1")
            .execute(&self.pool)
            .await
            .map_err(|e| classify(RepositoryOperation::Ping, e))?;

        Ok(())
    }
}

fn classify(operation: RepositoryOperation, err: sqlx::Error) -> RepositoryError {
    let kind = match &err {
        sqlx::Error::PoolTimedOut => RepositoryErrorKind::Timeout,
        sqlx::Error::Io(_) | sqlx::Error::Tls(_) | sqlx::Error::PoolClosed => {
            RepositoryErrorKind::ConnectionFailed
        }
        sqlx::Error::ColumnDecode { .. } | sqlx::Error::Decode(_) => {
            RepositoryErrorKind::SerializationError
        }
        sqlx::Error::Database(db)
            if db.is_unique_violation()
                || db.is_foreign_key_violation()
                || db.is_check_violation() =>
        {
            RepositoryErrorKind::ConstraintViolation
        }
        sqlx::Error::Database(_) => RepositoryErrorKind::DatabaseError,
        _ => RepositoryErrorKind::Other,
    };

    RepositoryError::new(operation, kind, err.to_string())
}
