use async_trait::async_trait;

use crate::db::{CategoryStore, DbPool, StoreError};
use crate::models::category::Category;

/// Almacén real sobre la tabla `categories` de Postgres.
///
/// Cada operación es una sola sentencia, así que cada mutación
/// confirma exactamente un commit.
pub struct PgCategoryStore {
    pool: DbPool,
}

impl PgCategoryStore {
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl CategoryStore for PgCategoryStore {
    async fn list(&self) -> Result<Vec<Category>, StoreError> {
        sqlx::query_as::<_, Category>("SELECT id, name, slug FROM categories ORDER BY id ASC")
            .fetch_all(&self.pool)
            .await
            .map_err(|e| StoreError::Database(e.to_string()))
    }

    async fn get_by_id(&self, id: i32) -> Result<Option<Category>, StoreError> {
        sqlx::query_as::<_, Category>("SELECT id, name, slug FROM categories WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| StoreError::Database(e.to_string()))
    }

    async fn add(&self, name: &str, slug: &str) -> Result<Category, StoreError> {
        // RETURNING nos devuelve la fila ya con el id asignado por la secuencia
        sqlx::query_as::<_, Category>(
            "INSERT INTO categories (name, slug) VALUES ($1, $2) RETURNING id, name, slug",
        )
        .bind(name)
        .bind(slug)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| StoreError::Write(e.to_string()))
    }

    async fn update(&self, category: &Category) -> Result<Category, StoreError> {
        sqlx::query_as::<_, Category>(
            "UPDATE categories SET name = $1, slug = $2 WHERE id = $3 RETURNING id, name, slug",
        )
        .bind(&category.name)
        .bind(&category.slug)
        .bind(category.id)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| StoreError::Write(e.to_string()))
    }

    async fn remove(&self, category: &Category) -> Result<(), StoreError> {
        sqlx::query("DELETE FROM categories WHERE id = $1")
            .bind(category.id)
            .execute(&self.pool)
            .await
            .map_err(|e| StoreError::Write(e.to_string()))?;
        Ok(())
    }
}
