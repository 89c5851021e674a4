use std::collections::HashMap;
use std::sync::atomic::{AtomicI32, Ordering};

use async_trait::async_trait;
use parking_lot::RwLock;

use crate::db::{CategoryStore, StoreError};
use crate::models::category::Category;

/// Implementación en memoria de [`CategoryStore`].
///
/// Pensada para las pruebas: mismas semánticas que Postgres (ids
/// positivos asignados por el almacén, last-write-wins por fila) sin
/// necesidad de una base de datos corriendo.
pub struct MemCategoryStore {
    rows: RwLock<HashMap<i32, Category>>,
    next_id: AtomicI32,
}

impl MemCategoryStore {
    pub fn new() -> Self {
        Self {
            rows: RwLock::new(HashMap::new()),
            next_id: AtomicI32::new(1),
        }
    }
}

impl Default for MemCategoryStore {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl CategoryStore for MemCategoryStore {
    async fn list(&self) -> Result<Vec<Category>, StoreError> {
        let mut all: Vec<Category> = self.rows.read().values().cloned().collect();
        all.sort_by_key(|c| c.id);
        Ok(all)
    }

    async fn get_by_id(&self, id: i32) -> Result<Option<Category>, StoreError> {
        Ok(self.rows.read().get(&id).cloned())
    }

    async fn add(&self, name: &str, slug: &str) -> Result<Category, StoreError> {
        let id = self.next_id.fetch_add(1, Ordering::SeqCst);
        let category = Category {
            id,
            name: name.to_string(),
            slug: slug.to_string(),
        };
        self.rows.write().insert(id, category.clone());
        Ok(category)
    }

    async fn update(&self, category: &Category) -> Result<Category, StoreError> {
        self.rows.write().insert(category.id, category.clone());
        Ok(category.clone())
    }

    async fn remove(&self, category: &Category) -> Result<(), StoreError> {
        self.rows.write().remove(&category.id);
        Ok(())
    }
}
