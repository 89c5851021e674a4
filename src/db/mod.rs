use std::env;
use std::sync::Arc;

use async_trait::async_trait;
use sqlx::{postgres::PgPoolOptions, Pool, Postgres};

use crate::models::category::Category;

pub mod memory;
pub mod postgres;

// Definimos un alias para "Pool<Postgres>"
pub type DbPool = Pool<Postgres>;

pub async fn init_db() -> DbPool {
    // Leemos la URL del archivo .env
    let db_url = env::var("DATABASE_URL").expect("DATABASE_URL no está definido en .env");

    // Creamos el pool de conexiones
    PgPoolOptions::new()
        .max_connections(5) // Máximo 5 conexiones simultáneas (ajustable)
        .connect(&db_url)
        .await
        .expect("Error al conectar a la Base de Datos. ¿Está corriendo Postgres?")
}

/// Fallos del almacén, en dos clases para poder distinguir en la
/// respuesta un commit fallido de cualquier otro error.
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    /// Una escritura (insert/update/delete) no llegó a confirmarse
    #[error("error de escritura: {0}")]
    Write(String),

    /// Cualquier otro fallo consultando el almacén
    #[error("error de base de datos: {0}")]
    Database(String),
}

/// Operaciones CRUD sobre la tabla de categorías.
///
/// La ausencia de una fila no es un error: `get_by_id` devuelve `None`
/// y es el handler quien decide el 404. El id lo asigna el almacén.
#[async_trait]
pub trait CategoryStore {
    async fn list(&self) -> Result<Vec<Category>, StoreError>;
    async fn get_by_id(&self, id: i32) -> Result<Option<Category>, StoreError>;
    async fn add(&self, name: &str, slug: &str) -> Result<Category, StoreError>;
    async fn update(&self, category: &Category) -> Result<Category, StoreError>;
    async fn remove(&self, category: &Category) -> Result<(), StoreError>;
}

pub type DynCategoryStore = Arc<dyn CategoryStore + Send + Sync>;
