use axum::{
    extract::{Json, Path, State},
    http::{header, StatusCode},
    response::{IntoResponse, Response},
};
use validator::Validate;

use crate::{
    db::{DynCategoryStore, StoreError},
    models::{
        category::{Category, CategoryEditor},
        response::ApiResponse,
    },
    utils::validation::flatten_validation_errors,
};

// Mensaje fijo de 404
const MSG_NOT_FOUND: &str = "Contenido no encontrado";

// Cada punto de fallo 500 lleva su propio código de diagnóstico,
// para ubicar el sitio exacto desde la respuesta o los logs
const ERR_LIST: &str = "01X01 - Error interno consultando las categorías";
const ERR_GET: &str = "01X02 - Error interno consultando la categoría";
const ERR_CREATE_STORE: &str = "01X03 - No se pudo guardar la categoría";
const ERR_CREATE: &str = "01X04 - Error interno creando la categoría";
const ERR_UPDATE_STORE: &str = "01X05 - No se pudo actualizar la categoría";
const ERR_UPDATE: &str = "01X06 - Error interno actualizando la categoría";
const ERR_DELETE_STORE: &str = "01X07 - No se pudo eliminar la categoría";
const ERR_DELETE: &str = "01X08 - Error interno eliminando la categoría";

fn not_found() -> Response {
    (
        StatusCode::NOT_FOUND,
        Json(ApiResponse::<Category>::error(MSG_NOT_FOUND)),
    )
        .into_response()
}

fn validation_failed(errors: &validator::ValidationErrors) -> Response {
    (
        StatusCode::BAD_REQUEST,
        Json(ApiResponse::<Category>::from_errors(
            flatten_validation_errors(errors),
        )),
    )
        .into_response()
}

fn internal_error(message: &str) -> Response {
    (
        StatusCode::INTERNAL_SERVER_ERROR,
        Json(ApiResponse::<Category>::error(message)),
    )
        .into_response()
}

// Un commit fallido y cualquier otro error del almacén salen con códigos distintos
fn write_error(error: &StoreError, store_message: &str, generic_message: &str) -> Response {
    match error {
        StoreError::Write(_) => internal_error(store_message),
        StoreError::Database(_) => internal_error(generic_message),
    }
}

// GET /v1/categories
pub async fn list_categories_handler(State(store): State<DynCategoryStore>) -> impl IntoResponse {
    match store.list().await {
        Ok(categories) => (StatusCode::OK, Json(ApiResponse::ok(categories))).into_response(),
        Err(e) => {
            tracing::error!("Error listando categorías: {:?}", e);
            internal_error(ERR_LIST)
        }
    }
}

// GET /v1/categories/:id
pub async fn get_category_handler(
    Path(id): Path<i32>,
    State(store): State<DynCategoryStore>,
) -> impl IntoResponse {
    match store.get_by_id(id).await {
        Ok(Some(category)) => (StatusCode::OK, Json(ApiResponse::ok(category))).into_response(),
        Ok(None) => not_found(),
        Err(e) => {
            tracing::error!("Error buscando categoría {}: {:?}", id, e);
            internal_error(ERR_GET)
        }
    }
}

// POST /v1/categories
pub async fn create_category_handler(
    State(store): State<DynCategoryStore>,
    Json(body): Json<CategoryEditor>,
) -> impl IntoResponse {
    // Validamos antes de tocar el almacén
    if let Err(errors) = body.validate() {
        return validation_failed(&errors);
    }

    // validate() ya garantizó que ambos campos vienen
    let name = body.name.unwrap_or_default();
    let slug = body.slug.unwrap_or_default().to_lowercase();

    match store.add(&name, &slug).await {
        Ok(category) => {
            let location = format!("/v1/categories/{}", category.id);
            (
                StatusCode::CREATED,
                [(header::LOCATION, location)],
                Json(ApiResponse::ok(category)),
            )
                .into_response()
        }
        Err(e) => {
            tracing::error!("Error creando categoría: {:?}", e);
            write_error(&e, ERR_CREATE_STORE, ERR_CREATE)
        }
    }
}

// PUT /v1/categories/:id
pub async fn update_category_handler(
    Path(id): Path<i32>,
    State(store): State<DynCategoryStore>,
    Json(body): Json<CategoryEditor>,
) -> impl IntoResponse {
    if let Err(errors) = body.validate() {
        return validation_failed(&errors);
    }

    // Verificamos si existe primero para no dar falsos positivos
    let existing = match store.get_by_id(id).await {
        Ok(row) => row,
        Err(e) => {
            tracing::error!("Error buscando categoría {}: {:?}", id, e);
            return internal_error(ERR_UPDATE);
        }
    };

    let mut category = match existing {
        Some(row) => row,
        None => return not_found(),
    };

    // Solo cambian name y slug; el id no se toca
    category.name = body.name.unwrap_or_default();
    category.slug = body.slug.unwrap_or_default().to_lowercase();

    match store.update(&category).await {
        Ok(updated) => (StatusCode::OK, Json(ApiResponse::ok(updated))).into_response(),
        Err(e) => {
            tracing::error!("Error actualizando categoría {}: {:?}", id, e);
            write_error(&e, ERR_UPDATE_STORE, ERR_UPDATE)
        }
    }
}

// DELETE /v1/categories/:id
pub async fn delete_category_handler(
    Path(id): Path<i32>,
    State(store): State<DynCategoryStore>,
) -> impl IntoResponse {
    let existing = match store.get_by_id(id).await {
        Ok(row) => row,
        Err(e) => {
            tracing::error!("Error buscando categoría {}: {:?}", id, e);
            return internal_error(ERR_DELETE);
        }
    };

    let category = match existing {
        Some(row) => row,
        None => return not_found(),
    };

    match store.remove(&category).await {
        // Devolvemos el estado que tenía la fila antes de borrarla
        Ok(()) => (StatusCode::OK, Json(ApiResponse::ok(category))).into_response(),
        Err(e) => {
            tracing::error!("Error eliminando categoría {}: {:?}", id, e);
            write_error(&e, ERR_DELETE_STORE, ERR_DELETE)
        }
    }
}
