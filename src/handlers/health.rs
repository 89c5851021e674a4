use axum::http::StatusCode;

// GET / (sonda de vida: 200 con cuerpo vacío, sin tocar el almacén)
pub async fn health_handler() -> StatusCode {
    StatusCode::OK
}
