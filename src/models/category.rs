use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use validator::Validate;

// Lo que guardamos en la base de datos
#[derive(Debug, Clone, Deserialize, Serialize, FromRow)]
pub struct Category {
    pub id: i32,
    pub name: String,
    pub slug: String,
}

// Lo que recibimos para crear o editar una categoría.
// Los campos son Option para que un campo ausente sea un error de
// validación (400 con mensaje) y no un rechazo del binding del body.
#[derive(Debug, Deserialize, Validate)]
pub struct CategoryEditor {
    #[validate(
        required(message = "El nombre es obligatorio"),
        length(min = 3, max = 40, message = "El nombre debe tener entre 3 y 40 caracteres")
    )]
    pub name: Option<String>,

    #[validate(required(message = "El slug es obligatorio"))]
    pub slug: Option<String>,
}
