use serde::Serialize;

/// Envoltura uniforme de todas las respuestas: o `data` con contenido y
/// `errors` vacío, o `data` en null y al menos un mensaje en `errors`.
/// Nunca las dos cosas a la vez.
#[derive(Debug, Serialize)]
pub struct ApiResponse<T> {
    pub data: Option<T>,
    pub errors: Vec<String>,
}

impl<T> ApiResponse<T> {
    pub fn ok(data: T) -> Self {
        Self {
            data: Some(data),
            errors: Vec::new(),
        }
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self {
            data: None,
            errors: vec![message.into()],
        }
    }

    pub fn from_errors(errors: Vec<String>) -> Self {
        Self { data: None, errors }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ok_serializa_con_errors_vacio() {
        let value = serde_json::to_value(ApiResponse::ok(7)).unwrap();
        assert_eq!(value, serde_json::json!({ "data": 7, "errors": [] }));
    }

    #[test]
    fn error_serializa_con_data_en_null() {
        let value = serde_json::to_value(ApiResponse::<i32>::error("falló")).unwrap();
        assert_eq!(value, serde_json::json!({ "data": null, "errors": ["falló"] }));
    }

    #[test]
    fn from_errors_conserva_todos_los_mensajes() {
        let envelope = ApiResponse::<i32>::from_errors(vec!["a".into(), "b".into()]);
        assert!(envelope.data.is_none());
        assert_eq!(envelope.errors, vec!["a", "b"]);
    }
}
