use validator::ValidationErrors;

// Aplana los errores campo a campo en una lista de mensajes legibles,
// sin deduplicar y sin anteponer el nombre del campo.
pub fn flatten_validation_errors(errors: &ValidationErrors) -> Vec<String> {
    errors
        .field_errors()
        .into_iter()
        .flat_map(|(_, field_errors)| field_errors.iter())
        .map(|error| match &error.message {
            Some(message) => message.to_string(),
            None => error.code.to_string(),
        })
        .collect()
}
