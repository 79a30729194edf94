// One module per resource family; every handler validates field presence,
// performs a single store operation, and shapes the JSON response.
pub mod auth;
pub mod content;
pub mod messages;

/// A required field counts as present only when the key exists and the value
/// is non-empty.
pub(crate) fn present(field: &Option<String>) -> Option<&str> {
    field.as_deref().filter(|value| !value.is_empty())
}
