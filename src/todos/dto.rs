use serde::Deserialize;

/// Body for creating or fully replacing a todo. The owner is always taken
/// from the token, never from the payload.
#[derive(Debug, Deserialize)]
pub struct TodoRequest {
    pub title: String,
    pub description: String,
    pub priority: i32,
    pub complete: bool,
}
