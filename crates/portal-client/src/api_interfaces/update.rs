use serde::Serialize;

/// Body of the write endpoints: flip one checkbox-like setting.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct UpdateRequest {
    pub id: String,
    pub checked: bool,
}
