use serde::{de::DeserializeOwned, Deserialize, Deserializer};
use serde_json::Value;

/// Message used when the server reports a failure without saying why.
pub const UNKNOWN_ERROR: &str = "unknown error";

/// Status line text for a failure the server reported.
pub fn error_text(message: &str) -> String {
    format!("Error: {}", message)
}

/// Outcome reported by the portal inside a 2xx response.
///
/// Most endpoints answer `{"success": false, "message": "..."}` when the
/// backing service call failed. Any other body is parsed as `T`, so endpoints
/// that never carry a `success` flag (user info) still parse as `Success`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ApiResult<T> {
    Success(T),
    Failure { message: String },
}

impl<T: DeserializeOwned> ApiResult<T> {
    pub fn from_value(value: Value) -> Result<Self, serde_json::Error> {
        if value.get("success").and_then(Value::as_bool) == Some(false) {
            let message = value
                .get("message")
                .and_then(Value::as_str)
                .unwrap_or(UNKNOWN_ERROR)
                .to_owned();
            return Ok(Self::Failure { message });
        }
        serde_json::from_value(value).map(Self::Success)
    }
}

impl<T> ApiResult<T> {
    pub fn is_success(&self) -> bool {
        matches!(self, Self::Success(_))
    }

    /// Text shown in a widget's status line for a failure.
    pub fn error_text(&self) -> Option<String> {
        match self {
            Self::Success(_) => None,
            Self::Failure { message } => Some(error_text(message)),
        }
    }
}

impl<'de, T: DeserializeOwned> Deserialize<'de> for ApiResult<T> {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let value = Value::deserialize(deserializer)?;
        Self::from_value(value).map_err(serde::de::Error::custom)
    }
}

/// Body of a write that only reports whether it worked.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Acknowledged {}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[derive(Debug, Deserialize, PartialEq)]
    struct Payload {
        rows: Vec<u32>,
    }

    #[test]
    fn parses_failure_with_message() {
        let parsed: ApiResult<Payload> =
            serde_json::from_value(json!({"success": false, "message": "timeout"})).unwrap();
        assert_eq!(
            parsed,
            ApiResult::Failure {
                message: "timeout".to_string()
            }
        );
        assert_eq!(parsed.error_text().as_deref(), Some("Error: timeout"));
    }

    #[test]
    fn parses_failure_without_message() {
        let parsed: ApiResult<Payload> =
            serde_json::from_value(json!({"success": false})).unwrap();
        assert_eq!(parsed.error_text().unwrap(), format!("Error: {}", UNKNOWN_ERROR));
    }

    #[test]
    fn parses_success_with_and_without_flag() {
        let flagged: ApiResult<Payload> =
            serde_json::from_value(json!({"success": true, "rows": [1, 2]})).unwrap();
        let bare: ApiResult<Payload> = serde_json::from_value(json!({"rows": [3]})).unwrap();
        assert_eq!(flagged, ApiResult::Success(Payload { rows: vec![1, 2] }));
        assert_eq!(bare, ApiResult::Success(Payload { rows: vec![3] }));
    }

    #[test]
    fn success_with_wrong_shape_is_an_error() {
        let parsed = serde_json::from_value::<ApiResult<Payload>>(json!({"success": true}));
        assert!(parsed.is_err());
    }

    #[test]
    fn acknowledged_ignores_extra_fields() {
        let parsed: ApiResult<Acknowledged> =
            serde_json::from_value(json!({"success": true})).unwrap();
        assert!(parsed.is_success());
    }
}
