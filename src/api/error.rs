use serde_json::Value;
use thiserror::Error;

const NETWORK_MESSAGE: &str = "Network error - please check your connection";
const FALLBACK_MESSAGE: &str = "An error occurred";

/// What every failed call reports to the page. `status` is 0 when no HTTP
/// response was received.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("{message}")]
pub struct ApiError {
    pub message: String,
    pub status: u16,
}

impl ApiError {
    pub fn new(message: impl Into<String>, status: u16) -> Self {
        ApiError {
            message: message.into(),
            status,
        }
    }

    pub fn network() -> Self {
        ApiError::new(NETWORK_MESSAGE, 0)
    }

    /// Error for a non-2xx response, built from the backend's `detail` field.
    pub fn from_body(status: u16, body: &str) -> Self {
        let detail = serde_json::from_str::<Value>(body)
            .ok()
            .and_then(|v| v.get("detail").cloned());
        ApiError::new(detail_message(detail.as_ref()), status)
    }

    pub fn is_unauthorized(&self) -> bool {
        self.status == 401
    }
}

fn detail_message(detail: Option<&Value>) -> String {
    match detail {
        Some(Value::Array(items)) => items
            .iter()
            .map(|item| {
                let field = match item.get("loc") {
                    Some(Value::Array(parts)) => parts.iter().map(loc_part).collect::<Vec<_>>().join("."),
                    _ => "field".to_string(),
                };
                let msg = item.get("msg").map(loc_part).unwrap_or_default();
                format!("{field}: {msg}")
            })
            .collect::<Vec<_>>()
            .join(", "),
        Some(Value::String(message)) => message.clone(),
        Some(Value::Object(fields)) => match fields.get("msg") {
            Some(Value::String(msg)) if !msg.is_empty() => msg.clone(),
            _ => FALLBACK_MESSAGE.to_string(),
        },
        _ => FALLBACK_MESSAGE.to_string(),
    }
}

fn loc_part(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        Value::Null => String::new(),
        other => other.to_string(),
    }
}

impl From<gloo_net::Error> for ApiError {
    fn from(err: gloo_net::Error) -> Self {
        match err {
            gloo_net::Error::JsError(js) => {
                log::warn!("request failed: {js}");
                ApiError::network()
            }
            gloo_net::Error::SerdeError(e) => ApiError::new(e.to_string(), 0),
            gloo_net::Error::GlooError(message) => ApiError::new(message, 0),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validation_detail_list() {
        let body = r#"{"detail":[
            {"loc":["body","email"],"msg":"field required","type":"value_error.missing"},
            {"loc":["body","answers",0,"q_id"],"msg":"value is not a valid integer"},
            {"msg":"bad"}
        ]}"#;
        let err = ApiError::from_body(422, body);
        assert_eq!(
            err.message,
            "body.email: field required, body.answers.0.q_id: value is not a valid integer, field: bad"
        );
        assert_eq!(err.status, 422);
    }

    #[test]
    fn test_string_and_object_detail() {
        assert_eq!(
            ApiError::from_body(400, r#"{"detail":"Email already registered"}"#).message,
            "Email already registered"
        );
        assert_eq!(
            ApiError::from_body(400, r#"{"detail":{"msg":"Budget month invalid"}}"#).message,
            "Budget month invalid"
        );
    }

    #[test]
    fn test_missing_detail_falls_back() {
        assert_eq!(ApiError::from_body(500, r#"{"error":"boom"}"#).message, "An error occurred");
        assert_eq!(ApiError::from_body(502, "<html>bad gateway</html>").message, "An error occurred");
        assert_eq!(ApiError::from_body(400, r#"{"detail":{"code":3}}"#).message, "An error occurred");
    }

    #[test]
    fn test_network_error() {
        let err = ApiError::network();
        assert_eq!(err.status, 0);
        assert_eq!(err.to_string(), "Network error - please check your connection");
        assert!(!err.is_unauthorized());
        assert!(ApiError::new("nope", 401).is_unauthorized());
    }
}
