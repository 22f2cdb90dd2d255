use serde::{Deserialize, Serialize};
use serde_json::Value;
use utoipa::ToSchema;

#[derive(Clone, Copy, Debug, Deserialize, PartialEq, Serialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum EnvelopeStatus {
    Success,
    Error,
}

/// Uniform wrapper around every API response body.
#[derive(Clone, Debug, Deserialize, PartialEq, Serialize, ToSchema)]
#[serde(bound(deserialize = "T: Deserialize<'de>"))]
pub struct Envelope<T> {
    /// Whether the request succeeded.
    pub status: EnvelopeStatus,
    /// Human-readable summary.
    pub message: String,
    /// HTTP status code repeated in the body.
    pub code: u16,
    /// Response payload on success.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub data: Option<T>,
    /// Error details, e.g. field-level validation messages.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub errors: Option<Value>,
}

impl<T> Envelope<T> {
    pub fn success(data: T, message: impl Into<String>) -> Self {
        Self {
            status: EnvelopeStatus::Success,
            message: message.into(),
            code: 200,
            data: Some(data),
            errors: None,
        }
    }

    pub fn error(message: impl Into<String>, code: u16, errors: Option<Value>) -> Self {
        Self {
            status: EnvelopeStatus::Error,
            message: message.into(),
            code,
            data: None,
            errors,
        }
    }

    /// Take the payload out of a successful envelope, or the message out of a
    /// failed one.
    pub fn into_result(self) -> Result<T, String> {
        match (self.status, self.data) {
            (EnvelopeStatus::Success, Some(data)) => Ok(data),
            (_, _) => Err(self.message),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn success_shape() {
        let envelope = Envelope::success(vec![1, 2], "ok");
        let value = serde_json::to_value(&envelope).unwrap();
        assert_eq!(
            value,
            json!({"status": "success", "message": "ok", "code": 200, "data": [1, 2]})
        );
        assert_eq!(envelope.into_result(), Ok(vec![1, 2]));
    }

    #[test]
    fn error_shape() {
        let envelope: Envelope<()> =
            Envelope::error("Validation error", 422, Some(json!({"city": ["required"]})));
        let value = serde_json::to_value(&envelope).unwrap();
        assert_eq!(value["status"], "error");
        assert_eq!(value["code"], 422);
        assert_eq!(value["errors"]["city"][0], "required");
        assert!(value.get("data").is_none());
        assert_eq!(envelope.into_result(), Err("Validation error".to_string()));
    }
}
