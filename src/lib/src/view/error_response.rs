use serde::{Deserialize, Serialize};
use serde_json::Value;

/// The fields we look at in a failed response body. FastAPI style servers
/// answer with `detail`, which is either a string or a list of validation
/// entries; other servers send `message`.
#[derive(Serialize, Deserialize, Debug, Default)]
pub struct ErrorResponse {
    #[serde(default)]
    pub detail: Option<Value>,
    #[serde(default)]
    pub message: Option<String>,
}

impl ErrorResponse {
    /// Human readable message, `None` when the body carried nothing usable
    pub fn message(&self) -> Option<String> {
        if let Some(detail) = &self.detail {
            if let Some(msg) = detail_message(detail) {
                return Some(msg);
            }
        }
        self.message
            .as_ref()
            .filter(|m| !m.trim().is_empty())
            .cloned()
    }
}

fn detail_message(detail: &Value) -> Option<String> {
    match detail {
        Value::String(s) if !s.trim().is_empty() => Some(s.to_owned()),
        Value::Array(entries) => {
            let parts: Vec<String> = entries.iter().filter_map(validation_entry).collect();
            if parts.is_empty() {
                None
            } else {
                Some(parts.join("; "))
            }
        }
        Value::Object(_) => detail_message(detail.get("msg")?),
        _ => None,
    }
}

// {"loc": ["body", "email"], "msg": "value is not a valid email address", ...}
fn validation_entry(entry: &Value) -> Option<String> {
    let msg = entry.get("msg")?.as_str()?;
    let field = entry
        .get("loc")
        .and_then(Value::as_array)
        .and_then(|loc| loc.last())
        .map(|last| match last {
            Value::String(s) => s.to_owned(),
            other => other.to_string(),
        });
    match field {
        Some(field) => Some(format!("{field}: {msg}")),
        None => Some(msg.to_string()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_string_detail() {
        let body: ErrorResponse = serde_json::from_str(r#"{"detail": "School not found"}"#).unwrap();
        assert_eq!(body.message().as_deref(), Some("School not found"));
    }

    #[test]
    fn test_validation_detail_list() {
        let body: ErrorResponse = serde_json::from_str(
            r#"{"detail": [
                {"loc": ["body", "amount"], "msg": "Input should be a valid number", "type": "float_parsing"},
                {"loc": ["body", "due_date"], "msg": "Field required", "type": "missing"}
            ]}"#,
        )
        .unwrap();
        assert_eq!(
            body.message().as_deref(),
            Some("amount: Input should be a valid number; due_date: Field required")
        );
    }

    #[test]
    fn test_message_field_and_empty_body() {
        let body: ErrorResponse = serde_json::from_str(r#"{"message": "Token expired"}"#).unwrap();
        assert_eq!(body.message().as_deref(), Some("Token expired"));

        let body: ErrorResponse = serde_json::from_str(r#"{"detail": ""}"#).unwrap();
        assert_eq!(body.message(), None);
    }
}
