use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Error body returned by the backend.
///
/// Handlers answer with either `{"message": ...}` or the framework's
/// `{"detail": ...}`, where `detail` is a string or a list of field errors.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ErrorResponse {
    #[serde(default)]
    pub status: Option<String>,
    #[serde(default)]
    pub message: Option<String>,
    #[serde(default)]
    pub detail: Option<Value>,
}

impl ErrorResponse {
    pub fn parse(body: &[u8]) -> Option<Self> {
        if body.is_empty() {
            return None;
        }
        serde_json::from_slice(body).ok()
    }

    pub fn into_message(self) -> Option<String> {
        if let Some(message) = self.message.filter(|m| !m.trim().is_empty()) {
            return Some(message);
        }

        match self.detail? {
            Value::String(detail) if !detail.trim().is_empty() => Some(detail),
            Value::Array(items) => {
                let messages: Vec<String> = items
                    .iter()
                    .filter_map(|item| {
                        let msg = item.get("msg")?.as_str()?;
                        let field = item
                            .get("loc")
                            .and_then(Value::as_array)
                            .and_then(|loc| loc.last())
                            .and_then(Value::as_str);
                        Some(match field {
                            Some(field) => format!("{field}: {msg}"),
                            None => msg.to_string(),
                        })
                    })
                    .collect();

                if messages.is_empty() {
                    None
                } else {
                    Some(messages.join("; "))
                }
            }
            _ => None,
        }
    }
}
