//! Broadcast envelope format
//!
//! Defines the JSON message format written to event-stream subscribers.

use serde::{Deserialize, Serialize};

/// Server-to-subscriber message
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Envelope {
    /// Search succeeded; carries the provider's document verbatim
    Result { payload: serde_json::Value },
    /// Search failed; carries the failure message
    Error { error: String },
    /// Sent once, privately, to a newly joined subscriber; never broadcast
    Connected,
}

impl Envelope {
    /// Serialize to the wire form written into an SSE `data:` frame
    pub fn to_frame(&self) -> String {
        serde_json::to_string(self).unwrap_or_else(|_| "{}".to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_connected_wire_form() {
        assert_eq!(Envelope::Connected.to_frame(), r#"{"type":"connected"}"#);
    }

    #[test]
    fn test_result_wire_form() {
        let envelope = Envelope::Result {
            payload: json!({"web": {"results": []}}),
        };
        let value: serde_json::Value = serde_json::from_str(&envelope.to_frame()).unwrap();
        assert_eq!(value["type"], "result");
        assert!(value["payload"]["web"]["results"].is_array());
    }

    #[test]
    fn test_error_wire_form() {
        let envelope = Envelope::Error {
            error: "Brave API error: 503".to_string(),
        };
        let value: serde_json::Value = serde_json::from_str(&envelope.to_frame()).unwrap();
        assert_eq!(value["type"], "error");
        assert_eq!(value["error"], "Brave API error: 503");
    }
}
