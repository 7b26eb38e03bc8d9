use serde::{Deserialize, Serialize};

/// Uniform response wrapper returned by every backend endpoint.
///
/// Field names must stay bit-exact with the backend contract
/// (`resultStatus`, `isSuccess` are camelCase on the wire).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiEnvelope<T> {
    pub data: Option<T>,

    #[serde(rename = "resultStatus", default)]
    pub result_status: i32,

    #[serde(default)]
    pub messages: Vec<String>,

    #[serde(rename = "isSuccess")]
    pub is_success: bool,
}

impl<T> ApiEnvelope<T> {
    /// First backend message if present, otherwise the given fallback.
    pub fn first_message_or(&self, fallback: &str) -> String {
        self.messages
            .first()
            .cloned()
            .unwrap_or_else(|| fallback.to_string())
    }

    /// Consume the envelope, yielding the payload on success or the
    /// first message (or fallback) on failure.
    pub fn into_result(self, fallback: &str) -> Result<Option<T>, String> {
        if self.is_success {
            Ok(self.data)
        } else {
            Err(self.first_message_or(fallback))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn deserializes_camel_case_fields() {
        let json = r#"{
            "data": [1, 2, 3],
            "resultStatus": 200,
            "messages": [],
            "isSuccess": true
        }"#;
        let env: ApiEnvelope<Vec<i32>> = serde_json::from_str(json).unwrap();
        assert!(env.is_success);
        assert_eq!(env.result_status, 200);
        assert_eq!(env.data, Some(vec![1, 2, 3]));
    }

    #[test]
    fn null_data_is_allowed() {
        let json = r#"{"data": null, "resultStatus": 400, "messages": ["bad request"], "isSuccess": false}"#;
        let env: ApiEnvelope<String> = serde_json::from_str(json).unwrap();
        assert!(!env.is_success);
        assert!(env.data.is_none());
    }

    #[test]
    fn first_message_or_prefers_backend_message() {
        let env = ApiEnvelope::<()> {
            data: None,
            result_status: 400,
            messages: vec!["quantity must be positive".into(), "second".into()],
            is_success: false,
        };
        assert_eq!(
            env.first_message_or("Something went wrong"),
            "quantity must be positive"
        );
    }

    #[test]
    fn first_message_or_falls_back_when_empty() {
        let env = ApiEnvelope::<()> {
            data: None,
            result_status: 500,
            messages: vec![],
            is_success: false,
        };
        assert_eq!(
            env.first_message_or("Something went wrong"),
            "Something went wrong"
        );
    }

    #[test]
    fn into_result_maps_both_channels() {
        let ok = ApiEnvelope {
            data: Some(7),
            result_status: 200,
            messages: vec![],
            is_success: true,
        };
        assert_eq!(ok.into_result("fallback"), Ok(Some(7)));

        let err = ApiEnvelope::<i32> {
            data: None,
            result_status: 400,
            messages: vec!["denied".into()],
            is_success: false,
        };
        assert_eq!(err.into_result("fallback"), Err("denied".to_string()));
    }
}
