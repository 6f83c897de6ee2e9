use serde::{Deserialize, Serialize};

/// Envelope every resource endpoint answers with.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct ApiResponse<T> {
    pub success: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<T>,
}

impl<T> ApiResponse<T> {
    pub fn ok(data: T) -> Self {
        Self {
            success: true,
            data: Some(data),
        }
    }
}

impl ApiResponse<()> {
    pub fn failure() -> Self {
        Self {
            success: false,
            data: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn failure_has_no_data_key() {
        let value = serde_json::to_value(ApiResponse::failure()).unwrap();
        assert_eq!(value, json!({ "success": false }));
    }

    #[test]
    fn ok_wraps_payload() {
        let value = serde_json::to_value(ApiResponse::ok(json!({}))).unwrap();
        assert_eq!(value, json!({ "success": true, "data": {} }));
    }
}
