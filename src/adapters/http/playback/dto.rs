//! HTTP DTOs for the playback token endpoint.

use serde::{Deserialize, Serialize};

use crate::application::handlers::MintPlaybackTokenResult;

// ════════════════════════════════════════════════════════════════════════════════
// Request DTOs
// ════════════════════════════════════════════════════════════════════════════════

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MintTokenRequest {
    #[serde(default)]
    pub video_id: String,
}

// ════════════════════════════════════════════════════════════════════════════════
// Response DTOs
// ════════════════════════════════════════════════════════════════════════════════

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MintTokenResponse {
    pub token: String,
    pub video_id: String,
    pub customer_subdomain: String,
    /// Seconds until the token expires.
    pub expires_in: u64,
}

impl From<MintPlaybackTokenResult> for MintTokenResponse {
    fn from(result: MintPlaybackTokenResult) -> Self {
        Self {
            token: result.token,
            video_id: result.video_id.as_str().to_string(),
            customer_subdomain: result.customer_subdomain,
            expires_in: result.expires_in,
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct ErrorResponse {
    pub error: String,
}

impl ErrorResponse {
    pub fn new(error: impl Into<String>) -> Self {
        Self {
            error: error.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn request_reads_camel_case_video_id() {
        let req: MintTokenRequest = serde_json::from_str(r#"{"videoId": "vid123"}"#).unwrap();
        assert_eq!(req.video_id, "vid123");
    }

    #[test]
    fn request_without_video_id_defaults_to_empty() {
        let req: MintTokenRequest = serde_json::from_str("{}").unwrap();
        assert_eq!(req.video_id, "");
    }

    #[test]
    fn response_serializes_camel_case() {
        let response = MintTokenResponse {
            token: "t".to_string(),
            video_id: "vid123".to_string(),
            customer_subdomain: "customer-abc".to_string(),
            expires_in: 3600,
        };

        let json = serde_json::to_value(&response).unwrap();

        assert_eq!(
            json,
            serde_json::json!({
                "token": "t",
                "videoId": "vid123",
                "customerSubdomain": "customer-abc",
                "expiresIn": 3600
            })
        );
    }
}
