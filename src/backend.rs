//! Client for the remote search backend.
//!
//! The backend exposes `GET /health` returning a JSON object with optional
//! `total_vectors`, `status` and `index_name` fields. This module fetches that
//! payload and reshapes it into the `/api/stats` response contract. Missing or
//! mistyped fields fall back to defaults rather than failing the request.

use std::time::Duration;

use serde::Serialize;
use serde_json::{Number, Value};

/// Status string the backend reports when it is healthy
const HEALTHY_STATUS: &str = "healthy";

/// Status tag returned to callers on a successful proxy call
const SUCCESS_STATUS: &str = "success";

/// Errors from the outbound backend call.
///
/// All variants are surfaced to callers the same way (503), the split only
/// matters for logs.
#[derive(Debug, thiserror::Error)]
pub enum BackendError {
    #[error("{0}")]
    Request(reqwest::Error),

    #[error("backend returned HTTP {0}")]
    Status(reqwest::StatusCode),

    #[error("invalid JSON in backend response: {0}")]
    Decode(reqwest::Error),

    #[error("expected a JSON object from backend, got {0}")]
    UnexpectedPayload(&'static str),

    #[error("failed to create HTTP client: {0}")]
    Client(reqwest::Error),
}

/// Reshaped backend statistics returned by `/api/stats`
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BackendStats {
    pub status: &'static str,
    pub total_profiles: Number,
    pub backend_healthy: bool,
    pub index_name: String,
}

impl BackendStats {
    /// Map the backend's health payload onto the stats contract.
    ///
    /// `payload` must be a JSON object; absent or mistyped fields take their
    /// defaults (`0`, `false`, `fallback_index_name`).
    pub fn from_health_payload(
        payload: &Value,
        fallback_index_name: &str,
    ) -> Result<Self, BackendError> {
        let fields = payload
            .as_object()
            .ok_or_else(|| BackendError::UnexpectedPayload(json_kind(payload)))?;

        let total_profiles = fields
            .get("total_vectors")
            .and_then(|value| match value {
                Value::Number(n) => Some(n.clone()),
                _ => None,
            })
            .unwrap_or_else(|| Number::from(0));

        let backend_healthy = fields.get("status").and_then(Value::as_str) == Some(HEALTHY_STATUS);

        let index_name = fields
            .get("index_name")
            .and_then(Value::as_str)
            .unwrap_or(fallback_index_name)
            .to_string();

        Ok(Self {
            status: SUCCESS_STATUS,
            total_profiles,
            backend_healthy,
            index_name,
        })
    }
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}

/// HTTP client bound to one backend base URL.
///
/// Cheap to clone; the underlying `reqwest::Client` shares its connection pool.
#[derive(Clone, Debug)]
pub struct BackendClient {
    http_client: reqwest::Client,
    health_url: String,
    fallback_index_name: String,
}

impl BackendClient {
    pub fn new(
        base_url: &str,
        timeout: Duration,
        fallback_index_name: impl Into<String>,
    ) -> Result<Self, BackendError> {
        // Redirects are not followed: a 3xx counts as a failed call
        let http_client = reqwest::Client::builder()
            .timeout(timeout)
            .redirect(reqwest::redirect::Policy::none())
            .build()
            .map_err(BackendError::Client)?;

        Ok(Self {
            http_client,
            health_url: format!("{}/health", base_url.trim_end_matches('/')),
            fallback_index_name: fallback_index_name.into(),
        })
    }

    /// URL of the backend health endpoint this client queries
    pub fn health_url(&self) -> &str {
        &self.health_url
    }

    /// Fetch the backend health payload and reshape it into `BackendStats`.
    ///
    /// Issues exactly one GET; there is no retry.
    pub async fn fetch_stats(&self) -> Result<BackendStats, BackendError> {
        let response = self
            .http_client
            .get(&self.health_url)
            .send()
            .await
            .map_err(BackendError::Request)?;

        if !response.status().is_success() {
            return Err(BackendError::Status(response.status()));
        }

        let payload: Value = response.json().await.map_err(BackendError::Decode)?;

        BackendStats::from_health_payload(&payload, &self.fallback_index_name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_full_payload_is_reshaped() {
        let payload = json!({
            "total_vectors": 42,
            "status": "healthy",
            "index_name": "therapist-search",
        });
        let stats = BackendStats::from_health_payload(&payload, "fallback").unwrap();
        assert_eq!(
            serde_json::to_value(&stats).unwrap(),
            json!({
                "status": "success",
                "total_profiles": 42,
                "backend_healthy": true,
                "index_name": "therapist-search",
            })
        );
    }

    #[test]
    fn test_empty_payload_uses_defaults() {
        let stats = BackendStats::from_health_payload(&json!({}), "therapist-search").unwrap();
        assert_eq!(stats.total_profiles, Number::from(0));
        assert!(!stats.backend_healthy);
        assert_eq!(stats.index_name, "therapist-search");
    }

    #[test]
    fn test_non_healthy_status() {
        let payload = json!({"status": "degraded"});
        let stats = BackendStats::from_health_payload(&payload, "x").unwrap();
        assert!(!stats.backend_healthy);

        let payload = json!({"status": "Healthy"});
        let stats = BackendStats::from_health_payload(&payload, "x").unwrap();
        assert!(!stats.backend_healthy);
    }

    #[test]
    fn test_mistyped_fields_fall_back() {
        let payload = json!({
            "total_vectors": "many",
            "status": true,
            "index_name": 7,
        });
        let stats = BackendStats::from_health_payload(&payload, "therapist-search").unwrap();
        assert_eq!(stats.total_profiles, Number::from(0));
        assert!(!stats.backend_healthy);
        assert_eq!(stats.index_name, "therapist-search");
    }

    #[test]
    fn test_float_count_is_preserved() {
        let payload = json!({"total_vectors": 1234.0});
        let stats = BackendStats::from_health_payload(&payload, "x").unwrap();
        assert_eq!(stats.total_profiles.as_f64(), Some(1234.0));
    }

    #[test]
    fn test_non_object_payload_is_rejected() {
        let err = BackendStats::from_health_payload(&json!([1, 2]), "x").unwrap_err();
        assert!(matches!(err, BackendError::UnexpectedPayload("an array")));
        assert_eq!(
            err.to_string(),
            "expected a JSON object from backend, got an array"
        );
    }

    #[test]
    fn test_status_error_names_the_code() {
        let err = BackendError::Status(reqwest::StatusCode::FOUND);
        assert_eq!(err.to_string(), "backend returned HTTP 302 Found");
    }

    #[test]
    fn test_health_url_trims_trailing_slash() {
        let client =
            BackendClient::new("http://backend.local/", Duration::from_secs(1), "x").unwrap();
        assert_eq!(client.health_url(), "http://backend.local/health");

        let client =
            BackendClient::new("http://backend.local", Duration::from_secs(1), "x").unwrap();
        assert_eq!(client.health_url(), "http://backend.local/health");
    }
}
