//! Server types for HTTP API
//!
//! Request bodies are validated here before anything reaches the core.

use serde::{Deserialize, Serialize};

use crate::core::{MathParams, TextParams};

/// API version for capability detection
pub const API_VERSION: &str = env!("CARGO_PKG_VERSION");

pub const SERVER_NAME: &str = "MCP Math-Text-Analysis HTTP Server";
pub const SERVER_DESCRIPTION: &str = "HTTP wrapper for MCP server functionality";

// ============================================================================
// Requests
// ============================================================================

/// POST /math body
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MathRequest {
    pub operation: String,
    pub values: Vec<f64>,
    #[serde(default)]
    pub a: Option<f64>,
    #[serde(default)]
    pub b: Option<f64>,
    #[serde(default)]
    pub c: Option<f64>,
}

impl MathRequest {
    pub fn params(&self) -> MathParams {
        MathParams {
            values: self.values.clone(),
            a: self.a,
            b: self.b,
            c: self.c,
        }
    }
}

/// POST /text body. `extraction_type` doubles as the transform mode.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TextRequest {
    pub text: String,
    pub operation: String,
    #[serde(default, alias = "mode")]
    pub extraction_type: Option<String>,
}

impl TextRequest {
    pub fn params(&self) -> TextParams {
        TextParams {
            text: self.text.clone(),
            mode: self.extraction_type.clone(),
        }
    }
}

// ============================================================================
// Responses
// ============================================================================

/// Envelope for successful operation results
#[derive(Debug, Clone, Serialize)]
pub struct OperationResponse<T> {
    pub result: T,
    pub operation: String,
    pub success: bool,
    pub message: Option<String>,
}

impl<T> OperationResponse<T> {
    pub fn ok(operation: impl Into<String>, result: T) -> Self {
        Self {
            result,
            operation: operation.into(),
            success: true,
            message: None,
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct Endpoints {
    pub math: String,
    pub text: String,
    pub health: String,
}

/// GET / body
#[derive(Debug, Clone, Serialize)]
pub struct ServerInfo {
    pub name: String,
    pub version: String,
    pub description: String,
    pub endpoints: Endpoints,
}

impl Default for ServerInfo {
    fn default() -> Self {
        Self {
            name: SERVER_NAME.to_string(),
            version: API_VERSION.to_string(),
            description: SERVER_DESCRIPTION.to_string(),
            endpoints: Endpoints {
                math: "/math".to_string(),
                text: "/text".to_string(),
                health: "/health".to_string(),
            },
        }
    }
}

/// GET /health body
#[derive(Debug, Clone, Serialize)]
pub struct HealthStatus {
    pub status: String,
    pub timestamp: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_math_request_optional_coefficients() {
        let req: MathRequest =
            serde_json::from_str(r#"{"operation": "statistics", "values": [1, 2.5]}"#).unwrap();
        assert_eq!(req.values, vec![1.0, 2.5]);
        assert!(req.a.is_none());
    }

    #[test]
    fn test_math_request_requires_values() {
        let parsed = serde_json::from_str::<MathRequest>(r#"{"operation": "quadratic", "a": 1}"#);
        assert!(parsed.is_err());
    }

    #[test]
    fn test_text_request_mode_alias() {
        let req: TextRequest = serde_json::from_str(
            r#"{"text": "abc", "operation": "transform", "mode": "upper"}"#,
        )
        .unwrap();
        assert_eq!(req.params().mode.as_deref(), Some("upper"));

        let req: TextRequest = serde_json::from_str(
            r#"{"text": "abc", "operation": "extract", "extraction_type": "emails"}"#,
        )
        .unwrap();
        assert_eq!(req.extraction_type.as_deref(), Some("emails"));
    }

    #[test]
    fn test_response_envelope() {
        let resp = OperationResponse::ok("power", 8.0);
        let json = serde_json::to_value(&resp).unwrap();
        assert_eq!(json["success"], true);
        assert_eq!(json["operation"], "power");
        assert_eq!(json["result"], 8.0);
        assert!(json["message"].is_null());
    }
}
