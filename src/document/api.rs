//! API specification types.

use serde::{Deserialize, Serialize};

use super::is_blank;

/// Request/response contract of an endpoint.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ApiContract {
    /// HTTP method.
    #[serde(default)]
    pub method: String,
    /// Request body, usually JSON.
    #[serde(default)]
    pub request_payload: String,
    /// Response body, usually JSON.
    #[serde(default)]
    pub response_payload: String,
}

/// One API endpoint. Valid only when all five leaves are filled or all are blank.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ApiSpec {
    /// Display name of the endpoint.
    #[serde(default)]
    pub name: String,
    /// Absolute endpoint URL.
    #[serde(default)]
    pub endpoint_url: String,
    /// Request/response contract.
    #[serde(default)]
    pub contract: ApiContract,
}

impl ApiSpec {
    /// The five leaf fields in reporting order, paired with their labels.
    #[must_use]
    pub fn leaves(&self) -> [(&'static str, &str); 5] {
        [
            ("API name", self.name.as_str()),
            ("Endpoint URL", self.endpoint_url.as_str()),
            ("HTTP method", self.contract.method.as_str()),
            ("Request payload", self.contract.request_payload.as_str()),
            ("Response payload", self.contract.response_payload.as_str()),
        ]
    }

    /// Returns `true` if any leaf has content.
    #[must_use]
    pub fn has_any_field(&self) -> bool {
        self.leaves().iter().any(|(_, value)| !is_blank(value))
    }
}
