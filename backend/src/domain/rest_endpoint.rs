//! Optional external REST endpoint configuration surface.
//!
//! Pure pass-through CRUD against the remote store; the application never
//! interprets the configuration beyond displaying its status.

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Configuration record for the store's optional outbound REST endpoint.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct RestEndpointConfig {
    /// Store-side identifier for this configuration.
    pub id: String,
    /// Whether the endpoint is active.
    pub enabled: bool,
    /// Target URL.
    pub endpoint_url: String,
    /// Optional API key forwarded by the store.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub api_key: Option<String>,
}

/// Status snapshot returned by the store.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct RestEndpointStatus {
    /// Free-form status string from the store.
    pub status: String,
    /// Current configuration, when one is set.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub config: Option<RestEndpointConfig>,
}
