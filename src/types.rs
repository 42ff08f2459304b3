use serde::{Deserialize, Serialize};

#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ShortenRequest {
    pub original_url: String,
}

/// `short_url` carries the short code, not the full link.
#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ShortenResponse {
    #[serde(alias = "shortCode")]
    pub short_url: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub original_url: Option<String>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UrlDetailResponse {
    pub short_code: String,
    pub short_url: String,
    pub original_url: String,
    pub created_at: String,
}
