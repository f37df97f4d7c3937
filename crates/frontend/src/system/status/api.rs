use crate::shared::api_utils::api_url;
use contracts::system::{SystemStatus, STATUS_ENDPOINT};
use gloo_net::http::Request;

/// The payload is logged as-is, so a non-2xx answer is decoded too.
pub async fn fetch_status() -> Result<SystemStatus, String> {
    let url = api_url(STATUS_ENDPOINT);

    let response = Request::get(&url)
        .send()
        .await
        .map_err(|e| format!("Failed to fetch: {}", e))?;

    let status = response.status();
    let body = response
        .text()
        .await
        .map_err(|e| format!("Failed to read response: {}", e))?;

    decode_status(status, &body)
}

fn decode_status(http_status: u16, body: &str) -> Result<SystemStatus, String> {
    if !(200..300).contains(&http_status) {
        log::warn!("{} answered HTTP {}", STATUS_ENDPOINT, http_status);
    }

    serde_json::from_str::<SystemStatus>(body)
        .map_err(|e| format!("Failed to parse response: {}", e))
}
