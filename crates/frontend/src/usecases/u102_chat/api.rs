use crate::shared::api_utils::api_url;
use contracts::usecases::common::UseCaseMetadata;
use contracts::usecases::u102_chat::{Chat, ChatRequest, ChatResponse};
use gloo_net::http::Request;

/// Send one message to `/chat`.
///
/// The body is decoded regardless of the HTTP status: the backend reports
/// its own failures through the `error` field. A body that is not JSON is
/// treated as a transport failure.
pub async fn send_chat(request: &ChatRequest) -> Result<ChatResponse, String> {
    let url = api_url(Chat::endpoint());

    let response = Request::post(&url)
        .json(request)
        .map_err(|e| format!("Failed to build request: {}", e))?
        .send()
        .await
        .map_err(|e| e.to_string())?;

    if !response.ok() {
        log::warn!("{} answered HTTP {}", Chat::full_name(), response.status());
    }

    response
        .json::<ChatResponse>()
        .await
        .map_err(|e| format!("Failed to parse response: {}", e))
}
