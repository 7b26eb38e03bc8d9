use contracts::domain::vehicle::Vehicle;
use contracts::shared::envelope::ApiEnvelope;
use gloo_net::http::Request;

use crate::shared::api_utils::{api_url, bearer};

/// Fetch the whole vehicle catalog.
pub async fn get_all(token: &str) -> Result<ApiEnvelope<Vec<Vehicle>>, String> {
    let response = Request::get(&api_url("/api/Vehicle"))
        .header("Authorization", &bearer(token))
        .send()
        .await
        .map_err(|e| format!("Failed to send request: {}", e))?;

    response
        .json::<ApiEnvelope<Vec<Vehicle>>>()
        .await
        .map_err(|e| format!("Failed to parse response: {}", e))
}
