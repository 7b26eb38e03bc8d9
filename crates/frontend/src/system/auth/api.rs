use contracts::shared::envelope::ApiEnvelope;
use contracts::system::auth::{LoginRequest, LoginResponse};
use gloo_net::http::Request;

use crate::shared::api_utils::api_url;

/// Login with username and password. Returns the backend envelope; a
/// wrong password is an `is_success == false` envelope, not an `Err`.
pub async fn login(username: String, password: String) -> Result<ApiEnvelope<LoginResponse>, String> {
    let request = LoginRequest { username, password };

    let response = Request::post(&api_url("/api/auth/login"))
        .json(&request)
        .map_err(|e| format!("Failed to serialize request: {}", e))?
        .send()
        .await
        .map_err(|e| format!("Failed to send request: {}", e))?;

    response
        .json::<ApiEnvelope<LoginResponse>>()
        .await
        .map_err(|e| format!("Failed to parse response: {}", e))
}
