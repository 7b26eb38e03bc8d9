use contracts::domain::promotion::{Promotion, PromotionPayload};
use contracts::shared::envelope::ApiEnvelope;
use gloo_net::http::Request;
use serde_json::Value;

use crate::shared::api_utils::{api_url, bearer};

pub async fn get_by_dealer_id(
    token: &str,
    dealer_id: &str,
) -> Result<ApiEnvelope<Vec<Promotion>>, String> {
    let url = api_url(&format!("/api/Promotion/dealer/{}", dealer_id));

    let response = Request::get(&url)
        .header("Authorization", &bearer(token))
        .send()
        .await
        .map_err(|e| format!("Failed to send request: {}", e))?;

    response
        .json::<ApiEnvelope<Vec<Promotion>>>()
        .await
        .map_err(|e| format!("Failed to parse response: {}", e))
}

pub async fn create(
    token: &str,
    payload: &PromotionPayload,
) -> Result<ApiEnvelope<Promotion>, String> {
    let response = Request::post(&api_url("/api/Promotion"))
        .header("Authorization", &bearer(token))
        .json(payload)
        .map_err(|e| format!("Failed to serialize request: {}", e))?
        .send()
        .await
        .map_err(|e| format!("Failed to send request: {}", e))?;

    response
        .json::<ApiEnvelope<Promotion>>()
        .await
        .map_err(|e| format!("Failed to parse response: {}", e))
}

pub async fn update(
    token: &str,
    promotion_id: &str,
    payload: &PromotionPayload,
) -> Result<ApiEnvelope<Promotion>, String> {
    let url = api_url(&format!("/api/Promotion/{}", promotion_id));

    let response = Request::put(&url)
        .header("Authorization", &bearer(token))
        .json(payload)
        .map_err(|e| format!("Failed to serialize request: {}", e))?
        .send()
        .await
        .map_err(|e| format!("Failed to send request: {}", e))?;

    response
        .json::<ApiEnvelope<Promotion>>()
        .await
        .map_err(|e| format!("Failed to parse response: {}", e))
}

pub async fn delete(token: &str, promotion_id: &str) -> Result<ApiEnvelope<Value>, String> {
    let url = api_url(&format!("/api/Promotion/{}", promotion_id));

    let response = Request::delete(&url)
        .header("Authorization", &bearer(token))
        .send()
        .await
        .map_err(|e| format!("Failed to send request: {}", e))?;

    response
        .json::<ApiEnvelope<Value>>()
        .await
        .map_err(|e| format!("Failed to parse response: {}", e))
}
