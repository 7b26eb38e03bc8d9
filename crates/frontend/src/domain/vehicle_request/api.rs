//! Restock request API wrapper.
//!
//! Network operations return the backend envelope unmodified; the filter
//! helpers below are pure predicates over an already-fetched collection.

use std::future::Future;

use contracts::domain::vehicle_request::{CreateVehicleRequest, RequestStatus, VehicleRequest};
use contracts::shared::envelope::ApiEnvelope;
use gloo_net::http::Request;
use serde_json::Value;

use crate::shared::api_utils::{api_url, bearer};

/// Fetch the entire request collection. No server-side filtering.
pub async fn get_all(token: &str) -> Result<ApiEnvelope<Vec<VehicleRequest>>, String> {
    let cache_buster = js_sys::Date::now() as i64;
    let url = api_url(&format!("/api/VehicleRequest?_ts={}", cache_buster));

    let response = Request::get(&url)
        .header("Authorization", &bearer(token))
        .send()
        .await
        .map_err(|e| format!("Failed to send request: {}", e))?;

    response
        .json::<ApiEnvelope<Vec<VehicleRequest>>>()
        .await
        .map_err(|e| format!("Failed to parse response: {}", e))
}

/// Create one restock request. The draft list maps to one call per line
/// item; the caller owns the submission loop.
pub async fn create(
    token: &str,
    payload: &CreateVehicleRequest,
) -> Result<ApiEnvelope<VehicleRequest>, String> {
    let response = Request::post(&api_url("/api/VehicleRequest"))
        .header("Authorization", &bearer(token))
        .json(payload)
        .map_err(|e| format!("Failed to serialize request: {}", e))?
        .send()
        .await
        .map_err(|e| format!("Failed to send request: {}", e))?;

    response
        .json::<ApiEnvelope<VehicleRequest>>()
        .await
        .map_err(|e| format!("Failed to parse response: {}", e))
}

/// Move a pending request into fulfilment.
pub async fn approve(
    token: &str,
    request_id: &str,
    evm_staff_id: &str,
) -> Result<ApiEnvelope<VehicleRequest>, String> {
    let url = api_url(&format!(
        "/api/VehicleRequest/approve?id={}&evmStaffId={}",
        request_id, evm_staff_id
    ));

    let response = Request::post(&url)
        .header("Authorization", &bearer(token))
        .send()
        .await
        .map_err(|e| format!("Failed to send request: {}", e))?;

    response
        .json::<ApiEnvelope<VehicleRequest>>()
        .await
        .map_err(|e| format!("Failed to parse response: {}", e))
}

/// Delete a request. The manager's "deny" uses this endpoint; there is no
/// distinct reject transition in the backend contract.
pub async fn delete(token: &str, request_id: &str) -> Result<ApiEnvelope<Value>, String> {
    let url = api_url(&format!("/api/VehicleRequest/{}", request_id));

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

/// Deny a request and refetch the collection, yielding the refreshed
/// list. Generic over the two network calls so the flow can be driven
/// against an in-memory backend.
pub async fn deny_and_refresh<DelFut, AllFut>(
    delete_op: impl FnOnce() -> DelFut,
    fetch_all: impl FnOnce() -> AllFut,
) -> Result<Vec<VehicleRequest>, String>
where
    DelFut: Future<Output = Result<ApiEnvelope<Value>, String>>,
    AllFut: Future<Output = Result<ApiEnvelope<Vec<VehicleRequest>>, String>>,
{
    delete_op()
        .await?
        .into_result("Failed to deny the request")?;
    let refreshed = fetch_all()
        .await?
        .into_result("Failed to load restock requests")?;
    Ok(refreshed.unwrap_or_default())
}

// ---------------------------------------------------------------------------
// Client-side filters. Pure, no mutation, O(n) each.
// ---------------------------------------------------------------------------

pub fn by_dealer(requests: &[VehicleRequest], dealer_id: &str) -> Vec<VehicleRequest> {
    requests
        .iter()
        .filter(|r| r.dealer_id == dealer_id)
        .cloned()
        .collect()
}

pub fn by_status(requests: &[VehicleRequest], status: RequestStatus) -> Vec<VehicleRequest> {
    requests
        .iter()
        .filter(|r| r.normalized_status() == Some(status))
        .cloned()
        .collect()
}

pub fn by_creator(requests: &[VehicleRequest], user_id: &str) -> Vec<VehicleRequest> {
    requests
        .iter()
        .filter(|r| r.created_by == user_id)
        .cloned()
        .collect()
}

/// Requests a dealer manager still has to act on.
pub fn pending_for_manager(requests: &[VehicleRequest], dealer_id: &str) -> Vec<VehicleRequest> {
    requests
        .iter()
        .filter(|r| r.dealer_id == dealer_id && r.is_pending())
        .cloned()
        .collect()
}

/// Requests already approved on the EVM side.
pub fn approved_for_evm(requests: &[VehicleRequest]) -> Vec<VehicleRequest> {
    by_status(requests, RequestStatus::Completed)
}

/// Split a dealer's requests into (pending, history). Every request of
/// the dealer lands in exactly one half; anything that does not normalize
/// to `Processing` counts as history so the manager never acts on an
/// unrecognized state.
pub fn partition_for_manager(
    requests: &[VehicleRequest],
    dealer_id: &str,
) -> (Vec<VehicleRequest>, Vec<VehicleRequest>) {
    requests
        .iter()
        .filter(|r| r.dealer_id == dealer_id)
        .cloned()
        .partition(|r| r.is_pending())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;

    fn ok_envelope<T>(data: T) -> ApiEnvelope<T> {
        ApiEnvelope {
            data: Some(data),
            result_status: 200,
            messages: vec![],
            is_success: true,
        }
    }

    fn failed_envelope<T>(message: &str) -> ApiEnvelope<T> {
        ApiEnvelope {
            data: None,
            result_status: 400,
            messages: vec![message.to_string()],
            is_success: false,
        }
    }

    fn request(id: &str, status: &str, dealer_id: &str, created_by: &str) -> VehicleRequest {
        VehicleRequest {
            id: id.to_string(),
            vehicle_id: format!("v-{}", id),
            dealer_id: dealer_id.to_string(),
            quantity: 1,
            note: None,
            status: status.to_string(),
            created_by: created_by.to_string(),
            created_by_name: None,
            created_at: "2026-05-01T09:00:00Z".to_string(),
            approved_by: None,
            approved_by_name: None,
            approved_at: None,
        }
    }

    #[tokio::test]
    async fn denied_request_is_gone_after_refetch() {
        let store = RefCell::new(vec![
            request("r1", "Processing", "d1", "u1"),
            request("r2", "Processing", "d1", "u1"),
        ]);
        let store = &store;

        let refreshed = deny_and_refresh(
            move || async move {
                store.borrow_mut().retain(|r| r.id != "r1");
                Ok(ok_envelope(Value::Null))
            },
            move || async move { Ok(ok_envelope(store.borrow().clone())) },
        )
        .await
        .unwrap();

        assert_eq!(refreshed.len(), 1);
        assert!(refreshed.iter().all(|r| r.id != "r1"));
    }

    #[tokio::test]
    async fn failed_deny_keeps_collection_and_surfaces_message() {
        let store = RefCell::new(vec![request("r1", "Processing", "d1", "u1")]);
        let store = &store;
        let fetched = RefCell::new(false);
        let fetched = &fetched;

        let outcome = deny_and_refresh(
            move || async move { Ok(failed_envelope("request already fulfilled")) },
            move || async move {
                *fetched.borrow_mut() = true;
                Ok(ok_envelope(store.borrow().clone()))
            },
        )
        .await;

        assert_eq!(outcome, Err("request already fulfilled".to_string()));
        // no refetch after a failed deny, the page keeps its current list
        assert!(!*fetched.borrow());
        assert_eq!(store.borrow().len(), 1);
    }

    #[tokio::test]
    async fn transport_error_on_deny_propagates() {
        let outcome = deny_and_refresh(
            || async { Err("Failed to send request: connection refused".to_string()) },
            || async { Ok(ok_envelope(Vec::<VehicleRequest>::new())) },
        )
        .await;

        assert_eq!(
            outcome,
            Err("Failed to send request: connection refused".to_string())
        );
    }

    #[test]
    fn by_dealer_keeps_all_statuses() {
        let requests = vec![
            request("r1", "Processing", "d1", "u1"),
            request("r2", "Completed", "d1", "u1"),
            request("r3", "Processing", "d2", "u2"),
        ];
        let filtered = by_dealer(&requests, "d1");
        assert_eq!(filtered.len(), 2);
        assert!(filtered.iter().all(|r| r.dealer_id == "d1"));
    }

    #[test]
    fn pending_for_manager_drops_completed() {
        let requests = vec![
            request("r1", "Processing", "d1", "u1"),
            request("r2", "Completed", "d1", "u1"),
        ];
        let pending = pending_for_manager(&requests, "d1");
        assert_eq!(pending.len(), 1);
        assert_eq!(pending[0].id, "r1");
    }

    #[test]
    fn approved_for_evm_is_completed_only() {
        let requests = vec![
            request("r1", "Completed", "d1", "u1"),
            request("r2", "Processing", "d1", "u1"),
            request("r3", "Rejected", "d2", "u2"),
        ];
        let approved = approved_for_evm(&requests);
        assert_eq!(approved.len(), 1);
        assert_eq!(approved[0].id, "r1");
    }

    #[test]
    fn pending_partition_tolerates_wire_casing() {
        let requests = vec![
            request("r1", "processing", "d1", "u1"),
            request("r2", "PROCESSING", "d1", "u1"),
        ];
        let (pending, history) = partition_for_manager(&requests, "d1");
        assert_eq!(pending.len(), 2);
        assert!(history.is_empty());
    }

    #[test]
    fn by_creator_matches_exactly() {
        let requests = vec![
            request("r1", "Processing", "d1", "u1"),
            request("r2", "Processing", "d1", "u2"),
        ];
        let mine = by_creator(&requests, "u1");
        assert_eq!(mine.len(), 1);
        assert_eq!(mine[0].id, "r1");
    }

    #[test]
    fn partition_is_exhaustive_and_disjoint() {
        let requests = vec![
            request("r1", "Processing", "d1", "u1"),
            request("r2", "Completed", "d1", "u1"),
            request("r3", "Rejected", "d1", "u2"),
            request("r4", "SomethingNew", "d1", "u2"),
            request("r5", "Processing", "d2", "u3"),
        ];
        let (pending, history) = partition_for_manager(&requests, "d1");

        assert_eq!(pending.len() + history.len(), 4);
        for r in &pending {
            assert!(!history.iter().any(|h| h.id == r.id));
        }
        // unknown status goes to history, never pending
        assert!(history.iter().any(|r| r.id == "r4"));
        assert!(pending.iter().all(|r| r.id == "r1"));
    }
}
