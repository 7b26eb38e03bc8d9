use serde::{Deserialize, Serialize};

/// Restock request as returned by `GET /api/VehicleRequest`.
///
/// `status` keeps the backend's string verbatim (it is inconsistently
/// cased at the source); all comparisons go through
/// [`VehicleRequest::normalized_status`].
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct VehicleRequest {
    pub id: String,

    #[serde(rename = "vehicleId")]
    pub vehicle_id: String,

    #[serde(rename = "dealerId")]
    pub dealer_id: String,

    pub quantity: i64,
    pub note: Option<String>,
    pub status: String,

    #[serde(rename = "createdBy")]
    pub created_by: String,

    #[serde(rename = "createdByName")]
    pub created_by_name: Option<String>,

    #[serde(rename = "createdAt")]
    pub created_at: String,

    #[serde(rename = "approvedBy")]
    pub approved_by: Option<String>,

    #[serde(rename = "approvedByName")]
    pub approved_by_name: Option<String>,

    #[serde(rename = "approvedAt")]
    pub approved_at: Option<String>,
}

impl VehicleRequest {
    pub fn normalized_status(&self) -> Option<RequestStatus> {
        RequestStatus::parse(&self.status)
    }

    pub fn is_pending(&self) -> bool {
        self.normalized_status() == Some(RequestStatus::Processing)
    }
}

/// Body of `POST /api/VehicleRequest`. One payload per draft line item.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CreateVehicleRequest {
    #[serde(rename = "createdBy")]
    pub created_by: String,

    #[serde(rename = "vehicleId")]
    pub vehicle_id: String,

    #[serde(rename = "dealerId")]
    pub dealer_id: String,

    pub quantity: i64,
    pub note: String,
}

/// Canonical restock request status.
///
/// The backend emits these as strings with inconsistent casing across
/// endpoints, so parsing is case-insensitive and the wire string is never
/// compared directly.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum RequestStatus {
    Processing,
    Completed,
    Rejected,
}

impl RequestStatus {
    pub fn parse(raw: &str) -> Option<Self> {
        match raw.trim().to_lowercase().as_str() {
            "processing" => Some(RequestStatus::Processing),
            "completed" => Some(RequestStatus::Completed),
            "rejected" => Some(RequestStatus::Rejected),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            RequestStatus::Processing => "Processing",
            RequestStatus::Completed => "Completed",
            RequestStatus::Rejected => "Rejected",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_parse_is_case_insensitive() {
        assert_eq!(
            RequestStatus::parse("Processing"),
            Some(RequestStatus::Processing)
        );
        assert_eq!(
            RequestStatus::parse("processing"),
            Some(RequestStatus::Processing)
        );
        assert_eq!(
            RequestStatus::parse("COMPLETED"),
            Some(RequestStatus::Completed)
        );
        assert_eq!(
            RequestStatus::parse(" rejected "),
            Some(RequestStatus::Rejected)
        );
    }

    #[test]
    fn unknown_status_is_rejected() {
        assert_eq!(RequestStatus::parse("Pending"), None);
        assert_eq!(RequestStatus::parse(""), None);
    }

    #[test]
    fn create_payload_uses_camel_case_wire_names() {
        let payload = CreateVehicleRequest {
            created_by: "u1".into(),
            vehicle_id: "v1".into(),
            dealer_id: "d1".into(),
            quantity: 2,
            note: "low stock".into(),
        };
        let json = serde_json::to_value(&payload).unwrap();
        assert_eq!(json["createdBy"], "u1");
        assert_eq!(json["vehicleId"], "v1");
        assert_eq!(json["dealerId"], "d1");
        assert_eq!(json["quantity"], 2);
        assert_eq!(json["note"], "low stock");
    }

    #[test]
    fn request_with_odd_casing_still_counts_as_pending() {
        let json = r#"{
            "id": "r1",
            "vehicleId": "v1",
            "dealerId": "d1",
            "quantity": 3,
            "note": null,
            "status": "processing",
            "createdBy": "u1",
            "createdByName": "Staff One",
            "createdAt": "2026-05-01T09:00:00Z",
            "approvedBy": null,
            "approvedByName": null,
            "approvedAt": null
        }"#;
        let request: VehicleRequest = serde_json::from_str(json).unwrap();
        assert!(request.is_pending());
        assert_eq!(request.status, "processing");
    }
}
