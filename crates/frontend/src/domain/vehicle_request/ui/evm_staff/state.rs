use contracts::domain::vehicle_request::{RequestStatus, VehicleRequest};

/// Per-status counts and the total requested units, derived in a single
/// pass over the fetched collection.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RequestSummary {
    pub total: usize,
    pub processing: usize,
    pub completed: usize,
    pub rejected: usize,
    pub unrecognized: usize,
    pub total_units: i64,
}

impl RequestSummary {
    pub fn from_requests(requests: &[VehicleRequest]) -> Self {
        requests.iter().fold(Self::default(), |mut acc, request| {
            acc.total += 1;
            acc.total_units += request.quantity;
            match request.normalized_status() {
                Some(RequestStatus::Processing) => acc.processing += 1,
                Some(RequestStatus::Completed) => acc.completed += 1,
                Some(RequestStatus::Rejected) => acc.rejected += 1,
                None => acc.unrecognized += 1,
            }
            acc
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn request(id: &str, status: &str, quantity: i64) -> VehicleRequest {
        VehicleRequest {
            id: id.to_string(),
            vehicle_id: format!("v-{}", id),
            dealer_id: "d1".to_string(),
            quantity,
            note: None,
            status: status.to_string(),
            created_by: "u1".to_string(),
            created_by_name: None,
            created_at: "2026-05-01T09:00:00Z".to_string(),
            approved_by: None,
            approved_by_name: None,
            approved_at: None,
        }
    }

    #[test]
    fn counts_statuses_and_sums_units() {
        let requests = vec![
            request("r1", "Processing", 2),
            request("r2", "processing", 1),
            request("r3", "Completed", 5),
            request("r4", "Rejected", 3),
            request("r5", "Mystery", 4),
        ];
        let summary = RequestSummary::from_requests(&requests);

        assert_eq!(summary.total, 5);
        assert_eq!(summary.processing, 2);
        assert_eq!(summary.completed, 1);
        assert_eq!(summary.rejected, 1);
        assert_eq!(summary.unrecognized, 1);
        assert_eq!(summary.total_units, 15);
    }

    #[test]
    fn empty_collection_yields_zeroes() {
        assert_eq!(RequestSummary::from_requests(&[]), RequestSummary::default());
    }
}
