use contracts::domain::vehicle::Vehicle;
use contracts::domain::vehicle_request::CreateVehicleRequest;
use leptos::prelude::*;

/// One line of the unpersisted draft assembled before submission.
#[derive(Clone, Debug, PartialEq)]
pub struct DraftItem {
    pub vehicle_id: String,
    pub model_label: String,
    pub current_stock: i64,
    pub image_url: Option<String>,
    pub quantity: i64,
}

impl DraftItem {
    pub fn from_vehicle(vehicle: &Vehicle) -> Self {
        Self {
            vehicle_id: vehicle.id.clone(),
            model_label: vehicle.display_label(),
            current_stock: vehicle.current_stock,
            image_url: vehicle.image_url.clone(),
            quantity: 1,
        }
    }
}

/// Client-only draft list. All mutations are local; nothing hits the
/// network until the page submits.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct RequestDraft {
    pub items: Vec<DraftItem>,
    pub note: String,
}

impl RequestDraft {
    /// Add a line item. Returns false (and leaves the draft unchanged)
    /// when the vehicle is already present.
    pub fn add_item(&mut self, item: DraftItem) -> bool {
        if self.contains(&item.vehicle_id) {
            return false;
        }
        self.items.push(item);
        true
    }

    pub fn contains(&self, vehicle_id: &str) -> bool {
        self.items.iter().any(|i| i.vehicle_id == vehicle_id)
    }

    pub fn remove_item(&mut self, vehicle_id: &str) {
        self.items.retain(|i| i.vehicle_id != vehicle_id);
    }

    /// Re-validated on every update: a raw value that is not a positive
    /// integer leaves the stored quantity unchanged.
    pub fn update_quantity(&mut self, vehicle_id: &str, raw: &str) {
        let Ok(quantity) = raw.trim().parse::<i64>() else {
            return;
        };
        if quantity <= 0 {
            return;
        }
        if let Some(item) = self.items.iter_mut().find(|i| i.vehicle_id == vehicle_id) {
            item.quantity = quantity;
        }
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn total_units(&self) -> i64 {
        self.items.iter().map(|i| i.quantity).sum()
    }

    /// Drop the lines that were accepted by the backend, keeping failed
    /// ones so the user can retry without re-entering data.
    pub fn remove_submitted(&mut self, vehicle_ids: &[String]) {
        self.items
            .retain(|i| !vehicle_ids.contains(&i.vehicle_id));
    }

    pub fn clear(&mut self) {
        self.items.clear();
        self.note.clear();
    }

    /// Map the draft to one create payload per line item. The backend has
    /// no batch endpoint; the page submits these sequentially.
    pub fn to_create_requests(&self, created_by: &str, dealer_id: &str) -> Vec<CreateVehicleRequest> {
        self.items
            .iter()
            .map(|item| CreateVehicleRequest {
                created_by: created_by.to_string(),
                vehicle_id: item.vehicle_id.clone(),
                dealer_id: dealer_id.to_string(),
                quantity: item.quantity,
                note: self.note.trim().to_string(),
            })
            .collect()
    }
}

pub fn create_state() -> RwSignal<RequestDraft> {
    RwSignal::new(RequestDraft::default())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn item(vehicle_id: &str, quantity: i64) -> DraftItem {
        DraftItem {
            vehicle_id: vehicle_id.to_string(),
            model_label: format!("Model {}", vehicle_id),
            current_stock: 5,
            image_url: None,
            quantity,
        }
    }

    #[test]
    fn add_item_rejects_duplicate_vehicle() {
        let mut draft = RequestDraft::default();
        assert!(draft.add_item(item("v1", 1)));
        assert!(draft.add_item(item("v2", 1)));
        assert!(!draft.add_item(item("v1", 3)));

        assert_eq!(draft.items.len(), 2);
        // the original line is untouched by the rejected insert
        assert_eq!(draft.items[0].quantity, 1);
    }

    #[test]
    fn vehicle_ids_stay_unique_over_any_add_sequence() {
        let mut draft = RequestDraft::default();
        for id in ["v1", "v2", "v1", "v3", "v2", "v1"] {
            draft.add_item(item(id, 1));
        }
        let mut ids: Vec<_> = draft.items.iter().map(|i| i.vehicle_id.clone()).collect();
        ids.sort();
        ids.dedup();
        assert_eq!(ids.len(), draft.items.len());
    }

    #[test]
    fn update_quantity_ignores_invalid_input() {
        let mut draft = RequestDraft::default();
        draft.add_item(item("v1", 2));

        draft.update_quantity("v1", "0");
        assert_eq!(draft.items[0].quantity, 2);

        draft.update_quantity("v1", "-4");
        assert_eq!(draft.items[0].quantity, 2);

        draft.update_quantity("v1", "abc");
        assert_eq!(draft.items[0].quantity, 2);

        draft.update_quantity("v1", "");
        assert_eq!(draft.items[0].quantity, 2);

        draft.update_quantity("v1", "7");
        assert_eq!(draft.items[0].quantity, 7);
    }

    #[test]
    fn remove_and_clear() {
        let mut draft = RequestDraft::default();
        draft.add_item(item("v1", 1));
        draft.add_item(item("v2", 2));
        draft.remove_item("v1");
        assert_eq!(draft.items.len(), 1);
        assert!(!draft.contains("v1"));

        draft.note = "restock".into();
        draft.clear();
        assert!(draft.is_empty());
        assert!(draft.note.is_empty());
    }

    #[test]
    fn maps_draft_to_one_payload_per_item() {
        let mut draft = RequestDraft::default();
        draft.add_item(item("v1", 2));
        draft.note = " low stock ".into();

        let payloads = draft.to_create_requests("u1", "d1");
        assert_eq!(payloads.len(), 1);
        assert_eq!(payloads[0].vehicle_id, "v1");
        assert_eq!(payloads[0].quantity, 2);
        assert_eq!(payloads[0].note, "low stock");
        assert_eq!(payloads[0].created_by, "u1");
        assert_eq!(payloads[0].dealer_id, "d1");
    }

    #[test]
    fn remove_submitted_keeps_failed_lines() {
        let mut draft = RequestDraft::default();
        draft.add_item(item("v1", 1));
        draft.add_item(item("v2", 2));
        draft.add_item(item("v3", 3));

        draft.remove_submitted(&["v1".to_string(), "v3".to_string()]);
        assert_eq!(draft.items.len(), 1);
        assert_eq!(draft.items[0].vehicle_id, "v2");
    }

    #[test]
    fn total_units_sums_quantities() {
        let mut draft = RequestDraft::default();
        draft.add_item(item("v1", 2));
        draft.add_item(item("v2", 3));
        assert_eq!(draft.total_units(), 5);
    }
}
