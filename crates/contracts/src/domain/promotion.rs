use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Promotion as returned by the backend.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Promotion {
    pub id: String,
    pub name: String,
    pub description: String,

    #[serde(rename = "discountPercent")]
    pub discount_percent: f64,

    #[serde(rename = "discountType")]
    pub discount_type: String,

    #[serde(rename = "startDate")]
    pub start_date: String,

    #[serde(rename = "endDate")]
    pub end_date: String,

    #[serde(rename = "isActive")]
    pub is_active: bool,

    pub note: Option<String>,

    #[serde(rename = "createdBy")]
    pub created_by: String,

    #[serde(rename = "createdByName")]
    pub created_by_name: Option<String>,
}

/// Form state for the two-mode (create/edit) promotion modal.
///
/// Holds raw input strings; [`PromotionForm::validate`] enforces the rules
/// before any network call and [`PromotionForm::to_payload`] normalizes
/// the dates to canonical timestamps.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PromotionForm {
    pub id: Option<String>,
    pub name: String,
    pub description: String,
    pub discount_percent: String,
    pub discount_type: String,
    pub start_date: String,
    pub end_date: String,
    pub is_active: bool,
    pub note: String,
}

impl PromotionForm {
    pub fn from_promotion(promotion: &Promotion) -> Self {
        Self {
            id: Some(promotion.id.clone()),
            name: promotion.name.clone(),
            description: promotion.description.clone(),
            discount_percent: promotion.discount_percent.to_string(),
            discount_type: promotion.discount_type.clone(),
            start_date: date_part(&promotion.start_date),
            end_date: date_part(&promotion.end_date),
            is_active: promotion.is_active,
            note: promotion.note.clone().unwrap_or_default(),
        }
    }

    pub fn is_edit_mode(&self) -> bool {
        self.id.is_some()
    }

    /// Validate the form. Discount must be numeric in (0, 100], both dates
    /// must parse, and the end date must be strictly after the start.
    pub fn validate(&self) -> Result<(), String> {
        if self.name.trim().is_empty() {
            return Err("Name is required".into());
        }
        if self.description.trim().is_empty() {
            return Err("Description is required".into());
        }
        if self.discount_percent.trim().is_empty() {
            return Err("Discount percent is required".into());
        }
        let percent: f64 = self
            .discount_percent
            .trim()
            .parse()
            .map_err(|_| "Discount percent must be a number".to_string())?;
        if !(percent > 0.0 && percent <= 100.0) {
            return Err("Discount percent must be between 1 and 100".into());
        }
        let start = parse_date(&self.start_date).ok_or("Start date is required")?;
        let end = parse_date(&self.end_date).ok_or("End date is required")?;
        if end <= start {
            return Err("End date must be after start date".into());
        }
        Ok(())
    }

    /// Build the wire payload. Call only after a successful `validate`;
    /// returns an error for the same conditions so the caller cannot send
    /// an unvalidated form by mistake.
    pub fn to_payload(&self, created_by: &str) -> Result<PromotionPayload, String> {
        self.validate()?;
        let percent: f64 = self.discount_percent.trim().parse().unwrap_or(0.0);
        Ok(PromotionPayload {
            name: self.name.trim().to_string(),
            description: self.description.trim().to_string(),
            discount_percent: percent,
            discount_type: self.discount_type.clone(),
            start_date: to_canonical_timestamp(&self.start_date),
            end_date: to_canonical_timestamp(&self.end_date),
            is_active: self.is_active,
            note: if self.note.trim().is_empty() {
                None
            } else {
                Some(self.note.trim().to_string())
            },
            created_by: created_by.to_string(),
        })
    }
}

/// Body of `POST /api/Promotion` and `PUT /api/Promotion/{id}`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct PromotionPayload {
    pub name: String,
    pub description: String,

    #[serde(rename = "discountPercent")]
    pub discount_percent: f64,

    #[serde(rename = "discountType")]
    pub discount_type: String,

    #[serde(rename = "startDate")]
    pub start_date: String,

    #[serde(rename = "endDate")]
    pub end_date: String,

    #[serde(rename = "isActive")]
    pub is_active: bool,

    pub note: Option<String>,

    #[serde(rename = "createdBy")]
    pub created_by: String,
}

fn date_part(value: &str) -> String {
    value.split('T').next().unwrap_or(value).to_string()
}

fn parse_date(value: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(date_part(value).as_str(), "%Y-%m-%d").ok()
}

/// Normalize a date input ("YYYY-MM-DD") to the canonical midnight UTC
/// timestamp the backend expects.
fn to_canonical_timestamp(value: &str) -> String {
    format!("{}T00:00:00Z", date_part(value))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn valid_form() -> PromotionForm {
        PromotionForm {
            id: None,
            name: "Summer sale".into(),
            description: "10% off city models".into(),
            discount_percent: "10".into(),
            discount_type: "Percentage".into(),
            start_date: "2026-06-01".into(),
            end_date: "2026-06-30".into(),
            is_active: true,
            note: String::new(),
        }
    }

    #[test]
    fn valid_form_passes() {
        assert_eq!(valid_form().validate(), Ok(()));
    }

    #[test]
    fn rejects_end_date_not_after_start() {
        let mut form = valid_form();
        form.end_date = form.start_date.clone();
        assert!(form.validate().is_err());

        form.end_date = "2026-05-31".into();
        assert!(form.validate().is_err());

        form.end_date = "2026-06-02".into();
        assert_eq!(form.validate(), Ok(()));
    }

    #[test]
    fn discount_boundaries() {
        let mut form = valid_form();

        form.discount_percent = "100".into();
        assert_eq!(form.validate(), Ok(()));

        form.discount_percent = "0".into();
        assert!(form.validate().is_err());

        form.discount_percent = "101".into();
        assert!(form.validate().is_err());

        form.discount_percent = "ten".into();
        assert!(form.validate().is_err());
    }

    #[test]
    fn rejects_empty_required_fields() {
        let mut form = valid_form();
        form.name = "  ".into();
        assert!(form.validate().is_err());

        let mut form = valid_form();
        form.description = String::new();
        assert!(form.validate().is_err());

        let mut form = valid_form();
        form.discount_percent = String::new();
        assert!(form.validate().is_err());
    }

    #[test]
    fn payload_normalizes_dates() {
        let payload = valid_form().to_payload("u1").unwrap();
        assert_eq!(payload.start_date, "2026-06-01T00:00:00Z");
        assert_eq!(payload.end_date, "2026-06-30T00:00:00Z");
        assert_eq!(payload.created_by, "u1");
        assert_eq!(payload.note, None);
    }

    #[test]
    fn payload_refuses_invalid_form() {
        let mut form = valid_form();
        form.end_date = form.start_date.clone();
        assert!(form.to_payload("u1").is_err());
    }

    #[test]
    fn edit_form_round_trips_from_entity() {
        let promotion = Promotion {
            id: "p1".into(),
            name: "Summer sale".into(),
            description: "desc".into(),
            discount_percent: 15.0,
            discount_type: "Percentage".into(),
            start_date: "2026-06-01T00:00:00Z".into(),
            end_date: "2026-06-30T00:00:00Z".into(),
            is_active: true,
            note: Some("vip".into()),
            created_by: "u1".into(),
            created_by_name: Some("Manager".into()),
        };
        let form = PromotionForm::from_promotion(&promotion);
        assert!(form.is_edit_mode());
        assert_eq!(form.start_date, "2026-06-01");
        assert_eq!(form.end_date, "2026-06-30");
        assert_eq!(form.validate(), Ok(()));
    }
}
