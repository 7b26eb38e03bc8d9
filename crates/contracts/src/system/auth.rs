use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoginRequest {
    pub username: String,
    pub password: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoginResponse {
    pub token: String,
    pub user: UserInfo,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UserInfo {
    pub id: String,
    pub username: String,

    #[serde(rename = "fullName")]
    pub full_name: Option<String>,

    /// Role string as sent by the backend; use [`UserInfo::role`] for
    /// the normalized form.
    #[serde(rename = "role")]
    pub role_raw: String,

    /// Set for dealer-side roles, absent for EVM staff and admins.
    #[serde(rename = "dealerId")]
    pub dealer_id: Option<String>,
}

impl UserInfo {
    pub fn role(&self) -> Option<UserRole> {
        UserRole::parse(&self.role_raw)
    }

    pub fn display_name(&self) -> String {
        self.full_name
            .clone()
            .unwrap_or_else(|| self.username.clone())
    }
}

/// Role identifiers gating which mutating actions a page exposes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum UserRole {
    DealerStaff,
    DealerManager,
    EvmStaff,
    Admin,
}

impl UserRole {
    /// Case-insensitive parse of the backend's role string. Accepts both
    /// spaced ("Dealer Staff") and compact ("DealerStaff") spellings.
    pub fn parse(raw: &str) -> Option<Self> {
        let folded: String = raw
            .chars()
            .filter(|c| !c.is_whitespace() && *c != '_' && *c != '-')
            .collect::<String>()
            .to_lowercase();
        match folded.as_str() {
            "dealerstaff" => Some(UserRole::DealerStaff),
            "dealermanager" => Some(UserRole::DealerManager),
            "evmstaff" => Some(UserRole::EvmStaff),
            "admin" => Some(UserRole::Admin),
            _ => None,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            UserRole::DealerStaff => "Dealer Staff",
            UserRole::DealerManager => "Dealer Manager",
            UserRole::EvmStaff => "EVM Staff",
            UserRole::Admin => "Admin",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_role_spellings() {
        assert_eq!(UserRole::parse("Dealer Staff"), Some(UserRole::DealerStaff));
        assert_eq!(UserRole::parse("dealerstaff"), Some(UserRole::DealerStaff));
        assert_eq!(
            UserRole::parse("DEALER_MANAGER"),
            Some(UserRole::DealerManager)
        );
        assert_eq!(UserRole::parse("EVM Staff"), Some(UserRole::EvmStaff));
        assert_eq!(UserRole::parse("admin"), Some(UserRole::Admin));
        assert_eq!(UserRole::parse("customer"), None);
    }
}
