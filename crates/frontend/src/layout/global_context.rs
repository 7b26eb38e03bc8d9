use contracts::system::auth::UserRole;
use leptos::prelude::*;

/// Pages reachable from the sidebar. Which entries are visible depends on
/// the authenticated role.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Page {
    VehicleCatalog,
    RestockRequests,
    RequestVerification,
    EvmOverview,
    Promotions,
}

impl Page {
    pub const ALL: [Page; 5] = [
        Page::VehicleCatalog,
        Page::RestockRequests,
        Page::RequestVerification,
        Page::EvmOverview,
        Page::Promotions,
    ];

    pub fn title(&self) -> &'static str {
        match self {
            Page::VehicleCatalog => "Vehicle Catalog",
            Page::RestockRequests => "Restock Requests",
            Page::RequestVerification => "Request Verification",
            Page::EvmOverview => "Requests Overview",
            Page::Promotions => "Promotions",
        }
    }

    pub fn icon_name(&self) -> &'static str {
        match self {
            Page::VehicleCatalog => "vehicles",
            Page::RestockRequests => "requests",
            Page::RequestVerification => "verify",
            Page::EvmOverview => "dashboard",
            Page::Promotions => "promotions",
        }
    }

    pub fn allowed_for(&self, role: UserRole) -> bool {
        match role {
            UserRole::Admin => true,
            UserRole::DealerStaff => {
                matches!(self, Page::VehicleCatalog | Page::RestockRequests)
            }
            UserRole::DealerManager => matches!(
                self,
                Page::VehicleCatalog | Page::RequestVerification | Page::Promotions
            ),
            UserRole::EvmStaff => matches!(self, Page::VehicleCatalog | Page::EvmOverview),
        }
    }

    pub fn default_for(role: UserRole) -> Page {
        match role {
            UserRole::DealerStaff => Page::RestockRequests,
            UserRole::DealerManager => Page::RequestVerification,
            UserRole::EvmStaff => Page::EvmOverview,
            UserRole::Admin => Page::VehicleCatalog,
        }
    }
}

#[derive(Clone, Copy)]
pub struct AppGlobalContext {
    pub current_page: RwSignal<Page>,
    pub sidebar_open: RwSignal<bool>,
}

impl AppGlobalContext {
    pub fn new() -> Self {
        Self {
            current_page: RwSignal::new(Page::VehicleCatalog),
            sidebar_open: RwSignal::new(true),
        }
    }

    pub fn open_page(&self, page: Page) {
        leptos::logging::log!("open_page: {:?}", page);
        self.current_page.set(page);
    }

    pub fn toggle_sidebar(&self) {
        self.sidebar_open.update(|open| *open = !*open);
    }
}

impl Default for AppGlobalContext {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn role_gating_is_consistent_with_defaults() {
        for role in [
            UserRole::DealerStaff,
            UserRole::DealerManager,
            UserRole::EvmStaff,
            UserRole::Admin,
        ] {
            assert!(Page::default_for(role).allowed_for(role));
        }
    }

    #[test]
    fn dealer_staff_cannot_open_manager_pages() {
        assert!(!Page::RequestVerification.allowed_for(UserRole::DealerStaff));
        assert!(!Page::Promotions.allowed_for(UserRole::DealerStaff));
        assert!(!Page::EvmOverview.allowed_for(UserRole::DealerStaff));
    }

    #[test]
    fn admin_sees_every_page() {
        assert!(Page::ALL.iter().all(|p| p.allowed_for(UserRole::Admin)));
    }
}
