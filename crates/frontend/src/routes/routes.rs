use crate::domain::promotion::ui::PromotionsPage;
use crate::domain::vehicle::ui::list::VehicleCatalogPage;
use crate::domain::vehicle_request::ui::dealer_manager::RequestVerificationPage;
use crate::domain::vehicle_request::ui::dealer_staff::RestockRequestPage;
use crate::domain::vehicle_request::ui::evm_staff::EvmOverviewPage;
use crate::layout::global_context::{AppGlobalContext, Page};
use crate::layout::Shell;
use crate::system::auth::context::use_auth;
use crate::system::pages::login::LoginPage;
use leptos::prelude::*;

#[component]
fn MainLayout() -> impl IntoView {
    let nav = leptos::context::use_context::<AppGlobalContext>()
        .expect("AppGlobalContext context not found");
    let (auth_state, _) = use_auth();

    // Land each role on its primary page after login.
    Effect::new(move |_| {
        if let Some(role) = auth_state.get().user.as_ref().and_then(|u| u.role()) {
            let current = nav.current_page.get_untracked();
            if !current.allowed_for(role) {
                nav.open_page(Page::default_for(role));
            }
        }
    });

    view! {
        <Shell content=move || {
            match nav.current_page.get() {
                Page::VehicleCatalog => view! { <VehicleCatalogPage /> }.into_any(),
                Page::RestockRequests => view! { <RestockRequestPage /> }.into_any(),
                Page::RequestVerification => view! { <RequestVerificationPage /> }.into_any(),
                Page::EvmOverview => view! { <EvmOverviewPage /> }.into_any(),
                Page::Promotions => view! { <PromotionsPage /> }.into_any(),
            }
        } />
    }
}

#[component]
pub fn AppRoutes() -> impl IntoView {
    let (auth_state, _) = use_auth();

    view! {
        <Show
            when=move || auth_state.get().token.is_some()
            fallback=|| view! { <LoginPage /> }
        >
            <MainLayout />
        </Show>
    }
}
