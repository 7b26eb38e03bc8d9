use crate::layout::global_context::AppGlobalContext;
use crate::shared::components::ui::badge::Badge;
use crate::shared::icons::icon;
use crate::system::auth::context::{self, use_auth};
use leptos::prelude::*;

#[component]
pub fn Header() -> impl IntoView {
    let nav = leptos::context::use_context::<AppGlobalContext>()
        .expect("AppGlobalContext context not found");
    let (auth_state, set_auth_state) = use_auth();

    let user_name = move || {
        auth_state
            .get()
            .user
            .as_ref()
            .map(|u| u.display_name())
            .unwrap_or_default()
    };

    let role_label = move || {
        auth_state
            .get()
            .user
            .as_ref()
            .and_then(|u| u.role())
            .map(|r| r.label().to_string())
            .unwrap_or_default()
    };

    let on_logout = move |_| {
        context::do_logout(set_auth_state);
    };

    view! {
        <header class="header">
            <div class="header__left">
                <button class="button button--icon" on:click=move |_| nav.toggle_sidebar()>
                    {icon("menu")}
                </button>
                <span class="header__brand">"EV Dealer Hub"</span>
            </div>
            <div class="header__right">
                <span class="header__user">{user_name}</span>
                <Badge variant="primary".to_string()>{role_label}</Badge>
                <button class="button button--ghost" on:click=on_logout>
                    {icon("logout")}
                    "Sign out"
                </button>
            </div>
        </header>
    }
}
