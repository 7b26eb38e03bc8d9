pub mod global_context;
pub mod header;
pub mod sidebar;

use leptos::prelude::*;

use self::header::Header;
use self::sidebar::Sidebar;

/// Application frame: fixed header, role-filtered sidebar, page content.
#[component]
pub fn Shell<C>(content: C) -> impl IntoView
where
    C: Fn() -> AnyView + Send + Sync + 'static,
{
    view! {
        <div class="shell">
            <Header />
            <div class="shell__body">
                <Sidebar />
                <main class="shell__content">{move || content()}</main>
            </div>
        </div>
    }
}
