use crate::layout::global_context::{AppGlobalContext, Page};
use crate::shared::icons::icon;
use crate::system::auth::context::use_auth;
use leptos::prelude::*;

#[component]
pub fn Sidebar() -> impl IntoView {
    let nav = leptos::context::use_context::<AppGlobalContext>()
        .expect("AppGlobalContext context not found");
    let (auth_state, _) = use_auth();

    let visible_pages = move || {
        let role = auth_state.get().user.as_ref().and_then(|u| u.role());
        Page::ALL
            .into_iter()
            .filter(|page| role.map(|r| page.allowed_for(r)).unwrap_or(false))
            .collect::<Vec<_>>()
    };

    view! {
        <Show when=move || nav.sidebar_open.get()>
            <nav class="sidebar">
                <ul class="sidebar__list">
                    <For
                        each=visible_pages
                        key=|page| page.title()
                        children=move |page| {
                            let is_active = move || nav.current_page.get() == page;
                            view! {
                                <li class="sidebar__item">
                                    <button
                                        class=move || {
                                            if is_active() {
                                                "sidebar__link sidebar__link--active"
                                            } else {
                                                "sidebar__link"
                                            }
                                        }
                                        on:click=move |_| nav.open_page(page)
                                    >
                                        {icon(page.icon_name())}
                                        <span class="sidebar__label">{page.title()}</span>
                                    </button>
                                </li>
                            }
                        }
                    />
                </ul>
            </nav>
        </Show>
    }
}
