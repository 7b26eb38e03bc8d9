pub mod state;

use self::state::{create_state, DraftItem};
use contracts::domain::vehicle::Vehicle;
use contracts::domain::vehicle_request::VehicleRequest;
use leptos::logging::log;
use leptos::prelude::*;
use leptos::task::spawn_local;
use thaw::*;

use crate::domain::vehicle::api as vehicle_api;
use crate::domain::vehicle_request::api;
use crate::shared::components::ui::badge::{Badge, RequestStatusBadge};
use crate::shared::components::ui::input::Textarea;
use crate::shared::date_utils::format_datetime;
use crate::shared::icons::icon;
use crate::shared::modal::Modal;
use crate::system::auth::context::use_auth;

/// Dealer Staff page: assemble a draft of vehicle line items, submit it
/// as restock requests, and track the requests created by this user.
#[component]
pub fn RestockRequestPage() -> impl IntoView {
    let (auth_state, _) = use_auth();
    let draft = create_state();

    let vehicles = RwSignal::new(Vec::<Vehicle>::new());
    let my_requests = RwSignal::new(Vec::<VehicleRequest>::new());

    let (loading, set_loading) = signal(false);
    let (error, set_error) = signal::<Option<String>>(None);
    let (draft_warning, set_draft_warning) = signal::<Option<String>>(None);

    let (modal_open, set_modal_open) = signal(false);
    let (submitting, set_submitting) = signal(false);
    let (submit_error, set_submit_error) = signal::<Option<String>>(None);
    let (submit_success, set_submit_success) = signal(false);

    let load_data = move || {
        let token = auth_state.get_untracked().token.unwrap_or_default();
        let user_id = auth_state.get_untracked().user_id().unwrap_or_default();
        spawn_local(async move {
            set_loading.set(true);
            set_error.set(None);

            match vehicle_api::get_all(&token).await {
                Ok(envelope) => {
                    if envelope.is_success {
                        vehicles.set(envelope.data.unwrap_or_default());
                    } else {
                        set_error.set(Some(
                            envelope.first_message_or("Failed to load the vehicle catalog"),
                        ));
                    }
                }
                Err(e) => {
                    set_error.set(Some(format!("Failed to fetch vehicles: {}", e)));
                }
            }

            match api::get_all(&token).await {
                Ok(envelope) => {
                    if envelope.is_success {
                        let all = envelope.data.unwrap_or_default();
                        my_requests.set(api::by_creator(&all, &user_id));
                    } else {
                        set_error.set(Some(
                            envelope.first_message_or("Failed to load restock requests"),
                        ));
                    }
                }
                Err(e) => {
                    set_error.set(Some(format!("Failed to fetch requests: {}", e)));
                }
            }

            set_loading.set(false);
        });
    };

    Effect::new(move |_| {
        load_data();
    });

    let add_to_draft = move |vehicle: Vehicle| {
        draft.update(|d| {
            if !d.add_item(DraftItem::from_vehicle(&vehicle)) {
                log!("vehicle {} already in draft", vehicle.id);
            }
        });
        set_draft_warning.set(None);
    };

    // Opening the modal is rejected while the draft is empty.
    let open_modal = move |_| {
        if draft.with_untracked(|d| d.is_empty()) {
            set_draft_warning.set(Some(
                "Add at least one vehicle to the request list first".to_string(),
            ));
            return;
        }
        set_draft_warning.set(None);
        set_submit_error.set(None);
        set_submit_success.set(false);
        set_modal_open.set(true);
    };

    let close_modal = Callback::new(move |_: ()| {
        if !submitting.get_untracked() {
            set_modal_open.set(false);
        }
    });

    // Sequential per-item submission: accepted lines leave the draft,
    // failed lines stay in it for a retry.
    let submit = move |_| {
        let note_ok = draft.with_untracked(|d| !d.note.trim().is_empty());
        if !note_ok {
            set_submit_error.set(Some("A note is required before submitting".to_string()));
            return;
        }
        if submitting.get_untracked() {
            return;
        }

        let token = auth_state.get_untracked().token.unwrap_or_default();
        let user_id = auth_state.get_untracked().user_id().unwrap_or_default();
        let dealer_id = auth_state.get_untracked().dealer_id().unwrap_or_default();
        let payloads = draft.with_untracked(|d| d.to_create_requests(&user_id, &dealer_id));

        set_submitting.set(true);
        set_submit_error.set(None);

        spawn_local(async move {
            let mut accepted: Vec<String> = Vec::new();
            let mut first_failure: Option<String> = None;

            for payload in &payloads {
                match api::create(&token, payload).await {
                    Ok(envelope) if envelope.is_success => {
                        accepted.push(payload.vehicle_id.clone());
                    }
                    Ok(envelope) => {
                        first_failure.get_or_insert_with(|| {
                            envelope.first_message_or("Failed to create the restock request")
                        });
                    }
                    Err(e) => {
                        first_failure.get_or_insert(e);
                    }
                }
            }

            draft.update(|d| d.remove_submitted(&accepted));

            match first_failure {
                None => {
                    set_submit_success.set(true);
                    set_submitting.set(false);
                    // Leave the success message on screen before closing.
                    gloo_timers::future::TimeoutFuture::new(2000).await;
                    draft.update(|d| d.clear());
                    set_submit_success.set(false);
                    set_modal_open.set(false);
                    load_data();
                }
                Some(message) => {
                    let kept = draft.with_untracked(|d| d.items.len());
                    set_submit_error.set(Some(format!(
                        "{} ({} item(s) kept in the draft)",
                        message, kept
                    )));
                    set_submitting.set(false);
                    load_data();
                }
            }
        });
    };

    view! {
        <div class="page">
            <div class="page__header">
                <div class="page__header-left">
                    <h1 class="page__title">"Restock Requests"</h1>
                    <Badge variant="primary".to_string()>
                        {move || draft.get().items.len().to_string()}
                    </Badge>
                </div>
                <div class="page__header-right">
                    <Button
                        appearance=ButtonAppearance::Secondary
                        on_click=move |_| load_data()
                        disabled=Signal::derive(move || loading.get())
                    >
                        {move || if loading.get() { "Loading..." } else { "Refresh" }}
                    </Button>
                    <Button
                        appearance=ButtonAppearance::Primary
                        on_click=open_modal
                    >
                        "Submit request"
                    </Button>
                </div>
            </div>

            <div class="page__content">
                {move || {
                    error.get().map(|err| view! {
                        <div class="alert alert--error">{err}</div>
                    })
                }}
                {move || {
                    draft_warning.get().map(|warning| view! {
                        <div class="alert alert--warning">{warning}</div>
                    })
                }}

                <h2 class="page__section-title">"Request list"</h2>
                <Show
                    when=move || !draft.get().is_empty()
                    fallback=|| view! {
                        <p class="page__empty">"No vehicles selected yet. Add them from the catalog below."</p>
                    }
                >
                    <div class="table-wrapper">
                        <Table attr:style="width: 100%;">
                            <TableHeader>
                                <TableRow>
                                    <TableHeaderCell>"Model"</TableHeaderCell>
                                    <TableHeaderCell>"In stock"</TableHeaderCell>
                                    <TableHeaderCell>"Quantity"</TableHeaderCell>
                                    <TableHeaderCell>""</TableHeaderCell>
                                </TableRow>
                            </TableHeader>
                            <TableBody>
                                <For
                                    each=move || draft.get().items
                                    key=|item| item.vehicle_id.clone()
                                    children=move |item| {
                                        let vehicle_id = item.vehicle_id.clone();
                                        let remove_id = item.vehicle_id.clone();
                                        view! {
                                            <TableRow>
                                                <TableCell>
                                                    <TableCellLayout truncate=true>{item.model_label.clone()}</TableCellLayout>
                                                </TableCell>
                                                <TableCell>
                                                    <TableCellLayout>{item.current_stock.to_string()}</TableCellLayout>
                                                </TableCell>
                                                <TableCell>
                                                    <input
                                                        class="form__input form__input--quantity"
                                                        type="number"
                                                        min="1"
                                                        value=item.quantity.to_string()
                                                        on:input=move |ev| {
                                                            let raw = event_target_value(&ev);
                                                            draft.update(|d| d.update_quantity(&vehicle_id, &raw));
                                                        }
                                                    />
                                                </TableCell>
                                                <TableCell>
                                                    <button
                                                        class="button button--icon"
                                                        on:click=move |_| draft.update(|d| d.remove_item(&remove_id))
                                                    >
                                                        {icon("trash")}
                                                    </button>
                                                </TableCell>
                                            </TableRow>
                                        }
                                    }
                                />
                            </TableBody>
                        </Table>
                    </div>
                </Show>

                <h2 class="page__section-title">"Catalog"</h2>
                <div class="table-wrapper">
                    <Table attr:style="width: 100%;">
                        <TableHeader>
                            <TableRow>
                                <TableHeaderCell>"Model"</TableHeaderCell>
                                <TableHeaderCell>"Category"</TableHeaderCell>
                                <TableHeaderCell>"In stock"</TableHeaderCell>
                                <TableHeaderCell>""</TableHeaderCell>
                            </TableRow>
                        </TableHeader>
                        <TableBody>
                            <For
                                each=move || vehicles.get()
                                key=|vehicle| vehicle.id.clone()
                                children=move |vehicle| {
                                    let label = vehicle.display_label();
                                    let vehicle_id = vehicle.id.clone();
                                    let in_draft = Signal::derive(move || {
                                        draft.with(|d| d.contains(&vehicle_id))
                                    });
                                    let vehicle_for_add = vehicle.clone();
                                    view! {
                                        <TableRow>
                                            <TableCell>
                                                <TableCellLayout truncate=true>{label}</TableCellLayout>
                                            </TableCell>
                                            <TableCell>
                                                <TableCellLayout>{vehicle.category.clone()}</TableCellLayout>
                                            </TableCell>
                                            <TableCell>
                                                <TableCellLayout>{vehicle.current_stock.to_string()}</TableCellLayout>
                                            </TableCell>
                                            <TableCell>
                                                <Button
                                                    appearance=ButtonAppearance::Secondary
                                                    disabled=in_draft
                                                    on_click=move |_| add_to_draft(vehicle_for_add.clone())
                                                >
                                                    {move || if in_draft.get() { "Added" } else { "Add" }}
                                                </Button>
                                            </TableCell>
                                        </TableRow>
                                    }
                                }
                            />
                        </TableBody>
                    </Table>
                </div>

                <h2 class="page__section-title">"My requests"</h2>
                <div class="table-wrapper">
                    <Table attr:style="width: 100%;">
                        <TableHeader>
                            <TableRow>
                                <TableHeaderCell>"Created"</TableHeaderCell>
                                <TableHeaderCell>"Vehicle"</TableHeaderCell>
                                <TableHeaderCell>"Quantity"</TableHeaderCell>
                                <TableHeaderCell>"Note"</TableHeaderCell>
                                <TableHeaderCell>"Status"</TableHeaderCell>
                            </TableRow>
                        </TableHeader>
                        <TableBody>
                            <For
                                each=move || my_requests.get()
                                key=|request| request.id.clone()
                                children=move |request| {
                                    let created = format_datetime(&request.created_at);
                                    let status = request.status.clone();
                                    view! {
                                        <TableRow>
                                            <TableCell>
                                                <TableCellLayout>{created}</TableCellLayout>
                                            </TableCell>
                                            <TableCell>
                                                <TableCellLayout truncate=true>{request.vehicle_id.clone()}</TableCellLayout>
                                            </TableCell>
                                            <TableCell>
                                                <TableCellLayout>{request.quantity.to_string()}</TableCellLayout>
                                            </TableCell>
                                            <TableCell>
                                                <TableCellLayout truncate=true>{request.note.clone().unwrap_or_default()}</TableCellLayout>
                                            </TableCell>
                                            <TableCell>
                                                <RequestStatusBadge status=Signal::derive(move || status.clone()) />
                                            </TableCell>
                                        </TableRow>
                                    }
                                }
                            />
                        </TableBody>
                    </Table>
                </div>
            </div>

            <Show when=move || modal_open.get()>
                <Modal title="Submit restock request".to_string() on_close=close_modal>
                    {move || {
                        submit_error.get().map(|err| view! {
                            <div class="alert alert--error">{err}</div>
                        })
                    }}
                    <Show when=move || submit_success.get()>
                        <div class="alert alert--success">"Request submitted"</div>
                    </Show>

                    <p class="modal__summary">
                        {move || {
                            let d = draft.get();
                            format!("{} item(s), {} unit(s) total", d.items.len(), d.total_units())
                        }}
                    </p>

                    <Textarea
                        label="Note".to_string()
                        value=Signal::derive(move || draft.with(|d| d.note.clone()))
                        on_input=Callback::new(move |value: String| {
                            draft.update(|d| d.note = value);
                        })
                        placeholder="Why is this restock needed?".to_string()
                        disabled=false
                        rows=3
                    />

                    <div class="modal__actions">
                        <button
                            class="button button--primary"
                            disabled=move || submitting.get()
                            on:click=submit
                        >
                            {move || if submitting.get() { "Submitting..." } else { "Submit" }}
                        </button>
                    </div>
                </Modal>
            </Show>
        </div>
    }
}
