pub mod state;

use self::state::RequestSummary;
use contracts::domain::vehicle_request::VehicleRequest;
use leptos::logging::log;
use leptos::prelude::*;
use leptos::task::spawn_local;
use thaw::*;

use crate::domain::vehicle_request::api;
use crate::shared::components::stat_card::{StatCard, StatTone};
use crate::shared::components::ui::badge::RequestStatusBadge;
use crate::shared::date_utils::format_datetime;
use crate::system::auth::context::use_auth;

/// EVM Staff page: network-wide view of all restock requests with
/// per-status counts. Approving a pending request is its only mutation.
#[component]
pub fn EvmOverviewPage() -> impl IntoView {
    let (auth_state, _) = use_auth();

    let requests = RwSignal::new(Vec::<VehicleRequest>::new());
    let (loading, set_loading) = signal(false);
    let (error, set_error) = signal::<Option<String>>(None);
    let (approving_id, set_approving_id) = signal::<Option<String>>(None);

    let load_requests = move || {
        let token = auth_state.get_untracked().token.unwrap_or_default();
        spawn_local(async move {
            set_loading.set(true);
            set_error.set(None);

            log!("Loading restock requests for the EVM overview");
            match api::get_all(&token).await {
                Ok(envelope) => {
                    if envelope.is_success {
                        requests.set(envelope.data.unwrap_or_default());
                    } else {
                        set_error.set(Some(
                            envelope.first_message_or("Failed to load restock requests"),
                        ));
                    }
                    set_loading.set(false);
                }
                Err(e) => {
                    set_error.set(Some(format!("Failed to fetch requests: {}", e)));
                    set_loading.set(false);
                }
            }
        });
    };

    Effect::new(move |_| {
        load_requests();
    });

    let summary = Signal::derive(move || requests.with(|all| RequestSummary::from_requests(all)));
    let loaded = Signal::derive(move || !loading.get());

    let approve = move |request_id: String| {
        let token = auth_state.get_untracked().token.unwrap_or_default();
        let evm_staff_id = auth_state.get_untracked().user_id().unwrap_or_default();

        set_approving_id.set(Some(request_id.clone()));
        set_error.set(None);

        spawn_local(async move {
            match api::approve(&token, &request_id, &evm_staff_id).await {
                Ok(envelope) => {
                    if envelope.is_success {
                        set_approving_id.set(None);
                        load_requests();
                    } else {
                        set_error.set(Some(
                            envelope.first_message_or("Failed to approve the request"),
                        ));
                        set_approving_id.set(None);
                    }
                }
                Err(e) => {
                    set_error.set(Some(format!("Failed to approve the request: {}", e)));
                    set_approving_id.set(None);
                }
            }
        });
    };

    view! {
        <div class="page">
            <div class="page__header">
                <div class="page__header-left">
                    <h1 class="page__title">"Requests Overview"</h1>
                </div>
                <div class="page__header-right">
                    <Button
                        appearance=ButtonAppearance::Primary
                        on_click=move |_| load_requests()
                        disabled=Signal::derive(move || loading.get())
                    >
                        {move || if loading.get() { "Loading..." } else { "Refresh" }}
                    </Button>
                </div>
            </div>

            <div class="page__content">
                {move || {
                    error.get().map(|err| view! {
                        <div class="alert alert--error">{err}</div>
                    })
                }}

                <div class="stat-grid">
                    <StatCard
                        label="Total requests".to_string()
                        icon_name="requests".to_string()
                        value=Signal::derive(move || loaded.get().then(|| summary.get().total as i64))
                        tone=StatTone::Neutral
                    />
                    <StatCard
                        label="Processing".to_string()
                        icon_name="requests".to_string()
                        value=Signal::derive(move || loaded.get().then(|| summary.get().processing as i64))
                        tone=StatTone::Warning
                    />
                    <StatCard
                        label="Completed".to_string()
                        icon_name="check".to_string()
                        value=Signal::derive(move || loaded.get().then(|| summary.get().completed as i64))
                        tone=StatTone::Success
                    />
                    <StatCard
                        label="Rejected".to_string()
                        icon_name="x".to_string()
                        value=Signal::derive(move || loaded.get().then(|| summary.get().rejected as i64))
                        tone=StatTone::Error
                    />
                    <StatCard
                        label="Units requested".to_string()
                        icon_name="units".to_string()
                        value=Signal::derive(move || loaded.get().then(|| summary.get().total_units))
                        tone=StatTone::Neutral
                    />
                </div>

                <div class="table-wrapper">
                    <Table attr:style="width: 100%; min-width: 900px;">
                        <TableHeader>
                            <TableRow>
                                <TableHeaderCell>"Created"</TableHeaderCell>
                                <TableHeaderCell>"Dealer"</TableHeaderCell>
                                <TableHeaderCell>"Vehicle"</TableHeaderCell>
                                <TableHeaderCell>"Quantity"</TableHeaderCell>
                                <TableHeaderCell>"Created by"</TableHeaderCell>
                                <TableHeaderCell>"Status"</TableHeaderCell>
                                <TableHeaderCell>""</TableHeaderCell>
                            </TableRow>
                        </TableHeader>
                        <TableBody>
                            <For
                                each=move || requests.get()
                                key=|request| request.id.clone()
                                children=move |request| {
                                    let created = format_datetime(&request.created_at);
                                    let creator = request
                                        .created_by_name
                                        .clone()
                                        .unwrap_or_else(|| request.created_by.clone());
                                    let status = request.status.clone();
                                    let is_pending = request.is_pending();
                                    let row_id = request.id.clone();
                                    let approve_id = request.id.clone();
                                    let row_busy = Signal::derive(move || {
                                        approving_id.get().as_deref() == Some(row_id.as_str())
                                    });
                                    view! {
                                        <TableRow>
                                            <TableCell>
                                                <TableCellLayout>{created}</TableCellLayout>
                                            </TableCell>
                                            <TableCell>
                                                <TableCellLayout truncate=true>{request.dealer_id.clone()}</TableCellLayout>
                                            </TableCell>
                                            <TableCell>
                                                <TableCellLayout truncate=true>{request.vehicle_id.clone()}</TableCellLayout>
                                            </TableCell>
                                            <TableCell>
                                                <TableCellLayout>{request.quantity.to_string()}</TableCellLayout>
                                            </TableCell>
                                            <TableCell>
                                                <TableCellLayout truncate=true>{creator}</TableCellLayout>
                                            </TableCell>
                                            <TableCell>
                                                <RequestStatusBadge status=Signal::derive(move || status.clone()) />
                                            </TableCell>
                                            <TableCell>
                                                {is_pending.then(|| view! {
                                                    <Button
                                                        appearance=ButtonAppearance::Primary
                                                        disabled=row_busy
                                                        on_click=move |_| approve(approve_id.clone())
                                                    >
                                                        {move || if row_busy.get() { "Approving..." } else { "Approve" }}
                                                    </Button>
                                                })}
                                            </TableCell>
                                        </TableRow>
                                    }
                                }
                            />
                        </TableBody>
                    </Table>
                </div>
            </div>
        </div>
    }
}
