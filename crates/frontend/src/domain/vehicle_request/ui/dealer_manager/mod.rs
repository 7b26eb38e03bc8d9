use contracts::domain::vehicle_request::VehicleRequest;
use leptos::logging::log;
use leptos::prelude::*;
use leptos::task::spawn_local;
use thaw::*;

use crate::domain::vehicle_request::api;
use crate::shared::components::ui::badge::{Badge, RequestStatusBadge};
use crate::shared::date_utils::format_datetime;
use crate::shared::modal::ConfirmDialog;
use crate::system::auth::context::use_auth;

/// Dealer Manager page: verify the dealer's pending restock requests.
/// Denial deletes the request; there is no separate reject endpoint.
#[component]
pub fn RequestVerificationPage() -> impl IntoView {
    let (auth_state, _) = use_auth();

    let requests = RwSignal::new(Vec::<VehicleRequest>::new());
    let (loading, set_loading) = signal(false);
    let (error, set_error) = signal::<Option<String>>(None);

    // Only the targeted row shows a busy indicator.
    let (deleting_id, set_deleting_id) = signal::<Option<String>>(None);
    let (confirm_target, set_confirm_target) = signal::<Option<VehicleRequest>>(None);

    let load_requests = move || {
        let token = auth_state.get_untracked().token.unwrap_or_default();
        spawn_local(async move {
            set_loading.set(true);
            set_error.set(None);

            log!("Loading restock requests for verification");
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

    // Partition recomputed on every render; collections stay small.
    let partition = move || {
        let dealer_id = auth_state.get().dealer_id().unwrap_or_default();
        requests.with(|all| api::partition_for_manager(all, &dealer_id))
    };
    let pending = move || partition().0;
    let history = move || partition().1;

    let confirm_deny = move |_: ()| {
        let Some(target) = confirm_target.get_untracked() else {
            return;
        };
        let token = auth_state.get_untracked().token.unwrap_or_default();
        let request_id = target.id.clone();

        set_deleting_id.set(Some(request_id.clone()));
        set_error.set(None);

        spawn_local(async move {
            // Refetch instead of patching the list locally.
            let outcome = api::deny_and_refresh(
                || api::delete(&token, &request_id),
                || api::get_all(&token),
            )
            .await;

            match outcome {
                Ok(all) => requests.set(all),
                Err(message) => set_error.set(Some(message)),
            }
            set_deleting_id.set(None);
            set_confirm_target.set(None);
        });
    };

    view! {
        <div class="page">
            <div class="page__header">
                <div class="page__header-left">
                    <h1 class="page__title">"Request Verification"</h1>
                    <Badge variant="warning".to_string()>
                        {move || pending().len().to_string()}
                    </Badge>
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

                <h2 class="page__section-title">"Pending"</h2>
                <Show
                    when=move || !pending().is_empty()
                    fallback=|| view! { <p class="page__empty">"Nothing to verify."</p> }
                >
                    <div class="table-wrapper">
                        <Table attr:style="width: 100%;">
                            <TableHeader>
                                <TableRow>
                                    <TableHeaderCell>"Created"</TableHeaderCell>
                                    <TableHeaderCell>"Created by"</TableHeaderCell>
                                    <TableHeaderCell>"Vehicle"</TableHeaderCell>
                                    <TableHeaderCell>"Quantity"</TableHeaderCell>
                                    <TableHeaderCell>"Note"</TableHeaderCell>
                                    <TableHeaderCell>""</TableHeaderCell>
                                </TableRow>
                            </TableHeader>
                            <TableBody>
                                <For
                                    each=pending
                                    key=|request| request.id.clone()
                                    children=move |request| {
                                        let created = format_datetime(&request.created_at);
                                        let creator = request
                                            .created_by_name
                                            .clone()
                                            .unwrap_or_else(|| request.created_by.clone());
                                        let row_id = request.id.clone();
                                        let row_busy = Signal::derive(move || {
                                            deleting_id.get().as_deref() == Some(row_id.as_str())
                                        });
                                        let target = request.clone();
                                        view! {
                                            <TableRow>
                                                <TableCell>
                                                    <TableCellLayout>{created}</TableCellLayout>
                                                </TableCell>
                                                <TableCell>
                                                    <TableCellLayout truncate=true>{creator}</TableCellLayout>
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
                                                    <Button
                                                        appearance=ButtonAppearance::Secondary
                                                        disabled=row_busy
                                                        on_click=move |_| set_confirm_target.set(Some(target.clone()))
                                                    >
                                                        {move || if row_busy.get() { "Denying..." } else { "Deny" }}
                                                    </Button>
                                                </TableCell>
                                            </TableRow>
                                        }
                                    }
                                />
                            </TableBody>
                        </Table>
                    </div>
                </Show>

                <h2 class="page__section-title">"History"</h2>
                <div class="table-wrapper">
                    <Table attr:style="width: 100%;">
                        <TableHeader>
                            <TableRow>
                                <TableHeaderCell>"Created"</TableHeaderCell>
                                <TableHeaderCell>"Vehicle"</TableHeaderCell>
                                <TableHeaderCell>"Quantity"</TableHeaderCell>
                                <TableHeaderCell>"Approved by"</TableHeaderCell>
                                <TableHeaderCell>"Status"</TableHeaderCell>
                            </TableRow>
                        </TableHeader>
                        <TableBody>
                            <For
                                each=history
                                key=|request| request.id.clone()
                                children=move |request| {
                                    let created = format_datetime(&request.created_at);
                                    let approver = request.approved_by_name.clone().unwrap_or_default();
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
                                                <TableCellLayout truncate=true>{approver}</TableCellLayout>
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

            {move || {
                confirm_target.get().map(|target| {
                    let quantity = target.quantity;
                    let vehicle = target.vehicle_id.clone();
                    view! {
                        <ConfirmDialog
                            title="Deny restock request".to_string()
                            message=format!(
                                "Deny the request for {} unit(s) of vehicle {}? The request will be removed.",
                                quantity, vehicle
                            )
                            confirm_label="Deny".to_string()
                            busy=Signal::derive(move || deleting_id.get().is_some())
                            on_confirm=Callback::new(confirm_deny)
                            on_cancel=Callback::new(move |_: ()| {
                                if deleting_id.get_untracked().is_none() {
                                    set_confirm_target.set(None);
                                }
                            })
                        />
                    }
                })
            }}
        </div>
    }
}
