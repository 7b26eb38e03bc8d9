use contracts::domain::vehicle::Vehicle;
use leptos::logging::log;
use leptos::prelude::*;
use leptos::task::spawn_local;
use thaw::*;

use crate::domain::vehicle::api;
use crate::shared::components::ui::badge::Badge;
use crate::shared::date_utils::format_price;
use crate::system::auth::context::use_auth;

/// Read-only catalog table, available to every role.
#[component]
pub fn VehicleCatalogPage() -> impl IntoView {
    let (auth_state, _) = use_auth();
    let vehicles = RwSignal::new(Vec::<Vehicle>::new());
    let (loading, set_loading) = signal(false);
    let (error, set_error) = signal::<Option<String>>(None);

    let load_vehicles = move || {
        let token = auth_state.get_untracked().token.unwrap_or_default();
        spawn_local(async move {
            set_loading.set(true);
            set_error.set(None);

            log!("Loading vehicle catalog");
            match api::get_all(&token).await {
                Ok(envelope) => {
                    if envelope.is_success {
                        vehicles.set(envelope.data.unwrap_or_default());
                    } else {
                        set_error.set(Some(
                            envelope.first_message_or("Failed to load the vehicle catalog"),
                        ));
                    }
                    set_loading.set(false);
                }
                Err(e) => {
                    set_error.set(Some(format!("Failed to fetch vehicles: {}", e)));
                    set_loading.set(false);
                }
            }
        });
    };

    Effect::new(move |_| {
        load_vehicles();
    });

    view! {
        <div class="page">
            <div class="page__header">
                <div class="page__header-left">
                    <h1 class="page__title">"Vehicle Catalog"</h1>
                    <Badge variant="primary".to_string()>
                        {move || vehicles.get().len().to_string()}
                    </Badge>
                </div>
                <div class="page__header-right">
                    <Button
                        appearance=ButtonAppearance::Primary
                        on_click=move |_| load_vehicles()
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

                <div class="table-wrapper">
                    <Table attr:style="width: 100%; min-width: 900px;">
                        <TableHeader>
                            <TableRow>
                                <TableHeaderCell>"Model"</TableHeaderCell>
                                <TableHeaderCell>"Category"</TableHeaderCell>
                                <TableHeaderCell>"Color"</TableHeaderCell>
                                <TableHeaderCell>"Battery (kWh)"</TableHeaderCell>
                                <TableHeaderCell>"Range (km)"</TableHeaderCell>
                                <TableHeaderCell>"Base price"</TableHeaderCell>
                                <TableHeaderCell>"In stock"</TableHeaderCell>
                                <TableHeaderCell>"Status"</TableHeaderCell>
                            </TableRow>
                        </TableHeader>
                        <TableBody>
                            <For
                                each=move || vehicles.get()
                                key=|vehicle| vehicle.id.clone()
                                children=move |vehicle| {
                                    let label = vehicle.display_label();
                                    let price = format_price(vehicle.base_price);
                                    view! {
                                        <TableRow>
                                            <TableCell>
                                                <TableCellLayout truncate=true>{label}</TableCellLayout>
                                            </TableCell>
                                            <TableCell>
                                                <TableCellLayout>{vehicle.category.clone()}</TableCellLayout>
                                            </TableCell>
                                            <TableCell>
                                                <TableCellLayout>{vehicle.color.clone()}</TableCellLayout>
                                            </TableCell>
                                            <TableCell>
                                                <TableCellLayout>{vehicle.battery_capacity.to_string()}</TableCellLayout>
                                            </TableCell>
                                            <TableCell>
                                                <TableCellLayout>{vehicle.range_per_charge.to_string()}</TableCellLayout>
                                            </TableCell>
                                            <TableCell>
                                                <TableCellLayout>{price}</TableCellLayout>
                                            </TableCell>
                                            <TableCell>
                                                <TableCellLayout>{vehicle.current_stock.to_string()}</TableCellLayout>
                                            </TableCell>
                                            <TableCell>
                                                <TableCellLayout>{vehicle.status.clone()}</TableCellLayout>
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
