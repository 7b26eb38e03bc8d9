use contracts::domain::promotion::{Promotion, PromotionForm};
use leptos::logging::log;
use leptos::prelude::*;
use leptos::task::spawn_local;
use thaw::*;

use crate::domain::promotion::api;
use crate::shared::components::ui::badge::Badge;
use crate::shared::components::ui::input::{Input, Textarea};
use crate::shared::date_utils::format_date;
use crate::shared::modal::{ConfirmDialog, Modal};
use crate::system::auth::context::use_auth;

/// Dealer Manager page: full CRUD over the dealer's promotions through a
/// two-mode (create/edit) modal sharing one form shape.
#[component]
pub fn PromotionsPage() -> impl IntoView {
    let (auth_state, _) = use_auth();

    let promotions = RwSignal::new(Vec::<Promotion>::new());
    let (loading, set_loading) = signal(false);
    let (error, set_error) = signal::<Option<String>>(None);

    let form = RwSignal::new(PromotionForm::default());
    let (modal_open, set_modal_open) = signal(false);
    let (saving, set_saving) = signal(false);
    let (form_error, set_form_error) = signal::<Option<String>>(None);

    // Delete confirmation holds the promotion by value, so the dialog
    // stays correct if the list refreshes underneath it.
    let (delete_target, set_delete_target) = signal::<Option<Promotion>>(None);
    let (deleting, set_deleting) = signal(false);

    let load_promotions = move || {
        let token = auth_state.get_untracked().token.unwrap_or_default();
        let dealer_id = auth_state.get_untracked().dealer_id().unwrap_or_default();
        spawn_local(async move {
            set_loading.set(true);
            set_error.set(None);

            log!("Loading promotions for dealer {}", dealer_id);
            match api::get_by_dealer_id(&token, &dealer_id).await {
                Ok(envelope) => {
                    if envelope.is_success {
                        promotions.set(envelope.data.unwrap_or_default());
                    } else {
                        set_error.set(Some(
                            envelope.first_message_or("Failed to load promotions"),
                        ));
                    }
                    set_loading.set(false);
                }
                Err(e) => {
                    set_error.set(Some(format!("Failed to fetch promotions: {}", e)));
                    set_loading.set(false);
                }
            }
        });
    };

    Effect::new(move |_| {
        load_promotions();
    });

    let open_create = move |_| {
        form.set(PromotionForm {
            discount_type: "Percentage".to_string(),
            ..PromotionForm::default()
        });
        set_form_error.set(None);
        set_modal_open.set(true);
    };

    let open_edit = move |promotion: Promotion| {
        form.set(PromotionForm::from_promotion(&promotion));
        set_form_error.set(None);
        set_modal_open.set(true);
    };

    let close_modal = Callback::new(move |_: ()| {
        if !saving.get_untracked() {
            set_modal_open.set(false);
        }
    });

    let save = move |_| {
        if saving.get_untracked() {
            return;
        }
        let current = form.get_untracked();
        let user_id = auth_state.get_untracked().user_id().unwrap_or_default();

        // Validate before any network call; dates are normalized by
        // to_payload on success.
        let payload = match current.to_payload(&user_id) {
            Ok(payload) => payload,
            Err(message) => {
                set_form_error.set(Some(message));
                return;
            }
        };

        let token = auth_state.get_untracked().token.unwrap_or_default();
        set_saving.set(true);
        set_form_error.set(None);

        spawn_local(async move {
            let result = match current.id.as_deref() {
                Some(id) => api::update(&token, id, &payload).await,
                None => api::create(&token, &payload).await,
            };

            match result {
                Ok(envelope) => {
                    if envelope.is_success {
                        set_saving.set(false);
                        set_modal_open.set(false);
                        load_promotions();
                    } else {
                        set_form_error.set(Some(
                            envelope.first_message_or("Failed to save the promotion"),
                        ));
                        set_saving.set(false);
                    }
                }
                Err(e) => {
                    set_form_error.set(Some(format!("Failed to save the promotion: {}", e)));
                    set_saving.set(false);
                }
            }
        });
    };

    let confirm_delete = move |_: ()| {
        let Some(target) = delete_target.get_untracked() else {
            return;
        };
        let token = auth_state.get_untracked().token.unwrap_or_default();
        let promotion_id = target.id.clone();

        set_deleting.set(true);
        set_error.set(None);

        spawn_local(async move {
            match api::delete(&token, &promotion_id).await {
                Ok(envelope) => {
                    if envelope.is_success {
                        set_deleting.set(false);
                        set_delete_target.set(None);
                        load_promotions();
                    } else {
                        set_error.set(Some(
                            envelope.first_message_or("Failed to delete the promotion"),
                        ));
                        set_deleting.set(false);
                        set_delete_target.set(None);
                    }
                }
                Err(e) => {
                    set_error.set(Some(format!("Failed to delete the promotion: {}", e)));
                    set_deleting.set(false);
                    set_delete_target.set(None);
                }
            }
        });
    };

    view! {
        <div class="page">
            <div class="page__header">
                <div class="page__header-left">
                    <h1 class="page__title">"Promotions"</h1>
                    <Badge variant="primary".to_string()>
                        {move || promotions.get().len().to_string()}
                    </Badge>
                </div>
                <div class="page__header-right">
                    <Button
                        appearance=ButtonAppearance::Secondary
                        on_click=move |_| load_promotions()
                        disabled=Signal::derive(move || loading.get())
                    >
                        {move || if loading.get() { "Loading..." } else { "Refresh" }}
                    </Button>
                    <Button appearance=ButtonAppearance::Primary on_click=open_create>
                        "New promotion"
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
                                <TableHeaderCell>"Name"</TableHeaderCell>
                                <TableHeaderCell>"Discount"</TableHeaderCell>
                                <TableHeaderCell>"Starts"</TableHeaderCell>
                                <TableHeaderCell>"Ends"</TableHeaderCell>
                                <TableHeaderCell>"Active"</TableHeaderCell>
                                <TableHeaderCell>""</TableHeaderCell>
                            </TableRow>
                        </TableHeader>
                        <TableBody>
                            <For
                                each=move || promotions.get()
                                key=|promotion| promotion.id.clone()
                                children=move |promotion| {
                                    let starts = format_date(&promotion.start_date);
                                    let ends = format_date(&promotion.end_date);
                                    let discount = format!("{}%", promotion.discount_percent);
                                    let active = promotion.is_active;
                                    let edit_target = promotion.clone();
                                    let delete_row = promotion.clone();
                                    view! {
                                        <TableRow>
                                            <TableCell>
                                                <TableCellLayout truncate=true>{promotion.name.clone()}</TableCellLayout>
                                            </TableCell>
                                            <TableCell>
                                                <TableCellLayout>{discount}</TableCellLayout>
                                            </TableCell>
                                            <TableCell>
                                                <TableCellLayout>{starts}</TableCellLayout>
                                            </TableCell>
                                            <TableCell>
                                                <TableCellLayout>{ends}</TableCellLayout>
                                            </TableCell>
                                            <TableCell>
                                                <Badge variant=if active { "success".to_string() } else { "neutral".to_string() }>
                                                    {if active { "Active" } else { "Inactive" }}
                                                </Badge>
                                            </TableCell>
                                            <TableCell>
                                                <Button
                                                    appearance=ButtonAppearance::Secondary
                                                    on_click=move |_| open_edit(edit_target.clone())
                                                >
                                                    "Edit"
                                                </Button>
                                                <Button
                                                    appearance=ButtonAppearance::Secondary
                                                    on_click=move |_| set_delete_target.set(Some(delete_row.clone()))
                                                >
                                                    "Delete"
                                                </Button>
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
                <Modal
                    title=if form.get_untracked().is_edit_mode() {
                        "Edit promotion".to_string()
                    } else {
                        "New promotion".to_string()
                    }
                    on_close=close_modal
                >
                    {move || {
                        form_error.get().map(|err| view! {
                            <div class="alert alert--error">{err}</div>
                        })
                    }}

                    <Input
                        label="Name".to_string()
                        value=Signal::derive(move || form.with(|f| f.name.clone()))
                        on_input=Callback::new(move |value: String| form.update(|f| f.name = value))
                    />
                    <Textarea
                        label="Description".to_string()
                        value=Signal::derive(move || form.with(|f| f.description.clone()))
                        on_input=Callback::new(move |value: String| form.update(|f| f.description = value))
                        rows=2
                    />
                    <Input
                        label="Discount percent".to_string()
                        input_type="number".to_string()
                        value=Signal::derive(move || form.with(|f| f.discount_percent.clone()))
                        on_input=Callback::new(move |value: String| {
                            form.update(|f| f.discount_percent = value)
                        })
                    />
                    <Input
                        label="Start date".to_string()
                        input_type="date".to_string()
                        value=Signal::derive(move || form.with(|f| f.start_date.clone()))
                        on_input=Callback::new(move |value: String| form.update(|f| f.start_date = value))
                    />
                    <Input
                        label="End date".to_string()
                        input_type="date".to_string()
                        value=Signal::derive(move || form.with(|f| f.end_date.clone()))
                        on_input=Callback::new(move |value: String| form.update(|f| f.end_date = value))
                    />
                    <Textarea
                        label="Note".to_string()
                        value=Signal::derive(move || form.with(|f| f.note.clone()))
                        on_input=Callback::new(move |value: String| form.update(|f| f.note = value))
                        rows=2
                    />
                    <div class="form__group form__group--inline">
                        <label class="form__label">"Active"</label>
                        <input
                            type="checkbox"
                            prop:checked=move || form.with(|f| f.is_active)
                            on:change=move |ev| {
                                form.update(|f| f.is_active = event_target_checked(&ev))
                            }
                        />
                    </div>

                    <div class="modal__actions">
                        <button
                            class="button button--primary"
                            disabled=move || saving.get()
                            on:click=save
                        >
                            {move || if saving.get() { "Saving..." } else { "Save" }}
                        </button>
                    </div>
                </Modal>
            </Show>

            {move || {
                delete_target.get().map(|target| {
                    let name = target.name.clone();
                    view! {
                        <ConfirmDialog
                            title="Delete promotion".to_string()
                            message=format!("Delete promotion \"{}\"? This cannot be undone.", name)
                            confirm_label="Delete".to_string()
                            busy=Signal::derive(move || deleting.get())
                            on_confirm=Callback::new(confirm_delete)
                            on_cancel=Callback::new(move |_: ()| {
                                if !deleting.get_untracked() {
                                    set_delete_target.set(None);
                                }
                            })
                        />
                    }
                })
            }}
        </div>
    }
}
