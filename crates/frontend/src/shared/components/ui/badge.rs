use contracts::domain::vehicle_request::RequestStatus;
use leptos::prelude::*;

/// Badge component with different variants
#[component]
pub fn Badge(
    /// Badge variant: "primary", "success", "warning", "error", "neutral" (default)
    #[prop(optional, into)]
    variant: MaybeProp<String>,
    /// Badge content
    children: Children,
    /// Additional CSS classes
    #[prop(optional, into)]
    class: MaybeProp<String>,
) -> impl IntoView {
    let variant_class = move || match variant.get().as_deref().unwrap_or("neutral") {
        "primary" => "badge--primary",
        "success" => "badge--success",
        "warning" => "badge--warning",
        "error" => "badge--error",
        _ => "badge--neutral",
    };

    let additional_class = move || class.get().unwrap_or_default();

    view! {
        <span class=move || format!("badge {} {}", variant_class(), additional_class())>
            {children()}
        </span>
    }
}

/// Status badge for restock requests. Shows the raw wire string with a
/// neutral style when the status does not normalize.
#[component]
pub fn RequestStatusBadge(#[prop(into)] status: Signal<String>) -> impl IntoView {
    let variant = move || match RequestStatus::parse(&status.get()) {
        Some(RequestStatus::Processing) => "warning",
        Some(RequestStatus::Completed) => "success",
        Some(RequestStatus::Rejected) => "error",
        None => "neutral",
    };

    let label = move || match RequestStatus::parse(&status.get()) {
        Some(normalized) => normalized.as_str().to_string(),
        None => status.get(),
    };

    view! {
        <Badge variant=Signal::derive(move || variant().to_string())>
            {label}
        </Badge>
    }
}
