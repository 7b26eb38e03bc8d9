use crate::shared::icons::icon;
use leptos::prelude::*;

/// Tone of a stat card, mapped to a modifier class.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatTone {
    Neutral,
    Warning,
    Success,
    Error,
}

/// Card showing a single labelled count on the overview dashboards.
#[component]
pub fn StatCard(
    /// Label displayed above the value
    label: String,
    /// Icon name from the icon() helper
    icon_name: String,
    /// Value to display (None while loading)
    #[prop(into)]
    value: Signal<Option<i64>>,
    /// Visual tone
    tone: StatTone,
) -> impl IntoView {
    let tone_class = match tone {
        StatTone::Neutral => "stat-card",
        StatTone::Warning => "stat-card stat-card--warning",
        StatTone::Success => "stat-card stat-card--success",
        StatTone::Error => "stat-card stat-card--error",
    };

    let formatted = move || match value.get() {
        Some(v) => v.to_string(),
        None => "—".to_string(),
    };

    view! {
        <div class=tone_class>
            <div class="stat-card__icon">
                {icon(&icon_name)}
            </div>
            <div class="stat-card__content">
                <div class="stat-card__label">{label}</div>
                <div class="stat-card__value">{formatted}</div>
            </div>
        </div>
    }
}
