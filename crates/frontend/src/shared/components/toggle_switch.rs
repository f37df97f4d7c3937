use leptos::prelude::*;

/// Toggle switch: a checkbox styled as a slider
#[component]
pub fn ToggleSwitch(
    /// Label text
    #[prop(into)]
    label: String,
    /// Checked state
    #[prop(into)]
    checked: Signal<bool>,
    /// Change event handler, receives the new checked state
    #[prop(optional)]
    on_change: Option<Callback<bool>>,
    /// ID for the input element
    #[prop(optional, into)]
    id: MaybeProp<String>,
) -> impl IntoView {
    let input_id = move || id.get().unwrap_or_default();

    view! {
        <label class="toggle" for=input_id>
            <input
                id=input_id
                type="checkbox"
                class="toggle__input"
                prop:checked=move || checked.get()
                on:change=move |ev| {
                    if let Some(handler) = on_change {
                        handler.run(event_target_checked(&ev));
                    }
                }
            />
            <span class="toggle__slider"></span>
            <span class="toggle__label">{label}</span>
        </label>
    }
}
