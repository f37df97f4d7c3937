use crate::session::use_session;
use crate::shared::components::ToggleSwitch;
use contracts::enums::ModelBackend;
use leptos::prelude::*;

/// Local / remote switch pair with the status indicator.
///
/// Both switches are views of the one `ModelBackend` value.
#[component]
pub fn ModelToggle() -> impl IntoView {
    let session = use_session();

    view! {
        <div class="model-toggle">
            <ToggleSwitch
                id="useLocal"
                label="Local"
                checked=Signal::derive(move || session.backend.get() == ModelBackend::Local)
                on_change=Callback::new(move |checked| session.toggle_local(checked))
            />
            <ToggleSwitch
                id="usePerplexity"
                label="Perplexity"
                checked=Signal::derive(move || session.backend.get() == ModelBackend::Remote)
                on_change=Callback::new(move |checked| session.toggle_remote(checked))
            />
            <div class="model-status">
                <span id="statusDot" class=move || session.status().dot_class></span>
                <span
                    id="currentModelDisplay"
                    style=move || format!("color: {};", session.status().color)
                >
                    {move || session.status().label}
                </span>
            </div>
        </div>
    }
}
