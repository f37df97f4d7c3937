use super::model_toggle::ModelToggle;
use crate::shared::icons::icon;
use leptos::prelude::*;

#[component]
pub fn Header() -> impl IntoView {
    view! {
        <header data-zone="header" class="header">
            <div class="header__content">
                <span class="header__title">{icon("graduation")} " EduGPT"</span>
                <span class="header__subtitle">"Your AI study companion"</span>
            </div>
            <div class="header__actions">
                <ModelToggle />
            </div>
        </header>
    }
}
