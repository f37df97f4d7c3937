use super::quick_actions::QuickAction;
use crate::session::in_flight::Stream;
use crate::session::transcript::TranscriptEntry;
use crate::session::use_session;
use crate::shared::format::format_score;
use crate::shared::icons::icon;
use leptos::prelude::*;
use thaw::*;

#[component]
#[allow(non_snake_case)]
pub fn ChatPanel() -> impl IntoView {
    let session = use_session();
    let messages_container_ref = NodeRef::<leptos::html::Div>::new();

    // Keep the newest entry in view after every insertion or removal
    Effect::new(move |_| {
        session.transcript.track();
        if let Some(container) = messages_container_ref.get() {
            request_animation_frame(move || {
                container.set_scroll_top(container.scroll_height());
            });
        }
    });

    view! {
        <div class="chat-section">
            <div id="chatMessages" class="chat-messages" node_ref=messages_container_ref>
                <Show when=move || session.transcript.with(|t| t.is_empty())>
                    <div class="chat-messages__empty">
                        "Upload your study materials, process them, then ask anything about them."
                    </div>
                </Show>
                <For
                    each=move || session.transcript.with(|t| t.entries().to_vec())
                    key=|entry| entry.id
                    let:entry
                >
                    <MessageBubble entry=entry />
                </For>
            </div>

            <QuickActions />

            <div class="chat-input">
                <input
                    id="userInput"
                    type="text"
                    class="chat-input__field"
                    placeholder="Ask a question about your study materials..."
                    prop:value=move || session.input.get()
                    on:input=move |ev| session.input.set(event_target_value(&ev))
                    on:keydown=move |ev: web_sys::KeyboardEvent| {
                        if ev.key() == "Enter" {
                            ev.prevent_default();
                            session.send_message();
                        }
                    }
                />
                <Button
                    appearance=ButtonAppearance::Primary
                    disabled=Signal::derive(move || session.is_busy(Stream::Chat))
                    on_click=move |_| session.send_message()
                >
                    {icon("send")}
                    " Send"
                </Button>
            </div>
        </div>
    }
}

#[component]
#[allow(non_snake_case)]
fn QuickActions() -> impl IntoView {
    let session = use_session();

    view! {
        <div class="quick-actions">
            {QuickAction::all()
                .into_iter()
                .map(|action| {
                    view! {
                        <Button
                            appearance=ButtonAppearance::Secondary
                            size=ButtonSize::Small
                            disabled=Signal::derive(move || session.is_busy(Stream::Chat))
                            on_click=move |_| session.quick_action(action)
                        >
                            {icon(action.code())}
                            " "
                            {action.title()}
                        </Button>
                    }
                })
                .collect_view()}
        </div>
    }
}

#[component]
#[allow(non_snake_case)]
fn MessageBubble(entry: TranscriptEntry) -> impl IntoView {
    let class = if entry.is_loading() {
        format!("message {} loading", entry.speaker.css_class())
    } else {
        format!("message {}", entry.speaker.css_class())
    };

    let model_label = entry.model_label.map(|label| {
        view! {
            <div class="message__model">
                <i>{format!("Powered by: {}", label)}</i>
            </div>
        }
    });

    let sources = (!entry.sources.is_empty()).then(|| {
        view! {
            <div class="sources">
                <strong>"Sources:"</strong>
                {entry
                    .sources
                    .into_iter()
                    .map(|source| {
                        view! {
                            <div class="source-item">
                                <strong>{source.filename}</strong>
                                {format!(" (Score: {})", format_score(source.score))}
                                <br />
                                {source.content}
                            </div>
                        }
                    })
                    .collect_view()}
            </div>
        }
    });

    view! {
        <div class=class>
            <strong>{format!("{}:", entry.speaker.label())}</strong>
            " "
            <span class="message__body">{entry.body}</span>
            {model_label}
            {sources}
        </div>
    }
}
