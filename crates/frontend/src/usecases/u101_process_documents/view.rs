use crate::session::in_flight::Stream;
use crate::session::use_session;
use crate::shared::icons::icon;
use contracts::usecases::u101_process_documents::accept_attribute;
use leptos::prelude::*;
use thaw::*;
use wasm_bindgen::JsCast;

#[component]
#[allow(non_snake_case)]
pub fn UploadPanel() -> impl IntoView {
    let session = use_session();

    let handle_file_select = move |ev: web_sys::Event| {
        let input = ev
            .target()
            .and_then(|t| t.dyn_into::<web_sys::HtmlInputElement>().ok());

        if let Some(input) = input {
            if let Some(files) = input.files() {
                session.stage_file_list(&files);
            }
            // Reset so picking the same file again still fires change
            input.set_value("");
        }
    };

    // Without preventDefault the browser opens the dropped file instead
    let handle_drag_over = move |ev: web_sys::DragEvent| {
        ev.prevent_default();
        session.drag_active.set(true);
    };

    let handle_drag_leave = move |_: web_sys::DragEvent| {
        session.drag_active.set(false);
    };

    let handle_drop = move |ev: web_sys::DragEvent| {
        ev.prevent_default();
        session.drag_active.set(false);
        if let Some(files) = ev.data_transfer().and_then(|dt| dt.files()) {
            session.stage_file_list(&files);
        }
    };

    view! {
        <div class="upload-section">
            <h3 class="section-title">{icon("book")} " Study materials"</h3>

            <div
                id="uploadArea"
                class=move || {
                    if session.drag_active.get() {
                        "upload-area upload-area--active"
                    } else {
                        "upload-area"
                    }
                }
                on:dragover=handle_drag_over
                on:dragleave=handle_drag_leave
                on:drop=handle_drop
            >
                <label class="upload-area__label" for="fileInput">
                    {icon("upload")}
                    <span>"Drop files here or click to browse"</span>
                    <span class="upload-area__hint">"PDF, DOCX, DOC, TXT, PPTX"</span>
                </label>
                <input
                    id="fileInput"
                    type="file"
                    multiple=true
                    accept=accept_attribute()
                    class="hidden"
                    on:change=handle_file_select
                />
            </div>

            // Full re-render on every change: duplicate names are allowed here
            <div id="fileList" class="file-list">
                {move || {
                    session
                        .pending
                        .with(|pending| pending.names())
                        .into_iter()
                        .map(|name| {
                            let remove_name = name.clone();
                            view! {
                                <div class="file-item">
                                    <span class="file-name">{icon("file")} " " {name}</span>
                                    <button
                                        class="file-remove"
                                        title="Remove"
                                        on:click=move |_| session.unstage(&remove_name)
                                    >
                                        {icon("close")}
                                    </button>
                                </div>
                            }
                        })
                        .collect_view()
                }}
            </div>

            <div class="upload-section__actions">
                <Button
                    appearance=ButtonAppearance::Primary
                    disabled=Signal::derive(move || session.is_busy(Stream::Upload))
                    on_click=move |_| session.submit_documents()
                >
                    {icon("cogs")}
                    {move || {
                        if session.is_busy(Stream::Upload) {
                            " Processing..."
                        } else {
                            " Process documents"
                        }
                    }}
                </Button>
            </div>

            <KnowledgeBase />
        </div>
    }
}

/// Documents the backend has already indexed
#[component]
#[allow(non_snake_case)]
fn KnowledgeBase() -> impl IntoView {
    let session = use_session();

    view! {
        <Show when=move || session.processed_files.with(|files| !files.is_empty())>
            <div class="knowledge-base">
                <h4 class="section-subtitle">{icon("database")} " Knowledge base"</h4>
                <ul class="knowledge-base__list">
                    <For
                        each=move || session.processed_files.get()
                        key=|name| name.clone()
                        let:name
                    >
                        <li class="knowledge-base__item">{icon("file")} " " {name}</li>
                    </For>
                </ul>
            </div>
        </Show>
    }
}
