use crate::layout::Shell;
use crate::session::EduGptSession;
use crate::shared::config::config;
use crate::usecases::u101_process_documents::UploadPanel;
use crate::usecases::u102_chat::ChatPanel;
use leptos::prelude::*;
use thaw::ConfigProvider;

#[component]
pub fn App() -> impl IntoView {
    // One controller per page session, shared via context.
    let session = EduGptSession::new(config());
    provide_context(session);

    session.check_system_status();
    session.refresh_processed_files();

    view! {
        <ConfigProvider>
            <Shell
                left=|| view! { <UploadPanel /> }.into_any()
                center=|| view! { <ChatPanel /> }.into_any()
            />
        </ConfigProvider>
    }
}
