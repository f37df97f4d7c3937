pub mod header;

use header::Header;
use leptos::prelude::*;

/// Main application shell.
///
/// Layout structure:
/// ```text
/// +------------------------------------------+
/// |       Header (title, model toggle)       |
/// +------------------------------------------+
/// |  Sidebar (uploads)  |   Content (chat)   |
/// +------------------------------------------+
/// ```
#[component]
pub fn Shell<L, C>(left: L, center: C) -> impl IntoView
where
    L: Fn() -> AnyView + 'static + Send,
    C: Fn() -> AnyView + 'static + Send,
{
    view! {
        <div class="app-layout">
            <Header />

            <div class="app-body">
                <aside class="app-sidebar">
                    {left()}
                </aside>

                <main class="app-main">
                    {center()}
                </main>
            </div>
        </div>
    }
}
