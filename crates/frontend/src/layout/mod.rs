use leptos::prelude::*;
use leptos_router::components::A;

/// Application shell: top bar with navigation, routed page content below.
///
/// ```text
/// +------------------------------------------+
/// |          title        Start | Compare    |
/// +------------------------------------------+
/// |                 page content             |
/// +------------------------------------------+
/// ```
#[component]
pub fn Shell(children: Children) -> impl IntoView {
    view! {
        <div class="app-layout">
            <header class="app-header">
                <span class="app-title">"Unit Converter"</span>
                <nav class="app-nav">
                    <A href="/">"Start"</A>
                    <A href="/compare">"Compare"</A>
                </nav>
            </header>

            <main class="app-main">{children()}</main>
        </div>
    }
}
