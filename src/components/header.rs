use leptos::*;

use crate::config::APP_NAME;

/// Application header. Clicking the title resets the flow from any state.
#[component]
pub fn Header(#[prop(into)] on_start_over: Callback<()>) -> impl IntoView {
    view! {
        <header class="app-header">
            <div class="header-content">
                <h1
                    class="app-title"
                    role="button"
                    tabindex="0"
                    aria-label="Click to start over"
                    style="cursor: pointer;"
                    on:click=move |_| on_start_over.call(())
                >
                    "📄 " {APP_NAME}
                </h1>
                <p class="app-subtitle">"AI-powered receipt analysis"</p>
            </div>
        </header>
    }
}
