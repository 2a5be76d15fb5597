//! Page Layout Component

use leptos::prelude::*;

/// Page chrome: title header and content area
#[component]
pub fn PageLayout(#[prop(into)] title: String, children: Children) -> impl IntoView {
    view! {
        <div class="page-layout">
            <header class="page-header">
                <h1>{title}</h1>
            </header>
            <main class="page-content">
                {children()}
            </main>
        </div>
    }
}
