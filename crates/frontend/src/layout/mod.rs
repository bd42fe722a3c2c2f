pub mod footer;
pub mod header;

use leptos::prelude::*;

/// Application shell.
///
/// ```text
/// +------------------------------+
/// |            Header            |
/// +------------------------------+
/// |           Content            |
/// +------------------------------+
/// |      Footer (API status)     |
/// +------------------------------+
/// ```
#[component]
pub fn Shell(children: Children) -> impl IntoView {
    view! {
        <div class="app-layout">
            <header::Header />
            <main data-zone="center" class="app-main">
                {children()}
            </main>
            <footer::Footer />
        </div>
    }
}
