use crate::shared::icons::icon;
use leptos::prelude::*;

#[component]
pub fn Header() -> impl IntoView {
    view! {
        <header data-zone="header" class="header">
            <div class="header__content">
                <span class="header__logo">{icon("heart")}</span>
                <span class="header__title">"Patient Portal"</span>
            </div>
            <nav class="header__nav">
                <span class="header__nav-item header__nav-item--active">"Medical Records"</span>
            </nav>
        </header>
    }
}
