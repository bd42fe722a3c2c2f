use crate::domain::a001_medical_records::ui::vitals::ChartModule;
use crate::routes::routes::AppRoutes;
use crate::shared::query::QueryClient;
use leptos::prelude::*;

#[component]
pub fn App() -> impl IntoView {
    // One query store for the whole app, so pages share cached results.
    provide_context(QueryClient::new());
    provide_context(ChartModule::new());

    view! {
        <AppRoutes />
    }
}
