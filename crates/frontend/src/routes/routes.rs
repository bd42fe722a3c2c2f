use crate::domain::a001_medical_records::ui::page::MedicalRecordsPage;
use crate::layout::Shell;
use leptos::prelude::*;

#[component]
pub fn AppRoutes() -> impl IntoView {
    view! {
        <Shell>
            <MedicalRecordsPage />
        </Shell>
    }
}
