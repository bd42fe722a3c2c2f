use super::view_model::{RecordsPanel, RecordsScreen, RecordsTab, RecordsViewModel};
use crate::domain::a001_medical_records::ui::lab_results::LabResultsPanel;
use crate::domain::a001_medical_records::ui::prescriptions::PrescriptionsPanel;
use crate::domain::a001_medical_records::ui::vitals::VitalsPanel;
use crate::shared::icons::icon;
use leptos::prelude::*;
use thaw::*;

#[component]
#[allow(non_snake_case)]
pub fn MedicalRecordsPage() -> impl IntoView {
    let vm = RecordsViewModel::new();

    // Outer switch follows the query only; tab changes re-render the panel below.
    view! {
        {move || match vm.screen() {
            RecordsScreen::Loading => view! {
                <div class="loading-state">
                    <div class="spinner">
                        <Spinner />
                    </div>
                    <p>"Loading medical records..."</p>
                </div>
            }
            .into_any(),
            RecordsScreen::Failed(message) => view! {
                <div class="error-state" role="alert">
                    <h2>"Could not load medical records"</h2>
                    <p class="error-message">{message}</p>
                    <Button appearance=ButtonAppearance::Primary on_click=move |_| vm.retry()>
                        {icon("refresh")}
                        "Try again"
                    </Button>
                </div>
            }
            .into_any(),
            RecordsScreen::Ready(_) => view! { <RecordsBody vm=vm /> }.into_any(),
        }}
    }
}

#[component]
#[allow(non_snake_case)]
fn RecordsBody(vm: RecordsViewModel) -> impl IntoView {
    view! {
        <div class="records-page">
            <div class="records-header">
                <h1>"Medical Records"</h1>
                <p>"Access your health data and test results"</p>
            </div>

            <div class="records-tabs" role="tablist">
                {RecordsTab::all()
                    .into_iter()
                    .map(|tab| {
                        view! {
                            <button
                                class="tab-btn"
                                class:active=move || vm.is_active(tab)
                                role="tab"
                                on:click=move |_| vm.select_tab(tab)
                            >
                                <span class="tab-icon">{icon(tab.icon_name())}</span>
                                {tab.label()}
                            </button>
                        }
                    })
                    .collect_view()}
            </div>

            <div class="records-content">
                {move || {
                    vm.screen()
                        .panel(vm.active_tab.get())
                        .map(|panel| match panel {
                            RecordsPanel::Lab(cards) => {
                                view! { <LabResultsPanel cards=cards /> }.into_any()
                            }
                            RecordsPanel::Vitals { rows, vitals } => {
                                view! { <VitalsPanel rows=rows vitals=vitals /> }.into_any()
                            }
                            RecordsPanel::Prescriptions(cards) => {
                                view! { <PrescriptionsPanel cards=cards /> }.into_any()
                            }
                        })
                }}
            </div>
        </div>
    }
}
