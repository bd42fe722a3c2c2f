use crate::shared::date_utils::format_short_date;
use crate::shared::icons::icon;
use contracts::domain::a001_medical_records::aggregate::LabResult;
use leptos::prelude::*;
use thaw::*;

/// Display model of one lab result card
#[derive(Clone, Debug, PartialEq)]
pub struct LabCard {
    pub id: u64,
    pub test: String,
    pub value: String,
    pub unit: String,
    pub range: String,
    pub status_label: String,
    pub status_class: String,
    pub date: String,
}

impl From<&LabResult> for LabCard {
    fn from(r: &LabResult) -> Self {
        Self {
            id: r.id,
            test: r.test.clone(),
            value: r.value.clone(),
            unit: r.unit.clone(),
            range: r.range.clone(),
            status_label: r.status.display_name().to_string(),
            status_class: r.status.css_class(),
            date: format_short_date(&r.date),
        }
    }
}

#[component]
#[allow(non_snake_case)]
pub fn LabResultsPanel(cards: Vec<LabCard>) -> impl IntoView {
    view! {
        <div class="lab-results">
            <div class="section-header">
                <h2>"Laboratory Test Results"</h2>
                <Button appearance=ButtonAppearance::Secondary attr:class="download-btn">
                    {icon("download")}
                    "Download PDF"
                </Button>
            </div>
            <div class="results-grid">
                {cards
                    .into_iter()
                    .map(|card| {
                        view! {
                            <div class="result-card" data-id=card.id.to_string()>
                                <div class="result-header">
                                    <h3>{card.test}</h3>
                                    <span class=format!("result-status {}", card.status_class)>
                                        {card.status_label}
                                    </span>
                                </div>
                                <div class="result-value">
                                    <span class="value">{card.value}</span>
                                    <span class="unit">{card.unit}</span>
                                </div>
                                <div class="result-meta">
                                    <span class="range">"Normal Range: " {card.range}</span>
                                    <span class="date">{card.date}</span>
                                </div>
                            </div>
                        }
                    })
                    .collect_view()}
            </div>
        </div>
    }
}
