use crate::shared::date_utils::format_long_date;
use contracts::domain::a001_medical_records::aggregate::Prescription;
use leptos::prelude::*;
use thaw::*;

#[derive(Clone, Debug, PartialEq)]
pub struct PrescriptionCard {
    pub id: u64,
    pub medication: String,
    /// "500mg - Twice daily"
    pub dosage_line: String,
    pub status: String,
    pub status_class: String,
    pub prescribed_by: String,
    pub date_issued: String,
}

impl From<&Prescription> for PrescriptionCard {
    fn from(p: &Prescription) -> Self {
        Self {
            id: p.id,
            medication: p.medication.clone(),
            dosage_line: format!("{} - {}", p.dosage, p.frequency),
            status: p.status.clone(),
            status_class: p.status_class(),
            prescribed_by: p.prescribed_by.clone(),
            date_issued: format_long_date(&p.date),
        }
    }
}

/// Refill and details actions are rendered but not wired.
#[component]
#[allow(non_snake_case)]
pub fn PrescriptionsPanel(cards: Vec<PrescriptionCard>) -> impl IntoView {
    view! {
        <div class="prescriptions-section">
            <div class="section-header">
                <h2>"Active Prescriptions"</h2>
            </div>
            <div class="prescriptions-list">
                {cards
                    .into_iter()
                    .map(|card| {
                        view! {
                            <div class="prescription-card" data-id=card.id.to_string()>
                                <div class="prescription-header">
                                    <div>
                                        <h3>{card.medication}</h3>
                                        <p class="dosage">{card.dosage_line}</p>
                                    </div>
                                    <span class=format!("prescription-status {}", card.status_class)>
                                        {card.status}
                                    </span>
                                </div>
                                <div class="prescription-details">
                                    <div class="detail-row">
                                        <span class="label">"Prescribed By:"</span>
                                        <span class="value">{card.prescribed_by}</span>
                                    </div>
                                    <div class="detail-row">
                                        <span class="label">"Date Issued:"</span>
                                        <span class="value">{card.date_issued}</span>
                                    </div>
                                </div>
                                <div class="prescription-actions">
                                    <Button appearance=ButtonAppearance::Primary attr:class="refill-btn">
                                        "Request Refill"
                                    </Button>
                                    <Button appearance=ButtonAppearance::Secondary attr:class="details-btn">
                                        "View Details"
                                    </Button>
                                </div>
                            </div>
                        }
                    })
                    .collect_view()}
            </div>
        </div>
    }
}
