mod chart;
pub mod chart_model;

pub use chart::{ChartModule, VitalsChart};

use crate::shared::date_utils::format_numeric_date;
use contracts::domain::a001_medical_records::aggregate::Vital;
use leptos::prelude::*;

/// One table row, every field rendered verbatim
#[derive(Clone, Debug, PartialEq)]
pub struct VitalRow {
    pub date: String,
    pub weight: String,
    pub height: String,
    pub bmi: String,
    /// "72 bpm"
    pub heart_rate: String,
    pub temperature: String,
}

impl From<&Vital> for VitalRow {
    fn from(v: &Vital) -> Self {
        Self {
            date: format_numeric_date(&v.date),
            weight: v.weight.to_string(),
            height: v.height.to_string(),
            bmi: v.bmi.to_string(),
            heart_rate: format!("{} bpm", v.heart_rate),
            temperature: v.temperature.to_string(),
        }
    }
}

#[component]
#[allow(non_snake_case)]
pub fn VitalsPanel(rows: Vec<VitalRow>, vitals: Vec<Vital>) -> impl IntoView {
    view! {
        <div class="vitals-section">
            <div class="section-header">
                <h2>"Vital Signs History"</h2>
                <span class="info-text">"Last 4 readings"</span>
            </div>

            <VitalsChart vitals=vitals />

            <div class="vitals-table">
                <table>
                    <thead>
                        <tr>
                            <th>"Date"</th>
                            <th>"Weight (kg)"</th>
                            <th>"Height (cm)"</th>
                            <th>"BMI"</th>
                            <th>"Heart Rate"</th>
                            <th>"Temperature (°C)"</th>
                        </tr>
                    </thead>
                    <tbody>
                        {rows
                            .into_iter()
                            .map(|row| {
                                view! {
                                    <tr>
                                        <td>{row.date}</td>
                                        <td>{row.weight}</td>
                                        <td>{row.height}</td>
                                        <td>{row.bmi}</td>
                                        <td>{row.heart_rate}</td>
                                        <td>{row.temperature}</td>
                                    </tr>
                                }
                            })
                            .collect_view()}
                    </tbody>
                </table>
            </div>
        </div>
    }
}
