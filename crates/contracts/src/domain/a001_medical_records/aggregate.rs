use crate::enums::lab_status::LabStatus;
use chrono::NaiveDate;
use serde::{Deserialize, Deserializer, Serialize};

// ============================================================================
// Entities
// ============================================================================

/// Single laboratory test result
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LabResult {
    pub id: u64,

    /// Test name, e.g. "Complete Blood Count"
    pub test: String,

    pub value: String,
    pub unit: String,

    /// Normal range, e.g. "70-100"
    pub range: String,

    pub status: LabStatus,

    /// ISO date, "YYYY-MM-DD"
    pub date: String,
}

/// One vital signs reading
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Vital {
    pub date: String,

    /// kg
    pub weight: f64,

    /// cm
    pub height: f64,

    pub bmi: f64,

    /// bpm
    #[serde(rename = "heartRate")]
    pub heart_rate: u32,

    /// °C
    pub temperature: f64,
}

impl Vital {
    pub fn date_value(&self) -> Option<NaiveDate> {
        parse_record_date(&self.date)
    }
}

/// Prescribed medication
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Prescription {
    pub id: u64,
    pub medication: String,
    pub dosage: String,
    pub frequency: String,

    /// Free text, e.g. "Active" or "Completed"
    pub status: String,

    #[serde(rename = "prescribedBy")]
    pub prescribed_by: String,

    pub date: String,
}

impl Prescription {
    /// CSS modifier class derived from the status
    pub fn status_class(&self) -> String {
        self.status.trim().to_lowercase()
    }
}

// ============================================================================
// Payload
// ============================================================================

/// Response of `GET /api/medical-records`.
///
/// Every collection falls back to an empty list when the field is missing
/// or `null`, so consumers never deal with absence.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct MedicalRecords {
    #[serde(rename = "labResults", default, deserialize_with = "null_as_default")]
    pub lab_results: Vec<LabResult>,

    #[serde(default, deserialize_with = "null_as_default")]
    pub vitals: Vec<Vital>,

    #[serde(default, deserialize_with = "null_as_default")]
    pub prescriptions: Vec<Prescription>,
}

impl MedicalRecords {
    pub fn is_empty(&self) -> bool {
        self.lab_results.is_empty() && self.vitals.is_empty() && self.prescriptions.is_empty()
    }

    /// (lab results, vitals, prescriptions)
    pub fn counts(&self) -> (usize, usize, usize) {
        (
            self.lab_results.len(),
            self.vitals.len(),
            self.prescriptions.len(),
        )
    }
}

fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

/// Parse "YYYY-MM-DD" or an RFC 3339 timestamp down to its calendar date
pub fn parse_record_date(raw: &str) -> Option<NaiveDate> {
    let date_part = raw.trim().split('T').next().unwrap_or_default();
    NaiveDate::parse_from_str(date_part, "%Y-%m-%d").ok()
}
