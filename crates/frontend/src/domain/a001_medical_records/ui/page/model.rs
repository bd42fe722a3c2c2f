use crate::shared::api_utils::api_url;
use contracts::domain::a001_medical_records::aggregate::MedicalRecords;
use gloo_net::http::Request;

/// GET /api/medical-records
///
/// A `null` body is treated as a payload with no records.
pub async fn fetch_medical_records() -> Result<MedicalRecords, String> {
    let response = Request::get(&api_url("/api/medical-records"))
        .header("Accept", "application/json")
        .send()
        .await
        .map_err(|e| format!("Request failed: {}", e))?;

    if !response.ok() {
        return Err(format!("HTTP {}", response.status()));
    }

    let payload: Option<MedicalRecords> = response
        .json()
        .await
        .map_err(|e| format!("Failed to parse response: {}", e))?;

    Ok(payload.unwrap_or_default())
}
