use axum::{extract::State, http::StatusCode, Json};
use std::sync::Arc;

use crate::domain::a001_medical_records::RecordsError;
use crate::routes::AppState;
use contracts::domain::a001_medical_records::aggregate::MedicalRecords;

/// GET /api/medical-records
pub async fn get_medical_records(
    State(state): State<Arc<AppState>>,
) -> Result<Json<MedicalRecords>, StatusCode> {
    match state.records.get_medical_records().await {
        Ok(records) => Ok(Json(records)),
        Err(RecordsError::Unavailable) => Err(StatusCode::SERVICE_UNAVAILABLE),
        Err(e) => {
            tracing::error!("medical records request failed: {e}");
            Err(StatusCode::INTERNAL_SERVER_ERROR)
        }
    }
}
