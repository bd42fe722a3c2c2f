use super::error::RecordsError;
use super::repository::RecordsRepository;
use crate::shared::config::MockConfig;
use contracts::domain::a001_medical_records::aggregate::MedicalRecords;
use rand::Rng;
use std::time::Duration;

/// Mock records API: artificial latency, optional failure injection
#[derive(Debug, Clone)]
pub struct RecordsService {
    repository: RecordsRepository,
    latency: Duration,
    fail_rate: f64,
}

impl RecordsService {
    pub fn new(repository: RecordsRepository, mock: &MockConfig) -> Self {
        Self {
            repository,
            latency: Duration::from_millis(mock.latency_ms),
            fail_rate: mock.fail_rate.clamp(0.0, 1.0),
        }
    }

    /// Получить медицинские записи пациента
    pub async fn get_medical_records(&self) -> Result<MedicalRecords, RecordsError> {
        if !self.latency.is_zero() {
            tokio::time::sleep(self.latency).await;
        }

        if self.should_fail() {
            tracing::warn!("Injected failure for medical records request");
            return Err(RecordsError::Unavailable);
        }

        let records = self.repository.get();
        let (labs, vitals, prescriptions) = records.counts();
        tracing::debug!(
            labs,
            vitals,
            prescriptions,
            "Serving medical records"
        );
        Ok(records)
    }

    fn should_fail(&self) -> bool {
        self.fail_rate > 0.0 && rand::thread_rng().gen_bool(self.fail_rate)
    }
}
