use super::error::RecordsError;
use contracts::domain::a001_medical_records::aggregate::MedicalRecords;
use std::path::Path;

/// Seed dataset compiled into the binary
const SEED_RECORDS: &str = include_str!("../../../data/medical_records.json");

/// Read-only in-memory store of the mock payload.
/// Loaded once at startup; requests get clones.
#[derive(Debug, Clone)]
pub struct RecordsRepository {
    records: MedicalRecords,
}

impl RecordsRepository {
    pub fn new(records: MedicalRecords) -> Self {
        Self { records }
    }

    /// Embedded seed data
    pub fn seeded() -> Result<Self, RecordsError> {
        Self::from_json(SEED_RECORDS)
    }

    pub fn from_json(json: &str) -> Result<Self, RecordsError> {
        let records: MedicalRecords = serde_json::from_str(json)?;
        Ok(Self::new(records))
    }

    pub fn from_file(path: &Path) -> Result<Self, RecordsError> {
        let contents = std::fs::read_to_string(path).map_err(|source| RecordsError::Io {
            path: path.display().to_string(),
            source,
        })?;
        Self::from_json(&contents)
    }

    /// File when configured, seed data otherwise
    pub fn load(path: Option<&Path>) -> Result<Self, RecordsError> {
        match path {
            Some(p) => {
                tracing::info!("Loading medical records from: {}", p.display());
                Self::from_file(p)
            }
            None => {
                tracing::info!("Using embedded seed medical records");
                Self::seeded()
            }
        }
    }

    pub fn get(&self) -> MedicalRecords {
        self.records.clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_seed_data_parses() {
        let repo = RecordsRepository::seeded().unwrap();
        let records = repo.get();
        assert_eq!(records.counts(), (4, 4, 3));
    }

    #[test]
    fn test_seed_vitals_are_ordered_by_date() {
        let records = RecordsRepository::seeded().unwrap().get();
        let dates: Vec<_> = records.vitals.iter().map(|v| v.date_value()).collect();
        assert!(dates.iter().all(Option::is_some));
        assert!(dates.windows(2).all(|w| w[0] <= w[1]));
    }

    #[test]
    fn test_partial_payload_fills_empty_collections() {
        let repo = RecordsRepository::from_json(r#"{"vitals": null}"#).unwrap();
        assert!(repo.get().is_empty());
    }

    #[test]
    fn test_missing_file_is_io_error() {
        let err = RecordsRepository::from_file(Path::new("does/not/exist.json")).unwrap_err();
        assert!(matches!(err, RecordsError::Io { .. }));
    }

    #[test]
    fn test_malformed_json_is_parse_error() {
        let err = RecordsRepository::from_json("{ not json").unwrap_err();
        assert!(matches!(err, RecordsError::Parse(_)));
    }
}
