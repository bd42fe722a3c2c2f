use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

/// Status of a laboratory result.
///
/// Only drives the badge text and class, so values outside the known three
/// are kept as `Other` instead of failing the whole payload.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum LabStatus {
    Normal,
    Abnormal,
    Pending,
    Other(String),
}

impl LabStatus {
    /// Human readable label, as shown in the status badge
    pub fn display_name(&self) -> &str {
        match self {
            LabStatus::Normal => "Normal",
            LabStatus::Abnormal => "Abnormal",
            LabStatus::Pending => "Pending",
            LabStatus::Other(raw) => raw,
        }
    }

    /// CSS modifier class: the lowercased label
    pub fn css_class(&self) -> String {
        self.display_name().trim().to_lowercase()
    }

    pub fn all() -> Vec<LabStatus> {
        vec![LabStatus::Normal, LabStatus::Abnormal, LabStatus::Pending]
    }

    /// Case-insensitive parse of the known statuses
    pub fn from_code(code: &str) -> Option<Self> {
        match code.trim().to_ascii_lowercase().as_str() {
            "normal" => Some(LabStatus::Normal),
            "abnormal" => Some(LabStatus::Abnormal),
            "pending" => Some(LabStatus::Pending),
            _ => None,
        }
    }
}

impl From<String> for LabStatus {
    fn from(raw: String) -> Self {
        LabStatus::from_code(&raw).unwrap_or(LabStatus::Other(raw))
    }
}

impl fmt::Display for LabStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.display_name())
    }
}

impl Serialize for LabStatus {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(self.display_name())
    }
}

impl<'de> Deserialize<'de> for LabStatus {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        Ok(String::deserialize(deserializer)?.into())
    }
}
