pub mod a001_medical_records;
