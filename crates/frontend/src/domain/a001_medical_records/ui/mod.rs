pub mod lab_results;
pub mod page;
pub mod prescriptions;
pub mod vitals;
