pub mod lab_status;
