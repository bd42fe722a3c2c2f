//! Medical Records page
//!
//! Simplified MVVM pattern implementation:
//! - model.rs: API function (fetch)
//! - view_model.rs: tab state, query handle, screen/panel derivation
//! - view.rs: Leptos component (pure UI)

mod model;
mod view;
mod view_model;

pub use view::MedicalRecordsPage;
pub use view_model::{RecordsPanel, RecordsScreen, RecordsTab, RecordsViewModel};
