use super::model;
use crate::domain::a001_medical_records::ui::lab_results::LabCard;
use crate::domain::a001_medical_records::ui::prescriptions::PrescriptionCard;
use crate::domain::a001_medical_records::ui::vitals::VitalRow;
use crate::shared::query::{use_query, QueryResult};
use contracts::domain::a001_medical_records::aggregate::{MedicalRecords, Vital};
use leptos::prelude::*;
use std::future::Future;
use std::sync::Arc;

pub const MEDICAL_RECORDS_QUERY_KEY: &str = "medicalRecords";

/// The three mutually exclusive record views
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RecordsTab {
    #[default]
    Lab,
    Vitals,
    Prescriptions,
}

impl RecordsTab {
    pub fn all() -> [RecordsTab; 3] {
        [RecordsTab::Lab, RecordsTab::Vitals, RecordsTab::Prescriptions]
    }

    pub fn label(&self) -> &'static str {
        match self {
            RecordsTab::Lab => "Lab Results",
            RecordsTab::Vitals => "Vitals",
            RecordsTab::Prescriptions => "Prescriptions",
        }
    }

    pub fn icon_name(&self) -> &'static str {
        match self {
            RecordsTab::Lab => "lab",
            RecordsTab::Vitals => "heart",
            RecordsTab::Prescriptions => "pill",
        }
    }
}

/// Content of the visible tab panel
#[derive(Debug, Clone, PartialEq)]
pub enum RecordsPanel {
    Lab(Vec<LabCard>),
    Vitals { rows: Vec<VitalRow>, vitals: Vec<Vital> },
    Prescriptions(Vec<PrescriptionCard>),
}

impl RecordsPanel {
    /// Build only the panel for `tab`; the other collections are not touched
    pub fn build(tab: RecordsTab, records: &MedicalRecords) -> Self {
        match tab {
            RecordsTab::Lab => RecordsPanel::Lab(records.lab_results.iter().map(Into::into).collect()),
            RecordsTab::Vitals => RecordsPanel::Vitals {
                rows: records.vitals.iter().map(Into::into).collect(),
                vitals: records.vitals.clone(),
            },
            RecordsTab::Prescriptions => RecordsPanel::Prescriptions(
                records.prescriptions.iter().map(Into::into).collect(),
            ),
        }
    }

    pub fn tab(&self) -> RecordsTab {
        match self {
            RecordsPanel::Lab(_) => RecordsTab::Lab,
            RecordsPanel::Vitals { .. } => RecordsTab::Vitals,
            RecordsPanel::Prescriptions(_) => RecordsTab::Prescriptions,
        }
    }

    pub fn item_count(&self) -> usize {
        match self {
            RecordsPanel::Lab(cards) => cards.len(),
            RecordsPanel::Vitals { rows, .. } => rows.len(),
            RecordsPanel::Prescriptions(cards) => cards.len(),
        }
    }
}

/// What the page shows for a given query state
#[derive(Debug, Clone, PartialEq)]
pub enum RecordsScreen {
    /// Spinner only, no panel
    Loading,
    /// Distinct error screen with retry
    Failed(String),
    Ready(Arc<MedicalRecords>),
}

impl RecordsScreen {
    /// Loading wins over a stale error; no data and no error is still loading
    pub fn new(
        is_loading: bool,
        error: Option<String>,
        data: Option<Arc<MedicalRecords>>,
    ) -> Self {
        match (is_loading, error, data) {
            (true, _, _) => RecordsScreen::Loading,
            (false, Some(e), _) => RecordsScreen::Failed(e),
            (false, None, Some(records)) => RecordsScreen::Ready(records),
            (false, None, None) => RecordsScreen::Loading,
        }
    }

    /// Visible panel; `None` unless the records are loaded
    pub fn panel(&self, tab: RecordsTab) -> Option<RecordsPanel> {
        match self {
            RecordsScreen::Ready(records) => Some(RecordsPanel::build(tab, records)),
            _ => None,
        }
    }
}

/// ViewModel for the records page
#[derive(Clone, Copy)]
pub struct RecordsViewModel {
    pub active_tab: RwSignal<RecordsTab>,
    pub query: QueryResult<MedicalRecords>,
}

impl RecordsViewModel {
    /// Subscribes to the records query; the fetch starts here, once per cache
    pub fn new() -> Self {
        Self::with_fetcher(model::fetch_medical_records)
    }

    pub fn with_fetcher<F, Fut>(fetcher: F) -> Self
    where
        F: Fn() -> Fut + Copy + Send + Sync + 'static,
        Fut: Future<Output = Result<MedicalRecords, String>> + 'static,
    {
        Self {
            active_tab: RwSignal::new(RecordsTab::default()),
            query: use_query(MEDICAL_RECORDS_QUERY_KEY, fetcher),
        }
    }

    pub fn select_tab(&self, tab: RecordsTab) {
        log::debug!("records tab -> {:?}", tab);
        self.active_tab.set(tab);
    }

    pub fn is_active(&self, tab: RecordsTab) -> bool {
        self.active_tab.get() == tab
    }

    /// Tracks only the query, not the tab
    pub fn screen(&self) -> RecordsScreen {
        RecordsScreen::new(
            self.query.is_loading.get(),
            self.query.error.get(),
            self.query.data.get(),
        )
    }

    pub fn retry(&self) {
        self.query.refetch.run(());
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::query::{QueryClient, QueryState};
    use contracts::domain::a001_medical_records::aggregate::{LabResult, Prescription};
    use contracts::enums::lab_status::LabStatus;
    use leptos::reactive::owner::Owner;
    use std::sync::atomic::{AtomicUsize, Ordering};

    fn screen_for(state: &QueryState<MedicalRecords>) -> RecordsScreen {
        RecordsScreen::new(
            state.is_loading(),
            state.error().map(str::to_string),
            state.data(),
        )
    }

    fn sample_records() -> MedicalRecords {
        MedicalRecords {
            lab_results: vec![LabResult {
                id: 1,
                test: "Blood Glucose".into(),
                value: "92".into(),
                unit: "mg/dL".into(),
                range: "70-100".into(),
                status: LabStatus::Normal,
                date: "2024-03-05".into(),
            }],
            vitals: vec![Vital {
                date: "2024-03-05".into(),
                weight: 72.5,
                height: 178.0,
                bmi: 22.9,
                heart_rate: 68,
                temperature: 36.6,
            }],
            prescriptions: vec![Prescription {
                id: 1,
                medication: "Metformin".into(),
                dosage: "500mg".into(),
                frequency: "Twice daily".into(),
                status: "Active".into(),
                prescribed_by: "Dr. Sarah Johnson".into(),
                date: "2024-03-06".into(),
            }],
        }
    }

    fn ready(records: MedicalRecords) -> RecordsScreen {
        screen_for(&QueryState::Ready(Arc::new(records)))
    }

    #[test]
    fn test_each_tab_shows_exactly_its_panel() {
        let screen = ready(sample_records());
        for tab in RecordsTab::all() {
            let panel = screen.panel(tab).unwrap();
            assert_eq!(panel.tab(), tab);
            assert_eq!(panel.item_count(), 1);
        }
    }

    #[test]
    fn test_pending_shows_loading_only() {
        let screen = screen_for(&QueryState::Pending);
        assert_eq!(screen, RecordsScreen::Loading);
        for tab in RecordsTab::all() {
            assert!(screen.panel(tab).is_none());
        }
    }

    #[test]
    fn test_failed_fetch_shows_error_screen() {
        let screen = screen_for(&QueryState::Failed("HTTP 503".into()));
        assert_eq!(screen, RecordsScreen::Failed("HTTP 503".into()));
        assert!(screen.panel(RecordsTab::Lab).is_none());
    }

    #[test]
    fn test_empty_collections_render_empty_panels() {
        let screen = ready(MedicalRecords::default());
        for tab in RecordsTab::all() {
            let panel = screen.panel(tab).unwrap();
            assert_eq!(panel.tab(), tab);
            assert_eq!(panel.item_count(), 0);
        }
    }

    #[test]
    fn test_default_tab_shows_formatted_lab_card() {
        let screen = ready(sample_records());
        match screen.panel(RecordsTab::default()) {
            Some(RecordsPanel::Lab(cards)) => {
                assert_eq!(cards.len(), 1);
                assert_eq!(cards[0].date, "Mar 5, 2024");
                assert_eq!(cards[0].status_class, "normal");
                assert_eq!(cards[0].status_label, "Normal");
            }
            other => panic!("expected lab panel, got {:?}", other),
        }
    }

    static RECORD_FETCHES: AtomicUsize = AtomicUsize::new(0);

    async fn counting_fetch() -> Result<MedicalRecords, String> {
        RECORD_FETCHES.fetch_add(1, Ordering::SeqCst);
        Ok(sample_records())
    }

    #[test]
    fn test_switching_tabs_does_not_refetch() {
        let owner = Owner::new();
        owner.set();
        let client = QueryClient::new();
        provide_context(client.clone());

        let cache = client.cache::<MedicalRecords>();
        cache.update(|c| {
            c.begin(MEDICAL_RECORDS_QUERY_KEY);
            c.resolve(MEDICAL_RECORDS_QUERY_KEY, Ok(sample_records()));
        });

        let vm = RecordsViewModel::with_fetcher(counting_fetch);
        assert!(vm.is_active(RecordsTab::Lab));

        for tab in [RecordsTab::Vitals, RecordsTab::Prescriptions] {
            vm.select_tab(tab);
            assert!(vm.is_active(tab));
            let panel = vm.screen().panel(vm.active_tab.get_untracked());
            assert_eq!(panel.map(|p| p.tab()), Some(tab));
        }

        // a remounted page reuses the cached result and starts on the default tab
        let remounted = RecordsViewModel::with_fetcher(counting_fetch);
        assert!(remounted.is_active(RecordsTab::Lab));
        assert!(matches!(remounted.screen(), RecordsScreen::Ready(_)));

        assert!(RECORD_FETCHES.load(Ordering::SeqCst) <= 1);
        assert_eq!(
            cache.with_untracked(|c| c.fetch_count(MEDICAL_RECORDS_QUERY_KEY)),
            1
        );
    }

    #[test]
    fn test_screen_follows_query_signals() {
        assert_eq!(RecordsScreen::new(true, None, None), RecordsScreen::Loading);
        assert_eq!(
            RecordsScreen::new(true, Some("old".into()), None),
            RecordsScreen::Loading
        );
        assert_eq!(
            RecordsScreen::new(false, Some("HTTP 500".into()), None),
            RecordsScreen::Failed("HTTP 500".into())
        );
        let records = Arc::new(MedicalRecords::default());
        assert_eq!(
            RecordsScreen::new(false, None, Some(Arc::clone(&records))),
            RecordsScreen::Ready(records)
        );
    }

    #[test]
    fn test_vitals_rows_follow_input_order() {
        let mut records = sample_records();
        records.vitals = ["2024-03-05", "2023-12-10", "2024-01-14"]
            .iter()
            .map(|d| Vital {
                date: d.to_string(),
                weight: 73.0,
                height: 178.0,
                bmi: 23.0,
                heart_rate: 70,
                temperature: 36.7,
            })
            .collect();

        match RecordsPanel::build(RecordsTab::Vitals, &records) {
            RecordsPanel::Vitals { rows, vitals } => {
                assert_eq!(rows.len(), 3);
                assert_eq!(vitals.len(), 3);
                let dates: Vec<&str> = rows.iter().map(|r| r.date.as_str()).collect();
                assert_eq!(dates, vec!["3/5/2024", "12/10/2023", "1/14/2024"]);
            }
            other => panic!("expected vitals panel, got {:?}", other),
        }
    }

    #[test]
    fn test_tab_labels() {
        let labels: Vec<&str> = RecordsTab::all().iter().map(|t| t.label()).collect();
        assert_eq!(labels, vec!["Lab Results", "Vitals", "Prescriptions"]);
        assert_eq!(RecordsTab::default(), RecordsTab::Lab);
    }
}
