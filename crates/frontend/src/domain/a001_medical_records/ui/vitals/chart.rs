use super::chart_model::{ChartModel, CHART_HEIGHT, CHART_PADDING, CHART_WIDTH};
use contracts::domain::a001_medical_records::aggregate::Vital;
use gloo_timers::future::TimeoutFuture;
use leptos::prelude::*;
use thaw::*;

/// Simulated download time of the chart module
const CHART_MODULE_DELAY_MS: u32 = 150;

/// Deferred chart load: module fetch, then geometry, then ready
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChartPhase {
    LoadingModule,
    Rendering,
    Ready,
}

impl ChartPhase {
    pub fn fallback_label(&self) -> &'static str {
        match self {
            ChartPhase::LoadingModule => "Loading chart...",
            ChartPhase::Rendering => "Rendering chart...",
            ChartPhase::Ready => "",
        }
    }

    /// Phases of one chart mount; the module download is skipped once done
    pub fn sequence(module_loaded: bool) -> &'static [ChartPhase] {
        if module_loaded {
            &[ChartPhase::Rendering, ChartPhase::Ready]
        } else {
            &[ChartPhase::LoadingModule, ChartPhase::Rendering, ChartPhase::Ready]
        }
    }
}

/// Chart module download state for the page session, provided from `App`.
///
/// Every mount of the vitals panel builds a new chart, but only the first
/// one pays for the module.
#[derive(Clone, Copy)]
pub struct ChartModule {
    loaded: StoredValue<bool>,
}

impl ChartModule {
    pub fn new() -> Self {
        Self {
            loaded: StoredValue::new(false),
        }
    }

    pub fn is_loaded(&self) -> bool {
        self.loaded.try_get_value().unwrap_or(false)
    }

    pub fn mark_loaded(&self) {
        self.loaded.set_value(true);
    }

    pub fn first_phase(&self) -> ChartPhase {
        ChartPhase::sequence(self.is_loaded())[0]
    }
}

impl Default for ChartModule {
    fn default() -> Self {
        Self::new()
    }
}

async fn load_chart(
    vitals: Vec<Vital>,
    phase: RwSignal<ChartPhase>,
    module: ChartModule,
) -> ChartModel {
    let mut model = ChartModel::default();
    for step in ChartPhase::sequence(module.is_loaded()) {
        phase.set(*step);
        match step {
            ChartPhase::LoadingModule => {
                TimeoutFuture::new(CHART_MODULE_DELAY_MS).await;
                module.mark_loaded();
                log::debug!("vitals chart module loaded");
            }
            ChartPhase::Rendering => {
                // yield once so the fallback can repaint before the geometry pass
                TimeoutFuture::new(0).await;
                model = ChartModel::from_vitals(&vitals);
            }
            ChartPhase::Ready => {}
        }
    }
    model
}

/// Vitals chart behind its own Suspense boundary; the surrounding panel
/// renders without waiting for it.
#[component]
#[allow(non_snake_case)]
pub fn VitalsChart(vitals: Vec<Vital>) -> impl IntoView {
    let module = use_context::<ChartModule>().expect("ChartModule context not found");
    let phase = RwSignal::new(module.first_phase());
    let vitals = StoredValue::new(vitals);
    let chart = LocalResource::new(move || load_chart(vitals.get_value(), phase, module));

    view! {
        <Suspense fallback=move || {
            view! {
                <div class="chart-loading">
                    <div class="spinner">
                        <Spinner />
                    </div>
                    <p>{move || phase.get().fallback_label()}</p>
                </div>
            }
        }>
            {move || Suspend::new(async move {
                let model = chart.await;
                view! { <ChartSvg model=model /> }
            })}
        </Suspense>
    }
}

#[component]
#[allow(non_snake_case)]
fn ChartSvg(model: ChartModel) -> impl IntoView {
    if model.is_empty() {
        return view! { <p class="chart-empty">"No vitals recorded yet"</p> }.into_any();
    }

    let baseline = CHART_HEIGHT - CHART_PADDING / 4.0;

    view! {
        <div class="vitals-chart">
            <svg
                viewBox=format!("0 0 {} {}", CHART_WIDTH, CHART_HEIGHT)
                preserveAspectRatio="xMidYMid meet"
                role="img"
                aria-label="Vital signs trend"
            >
                {model
                    .series
                    .iter()
                    .map(|series| {
                        let class = format!("chart-line {}", series.class);
                        view! {
                            <g class=class>
                                <polyline points=series.polyline() fill="none" />
                                {series
                                    .points
                                    .iter()
                                    .map(|p| {
                                        view! {
                                            <circle
                                                cx=p.x.to_string()
                                                cy=p.y.to_string()
                                                r="4"
                                                data-value=format!("{} {}", p.value, series.unit)
                                            />
                                        }
                                    })
                                    .collect_view()}
                            </g>
                        }
                    })
                    .collect_view()}
                {model
                    .labels
                    .into_iter()
                    .map(|label| {
                        view! {
                            <text class="chart-axis-label" x=label.x.to_string() y=baseline.to_string() text-anchor="middle">
                                {label.text}
                            </text>
                        }
                    })
                    .collect_view()}
            </svg>
            <div class="chart-legend">
                {model
                    .series
                    .iter()
                    .map(|series| {
                        view! {
                            <span class=format!("legend-item {}", series.class)>
                                {format!("{} ({})", series.name, series.unit)}
                            </span>
                        }
                    })
                    .collect_view()}
            </div>
        </div>
    }
    .into_any()
}

#[cfg(test)]
mod tests {
    use super::*;
    use leptos::reactive::owner::Owner;

    #[test]
    fn test_fallback_labels() {
        assert_eq!(ChartPhase::LoadingModule.fallback_label(), "Loading chart...");
        assert_eq!(ChartPhase::Rendering.fallback_label(), "Rendering chart...");
        assert_eq!(ChartPhase::Ready.fallback_label(), "");
    }

    #[test]
    fn test_module_loads_once_per_session() {
        let owner = Owner::new();
        owner.set();

        let module = ChartModule::new();
        assert_eq!(module.first_phase(), ChartPhase::LoadingModule);
        assert_eq!(
            ChartPhase::sequence(module.is_loaded()),
            &[ChartPhase::LoadingModule, ChartPhase::Rendering, ChartPhase::Ready]
        );

        module.mark_loaded();

        // a later mount shares the same handle through context
        let remount = module;
        assert_eq!(remount.first_phase(), ChartPhase::Rendering);
        assert_eq!(
            ChartPhase::sequence(remount.is_loaded()),
            &[ChartPhase::Rendering, ChartPhase::Ready]
        );
    }
}
