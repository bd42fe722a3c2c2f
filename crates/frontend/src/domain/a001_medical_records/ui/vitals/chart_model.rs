use crate::shared::date_utils::format_axis_date;
use contracts::domain::a001_medical_records::aggregate::Vital;

pub const CHART_WIDTH: f64 = 560.0;
pub const CHART_HEIGHT: f64 = 220.0;
pub const CHART_PADDING: f64 = 32.0;

/// Number of most recent readings plotted
pub const CHART_READINGS: usize = 4;

#[derive(Clone, Debug, PartialEq)]
pub struct ChartPoint {
    pub x: f64,
    pub y: f64,
    pub value: f64,
}

#[derive(Clone, Debug, PartialEq)]
pub struct ChartSeries {
    pub name: &'static str,
    pub unit: &'static str,
    /// CSS modifier, e.g. `chart-line weight`
    pub class: &'static str,
    pub points: Vec<ChartPoint>,
}

impl ChartSeries {
    /// SVG `points` attribute
    pub fn polyline(&self) -> String {
        self.points
            .iter()
            .map(|p| format!("{:.1},{:.1}", p.x, p.y))
            .collect::<Vec<_>>()
            .join(" ")
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct AxisLabel {
    pub x: f64,
    pub text: String,
}

/// Geometry of the vitals chart: each series scaled into the plot box on
/// its own, x evenly spaced over the last readings in date order.
#[derive(Clone, Debug, PartialEq, Default)]
pub struct ChartModel {
    pub labels: Vec<AxisLabel>,
    pub series: Vec<ChartSeries>,
}

impl ChartModel {
    pub fn from_vitals(vitals: &[Vital]) -> Self {
        let readings = latest_readings(vitals);
        if readings.is_empty() {
            return Self::default();
        }

        let xs = x_positions(readings.len());
        let labels = xs
            .iter()
            .zip(&readings)
            .map(|(x, v)| AxisLabel {
                x: *x,
                text: format_axis_date(&v.date),
            })
            .collect();

        let weights: Vec<f64> = readings.iter().map(|v| v.weight).collect();
        let heart_rates: Vec<f64> = readings.iter().map(|v| f64::from(v.heart_rate)).collect();

        Self {
            labels,
            series: vec![
                ChartSeries {
                    name: "Weight",
                    unit: "kg",
                    class: "weight",
                    points: scale_series(&xs, &weights),
                },
                ChartSeries {
                    name: "Heart Rate",
                    unit: "bpm",
                    class: "heart-rate",
                    points: scale_series(&xs, &heart_rates),
                },
            ],
        }
    }

    pub fn is_empty(&self) -> bool {
        self.labels.is_empty()
    }
}

/// Last `CHART_READINGS` vitals by date. Undated rows sort first.
fn latest_readings(vitals: &[Vital]) -> Vec<&Vital> {
    let mut sorted: Vec<&Vital> = vitals.iter().collect();
    sorted.sort_by_key(|v| v.date_value());
    let skip = sorted.len().saturating_sub(CHART_READINGS);
    sorted.into_iter().skip(skip).collect()
}

fn x_positions(count: usize) -> Vec<f64> {
    match count {
        0 => Vec::new(),
        1 => vec![CHART_WIDTH / 2.0],
        n => {
            let step = (CHART_WIDTH - 2.0 * CHART_PADDING) / (n - 1) as f64;
            (0..n).map(|i| CHART_PADDING + step * i as f64).collect()
        }
    }
}

fn scale_series(xs: &[f64], values: &[f64]) -> Vec<ChartPoint> {
    let min = values.iter().copied().fold(f64::INFINITY, f64::min);
    let max = values.iter().copied().fold(f64::NEG_INFINITY, f64::max);
    let span = max - min;
    let plot_height = CHART_HEIGHT - 2.0 * CHART_PADDING;

    xs.iter()
        .zip(values)
        .map(|(x, value)| {
            // flat series sit on the middle line
            let y = if span.abs() < f64::EPSILON {
                CHART_HEIGHT / 2.0
            } else {
                CHART_PADDING + (max - value) / span * plot_height
            };
            ChartPoint {
                x: *x,
                y,
                value: *value,
            }
        })
        .collect()
}
