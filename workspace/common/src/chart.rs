use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Chart-ready view of a forecast.
///
/// `labels` covers the historical dates followed by the predicted dates. Every
/// value vector has one entry per label; entries outside a series' own segment
/// are `None` so a line chart leaves a gap there.
#[derive(Debug, Clone, Default, Serialize, Deserialize, ToSchema, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ChartSeries {
    pub labels: Vec<NaiveDate>,
    pub historical: Vec<Option<f64>>,
    pub predicted: Vec<Option<f64>>,
    pub lower_bound: Vec<Option<f64>>,
    pub upper_bound: Vec<Option<f64>>,
}

impl ChartSeries {
    pub fn len(&self) -> usize {
        self.labels.len()
    }

    pub fn is_empty(&self) -> bool {
        self.labels.is_empty()
    }
}
