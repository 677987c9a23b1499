use crate::enums::order_status::OrderStatus;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Aggregate series behind every analytics chart.
///
/// `revenueData` is only sent by the order trends endpoint. Missing or `null`
/// arrays read as empty.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChartSeries {
    #[serde(default)]
    pub labels: Option<Vec<String>>,
    #[serde(default)]
    pub data: Option<Vec<f64>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub revenue_data: Option<Vec<f64>>,
}

impl ChartSeries {
    pub fn labels(&self) -> &[String] {
        self.labels.as_deref().unwrap_or(&[])
    }

    pub fn data(&self) -> &[f64] {
        self.data.as_deref().unwrap_or(&[])
    }

    pub fn revenue_data(&self) -> &[f64] {
        self.revenue_data.as_deref().unwrap_or(&[])
    }

    pub fn is_empty(&self) -> bool {
        self.labels().is_empty()
    }
}

/// Order counts per status, seeded by the host page as `data-*` attributes
/// named after the lower-cased status code (`data-pending="3"`, ...).
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct OrderStatusCounts(pub BTreeMap<String, u64>);

impl OrderStatusCounts {
    /// Reads one attribute per status through `lookup`. Missing or
    /// non-numeric values count as zero; leading digits are kept (`"12abc"` is 12).
    pub fn from_dataset(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let counts = OrderStatus::all()
            .into_iter()
            .map(|status| {
                let key = status.code().to_ascii_lowercase();
                let count = lookup(&key).map(|raw| leading_count(&raw)).unwrap_or(0);
                (status.code().to_string(), count)
            })
            .collect();
        Self(counts)
    }

    pub fn count(&self, status: OrderStatus) -> u64 {
        self.0.get(status.code()).copied().unwrap_or(0)
    }

    /// Counts in display order, zero-filled for absent statuses.
    pub fn ordered(&self) -> Vec<(OrderStatus, u64)> {
        OrderStatus::all()
            .into_iter()
            .map(|s| (s, self.count(s)))
            .collect()
    }

    pub fn total(&self) -> u64 {
        self.ordered().iter().map(|(_, n)| n).sum()
    }
}

fn leading_count(raw: &str) -> u64 {
    let digits: String = raw.trim().chars().take_while(char::is_ascii_digit).collect();
    digits.parse().unwrap_or(0)
}
