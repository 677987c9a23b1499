//! Serializable Chart.js configuration and the formatting helpers used by
//! its JS callbacks.

use crate::shared::components::table::number_format::format_number_vi;
use serde::Serialize;
use serde_json::{json, Map, Value};

/// Ten-colour palette for bars (80% alpha)
pub const BAR_PALETTE: [&str; 10] = [
    "rgba(99, 102, 241, 0.8)",
    "rgba(236, 72, 153, 0.8)",
    "rgba(59, 130, 246, 0.8)",
    "rgba(245, 158, 11, 0.8)",
    "rgba(16, 185, 129, 0.8)",
    "rgba(139, 92, 246, 0.8)",
    "rgba(239, 68, 68, 0.8)",
    "rgba(6, 182, 212, 0.8)",
    "rgba(251, 146, 60, 0.8)",
    "rgba(107, 114, 128, 0.8)",
];

/// Flat palette for distribution doughnuts
pub const DOUGHNUT_PALETTE: [&str; 8] = [
    "#4e73df", "#1cc88a", "#36b9cc", "#f6c23e", "#e74a3b", "#858796", "#5a5c69", "#8e44ad",
];

/// Same colour at full opacity: `rgba(1, 2, 3, 0.8)` -> `rgba(1, 2, 3, 1)`
pub fn opaque(color: &str) -> String {
    color.replace("0.8", "1")
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ChartKind {
    Bar,
    Line,
    Doughnut,
}

/// One colour for the whole dataset or one per data point
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum Paint {
    One(String),
    Many(Vec<String>),
}

impl Paint {
    pub fn one(color: &str) -> Self {
        Paint::One(color.to_string())
    }

    pub fn many(colors: &[&str]) -> Self {
        Paint::Many(colors.iter().map(|c| c.to_string()).collect())
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Dataset {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub label: Option<String>,
    pub data: Vec<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub background_color: Option<Paint>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub border_color: Option<Paint>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub border_width: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub border_radius: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bar_thickness: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fill: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tension: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub point_radius: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub point_hover_radius: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hover_offset: Option<f64>,
    #[serde(rename = "yAxisID", skip_serializing_if = "Option::is_none")]
    pub y_axis_id: Option<String>,
}

impl Dataset {
    /// Filled, smoothed line as used by every trend chart
    pub fn area_line(label: &str, data: Vec<f64>, stroke: &str, fill: &str) -> Self {
        Self {
            label: Some(label.to_string()),
            data,
            border_color: Some(Paint::one(stroke)),
            background_color: Some(Paint::one(fill)),
            border_width: Some(2.0),
            fill: Some(true),
            tension: Some(0.4),
            point_radius: Some(4.0),
            point_hover_radius: Some(6.0),
            ..Default::default()
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct ChartData {
    pub labels: Vec<String>,
    pub datasets: Vec<Dataset>,
}

/// How tooltip lines are worded. Applied by the backend through a JS callback.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TooltipFormat {
    /// `"<dataset>: 12 sản phẩm"`
    DatasetCount { unit: &'static str },
    /// `"<label>: 12 đơn (30.0%)"`
    Share { unit: &'static str },
    /// Order count on `y`, revenue in đồng on `y1`
    CountAndRevenue { count_unit: &'static str },
}

/// Values the tooltip callback reads off Chart.js' context object
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TooltipContext {
    pub label: String,
    pub dataset_label: String,
    pub value: f64,
    pub dataset_total: f64,
    pub axis_id: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ChartConfig {
    #[serde(rename = "type")]
    pub kind: ChartKind,
    pub data: ChartData,
    pub options: Value,
    /// Axis whose ticks print as `1.5M` / `12K`
    #[serde(skip)]
    pub compact_ticks_axis: Option<String>,
    #[serde(skip)]
    pub tooltip: Option<TooltipFormat>,
    /// Category names for tooltips when the labels carry legend text
    #[serde(skip)]
    pub tooltip_names: Option<Vec<String>>,
}

impl ChartConfig {
    pub fn new(kind: ChartKind, labels: Vec<String>) -> Self {
        Self {
            kind,
            data: ChartData {
                labels,
                datasets: Vec::new(),
            },
            options: json!({ "responsive": true, "maintainAspectRatio": false }),
            compact_ticks_axis: None,
            tooltip: None,
            tooltip_names: None,
        }
    }

    pub fn dataset(mut self, dataset: Dataset) -> Self {
        self.data.datasets.push(dataset);
        self
    }

    /// Sets `options.<path>`, creating intermediate objects.
    pub fn option(mut self, path: &[&str], value: Value) -> Self {
        set_path(&mut self.options, path, value);
        self
    }

    pub fn option_at(&self, path: &[&str]) -> Option<&Value> {
        path.iter().try_fold(&self.options, |node, key| node.get(key))
    }

    /// Bars grow along x, categories on y
    pub fn horizontal(self) -> Self {
        self.option(&["indexAxis"], json!("y"))
    }

    pub fn is_horizontal(&self) -> bool {
        self.option_at(&["indexAxis"]) == Some(&json!("y"))
    }

    pub fn cutout(self, percent: &str) -> Self {
        self.option(&["cutout"], json!(percent))
    }

    /// `None` hides the legend
    pub fn legend(self, position: Option<&str>) -> Self {
        match position {
            Some(p) => self.option(&["plugins", "legend", "position"], json!(p)),
            None => self.option(&["plugins", "legend", "display"], json!(false)),
        }
    }

    /// Legend entries read `"label: value (p%)"` of the first dataset;
    /// tooltips keep the bare names.
    pub fn percent_legend(mut self) -> Self {
        let names = std::mem::take(&mut self.data.labels);
        let data = self
            .data
            .datasets
            .first()
            .map(|d| d.data.clone())
            .unwrap_or_default();
        self.data.labels = percent_labels(&names, &data);
        self.tooltip_names = Some(names);
        self
    }

    pub fn compact_ticks(mut self, axis: &str) -> Self {
        self.compact_ticks_axis = Some(axis.to_string());
        self
    }

    pub fn tooltip(mut self, format: TooltipFormat) -> Self {
        self.tooltip = Some(format);
        self.option(
            &["plugins", "tooltip"],
            json!({
                "backgroundColor": "rgba(0, 0, 0, 0.8)",
                "padding": 12,
                "titleFont": { "size": 14 },
                "bodyFont": { "size": 13 }
            }),
        )
    }

    /// Plain JS object for `new Chart(canvas, config)`.
    pub fn to_js(&self) -> Result<wasm_bindgen::JsValue, serde_wasm_bindgen::Error> {
        let serializer = serde_wasm_bindgen::Serializer::json_compatible();
        self.serialize(&serializer)
    }
}

fn set_path(root: &mut Value, path: &[&str], value: Value) {
    let Some((last, parents)) = path.split_last() else {
        *root = value;
        return;
    };
    let mut node = root;
    for key in parents {
        if !node.is_object() {
            *node = Value::Object(Map::new());
        }
        node = match node {
            Value::Object(map) => map.entry(key.to_string()).or_insert_with(|| json!({})),
            _ => return,
        };
    }
    if !node.is_object() {
        *node = Value::Object(Map::new());
    }
    if let Value::Object(map) = node {
        map.insert(last.to_string(), value);
    }
}

/// Integers without a trailing `.0`, like JS number printing
pub fn plain_number(value: f64) -> String {
    if value.fract() == 0.0 && value.abs() < 1e15 {
        format!("{}", value as i64)
    } else {
        value.to_string()
    }
}

/// Share of `total` with one decimal; `"0"` when the total is zero
pub fn percent_of(value: f64, total: f64) -> String {
    if total > 0.0 {
        format!("{:.1}", value / total * 100.0)
    } else {
        "0".to_string()
    }
}

/// Legend entries `"label: value (p%)"`
pub fn percent_labels(labels: &[String], data: &[f64]) -> Vec<String> {
    let total: f64 = data.iter().sum();
    labels
        .iter()
        .enumerate()
        .map(|(i, label)| {
            let value = data.get(i).copied().unwrap_or(0.0);
            format!("{}: {} ({}%)", label, plain_number(value), percent_of(value, total))
        })
        .collect()
}

/// Axis tick for money values: `1.5M`, `12K`, `950`
pub fn compact_tick(value: f64) -> String {
    if value >= 1_000_000.0 {
        format!("{:.1}M", value / 1_000_000.0)
    } else if value >= 1_000.0 {
        format!("{:.0}K", value / 1_000.0)
    } else {
        plain_number(value)
    }
}

pub fn format_tooltip(format: TooltipFormat, ctx: &TooltipContext) -> String {
    match format {
        TooltipFormat::DatasetCount { unit } => {
            format!("{}: {} {}", ctx.dataset_label, plain_number(ctx.value), unit)
        }
        TooltipFormat::Share { unit } => format!(
            "{}: {} {} ({}%)",
            ctx.label,
            plain_number(ctx.value),
            unit,
            percent_of(ctx.value, ctx.dataset_total)
        ),
        TooltipFormat::CountAndRevenue { count_unit } => {
            let prefix = if ctx.dataset_label.is_empty() {
                String::new()
            } else {
                format!("{}: ", ctx.dataset_label)
            };
            if ctx.axis_id.as_deref() == Some("y1") {
                format!("{}{} ₫", prefix, format_number_vi(ctx.value, 3))
            } else {
                format!("{}{} {}", prefix, plain_number(ctx.value), count_unit)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn labels(items: &[&str]) -> Vec<String> {
        items.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_percent_labels() {
        let out = percent_labels(&labels(&["Chờ xác nhận", "Hoàn thành"]), &[1.0, 3.0]);
        assert_eq!(out, vec!["Chờ xác nhận: 1 (25.0%)", "Hoàn thành: 3 (75.0%)"]);
    }

    #[test]
    fn test_percent_labels_zero_total() {
        let out = percent_labels(&labels(&["A", "B"]), &[0.0]);
        assert_eq!(out, vec!["A: 0 (0%)", "B: 0 (0%)"]);
    }

    #[test]
    fn test_compact_tick() {
        assert_eq!(compact_tick(1_500_000.0), "1.5M");
        assert_eq!(compact_tick(12_000.0), "12K");
        assert_eq!(compact_tick(950.0), "950");
        assert_eq!(compact_tick(0.0), "0");
    }

    #[test]
    fn test_options_builder() {
        let config = ChartConfig::new(ChartKind::Bar, labels(&["Áo"]))
            .horizontal()
            .legend(None)
            .option(&["scales", "x", "beginAtZero"], json!(true));
        assert!(config.is_horizontal());
        assert_eq!(config.option_at(&["plugins", "legend", "display"]), Some(&json!(false)));
        assert_eq!(config.option_at(&["scales", "x", "beginAtZero"]), Some(&json!(true)));
        assert_eq!(config.option_at(&["responsive"]), Some(&json!(true)));
    }

    #[test]
    fn test_serialized_shape() {
        let config = ChartConfig::new(ChartKind::Doughnut, labels(&["A"]))
            .dataset(Dataset {
                data: vec![2.0],
                y_axis_id: Some("y1".into()),
                ..Default::default()
            })
            .cutout("60%")
            .compact_ticks("y1");
        let value = serde_json::to_value(&config).unwrap();
        assert_eq!(value["type"], json!("doughnut"));
        assert_eq!(value["data"]["datasets"][0]["yAxisID"], json!("y1"));
        assert!(value["data"]["datasets"][0].get("label").is_none());
        assert_eq!(value["options"]["cutout"], json!("60%"));
        assert!(value.get("compact_ticks_axis").is_none());
    }

    #[test]
    fn test_tooltips() {
        let ctx = TooltipContext {
            label: "Hoàn thành".into(),
            dataset_label: "Số đơn hàng".into(),
            value: 3.0,
            dataset_total: 12.0,
            axis_id: None,
        };
        assert_eq!(
            format_tooltip(TooltipFormat::Share { unit: "đơn" }, &ctx),
            "Hoàn thành: 3 đơn (25.0%)"
        );
        assert_eq!(
            format_tooltip(TooltipFormat::DatasetCount { unit: "sản phẩm" }, &ctx),
            "Số đơn hàng: 3 sản phẩm"
        );

        let revenue = TooltipContext {
            dataset_label: "Doanh thu".into(),
            value: 1_250_000.0,
            axis_id: Some("y1".into()),
            ..Default::default()
        };
        assert_eq!(
            format_tooltip(TooltipFormat::CountAndRevenue { count_unit: "đơn" }, &revenue),
            "Doanh thu: 1.250.000 ₫"
        );
    }

    #[test]
    fn test_opaque() {
        assert_eq!(opaque("rgba(99, 102, 241, 0.8)"), "rgba(99, 102, 241, 1)");
    }
}
