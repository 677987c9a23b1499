use crate::shared::chart::config::{opaque, BAR_PALETTE};
use crate::shared::chart::{ChartConfig, ChartKind, Dataset, Paint, TooltipFormat};
use contracts::shared::chart::ChartSeries;
use serde_json::json;

pub const LIMIT_OPTIONS: &[(u32, &str)] = &[(5, "Top 5"), (10, "Top 10")];
pub const DEFAULT_LIMIT: u32 = 5;

/// Horizontal bars, one colour per category
pub fn performance_chart(series: ChartSeries) -> Option<ChartConfig> {
    if series.is_empty() {
        return None;
    }
    let borders: Vec<String> = BAR_PALETTE.iter().map(|c| opaque(c)).collect();
    let dataset = Dataset {
        label: Some("Số lượng sản phẩm".to_string()),
        data: series.data().to_vec(),
        background_color: Some(Paint::many(&BAR_PALETTE)),
        border_color: Some(Paint::Many(borders)),
        border_width: Some(1.0),
        border_radius: Some(6.0),
        bar_thickness: Some(30.0),
        ..Default::default()
    };

    Some(
        ChartConfig::new(ChartKind::Bar, series.labels().to_vec())
            .dataset(dataset)
            .horizontal()
            .legend(None)
            .tooltip(TooltipFormat::DatasetCount { unit: "sản phẩm" })
            .option(
                &["scales", "x"],
                json!({
                    "beginAtZero": true,
                    "ticks": { "stepSize": 1, "font": { "size": 11 } },
                    "grid": { "color": "rgba(0, 0, 0, 0.05)" },
                    "title": {
                        "display": true,
                        "text": "Số lượng sản phẩm",
                        "font": { "size": 12, "weight": "bold" }
                    }
                }),
            )
            .option(
                &["scales", "y"],
                json!({ "grid": { "display": false }, "ticks": { "font": { "size": 12 } } }),
            ),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    fn series(labels: &[&str], data: &[f64]) -> ChartSeries {
        ChartSeries {
            labels: Some(labels.iter().map(|l| l.to_string()).collect()),
            data: Some(data.to_vec()),
            revenue_data: None,
        }
    }

    #[test]
    fn test_performance_chart_is_horizontal_bar() {
        let config = performance_chart(series(&["Áo", "Quần"], &[12.0, 7.0])).unwrap();
        assert_eq!(config.kind, ChartKind::Bar);
        assert!(config.is_horizontal());
        assert_eq!(config.data.labels, vec!["Áo", "Quần"]);
        assert_eq!(config.data.datasets[0].data, vec![12.0, 7.0]);
        assert_eq!(config.option_at(&["plugins", "legend", "display"]), Some(&json!(false)));
        assert_eq!(config.option_at(&["scales", "x", "ticks", "stepSize"]), Some(&json!(1)));
    }

    #[test]
    fn test_borders_are_opaque_palette() {
        let config = performance_chart(series(&["Áo"], &[1.0])).unwrap();
        match &config.data.datasets[0].border_color {
            Some(Paint::Many(colors)) => assert_eq!(colors[0], "rgba(99, 102, 241, 1)"),
            other => panic!("unexpected border colour {:?}", other),
        }
    }

    #[test]
    fn test_empty_series_has_no_chart() {
        assert!(performance_chart(ChartSeries::default()).is_none());
    }
}
