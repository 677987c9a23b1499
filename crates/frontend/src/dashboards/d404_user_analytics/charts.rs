use crate::shared::chart::config::DOUGHNUT_PALETTE;
use crate::shared::chart::{ChartConfig, ChartKind, Dataset, Paint};
use contracts::shared::chart::ChartSeries;
use serde_json::json;

pub const PERIOD_OPTIONS: &[(u32, &str)] = &[(7, "7 ngày"), (30, "30 ngày"), (90, "90 ngày")];
pub const DEFAULT_DAYS: u32 = 7;

pub fn growth_chart(series: ChartSeries) -> Option<ChartConfig> {
    if series.is_empty() {
        return None;
    }
    Some(
        ChartConfig::new(ChartKind::Line, series.labels().to_vec())
            .dataset(Dataset::area_line(
                "Người dùng mới",
                series.data().to_vec(),
                "#6366f1",
                "rgba(99, 102, 241, 0.1)",
            ))
            .legend(None)
            .option(
                &["plugins", "tooltip"],
                json!({
                    "backgroundColor": "rgba(0,0,0,0.8)",
                    "padding": 12,
                    "titleFont": { "size": 14 },
                    "bodyFont": { "size": 13 }
                }),
            )
            .option(
                &["scales"],
                json!({
                    "y": { "beginAtZero": true, "ticks": { "stepSize": 1 } },
                    "x": { "grid": { "display": false } }
                }),
            ),
    )
}

pub fn role_chart(series: ChartSeries) -> Option<ChartConfig> {
    if series.is_empty() {
        return None;
    }
    let dataset = Dataset {
        data: series.data().to_vec(),
        background_color: Some(Paint::many(&DOUGHNUT_PALETTE[..6])),
        hover_offset: Some(4.0),
        ..Default::default()
    };
    Some(
        ChartConfig::new(ChartKind::Doughnut, series.labels().to_vec())
            .dataset(dataset)
            .legend(Some("bottom"))
            .option(
                &["plugins", "legend", "labels"],
                json!({ "usePointStyle": true, "padding": 20 }),
            )
            .cutout("70%"),
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
    fn test_growth_chart_hides_legend() {
        let config = growth_chart(series(&["01/03", "02/03"], &[3.0, 0.0])).unwrap();
        assert_eq!(config.kind, ChartKind::Line);
        assert_eq!(config.data.datasets[0].label.as_deref(), Some("Người dùng mới"));
        assert_eq!(config.option_at(&["plugins", "legend", "display"]), Some(&json!(false)));
        assert_eq!(config.option_at(&["scales", "y", "beginAtZero"]), Some(&json!(true)));
    }

    #[test]
    fn test_role_chart_uses_six_colours() {
        let config = role_chart(series(&["ADMIN", "USER"], &[2.0, 40.0])).unwrap();
        assert_eq!(config.option_at(&["cutout"]), Some(&json!("70%")));
        match &config.data.datasets[0].background_color {
            Some(Paint::Many(colors)) => assert_eq!(colors.len(), 6),
            other => panic!("unexpected background {:?}", other),
        }
    }

    #[test]
    fn test_null_series_has_no_chart() {
        let series: ChartSeries = serde_json::from_str(r#"{"labels": null, "data": null}"#).unwrap();
        assert!(growth_chart(series.clone()).is_none());
        assert!(role_chart(series).is_none());
    }
}
