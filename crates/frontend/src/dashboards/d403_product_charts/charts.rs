use crate::shared::chart::config::DOUGHNUT_PALETTE;
use crate::shared::chart::{ChartConfig, ChartKind, Dataset, Paint, TooltipFormat};
use contracts::shared::chart::ChartSeries;
use serde_json::json;

pub const EMPTY_TEXT: &str = "Chưa có dữ liệu danh mục";

pub fn category_distribution_chart(series: ChartSeries) -> Option<ChartConfig> {
    if series.is_empty() {
        return None;
    }
    let dataset = Dataset {
        data: series.data().to_vec(),
        background_color: Some(Paint::many(&DOUGHNUT_PALETTE)),
        hover_offset: Some(4.0),
        ..Default::default()
    };

    Some(
        ChartConfig::new(ChartKind::Doughnut, series.labels().to_vec())
            .dataset(dataset)
            .legend(Some("bottom"))
            .option(
                &["plugins", "legend", "labels"],
                json!({
                    "usePointStyle": true,
                    "padding": 20,
                    "font": { "size": 12, "family": "'Inter', sans-serif" }
                }),
            )
            .tooltip(TooltipFormat::Share { unit: "sản phẩm" })
            .cutout("60%"),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_distribution_doughnut() {
        let series = ChartSeries {
            labels: Some(vec!["Áo".into(), "Quần".into(), "Giày".into()]),
            data: Some(vec![10.0, 4.0, 6.0]),
            revenue_data: None,
        };
        let config = category_distribution_chart(series).unwrap();
        assert_eq!(config.kind, ChartKind::Doughnut);
        assert_eq!(config.option_at(&["cutout"]), Some(&json!("60%")));
        assert_eq!(
            config.option_at(&["plugins", "legend", "position"]),
            Some(&json!("bottom"))
        );
        assert_eq!(config.tooltip, Some(TooltipFormat::Share { unit: "sản phẩm" }));
        assert_eq!(config.data.labels, vec!["Áo", "Quần", "Giày"]);
    }

    #[test]
    fn test_empty_labels_show_empty_state() {
        let series: ChartSeries =
            serde_json::from_str(r#"{"labels": [], "data": []}"#).unwrap();
        assert!(category_distribution_chart(series).is_none());
    }
}
