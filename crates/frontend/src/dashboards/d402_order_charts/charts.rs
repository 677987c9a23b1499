use crate::shared::chart::config::opaque;
use crate::shared::chart::{ChartConfig, ChartKind, Dataset, Paint, TooltipFormat};
use contracts::enums::order_status::OrderStatus;
use contracts::shared::chart::{ChartSeries, OrderStatusCounts};
use serde_json::json;

pub const PERIOD_OPTIONS: &[(u32, &str)] = &[(7, "7 ngày"), (30, "30 ngày"), (90, "90 ngày")];
pub const DEFAULT_DAYS: u32 = 7;

fn status_color(status: OrderStatus) -> &'static str {
    match status {
        OrderStatus::Pending => "rgba(255, 193, 7, 0.8)",
        OrderStatus::Confirmed => "rgba(13, 202, 240, 0.8)",
        OrderStatus::Processing => "rgba(13, 110, 253, 0.8)",
        OrderStatus::Shipped => "rgba(255, 159, 64, 0.8)",
        OrderStatus::Delivered => "rgba(75, 192, 192, 0.8)",
        OrderStatus::Completed => "rgba(25, 135, 84, 0.8)",
        OrderStatus::Cancelled => "rgba(220, 53, 69, 0.8)",
    }
}

/// Doughnut over every status in display order. No orders, no chart.
pub fn status_chart(counts: OrderStatusCounts) -> Option<ChartConfig> {
    if counts.total() == 0 {
        return None;
    }
    let ordered = counts.ordered();
    let labels = ordered
        .iter()
        .map(|(s, _)| s.display_name().to_string())
        .collect();
    let fills: Vec<&str> = ordered.iter().map(|(s, _)| status_color(*s)).collect();
    let borders = fills.iter().map(|c| opaque(c)).collect();

    let dataset = Dataset {
        label: Some("Số đơn hàng".to_string()),
        data: ordered.iter().map(|(_, n)| *n as f64).collect(),
        background_color: Some(Paint::many(&fills)),
        border_color: Some(Paint::Many(borders)),
        border_width: Some(2.0),
        ..Default::default()
    };

    Some(
        ChartConfig::new(ChartKind::Doughnut, labels)
            .dataset(dataset)
            .percent_legend()
            .legend(Some("right"))
            .option(
                &["plugins", "legend", "labels"],
                json!({ "padding": 15, "font": { "size": 12 } }),
            )
            .tooltip(TooltipFormat::Share { unit: "đơn" }),
    )
}

/// Order count on the left axis, revenue on the right
pub fn trends_chart(series: ChartSeries) -> Option<ChartConfig> {
    if series.is_empty() {
        return None;
    }
    let mut orders = Dataset::area_line(
        "Đơn hàng",
        series.data().to_vec(),
        "#6366f1",
        "rgba(99, 102, 241, 0.1)",
    );
    orders.y_axis_id = Some("y".to_string());
    let mut revenue = Dataset::area_line(
        "Doanh thu",
        series.revenue_data().to_vec(),
        "#10b981",
        "rgba(16, 185, 129, 0.1)",
    );
    revenue.y_axis_id = Some("y1".to_string());

    Some(
        ChartConfig::new(ChartKind::Line, series.labels().to_vec())
            .dataset(orders)
            .dataset(revenue)
            .option(&["interaction"], json!({ "mode": "index", "intersect": false }))
            .legend(Some("top"))
            .tooltip(TooltipFormat::CountAndRevenue { count_unit: "đơn" })
            .option(
                &["scales"],
                json!({
                    "y": {
                        "type": "linear",
                        "display": true,
                        "position": "left",
                        "beginAtZero": true,
                        "ticks": { "stepSize": 1 },
                        "title": { "display": true, "text": "Đơn hàng" }
                    },
                    "y1": {
                        "type": "linear",
                        "display": true,
                        "position": "right",
                        "beginAtZero": true,
                        "grid": { "drawOnChartArea": false },
                        "title": { "display": true, "text": "Doanh thu (₫)" }
                    },
                    "x": { "grid": { "display": false } }
                }),
            )
            .compact_ticks("y1"),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    fn counts(pairs: &[(&str, &str)]) -> OrderStatusCounts {
        OrderStatusCounts::from_dataset(|key| {
            pairs.iter().find(|(k, _)| *k == key).map(|(_, v)| v.to_string())
        })
    }

    #[test]
    fn test_status_chart_labels_carry_share() {
        let config = status_chart(counts(&[("pending", "1"), ("completed", "3")])).unwrap();
        assert_eq!(config.kind, ChartKind::Doughnut);
        assert_eq!(config.data.labels.len(), 7);
        assert_eq!(config.data.labels[0], "Chờ xác nhận: 1 (25.0%)");
        assert_eq!(config.data.labels[1], "Đã xác nhận: 0 (0.0%)");
        assert_eq!(config.data.labels[5], "Hoàn thành: 3 (75.0%)");
        let names = config.tooltip_names.as_ref().unwrap();
        assert_eq!(names[0], "Chờ xác nhận");
        assert_eq!(
            config.option_at(&["plugins", "legend", "position"]),
            Some(&json!("right"))
        );
    }

    #[test]
    fn test_status_chart_without_orders() {
        assert!(status_chart(counts(&[])).is_none());
        assert!(status_chart(counts(&[("pending", "0"), ("cancelled", "")])).is_none());
    }

    #[test]
    fn test_trends_chart_uses_two_axes() {
        let series = ChartSeries {
            labels: Some(vec!["01/03".into(), "02/03".into()]),
            data: Some(vec![2.0, 5.0]),
            revenue_data: Some(vec![150000.0, 2500000.0]),
        };
        let config = trends_chart(series).unwrap();
        let datasets = &config.data.datasets;
        assert_eq!(datasets.len(), 2);
        assert_eq!(datasets[0].y_axis_id.as_deref(), Some("y"));
        assert_eq!(datasets[1].y_axis_id.as_deref(), Some("y1"));
        assert_eq!(datasets[1].data, vec![150000.0, 2500000.0]);
        assert_eq!(config.compact_ticks_axis.as_deref(), Some("y1"));
        assert_eq!(
            config.option_at(&["scales", "y1", "grid", "drawOnChartArea"]),
            Some(&json!(false))
        );
    }

    #[test]
    fn test_trends_without_revenue_still_draws_orders() {
        let series = ChartSeries {
            labels: Some(vec!["01/03".into()]),
            data: Some(vec![1.0]),
            revenue_data: None,
        };
        let config = trends_chart(series).unwrap();
        assert!(config.data.datasets[1].data.is_empty());
    }
}
