// Chart data domain model
use chrono::{DateTime, Utc};

use crate::domain::reading::truncate_id;

/// Axis title for the time axis.
pub const X_AXIS_TITLE: &str = "Timestamps";
/// Axis title and dataset label for the value axis.
pub const Y_AXIS_TITLE: &str = "Reading Values";
pub const SERIES_LABEL: &str = "Reading Values";
/// Fixed stroke color of the reading line, rgb.
pub const STROKE_COLOR: (u8, u8, u8) = (75, 192, 192);
pub const STROKE_WIDTH: f32 = 1.0;

/// One plotted point, index-aligned with the source reading array.
#[derive(Debug, Clone, PartialEq)]
pub struct ChartPoint {
    pub reading_id: String,
    pub timestamp: DateTime<Utc>,
    pub value: f64,
}

/// A built line chart for one sensor: a single dataset over a time axis.
#[derive(Debug, Clone, PartialEq)]
pub struct ChartData {
    pub sensor_id: String,
    pub points: Vec<ChartPoint>,
}

impl ChartData {
    pub fn new(sensor_id: String, points: Vec<ChartPoint>) -> Self {
        Self { sensor_id, points }
    }

    /// Dataset values, in source order.
    pub fn values(&self) -> Vec<f64> {
        self.points.iter().map(|p| p.value).collect()
    }

    /// Time-axis labels, in source order.
    pub fn timestamps(&self) -> Vec<DateTime<Utc>> {
        self.points.iter().map(|p| p.timestamp).collect()
    }

    /// Tooltip label for the point at `index`.
    pub fn tooltip_label(&self, index: usize) -> Option<String> {
        let point = self.points.get(index)?;
        Some(format!(
            "Reading: {}    Value: {}",
            truncate_id(&point.reading_id),
            format_value(point.value)
        ))
    }

    /// Tooltip label for the point nearest to `x` (seconds since the epoch),
    /// used by the plot hover callback.
    pub fn hover_label(&self, x: f64) -> Option<String> {
        let index = self
            .points
            .iter()
            .enumerate()
            .min_by(|(_, a), (_, b)| {
                let da = (a.timestamp.timestamp() as f64 - x).abs();
                let db = (b.timestamp.timestamp() as f64 - x).abs();
                da.total_cmp(&db)
            })
            .map(|(i, _)| i)?;
        self.tooltip_label(index)
    }
}

/// Integral values render without a fractional part, so 5.0 shows as "5".
pub fn format_value(value: f64) -> String {
    if value.fract() == 0.0 && value.abs() < 1e15 {
        format!("{}", value as i64)
    } else {
        format!("{value}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn point(id: &str, secs: i64, value: f64) -> ChartPoint {
        ChartPoint {
            reading_id: id.to_string(),
            timestamp: Utc.timestamp_opt(secs, 0).unwrap(),
            value,
        }
    }

    #[test]
    fn test_projections_preserve_length_and_order() {
        let chart = ChartData::new(
            "sensor-1".to_string(),
            vec![point("a", 30, 3.0), point("b", 10, 1.0), point("c", 20, 2.0)],
        );
        assert_eq!(chart.values(), vec![3.0, 1.0, 2.0]);
        let stamps = chart.timestamps();
        assert_eq!(stamps.len(), 3);
        assert_eq!(stamps[0].timestamp(), 30);
        assert_eq!(stamps[1].timestamp(), 10);
        assert_eq!(stamps[2].timestamp(), 20);
    }

    #[test]
    fn test_tooltip_label_truncates_id() {
        let chart = ChartData::new("sensor-1".to_string(), vec![point("abcdefghijk", 0, 5.0)]);
        assert_eq!(
            chart.tooltip_label(0).unwrap(),
            "Reading: abcdefghij    Value: 5"
        );
    }

    #[test]
    fn test_tooltip_label_out_of_range() {
        let chart = ChartData::new("sensor-1".to_string(), vec![]);
        assert_eq!(chart.tooltip_label(0), None);
    }

    #[test]
    fn test_hover_label_picks_nearest_point() {
        let chart = ChartData::new(
            "sensor-1".to_string(),
            vec![point("first-read", 0, 1.5), point("second-rea", 100, 2.0)],
        );
        assert_eq!(
            chart.hover_label(90.0).unwrap(),
            "Reading: second-rea    Value: 2"
        );
        assert_eq!(
            chart.hover_label(10.0).unwrap(),
            "Reading: first-read    Value: 1.5"
        );
    }

    #[test]
    fn test_hover_label_empty_chart() {
        let chart = ChartData::new("sensor-1".to_string(), vec![]);
        assert_eq!(chart.hover_label(0.0), None);
    }

    #[test]
    fn test_format_value() {
        assert_eq!(format_value(5.0), "5");
        assert_eq!(format_value(0.0), "0");
        assert_eq!(format_value(182.25), "182.25");
    }
}
