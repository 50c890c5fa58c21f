// Chart rendering - a single-dataset line chart over a time axis
use chrono::{DateTime, Utc};
use egui::Color32;
use egui_plot::{Legend, Line, Plot};

use crate::domain::chart::{
    ChartData, SERIES_LABEL, STROKE_COLOR, STROKE_WIDTH, X_AXIS_TITLE, Y_AXIS_TITLE,
};

const CHART_HEIGHT: f32 = 280.0;

pub fn render(ui: &mut egui::Ui, chart: &ChartData) {
    let (r, g, b) = STROKE_COLOR;
    let stroke = Color32::from_rgb(r, g, b);

    let points: Vec<[f64; 2]> = chart
        .points
        .iter()
        .map(|p| [p.timestamp.timestamp() as f64, p.value])
        .collect();

    Plot::new(("sensor-graph", &chart.sensor_id))
        .height(CHART_HEIGHT)
        .legend(Legend::default())
        .x_axis_label(X_AXIS_TITLE)
        .y_axis_label(Y_AXIS_TITLE)
        .x_axis_formatter(|mark, _range| minute_label(mark.value))
        .label_formatter(|_name, value| chart.hover_label(value.x).unwrap_or_default())
        .show(ui, |plot_ui| {
            plot_ui.line(
                Line::new(SERIES_LABEL, points)
                    .color(stroke)
                    .width(STROKE_WIDTH),
            );
        });
}

/// Minute-granularity tick label for a timestamp in epoch seconds.
fn minute_label(x: f64) -> String {
    DateTime::<Utc>::from_timestamp(x as i64, 0)
        .map(|dt| dt.format("%H:%M").to_string())
        .unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_minute_label() {
        // 2024-01-01T00:02:00Z
        assert_eq!(minute_label(1_704_067_320.0), "00:02");
    }

    #[test]
    fn test_minute_label_out_of_range() {
        assert_eq!(minute_label(f64::MAX), "");
    }
}
