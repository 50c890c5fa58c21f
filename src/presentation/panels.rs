// Panel rendering - one collapsible section per sensor, reading rows with
// their annotations, and the per-annotation detail blocks
use egui::RichText;

use crate::application::panel_registry::{PanelAction, ReadingPanelState, SensorPanelState};
use crate::domain::annotation::Annotation;
use crate::domain::chart::format_value;
use crate::domain::dashboard::SensorSummary;
use crate::domain::reading::ReadingView;

use super::chart_view;

pub fn sensor_section(
    ui: &mut egui::Ui,
    sensor: &SensorSummary,
    panel: &SensorPanelState,
    actions: &mut Vec<PanelAction>,
) {
    ui.horizontal(|ui| {
        let marker = if panel.readings.is_shown() { "▼" } else { "▶" };
        if ui
            .button(RichText::new(format!("{marker} {}", sensor.id)).strong())
            .clicked()
        {
            actions.push(PanelAction::ToggleSensor {
                sensor: sensor.id.clone(),
            });
        }
        ui.label(format!("{} readings", sensor.total));
        ui.label(format!("avg confidence: {:.1}%", sensor.avg_confidence));
    });

    if panel.readings.is_shown() {
        ui.indent(("readings", &sensor.id), |ui| {
            for reading in &sensor.readings {
                if let Some(state) = panel.reading(&reading.id) {
                    reading_row(ui, &sensor.id, reading, state, actions);
                }
            }
        });
    }

    if panel.graph_container.is_shown()
        && let Some(chart) = &panel.chart
    {
        chart_view::render(ui, chart);
    }
}

fn reading_row(
    ui: &mut egui::Ui,
    sensor_id: &str,
    reading: &ReadingView,
    state: &ReadingPanelState,
    actions: &mut Vec<PanelAction>,
) {
    ui.horizontal(|ui| {
        if ui.button(reading.display_id.as_str()).clicked() {
            actions.push(PanelAction::ToggleReading {
                sensor: sensor_id.to_string(),
                reading: reading.id.clone(),
            });
        }
        ui.label(format_value(reading.value));
        ui.label(reading.timestamp.format("%Y-%m-%d %H:%M:%S").to_string());
        ui.label(format!("score {:.2}", reading.score));
    });

    if state.annotations.is_shown() {
        ui.indent(("annotations", &reading.id), |ui| {
            for (index, annotation) in reading.annotations.iter().enumerate() {
                annotation_row(ui, sensor_id, reading, state, index, annotation, actions);
            }
            if reading.annotations.is_empty() {
                ui.weak("no annotations");
            }
        });
    }
}

fn annotation_row(
    ui: &mut egui::Ui,
    sensor_id: &str,
    reading: &ReadingView,
    state: &ReadingPanelState,
    index: usize,
    annotation: &Annotation,
    actions: &mut Vec<PanelAction>,
) {
    ui.horizontal(|ui| {
        let check = if annotation.is_satisfied { "✔" } else { "✘" };
        if ui.button(format!("{} {check}", annotation.kind)).clicked() {
            actions.push(PanelAction::ToggleAnnotation {
                sensor: sensor_id.to_string(),
                reading: reading.id.clone(),
                index,
            });
        }
    });

    if state.details.get(index).is_some_and(|d| d.is_shown()) {
        ui.indent(("details", &reading.id, index), |ui| {
            ui.label(format!("host: {}", annotation.host));
            ui.label(format!("signature: {}", annotation.signature));
            ui.label(format!(
                "timestamp: {}",
                annotation.timestamp.format("%Y-%m-%d %H:%M:%S")
            ));
            ui.label(format!("address: {}", reading.address));
        });
    }
}
