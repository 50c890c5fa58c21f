// Panel registry - explicit visibility state for every sensor, reading, and
// annotation panel, captured at setup time. Replaces the original page's
// string-concatenated selector lookups; unresolved ids become typed errors.
use std::collections::HashMap;

use tracing::debug;

use crate::application::chart_service;
use crate::domain::chart::ChartData;
use crate::domain::dashboard::Dashboard;
use crate::error::{DashboardError, DashboardResult};

/// Two-valued panel flag.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Visibility {
    #[default]
    Hidden,
    Shown,
}

impl Visibility {
    pub fn toggled(self) -> Self {
        match self {
            Visibility::Hidden => Visibility::Shown,
            Visibility::Shown => Visibility::Hidden,
        }
    }

    pub fn is_shown(self) -> bool {
        self == Visibility::Shown
    }
}

/// Panel state for one reading row: its annotations panel plus one detail
/// flag per annotation.
#[derive(Debug, Clone, Default)]
pub struct ReadingPanelState {
    pub annotations: Visibility,
    pub details: Vec<Visibility>,
}

/// Panel state for one sensor section. The three flags mirror the three
/// containers the sensor button controls; the chart slot holds at most one
/// live chart, rebuilt on open and dropped on close.
#[derive(Debug, Clone, Default)]
pub struct SensorPanelState {
    pub readings: Visibility,
    pub chart_container: Visibility,
    pub graph_container: Visibility,
    pub chart: Option<ChartData>,
    readings_json: String,
    reading_panels: HashMap<String, ReadingPanelState>,
}

impl SensorPanelState {
    pub fn reading(&self, reading_id: &str) -> Option<&ReadingPanelState> {
        self.reading_panels.get(reading_id)
    }
}

/// A click captured during the render pass, applied once rendering is done.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PanelAction {
    ToggleSensor {
        sensor: String,
    },
    ToggleReading {
        sensor: String,
        reading: String,
    },
    ToggleAnnotation {
        sensor: String,
        reading: String,
        index: usize,
    },
}

#[derive(Debug, Clone, Default)]
pub struct PanelRegistry {
    sensors: HashMap<String, SensorPanelState>,
}

impl PanelRegistry {
    /// Capture panel references for every sensor, reading, and annotation in
    /// the view model. Everything starts hidden.
    pub fn from_dashboard(dashboard: &Dashboard) -> Self {
        let sensors = dashboard
            .sensors
            .iter()
            .map(|sensor| {
                let reading_panels = sensor
                    .readings
                    .iter()
                    .map(|reading| {
                        let state = ReadingPanelState {
                            annotations: Visibility::Hidden,
                            details: vec![Visibility::Hidden; reading.annotations.len()],
                        };
                        (reading.id.clone(), state)
                    })
                    .collect();
                let state = SensorPanelState {
                    readings_json: sensor.readings_json.clone(),
                    reading_panels,
                    ..Default::default()
                };
                (sensor.id.clone(), state)
            })
            .collect();
        Self { sensors }
    }

    pub fn sensor(&self, sensor_id: &str) -> Option<&SensorPanelState> {
        self.sensors.get(sensor_id)
    }

    pub fn apply(&mut self, action: PanelAction) -> DashboardResult<()> {
        match action {
            PanelAction::ToggleSensor { sensor } => {
                self.toggle_sensor(&sensor)?;
            }
            PanelAction::ToggleReading { sensor, reading } => {
                self.toggle_reading(&sensor, &reading)?;
            }
            PanelAction::ToggleAnnotation {
                sensor,
                reading,
                index,
            } => {
                self.toggle_annotation(&sensor, &reading, index)?;
            }
        }
        Ok(())
    }

    /// Flip the sensor's readings panel; the chart container and the graph
    /// container follow it. On every open transition the embedded payload is
    /// re-parsed and the chart rebuilt, replacing any prior instance; closing
    /// drops the chart.
    ///
    /// The flags flip even when the payload turns out to be malformed, so the
    /// panels still open and the error is reported to the caller.
    pub fn toggle_sensor(&mut self, sensor_id: &str) -> DashboardResult<Visibility> {
        let panel = self
            .sensors
            .get_mut(sensor_id)
            .ok_or_else(|| DashboardError::UnknownSensor(sensor_id.to_string()))?;

        panel.readings = panel.readings.toggled();
        panel.chart_container = panel.readings;
        panel.graph_container = panel.readings;
        debug!("sensor {} readings panel now {:?}", sensor_id, panel.readings);

        if panel.readings.is_shown() {
            // drop the prior chart first so a parse failure leaves none live
            panel.chart = None;
            panel.chart = Some(chart_service::build_chart(sensor_id, &panel.readings_json)?);
        } else {
            panel.chart = None;
        }
        Ok(panel.readings)
    }

    /// Flip the annotations panel of a single reading. No other panel changes.
    pub fn toggle_reading(
        &mut self,
        sensor_id: &str,
        reading_id: &str,
    ) -> DashboardResult<Visibility> {
        let reading = self.reading_mut(sensor_id, reading_id)?;
        reading.annotations = reading.annotations.toggled();
        Ok(reading.annotations)
    }

    /// Flip the detail block adjacent to one annotation row.
    pub fn toggle_annotation(
        &mut self,
        sensor_id: &str,
        reading_id: &str,
        index: usize,
    ) -> DashboardResult<Visibility> {
        let reading = self.reading_mut(sensor_id, reading_id)?;
        let detail =
            reading
                .details
                .get_mut(index)
                .ok_or_else(|| DashboardError::UnknownAnnotation {
                    reading: reading_id.to_string(),
                    index,
                })?;
        *detail = detail.toggled();
        Ok(*detail)
    }

    fn reading_mut(
        &mut self,
        sensor_id: &str,
        reading_id: &str,
    ) -> DashboardResult<&mut ReadingPanelState> {
        let panel = self
            .sensors
            .get_mut(sensor_id)
            .ok_or_else(|| DashboardError::UnknownSensor(sensor_id.to_string()))?;
        panel
            .reading_panels
            .get_mut(reading_id)
            .ok_or_else(|| DashboardError::UnknownReading {
                sensor: sensor_id.to_string(),
                reading: reading_id.to_string(),
            })
    }
}
