// Dashboard view model
use crate::domain::reading::ReadingView;

#[derive(Debug, Clone)]
pub struct Dashboard {
    pub sensors: Vec<SensorSummary>,
}

impl Dashboard {
    pub fn new(sensors: Vec<SensorSummary>) -> Self {
        Self { sensors }
    }
}

/// One sensor's section of the dashboard.
#[derive(Debug, Clone)]
pub struct SensorSummary {
    pub id: String,
    /// Total readings recorded for the sensor, before the display cap.
    pub total: usize,
    /// Average trust score across readings, percent.
    pub avg_confidence: f32,
    pub readings: Vec<ReadingView>,
    /// Serialized `Vec<SensorReading>` payload the chart is built from on each
    /// expansion. The embedded-attribute analog of the original page markup.
    pub readings_json: String,
}

impl SensorSummary {
    pub fn new(
        id: String,
        total: usize,
        avg_confidence: f32,
        readings: Vec<ReadingView>,
        readings_json: String,
    ) -> Self {
        Self {
            id,
            total,
            avg_confidence,
            readings,
            readings_json,
        }
    }
}
