// Chart building - Use case for turning a sensor's embedded readings payload
// into chart data
use crate::domain::chart::{ChartData, ChartPoint};
use crate::domain::reading::SensorReading;
use crate::error::{DashboardError, DashboardResult};

/// Parse a sensor's embedded readings payload and project it into chart data.
///
/// The projection is order-preserving: point `i` of the chart corresponds to
/// element `i` of the payload array. An empty array yields an empty dataset.
pub fn build_chart(sensor_id: &str, readings_json: &str) -> DashboardResult<ChartData> {
    let readings: Vec<SensorReading> =
        serde_json::from_str(readings_json).map_err(|source| {
            DashboardError::MalformedReadingData {
                sensor: sensor_id.to_string(),
                source,
            }
        })?;

    let points = readings
        .into_iter()
        .map(|r| ChartPoint {
            reading_id: r.id,
            timestamp: r.timestamp,
            value: r.value,
        })
        .collect();

    Ok(ChartData::new(sensor_id.to_string(), points))
}
