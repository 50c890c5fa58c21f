// Dashboard service - Use case for building the dashboard view model from a
// snapshot of recorded readings and annotations
use std::collections::BTreeSet;

use tracing::debug;

use crate::domain::dashboard::{Dashboard, SensorSummary};
use crate::domain::reading::{ReadingView, SensorReading};
use crate::error::DashboardResult;
use crate::infrastructure::snapshot::DashboardSnapshot;

#[derive(Debug, Clone)]
pub struct DashboardService {
    /// Display cap per sensor; older readings beyond it are dropped from the
    /// view (the total still counts them).
    max_readings: usize,
}

impl DashboardService {
    pub fn new(max_readings: usize) -> Self {
        Self { max_readings }
    }

    /// Group readings by sensor, join annotations by reading id, score each
    /// reading, and embed the per-sensor chart payload.
    pub fn build(&self, snapshot: &DashboardSnapshot) -> DashboardResult<Dashboard> {
        // BTreeSet keeps sensors sorted by id.
        let ids: BTreeSet<&str> = snapshot
            .readings
            .iter()
            .map(|r| r.reading.id.as_str())
            .collect();
        debug!("building dashboard for {} sensors", ids.len());

        let mut sensors = Vec::with_capacity(ids.len());
        for id in ids {
            let mut readings = Vec::new();
            for record in snapshot.readings.iter().filter(|r| r.reading.id == id) {
                let mut score = 0_f32;
                let annotations: Vec<_> = snapshot
                    .annotations
                    .iter()
                    .filter(|a| a.reading_id == record.id)
                    .map(|a| {
                        score += a.annotation.trust_weight();
                        a.annotation.clone()
                    })
                    .collect();
                debug!("annotations for {}: {}", record.id, annotations.len());

                readings.push(ReadingView::new(
                    record.id.clone(),
                    record.address.clone(),
                    record.reading.value,
                    record.reading.timestamp,
                    annotations,
                    score,
                ));
            }

            readings.sort_by(|a, b| b.timestamp.cmp(&a.timestamp));
            let total = readings.len();
            let avg_confidence = average_confidence(&readings);
            readings.truncate(self.max_readings);

            let payload: Vec<SensorReading> = readings
                .iter()
                .map(|r| SensorReading::new(r.id.clone(), r.value, r.timestamp))
                .collect();
            let readings_json = serde_json::to_string(&payload)?;

            sensors.push(SensorSummary::new(
                id.to_string(),
                total,
                avg_confidence,
                readings,
                readings_json,
            ));
        }

        Ok(Dashboard::new(sensors))
    }
}

/// Mean trust score across readings, rounded to 3 decimals and expressed as a
/// percentage. Empty input yields 0.
fn average_confidence(readings: &[ReadingView]) -> f32 {
    if readings.is_empty() {
        return 0.0;
    }
    let sum: f32 = readings.iter().map(|r| r.score).sum();
    let avg = sum / readings.len() as f32;
    ((avg * 1000.0).round() / 1000.0) * 100.0
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::annotation::Annotation;
    use crate::infrastructure::snapshot::{RecordedAnnotation, RecordedReading};
    use chrono::{TimeZone, Utc};

    fn record(reading_id: &str, sensor: &str, value: f64, secs: i64) -> RecordedReading {
        RecordedReading {
            id: reading_id.to_string(),
            address: format!("addr-{reading_id}"),
            reading: SensorReading::new(
                sensor.to_string(),
                value,
                Utc.timestamp_opt(secs, 0).unwrap(),
            ),
        }
    }

    fn annotation(reading_id: &str, kind: &str, satisfied: bool) -> RecordedAnnotation {
        RecordedAnnotation {
            reading_id: reading_id.to_string(),
            annotation: Annotation::new(
                kind.to_string(),
                "host-1".to_string(),
                "sig".to_string(),
                satisfied,
                Utc.timestamp_opt(0, 0).unwrap(),
            ),
        }
    }

    #[test]
    fn test_groups_by_sensor_and_sorts_sensors_by_id() {
        let snapshot = DashboardSnapshot {
            readings: vec![
                record("r1", "sensor-b", 180.0, 10),
                record("r2", "sensor-a", 181.0, 20),
                record("r3", "sensor-b", 182.0, 30),
            ],
            annotations: vec![],
        };
        let dashboard = DashboardService::new(75).build(&snapshot).unwrap();
        assert_eq!(dashboard.sensors.len(), 2);
        assert_eq!(dashboard.sensors[0].id, "sensor-a");
        assert_eq!(dashboard.sensors[1].id, "sensor-b");
        assert_eq!(dashboard.sensors[1].total, 2);
    }

    #[test]
    fn test_readings_sorted_newest_first_and_capped() {
        let snapshot = DashboardSnapshot {
            readings: (0..5)
                .map(|i| record(&format!("r{i}"), "sensor-a", 180.0, i * 60))
                .collect(),
            annotations: vec![],
        };
        let dashboard = DashboardService::new(3).build(&snapshot).unwrap();
        let sensor = &dashboard.sensors[0];
        assert_eq!(sensor.total, 5);
        assert_eq!(sensor.readings.len(), 3);
        assert_eq!(sensor.readings[0].id, "r4");
        assert_eq!(sensor.readings[2].id, "r2");
    }

    #[test]
    fn test_annotations_joined_and_scored() {
        let snapshot = DashboardSnapshot {
            readings: vec![record("r1", "sensor-a", 180.0, 0)],
            annotations: vec![
                annotation("r1", "tls", true),
                annotation("r1", "pki", false),
                annotation("other", "pki", true),
            ],
        };
        let dashboard = DashboardService::new(75).build(&snapshot).unwrap();
        let reading = &dashboard.sensors[0].readings[0];
        assert_eq!(reading.annotations.len(), 2);
        assert!((reading.score - 0.2).abs() < 1e-5);
    }

    #[test]
    fn test_average_confidence_is_percent() {
        let snapshot = DashboardSnapshot {
            readings: vec![record("r1", "sensor-a", 180.0, 0)],
            annotations: vec![
                annotation("r1", "threshold", true),
                annotation("r1", "source", true),
                annotation("r1", "tls", true),
                annotation("r1", "pki", true),
            ],
        };
        let dashboard = DashboardService::new(75).build(&snapshot).unwrap();
        assert!((dashboard.sensors[0].avg_confidence - 100.0).abs() < 0.1);
    }

    #[test]
    fn test_embedded_payload_matches_view_rows() {
        let snapshot = DashboardSnapshot {
            readings: vec![
                record("r1", "sensor-a", 180.0, 60),
                record("r2", "sensor-a", 181.0, 0),
            ],
            annotations: vec![],
        };
        let dashboard = DashboardService::new(75).build(&snapshot).unwrap();
        let payload: Vec<SensorReading> =
            serde_json::from_str(&dashboard.sensors[0].readings_json).unwrap();
        assert_eq!(payload.len(), 2);
        assert_eq!(payload[0].id, "r1");
        assert_eq!(payload[0].value, 180.0);
    }

    #[test]
    fn test_empty_snapshot() {
        let dashboard = DashboardService::new(75)
            .build(&DashboardSnapshot::default())
            .unwrap();
        assert!(dashboard.sensors.is_empty());
    }
}
