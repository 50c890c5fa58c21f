// Snapshot loading - the recorded readings and annotations the dashboard
// renders, persisted by the collector as two JSON lists
use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::info;

use crate::domain::annotation::Annotation;
use crate::domain::reading::SensorReading;
use crate::error::DashboardResult;

/// A reading as recorded off the stream: content-hash id, stream address, and
/// the reading itself (whose `id` names the sensor).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RecordedReading {
    pub id: String,
    pub address: String,
    pub reading: SensorReading,
}

/// An annotation keyed to the reading it attests.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RecordedAnnotation {
    pub reading_id: String,
    pub annotation: Annotation,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct DashboardSnapshot {
    #[serde(default)]
    pub readings: Vec<RecordedReading>,
    #[serde(default)]
    pub annotations: Vec<RecordedAnnotation>,
}

impl DashboardSnapshot {
    pub fn load(path: impl AsRef<Path>) -> DashboardResult<Self> {
        let bytes = std::fs::read(path.as_ref())?;
        let snapshot: DashboardSnapshot = serde_json::from_slice(&bytes)?;
        info!(
            "loaded snapshot: {} readings, {} annotations",
            snapshot.readings.len(),
            snapshot.annotations.len()
        );
        Ok(snapshot)
    }
}
