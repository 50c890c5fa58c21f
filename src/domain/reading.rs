// Sensor reading domain models
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::domain::annotation::Annotation;

/// Display ids are cut to this many characters in reading rows and chart labels.
pub const DISPLAY_ID_LEN: usize = 10;

/// One sensor measurement as it appears in a sensor's embedded readings payload:
/// a JSON array of `{ "value": ..., "id": ..., "timestamp": ... }` objects.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SensorReading {
    pub id: String,
    pub value: f64,
    pub timestamp: DateTime<Utc>,
}

impl SensorReading {
    pub fn new(id: String, value: f64, timestamp: DateTime<Utc>) -> Self {
        Self {
            id,
            value,
            timestamp,
        }
    }
}

/// One reading row in the dashboard view model, annotations joined in and the
/// trust score already computed.
#[derive(Debug, Clone)]
pub struct ReadingView {
    /// Full reading id, used as the panel registry key.
    pub id: String,
    /// Truncated id shown in the UI.
    pub display_id: String,
    pub address: String,
    pub value: f64,
    pub timestamp: DateTime<Utc>,
    pub annotations: Vec<Annotation>,
    pub score: f32,
}

impl ReadingView {
    pub fn new(
        id: String,
        address: String,
        value: f64,
        timestamp: DateTime<Utc>,
        annotations: Vec<Annotation>,
        score: f32,
    ) -> Self {
        let display_id = truncate_id(&id);
        Self {
            id,
            display_id,
            address,
            value,
            timestamp,
            annotations,
            score,
        }
    }
}

/// First `DISPLAY_ID_LEN` characters of an id; shorter ids pass through unchanged.
pub fn truncate_id(id: &str) -> String {
    id.chars().take(DISPLAY_ID_LEN).collect()
}
