// Typed errors for the dashboard. Panel operations return these instead of
// panicking on unresolved ids or malformed payloads.

#[derive(Debug, thiserror::Error)]
pub enum DashboardError {
    #[error("unknown sensor: {0}")]
    UnknownSensor(String),

    #[error("unknown reading {reading} for sensor {sensor}")]
    UnknownReading { sensor: String, reading: String },

    #[error("unknown annotation {index} for reading {reading}")]
    UnknownAnnotation { reading: String, index: usize },

    #[error("malformed reading data for sensor {sensor}: {source}")]
    MalformedReadingData {
        sensor: String,
        #[source]
        source: serde_json::Error,
    },

    #[error("snapshot error: {0}")]
    Snapshot(#[from] std::io::Error),

    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("configuration error: {0}")]
    Config(#[from] config::ConfigError),
}

pub type DashboardResult<T> = Result<T, DashboardError>;
