// Application configuration
use serde::Deserialize;

use crate::error::DashboardResult;

#[derive(Debug, Deserialize, Clone)]
pub struct AppConfig {
    pub snapshot: SnapshotSettings,
    #[serde(default)]
    pub window: WindowSettings,
    #[serde(default)]
    pub dashboard: DashboardSettings,
}

#[derive(Debug, Deserialize, Clone)]
pub struct SnapshotSettings {
    pub path: String,
}

#[derive(Debug, Deserialize, Clone)]
pub struct WindowSettings {
    #[serde(default = "default_title")]
    pub title: String,
    #[serde(default = "default_width")]
    pub width: f32,
    #[serde(default = "default_height")]
    pub height: f32,
}

#[derive(Debug, Deserialize, Clone)]
pub struct DashboardSettings {
    /// Readings shown per sensor; the newest ones win.
    #[serde(default = "default_max_readings")]
    pub max_readings: usize,
}

fn default_title() -> String {
    "Sensor Dashboard".to_string()
}

fn default_width() -> f32 {
    1100.0
}

fn default_height() -> f32 {
    760.0
}

fn default_max_readings() -> usize {
    75
}

impl Default for WindowSettings {
    fn default() -> Self {
        Self {
            title: default_title(),
            width: default_width(),
            height: default_height(),
        }
    }
}

impl Default for DashboardSettings {
    fn default() -> Self {
        Self {
            max_readings: default_max_readings(),
        }
    }
}

pub fn load_app_config() -> DashboardResult<AppConfig> {
    let settings = config::Config::builder()
        .add_source(config::File::with_name("config/dashboard"))
        .build()?;

    Ok(settings.try_deserialize()?)
}
