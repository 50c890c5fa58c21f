// Main entry point - Dependency injection and UI setup
mod application;
mod domain;
mod error;
mod infrastructure;
mod presentation;

use anyhow::anyhow;
use tracing::info;
use tracing_subscriber::EnvFilter;

use crate::application::dashboard_service::DashboardService;
use crate::application::panel_registry::PanelRegistry;
use crate::infrastructure::config::load_app_config;
use crate::infrastructure::snapshot::DashboardSnapshot;
use crate::presentation::app::DashboardApp;

fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    // Load configuration and the recorded snapshot
    let config = load_app_config()?;
    let snapshot = DashboardSnapshot::load(&config.snapshot.path)?;

    // Build the view model and the panel registry (application layer)
    let dashboard = DashboardService::new(config.dashboard.max_readings).build(&snapshot)?;
    let panels = PanelRegistry::from_dashboard(&dashboard);
    info!("dashboard ready: {} sensors", dashboard.sensors.len());

    // Run the UI (presentation layer)
    let native_options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([config.window.width, config.window.height]),
        ..Default::default()
    };
    eframe::run_native(
        &config.window.title,
        native_options,
        Box::new(move |_cc| Ok(Box::new(DashboardApp::new(dashboard, panels)))),
    )
    .map_err(|e| anyhow!("failed to run dashboard ui: {e}"))?;

    Ok(())
}
