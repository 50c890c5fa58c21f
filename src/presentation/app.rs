// Main application state and frame loop
use tracing::error;

use crate::application::panel_registry::{PanelAction, PanelRegistry};
use crate::domain::dashboard::Dashboard;

use super::panels;

pub struct DashboardApp {
    dashboard: Dashboard,
    panels: PanelRegistry,
    /// Last failed panel action, shown in the footer until the next click.
    status: Option<String>,
}

impl DashboardApp {
    pub fn new(dashboard: Dashboard, panels: PanelRegistry) -> Self {
        Self {
            dashboard,
            panels,
            status: None,
        }
    }

    fn apply_actions(&mut self, actions: Vec<PanelAction>) {
        self.status = None;
        for action in actions {
            if let Err(e) = self.panels.apply(action) {
                error!("panel action failed: {e}");
                self.status = Some(e.to_string());
            }
        }
    }
}

impl eframe::App for DashboardApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        // Clicks are collected during the render pass and applied afterwards,
        // so the pass reads a consistent registry.
        let mut actions = Vec::new();

        egui::TopBottomPanel::top("header").show(ctx, |ui| {
            ui.heading("Sensor Readings");
        });

        if let Some(status) = self.status.clone() {
            egui::TopBottomPanel::bottom("status").show(ctx, |ui| {
                ui.colored_label(egui::Color32::LIGHT_RED, status);
            });
        }

        egui::CentralPanel::default().show(ctx, |ui| {
            egui::ScrollArea::vertical().show(ui, |ui| {
                for sensor in &self.dashboard.sensors {
                    if let Some(panel) = self.panels.sensor(&sensor.id) {
                        panels::sensor_section(ui, sensor, panel, &mut actions);
                    }
                    ui.separator();
                }
            });
        });

        if !actions.is_empty() {
            self.apply_actions(actions);
        }
    }
}
