// Presentation layer - egui dashboard UI
pub mod app;
pub mod chart_view;
pub mod panels;
