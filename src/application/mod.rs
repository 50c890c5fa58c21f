// Application layer - Dashboard use cases
pub mod chart_service;
pub mod dashboard_service;
pub mod panel_registry;
