// Domain layer - Core dashboard data models
pub mod annotation;
pub mod chart;
pub mod dashboard;
pub mod reading;
