// Infrastructure layer - Configuration and snapshot input
pub mod config;
pub mod snapshot;
