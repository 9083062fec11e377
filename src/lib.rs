pub mod config;
pub mod fetch;
pub mod format;
pub mod loader;
pub mod model;
pub mod output;
pub mod quarterly;
pub mod report;
pub mod screenshots;
