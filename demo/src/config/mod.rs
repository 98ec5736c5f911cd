//! Demo configuration

pub mod demo_config;
pub mod logging_config;

pub use demo_config::DemoConfig;
pub use logging_config::LoggingConfig;
