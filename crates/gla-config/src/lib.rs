//! Configuration for the Google Listings & Ads store client
//!
//! This crate provides:
//! - Configuration file lookup (TOML)
//! - Application configuration (AppConfig) with environment overrides
//! - Platform config directory paths

pub mod app_config;
pub mod config_file;
pub mod paths;

pub use app_config::AppConfig;
pub use config_file::load_config_file;
pub use paths::{app_config_path, config_dir};
