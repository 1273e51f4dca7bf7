//! Core module - configuration and process environment
//!
//! - [`Config`] - runtime configuration
//! - [`setup_environment`] - dotenv + config + logging in one call

pub mod config;

pub use config::Config;

/// Prepare the process environment
///
/// 1. Load `.env` if present
/// 2. Read [`Config`] from the environment
/// 3. Initialize logging according to the config
pub fn setup_environment() -> anyhow::Result<Config> {
    dotenv::dotenv().ok();
    let config = Config::from_env();
    crate::utils::logger::init_logger_with_file(
        &config.log_level,
        config.log_json,
        config.log_dir.as_deref(),
    )?;
    Ok(config)
}
