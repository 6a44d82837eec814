//! Config loader.
//!
//! Layers, lowest first: built-in defaults, the YAML file named by
//! `PROMSTUB_CONFIG` (strict parsing), then individual environment variables.
//! The result is validated once and never changes afterwards.

pub mod schema;

use std::fs;

use promstub_core::error::{Result, StubError};

pub use schema::{DiscoverySection, MetricsSection, StubConfig};

pub const CONFIG_FILE_ENV: &str = "PROMSTUB_CONFIG";
pub const LISTEN_ADDR_ENV: &str = "LISTEN_ADDR";
pub const METRIC_VALUE_ENV: &str = "METRIC_VALUE";
pub const METRICS_PATH_ENV: &str = "METRICS_PATH";
pub const TARGET_NAMESPACE_ENV: &str = "TARGET_NAMESPACE";
pub const TARGET_PORT_ENV: &str = "TARGET_PORT";
pub const TARGET_SELECTOR_ENV: &str = "TARGET_SELECTOR";

/// Load from the process environment.
pub fn load_from_env() -> Result<StubConfig> {
    load_with(|key| std::env::var(key).ok())
}

/// Load using `lookup` in place of the process environment.
pub fn load_with<F>(lookup: F) -> Result<StubConfig>
where
    F: Fn(&str) -> Option<String>,
{
    let mut cfg = match lookup(CONFIG_FILE_ENV) {
        Some(path) => parse_file(&path)?,
        None => StubConfig::default(),
    };
    apply_env(&mut cfg, &lookup);
    cfg.validate()?;
    Ok(cfg)
}

pub fn load_from_str(s: &str) -> Result<StubConfig> {
    let cfg = parse_str(s)?;
    cfg.validate()?;
    Ok(cfg)
}

fn parse_file(path: &str) -> Result<StubConfig> {
    let s = fs::read_to_string(path)
        .map_err(|e| StubError::Io(format!("read config {path} failed: {e}")))?;
    parse_str(&s)
}

fn parse_str(s: &str) -> Result<StubConfig> {
    serde_yaml::from_str(s).map_err(|e| StubError::InvalidConfig(format!("invalid yaml: {e}")))
}

fn apply_env<F>(cfg: &mut StubConfig, lookup: &F)
where
    F: Fn(&str) -> Option<String>,
{
    let overrides: [(&str, &mut String); 6] = [
        (LISTEN_ADDR_ENV, &mut cfg.listen),
        (METRIC_VALUE_ENV, &mut cfg.metrics.value),
        (METRICS_PATH_ENV, &mut cfg.metrics.path),
        (TARGET_NAMESPACE_ENV, &mut cfg.discovery.namespace),
        (TARGET_PORT_ENV, &mut cfg.discovery.port),
        (TARGET_SELECTOR_ENV, &mut cfg.discovery.selector),
    ];
    for (key, slot) in overrides {
        if let Some(v) = lookup(key) {
            *slot = v;
        }
    }
}
