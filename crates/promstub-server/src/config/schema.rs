use std::net::SocketAddr;

use serde::Deserialize;
use promstub_core::error::{Result, StubError};

#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct StubConfig {
    pub version: u32,

    #[serde(default = "default_listen")]
    pub listen: String,

    #[serde(default)]
    pub metrics: MetricsSection,

    #[serde(default)]
    pub discovery: DiscoverySection,
}

impl Default for StubConfig {
    fn default() -> Self {
        Self {
            version: 1,
            listen: default_listen(),
            metrics: MetricsSection::default(),
            discovery: DiscoverySection::default(),
        }
    }
}

impl StubConfig {
    pub fn validate(&self) -> Result<()> {
        if self.version != 1 {
            return Err(StubError::UnsupportedVersion);
        }
        self.listen_addr()?;
        self.metrics.validate()?;
        Ok(())
    }

    pub fn listen_addr(&self) -> Result<SocketAddr> {
        self.listen.parse().map_err(|e| {
            StubError::InvalidConfig(format!("listen must be a valid SocketAddr ({}): {e}", self.listen))
        })
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct MetricsSection {
    /// Written verbatim as the sample value.
    #[serde(default = "default_metric_value")]
    pub value: String,

    #[serde(default = "default_metrics_path")]
    pub path: String,
}

impl Default for MetricsSection {
    fn default() -> Self {
        Self {
            value: default_metric_value(),
            path: default_metrics_path(),
        }
    }
}

impl MetricsSection {
    /// Requests are matched against the path byte for byte, so any string
    /// works except one no request line can carry.
    pub fn validate(&self) -> Result<()> {
        if !self.path.starts_with('/') {
            return Err(StubError::InvalidConfig(format!(
                "metrics.path must start with '/': {}",
                self.path
            )));
        }
        Ok(())
    }
}

/// Kubernetes lookup hints. Only `namespace` reaches the response; `port`
/// and `selector` are carried for a future real lookup.
#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct DiscoverySection {
    #[serde(default = "default_namespace")]
    pub namespace: String,

    #[serde(default = "default_port")]
    pub port: String,

    #[serde(default = "default_selector")]
    pub selector: String,
}

impl Default for DiscoverySection {
    fn default() -> Self {
        Self {
            namespace: default_namespace(),
            port: default_port(),
            selector: default_selector(),
        }
    }
}

fn default_listen() -> String {
    "0.0.0.0:8000".into()
}
fn default_metric_value() -> String {
    "30".into()
}
fn default_metrics_path() -> String {
    "/metrics2".into()
}
fn default_namespace() -> String {
    "default".into()
}
fn default_port() -> String {
    "9090".into()
}
fn default_selector() -> String {
    "app=metrics-server".into()
}
