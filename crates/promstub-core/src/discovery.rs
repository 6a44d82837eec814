//! HTTP service discovery payloads (JSON).
//!
//! Field order in the structs is the key order on the wire.

use serde::Serialize;

/// Targets returned by `/targets`. The hostnames are fixed and do not follow
/// the configured namespace or port.
pub const STATIC_TARGETS: [&str; 2] = [
    "metrics-server-1.default.svc.cluster.local:9090",
    "metrics-server-2.default.svc.cluster.local:9090",
];

/// One Prometheus target group.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TargetGroup {
    pub targets: Vec<String>,
    pub labels: TargetLabels,
}

/// Label set attached to every target of a group.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TargetLabels {
    /// Path Prometheus scrapes on each target.
    #[serde(rename = "__metrics_path__")]
    pub metrics_path: String,
    pub kubernetes_namespace: String,
}

impl TargetGroup {
    /// The static group, labelled with the configured path and namespace.
    pub fn static_group(metrics_path: impl Into<String>, namespace: impl Into<String>) -> Self {
        Self {
            targets: STATIC_TARGETS.iter().map(|t| t.to_string()).collect(),
            labels: TargetLabels {
                metrics_path: metrics_path.into(),
                kubernetes_namespace: namespace.into(),
            },
        }
    }
}
