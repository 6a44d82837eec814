//! Target group and health payload tests.

#![allow(clippy::unwrap_used)]
#![allow(clippy::expect_used)]
#![allow(clippy::panic)]

use promstub_core::discovery::{TargetGroup, STATIC_TARGETS};
use promstub_core::health::HealthStatus;

#[test]
fn default_group_wire_format() {
    let groups = vec![TargetGroup::static_group("/metrics2", "default")];
    let s = serde_json::to_string(&groups).unwrap();
    assert_eq!(
        s,
        r#"[{"targets":["metrics-server-1.default.svc.cluster.local:9090","metrics-server-2.default.svc.cluster.local:9090"],"labels":{"__metrics_path__":"/metrics2","kubernetes_namespace":"default"}}]"#
    );
}

#[test]
fn hostnames_ignore_namespace() {
    let g = TargetGroup::static_group("/custom", "monitoring");
    assert_eq!(g.targets, STATIC_TARGETS.to_vec());
    assert_eq!(g.labels.metrics_path, "/custom");
    assert_eq!(g.labels.kubernetes_namespace, "monitoring");
}

#[test]
fn health_body() {
    let s = serde_json::to_string(&HealthStatus::healthy()).unwrap();
    assert_eq!(s, r#"{"status":"healthy"}"#);
}
