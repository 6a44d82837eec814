//! Discovery handler: a fixed target group in Prometheus HTTP SD format.
//!
//! No Kubernetes lookup happens. `discovery.port` and `discovery.selector`
//! stay unused here.

use axum::{extract::State, Json};
use promstub_core::discovery::TargetGroup;

use crate::app_state::AppState;

pub async fn targets(State(state): State<AppState>) -> Json<Vec<TargetGroup>> {
    let cfg = state.cfg();
    Json(vec![TargetGroup::static_group(
        cfg.metrics.path.as_str(),
        cfg.discovery.namespace.as_str(),
    )])
}
