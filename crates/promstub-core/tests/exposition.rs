//! Exposition rendering tests.

#![allow(clippy::unwrap_used)]
#![allow(clippy::expect_used)]
#![allow(clippy::panic)]

use promstub_core::exposition::{MetricKind, MetricSample};

#[test]
fn first_metric_default_body() {
    let body = MetricSample::first_metric("30").render();
    assert_eq!(
        body,
        "# HELP my_first_metric Some description of what my_first_metric means\n\
         # TYPE my_first_metric gauge\n\
         my_first_metric 30"
    );
}

#[test]
fn value_is_written_verbatim() {
    for v in ["42", "-1.5e3", "NaN", "not-a-number", ""] {
        let body = MetricSample::first_metric(v).render();
        let third = body.lines().nth(2).unwrap();
        assert_eq!(third, format!("my_first_metric {v}"));
    }
}

#[test]
fn no_trailing_newline() {
    let body = MetricSample::first_metric("1").render();
    assert!(!body.ends_with('\n'));
    assert_eq!(body.lines().count(), 3);
}

#[test]
fn gauge_uses_given_name_and_help() {
    let s = MetricSample::gauge("queue_depth", "Items waiting.", "7");
    assert_eq!(s.kind, MetricKind::Gauge);
    assert_eq!(
        s.render(),
        "# HELP queue_depth Items waiting.\n# TYPE queue_depth gauge\nqueue_depth 7"
    );
}
