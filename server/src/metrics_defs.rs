//! Metrics definitions for the badge server.

use shared::metrics_defs::{MetricDef, MetricType};

pub const BADGES_RENDERED: MetricDef = MetricDef {
    name: "server.badges.rendered",
    metric_type: MetricType::Counter,
    description: "Number of badges served. Tagged with format.",
};

pub const BADGE_ERRORS: MetricDef = MetricDef {
    name: "server.badges.errors",
    metric_type: MetricType::Counter,
    description: "Number of badge requests answered with an error. Tagged with kind.",
};

pub const ALL_METRICS: &[MetricDef] = &[BADGES_RENDERED, BADGE_ERRORS];
