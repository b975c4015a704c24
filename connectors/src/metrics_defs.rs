//! Metrics definitions for the connectors.

use shared::metrics_defs::{MetricDef, MetricType};

pub const CACHE_HIT: MetricDef = MetricDef {
    name: "connector.cache.hit",
    metric_type: MetricType::Counter,
    description: "Number of lookups served from the result cache. Tagged with cache.",
};

pub const CACHE_MISS: MetricDef = MetricDef {
    name: "connector.cache.miss",
    metric_type: MetricType::Counter,
    description: "Number of lookups that missed the result cache. Tagged with cache.",
};

pub const UPSTREAM_REQUESTS: MetricDef = MetricDef {
    name: "connector.upstream.requests",
    metric_type: MetricType::Counter,
    description: "Number of upstream API requests. Tagged with connector, status.",
};

pub const UPSTREAM_DURATION: MetricDef = MetricDef {
    name: "connector.upstream.duration",
    metric_type: MetricType::Histogram,
    description: "Upstream API request duration in seconds. Tagged with connector.",
};

pub const ALL_METRICS: &[MetricDef] = &[
    CACHE_HIT,
    CACHE_MISS,
    UPSTREAM_REQUESTS,
    UPSTREAM_DURATION,
];
