use lazy_static::lazy_static;
use prometheus::{Counter, Histogram, HistogramOpts, Registry, TextEncoder};

lazy_static! {
    pub static ref REGISTRY: Registry = Registry::new();

    // Refresh pipeline metrics
    pub static ref REFRESH_CYCLES: Counter = Counter::new(
        "refresh_cycles_total",
        "Total number of completed refresh cycles"
    ).unwrap();

    pub static ref SCRAPE_FAILURES: Counter = Counter::new(
        "scrape_failures_total",
        "Total number of failed scrape attempts"
    ).unwrap();

    pub static ref TICKS_DROPPED: Counter = Counter::new(
        "refresh_ticks_dropped_total",
        "Ticks dropped because a refresh cycle was still running"
    ).unwrap();

    pub static ref CYCLE_DURATION: Histogram = Histogram::with_opts(
        HistogramOpts::new(
            "refresh_cycle_duration_seconds",
            "Wall-clock duration of a refresh cycle"
        ).buckets(vec![0.1, 0.5, 1.0, 2.5, 5.0, 10.0, 30.0])
    ).unwrap();
}

pub fn register_metrics() {
    REGISTRY.register(Box::new(REFRESH_CYCLES.clone())).unwrap();
    REGISTRY.register(Box::new(SCRAPE_FAILURES.clone())).unwrap();
    REGISTRY.register(Box::new(TICKS_DROPPED.clone())).unwrap();
    REGISTRY.register(Box::new(CYCLE_DURATION.clone())).unwrap();
}

/// Render the registry in Prometheus text exposition format.
pub fn gather() -> String {
    TextEncoder::new()
        .encode_to_string(&REGISTRY.gather())
        .unwrap_or_default()
}
