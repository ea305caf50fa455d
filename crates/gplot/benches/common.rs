use std::time::Duration;

use criterion::{Criterion, Throughput};

pub const SAMPLE_SIZE: usize = 30;
pub const WARM_UP: Duration = Duration::from_millis(500);
pub const MEASUREMENT_TIME: Duration = Duration::from_secs(2);

/// Criterion tuned for the short, allocation-bound routines benchmarked here.
pub fn default_criterion() -> Criterion {
    Criterion::default()
        .configure_from_args()
        .sample_size(SAMPLE_SIZE)
        .warm_up_time(WARM_UP)
        .measurement_time(MEASUREMENT_TIME)
}

/// Per-item throughput; graphs, options, or sampled points depending on the bench.
pub fn elements_throughput(items: usize) -> Throughput {
    Throughput::Elements(items.max(1) as u64)
}
