//! Per-tick timing metrics for the session loop.

/// Wall-clock timings collected during a single tick, in microseconds.
///
/// Populated after each `advance_tick` call; consumers read them from
/// the most recent tick via
/// [`Session::last_metrics`](crate::session::Session::last_metrics).
#[derive(Clone, Copy, Debug, Default)]
pub struct StepMetrics {
    /// Time for the entire tick, including validation.
    pub total_us: u64,
    /// Time spent in the mixing update.
    pub update_us: u64,
    /// Time spent recording the derived series.
    pub record_us: u64,
}
