use std::fmt::Write;
use std::sync::atomic::{AtomicU64, Ordering};
use std::time::Instant;

use crate::domain::{RejectionCode, Verdict};

/// Metrics registry for the engine.
#[derive(Debug, Default)]
pub struct MetricsRegistry {
    /// Total applications decided
    pub decisions_total: AtomicU64,

    /// Decisions by outcome
    pub decisions_approved: AtomicU64,
    pub decisions_rejected: AtomicU64,

    /// Rejections per gate, indexed by `RejectionCode::index`
    rejections_by_code: [AtomicU64; RejectionCode::COUNT],

    /// Amortization quotes issued
    pub quotes_issued: AtomicU64,

    /// Requests that failed intake validation
    pub validation_errors: AtomicU64,

    /// Decision latency buckets (microseconds)
    pub latency_under_100us: AtomicU64,
    pub latency_100us_1ms: AtomicU64,
    pub latency_over_1ms: AtomicU64,

    /// Policy loads
    pub policy_loads_total: AtomicU64,
    pub policy_load_errors: AtomicU64,
}

impl MetricsRegistry {
    /// Create a new metrics registry.
    pub fn new() -> Self {
        MetricsRegistry::default()
    }

    /// Record a verdict.
    pub fn record_verdict(&self, verdict: &Verdict) {
        self.decisions_total.fetch_add(1, Ordering::Relaxed);

        match verdict {
            Verdict::Approved => {
                self.decisions_approved.fetch_add(1, Ordering::Relaxed);
            }
            Verdict::Rejected { reason } => {
                self.decisions_rejected.fetch_add(1, Ordering::Relaxed);
                self.rejections_by_code[reason.code.index()].fetch_add(1, Ordering::Relaxed);
            }
        }
    }

    /// Rejections attributed to one gate.
    pub fn rejections(&self, code: RejectionCode) -> u64 {
        self.rejections_by_code[code.index()].load(Ordering::Relaxed)
    }

    /// Record an issued quote.
    pub fn record_quote(&self) {
        self.quotes_issued.fetch_add(1, Ordering::Relaxed);
    }

    /// Record a request rejected by intake validation.
    pub fn record_validation_error(&self) {
        self.validation_errors.fetch_add(1, Ordering::Relaxed);
    }

    /// Record decision latency.
    pub fn record_latency(&self, start: Instant) {
        let micros = start.elapsed().as_micros() as u64;

        if micros < 100 {
            self.latency_under_100us.fetch_add(1, Ordering::Relaxed);
        } else if micros < 1000 {
            self.latency_100us_1ms.fetch_add(1, Ordering::Relaxed);
        } else {
            self.latency_over_1ms.fetch_add(1, Ordering::Relaxed);
        }
    }

    /// Record a policy load.
    pub fn record_policy_load(&self, success: bool) {
        self.policy_loads_total.fetch_add(1, Ordering::Relaxed);
        if !success {
            self.policy_load_errors.fetch_add(1, Ordering::Relaxed);
        }
    }

    /// Export metrics in Prometheus text format.
    pub fn to_prometheus(&self) -> String {
        let mut out = format!(
            r#"# HELP lendr_decisions_total Total number of applications decided
# TYPE lendr_decisions_total counter
lendr_decisions_total {}

# HELP lendr_decisions Applications decided by outcome
# TYPE lendr_decisions counter
lendr_decisions{{outcome="approved"}} {}
lendr_decisions{{outcome="rejected"}} {}

# HELP lendr_quotes_issued_total Amortization quotes issued
# TYPE lendr_quotes_issued_total counter
lendr_quotes_issued_total {}

# HELP lendr_validation_errors_total Requests rejected by intake validation
# TYPE lendr_validation_errors_total counter
lendr_validation_errors_total {}

# HELP lendr_decision_latency_bucket Decision latency histogram
# TYPE lendr_decision_latency_bucket counter
lendr_decision_latency_bucket{{le="0.0001"}} {}
lendr_decision_latency_bucket{{le="0.001"}} {}
lendr_decision_latency_bucket{{le="+Inf"}} {}

# HELP lendr_policy_loads_total Policy load operations
# TYPE lendr_policy_loads_total counter
lendr_policy_loads_total {}

# HELP lendr_policy_load_errors_total Policy load errors
# TYPE lendr_policy_load_errors_total counter
lendr_policy_load_errors_total {}

# HELP lendr_rejections Rejections by gate
# TYPE lendr_rejections counter
"#,
            self.decisions_total.load(Ordering::Relaxed),
            self.decisions_approved.load(Ordering::Relaxed),
            self.decisions_rejected.load(Ordering::Relaxed),
            self.quotes_issued.load(Ordering::Relaxed),
            self.validation_errors.load(Ordering::Relaxed),
            self.latency_under_100us.load(Ordering::Relaxed),
            self.latency_100us_1ms.load(Ordering::Relaxed),
            self.latency_over_1ms.load(Ordering::Relaxed),
            self.policy_loads_total.load(Ordering::Relaxed),
            self.policy_load_errors.load(Ordering::Relaxed),
        );

        for code in RejectionCode::ALL {
            let _ = writeln!(
                out,
                "lendr_rejections{{code=\"{}\"}} {}",
                code,
                self.rejections(code)
            );
        }

        out
    }
}
