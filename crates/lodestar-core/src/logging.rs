use std::sync::atomic::{AtomicU64, Ordering};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

/// Per-query work counters for structured logging.
///
/// Tracks how much work a query performed so slow queries can be explained
/// from logs alone. All operations are atomic and lock-free.
#[derive(Debug, Default)]
pub struct QueryMetrics {
    /// Successful edge relaxations (distance improvements)
    relaxations: AtomicU64,
    /// Entries pushed onto a priority queue
    queue_pushes: AtomicU64,
    /// Entries popped and discarded because a better priority superseded them
    stale_pops: AtomicU64,
}

impl QueryMetrics {
    /// Create a new QueryMetrics instance
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a successful relaxation
    pub fn record_relaxation(&self) {
        self.relaxations.fetch_add(1, Ordering::Relaxed);
    }

    /// Record a queue push
    pub fn record_push(&self) {
        self.queue_pushes.fetch_add(1, Ordering::Relaxed);
    }

    /// Record a stale queue entry being skipped
    pub fn record_stale_pop(&self) {
        self.stale_pops.fetch_add(1, Ordering::Relaxed);
    }

    pub fn relaxations(&self) -> u64 {
        self.relaxations.load(Ordering::Relaxed)
    }

    pub fn queue_pushes(&self) -> u64 {
        self.queue_pushes.load(Ordering::Relaxed)
    }

    pub fn stale_pops(&self) -> u64 {
        self.stale_pops.load(Ordering::Relaxed)
    }

    /// Share of pushed entries that were discarded as stale (0.0-100.0)
    pub fn stale_rate(&self) -> f64 {
        let pushes = self.queue_pushes();
        if pushes == 0 {
            0.0
        } else {
            (self.stale_pops() as f64 / pushes as f64) * 100.0
        }
    }
}

/// Log query metrics at debug level.
///
/// Usage:
/// ```rust,ignore
/// let metrics = QueryMetrics::new();
/// // ... record some metrics ...
/// log_query_metrics!(&metrics, "dijkstra");
/// ```
#[macro_export]
macro_rules! log_query_metrics {
    ($metrics:expr, $name:expr) => {
        tracing::debug!(
            operation = $name,
            relaxations = $metrics.relaxations(),
            queue_pushes = $metrics.queue_pushes(),
            stale_pops = $metrics.stale_pops(),
            stale_rate = $metrics.stale_rate(),
            "query_metrics"
        );
    };
}

/// Helper macro for logging elapsed time at trace level.
///
/// Usage:
/// ```rust,ignore
/// let start = Instant::now();
/// // ... some work ...
/// trace_time!(start, "operation_name");
/// // Or with additional fields:
/// trace_time!(start, "operation_name", nodes = graph.node_count());
/// ```
#[macro_export]
macro_rules! trace_time {
    ($start:expr, $name:literal) => {
        tracing::trace!(elapsed = ?$start.elapsed(), $name);
    };
    ($start:expr, $name:literal $(, $field:ident = $value:expr)*) => {
        tracing::trace!(elapsed = ?$start.elapsed(), $($field = $value),*, $name);
    };
}

/// Initialize structured logging based on CLI arguments
pub fn init_tracing(
    verbose: bool,
    log_level: Option<&str>,
    log_json: bool,
) -> Result<(), Box<dyn std::error::Error>> {
    let level = match (verbose, log_level) {
        (true, None) => "lodestar=debug,lodestar_core=debug",
        (false, None) => "lodestar=warn,lodestar_core=warn",
        (_, Some(level)) => return init_with_level(level, log_json),
    };

    init_with_level(level, log_json)
}

fn init_with_level(level: &str, log_json: bool) -> Result<(), Box<dyn std::error::Error>> {
    // Support LODESTAR_LOG environment variable override
    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_from_env("LODESTAR_LOG"))
        .unwrap_or_else(|_| {
            EnvFilter::new(if level.contains('=') || level.contains(',') {
                level.to_string()
            } else {
                format!("lodestar={},lodestar_core={}", level, level)
            })
        });

    let registry = tracing_subscriber::registry().with(filter);

    if log_json {
        registry
            .with(
                fmt::layer()
                    .json()
                    .with_writer(std::io::stderr)
                    .with_ansi(false)
                    .with_span_events(
                        tracing_subscriber::fmt::format::FmtSpan::NEW
                            | tracing_subscriber::fmt::format::FmtSpan::CLOSE,
                    ),
            )
            .try_init()?;
    } else {
        registry
            .with(
                fmt::layer()
                    .compact()
                    .with_target(false)
                    .with_writer(std::io::stderr)
                    .with_ansi(false),
            )
            .try_init()?;
    }

    Ok(())
}
