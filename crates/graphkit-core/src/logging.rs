use tracing_subscriber::{fmt, prelude::*, EnvFilter};

/// Counters collected while a priority-queue search runs.
///
/// Filled in by Dijkstra and A* and attached to their results so callers can
/// compare how much work different heuristics cause.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct SearchStats {
    /// Nodes popped from the queue and expanded
    pub expanded: usize,
    /// Successful relaxations (distance improvements)
    pub relaxed: usize,
    /// Relaxations that updated an already-queued entry in place
    pub decreased: usize,
    /// Largest queue length observed
    pub peak_queue: usize,
}

impl SearchStats {
    /// Record the current queue length, keeping the maximum
    pub fn observe_queue(&mut self, len: usize) {
        self.peak_queue = self.peak_queue.max(len);
    }
}

/// Log search statistics at debug level.
///
/// Usage:
/// ```rust,ignore
/// log_search_stats!(&result.stats, "dijkstra");
/// ```
#[macro_export]
macro_rules! log_search_stats {
    ($stats:expr, $name:expr) => {
        tracing::debug!(
            operation = $name,
            expanded = $stats.expanded,
            relaxed = $stats.relaxed,
            decreased = $stats.decreased,
            peak_queue = $stats.peak_queue,
            "search_stats"
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
    ($start:expr, $name:expr) => {
        tracing::trace!(elapsed = ?$start.elapsed(), $name);
    };
    ($start:expr, $name:expr $(, $field:ident = $value:expr)*) => {
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
        (true, None) => "graphkit=debug,graphkit_core=debug",
        (false, None) => "graphkit=warn,graphkit_core=warn",
        (_, Some(level)) => return init_with_level(level, log_json),
    };

    init_with_level(level, log_json)
}

fn init_with_level(level: &str, log_json: bool) -> Result<(), Box<dyn std::error::Error>> {
    // GRAPHKIT_LOG overrides the CLI-derived filter
    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_from_env("GRAPHKIT_LOG"))
        .unwrap_or_else(|_| EnvFilter::new(filter_directive(level)));

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

/// Expand a bare level ("debug") into directives for both crates
fn filter_directive(level: &str) -> String {
    if level.contains('=') {
        level.to_string()
    } else {
        format!("graphkit={level},graphkit_core={level}")
    }
}
