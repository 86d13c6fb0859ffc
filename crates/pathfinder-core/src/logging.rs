use std::sync::atomic::{AtomicU64, Ordering};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use crate::graph::{Edge, SearchObserver, VertexId, Weight};

/// Search counters for structured logging.
///
/// Implements `SearchObserver`, so it can be passed straight to
/// `find_shortest_path_with`. All counters are atomic; one instance may be
/// shared by searches running on different threads.
#[derive(Debug, Default)]
pub struct SearchMetrics {
    searches: AtomicU64,
    pushes: AtomicU64,
    settled: AtomicU64,
    stale_pops: AtomicU64,
    relaxations: AtomicU64,
    improvements: AtomicU64,
}

impl SearchMetrics {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record the start of a search
    pub fn record_search(&self) {
        self.searches.fetch_add(1, Ordering::Relaxed);
    }

    pub fn searches(&self) -> u64 {
        self.searches.load(Ordering::Relaxed)
    }

    pub fn pushes(&self) -> u64 {
        self.pushes.load(Ordering::Relaxed)
    }

    pub fn settled(&self) -> u64 {
        self.settled.load(Ordering::Relaxed)
    }

    pub fn stale_pops(&self) -> u64 {
        self.stale_pops.load(Ordering::Relaxed)
    }

    pub fn relaxations(&self) -> u64 {
        self.relaxations.load(Ordering::Relaxed)
    }

    pub fn improvements(&self) -> u64 {
        self.improvements.load(Ordering::Relaxed)
    }

    /// Share of pops that were discarded as stale, as a percentage (0.0-100.0)
    pub fn stale_rate(&self) -> f64 {
        let stale = self.stale_pops();
        let total = stale + self.settled();
        if total == 0 {
            0.0
        } else {
            (stale as f64 / total as f64) * 100.0
        }
    }

    /// Reset all counters to zero
    pub fn reset(&self) {
        for counter in [
            &self.searches,
            &self.pushes,
            &self.settled,
            &self.stale_pops,
            &self.relaxations,
            &self.improvements,
        ] {
            counter.store(0, Ordering::Relaxed);
        }
    }
}

impl SearchObserver for SearchMetrics {
    fn on_push(&self, _vertex: &VertexId, _distance: Weight) {
        self.pushes.fetch_add(1, Ordering::Relaxed);
    }

    fn on_settle(&self, _vertex: &VertexId, _distance: Weight) {
        self.settled.fetch_add(1, Ordering::Relaxed);
    }

    fn on_stale(&self, _vertex: &VertexId, _distance: Weight) {
        self.stale_pops.fetch_add(1, Ordering::Relaxed);
    }

    fn on_relax(&self, _edge: &Edge, improved: bool) {
        self.relaxations.fetch_add(1, Ordering::Relaxed);
        if improved {
            self.improvements.fetch_add(1, Ordering::Relaxed);
        }
    }
}

/// Log search metrics at debug level.
///
/// Usage:
/// ```rust,ignore
/// let metrics = SearchMetrics::new();
/// // ... run some searches with &metrics as observer ...
/// log_search_metrics!(&metrics, "path");
/// ```
#[macro_export]
macro_rules! log_search_metrics {
    ($metrics:expr, $name:expr) => {
        tracing::debug!(
            operation = $name,
            searches = $metrics.searches(),
            pushes = $metrics.pushes(),
            settled = $metrics.settled(),
            stale_pops = $metrics.stale_pops(),
            relaxations = $metrics.relaxations(),
            improvements = $metrics.improvements(),
            stale_rate = $metrics.stale_rate(),
            "search_metrics"
        );
    };
}

/// Helper macro for logging elapsed time at trace level.
///
/// Usage:
/// ```rust,ignore
/// let start = Instant::now();
/// // ... some work ...
/// trace_time!(start, "build_graph");
/// // Or with additional fields:
/// trace_time!(start, "build_graph", edges = graph.edge_count());
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
        (true, None) => "pathfinder=debug,pathfinder_core=debug",
        (false, None) => "pathfinder=warn,pathfinder_core=warn",
        (_, Some(level)) => return init_with_level(level, log_json),
    };

    init_with_level(level, log_json)
}

/// Filter directive for a bare level such as `debug`; full directives pass through
fn level_directive(level: &str) -> String {
    if level.contains('=') {
        level.to_string()
    } else {
        format!("pathfinder={0},pathfinder_core={0}", level)
    }
}

fn init_with_level(level: &str, log_json: bool) -> Result<(), Box<dyn std::error::Error>> {
    // PATHFINDER_LOG overrides RUST_LOG, which overrides the CLI level
    let filter = EnvFilter::try_from_env("PATHFINDER_LOG")
        .or_else(|_| EnvFilter::try_from_default_env())
        .unwrap_or_else(|_| EnvFilter::new(level_directive(level)));

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
