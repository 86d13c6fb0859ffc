//! Lazy-deletion Dijkstra search from one source to one target

use std::collections::{HashSet, VecDeque};

use tracing::{debug, trace};

use crate::config::SearchConfig;
use crate::error::{PathfinderError, Result};
use crate::graph::algos::frontier::{Frontier, TieBreak};
use crate::graph::algos::observer::{NoopObserver, SearchObserver};
use crate::graph::algos::tracker::PathTracker;
use crate::graph::algos::trail::Trail;
use crate::graph::types::{Path, VertexId, Weight};
use crate::graph::GraphProvider;

/// Options controlling a single search
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SearchOptions {
    /// Order among frontier entries of equal distance
    pub tie_break: TieBreak,
}

impl From<&SearchConfig> for SearchOptions {
    fn from(config: &SearchConfig) -> Self {
        SearchOptions {
            tie_break: config.tie_break,
        }
    }
}

/// State owned by one search
struct DijkstraState<'g> {
    frontier: Frontier<'g>,
    tracker: PathTracker<'g>,
    settled: HashSet<VertexId>,
    stale_pops: usize,
    relaxations: usize,
    overflows: usize,
}

impl<'g> DijkstraState<'g> {
    fn new(opts: &SearchOptions) -> Self {
        Self {
            frontier: Frontier::new(opts.tie_break),
            tracker: PathTracker::new(),
            settled: HashSet::new(),
            stale_pops: 0,
            relaxations: 0,
            overflows: 0,
        }
    }

    fn seed(&mut self, source: &str, observer: &dyn SearchObserver) {
        let source = VertexId::from(source);
        self.tracker.try_improve(&source, Weight::ZERO, Trail::new());
        observer.on_push(&source, Weight::ZERO);
        self.frontier.push(source, Weight::ZERO, Trail::new());
    }

    /// Relax every edge incident to a freshly settled vertex
    fn relax_neighbors(
        &mut self,
        provider: &'g dyn GraphProvider,
        current: &VertexId,
        distance: Weight,
        trail: &Trail<'g>,
        observer: &dyn SearchObserver,
    ) {
        for edge in provider.incident_edges(current.as_str()) {
            let Some(neighbor) = edge.opposite(current.as_str()) else {
                continue;
            };
            if self.settled.contains(neighbor.as_str()) {
                continue;
            }

            self.relaxations += 1;
            // No representable distance through this edge
            let Some(candidate) = distance.checked_add(edge.weight) else {
                self.overflows += 1;
                trace!(vertex = %neighbor, via = %edge.id, "overflow");
                observer.on_relax(edge, false);
                continue;
            };

            let improved = self.tracker.is_improvement(neighbor.as_str(), candidate);
            observer.on_relax(edge, improved);

            if improved {
                let extended = trail.extend(edge);
                self.tracker.try_improve(neighbor, candidate, extended.clone());
                trace!(vertex = %neighbor, distance = %candidate, via = %edge.id, "improved");
                observer.on_push(neighbor, candidate);
                self.frontier.push(neighbor.clone(), candidate, extended);
            }
        }
    }
}

/// Find a minimum-weight path from `source` to `target` with default options
pub fn find_shortest_path(
    provider: &dyn GraphProvider,
    source: &str,
    target: &str,
) -> Result<Path> {
    find_shortest_path_with(
        provider,
        source,
        target,
        &SearchOptions::default(),
        &NoopObserver,
    )
}

/// Find a minimum-weight path from `source` to `target` (lazy-deletion Dijkstra).
///
/// Fails with `NotFound` when the target cannot be reached, including when
/// either endpoint is not a vertex of the graph, and with `WeightOverflow`
/// when every path to the target weighs more than `u64::MAX`. When several
/// paths share the minimum weight, the one returned depends on
/// `opts.tie_break` and on the order of each vertex's incident edges.
#[tracing::instrument(skip(provider, opts, observer), fields(source = %source, target = %target, tie_break = %opts.tie_break))]
pub fn find_shortest_path_with<'g>(
    provider: &'g dyn GraphProvider,
    source: &str,
    target: &str,
    opts: &SearchOptions,
    observer: &dyn SearchObserver,
) -> Result<Path> {
    if !provider.contains_vertex(source) || !provider.contains_vertex(target) {
        debug!("endpoint not in graph");
        return Err(PathfinderError::not_found(source, target));
    }

    if source == target {
        debug!("source is target");
        return Ok(Path::empty(source));
    }

    let mut state = DijkstraState::new(opts);
    state.seed(source, observer);

    while let Some(entry) = state.frontier.pop_min() {
        let (current, distance, trail) = entry.into_parts();

        // Superseded by a shorter entry that was settled earlier
        if state.settled.contains(current.as_str()) {
            state.stale_pops += 1;
            trace!(vertex = %current, distance = %distance, "stale");
            observer.on_stale(&current, distance);
            continue;
        }

        state.settled.insert(current.clone());
        trace!(vertex = %current, distance = %distance, "settled");
        observer.on_settle(&current, distance);

        if current.as_str() == target {
            debug!(
                total_weight = %distance,
                edges = trail.len(),
                settled = state.settled.len(),
                pushes = state.frontier.pushes(),
                stale_pops = state.stale_pops,
                relaxations = state.relaxations,
                "path_found"
            );
            return Ok(Path {
                source: VertexId::from(source),
                target: current,
                edges: trail.to_owned_edges(),
                total_weight: distance,
            });
        }

        state.relax_neighbors(provider, &current, distance, &trail, observer);
    }

    debug!(
        settled = state.settled.len(),
        pushes = state.frontier.pushes(),
        stale_pops = state.stale_pops,
        relaxations = state.relaxations,
        overflows = state.overflows,
        "frontier_exhausted"
    );

    // Every vertex with a representable distance is settled, so a target
    // still connected to the source can only be reached by overflowing paths
    if state.overflows > 0 && is_connected(provider, source, target) {
        return Err(PathfinderError::weight_overflow(source, target));
    }
    Err(PathfinderError::not_found(source, target))
}

/// Whether `target` can be reached from `source` at all, ignoring weights
fn is_connected(provider: &dyn GraphProvider, source: &str, target: &str) -> bool {
    let mut seen: HashSet<&str> = HashSet::from([source]);
    let mut queue: VecDeque<&str> = VecDeque::from([source]);

    while let Some(current) = queue.pop_front() {
        if current == target {
            return true;
        }
        for edge in provider.incident_edges(current) {
            if let Some(next) = edge.opposite(current) {
                if seen.insert(next.as_str()) {
                    queue.push_back(next.as_str());
                }
            }
        }
    }
    false
}
