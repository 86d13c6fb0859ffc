//! Min-priority frontier with lazy decrease-key
//!
//! A vertex whose distance improves is pushed again rather than updated in
//! place, so several entries for one vertex may be queued at once. The search
//! engine discards the superseded ones when they are popped after the vertex
//! has been settled.

use std::cmp::{Ordering, Reverse};
use std::collections::BinaryHeap;
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::graph::algos::trail::Trail;
use crate::graph::types::{VertexId, Weight};

/// Order in which entries with equal distance leave the frontier
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum TieBreak {
    /// First pushed, first popped
    #[default]
    Insertion,
    /// Lexicographically smallest vertex id first, then push order
    VertexId,
}

impl FromStr for TieBreak {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "insertion" => Ok(TieBreak::Insertion),
            "vertex-id" | "vertex_id" => Ok(TieBreak::VertexId),
            other => Err(format!(
                "unknown tie-break '{}' (expected: insertion, vertex-id)",
                other
            )),
        }
    }
}

impl fmt::Display for TieBreak {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TieBreak::Insertion => write!(f, "insertion"),
            TieBreak::VertexId => write!(f, "vertex-id"),
        }
    }
}

/// Secondary ordering among entries of equal distance. All entries of one
/// frontier use the same variant.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord)]
enum OrderKey {
    Sequence(u64),
    Vertex(VertexId, u64),
}

/// Candidate vertex with the distance and path it was reached by
#[derive(Debug, Clone)]
pub struct FrontierEntry<'g> {
    pub vertex: VertexId,
    pub distance: Weight,
    pub trail: Trail<'g>,
    order: OrderKey,
}

impl<'g> FrontierEntry<'g> {
    pub fn into_parts(self) -> (VertexId, Weight, Trail<'g>) {
        (self.vertex, self.distance, self.trail)
    }
}

impl PartialEq for FrontierEntry<'_> {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for FrontierEntry<'_> {}

impl PartialOrd for FrontierEntry<'_> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for FrontierEntry<'_> {
    fn cmp(&self, other: &Self) -> Ordering {
        self.distance
            .cmp(&other.distance)
            .then_with(|| self.order.cmp(&other.order))
    }
}

/// Min-heap of frontier entries keyed by cumulative distance
#[derive(Debug, Default)]
pub struct Frontier<'g> {
    heap: BinaryHeap<Reverse<FrontierEntry<'g>>>,
    tie_break: TieBreak,
    next_sequence: u64,
}

impl<'g> Frontier<'g> {
    pub fn new(tie_break: TieBreak) -> Self {
        Self {
            heap: BinaryHeap::new(),
            tie_break,
            next_sequence: 0,
        }
    }

    /// Queue a candidate. Duplicate entries for one vertex are allowed.
    pub fn push(&mut self, vertex: VertexId, distance: Weight, trail: Trail<'g>) {
        let sequence = self.next_sequence;
        self.next_sequence += 1;

        let order = match self.tie_break {
            TieBreak::Insertion => OrderKey::Sequence(sequence),
            TieBreak::VertexId => OrderKey::Vertex(vertex.clone(), sequence),
        };
        self.heap.push(Reverse(FrontierEntry {
            vertex,
            distance,
            trail,
            order,
        }));
    }

    /// Remove and return the entry with the smallest distance
    pub fn pop_min(&mut self) -> Option<FrontierEntry<'g>> {
        self.heap.pop().map(|Reverse(entry)| entry)
    }

    pub fn is_empty(&self) -> bool {
        self.heap.is_empty()
    }

    pub fn len(&self) -> usize {
        self.heap.len()
    }

    /// Total entries ever pushed, including ones since popped
    pub fn pushes(&self) -> u64 {
        self.next_sequence
    }

    pub fn tie_break(&self) -> TieBreak {
        self.tie_break
    }
}
