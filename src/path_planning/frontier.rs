//! Open set for A* grid search
//!
//! Candidates are kept in a binary heap. Selection order is fully
//! deterministic:
//!
//! 1. lowest `f = g + h`
//! 2. then lowest `h` (the candidate closest to the goal)
//! 3. then the most recently queued (or improved) candidate
//!
//! Inserting a candidate also marks its cell `Closed` on the grid, so a
//! cell can never be queued twice in one search. A queued cell that is
//! reached again more cheaply keeps its place in the open set with the
//! lower cost (see [`Frontier::improve`]); superseded heap entries are
//! skipped when popped.

use std::cmp::Ordering;
use std::collections::{BinaryHeap, HashMap};

use crate::common::Coord;
use crate::utils::Grid;

/// A queued cell with its accumulated cost and heuristic estimate
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Candidate {
    pub coord: Coord,
    /// Steps taken from the start
    pub g: u32,
    /// Heuristic estimate to the goal
    pub h: u32,
}

impl Candidate {
    pub fn new(coord: Coord, g: u32, h: u32) -> Self {
        Self { coord, g, h }
    }

    pub fn f(&self) -> u32 {
        self.g + self.h
    }
}

#[derive(Debug)]
struct PriorityCandidate {
    candidate: Candidate,
    seq: u64,
}

impl Eq for PriorityCandidate {}

impl PartialEq for PriorityCandidate {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Ord for PriorityCandidate {
    fn cmp(&self, other: &Self) -> Ordering {
        // Reverse ordering on f and h for min-heap behavior, newest wins ties
        other
            .candidate
            .f()
            .cmp(&self.candidate.f())
            .then_with(|| other.candidate.h.cmp(&self.candidate.h))
            .then_with(|| self.seq.cmp(&other.seq))
    }
}

impl PartialOrd for PriorityCandidate {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

/// Collection of candidates awaiting expansion
#[derive(Debug, Default)]
pub struct Frontier {
    heap: BinaryHeap<PriorityCandidate>,
    // live g per queued cell
    open: HashMap<Coord, u32>,
    next_seq: u64,
}

impl Frontier {
    pub fn new() -> Self {
        Self::default()
    }

    /// Queue `candidate` and mark its cell `Closed`
    pub fn insert(&mut self, candidate: Candidate, grid: &mut Grid) {
        grid.mark_closed(candidate.coord);
        self.open.insert(candidate.coord, candidate.g);
        self.push(candidate);
    }

    /// Lower the cost of a cell that is still queued.
    ///
    /// Returns false, leaving the frontier untouched, when the cell is not
    /// queued or `candidate.g` is no improvement.
    pub fn improve(&mut self, candidate: Candidate) -> bool {
        match self.open.get_mut(&candidate.coord) {
            Some(g) if candidate.g < *g => {
                *g = candidate.g;
                self.push(candidate);
                true
            }
            _ => false,
        }
    }

    /// True while `coord` is queued and not yet selected
    pub fn contains(&self, coord: Coord) -> bool {
        self.open.contains_key(&coord)
    }

    /// Remove and return the best candidate, or `None` when the frontier is exhausted
    pub fn select_best(&mut self) -> Option<Candidate> {
        while let Some(PriorityCandidate { candidate, .. }) = self.heap.pop() {
            if self.open.get(&candidate.coord) == Some(&candidate.g) {
                self.open.remove(&candidate.coord);
                return Some(candidate);
            }
        }
        None
    }

    pub fn len(&self) -> usize {
        self.open.len()
    }

    pub fn is_empty(&self) -> bool {
        self.open.is_empty()
    }

    fn push(&mut self, candidate: Candidate) {
        self.heap.push(PriorityCandidate {
            candidate,
            seq: self.next_seq,
        });
        self.next_seq += 1;
    }
}
