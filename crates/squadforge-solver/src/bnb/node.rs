//! Search tree nodes.
//!
//! Each node is a partial assignment of the model's binary variables.

use std::cmp::Ordering;

use squadforge_config::ExplorationType;

/// A partial assignment in the search tree.
#[derive(Debug, Clone)]
pub struct SearchNode {
    /// `None` for a free variable.
    assignment: Vec<Option<bool>>,
    /// Number of branching decisions from the root.
    depth: usize,
    /// Upper bound on any objective reachable from this node.
    bound: f64,
}

impl SearchNode {
    /// Creates the root node with every variable free.
    pub fn root(num_variables: usize) -> Self {
        Self {
            assignment: vec![None; num_variables],
            depth: 0,
            bound: f64::INFINITY,
        }
    }

    /// Creates a child with one more variable fixed.
    pub fn child(&self, var: usize, value: bool) -> Self {
        let mut assignment = self.assignment.clone();
        assignment[var] = Some(value);
        Self {
            assignment,
            depth: self.depth + 1,
            bound: self.bound,
        }
    }

    #[inline]
    pub fn assignment(&self) -> &[Option<bool>] {
        &self.assignment
    }

    #[inline]
    pub fn assignment_mut(&mut self) -> &mut [Option<bool>] {
        &mut self.assignment
    }

    #[inline]
    pub fn depth(&self) -> usize {
        self.depth
    }

    #[inline]
    pub fn bound(&self) -> f64 {
        self.bound
    }

    pub fn set_bound(&mut self, bound: f64) {
        self.bound = bound;
    }

    /// Returns the assignment as solver values. Free variables read as 0.
    pub fn values(&self) -> Vec<f64> {
        self.assignment
            .iter()
            .map(|value| if *value == Some(true) { 1.0 } else { 0.0 })
            .collect()
    }
}

/// A node wrapper for priority queue ordering.
pub(crate) struct PriorityNode {
    /// Insertion sequence; later nodes win ties.
    index: u64,
    node: SearchNode,
    exploration_type: ExplorationType,
}

impl PriorityNode {
    pub(crate) fn new(index: u64, node: SearchNode, exploration_type: ExplorationType) -> Self {
        Self {
            index,
            node,
            exploration_type,
        }
    }

    pub(crate) fn into_node(self) -> SearchNode {
        self.node
    }
}

impl Eq for PriorityNode {}

impl PartialEq for PriorityNode {
    fn eq(&self, other: &Self) -> bool {
        self.index == other.index
    }
}

impl Ord for PriorityNode {
    fn cmp(&self, other: &Self) -> Ordering {
        let primary = match self.exploration_type {
            // Higher depth = higher priority
            ExplorationType::DepthFirst => self.node.depth.cmp(&other.node.depth),
            // Better bound = higher priority
            ExplorationType::BestBoundFirst => self
                .node
                .bound
                .total_cmp(&other.node.bound)
                .then_with(|| self.node.depth.cmp(&other.node.depth)),
        };
        primary.then_with(|| self.index.cmp(&other.index))
    }
}

impl PartialOrd for PriorityNode {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}
