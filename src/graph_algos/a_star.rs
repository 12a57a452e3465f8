use crate::errors::GraphError;
use crate::graph::Graph;
use super::{shortest_path, Route, SearchResult};

use std::{
    collections::BinaryHeap,
    cmp::Ordering
};
use log::{debug, trace};



/// Frontier entry on the A* open list
#[derive(Debug)]
struct Node {
    index: usize, // node index in the graph
    cost: f64, // Cost to reach this node when the entry was pushed
    f_cost: f64, // Total cost = cost + h(n) aka estimated cost
}

// BinaryHeap pops the largest entry, so the ordering is reversed:
// smallest f_cost first, ties go to the smaller node index
impl Ord for Node {
    fn cmp(&self, other: &Self) -> Ordering {
        other.f_cost.total_cmp(&self.f_cost)
            .then_with(|| other.index.cmp(&self.index))
    }
}
impl PartialOrd for Node {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}
impl PartialEq for Node {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}
impl Eq for Node {}

/// A* Algorithm
/// https://en.wikipedia.org/wiki/A*_search_algorithm
///
/// The heuristic is the graph's scaled straight-line distance to the goal.
/// Routes are minimal as long as that heuristic is consistent, see
/// `Graph::is_heuristic_consistent`. Otherwise a valid but possibly longer
/// route is returned.
#[derive(Clone, Copy, Debug)]
pub struct AStar<'g> {
    graph: &'g Graph,
}

impl<'g> AStar<'g> {

    pub fn new(graph: &'g Graph) -> Self {
        Self { graph }
    }

    /// Find the cheapest route from start to goal
    /// Labels are matched exactly, use `Graph::resolve` for user input
    pub fn find_path(&self, start: &str, goal: &str) -> Result<SearchResult, GraphError> {
        let graph = self.graph;
        let (start_index, goal_index) = endpoints(graph, start, goal)?;

        debug!("A* search from {start} to {goal}");
        Ok(explore(graph, start_index, goal_index, |index| graph.heuristic_between(index, goal_index)))
    }
}

/// Find the cheapest route from start to goal using A*
pub fn find_path(graph: &Graph, start: &str, goal: &str) -> Result<SearchResult, GraphError> {
    AStar::new(graph).find_path(start, goal)
}


/// Resolve both endpoints before any search state is allocated
pub(crate) fn endpoints(graph: &Graph, start: &str, goal: &str) -> Result<(usize, usize), GraphError> {
    let start_index = graph.index_of(start).ok_or_else(|| GraphError::UnknownNode(start.to_string()))?;
    let goal_index = graph.index_of(goal).ok_or_else(|| GraphError::UnknownNode(goal.to_string()))?;
    Ok((start_index, goal_index))
}

/// Best-first traversal from start until goal is popped from the frontier
/// heuristic_fn: estimated remaining cost from a node index to the goal
pub(crate) fn explore<H>(graph: &Graph, start: usize, goal: usize, heuristic_fn: H) -> SearchResult
where
    H: Fn(usize) -> f64,
{
    // best known cost from start, infinite until reached
    let mut g_score = vec![f64::INFINITY; graph.node_count()];

    // predecessor on the best known path, start has none
    let mut came_from: Vec<Option<usize>> = vec![None; graph.node_count()];

    // Open List
    // Nodes that need to be evaluated, implemented as priority queue
    // The same node may be queued several times, only the entry matching g_score counts
    let mut open_list: BinaryHeap<Node> = BinaryHeap::new();

    g_score[start] = 0.0;
    open_list.push(Node {
        index: start,
        cost: 0.0,
        f_cost: heuristic_fn(start),
    });

    let mut expanded = 0usize;

    while let Some(Node { index, cost, f_cost }) = open_list.pop() {

        // If cost of the entry is higher than the best cost, skip it
        // This implies we've already found a better path to this node
        if cost > g_score[index] {
            trace!("discarding stale entry for {} ({cost} > {})", graph.label(index), g_score[index]);
            continue;
        }

        expanded += 1;
        trace!("expanding {} (g = {cost}, f = {f_cost})", graph.label(index));

        // Check if we've reached the goal
        if index == goal {
            let route = Route::new(shortest_path(graph, &came_from, goal), g_score[goal]);
            debug!("reached {} after expanding {expanded} nodes, cost {}", graph.label(goal), route.cost);
            return SearchResult::Found(route);
        }

        for &(neighbor, weight) in graph.adjacent(index) {

            // new cost to reach this neighbor through the current node
            let tentative = cost + weight;

            // only strict improvements are queued
            if tentative < g_score[neighbor] {
                g_score[neighbor] = tentative;
                came_from[neighbor] = Some(index);
                open_list.push(Node {
                    index: neighbor,
                    cost: tentative,
                    f_cost: tentative + heuristic_fn(neighbor),
                });
            }
        }
    }

    debug!("frontier exhausted after expanding {expanded} nodes, {} is unreachable", graph.label(goal));
    SearchResult::NotFound
}
