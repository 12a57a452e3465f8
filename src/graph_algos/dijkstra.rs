use crate::errors::GraphError;
use crate::graph::Graph;
use super::SearchResult;
use super::a_star::{endpoints, explore};

use log::debug;




/// Identify the shortest path using Dijkstra's Algorithm
/// https://en.wikipedia.org/wiki/Dijkstra%27s_algorithm
/// Same traversal as A* with the heuristic fixed at zero, so coordinates are ignored
/// and the route is minimal regardless of the graph's heuristic scale
pub fn dijkstra(graph: &Graph, start: &str, goal: &str) -> Result<SearchResult, GraphError> {
    let (start_index, goal_index) = endpoints(graph, start, goal)?;

    debug!("dijkstra search from {start} to {goal}");
    Ok(explore(graph, start_index, goal_index, |_| 0.0))
}
