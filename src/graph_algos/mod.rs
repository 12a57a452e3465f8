pub mod dijkstra;
pub mod a_star;
mod shortest_path;

use shortest_path::shortest_path;

use std::fmt;


/// Ordered walk from start to goal with its total weight
#[derive(Clone, Debug, PartialEq)]
pub struct Route {
    pub nodes: Vec<String>, // start first, goal last
    pub cost: f64, // sum of traversed edge weights
}

impl Route {

    pub fn new(nodes: Vec<String>, cost: f64) -> Self {
        Self { nodes, cost }
    }

    /// Number of edges traversed
    pub fn hops(&self) -> usize {
        self.nodes.len().saturating_sub(1)
    }
}

impl fmt::Display for Route {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.nodes.join(" -> "))
    }
}


/// Outcome of a route query
/// An unreachable goal is a valid answer, not an error
#[derive(Clone, Debug, PartialEq)]
pub enum SearchResult {
    Found(Route),
    NotFound,
}

impl SearchResult {

    pub fn is_found(&self) -> bool {
        matches!(self, SearchResult::Found(_))
    }

    pub fn route(&self) -> Option<&Route> {
        match self {
            SearchResult::Found(route) => Some(route),
            SearchResult::NotFound => None,
        }
    }

    pub fn into_route(self) -> Option<Route> {
        match self {
            SearchResult::Found(route) => Some(route),
            SearchResult::NotFound => None,
        }
    }
}
