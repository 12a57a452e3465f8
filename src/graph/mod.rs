pub mod reference;
mod spec;

pub use spec::{EdgeSpec, GraphSpec};

use crate::collections::FxIndexMap;
use crate::errors::{GraphError, LoadError, SpecViolation};
use crate::geometry::Point;

use std::path::Path;
use log::{debug, warn};


/// Immutable weighted undirected graph with a coordinate per node
///
/// Nodes are stored in declaration order, the position in that order is the
/// node index used internally by the search algorithms.
/// The graph has no mutation methods once built and can be shared across
/// threads by reference.
#[derive(Clone, Debug)]
pub struct Graph {
    nodes: FxIndexMap<String, Point>, // label -> coordinate
    adjacency: Vec<Vec<(usize, f64)>>, // node index -> (neighbor index, weight)
    heuristic_scale: f64,
    edge_count: usize,
}

impl Graph {

    /// Validate a specification and build the graph from it
    pub fn from_spec(spec: GraphSpec) -> Result<Self, GraphError> {
        let GraphSpec { heuristic_scale, nodes: labels, mut coordinates, edges } = spec;

        if !heuristic_scale.is_finite() || heuristic_scale < 0.0 {
            return Err(SpecViolation::InvalidHeuristicScale(heuristic_scale).into());
        }

        let mut nodes: FxIndexMap<String, Point> = FxIndexMap::default();
        for label in labels {
            if nodes.contains_key(&label) {
                return Err(SpecViolation::DuplicateNode(label).into());
            }
            let point = match coordinates.remove(&label) {
                Some(point) => point,
                None => return Err(SpecViolation::MissingCoordinate(label).into()),
            };
            if !point.is_finite() {
                return Err(SpecViolation::NonFiniteCoordinate(label).into());
            }
            nodes.insert(label, point);
        }

        // every coordinate must belong to a declared node
        if let Some(label) = coordinates.into_keys().next() {
            return Err(SpecViolation::UnknownCoordinate(label).into());
        }

        let mut adjacency: Vec<Vec<(usize, f64)>> = vec![Vec::new(); nodes.len()];
        let mut edge_count = 0;
        let mut total_weight = 0.0;

        for EdgeSpec { from, to, weight } in edges {
            let (a, b) = match (nodes.get_index_of(&from), nodes.get_index_of(&to)) {
                (Some(a), Some(b)) => (a, b),
                (None, _) => {
                    let missing = from.clone();
                    return Err(SpecViolation::DanglingEdge { from, to, missing }.into());
                }
                (_, None) => {
                    let missing = to.clone();
                    return Err(SpecViolation::DanglingEdge { from, to, missing }.into());
                }
            };

            if a == b {
                return Err(SpecViolation::SelfLoop(from).into());
            }
            if !weight.is_finite() {
                return Err(SpecViolation::NonFiniteWeight { from, to }.into());
            }
            if weight < 0.0 {
                return Err(SpecViolation::NegativeWeight { from, to, weight }.into());
            }

            // the same edge may be listed once per direction
            if let Some(&(_, first)) = adjacency[a].iter().find(|(n, _)| *n == b) {
                if first != weight {
                    return Err(SpecViolation::ConflictingEdge { from, to, first, second: weight }.into());
                }
                continue;
            }

            let straight = heuristic_scale * nodes[a].distance(&nodes[b]);
            if straight > weight {
                warn!(
                    "edge {from} - {to} (weight {weight}) is shorter than the scaled straight-line distance {straight:.3}, heuristic is not consistent"
                );
            }

            adjacency[a].push((b, weight));
            adjacency[b].push((a, weight));
            edge_count += 1;
            total_weight += weight;
        }

        // bounds the cost of every simple path, so route costs stay finite
        if !total_weight.is_finite() {
            return Err(SpecViolation::WeightOverflow.into());
        }

        debug!("built graph with {} nodes and {} edges", nodes.len(), edge_count);

        Ok(Self {
            nodes,
            adjacency,
            heuristic_scale,
            edge_count,
        })
    }

    /// Read a JSON specification from disk and build the graph from it
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self, LoadError> {
        let spec = GraphSpec::from_path(path)?;
        Ok(Self::from_spec(spec)?)
    }

    pub fn contains(&self, label: &str) -> bool {
        self.nodes.contains_key(label)
    }

    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    pub fn edge_count(&self) -> usize {
        self.edge_count
    }

    pub fn heuristic_scale(&self) -> f64 {
        self.heuristic_scale
    }

    /// Node labels in declaration order
    pub fn labels(&self) -> impl Iterator<Item = &str> + '_ {
        self.nodes.keys().map(String::as_str)
    }

    /// Adjacent nodes with the weight of the connecting edge
    pub fn neighbors(&self, label: &str) -> Result<impl Iterator<Item = (&str, f64)> + '_, GraphError> {
        let index = self.require(label)?;
        Ok(self.adjacency[index].iter().map(move |&(n, w)| (self.label(n), w)))
    }

    pub fn coordinate(&self, label: &str) -> Result<Point, GraphError> {
        let index = self.require(label)?;
        Ok(self.nodes[index])
    }

    /// Weight of the edge between two nodes, None if they are not adjacent
    pub fn edge_weight(&self, a: &str, b: &str) -> Result<Option<f64>, GraphError> {
        let a = self.require(a)?;
        let b = self.require(b)?;
        Ok(self.adjacency[a].iter().find(|(n, _)| *n == b).map(|&(_, w)| w))
    }

    /// Estimated remaining cost from `label` to `goal`
    pub fn heuristic(&self, label: &str, goal: &str) -> Result<f64, GraphError> {
        let index = self.require(label)?;
        let goal = self.require(goal)?;
        Ok(self.heuristic_between(index, goal))
    }

    /// True when no edge is shorter than the scaled distance between its endpoints
    /// A consistent heuristic guarantees A* returns minimum-cost routes
    pub fn is_heuristic_consistent(&self) -> bool {
        self.adjacency.iter().enumerate().all(|(a, edges)| {
            edges.iter().all(|&(b, w)| self.heuristic_between(a, b) <= w)
        })
    }

    /// Map user input onto a node label
    /// Surrounding whitespace is ignored and case only matters when it is
    /// needed to tell two labels apart
    pub fn resolve(&self, input: &str) -> Option<&str> {
        let wanted = input.trim();
        if let Some((label, _)) = self.nodes.get_key_value(wanted) {
            return Some(label.as_str());
        }

        let wanted = wanted.to_lowercase();
        let mut matches = self.labels().filter(|label| label.to_lowercase() == wanted);
        match (matches.next(), matches.next()) {
            (Some(label), None) => Some(label),
            _ => None, // missing or ambiguous
        }
    }

    pub(crate) fn index_of(&self, label: &str) -> Option<usize> {
        self.nodes.get_index_of(label)
    }

    fn require(&self, label: &str) -> Result<usize, GraphError> {
        self.index_of(label).ok_or_else(|| GraphError::UnknownNode(label.to_string()))
    }

    pub(crate) fn label(&self, index: usize) -> &str {
        self.nodes.get_index(index).map(|(label, _)| label.as_str()).unwrap()
    }

    pub(crate) fn adjacent(&self, index: usize) -> &[(usize, f64)] {
        &self.adjacency[index]
    }

    pub(crate) fn heuristic_between(&self, index: usize, goal: usize) -> f64 {
        // far apart points overflow the distance, and 0 * inf is NaN
        if self.heuristic_scale == 0.0 {
            return 0.0;
        }
        self.heuristic_scale * self.nodes[index].distance(&self.nodes[goal])
    }
}


#[cfg(test)]
mod tests {
    use super::*;

    fn triangle() -> GraphSpec {
        GraphSpec::new()
            .node("A", 0.0, 0.0)
            .node("B", 3.0, 0.0)
            .node("C", 3.0, 4.0)
            .edge("A", "B", 3.0)
            .edge("B", "C", 4.0)
            .edge("A", "C", 6.0)
    }

    fn violation(spec: GraphSpec) -> SpecViolation {
        match Graph::from_spec(spec) {
            Err(GraphError::InvalidGraphSpec(v)) => v,
            other => panic!("expected an invalid spec, got {other:?}"),
        }
    }

    #[test]
    fn test_adjacency_is_symmetric() {
        let graph = Graph::from_spec(triangle()).unwrap();

        for a in graph.labels() {
            for (b, w) in graph.neighbors(a).unwrap() {
                assert_eq!(graph.edge_weight(b, a).unwrap(), Some(w));
            }
        }
        assert_eq!(graph.node_count(), 3);
        assert_eq!(graph.edge_count(), 3);
    }

    #[test]
    fn test_neighbors() {
        let graph = Graph::from_spec(triangle()).unwrap();
        let mut neighbors: Vec<_> = graph.neighbors("A").unwrap().collect();
        neighbors.sort_by(|x, y| x.0.cmp(y.0));

        assert_eq!(neighbors, vec![("B", 3.0), ("C", 6.0)]);
    }

    #[test]
    fn test_lookups_on_unknown_node() {
        let graph = Graph::from_spec(triangle()).unwrap();

        assert!(!graph.contains("Z"));
        assert_eq!(graph.coordinate("Z").unwrap_err(), GraphError::UnknownNode("Z".to_string()));
        assert!(matches!(graph.neighbors("Z"), Err(GraphError::UnknownNode(_))));
        assert!(matches!(graph.edge_weight("A", "Z"), Err(GraphError::UnknownNode(_))));
    }

    #[test]
    fn test_coordinate_and_heuristic() {
        let graph = Graph::from_spec(triangle().with_heuristic_scale(0.5)).unwrap();

        assert_eq!(graph.coordinate("C").unwrap(), Point::new(3.0, 4.0));
        assert_eq!(graph.heuristic("A", "C").unwrap(), 2.5);
        assert_eq!(graph.heuristic("C", "C").unwrap(), 0.0);
        assert_eq!(graph.edge_weight("B", "C").unwrap(), Some(4.0));
    }

    #[test]
    fn test_heuristic_consistency() {
        let graph = Graph::from_spec(triangle()).unwrap();
        assert!(graph.is_heuristic_consistent());

        // A - C is 5 apart in a straight line but only costs 1
        let mut spec = triangle();
        spec.edges[2].weight = 1.0;
        assert!(!Graph::from_spec(spec).unwrap().is_heuristic_consistent());
    }

    #[test]
    fn test_duplicate_edge_listing_is_merged() {
        let graph = Graph::from_spec(triangle().edge("B", "A", 3.0)).unwrap();
        assert_eq!(graph.edge_count(), 3);
        assert_eq!(graph.neighbors("A").unwrap().count(), 2);
    }

    #[test]
    fn test_resolve() {
        let graph = Graph::from_spec(
            GraphSpec::new()
                .node("Delhi", 0.0, 0.0)
                .node("Shimla", 1.0, 0.0)
                .node("x", 2.0, 0.0)
                .node("X", 3.0, 0.0)
        ).unwrap();

        assert_eq!(graph.resolve("Delhi"), Some("Delhi"));
        assert_eq!(graph.resolve("  SHIMLA "), Some("Shimla"));
        assert_eq!(graph.resolve("delhi\n"), Some("Delhi"));
        assert_eq!(graph.resolve("X"), Some("X"));
        assert_eq!(graph.resolve("x"), Some("x"));
        assert_eq!(graph.resolve("Amritsar"), None);
    }

    #[test]
    fn test_resolve_ambiguous() {
        let graph = Graph::from_spec(
            GraphSpec::new().node("ab", 0.0, 0.0).node("AB", 1.0, 0.0)
        ).unwrap();
        assert_eq!(graph.resolve("Ab"), None);
    }

    #[test]
    fn test_rejects_duplicate_node() {
        let spec = triangle().node("A", 9.0, 9.0);
        assert_eq!(violation(spec), SpecViolation::DuplicateNode("A".to_string()));
    }

    #[test]
    fn test_rejects_missing_coordinate() {
        let mut spec = triangle();
        spec.coordinates.remove("B");
        assert_eq!(violation(spec), SpecViolation::MissingCoordinate("B".to_string()));
    }

    #[test]
    fn test_rejects_unknown_coordinate() {
        let mut spec = triangle();
        spec.coordinates.insert("Z".to_string(), Point::new(1.0, 1.0));
        assert_eq!(violation(spec), SpecViolation::UnknownCoordinate("Z".to_string()));
    }

    #[test]
    fn test_rejects_dangling_edge() {
        let spec = triangle().edge("A", "Z", 1.0);
        assert_eq!(
            violation(spec),
            SpecViolation::DanglingEdge { from: "A".to_string(), to: "Z".to_string(), missing: "Z".to_string() }
        );

        let spec = triangle().edge("Y", "A", 1.0);
        assert!(matches!(violation(spec), SpecViolation::DanglingEdge { missing, .. } if missing == "Y"));
    }

    #[test]
    fn test_rejects_bad_weights() {
        assert!(matches!(violation(triangle().edge("A", "B", -1.0)), SpecViolation::NegativeWeight { .. }));
        assert!(matches!(violation(triangle().edge("A", "B", f64::NAN)), SpecViolation::NonFiniteWeight { .. }));
        assert!(matches!(violation(triangle().edge("B", "A", 2.0)), SpecViolation::ConflictingEdge { .. }));
    }

    #[test]
    fn test_rejects_self_loop() {
        assert_eq!(violation(triangle().edge("C", "C", 1.0)), SpecViolation::SelfLoop("C".to_string()));
    }

    #[test]
    fn test_rejects_bad_coordinates_and_scale() {
        let spec = triangle().node("D", f64::INFINITY, 0.0);
        assert_eq!(violation(spec), SpecViolation::NonFiniteCoordinate("D".to_string()));

        assert!(matches!(violation(triangle().with_heuristic_scale(-1.0)), SpecViolation::InvalidHeuristicScale(_)));
        assert!(matches!(violation(triangle().with_heuristic_scale(f64::NAN)), SpecViolation::InvalidHeuristicScale(_)));
    }

    #[test]
    fn test_rejects_weights_that_overflow_route_costs() {
        let spec = GraphSpec::new()
            .node("A", 0.0, 0.0)
            .node("B", 1.0, 0.0)
            .node("C", 2.0, 0.0)
            .edge("A", "B", 1e308)
            .edge("B", "C", 1e308)
            .with_heuristic_scale(0.0);
        assert_eq!(violation(spec), SpecViolation::WeightOverflow);

        // large but summable weights are fine
        let spec = GraphSpec::new()
            .node("A", 0.0, 0.0)
            .node("B", 1.0, 0.0)
            .node("C", 2.0, 0.0)
            .edge("A", "B", 1e307)
            .edge("B", "C", 1e307)
            .with_heuristic_scale(0.0);
        let graph = Graph::from_spec(spec).unwrap();
        let route = crate::find_path(&graph, "A", "C").unwrap().into_route().unwrap();
        assert_eq!(route.nodes, ["A", "B", "C"]);
        assert!(route.cost.is_finite());
    }

    #[test]
    fn test_zero_scale_heuristic_with_distant_points() {
        // the points are too far apart for their distance to be finite
        let graph = Graph::from_spec(
            GraphSpec::new()
                .node("S", -1e200, -1e200)
                .node("M", 0.0, 0.0)
                .node("G", 1e200, 1e200)
                .edge("S", "M", 1.0)
                .edge("M", "G", 1.0)
                .with_heuristic_scale(0.0)
        ).unwrap();

        assert_eq!(graph.heuristic("S", "G").unwrap(), 0.0);
        assert!(graph.is_heuristic_consistent());

        let route = crate::find_path(&graph, "S", "G").unwrap().into_route().unwrap();
        assert_eq!(route.nodes, ["S", "M", "G"]);
        assert_eq!(route.cost, 2.0);
    }

    #[test]
    fn test_zero_weight_edges_are_allowed() {
        let spec = GraphSpec::new()
            .node("A", 0.0, 0.0)
            .node("B", 0.0, 0.0)
            .edge("A", "B", 0.0);
        let graph = Graph::from_spec(spec).unwrap();
        assert_eq!(graph.edge_weight("A", "B").unwrap(), Some(0.0));
    }
}
