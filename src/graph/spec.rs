use crate::errors::LoadError;
use crate::geometry::Point;

use std::{collections::BTreeMap, fs, path::Path};
use serde::{Deserialize, Serialize};


fn default_heuristic_scale() -> f64 {
    1.0
}

/// Literal description of a graph, as written in code or loaded from JSON
///
/// ```json
/// {
///   "heuristic_scale": 0.015,
///   "nodes": ["Chandigarh", "Delhi"],
///   "coordinates": { "Chandigarh": { "x": 150, "y": 150 }, "Delhi": { "x": 400, "y": 150 } },
///   "edges": [{ "from": "Chandigarh", "to": "Delhi", "weight": 4 }]
/// }
/// ```
///
/// Nothing is validated here, see `Graph::from_spec`
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct GraphSpec {
    /// Converts coordinate units into weight units for the heuristic
    #[serde(default = "default_heuristic_scale")]
    pub heuristic_scale: f64,
    pub nodes: Vec<String>,
    #[serde(default)]
    pub coordinates: BTreeMap<String, Point>,
    #[serde(default)]
    pub edges: Vec<EdgeSpec>,
}

/// Undirected weighted edge
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct EdgeSpec {
    pub from: String,
    pub to: String,
    pub weight: f64,
}

impl Default for GraphSpec {
    fn default() -> Self {
        Self {
            heuristic_scale: default_heuristic_scale(),
            nodes: vec![],
            coordinates: BTreeMap::new(),
            edges: vec![],
        }
    }
}

impl GraphSpec {

    pub fn new() -> Self {
        Self::default()
    }

    /// Declare a node together with its coordinate
    pub fn node(mut self, label: &str, x: f64, y: f64) -> Self {
        self.nodes.push(label.to_string());
        self.coordinates.insert(label.to_string(), Point::new(x, y));
        self
    }

    pub fn edge(mut self, from: &str, to: &str, weight: f64) -> Self {
        self.edges.push(EdgeSpec {
            from: from.to_string(),
            to: to.to_string(),
            weight,
        });
        self
    }

    pub fn with_heuristic_scale(mut self, scale: f64) -> Self {
        self.heuristic_scale = scale;
        self
    }

    pub fn from_json_str(json: &str) -> Result<Self, LoadError> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn from_path<P: AsRef<Path>>(path: P) -> Result<Self, LoadError> {
        let contents = fs::read_to_string(path)?;
        Self::from_json_str(&contents)
    }
}


#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builder_collects_nodes_and_edges() {
        let spec = GraphSpec::new()
            .node("A", 0.0, 0.0)
            .node("B", 3.0, 4.0)
            .edge("A", "B", 5.0)
            .with_heuristic_scale(0.5);

        assert_eq!(spec.nodes, vec!["A", "B"]);
        assert_eq!(spec.coordinates["B"], Point::new(3.0, 4.0));
        assert_eq!(spec.edges.len(), 1);
        assert_eq!(spec.heuristic_scale, 0.5);
    }

    #[test]
    fn test_json_defaults() {
        let spec = GraphSpec::from_json_str(r#"{ "nodes": ["A"] }"#).unwrap();

        assert_eq!(spec.heuristic_scale, 1.0);
        assert!(spec.coordinates.is_empty());
        assert!(spec.edges.is_empty());
    }

    #[test]
    fn test_json_full() {
        let json = r#"{
            "heuristic_scale": 0.25,
            "nodes": ["A", "B"],
            "coordinates": { "A": { "x": 0, "y": 0 }, "B": { "x": 1.5, "y": 2 } },
            "edges": [{ "from": "A", "to": "B", "weight": 7 }]
        }"#;
        let spec = GraphSpec::from_json_str(json).unwrap();

        let expected = GraphSpec::new()
            .node("A", 0.0, 0.0)
            .node("B", 1.5, 2.0)
            .edge("A", "B", 7.0)
            .with_heuristic_scale(0.25);
        assert_eq!(spec, expected);
    }

    #[test]
    fn test_malformed_json() {
        let result = GraphSpec::from_json_str(r#"{ "nodes": "A" }"#);
        assert!(matches!(result, Err(LoadError::Json(_))));
    }

    #[test]
    fn test_missing_file() {
        let result = GraphSpec::from_path("/definitely/not/here.json");
        assert!(matches!(result, Err(LoadError::Io(_))));
    }
}
