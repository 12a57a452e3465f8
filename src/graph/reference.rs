//! Built-in air-route network
//!
//! Seven airports with approximate map positions and route lengths in km.
//! Positions are map units, so the heuristic is scaled down until no route
//! is shorter than the scaled straight-line distance between its airports.

use super::{Graph, GraphSpec};
use crate::errors::GraphError;


/// km per map unit used by the heuristic
/// The tightest route is Delhi - Shimla: 5 km over 320 map units
pub const HEURISTIC_SCALE: f64 = 0.015;

/// Specification of the built-in network
pub fn air_routes() -> GraphSpec {
    GraphSpec::new()
        .node("Chandigarh", 150.0, 150.0)
        .node("Delhi", 400.0, 150.0)
        .node("Ambala", 275.0, 275.0)
        .node("Shimla", 400.0, 470.0)
        .node("Dehradun", 275.0, 400.0)
        .node("Hindon", 350.0, 350.0)
        .node("Amritsar", 450.0, 400.0)
        .edge("Chandigarh", "Delhi", 4.0)
        .edge("Chandigarh", "Ambala", 3.0)
        .edge("Delhi", "Shimla", 5.0)
        .edge("Delhi", "Ambala", 12.0)
        .edge("Delhi", "Amritsar", 5.0)
        .edge("Ambala", "Dehradun", 7.0)
        .edge("Shimla", "Amritsar", 16.0)
        .edge("Dehradun", "Hindon", 2.0)
        .edge("Dehradun", "Shimla", 10.0)
        .edge("Hindon", "Chandigarh", 5.0)
        .with_heuristic_scale(HEURISTIC_SCALE)
}

/// The built-in network, validated
pub fn air_route_graph() -> Result<Graph, GraphError> {
    Graph::from_spec(air_routes())
}
