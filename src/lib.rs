//! Cheapest routes through small, static, weighted undirected graphs.
//!
//! A [`Graph`] is built once from a [`GraphSpec`], either written in code or
//! loaded from JSON, and is read-only afterwards. Routes are found with A*,
//! guided by the straight-line distance between node coordinates.
//!
//! ```
//! use flightpath::{find_path, graph::reference::air_route_graph};
//!
//! let graph = air_route_graph().unwrap();
//! let route = find_path(&graph, "Hindon", "Amritsar").unwrap().into_route().unwrap();
//!
//! assert_eq!(route.to_string(), "Hindon -> Chandigarh -> Delhi -> Amritsar");
//! assert_eq!(route.cost, 14.0);
//! ```

mod collections;
pub mod errors;
pub mod geometry;
pub mod graph;
pub mod graph_algos;

pub use errors::{GraphError, LoadError, SpecViolation};
pub use geometry::Point;
pub use graph::{EdgeSpec, Graph, GraphSpec};
pub use graph_algos::{Route, SearchResult};
pub use graph_algos::a_star::{find_path, AStar};
pub use graph_algos::dijkstra::dijkstra;
