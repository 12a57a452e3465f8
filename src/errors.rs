use thiserror::Error;


/// Errors raised by graph construction and route queries
#[derive(Error, Debug, Clone, PartialEq)]
pub enum GraphError {
    #[error("unknown node: {0}")]
    UnknownNode(String), // label not present in the graph

    #[error("invalid graph specification: {0}")]
    InvalidGraphSpec(#[from] SpecViolation),
}

/// The specific invariant a graph specification broke
#[derive(Error, Debug, Clone, PartialEq)]
pub enum SpecViolation {
    #[error("node {0} is declared more than once")]
    DuplicateNode(String),

    #[error("node {0} has no coordinate")]
    MissingCoordinate(String),

    #[error("coordinate given for undeclared node {0}")]
    UnknownCoordinate(String),

    #[error("edge {from} - {to} references undeclared node {missing}")]
    DanglingEdge { from: String, to: String, missing: String },

    #[error("edge connects node {0} to itself")]
    SelfLoop(String),

    #[error("edge {from} - {to} has negative weight {weight}")]
    NegativeWeight { from: String, to: String, weight: f64 },

    #[error("edge {from} - {to} has non-finite weight")]
    NonFiniteWeight { from: String, to: String },

    #[error("edge {from} - {to} is listed with weights {first} and {second}")]
    ConflictingEdge { from: String, to: String, first: f64, second: f64 },

    #[error("node {0} has a non-finite coordinate")]
    NonFiniteCoordinate(String),

    #[error("heuristic scale must be finite and non-negative, got {0}")]
    InvalidHeuristicScale(f64),

    #[error("total edge weight overflows, route costs cannot be represented")]
    WeightOverflow,
}

/// Errors raised while reading a graph specification from disk
#[derive(Error, Debug)]
pub enum LoadError {
    #[error("failed to read graph file: {0}")]
    Io(#[from] std::io::Error),

    #[error("malformed graph file: {0}")]
    Json(#[from] serde_json::Error),

    #[error(transparent)]
    Graph(#[from] GraphError),
}
