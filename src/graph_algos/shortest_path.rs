use crate::graph::Graph;

/// Construct the shortest path from the goal node back to the start node
/// Returns the ordered path as a vector of labels from start to goal
/// came_from: predecessor index per node, None for the start node and unvisited nodes
/// goal_index: index of the goal node in the graph
pub(crate) fn shortest_path(graph: &Graph, came_from: &[Option<usize>], goal_index: usize) -> Vec<String> {

    let mut path = vec![graph.label(goal_index).to_string()];
    let mut current_index = goal_index;

    // Trace back from goal to start
    while let Some(parent_index) = came_from[current_index] {
        path.push(graph.label(parent_index).to_string());
        current_index = parent_index;
    }

    // The path is in reverse order, so reverse it
    path.reverse();
    path
}
