use super::*;

fn with_nodes(directed: bool, weighted: bool, nodes: &[NodeId]) -> AdjacencyList {
    let mut graph = AdjacencyList::new(directed, weighted);
    for &node in nodes {
        graph.add_node(node).unwrap();
    }
    graph
}

#[test]
fn test_add_node_rejects_duplicates() {
    let mut graph = AdjacencyList::new(true, false);
    graph.add_node(1).unwrap();

    let err = graph.add_node(1).unwrap_err();
    assert!(matches!(err, GraphError::DuplicateNode { id: 1 }));
    assert_eq!(graph.node_count(), 1);
}

#[test]
fn test_add_edge_requires_both_endpoints() {
    let mut graph = with_nodes(true, false, &[1]);

    let err = graph.add_edge(1, 2, 0.0).unwrap_err();
    assert!(matches!(err, GraphError::NodeNotFound { id: 2 }));

    let err = graph.add_edge(5, 1, 0.0).unwrap_err();
    assert!(matches!(err, GraphError::NodeNotFound { id: 5 }));

    assert_eq!(graph.edge_count(), 0);
}

#[test]
fn test_unweighted_graph_rejects_weights() {
    let mut graph = with_nodes(true, false, &[1, 2]);

    let err = graph.add_edge(1, 2, 3.0).unwrap_err();
    assert!(matches!(err, GraphError::WeightNotAllowed { from: 1, to: 2, .. }));

    graph.add_edge(1, 2, 0.0).unwrap();
    assert!(graph.has_edge(1, 2));
}

#[test]
fn test_directed_edges_are_one_way() {
    let mut graph = with_nodes(true, true, &[1, 2]);
    graph.add_edge(1, 2, 2.5).unwrap();

    assert!(graph.has_edge(1, 2));
    assert!(!graph.has_edge(2, 1));
    assert_eq!(graph.edges(1).unwrap(), &[Edge::new(2, 2.5)]);
    assert!(graph.edges(2).unwrap().is_empty());
    assert_eq!(graph.edge_count(), 1);
}

#[test]
fn test_undirected_edges_store_reverse_entry() {
    let mut graph = with_nodes(false, true, &[1, 2, 3]);
    graph.add_edge(1, 2, 1.0).unwrap();
    graph.add_edge(2, 3, 4.0).unwrap();

    assert!(graph.has_edge(2, 1));
    assert_eq!(graph.neighbors(2).unwrap(), vec![1, 3]);
    assert_eq!(graph.entry_count(), 4);
    assert_eq!(graph.edge_count(), 2);
}

#[test]
fn test_undirected_self_loop_counts_once() {
    let mut graph = with_nodes(false, false, &[1]);
    graph.add_edge(1, 1, 0.0).unwrap();

    assert_eq!(graph.edges(1).unwrap().len(), 2);
    assert_eq!(graph.edge_count(), 1);
}

#[test]
fn test_parallel_edges_count_individually() {
    let mut graph = with_nodes(false, false, &[1, 2]);
    graph.add_edge(1, 2, 0.0).unwrap();
    graph.add_edge(1, 2, 0.0).unwrap();

    assert_eq!(graph.edge_count(), 2);
}

#[test]
fn test_neighbors_keep_insertion_order() {
    let mut graph = with_nodes(true, false, &[1, 2, 3, 4]);
    graph.add_edge(1, 4, 0.0).unwrap();
    graph.add_edge(1, 2, 0.0).unwrap();
    graph.add_edge(1, 3, 0.0).unwrap();

    assert_eq!(graph.neighbors(1).unwrap(), vec![4, 2, 3]);
}

#[test]
fn test_neighbors_of_missing_node() {
    let graph = with_nodes(true, false, &[1]);
    assert!(matches!(
        graph.neighbors(9),
        Err(GraphError::NodeNotFound { id: 9 })
    ));
    assert!(graph.edges(9).is_err());
    assert!(!graph.has_edge(9, 1));
}

#[test]
fn test_remove_node_drops_incoming_edges() {
    let mut graph = with_nodes(true, false, &[1, 2, 3]);
    graph.add_edge(1, 3, 0.0).unwrap();
    graph.add_edge(1, 3, 0.0).unwrap();
    graph.add_edge(2, 3, 0.0).unwrap();
    graph.add_edge(3, 1, 0.0).unwrap();

    graph.remove_node(3).unwrap();

    assert!(!graph.has_node(3));
    assert_eq!(graph.node_count(), 2);
    assert!(graph.edges(1).unwrap().is_empty());
    assert!(graph.edges(2).unwrap().is_empty());
    assert_eq!(graph.edge_count(), 0);
}

#[test]
fn test_remove_node_undirected_keeps_count_consistent() {
    let mut graph = with_nodes(false, false, &[1, 2, 3]);
    graph.add_edge(1, 2, 0.0).unwrap();
    graph.add_edge(2, 3, 0.0).unwrap();

    graph.remove_node(2).unwrap();

    assert_eq!(graph.edge_count(), 0);
    assert_eq!(graph.entry_count(), 0);
}

#[test]
fn test_remove_missing_node() {
    let mut graph = AdjacencyList::new(true, false);
    assert!(matches!(
        graph.remove_node(4),
        Err(GraphError::NodeNotFound { id: 4 })
    ));
}

#[test]
fn test_nodes_are_sorted() {
    let graph = with_nodes(true, false, &[5, -2, 3, 0]);
    assert_eq!(graph.nodes(), vec![-2, 0, 3, 5]);
}

#[test]
fn test_modes_are_reported() {
    let graph = AdjacencyList::new(false, true);
    assert!(!graph.is_directed());
    assert!(graph.is_weighted());
}

#[test]
fn test_usable_as_trait_object() {
    let mut graph: Box<dyn Graph> = Box::new(AdjacencyList::new(true, false));
    graph.add_node(1).unwrap();
    graph.add_node(2).unwrap();
    graph.add_edge(1, 2, 0.0).unwrap();
    assert_eq!(graph.edge_count(), 1);
}
