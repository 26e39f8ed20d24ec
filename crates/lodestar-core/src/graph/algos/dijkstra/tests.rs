use super::*;
use crate::error::LodestarError;
use crate::graph::algos::bellman_ford;

fn sample_undirected() -> Graph<&'static str> {
    Graph::from_edges(
        false,
        [
            ("A", "B", 1.0),
            ("A", "C", 4.0),
            ("B", "C", 2.0),
            ("B", "D", 5.0),
            ("C", "D", 1.0),
        ],
    )
    .unwrap()
}

/// Test the reference example: A-B(1), A-C(4), B-C(2), B-D(5), C-D(1)
#[test]
fn test_dijkstra_reference_distances() {
    let graph = sample_undirected();
    let result = dijkstra(&graph, &"A").unwrap();

    assert_eq!(result.distance(&"A").unwrap(), 0.0);
    assert_eq!(result.distance(&"B").unwrap(), 1.0);
    assert_eq!(result.distance(&"C").unwrap(), 3.0);
    assert_eq!(result.distance(&"D").unwrap(), 4.0);
    assert_eq!(result.source(), &"A");
}

#[test]
fn test_dijkstra_path_reconstruction() {
    let graph = sample_undirected();
    let result = dijkstra(&graph, &"A").unwrap();

    assert_eq!(
        result.path_to(&"D").unwrap(),
        Some(vec!["A", "B", "C", "D"])
    );
    assert_eq!(result.path_to(&"A").unwrap(), Some(vec!["A"]));
    assert_eq!(result.predecessor(&"C").unwrap(), Some(&"B"));
    assert_eq!(result.predecessor(&"A").unwrap(), None);
}

#[test]
fn test_dijkstra_unreachable_nodes_stay_infinite() {
    let mut builder = crate::graph::GraphBuilder::directed();
    builder.add_edge("A", "B", 2.0).unwrap();
    builder.add_edge("C", "A", 1.0).unwrap();
    builder.add_node("island");
    let graph = builder.build();

    let result = dijkstra(&graph, &"A").unwrap();
    assert_eq!(result.distance(&"B").unwrap(), 2.0);
    assert!(result.distance(&"C").unwrap().is_infinite());
    assert!(!result.is_reachable(&"island").unwrap());
    assert_eq!(result.path_to(&"C").unwrap(), None);

    let reachable: Vec<_> = result.reachable().map(|(n, _)| *n).collect();
    assert_eq!(reachable, vec!["A", "B"]);
}

#[test]
fn test_dijkstra_unknown_source() {
    let graph = sample_undirected();
    let err = dijkstra(&graph, &"Z").unwrap_err();
    assert!(matches!(err, LodestarError::UnknownNode { .. }));
}

#[test]
fn test_dijkstra_unknown_lookup_on_result() {
    let graph = sample_undirected();
    let result = dijkstra(&graph, &"A").unwrap();
    assert!(result.distance(&"nope").is_err());
}

#[test]
fn test_dijkstra_rejects_negative_weight() {
    let graph = Graph::from_edges(true, [("A", "B", 1.0), ("B", "C", -1.0)]).unwrap();
    let err = dijkstra(&graph, &"A").unwrap_err();
    assert!(matches!(
        err,
        LodestarError::NegativeWeight { ref from, ref to, weight }
            if from == "B" && to == "C" && weight == -1.0
    ));
}

#[test]
fn test_dijkstra_rejects_unreachable_negative_weight() {
    // The negative edge is never relaxed from A, but the precondition is global
    let graph = Graph::from_edges(true, [("A", "B", 1.0), ("X", "Y", -5.0)]).unwrap();
    assert!(dijkstra(&graph, &"A").is_err());
}

#[test]
fn test_dijkstra_zero_weight_edges() {
    let graph =
        Graph::from_edges(true, [("A", "B", 0.0), ("B", "C", 0.0), ("A", "C", 1.0)]).unwrap();
    let result = dijkstra(&graph, &"A").unwrap();
    assert_eq!(result.distance(&"C").unwrap(), 0.0);
    assert_eq!(result.path_to(&"C").unwrap(), Some(vec!["A", "B", "C"]));
}

#[test]
fn test_dijkstra_parallel_edges_use_lightest() {
    let graph = Graph::from_edges(true, [("A", "B", 5.0), ("A", "B", 2.0)]).unwrap();
    let result = dijkstra(&graph, &"A").unwrap();
    assert_eq!(result.distance(&"B").unwrap(), 2.0);
}

#[test]
fn test_dijkstra_stale_entries_do_not_regress_distances() {
    // B is first pushed at 10 through the direct edge, then improved to 3
    let graph = Graph::from_edges(
        true,
        [
            ("A", "B", 10.0),
            ("A", "C", 1.0),
            ("C", "B", 2.0),
            ("B", "D", 1.0),
        ],
    )
    .unwrap();
    let result = dijkstra(&graph, &"A").unwrap();
    assert_eq!(result.distance(&"B").unwrap(), 3.0);
    assert_eq!(result.distance(&"D").unwrap(), 4.0);
    assert_eq!(result.path_to(&"D").unwrap(), Some(vec!["A", "C", "B", "D"]));
}

#[test]
fn test_dijkstra_agrees_with_bellman_ford() {
    let graph = Graph::from_edges(
        true,
        [
            (0u32, 1u32, 7.0),
            (0, 2, 9.0),
            (0, 5, 14.0),
            (1, 2, 10.0),
            (1, 3, 15.0),
            (2, 3, 11.0),
            (2, 5, 2.0),
            (3, 4, 6.0),
            (5, 4, 9.0),
            (6, 0, 1.0),
        ],
    )
    .unwrap();

    for source in graph.nodes() {
        let fast = dijkstra(&graph, source).unwrap();
        let slow = bellman_ford(&graph, source).unwrap();
        assert_eq!(fast.to_map(), slow.to_map(), "source {}", source);
    }
}

#[test]
fn test_dijkstra_concurrent_queries_share_graph() {
    let graph = sample_undirected();
    let sources = ["A", "B", "C", "D"];

    let results: Vec<_> = std::thread::scope(|scope| {
        let handles: Vec<_> = sources
            .iter()
            .map(|s| {
                let graph = &graph;
                scope.spawn(move || dijkstra(graph, s).unwrap())
            })
            .collect();
        handles.into_iter().map(|h| h.join().unwrap()).collect()
    });

    for (source, result) in sources.iter().zip(&results) {
        assert_eq!(result.distance(source).unwrap(), 0.0);
    }
    assert_eq!(results[3].distance(&"A").unwrap(), 4.0);
}

#[test]
fn test_source_push_is_counted() {
    let mut state = DijkstraState::new(3, 0);
    assert_eq!(state.metrics.queue_pushes(), 1);
    assert_eq!(state.metrics.relaxations(), 0);

    assert_eq!(state.pop_settled(), Some((0.0, 0)));
    assert_eq!(state.pop_settled(), None);
    assert_eq!(state.metrics.stale_rate(), 0.0);
}
