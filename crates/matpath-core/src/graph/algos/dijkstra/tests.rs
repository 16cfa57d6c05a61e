use super::HeapEntry;
use crate::graph::{compute, FrontierPolicy, Graph};
use crate::matrix::{MatrixRow, MatrixTable};

fn graph(columns: &[&str], rows: &[(&str, &[&str])]) -> Graph {
    let table = MatrixTable::new(
        columns.iter().map(|c| c.to_string()).collect(),
        rows.iter()
            .map(|(node, cells)| {
                MatrixRow::new(*node, cells.iter().map(|c| c.to_string()).collect())
            })
            .collect(),
    )
    .unwrap();
    Graph::from_matrix(&table).unwrap()
}

/// Test HeapEntry comparison ordering
#[test]
fn heap_entry_orders_by_distance() {
    let cheap = HeapEntry {
        node: "A".to_string(),
        distance: 1.0,
    };
    let dear = HeapEntry {
        node: "B".to_string(),
        distance: 2.0,
    };
    let cheap_too = HeapEntry {
        node: "C".to_string(),
        distance: 1.0,
    };

    assert_eq!(cheap.cmp(&dear), std::cmp::Ordering::Less);
    assert_eq!(dear.cmp(&cheap), std::cmp::Ordering::Greater);
    assert_eq!(cheap.cmp(&cheap_too), std::cmp::Ordering::Equal);
    assert_eq!(cheap, cheap.clone());
    assert_ne!(cheap, dear);
}

#[test]
fn path_graph_distances_and_predecessors() {
    let g = graph(
        &["A", "B", "C"],
        &[
            ("A", &["0", "1", "-1"]),
            ("B", &["1", "0", "2"]),
            ("C", &["-1", "2", "0"]),
        ],
    );
    let paths = compute(&g, "A", FrontierPolicy::GlobalMinHeap).unwrap();

    assert_eq!(paths.distance("A"), Some(0.0));
    assert_eq!(paths.distance("B"), Some(1.0));
    assert_eq!(paths.distance("C"), Some(3.0));
    assert_eq!(paths.predecessor("B"), Some("A"));
    assert_eq!(paths.predecessor("C"), Some("B"));
    assert_eq!(paths.predecessor("A"), None);
}

#[test]
fn unreached_component_keeps_infinity() {
    let g = graph(
        &["A", "B", "C", "D"],
        &[
            ("A", &["0", "5", "-1", "-1"]),
            ("B", &["5", "0", "-1", "-1"]),
            ("C", &["-1", "-1", "0", "1"]),
            ("D", &["-1", "-1", "1", "0"]),
        ],
    );
    let paths = compute(&g, "A", FrontierPolicy::GlobalMinHeap).unwrap();

    assert_eq!(paths.distance("B"), Some(5.0));
    assert_eq!(paths.distance("C"), Some(f64::INFINITY));
    assert_eq!(paths.distance("D"), Some(f64::INFINITY));
    assert_eq!(paths.predecessor("C"), None);
    assert_eq!(paths.predecessor("D"), None);
}

#[test]
fn picks_the_cheaper_of_two_routes() {
    // A-B=5 direct, or A-C=1 then C-B=1.
    let g = graph(
        &["A", "B", "C"],
        &[
            ("A", &["0", "5", "1"]),
            ("B", &["5", "0", "1"]),
            ("C", &["1", "1", "0"]),
        ],
    );
    let paths = compute(&g, "A", FrontierPolicy::GlobalMinHeap).unwrap();

    assert_eq!(paths.distance("B"), Some(2.0));
    assert_eq!(paths.predecessor("B"), Some("C"));
}

#[test]
fn agrees_with_the_walk_where_the_walk_is_optimal() {
    let g = graph(
        &["A", "B", "C"],
        &[
            ("A", &["0", "1", "-1"]),
            ("B", &["1", "0", "2"]),
            ("C", &["-1", "2", "0"]),
        ],
    );

    let walk = compute(&g, "A", FrontierPolicy::LocalGreedy).unwrap();
    let dijkstra = compute(&g, "A", FrontierPolicy::GlobalMinHeap).unwrap();
    assert_eq!(walk, dijkstra);
}

#[test]
fn reaches_nodes_the_walk_abandons() {
    // Same topology as the walk's early-halt case: B is a dead end the walk
    // enters first and never leaves.
    let g = graph(
        &["A", "B", "C", "D"],
        &[
            ("A", &["0", "1", "5", "-1"]),
            ("B", &["1", "0", "-1", "-1"]),
            ("C", &["5", "-1", "0", "1"]),
            ("D", &["-1", "-1", "1", "0"]),
        ],
    );

    let walk = compute(&g, "A", FrontierPolicy::LocalGreedy).unwrap();
    assert_eq!(walk.distance("D"), Some(f64::INFINITY));

    let dijkstra = compute(&g, "A", FrontierPolicy::GlobalMinHeap).unwrap();
    assert_eq!(dijkstra.distance("D"), Some(6.0));
    assert_eq!(dijkstra.predecessor("D"), Some("C"));
}
