use contour::{adjacency::AdjacencyMatrix, bridges::BridgeFinder, distance, metrics};

// Cells as a user would type them into the editor grid: anything nonzero is an edge and the
// diagonal is ignored.
const CELLS: [[i64; 6]; 6] = [
    [0, 1, 1, 0, 0, 0],
    [1, 1, 1, 0, 0, 0],
    [1, 1, 0, 1, 0, 0],
    [0, 0, 1, 0, 1, 9],
    [0, 0, 0, 1, 0, 1],
    [0, 0, 0, 9, 1, 0],
];

fn report(graph: &AdjacencyMatrix, finder: &mut BridgeFinder) {
    let distances = distance::analyze(graph);

    println!(
        "Edge count: {}, adjacency matrix: {}",
        graph.edge_count(),
        graph.as_matrix().map(u8::from)
    );
    println!("Distance matrix: {}", distances.distances());
    println!("{}\n", metrics::analyze_with(finder, graph));
}

fn main() {
    // Set RUST_LOG=debug to see the library's analysis logs.
    env_logger::init();

    let rows: Vec<Vec<i64>> = CELLS.iter().map(|row| row.to_vec()).collect();
    let mut graph = AdjacencyMatrix::coerce(&rows).expect("editor cells are symmetric");

    // One finder is enough for a single thread, its buffers are reset on every search.
    let mut finder = BridgeFinder::new();

    println!("\nTwo triangles joined by the edge 3-4...");
    report(&graph, &mut finder);

    // Close a cycle around the joining edge, it stops being a bridge.
    println!("Connecting vertices 1 and 5...");
    graph.insert(0, 4).expect("vertices are in range");
    report(&graph, &mut finder);

    // Cut the graph in two, radius and diameter become undefined and are reported as 0.
    println!("Disconnecting 3-4 and 1-5...");
    graph.remove(2, 3);
    graph.remove(0, 4);
    report(&graph, &mut finder);

    // Analyse the three states at once on a pool of workers.
    let states = vec![
        AdjacencyMatrix::coerce(&rows).expect("editor cells are symmetric"),
        AdjacencyMatrix::from_edges(6, [(0, 1), (1, 2), (2, 3), (3, 4), (4, 5), (5, 0)])
            .expect("vertices are in range"),
        graph,
    ];
    for (i, m) in metrics::analyze_batch(states, 2).iter().enumerate() {
        println!("Batch result {}: diameter {}, bridges {}", i, m.diameter(), m.bridges().len());
    }
}
