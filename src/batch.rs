//! A module for analysing many graphs across worker threads.

use std::{
    panic,
    sync::{Arc, Mutex, PoisonError},
    thread,
};

use log::debug;

use crate::{
    adjacency::AdjacencyMatrix,
    bridges::BridgeFinder,
    metrics::{self, GraphMetrics, MAX_NUM_THREADS, MIN_NUM_THREADS},
};

/// The thread task: grabs the next unprocessed graph until none are left, returning each
/// result with its input position.
fn metrics_task(
    acounter: Arc<Mutex<usize>>,
    agraphs: Arc<Vec<AdjacencyMatrix>>,
) -> Vec<(usize, GraphMetrics)> {
    let graphs = &agraphs;

    // Each worker owns its bridge search buffers, they are never shared between threads.
    let mut finder = BridgeFinder::new();
    let mut results = Vec::new();

    loop {
        // The counter is a plain integer, a panicking worker can't leave it half-updated.
        let mut counter = acounter.lock().unwrap_or_else(PoisonError::into_inner);
        let index: usize = *counter;
        *counter += 1;
        drop(counter);

        match graphs.get(index) {
            Some(graph) => results.push((index, metrics::analyze_with(&mut finder, graph))),
            None => break,
        }
    }

    results
}

/// Sets up the shared job counter, spawns the workers and reassembles their results in input
/// order.
pub fn compute_metrics(graphs: Vec<AdjacencyMatrix>, mut num_threads: usize) -> Vec<GraphMetrics> {
    num_threads = num_threads.clamp(MIN_NUM_THREADS, MAX_NUM_THREADS);

    let num_graphs = graphs.len();
    debug!("batch analysis: {num_graphs} graph(s), {num_threads} thread(s)");

    let mut metrics: Vec<Option<GraphMetrics>> = vec![None; num_graphs];

    let mut handles = Vec::with_capacity(num_threads);
    let wrapped_graphs = Arc::new(graphs);
    let wrapped_counter = Arc::new(Mutex::new(0));

    for _ in 0..num_threads {
        let acounter = Arc::clone(&wrapped_counter);
        let agraphs = Arc::clone(&wrapped_graphs);
        let handle = thread::spawn(move || metrics_task(acounter, agraphs));
        handles.push(handle);
    }

    for h in handles {
        let results = match h.join() {
            Ok(results) => results,
            Err(payload) => panic::resume_unwind(payload),
        };

        for (index, m) in results {
            metrics[index] = Some(m);
        }
    }

    // Every index below `num_graphs` was handed out exactly once.
    metrics.into_iter().flatten().collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn more_threads_than_graphs() {
        let graphs = vec![graph!(3; [0, 1, 2]), graph!(3; [0, 1, 2, 0])];

        let metrics = compute_metrics(graphs, 8);

        assert_eq!(metrics.len(), 2);
        assert_eq!(metrics[0].bridges().len(), 2);
        assert!(metrics[1].bridges().is_empty());
    }

    #[test]
    fn single_worker_takes_every_graph() {
        let counter = Arc::new(Mutex::new(0));
        let graphs = Arc::new(vec![AdjacencyMatrix::new(1), AdjacencyMatrix::new(2)]);

        let results = metrics_task(Arc::clone(&counter), graphs);

        assert_eq!(
            results.iter().map(|(i, _)| *i).collect::<Vec<_>>(),
            vec![0, 1]
        );
        // One extra increment to discover the work ran out.
        assert_eq!(*counter.lock().unwrap(), 3);
    }
}
