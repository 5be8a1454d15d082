use rand::prelude::*;

/// Generates a random edge list with `edges` edges over `vertices` vertices
/// using the thread-local generator.
///
/// See [`random_edge_list_with_rng`] for the distribution.
pub fn random_edge_list(vertices: usize, edges: usize, max_weight: u64) -> Vec<(usize, usize, u64)> {
    let mut rng = rand::thread_rng();
    random_edge_list_with_rng(vertices, edges, max_weight, &mut rng)
}

/// Generates a random edge list with a caller-supplied generator.
///
/// Endpoints are drawn uniformly from the vertex range; self-loops are
/// avoided by re-drawing the target. Weights are uniform in `1..=max_weight`.
/// Parallel edges may occur, which the relaxation algorithms tolerate.
pub fn random_edge_list_with_rng<R: Rng>(
    vertices: usize,
    edges: usize,
    max_weight: u64,
    rng: &mut R,
) -> Vec<(usize, usize, u64)> {
    assert!(vertices > 1, "need at least two vertices to avoid self-loops");
    assert!(max_weight > 0, "max_weight must be positive");

    let mut edge_list = Vec::with_capacity(edges);
    for _ in 0..edges {
        let u = rng.gen_range(0..vertices);
        let mut v = rng.gen_range(0..vertices);
        while v == u {
            v = rng.gen_range(0..vertices);
        }
        let w = rng.gen_range(1..=max_weight);
        edge_list.push((u, v, w));
    }

    edge_list
}
