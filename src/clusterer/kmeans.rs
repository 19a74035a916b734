use crate::clusterer::{
    error::ClusterError,
    medoid::compute_medoid,
    similarity::jaccard_distance,
    types::{Cluster, ClusterResult, KMeansConfig},
};
use crate::document::{Corpus, Document};
use rand::{seq::index, Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use rayon::prelude::*;
use std::collections::HashSet;
use tracing::{debug, info, warn};

/// K-means over token sets: Jaccard distance, with medoids standing in for means.
///
/// The `k` initial centroids are drawn uniformly without replacement from `rng`.
pub fn kmeans<R: Rng + ?Sized>(
    corpus: &Corpus,
    config: &KMeansConfig,
    rng: &mut R,
) -> Result<ClusterResult, ClusterError> {
    validate(corpus, config)?;

    // 1. Pick random initial centers
    let initial = index::sample(rng, corpus.len(), config.k).into_vec();

    Ok(run(corpus, config, initial))
}

/// Same as [`kmeans`] with a `ChaCha8Rng` seeded from `seed`
pub fn kmeans_seeded(
    corpus: &Corpus,
    config: &KMeansConfig,
    seed: u64,
) -> Result<ClusterResult, ClusterError> {
    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    kmeans(corpus, config, &mut rng)
}

/// Run the engine from caller-chosen initial centroids (corpus indices)
pub fn kmeans_from_centroids(
    corpus: &Corpus,
    config: &KMeansConfig,
    initial: &[usize],
) -> Result<ClusterResult, ClusterError> {
    validate(corpus, config)?;

    if initial.len() != config.k {
        return Err(ClusterError::InvalidParameter(format!(
            "expected {} initial centroids, got {}",
            config.k,
            initial.len()
        )));
    }

    let mut seen = HashSet::with_capacity(initial.len());
    for &idx in initial {
        if idx >= corpus.len() {
            return Err(ClusterError::InvalidParameter(format!(
                "initial centroid {} out of range for corpus of {}",
                idx,
                corpus.len()
            )));
        }
        if !seen.insert(idx) {
            return Err(ClusterError::InvalidParameter(format!(
                "initial centroid {} given more than once",
                idx
            )));
        }
    }

    Ok(run(corpus, config, initial.to_vec()))
}

fn validate(corpus: &Corpus, config: &KMeansConfig) -> Result<(), ClusterError> {
    if corpus.is_empty() {
        return Err(ClusterError::EmptyCorpus);
    }

    if config.k < 1 || config.k > corpus.len() {
        return Err(ClusterError::InvalidParameter(format!(
            "k must be between 1 and {} (corpus size), got {}",
            corpus.len(),
            config.k
        )));
    }

    if config.max_iters == Some(0) {
        return Err(ClusterError::InvalidParameter(
            "max_iters must be at least 1".to_string(),
        ));
    }

    Ok(())
}

fn run(corpus: &Corpus, config: &KMeansConfig, mut centroids: Vec<usize>) -> ClusterResult {
    let k = config.k;
    let mut iterations = 0;

    loop {
        iterations += 1;

        // 2. Assign each document to its nearest centroid
        let nearest: Vec<(usize, f64)> = if config.parallel {
            corpus
                .documents()
                .par_iter()
                .map(|doc| nearest_centroid(corpus, &centroids, doc))
                .collect()
        } else {
            corpus
                .iter()
                .map(|doc| nearest_centroid(corpus, &centroids, doc))
                .collect()
        };

        let mut members: Vec<Vec<usize>> = vec![Vec::new(); k];
        let mut sse = 0.0;
        for (doc_idx, (cluster_idx, distance)) in nearest.into_iter().enumerate() {
            members[cluster_idx].push(doc_idx);
            sse += distance * distance;
        }

        // 3. Recompute medoids; empty clusters keep their previous centroid
        let new_centroids: Vec<usize> = members
            .iter()
            .zip(&centroids)
            .map(|(cluster, &previous)| compute_medoid(corpus, cluster).unwrap_or(previous))
            .collect();

        debug!(
            iteration = iterations,
            sse,
            empty_clusters = members.iter().filter(|m| m.is_empty()).count(),
            "assignment complete"
        );

        // 4. Stop once the centroid set is unchanged
        if same_centroid_set(corpus, &centroids, &new_centroids) {
            info!(iterations, sse, "converged");
            return build_result(members, new_centroids, sse, iterations, true);
        }

        if config.max_iters.is_some_and(|max| iterations >= max) {
            warn!(iterations, sse, "iteration cap reached before convergence");
            return build_result(members, new_centroids, sse, iterations, false);
        }

        centroids = new_centroids;
    }
}

/// Linear scan over centroids; the lowest index wins ties.
fn nearest_centroid(corpus: &Corpus, centroids: &[usize], doc: &Document) -> (usize, f64) {
    let mut best_idx = 0;
    let mut best_dist = f64::INFINITY;

    for (c, &centroid) in centroids.iter().enumerate() {
        let d = jaccard_distance(doc, &corpus[centroid]);
        if d < best_dist {
            best_dist = d;
            best_idx = c;
        }
    }

    (best_idx, best_dist)
}

/// Centroids are compared by document text, ignoring order and duplicates.
fn same_centroid_set(corpus: &Corpus, old: &[usize], new: &[usize]) -> bool {
    centroid_texts(corpus, old) == centroid_texts(corpus, new)
}

fn centroid_texts<'a>(corpus: &'a Corpus, ids: &[usize]) -> HashSet<&'a str> {
    ids.iter().map(|&i| corpus[i].text()).collect()
}

fn build_result(
    members: Vec<Vec<usize>>,
    centroids: Vec<usize>,
    sse: f64,
    iterations: usize,
    converged: bool,
) -> ClusterResult {
    let clusters = members
        .into_iter()
        .zip(centroids)
        .enumerate()
        .map(|(id, (members, medoid))| Cluster {
            id,
            medoid,
            members,
        })
        .collect();

    ClusterResult {
        clusters,
        sse,
        iterations,
        converged,
    }
}
