mod summary;


pub use summary::render_summary;

use crate::clusterer::{ClusterResult, KMeansConfig};
use crate::document::Corpus;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Record of one clustering run
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ClusterReport {
    pub run_id: Uuid,
    pub created_at: DateTime<Utc>,
    /// SHA-256 of the normalized corpus
    pub corpus_digest: String,
    pub documents: usize,
    pub k: usize,
    pub seed: u64,
    pub max_iters: Option<usize>,
    pub iterations: usize,
    pub converged: bool,
    pub sse: f64,
    pub clusters: Vec<ClusterSummary>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ClusterSummary {
    pub id: usize,
    pub size: usize,
    /// Text of the document acting as the cluster's centroid
    pub medoid: String,
}

impl ClusterReport {
    pub fn new(corpus: &Corpus, config: &KMeansConfig, seed: u64, result: &ClusterResult) -> Self {
        let clusters = result
            .clusters
            .iter()
            .map(|c| ClusterSummary {
                id: c.id,
                size: c.len(),
                medoid: corpus
                    .get(c.medoid)
                    .map(|d| d.text().to_string())
                    .unwrap_or_default(),
            })
            .collect();

        Self {
            run_id: Uuid::new_v4(),
            created_at: Utc::now(),
            corpus_digest: corpus.digest(),
            documents: corpus.len(),
            k: config.k,
            seed,
            max_iters: config.max_iters,
            iterations: result.iterations,
            converged: result.converged,
            sse: result.sse,
            clusters,
        }
    }

    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }
}
