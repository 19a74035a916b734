use serde::Serialize;

/// One partition cell. Indices refer to positions in the clustered corpus.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Cluster {
    pub id: usize,
    /// Corpus index of the document acting as this cluster's centroid
    pub medoid: usize,
    /// Corpus indices of the members, in corpus order
    pub members: Vec<usize>,
}

impl Cluster {
    pub fn len(&self) -> usize {
        self.members.len()
    }

    pub fn is_empty(&self) -> bool {
        self.members.is_empty()
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct ClusterResult {
    /// Exactly `k` clusters, indexed `0..k`
    pub clusters: Vec<Cluster>,
    /// Sum over documents of the squared distance to their assigned centroid
    pub sse: f64,
    pub iterations: usize,
    /// False when the iteration cap was hit before the centroid set settled
    pub converged: bool,
}

impl ClusterResult {
    /// Member count per cluster, in cluster order
    pub fn sizes(&self) -> Vec<usize> {
        self.clusters.iter().map(Cluster::len).collect()
    }

    /// Cluster id for each corpus index
    pub fn assignments(&self) -> Vec<usize> {
        let n = self.clusters.iter().map(Cluster::len).sum();
        let mut out = vec![0usize; n];
        for cluster in &self.clusters {
            for &idx in &cluster.members {
                out[idx] = cluster.id;
            }
        }
        out
    }
}

/// Engine parameters
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KMeansConfig {
    pub k: usize,
    /// `None` keeps iterating until the centroid set stops changing
    pub max_iters: Option<usize>,
    /// Run the assignment step on the rayon pool
    pub parallel: bool,
}

impl KMeansConfig {
    pub fn new(k: usize) -> Self {
        Self {
            k,
            max_iters: None,
            parallel: false,
        }
    }

    /// Cap the number of assign/update rounds
    pub fn max_iters(mut self, max_iters: usize) -> Self {
        self.max_iters = Some(max_iters);
        self
    }

    pub fn parallel(mut self, parallel: bool) -> Self {
        self.parallel = parallel;
        self
    }
}
