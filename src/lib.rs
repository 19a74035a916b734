// Public API exports
pub mod clusterer;
pub mod config;
pub mod document;
pub mod loader;
pub mod preprocess;
pub mod report;

// Re-export main types for convenience
pub use document::{Corpus, Document};

pub use clusterer::{
    jaccard_distance, kmeans, kmeans_from_centroids, kmeans_seeded, Cluster, ClusterError,
    ClusterResult, KMeansConfig,
};

pub use preprocess::{normalize_tweet, TweetNormalizer};

pub use loader::{load_corpus, write_cleaned, LoadError, LoadStats};

pub use report::{render_summary, ClusterReport};

pub use config::Cli;
