mod error;
mod kmeans;
mod medoid;
mod similarity;
mod types;


pub use error::ClusterError;
pub use kmeans::{kmeans, kmeans_from_centroids, kmeans_seeded};
pub use medoid::compute_medoid;
pub use similarity::{jaccard_distance, jaccard_similarity};
pub use types::{Cluster, ClusterResult, KMeansConfig};
