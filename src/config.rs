use crate::clusterer::KMeansConfig;
use clap::Parser;
use std::path::PathBuf;

pub const DEFAULT_SEED: u64 = 42;

/// Cluster tweets by word overlap (Jaccard distance, k-medoids)
#[derive(Debug, Clone, Parser)]
#[command(name = "tweetcluster", version, about)]
pub struct Cli {
    /// Raw tweet file (`id|timestamp|text` per line) or a directory of `.txt` dumps
    pub input: PathBuf,

    /// Number of clusters; prompted for on stdin when omitted
    #[arg(short = 'k', long = "clusters")]
    pub clusters: Option<usize>,

    /// Seed for the initial centroid sample
    #[arg(long, default_value_t = DEFAULT_SEED)]
    pub seed: u64,

    /// Stop after this many rounds even if centroids still move
    #[arg(long)]
    pub max_iters: Option<usize>,

    /// Run the assignment step on all cores
    #[arg(long)]
    pub parallel: bool,

    /// Also write the normalized tweets here, one per line
    #[arg(long)]
    pub cleaned_output: Option<PathBuf>,

    /// Print the full JSON report instead of the summary
    #[arg(long)]
    pub json: bool,
}

impl Cli {
    /// Engine configuration for the chosen `k`
    pub fn cluster_config(&self, k: usize) -> KMeansConfig {
        let config = KMeansConfig::new(k).parallel(self.parallel);
        match self.max_iters {
            Some(max) => config.max_iters(max),
            None => config,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let cli = Cli::try_parse_from(["tweetcluster", "tweets.txt"]).unwrap();

        assert_eq!(cli.input, PathBuf::from("tweets.txt"));
        assert_eq!(cli.clusters, None);
        assert_eq!(cli.seed, DEFAULT_SEED);
        assert!(!cli.parallel && !cli.json);
        assert_eq!(cli.cluster_config(3), KMeansConfig::new(3));
    }

    #[test]
    fn test_all_flags() {
        let cli = Cli::try_parse_from([
            "tweetcluster",
            "dumps/",
            "-k",
            "5",
            "--seed",
            "7",
            "--max-iters",
            "50",
            "--parallel",
            "--cleaned-output",
            "clean.txt",
            "--json",
        ])
        .unwrap();

        assert_eq!(cli.clusters, Some(5));
        assert_eq!(cli.seed, 7);
        assert_eq!(cli.cleaned_output, Some(PathBuf::from("clean.txt")));
        assert!(cli.json);
        assert_eq!(
            cli.cluster_config(5),
            KMeansConfig::new(5).max_iters(50).parallel(true)
        );
    }

    #[test]
    fn test_missing_input_rejected() {
        assert!(Cli::try_parse_from(["tweetcluster"]).is_err());
    }
}
