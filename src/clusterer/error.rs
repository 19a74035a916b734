use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum ClusterError {
    #[error("Corpus is empty")]
    EmptyCorpus,

    #[error("Invalid parameter: {0}")]
    InvalidParameter(String),
}
