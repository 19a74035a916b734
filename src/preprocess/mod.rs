mod normalizer;

#[cfg(test)]
mod tests;

pub use normalizer::{normalize_all, normalize_tweet, TweetNormalizer};

/// Field separator between tweet id, timestamp and body in raw dumps
pub const FIELD_SEPARATOR: char = '|';
