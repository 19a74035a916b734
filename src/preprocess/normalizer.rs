use super::FIELD_SEPARATOR;
use regex::Regex;
use std::sync::OnceLock;

/// Strips tweet metadata and platform noise, leaving lowercase words
pub struct TweetNormalizer {
    mention: Regex,
    url: Regex,
    retweet: Regex,
}

impl TweetNormalizer {
    pub fn new() -> Self {
        Self {
            mention: Regex::new(r"@\w+").expect("mention pattern is valid"),
            url: Regex::new(r"http\S+").expect("url pattern is valid"),
            retweet: Regex::new(r"(?i)\brt\s*:\s*").expect("retweet pattern is valid"),
        }
    }

    /// Normalize one raw line of the form `id|timestamp|text`
    ///
    /// Lines without separators are treated as bare text.
    pub fn normalize(&self, raw: &str) -> String {
        let line = raw.trim_end_matches(['\r', '\n']);

        // Drop id and timestamp
        let body = line.splitn(3, FIELD_SEPARATOR).last().unwrap_or("");

        let body = self.mention.replace_all(body, "");
        let body = self.url.replace_all(&body, "");
        let body = body.replace('#', "");
        let body = self.retweet.replace_all(&body, "");

        body.to_lowercase()
    }
}

impl Default for TweetNormalizer {
    fn default() -> Self {
        Self::new()
    }
}

fn shared() -> &'static TweetNormalizer {
    static NORMALIZER: OnceLock<TweetNormalizer> = OnceLock::new();
    NORMALIZER.get_or_init(TweetNormalizer::new)
}

/// Normalize a single raw tweet line with a shared normalizer
pub fn normalize_tweet(raw: &str) -> String {
    shared().normalize(raw)
}

/// Normalize every line, keeping order and blank lines
pub fn normalize_all<I, S>(lines: I) -> Vec<String>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let normalizer = shared();
    lines
        .into_iter()
        .map(|line| normalizer.normalize(line.as_ref()))
        .collect()
}
