use super::*;

#[test]
fn test_strips_id_and_timestamp() {
    let raw = "585978391360221184|Thu Apr 09 01:31:50 +0000 2015|Flu season is here";
    assert_eq!(normalize_tweet(raw), "flu season is here");
}

#[test]
fn test_keeps_separators_inside_body() {
    let raw = "1|Thu Apr 09 2015|before | after";
    assert_eq!(normalize_tweet(raw), "before | after");
}

#[test]
fn test_bare_text_without_separators() {
    assert_eq!(normalize_tweet("Just Text"), "just text");
}

#[test]
fn test_removes_mentions() {
    let raw = "1|t|Thanks @usnews_health for the tip";
    assert_eq!(normalize_tweet(raw), "thanks  for the tip");
}

#[test]
fn test_removes_urls() {
    let raw = "1|t|Read more http://bit.ly/1abc and https://t.co/xyz";
    assert_eq!(normalize_tweet(raw), "read more  and ");
}

#[test]
fn test_hashtags_become_words() {
    let raw = "1|t|#Ebola outbreak #WHO";
    assert_eq!(normalize_tweet(raw), "ebola outbreak who");
}

#[test]
fn test_removes_retweet_marker() {
    // The mention goes first, leaving "RT : ..." for the retweet pattern
    let raw = "1|t|RT @cnnhealth: New guidelines";
    assert_eq!(normalize_tweet(raw), "new guidelines");
}

#[test]
fn test_retweet_marker_needs_word_boundary() {
    let raw = "1|t|art: a review";
    assert_eq!(normalize_tweet(raw), "art: a review");
}

#[test]
fn test_strips_line_terminators() {
    assert_eq!(normalize_tweet("1|t|Hello\r\n"), "hello");
}

#[test]
fn test_normalize_all_keeps_blank_lines() {
    let lines = ["1|t|One", "", "3|t|Three"];
    assert_eq!(normalize_all(lines), vec!["one", "", "three"]);
}

#[test]
fn test_owned_normalizer_matches_shared() {
    let normalizer = TweetNormalizer::default();
    let raw = "9|t|RT @a: #Vaccines work http://x.co";
    assert_eq!(normalizer.normalize(raw), normalize_tweet(raw));
}
