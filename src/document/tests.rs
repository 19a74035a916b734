use super::*;

#[test]
fn test_document_keeps_token_order() {
    let doc = Document::new("flu shot flu season");
    assert_eq!(doc.tokens(), &["flu", "shot", "flu", "season"]);
    assert_eq!(doc.text(), "flu shot flu season");
}

#[test]
fn test_document_token_set_dedups() {
    let doc = Document::new("flu shot flu season");
    assert_eq!(doc.token_set().len(), 3);
    assert!(doc.token_set().contains("season"));
}

#[test]
fn test_document_empty() {
    assert!(Document::new("").is_empty());
    assert!(Document::new("   \t ").is_empty());
    assert!(!Document::new("a").is_empty());
}

#[test]
fn test_corpus_from_texts() {
    let corpus = Corpus::from_texts(["a b c", "x y z"]);
    assert_eq!(corpus.len(), 2);
    assert_eq!(corpus[1].text(), "x y z");
    assert!(corpus.get(2).is_none());
}

#[test]
fn test_corpus_digest_is_stable() {
    let a = Corpus::from_texts(["a b c", "x y z"]);
    let b = Corpus::from_texts(["a b c", "x y z"]);
    let c = Corpus::from_texts(["x y z", "a b c"]);

    assert_eq!(a.digest(), b.digest());
    assert_ne!(a.digest(), c.digest());
    assert_eq!(a.digest().len(), 64);
}

#[test]
fn test_corpus_collects_documents() {
    let corpus: Corpus = vec![String::from("a b"), String::from("")]
        .into_iter()
        .map(Document::from)
        .collect();

    assert_eq!(corpus.len(), 2);
    assert_eq!(corpus.documents(), Corpus::from_texts(["a b", ""]).documents());
}
