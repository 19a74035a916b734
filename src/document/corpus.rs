use super::Document;
use sha2::{Digest, Sha256};

/// Ordered collection of documents to be clustered
///
/// Order does not affect correctness, but it decides which document wins ties
/// during assignment and medoid selection.
#[derive(Debug, Clone, Default)]
pub struct Corpus {
    documents: Vec<Document>,
}

impl Corpus {
    pub fn new(documents: Vec<Document>) -> Self {
        Self { documents }
    }

    /// Build a corpus from normalized texts
    pub fn from_texts<I, S>(texts: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self::new(texts.into_iter().map(Document::new).collect())
    }

    pub fn documents(&self) -> &[Document] {
        &self.documents
    }

    pub fn get(&self, index: usize) -> Option<&Document> {
        self.documents.get(index)
    }

    pub fn len(&self) -> usize {
        self.documents.len()
    }

    pub fn is_empty(&self) -> bool {
        self.documents.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Document> {
        self.documents.iter()
    }

    /// SHA-256 over the newline-joined texts, hex encoded
    pub fn digest(&self) -> String {
        let mut hasher = Sha256::new();
        for doc in &self.documents {
            hasher.update(doc.text().as_bytes());
            hasher.update(b"\n");
        }
        hex::encode(hasher.finalize())
    }
}

impl std::ops::Index<usize> for Corpus {
    type Output = Document;

    fn index(&self, index: usize) -> &Document {
        &self.documents[index]
    }
}

impl FromIterator<Document> for Corpus {
    fn from_iter<T: IntoIterator<Item = Document>>(iter: T) -> Self {
        Self {
            documents: iter.into_iter().collect(),
        }
    }
}
