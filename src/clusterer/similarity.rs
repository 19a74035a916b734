use crate::document::Document;

/// Jaccard similarity `|A ∩ B| / |A ∪ B|` over the documents' token sets.
///
/// Two empty documents have an empty union and are treated as identical (1.0).
pub fn jaccard_similarity(a: &Document, b: &Document) -> f64 {
    let (sa, sb) = (a.token_set(), b.token_set());

    let intersection = sa.intersection(sb).count();
    let union = sa.len() + sb.len() - intersection;

    if union == 0 {
        return 1.0;
    }

    intersection as f64 / union as f64
}

/// Jaccard distance `1 - similarity`, bounded in `[0, 1]`.
///
/// Empty vs empty is 0 rather than a division by zero.
pub fn jaccard_distance(a: &Document, b: &Document) -> f64 {
    1.0 - jaccard_similarity(a, b)
}
