use super::similarity::jaccard_distance;
use crate::document::Corpus;

/// Pick the member minimizing the summed distance to every member of the cluster.
///
/// `members` are corpus indices. The first candidate reaching the minimum wins.
/// Returns `None` for an empty cluster.
pub fn compute_medoid(corpus: &Corpus, members: &[usize]) -> Option<usize> {
    let mut best: Option<(usize, f64)> = None;

    for &candidate in members {
        let total: f64 = members
            .iter()
            .map(|&other| jaccard_distance(&corpus[candidate], &corpus[other]))
            .sum();

        match best {
            Some((_, best_total)) if total >= best_total => {}
            _ => best = Some((candidate, total)),
        }
    }

    best.map(|(idx, _)| idx)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_cluster_has_no_medoid() {
        let corpus = Corpus::from_texts(["a b"]);
        assert_eq!(compute_medoid(&corpus, &[]), None);
    }

    #[test]
    fn test_single_member_is_its_own_medoid() {
        let corpus = Corpus::from_texts(["a b", "c d"]);
        assert_eq!(compute_medoid(&corpus, &[1]), Some(1));
    }

    #[test]
    fn test_picks_most_central_member() {
        let corpus = Corpus::from_texts(["a", "a b", "a b c"]);
        // totals: 0 + 0.5 + 2/3, 0.5 + 0 + 1/3, 2/3 + 1/3 + 0
        assert_eq!(compute_medoid(&corpus, &[0, 1, 2]), Some(1));
    }

    #[test]
    fn test_tie_goes_to_first_candidate() {
        let corpus = Corpus::from_texts(["a b c", "a b d"]);
        assert_eq!(compute_medoid(&corpus, &[0, 1]), Some(0));
        assert_eq!(compute_medoid(&corpus, &[1, 0]), Some(1));
    }
}
