use proptest::prelude::*;
use seqdist::{pairwise_distance_matrix, sequence_distance, set_distance};

// a small alphabet so that random itemsets overlap often
fn itemset() -> impl Strategy<Value = Vec<String>> {
    prop::collection::vec(prop::sample::select(vec!["a", "b", "c", "d", "e"]), 0..5)
    .prop_map(|items| items.into_iter().map(String::from).collect())
}

fn sequence() -> impl Strategy<Value = Vec<Vec<String>>> {
    prop::collection::vec(itemset(), 0..6)
}

proptest! {

    #[test]
    fn set_distance_is_symmetric(a in itemset(), b in itemset()) {
        prop_assert_eq!(set_distance(&a, &b), set_distance(&b, &a));
    }

    #[test]
    fn set_distance_in_unit_range(a in itemset(), b in itemset()) {
        let d = set_distance(&a, &b);
        prop_assert!((0.0..=1.0).contains(&d));
    }

    #[test]
    fn set_distance_identity(a in itemset()) {
        prop_assert_eq!(set_distance(&a, &a), 0.0);
    }

    #[test]
    fn disjoint_sets_are_at_distance_one(
        a in prop::collection::vec(prop::sample::select(vec!["a", "b"]), 1..4),
        b in prop::collection::vec(prop::sample::select(vec!["x", "y"]), 1..4),
    ) {
        prop_assert_eq!(set_distance(&a, &b), 1.0);
    }

    #[test]
    fn sequence_distance_is_symmetric(s in sequence(), t in sequence()) {
        prop_assert_eq!(sequence_distance(&s, &t), sequence_distance(&t, &s));
    }

    #[test]
    fn sequence_distance_in_unit_range(s in sequence(), t in sequence()) {
        let d = sequence_distance(&s, &t);
        prop_assert!((0.0..=1.0).contains(&d));
    }

    #[test]
    fn sequence_distance_identity(s in sequence()) {
        prop_assert_eq!(sequence_distance(&s, &s), 0.0);
    }

    #[test]
    fn matrix_is_square_symmetric_with_zero_diagonal(corpus in prop::collection::vec(sequence(), 0..6)) {
        let n = corpus.len();
        let matrix = pairwise_distance_matrix(&corpus);
        prop_assert_eq!(matrix.dim(), (n, n));
        for i in 0..n {
            prop_assert_eq!(matrix[[i, i]], 0.0);
            for j in 0..n {
                prop_assert_eq!(matrix[[i, j]], matrix[[j, i]]);
                prop_assert_eq!(matrix[[i, j]], if i == j { 0.0 } else { sequence_distance(&corpus[i], &corpus[j]) });
            }
        }
    }

}
