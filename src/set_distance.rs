// imports
use tracing::trace;


/// Sorensen-style dissimilarity between two itemsets.
///
/// Counts every element of `a` that does not occur anywhere in `b`, and every
/// element of `b` that does not occur anywhere in `a`, and divides the sum by
/// `|a| + |b|`. Duplicated labels are counted once per occurrence.
///
/// Two empty itemsets have no difference, their distance is `0.0`.
pub fn set_distance<T: PartialEq>(a: &[T], b: &[T]) -> f32 {

    let total = a.len() + b.len();
    if total == 0 {
        return 0.0
    }

    let diff_a = unmatched(a, b);
    let diff_b = unmatched(b, a);
    trace!(diff_a, diff_b, total, "set distance");

    (diff_a + diff_b) as f32 / total as f32
}

// number of occurrences in `from` with no equal element in `within`
fn unmatched<T: PartialEq>(from: &[T], within: &[T]) -> usize {
    from.iter().filter(|item| !within.contains(item)).count()
}
