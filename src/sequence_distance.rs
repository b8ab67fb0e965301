// imports
use crate::set_distance::set_distance;

use ndarray::Array2;


// deleting or inserting a whole itemset costs one step
const INDEL_COST: f32 = 1.0;


/// Normalized edit distance between two sequences of itemsets.
///
/// The alignment unit is a whole itemset: deletions and insertions cost `1`, a
/// substitution costs the [`set_distance`] of the two itemsets. The raw cost is
/// divided by the length of the longer sequence, so the result lies in `[0, 1]`.
///
/// Two empty sequences are at distance `0.0`.
pub fn sequence_distance<T: PartialEq>(a: &[Vec<T>], b: &[Vec<T>]) -> f32 {

    let max_length = a.len().max(b.len());
    if max_length == 0 {
        return 0.0
    }

    raw_sequence_distance(a, b) / max_length as f32
}

/// Un-normalized edit cost between two sequences of itemsets, `D[m][n]` of the
/// alignment grid.
pub fn raw_sequence_distance<T: PartialEq>(a: &[Vec<T>], b: &[Vec<T>]) -> f32 {

    let grid = alignment_grid(a, b);
    grid[[a.len(), b.len()]]
}

// builds the full (m+1) x (n+1) grid, every cell is computed
fn alignment_grid<T: PartialEq>(a: &[Vec<T>], b: &[Vec<T>]) -> Array2<f32> {

    let (m, n) = (a.len(), b.len());
    let mut grid: Array2<f32> = Array2::zeros((m + 1, n + 1));

    // first column and first row are pure deletions / insertions
    for i in 0..=m {
        grid[[i, 0]] = i as f32;
    }
    for j in 0..=n {
        grid[[0, j]] = j as f32;
    }

    for i in 1..=m {
        for j in 1..=n {
            let substitution = grid[[i - 1, j - 1]] + set_distance(&a[i - 1], &b[j - 1]);
            let deletion = grid[[i - 1, j]] + INDEL_COST;
            let insertion = grid[[i, j - 1]] + INDEL_COST;
            grid[[i, j]] = first_min([substitution, deletion, insertion]);
        }
    }

    grid
}

// smallest candidate, the earliest one wins on ties
fn first_min(candidates: [f32; 3]) -> f32 {
    let mut best = candidates[0];
    for candidate in &candidates[1..] {
        if *candidate < best {
            best = *candidate;
        }
    }
    best
}


#[cfg(test)]
mod tests {

    use super::{raw_sequence_distance, sequence_distance, alignment_grid};

    fn seq(itemsets: &[&[&str]]) -> Vec<Vec<String>> {
        itemsets
        .iter()
        .map(|itemset| itemset.iter().map(|x| x.to_string()).collect())
        .collect()
    }

    #[test]
    fn identical_single_step_test() {
        assert_eq!(sequence_distance(&seq(&[&["a"]]), &seq(&[&["a"]])), 0.0);
    }

    #[test]
    fn different_single_step_test() {
        // D[1][1] = min(0 + 1, 1 + 1, 1 + 1)
        assert_eq!(sequence_distance(&seq(&[&["a"]]), &seq(&[&["b"]])), 1.0);
    }

    #[test]
    fn pure_insertion_test() {
        assert_eq!(sequence_distance(&seq(&[]), &seq(&[&["a"]])), 1.0);
        assert_eq!(sequence_distance(&seq(&[&["a"], &["b"]]), &seq(&[])), 1.0);
    }

    #[test]
    fn both_empty_test() {
        assert_eq!(sequence_distance(&seq(&[]), &seq(&[])), 0.0);
        assert_eq!(raw_sequence_distance(&seq(&[]), &seq(&[])), 0.0);
    }

    #[test]
    fn partial_substitution_test() {
        // one substitution of cost 0.5 beats a deletion plus an insertion
        let a = seq(&[&["a", "b"], &["c"]]);
        let b = seq(&[&["a", "x"], &["c"]]);
        assert_eq!(raw_sequence_distance(&a, &b), 0.5);
        assert_eq!(sequence_distance(&a, &b), 0.25);
    }

    #[test]
    fn shifted_sequence_test() {
        // dropping the leading itemset then matching the rest costs 1
        let a = seq(&[&["x"], &["a"], &["b"]]);
        let b = seq(&[&["a"], &["b"]]);
        assert_eq!(raw_sequence_distance(&a, &b), 1.0);
        assert!((sequence_distance(&a, &b) - 1.0 / 3.0).abs() < 1e-6);
    }

    #[test]
    fn grid_borders_test() {
        let a = seq(&[&["a"], &["b"], &["c"]]);
        let b = seq(&[&["a"], &["c"]]);
        let grid = alignment_grid(&a, &b);
        assert_eq!(grid.dim(), (4, 3));
        for i in 0..4 {
            assert_eq!(grid[[i, 0]], i as f32);
        }
        for j in 0..3 {
            assert_eq!(grid[[0, j]], j as f32);
        }
        assert_eq!(grid[[3, 2]], 1.0);
    }

    #[test]
    fn symmetry_test() {
        let a = seq(&[&["a", "b"], &["c"], &["d", "e", "f"]]);
        let b = seq(&[&["b"], &["d", "f"]]);
        assert_eq!(sequence_distance(&a, &b), sequence_distance(&b, &a));
    }

}
