// imports
use crate::error::{Error, Result};

use std::collections::HashMap;
use ndarray::{Array2, Axis};
use ndarray_stats::QuantileExt;


/// Off-diagonal statistics of a distance matrix.
#[derive(Debug, Clone, PartialEq)]
pub struct MatrixSummary {
    pub size: usize,
    pub min: f32,
    pub max: f32,
    pub mean: f32,
}

/// Nearest-neighbour queries over a finished distance matrix.
pub struct Neighbours {
    matrix: Array2<f32>,
    labels: Vec<String>,
    l2i: HashMap<String, usize>,
}

impl Neighbours {

    pub fn new(matrix: Array2<f32>, labels: Vec<String>) -> Result<Neighbours> {

        let (rows, cols) = matrix.dim();
        if rows != cols {
            return Err(Error::Shape(format!("distance matrix must be square, got {} x {}", rows, cols)))
        }
        if labels.len() != rows {
            return Err(Error::Shape(format!("{} labels for a {} x {} matrix", labels.len(), rows, cols)))
        }

        let mut l2i: HashMap<String, usize> = HashMap::new();
        for (i, label) in labels.iter().enumerate() {
            l2i.entry(label.to_owned()).or_insert(i);
        }

        Ok(Self {
            matrix: matrix,
            labels: labels,
            l2i: l2i
        })
    }

    pub fn len(&self) -> usize {
        self.labels.len()
    }

    pub fn is_empty(&self) -> bool {
        self.labels.is_empty()
    }

    pub fn matrix(&self) -> &Array2<f32> {
        &self.matrix
    }

    pub fn labels(&self) -> &[String] {
        &self.labels
    }

    /// Position of the first sequence carrying `label`.
    pub fn index_of(&self, label: &str) -> Option<usize> {
        self.l2i.get(label).copied()
    }

    /// The `k` sequences closest to sequence `index`, itself excluded, in
    /// ascending distance. Equal distances keep index order.
    pub fn find_k_nearest(&self, index: usize, k: usize) -> Result<Vec<(String, f32)>> {

        let n = self.len();
        if index >= n {
            return Err(Error::IndexOutOfRange { index: index, len: n })
        }

        let mut indexed_scores: Vec<(usize, f32)> = self.matrix
        .index_axis(Axis(0), index)
        .iter()
        .copied()
        .enumerate()
        .filter(|(j, _)| *j != index)
        .collect();

        // stable sort, ties stay in index order
        indexed_scores.sort_by(|(_i, s), (_j, t)| s.total_cmp(t));
        indexed_scores.truncate(k);

        Ok(indexed_scores
        .into_iter()
        .map(|(j, score)| (self.labels[j].to_owned(), score))
        .collect())
    }

    /// Min, max and mean over the off-diagonal cells, `None` below two sequences.
    pub fn summary(&self) -> Option<MatrixSummary> {

        let n = self.len();
        if n < 2 {
            return None
        }

        let off_diagonal: Vec<f32> = self.matrix
        .indexed_iter()
        .filter(|((i, j), _)| i != j)
        .map(|(_, v)| *v)
        .collect();
        let cells = ndarray::Array1::from(off_diagonal);

        let min = *cells.min().ok()?;
        let max = *cells.max().ok()?;
        let mean = cells.mean()?;
        Some(MatrixSummary { size: n, min: min, max: max, mean: mean })
    }

}
