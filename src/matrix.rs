//! Batch driver: the full pairwise distance matrix over a corpus of sequences.

// imports
use crate::error::{Error, Result};
use crate::progress::{Cancel, NeverCancel, NoProgress, Progress};
use crate::sequence_distance::sequence_distance;

use ndarray::Array2;
use rayon::prelude::*;
use std::time::Instant;
use tracing::{debug, info};


/// Pairwise [`sequence_distance`] between every two sequences of `corpus`.
///
/// The matrix is `N x N`, symmetric with a zero diagonal.
pub fn pairwise_distance_matrix<T: PartialEq>(corpus: &[Vec<Vec<T>>]) -> Array2<f32> {

    let n = corpus.len();
    let mut matrix: Array2<f32> = Array2::zeros((n, n));
    for i in 0..n {
        for j in 0..n {
            fill_cell(&mut matrix, corpus, i, j);
        }
    }
    matrix
}

/// Same as [`pairwise_distance_matrix`], sweeping the cells row by row while
/// reporting one progress tick per cell (`N * N` ticks) and polling `cancel`
/// before each cell.
///
/// Returns [`Error::Cancelled`] as soon as cancellation is observed, the
/// partially filled matrix is dropped.
pub fn pairwise_distance_matrix_with<T, P, C>(corpus: &[Vec<Vec<T>>], progress: &P, cancel: &C) -> Result<Array2<f32>>
where
    T: PartialEq,
    P: Progress + ?Sized,
    C: Cancel + ?Sized,
{
    let timer = Instant::now();
    let n = corpus.len();
    debug!("computing {} x {} distance matrix", n, n);

    progress.start(n * n);
    let mut matrix: Array2<f32> = Array2::zeros((n, n));
    for i in 0..n {
        for j in 0..n {
            if cancel.is_cancelled() {
                info!("distance matrix cancelled at cell ({}, {})", i, j);
                return Err(Error::Cancelled)
            }
            fill_cell(&mut matrix, corpus, i, j);
            progress.increment();
        }
    }

    debug!("finished distance matrix, took {} ms", timer.elapsed().as_millis());
    Ok(matrix)
}

// the mirror cell is reused only when non-zero, so pairs at distance 0 are
// computed twice
fn fill_cell<T: PartialEq>(matrix: &mut Array2<f32>, corpus: &[Vec<Vec<T>>], i: usize, j: usize) {

    matrix[[i, j]] = if i == j {
        0.0
    } else if matrix[[j, i]] != 0.0 {
        matrix[[j, i]]
    } else {
        sequence_distance(&corpus[i], &corpus[j])
    };
}


/// Parallel rendition of [`pairwise_distance_matrix_with`] on the current rayon
/// pool.
///
/// Every unordered pair is computed exactly once and mirrored, so `progress`
/// receives `N * (N - 1) / 2` ticks. `cancel` is polled before each pair, and
/// any worker observing it makes the whole call return [`Error::Cancelled`].
/// The values are identical to the serial driver's.
pub fn par_pairwise_distance_matrix_with<T, P, C>(corpus: &[Vec<Vec<T>>], progress: &P, cancel: &C) -> Result<Array2<f32>>
where
    T: PartialEq + Sync,
    P: Progress + ?Sized,
    C: Cancel + ?Sized,
{
    let timer = Instant::now();
    let n = corpus.len();
    let pairs: Vec<(usize, usize)> = (0..n)
    .flat_map(|i| ((i + 1)..n).map(move |j| (i, j)))
    .collect();
    debug!("computing {} x {} distance matrix, {} pairs on {} threads", n, n, pairs.len(), rayon::current_num_threads());

    progress.start(pairs.len());
    let distances = pairs.par_iter().map(|&(i, j)| {
        if cancel.is_cancelled() {
            return Err(Error::Cancelled)
        }
        let distance = sequence_distance(&corpus[i], &corpus[j]);
        progress.increment();
        Ok(distance)
    }).collect::<Result<Vec<f32>>>()?;

    let mut matrix: Array2<f32> = Array2::zeros((n, n));
    for (&(i, j), distance) in pairs.iter().zip(distances) {
        matrix[[i, j]] = distance;
        matrix[[j, i]] = distance;
    }

    debug!("finished distance matrix, took {} ms", timer.elapsed().as_millis());
    Ok(matrix)
}

/// [`par_pairwise_distance_matrix_with`] without hooks.
pub fn par_pairwise_distance_matrix<T: PartialEq + Sync>(corpus: &[Vec<Vec<T>>]) -> Result<Array2<f32>> {
    par_pairwise_distance_matrix_with(corpus, &NoProgress, &NeverCancel)
}
