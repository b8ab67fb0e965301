// imports
use crate::config::{Config, JsonTypes};
use crate::corpus::Corpus;
use crate::error::Result;
use crate::matrix::{pairwise_distance_matrix_with, par_pairwise_distance_matrix_with};
use crate::neighbours::{MatrixSummary, Neighbours};
use crate::progress::{LogProgress, NeverCancel};

use ndarray::{Array2, Axis};
use rayon::ThreadPoolBuilder;
use serde::Serialize;
use std::io::{self, Write};
use std::time::Instant;
use tracing::info;


/// What the binary writes to stdout.
#[derive(Debug, Serialize)]
pub struct Report {
    pub labels: Vec<String>,
    pub matrix: Vec<Vec<f32>>,
}

impl Report {
    fn new(labels: &[String], matrix: &Array2<f32>) -> Self {
        Self {
            labels: labels.to_vec(),
            matrix: matrix.axis_iter(Axis(0)).map(|row| row.to_vec()).collect()
        }
    }
}

pub struct Pipeline {}

impl Pipeline {

    // runs the main procedure of 3 steps -
    // -> configuration of arguments
    // -> corpus loading
    // -> distance matrix and neighbour report

    pub fn run(args: &[String]) -> Result<()> {

        info!("building parameters...");
        let params = Config::new(args)?.get_params();
        info!("{}", params);

        let corpus = Corpus::read_file(&params.corpus_file)?;
        let matrix = Pipeline::compute(&corpus, &params)?;

        let neighbours = Neighbours::new(matrix, corpus.labels)?;
        if let Some(MatrixSummary { size, min, max, mean }) = neighbours.summary() {
            info!("{} sequences, off-diagonal distances min {:.4} max {:.4} mean {:.4}", size, min, max, mean);
        }

        if params.k_nearest > 0 {
            for (i, label) in neighbours.labels().iter().enumerate() {
                for (rank, (other, score)) in neighbours.find_k_nearest(i, params.k_nearest)?.iter().enumerate() {
                    info!("{} : {} ? {} = {:.4}", rank, label, other, score);
                }
            }
        }

        if params.print_matrix {
            let report = Report::new(neighbours.labels(), neighbours.matrix());
            let mut out = io::stdout().lock();
            serde_json::to_writer(&mut out, &report)?;
            writeln!(out)?;
        }

        Ok(())
    }

    /// Serial sweep on one thread, rayon pool of `num_threads` otherwise.
    pub fn compute(corpus: &Corpus, params: &JsonTypes) -> Result<Array2<f32>> {

        let timer = Instant::now();
        let progress = LogProgress::new(params.progress_step, params.progress_verbose);
        info!("starting distance matrix over {} sequences...", corpus.len());

        let matrix = if params.num_threads > 1 {
            let pool = ThreadPoolBuilder::new().num_threads(params.num_threads).build()?;
            pool.install(|| par_pairwise_distance_matrix_with(&corpus.sequences, &progress, &NeverCancel))?
        } else {
            pairwise_distance_matrix_with(&corpus.sequences, &progress, &NeverCancel)?
        };

        info!("finished distance matrix, took {} seconds ...", timer.elapsed().as_secs());
        Ok(matrix)
    }

}
