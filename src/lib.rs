//! Dissimilarity between sequences of itemsets (e.g. sessions of click events).
//!
//! - [`set_distance`]: share of unmatched items between two itemsets
//! - [`sequence_distance`]: edit distance over whole itemsets, with
//!   [`set_distance`] as the substitution cost, normalized by the longer length
//! - [`pairwise_distance_matrix`]: the symmetric matrix over a corpus, with
//!   progress and cancellation hooks and a rayon-parallel variant
//!
//! ```rust
//! use seqdist::{pairwise_distance_matrix, sequence_distance, set_distance};
//!
//! assert_eq!(set_distance(&["a", "b"], &["a", "c"]), 0.5);
//!
//! let s = vec![vec!["home", "search"], vec!["product"]];
//! let t = vec![vec!["home"], vec!["product"]];
//! assert!(sequence_distance(&s, &t) < 0.5);
//!
//! let matrix = pairwise_distance_matrix(&[s, t]);
//! assert_eq!(matrix[[0, 1]], matrix[[1, 0]]);
//! ```

mod config;
mod corpus;
mod error;
mod matrix;
mod neighbours;
mod pipeline;
mod progress;
mod sequence_distance;
mod set_distance;

pub use config::{Config, JsonTypes};
pub use corpus::Corpus;
pub use error::{Error, Result};
pub use matrix::{pairwise_distance_matrix, pairwise_distance_matrix_with, par_pairwise_distance_matrix, par_pairwise_distance_matrix_with};
pub use neighbours::{MatrixSummary, Neighbours};
pub use pipeline::{Pipeline, Report};
pub use progress::{Cancel, CancelToken, LogProgress, NeverCancel, NoProgress, Progress};
pub use sequence_distance::{raw_sequence_distance, sequence_distance};
pub use set_distance::set_distance;
