//! Random graphs from the stochastic block model (SBM).
//!
//! Vertices are split into contiguous clusters and every candidate edge
//! `(u, v)` is kept independently with probability `Q[c(u), c(v)]`. The
//! output is a sparse `N x N` adjacency matrix in CSR form.
//!
//! Sampling never touches the `O(N^2)` candidate pairs one at a time.
//! Each cluster block is laid out as a virtual list of pairs
//! ([`layout::BlockLayout`]) and the sampler jumps from one kept pair to
//! the next with geometric skips, so a call costs `O(N + E)`.
//!
//! # Entry points
//!
//! * [`sbm_adjmat`]: arbitrary cluster sizes and probability matrix
//! * [`sbm_adjmat_equal_clusters`]: `k` clusters of size `n / k`
//! * [`ssbm_adjmat`]: symmetric SBM with `p` within and `q` between clusters
//! * [`sbm_adjmat_replicates`]: independent samples in parallel
//!
//! ```
//! use rand::SeedableRng;
//!
//! let mut rng = rand::rngs::StdRng::seed_from_u64(42);
//! let adj = sbm_sim::ssbm_adjmat(100, 4, 0.3, 0.01, &mut rng).unwrap();
//! assert_eq!(adj.nrows(), 100);
//! ```

#![deny(missing_docs)]

/// Error type for invalid generator inputs
pub mod error;

/// Directed/undirected and self-loop switches
pub mod options;

/// Virtual list of candidate vertex pairs within a cluster block
pub mod layout;

/// Geometric-skip Bernoulli sampling over a block
pub mod sampler;

/// Input validation and the public generator functions
pub mod generate;

/// Parallel replicate sampling with per-replicate seeds
pub mod replicates;

pub use error::SbmError;
pub use generate::{
    equal_cluster_sizes, probability_matrix_from_rows, sbm_adjmat,
    sbm_adjmat_equal_clusters, sbm_adjmat_equal_clusters_with_options, sbm_adjmat_with_options,
    ssbm_adjmat, ssbm_adjmat_with_options, symmetric_probability_matrix,
};
pub use options::SbmOptions;
pub use replicates::sbm_adjmat_replicates;
