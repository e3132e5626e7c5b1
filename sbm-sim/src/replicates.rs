use crate::error::SbmError;
use crate::generate::{sample_adjacency, validate_inputs};
use crate::options::SbmOptions;

use log::info;
use nalgebra::DMatrix;
use nalgebra_sparse::CsrMatrix;
use rand::rngs::StdRng;
use rand::SeedableRng;
use rayon::prelude::*;

/// Draw `num_replicates` independent graphs from the same model
///
/// * `cluster_sizes` - number of vertices in each cluster
/// * `probability_matrix` - `m x m` edge probabilities
/// * `options` - graph options shared by all replicates
/// * `num_replicates` - number of graphs
/// * `rseed` - replicate `r` is sampled with `StdRng::seed_from_u64(rseed + r)`
///
/// The inputs are validated once. Replicates are sampled in parallel and
/// returned in replicate order; the result does not depend on the number
/// of threads.
pub fn sbm_adjmat_replicates(
    cluster_sizes: &[usize],
    probability_matrix: &DMatrix<f64>,
    options: &SbmOptions,
    num_replicates: usize,
    rseed: u64,
) -> Result<Vec<CsrMatrix<f32>>, SbmError> {
    let partition = validate_inputs(cluster_sizes, probability_matrix)?;

    info!(
        "sampling {} SBM replicates over {} vertices",
        num_replicates,
        partition.num_vertices()
    );

    (0..num_replicates)
        .into_par_iter()
        .map(|r| {
            let mut rng = StdRng::seed_from_u64(rseed.wrapping_add(r as u64));
            sample_adjacency(&partition, probability_matrix, options, &mut rng)
        })
        .collect()
}
