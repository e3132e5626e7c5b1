use crate::error::{check_probability, SbmError};
use crate::layout::BlockLayout;
use crate::options::SbmOptions;
use crate::sampler::sample_block;

use log::{debug, info};
use matrix_util::ClusterPartition;
use nalgebra::DMatrix;
use nalgebra_sparse::{CooMatrix, CsrMatrix};
use rand::Rng;

/// Generate an undirected graph from the stochastic block model
///
/// * `cluster_sizes` - number of vertices in each cluster; vertices are
///   assigned to clusters in index order
/// * `probability_matrix` - `m x m` matrix where `Q[i][j]` is the
///   probability of each edge between clusters `i` and `j`; only the
///   upper triangle (`i <= j`) is read
/// * `rng` - random source
///
/// Returns the `N x N` CSR adjacency matrix, `N = sum(cluster_sizes)`,
/// with both `(u, v)` and `(v, u)` stored as `1.0` for every edge and an
/// empty diagonal.
pub fn sbm_adjmat<R>(
    cluster_sizes: &[usize],
    probability_matrix: &DMatrix<f64>,
    rng: &mut R,
) -> Result<CsrMatrix<f32>, SbmError>
where
    R: Rng + ?Sized,
{
    sbm_adjmat_with_options(
        cluster_sizes,
        probability_matrix,
        &SbmOptions::default(),
        rng,
    )
}

/// Generate a graph from the stochastic block model, see [`SbmOptions`]
/// for directed graphs and self-loops
pub fn sbm_adjmat_with_options<R>(
    cluster_sizes: &[usize],
    probability_matrix: &DMatrix<f64>,
    options: &SbmOptions,
    rng: &mut R,
) -> Result<CsrMatrix<f32>, SbmError>
where
    R: Rng + ?Sized,
{
    let partition = validate_inputs(cluster_sizes, probability_matrix)?;
    let adj = sample_adjacency(&partition, probability_matrix, options, rng)?;

    info!(
        "sampled SBM graph: {} vertices, {} clusters, {} stored entries",
        adj.nrows(),
        partition.num_clusters(),
        adj.nnz()
    );
    Ok(adj)
}

/// Generate an undirected graph with `k` clusters of `n / k` vertices each
///
/// * `n` - number of vertices
/// * `k` - number of clusters, must divide `n`
/// * `probability_matrix` - `k x k` edge probabilities
/// * `rng` - random source
pub fn sbm_adjmat_equal_clusters<R>(
    n: usize,
    k: usize,
    probability_matrix: &DMatrix<f64>,
    rng: &mut R,
) -> Result<CsrMatrix<f32>, SbmError>
where
    R: Rng + ?Sized,
{
    sbm_adjmat_equal_clusters_with_options(n, k, probability_matrix, &SbmOptions::default(), rng)
}

/// [`sbm_adjmat_equal_clusters`] with explicit [`SbmOptions`]
pub fn sbm_adjmat_equal_clusters_with_options<R>(
    n: usize,
    k: usize,
    probability_matrix: &DMatrix<f64>,
    options: &SbmOptions,
    rng: &mut R,
) -> Result<CsrMatrix<f32>, SbmError>
where
    R: Rng + ?Sized,
{
    let cluster_sizes = equal_cluster_sizes(n, k)?;
    sbm_adjmat_with_options(&cluster_sizes, probability_matrix, options, rng)
}

/// Generate an undirected graph from the symmetric stochastic block model
///
/// `k` clusters of `n / k` vertices; each edge inside a cluster is kept
/// with probability `p` and each edge between clusters with probability `q`.
pub fn ssbm_adjmat<R>(
    n: usize,
    k: usize,
    p: f64,
    q: f64,
    rng: &mut R,
) -> Result<CsrMatrix<f32>, SbmError>
where
    R: Rng + ?Sized,
{
    ssbm_adjmat_with_options(n, k, p, q, &SbmOptions::default(), rng)
}

/// [`ssbm_adjmat`] with explicit [`SbmOptions`]
pub fn ssbm_adjmat_with_options<R>(
    n: usize,
    k: usize,
    p: f64,
    q: f64,
    options: &SbmOptions,
    rng: &mut R,
) -> Result<CsrMatrix<f32>, SbmError>
where
    R: Rng + ?Sized,
{
    let probability_matrix = symmetric_probability_matrix(k, p, q)?;
    sbm_adjmat_equal_clusters_with_options(n, k, &probability_matrix, options, rng)
}

/// `k` copies of `n / k`
pub fn equal_cluster_sizes(n: usize, k: usize) -> Result<Vec<usize>, SbmError> {
    if k == 0 {
        return Err(SbmError::InvalidSize(
            "number of clusters must be positive".into(),
        ));
    }
    if n % k != 0 {
        return Err(SbmError::IndivisiblePartition { n, k });
    }
    Ok(vec![n / k; k])
}

/// `k x k` matrix with `p` on the diagonal and `q` everywhere else
pub fn symmetric_probability_matrix(k: usize, p: f64, q: f64) -> Result<DMatrix<f64>, SbmError> {
    check_probability(|| "p".into(), p)?;
    check_probability(|| "q".into(), q)?;
    Ok(DMatrix::from_fn(k, k, |i, j| if i == j { p } else { q }))
}

/// Build a probability matrix from nested rows, e.g. `[[0.9, 0.1], [0.1, 0.9]]`
///
/// Fails with [`SbmError::ShapeMismatch`] unless every row has one entry
/// per row. Probabilities are checked by the generators.
pub fn probability_matrix_from_rows(rows: &[Vec<f64>]) -> Result<DMatrix<f64>, SbmError> {
    let mm = rows.len();
    if let Some((i, row)) = rows.iter().enumerate().find(|(_, row)| row.len() != mm) {
        return Err(SbmError::ShapeMismatch {
            expected: format!("{mm} entries in every row"),
            actual: format!("{} entries in row {i}", row.len()),
        });
    }
    Ok(DMatrix::from_fn(mm, mm, |i, j| rows[i][j]))
}

/// Check that the probability matrix matches the clusters and holds
/// probabilities only
pub(crate) fn validate_inputs(
    cluster_sizes: &[usize],
    probability_matrix: &DMatrix<f64>,
) -> Result<ClusterPartition, SbmError> {
    let mm = cluster_sizes.len();

    if probability_matrix.nrows() != mm || probability_matrix.ncols() != mm {
        return Err(SbmError::ShapeMismatch {
            expected: format!("{mm}x{mm}"),
            actual: format!(
                "{}x{}",
                probability_matrix.nrows(),
                probability_matrix.ncols()
            ),
        });
    }

    for i in 0..mm {
        for j in 0..mm {
            check_probability(
                || format!("probability_matrix[{i}][{j}]"),
                probability_matrix[(i, j)],
            )?;
        }
    }

    ClusterPartition::from_sizes(cluster_sizes).ok_or_else(|| {
        SbmError::InvalidSize(format!(
            "total number of vertices in {mm} clusters exceeds {}",
            usize::MAX
        ))
    })
}

/// Sample every cluster block into one adjacency matrix. Inputs must
/// already be validated.
pub(crate) fn sample_adjacency<R>(
    partition: &ClusterPartition,
    probability_matrix: &DMatrix<f64>,
    options: &SbmOptions,
    rng: &mut R,
) -> Result<CsrMatrix<f32>, SbmError>
where
    R: Rng + ?Sized,
{
    let nn = partition.num_vertices();
    let mm = partition.num_clusters();
    let mut coo = CooMatrix::<f32>::new(nn, nn);

    for c1 in 0..mm {
        // undirected graphs read the upper triangle only
        let first = if options.directed { 0 } else { c1 };

        for c2 in first..mm {
            let layout = BlockLayout::new(
                partition.size(c1),
                partition.size(c2),
                c1 == c2,
                options.self_loops,
                options.directed,
            );
            let (base1, base2) = (partition.offset(c1), partition.offset(c2));

            let nkept = sample_block(&layout, probability_matrix[(c1, c2)], rng, |u, v| {
                let (u, v) = (base1 + u, base2 + v);
                coo.push(u, v, 1.0);
                if !options.directed && u != v {
                    coo.push(v, u, 1.0);
                }
            })?;

            debug!(
                "block ({}, {}): kept {} of {} pairs",
                c1,
                c2,
                nkept,
                layout.num_pairs()
            );
        }
    }

    Ok(CsrMatrix::from(&coo))
}
