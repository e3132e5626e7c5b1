use crate::membership::ClusterPartition;
use nalgebra::DMatrix;

/// Summary statistics of a square sparse adjacency matrix
pub trait AdjacencyStats {
    type Scalar;

    /// `A(i,j) == A(j,i)` for every stored non-zero entry
    fn is_symmetric(&self) -> bool;

    /// Number of non-zero diagonal entries
    fn count_self_loops(&self) -> usize;

    /// Number of non-zero entries (explicitly stored zeros are ignored)
    fn count_nonzeros(&self) -> usize;

    /// `m x m` matrix where `(a, b)` counts the non-zero entries with row
    /// in cluster `a` and column in cluster `b`
    fn block_edge_counts(&self, partition: &ClusterPartition) -> anyhow::Result<DMatrix<f64>>;

    /// Block edge counts divided by the number of entries each block can
    /// hold. Diagonal blocks exclude the diagonal itself unless
    /// `self_loops` is set. Empty blocks get density 0.
    ///
    /// For an undirected adjacency matrix both `(u,v)` and `(v,u)` are
    /// stored, so the density of every block estimates the per-pair edge
    /// probability in either mode.
    fn block_densities(
        &self,
        partition: &ClusterPartition,
        self_loops: bool,
    ) -> anyhow::Result<DMatrix<f64>>;
}
