use crate::membership::ClusterPartition;
use crate::traits::AdjacencyStats;
use nalgebra::{DMatrix, Scalar};
use nalgebra_sparse::{CsrMatrix, SparseEntry};
use num_traits::Zero;

impl<T> AdjacencyStats for CsrMatrix<T>
where
    T: Scalar + Zero + Copy,
{
    type Scalar = T;

    fn is_symmetric(&self) -> bool {
        if self.nrows() != self.ncols() {
            return false;
        }

        self.triplet_iter()
            .filter(|(_, _, v)| !v.is_zero())
            .all(|(i, j, v)| match self.get_entry(j, i) {
                Some(SparseEntry::NonZero(w)) => w == v,
                _ => false,
            })
    }

    fn count_self_loops(&self) -> usize {
        self.triplet_iter()
            .filter(|&(i, j, v)| i == j && !v.is_zero())
            .count()
    }

    fn count_nonzeros(&self) -> usize {
        self.values().iter().filter(|v| !v.is_zero()).count()
    }

    fn block_edge_counts(&self, partition: &ClusterPartition) -> anyhow::Result<DMatrix<f64>> {
        let nn = partition.num_vertices();
        if self.nrows() != nn || self.ncols() != nn {
            anyhow::bail!(
                "adjacency matrix is {} x {}, but the partition covers {} vertices",
                self.nrows(),
                self.ncols(),
                nn
            );
        }

        let labels = partition.labels();
        let kk = partition.num_clusters();
        let mut counts = DMatrix::<f64>::zeros(kk, kk);

        for (i, j, v) in self.triplet_iter() {
            if !v.is_zero() {
                counts[(labels[i], labels[j])] += 1.0;
            }
        }
        Ok(counts)
    }

    fn block_densities(
        &self,
        partition: &ClusterPartition,
        self_loops: bool,
    ) -> anyhow::Result<DMatrix<f64>> {
        let counts = self.block_edge_counts(partition)?;

        Ok(DMatrix::from_fn(counts.nrows(), counts.ncols(), |a, b| {
            let sa = partition.size(a) as f64;
            let sb = partition.size(b) as f64;
            let possible = if a == b && !self_loops {
                sa * (sa - 1.0)
            } else {
                sa * sb
            };
            if possible > 0.0 {
                counts[(a, b)] / possible
            } else {
                0.0
            }
        }))
    }
}
