//! Contiguous cluster membership.
//!
//! Vertices are assigned to clusters in index order: the first `s_0`
//! vertices belong to cluster 0, the next `s_1` to cluster 1, and so on.
//! The mapping is stored as prefix sums so that any cluster's vertex
//! range is available in O(1) and any vertex's cluster in O(log m).

use std::ops::Range;

/// A partition of `0..N` into contiguous clusters.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClusterPartition {
    sizes: Vec<usize>,
    /// `offsets[c]` is the first vertex of cluster `c`; `offsets[m] == N`
    offsets: Vec<usize>,
}

impl ClusterPartition {
    /// Build a partition from cluster sizes.
    ///
    /// Returns `None` if the total number of vertices overflows `usize`.
    /// Empty clusters are allowed.
    pub fn from_sizes(sizes: &[usize]) -> Option<Self> {
        let mut offsets = Vec::with_capacity(sizes.len() + 1);
        let mut acc = 0_usize;
        offsets.push(acc);
        for &s in sizes {
            acc = acc.checked_add(s)?;
            offsets.push(acc);
        }
        Some(ClusterPartition {
            sizes: sizes.to_vec(),
            offsets,
        })
    }

    pub fn num_clusters(&self) -> usize {
        self.sizes.len()
    }

    /// Total number of vertices `N`
    pub fn num_vertices(&self) -> usize {
        self.offsets[self.sizes.len()]
    }

    pub fn sizes(&self) -> &[usize] {
        &self.sizes
    }

    pub fn size(&self, cluster: usize) -> usize {
        self.sizes[cluster]
    }

    /// First vertex index of `cluster`
    pub fn offset(&self, cluster: usize) -> usize {
        self.offsets[cluster]
    }

    /// Vertex range `[offset, offset + size)` of `cluster`
    pub fn range(&self, cluster: usize) -> Range<usize> {
        self.offsets[cluster]..self.offsets[cluster + 1]
    }

    /// Cluster containing `vertex`, or `None` if out of range.
    pub fn cluster_of(&self, vertex: usize) -> Option<usize> {
        if vertex >= self.num_vertices() {
            return None;
        }
        // first offset strictly greater than the vertex, minus one
        Some(self.offsets.partition_point(|&o| o <= vertex) - 1)
    }

    /// Cluster label for every vertex, `labels[v] == cluster_of(v)`
    pub fn labels(&self) -> Vec<usize> {
        let mut labels = Vec::with_capacity(self.num_vertices());
        for (c, &s) in self.sizes.iter().enumerate() {
            labels.extend(std::iter::repeat(c).take(s));
        }
        labels
    }
}
