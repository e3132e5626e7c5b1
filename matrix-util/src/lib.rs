//! Sparse matrix helpers shared across the workspace.
//!
//! * [`membership::ClusterPartition`] maps contiguous vertex ranges to clusters
//! * [`traits::AdjacencyStats`] summarizes a sparse adjacency matrix block by block

pub mod membership;
pub mod sparse_stat;
pub mod traits;

pub use membership::ClusterPartition;
pub use traits::AdjacencyStats;
