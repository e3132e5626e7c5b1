//! Candidate vertex pairs of one cluster block, as a virtual list.
//!
//! A block `(c1, c2)` holds every pair `(u, v)` with `u` in cluster `c1`
//! and `v` in cluster `c2` that can carry an edge. The pairs are numbered
//! `0..num_pairs()` and [`BlockLayout::pair_at`] maps a number back to
//! local vertex indices in O(1), so a sampler can pick pair numbers and
//! never enumerate the rest.
//!
//! | block                    | pairs         | order                                  |
//! |--------------------------|---------------|----------------------------------------|
//! | `c1 != c2`               | `r * c`       | row-major                              |
//! | same, directed, loops    | `s * s`       | row-major                              |
//! | same, directed           | `s * (s - 1)` | row-major, diagonal skipped            |
//! | same, undirected, loops  | `s (s + 1)/2` | `(0,0) (1,0) (1,1) (2,0) ...`          |
//! | same, undirected         | `s (s - 1)/2` | `(1,0) (2,0) (2,1) (3,0) ...`          |

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum PairShape {
    Rectangle,
    RectangleNoDiagonal,
    LowerTriangle,
    StrictLowerTriangle,
}

/// Numbering of the candidate pairs in a `rows x cols` cluster block
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BlockLayout {
    rows: u64,
    cols: u64,
    shape: PairShape,
}

impl BlockLayout {
    /// * `rows` - size of the first cluster
    /// * `cols` - size of the second cluster
    /// * `same_cluster` - whether the block is on the diagonal (`rows == cols`)
    /// * `self_loops` - whether `(u, u)` is a candidate
    /// * `directed` - whether `(u, v)` and `(v, u)` are separate candidates
    pub fn new(
        rows: usize,
        cols: usize,
        same_cluster: bool,
        self_loops: bool,
        directed: bool,
    ) -> Self {
        debug_assert!(!same_cluster || rows == cols);

        let shape = if !same_cluster || (directed && self_loops) {
            PairShape::Rectangle
        } else if directed {
            PairShape::RectangleNoDiagonal
        } else if self_loops {
            PairShape::LowerTriangle
        } else {
            PairShape::StrictLowerTriangle
        };

        BlockLayout {
            rows: rows as u64,
            cols: cols as u64,
            shape,
        }
    }

    /// Number of candidate pairs in this block
    pub fn num_pairs(&self) -> u64 {
        let (r, c) = (self.rows, self.cols);
        match self.shape {
            PairShape::Rectangle => r * c,
            PairShape::RectangleNoDiagonal => r * r.saturating_sub(1),
            PairShape::LowerTriangle => r * (r + 1) / 2,
            PairShape::StrictLowerTriangle => r * r.saturating_sub(1) / 2,
        }
    }

    /// Local `(row, col)` indices of pair number `t < num_pairs()`
    pub fn pair_at(&self, t: u64) -> (usize, usize) {
        debug_assert!(t < self.num_pairs());

        let (u, v) = match self.shape {
            PairShape::Rectangle => (t / self.cols, t % self.cols),
            PairShape::RectangleNoDiagonal => {
                let width = self.rows - 1;
                let u = t / width;
                let v = t % width;
                (u, if v >= u { v + 1 } else { v })
            }
            PairShape::LowerTriangle => {
                let u = triangular_root(t);
                (u, t - triangle(u))
            }
            PairShape::StrictLowerTriangle => {
                let u = triangular_root(t) + 1;
                (u, t - triangle(u - 1))
            }
        };
        (u as usize, v as usize)
    }
}

/// `a (a + 1) / 2`
fn triangle(a: u64) -> u64 {
    a * (a + 1) / 2
}

/// Largest `a` with `triangle(a) <= t`
fn triangular_root(t: u64) -> u64 {
    let mut a = (((8.0 * t as f64 + 1.0).sqrt() - 1.0) / 2.0) as u64;
    // the float estimate can be off by one for large t
    while a > 0 && triangle(a) > t {
        a -= 1;
    }
    while triangle(a + 1) <= t {
        a += 1;
    }
    a
}

#[cfg(test)]
mod tests {
    use super::*;

    fn all_pairs(layout: &BlockLayout) -> Vec<(usize, usize)> {
        (0..layout.num_pairs()).map(|t| layout.pair_at(t)).collect()
    }

    #[test]
    fn test_different_clusters_any_mode() {
        let expected: Vec<(usize, usize)> = (0..5).flat_map(|x| (0..3).map(move |y| (x, y))).collect();

        for &self_loops in &[false, true] {
            for &directed in &[false, true] {
                let layout = BlockLayout::new(5, 3, false, self_loops, directed);
                assert_eq!(layout.num_pairs(), 15);
                assert_eq!(all_pairs(&layout), expected);
            }
        }
    }

    #[test]
    fn test_same_cluster_directed_with_loops() {
        let layout = BlockLayout::new(5, 5, true, true, true);
        let expected: Vec<(usize, usize)> = (0..5).flat_map(|x| (0..5).map(move |y| (x, y))).collect();
        assert_eq!(layout.num_pairs(), 25);
        assert_eq!(all_pairs(&layout), expected);
    }

    #[test]
    fn test_same_cluster_directed_no_loops() {
        let layout = BlockLayout::new(5, 5, true, false, true);
        let expected: Vec<(usize, usize)> = (0..5)
            .flat_map(|x| (0..5).map(move |y| (x, y)))
            .filter(|&(x, y)| x != y)
            .collect();
        assert_eq!(layout.num_pairs(), 20);
        assert_eq!(all_pairs(&layout), expected);
    }

    #[test]
    fn test_same_cluster_undirected_with_loops() {
        let layout = BlockLayout::new(5, 5, true, true, false);
        let expected: Vec<(usize, usize)> = (0..5).flat_map(|i| (0..=i).map(move |j| (i, j))).collect();
        assert_eq!(layout.num_pairs(), 15);
        assert_eq!(all_pairs(&layout), expected);
    }

    #[test]
    fn test_same_cluster_undirected_no_loops() {
        let layout = BlockLayout::new(5, 5, true, false, false);
        let expected: Vec<(usize, usize)> = (0..5).flat_map(|i| (0..i).map(move |j| (i, j))).collect();
        assert_eq!(layout.num_pairs(), 10);
        assert_eq!(all_pairs(&layout), expected);
    }

    #[test]
    fn test_degenerate_blocks() {
        assert_eq!(BlockLayout::new(0, 0, true, false, false).num_pairs(), 0);
        assert_eq!(BlockLayout::new(1, 1, true, false, false).num_pairs(), 0);
        assert_eq!(BlockLayout::new(1, 1, true, false, true).num_pairs(), 0);
        assert_eq!(BlockLayout::new(1, 1, true, true, false).num_pairs(), 1);
        assert_eq!(BlockLayout::new(0, 7, false, false, false).num_pairs(), 0);
    }

    #[test]
    fn test_triangular_root_large() {
        for a in [1_000_u64, 65_535, 3_037_000_000] {
            let t = triangle(a);
            assert_eq!(triangular_root(t), a);
            assert_eq!(triangular_root(t - 1), a - 1);
            assert_eq!(triangular_root(t + a), a);
        }
    }
}
