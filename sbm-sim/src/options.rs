/// Graph options for the stochastic block model.
///
/// * Undirected (default): one draw per unordered pair `{u, v}` using the
///   upper-triangular entry `Q[i][j]` with `i <= j`. The lower triangle of
///   `Q` is never read. Both `(u, v)` and `(v, u)` are stored.
/// * Directed: one draw per ordered pair `(u, v)` using `Q[i][j]`, so an
///   asymmetric `Q` yields an asymmetric adjacency matrix.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct SbmOptions {
    /// Sample each ordered pair separately. Default: false
    pub directed: bool,
    /// Allow `(u, u)` edges, drawn with the diagonal block probability. Default: false
    pub self_loops: bool,
}

impl SbmOptions {
    /// Directed graph without self-loops
    pub fn directed_graph() -> Self {
        SbmOptions {
            directed: true,
            ..Default::default()
        }
    }

    /// Same options with self-loops switched on or off
    pub fn with_self_loops(self, self_loops: bool) -> Self {
        SbmOptions { self_loops, ..self }
    }
}
