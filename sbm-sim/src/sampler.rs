//! Independent Bernoulli draws over a block of candidate pairs.
//!
//! Instead of flipping a coin for each of the `num_pairs` candidates,
//! the gap between two kept pairs is drawn from `Geometric(prob)`
//! (number of failures before the next success). This is the same
//! distribution as one Bernoulli trial per pair but costs one draw per
//! kept pair.
//!
//! Probabilities so small that `1 - prob` rounds to `1` cannot
//! parameterize a geometric gap. For those, the number of kept pairs is
//! drawn from `Binomial(num_pairs, prob)` and the kept pairs are a
//! uniform subset of that size, which is the same distribution again.

use crate::error::SbmError;
use crate::layout::BlockLayout;
use rand::Rng;
use rand::seq::index;
use rand_distr::{Binomial, Distribution, Geometric};

/// Keep each pair of `layout` independently with probability `prob` and
/// pass its local `(row, col)` indices to `emit`, in increasing pair
/// order. Returns the number of kept pairs.
///
/// * `prob == 0` or an empty block returns without touching `rng`
/// * `prob == 1` keeps every pair without touching `rng`
/// * `prob` below machine epsilon draws a binomial count and a sorted
///   uniform subset of pair numbers
pub fn sample_block<R, F>(
    layout: &BlockLayout,
    prob: f64,
    rng: &mut R,
    mut emit: F,
) -> Result<u64, SbmError>
where
    R: Rng + ?Sized,
    F: FnMut(usize, usize),
{
    let npairs = layout.num_pairs();

    if npairs == 0 || prob <= 0.0 {
        return Ok(0);
    }

    if prob >= 1.0 {
        for t in 0..npairs {
            let (u, v) = layout.pair_at(t);
            emit(u, v);
        }
        return Ok(npairs);
    }

    if 1.0 - prob == 1.0 {
        return sample_block_binomial(layout, prob, rng, emit);
    }

    let gap = Geometric::new(prob).map_err(|_| SbmError::InvalidProbability {
        name: "block probability".into(),
        value: prob,
    })?;

    let mut nkept = 0_u64;
    let mut t = 0_u64;
    loop {
        t = match t.checked_add(gap.sample(rng)) {
            Some(next) if next < npairs => next,
            _ => break,
        };
        let (u, v) = layout.pair_at(t);
        emit(u, v);
        nkept += 1;
        t += 1;
    }
    Ok(nkept)
}

/// Binomial count, then that many distinct pair numbers in increasing order
fn sample_block_binomial<R, F>(
    layout: &BlockLayout,
    prob: f64,
    rng: &mut R,
    mut emit: F,
) -> Result<u64, SbmError>
where
    R: Rng + ?Sized,
    F: FnMut(usize, usize),
{
    let npairs = layout.num_pairs();

    let count = Binomial::new(npairs, prob).map_err(|_| SbmError::InvalidProbability {
        name: "block probability".into(),
        value: prob,
    })?;

    let nkept = count.sample(rng);
    if nkept == 0 {
        return Ok(0);
    }

    let to_usize = |x: u64| {
        usize::try_from(x).map_err(|_| {
            SbmError::InvalidSize(format!("{x} candidate pairs exceed the index range"))
        })
    };

    let mut kept = index::sample(rng, to_usize(npairs)?, to_usize(nkept)?).into_vec();
    kept.sort_unstable();

    for t in kept {
        let (u, v) = layout.pair_at(t as u64);
        emit(u, v);
    }
    Ok(nkept)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn test_zero_probability_draws_nothing() {
        let layout = BlockLayout::new(50, 40, false, false, false);
        let mut rng = StdRng::seed_from_u64(7);
        let mut untouched = rng.clone();

        let mut kept = vec![];
        let n = sample_block(&layout, 0.0, &mut rng, |u, v| kept.push((u, v))).unwrap();

        assert_eq!(n, 0);
        assert!(kept.is_empty());
        assert_eq!(rng.random::<u64>(), untouched.random::<u64>());
    }

    #[test]
    fn test_unit_probability_keeps_block() {
        let layout = BlockLayout::new(6, 6, true, false, false);
        let mut rng = StdRng::seed_from_u64(7);
        let mut untouched = rng.clone();

        let mut kept = vec![];
        let n = sample_block(&layout, 1.0, &mut rng, |u, v| kept.push((u, v))).unwrap();

        assert_eq!(n, 15);
        assert_eq!(kept.len(), 15);
        assert!(kept.iter().all(|&(u, v)| u > v));
        assert_eq!(rng.random::<u64>(), untouched.random::<u64>());
    }

    #[test]
    fn test_kept_pairs_are_distinct_and_ordered() {
        let layout = BlockLayout::new(30, 30, true, false, true);
        let mut rng = StdRng::seed_from_u64(11);

        let mut kept = vec![];
        sample_block(&layout, 0.3, &mut rng, |u, v| kept.push((u, v))).unwrap();

        assert!(!kept.is_empty());
        assert!(kept.windows(2).all(|w| w[0] < w[1]));
        assert!(kept.iter().all(|&(u, v)| u != v && u < 30 && v < 30));
    }

    #[test]
    fn test_kept_fraction() {
        let layout = BlockLayout::new(200, 300, false, false, false);
        let mut rng = StdRng::seed_from_u64(3);

        let n = sample_block(&layout, 0.05, &mut rng, |_, _| {}).unwrap();

        // 60000 pairs, mean 3000, sd ~ 53
        assert!((2700..3300).contains(&n), "kept {}", n);
    }

    #[test]
    fn test_subnormal_probabilities_return() {
        let layout = BlockLayout::new(1000, 1000, false, false, false);
        let mut rng = StdRng::seed_from_u64(5);

        for &prob in &[1e-17, f64::MIN_POSITIVE, f64::EPSILON / 4.0] {
            let mut kept = vec![];
            let n = sample_block(&layout, prob, &mut rng, |u, v| kept.push((u, v))).unwrap();
            // 1e6 pairs: expected count at most 5.6e-11
            assert_eq!(n, 0);
            assert!(kept.is_empty());
        }
    }

    #[test]
    fn test_tiny_probability_over_many_pairs() {
        // 1e18 pairs at 1e-17: about 10 kept
        let layout = BlockLayout::new(1_000_000_000, 1_000_000_000, false, false, false);
        let mut rng = StdRng::seed_from_u64(13);

        let mut kept = vec![];
        let n = sample_block(&layout, 1e-17, &mut rng, |u, v| kept.push((u, v))).unwrap();

        assert_eq!(n as usize, kept.len());
        assert!((1..40).contains(&n), "kept {}", n);
        assert!(kept.windows(2).all(|w| w[0] < w[1]));
        assert!(kept
            .iter()
            .all(|&(u, v)| u < 1_000_000_000 && v < 1_000_000_000));
    }
}
