// ============================================================
// Layer 4 — Train/Dev/Test Splitter
// ============================================================
// Randomly partitions a collection into three disjoint sets:
//   - Training set: used to update model weights
//   - Dev set:      used for early stopping and model selection
//   - Test set:     held back for the final evaluation
//
// The split happens in two sequential random steps:
//
//   1. carve out dev + test as one combined holdout
//   2. split the holdout into dev and test in proportion
//      test / (dev + test)
//
// Both steps draw from one RNG seeded with `random_state`, so the
// same seed always yields the same partition.
//
// Sizing: dev gets round(dev_proportion * n) rows and test gets
// round(test_proportion * n), both measured against the whole
// collection; train keeps the rest. Each subset is then within
// one row of its target share.
//
// Uses Fisher-Yates shuffle via rand::seq::SliceRandom.
//
// Reference: rand crate documentation (StdRng, SeedableRng)

use rand::{rngs::StdRng, seq::SliceRandom, SeedableRng};

use crate::domain::error::UtilsError;

/// The three disjoint subsets produced by [`split_data`].
#[derive(Debug, Clone, PartialEq)]
pub struct Partition<T> {
    pub train: Vec<T>,
    pub dev:   Vec<T>,
    pub test:  Vec<T>,
}

impl<T> Partition<T> {
    /// Total number of rows across all three subsets
    pub fn len(&self) -> usize {
        self.train.len() + self.dev.len() + self.test.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Randomly split `rows` into (train, dev, test).
///
/// # Arguments
/// * `rows`            - All records (consumed by this function)
/// * `dev_proportion`  - Share for the dev set, in [0, 1)
/// * `test_proportion` - Share for the test set, in [0, 1)
/// * `random_state`    - Seed for the shuffle
///
/// The train share is `1 - dev_proportion - test_proportion`.
///
/// # Errors
/// [`UtilsError::InvalidProportion`] if either proportion is negative,
/// NaN, at least 1, or if they sum to 1 or more.
///
/// # Example
/// ```
/// use sonorant::data::splitter::split_data;
/// let rows: Vec<u32> = (1..=100).collect();
/// let parts = split_data(rows, 0.2, 0.1, 47).unwrap();
/// assert_eq!(parts.len(), 100);
/// ```
pub fn split_data<T>(
    rows:            Vec<T>,
    dev_proportion:  f64,
    test_proportion: f64,
    random_state:    u64,
) -> Result<Partition<T>, UtilsError> {
    let in_range = |p: f64| (0.0..1.0).contains(&p);
    let holdout_proportion = dev_proportion + test_proportion;
    if !in_range(dev_proportion) || !in_range(test_proportion) || holdout_proportion >= 1.0 {
        return Err(UtilsError::InvalidProportion {
            dev:  dev_proportion,
            test: test_proportion,
        });
    }

    let total     = rows.len();
    let test_size = target_size(total, test_proportion);
    // dev·n + test·n < n, so the two rounded sizes never exceed n
    let dev_size  = target_size(total, dev_proportion).min(total - test_size);

    let mut rng = StdRng::seed_from_u64(random_state);

    // Step 1: train vs holdout
    let (train, holdout) = shuffle_split(rows, dev_size + test_size, &mut rng);

    // Step 2: dev vs test inside the holdout
    let (dev, test) = shuffle_split(holdout, test_size, &mut rng);

    tracing::debug!(
        "Dataset split: {} train, {} dev, {} test (seed {})",
        train.len(),
        dev.len(),
        test.len(),
        random_state,
    );

    Ok(Partition { train, dev, test })
}

/// Rows owed to a subset of share `proportion`, rounded to nearest
fn target_size(total: usize, proportion: f64) -> usize {
    ((total as f64 * proportion).round() as usize).min(total)
}

/// Shuffle and split off `split_size` rows from the end.
/// Returns (kept, split_off).
fn shuffle_split<T>(mut rows: Vec<T>, split_size: usize, rng: &mut StdRng) -> (Vec<T>, Vec<T>) {
    rows.shuffle(rng);

    let split_size = split_size.min(rows.len());

    // split_off(n) removes elements [n..] from the Vec and returns them
    let split_off = rows.split_off(rows.len() - split_size);
    (rows, split_off)
}

// ─── Unit Tests ───────────────────────────────────────────────────────────────
#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_split_sizes() {
        let rows: Vec<u32> = (1..=100).collect();
        let parts = split_data(rows, 0.2, 0.1, 47).unwrap();
        assert!((69..=71).contains(&parts.train.len()));
        assert!((19..=21).contains(&parts.dev.len()));
        assert!((9..=11).contains(&parts.test.len()));
        assert_eq!(parts.len(), 100);
    }

    #[test]
    fn test_sizes_within_one_row_of_target() {
        let grid: Vec<f64> = (0..20).map(|i| i as f64 * 0.05).collect();
        for n in 0..120usize {
            for &dev in &grid {
                for &test in &grid {
                    if dev + test >= 1.0 {
                        continue;
                    }
                    let rows: Vec<usize> = (0..n).collect();
                    let parts = split_data(rows, dev, test, 11).unwrap();
                    let within = |len: usize, share: f64| (len as f64 - share * n as f64).abs() <= 1.0;

                    assert_eq!(parts.len(), n);
                    assert!(within(parts.train.len(), 1.0 - dev - test), "train n={n} d={dev} t={test}");
                    assert!(within(parts.dev.len(), dev), "dev n={n} d={dev} t={test}");
                    assert!(within(parts.test.len(), test), "test n={n} d={dev} t={test}");
                }
            }
        }
    }

    #[test]
    fn test_large_test_share_of_small_collection() {
        let rows: Vec<u32> = (0..22).collect();
        let parts = split_data(rows, 0.1, 0.45, 5).unwrap();
        // targets: 9.9 train, 2.2 dev, 9.9 test
        assert_eq!((parts.train.len(), parts.dev.len(), parts.test.len()), (10, 2, 10));
    }

    #[test]
    fn test_disjoint_and_covering() {
        let rows: Vec<u32> = (1..=100).collect();
        let parts = split_data(rows, 0.2, 0.1, 47).unwrap();

        let all: HashSet<u32> = parts.train.iter()
            .chain(&parts.dev)
            .chain(&parts.test)
            .copied()
            .collect();
        // No row appears twice and none are lost
        assert_eq!(all.len(), parts.len());
        assert_eq!(all, (1..=100).collect::<HashSet<u32>>());
    }

    #[test]
    fn test_same_seed_same_partition() {
        let rows: Vec<u32> = (0..57).collect();
        let a = split_data(rows.clone(), 0.15, 0.15, 7).unwrap();
        let b = split_data(rows, 0.15, 0.15, 7).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn test_different_seed_shuffles_differently() {
        let rows: Vec<u32> = (0..200).collect();
        let a = split_data(rows.clone(), 0.25, 0.25, 1).unwrap();
        let b = split_data(rows, 0.25, 0.25, 2).unwrap();
        assert_ne!(a.train, b.train);
    }

    #[test]
    fn test_no_holdout() {
        let rows: Vec<u32> = (0..10).collect();
        let parts = split_data(rows, 0.0, 0.0, 3).unwrap();
        assert_eq!(parts.train.len(), 10);
        assert!(parts.dev.is_empty());
        assert!(parts.test.is_empty());
    }

    #[test]
    fn test_empty_collection() {
        let parts = split_data(Vec::<u32>::new(), 0.2, 0.1, 0).unwrap();
        assert!(parts.is_empty());
    }

    #[test]
    fn test_rejects_bad_proportions() {
        let rows = || (0..10).collect::<Vec<u32>>();
        assert!(split_data(rows(), -0.1, 0.1, 0).is_err());
        assert!(split_data(rows(), 0.1, 1.0, 0).is_err());
        assert!(split_data(rows(), 0.5, 0.5, 0).is_err());
        assert!(split_data(rows(), f64::NAN, 0.1, 0).is_err());

        let err = split_data(rows(), 0.7, 0.4, 0).unwrap_err();
        assert_eq!(err.kind(), crate::domain::error::ErrorKind::Argument);
    }
}
