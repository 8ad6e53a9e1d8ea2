//! Diffing many independent sequence pairs.
//!
//! Each pair owns its score table, so pairs can be processed concurrently
//! without locking. With the `parallel` feature the work is spread over the
//! rayon thread pool; results always come back in input order.

use crate::step::DiffResult;

use super::reconstruct::diff;

/// Diff every `(old, new)` pair.
#[cfg(not(feature = "parallel"))]
pub fn diff_all<T>(pairs: &[(&[T], &[T])]) -> Vec<DiffResult<T>>
where
    T: PartialEq + Clone,
{
    pairs.iter().map(|(old, new)| diff(old, new)).collect()
}

/// Diff every `(old, new)` pair.
#[cfg(feature = "parallel")]
pub fn diff_all<T>(pairs: &[(&[T], &[T])]) -> Vec<DiffResult<T>>
where
    T: PartialEq + Clone + Send + Sync,
{
    use rayon::prelude::*;

    pairs.par_iter().map(|(old, new)| diff(old, new)).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_results_in_input_order() {
        let a: Vec<char> = "BANANA".chars().collect();
        let b: Vec<char> = "KATANA".chars().collect();
        let c: Vec<char> = "1234".chars().collect();
        let d: Vec<char> = "23".chars().collect();

        let pairs = [
            (a.as_slice(), b.as_slice()),
            (c.as_slice(), d.as_slice()),
            (a.as_slice(), a.as_slice()),
        ];
        let results = diff_all(&pairs);

        assert_eq!(results.len(), 3);
        assert_eq!(results[0].to_string(), "-0+0-2+2");
        assert_eq!(results[1].to_string(), "-0-3");
        assert!(results[2].is_empty());
    }

    #[test]
    fn test_empty_batch() {
        let pairs: Vec<(&[u8], &[u8])> = Vec::new();
        assert!(diff_all(&pairs).is_empty());
    }
}
