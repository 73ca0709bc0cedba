// Jaccard similarity between two n-gram sets.

use std::collections::HashSet;
use std::hash::Hash;

/// |A ∩ B| / |A ∪ B|, or 0.0 when both sets are empty.
pub fn jaccard<T: Eq + Hash>(a: &HashSet<T>, b: &HashSet<T>) -> f64 {
    // Iterate the smaller side for the intersection count
    let (small, large) = if a.len() <= b.len() { (a, b) } else { (b, a) };
    let intersection = small.iter().filter(|item| large.contains(*item)).count();
    let union = a.len() + b.len() - intersection;

    if union == 0 {
        0.0
    } else {
        intersection as f64 / union as f64
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn set(items: &[&str]) -> HashSet<String> {
        items.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_both_empty() {
        assert_eq!(jaccard(&set(&[]), &set(&[])), 0.0);
    }

    #[test]
    fn test_one_empty() {
        assert_eq!(jaccard(&set(&["a b"]), &set(&[])), 0.0);
    }

    #[test]
    fn test_identical() {
        let a = set(&["a b", "b c"]);
        assert_eq!(jaccard(&a, &a), 1.0);
    }

    #[test]
    fn test_partial_overlap() {
        let a = set(&["a b", "b c", "c d"]);
        let b = set(&["b c", "c d", "d e"]);
        // 2 shared out of 4 distinct
        assert!((jaccard(&a, &b) - 0.5).abs() < 1e-12);
        assert_eq!(jaccard(&a, &b), jaccard(&b, &a));
    }
}
