//! Monoid merging of per-document statistics
//!
//! Count tables form a commutative monoid under key-wise addition, so
//! documents can be analysed independently (on any number of workers) and
//! their tables combined in any grouping.

use smallvec::SmallVec;

/// An associative merge with an identity element
///
/// - Associativity: (a ⊕ b) ⊕ c = a ⊕ (b ⊕ c)
/// - Identity: a ⊕ identity = identity ⊕ a = a
pub trait Monoid: Clone + Send + Sync {
    /// Returns the identity element
    fn identity() -> Self;

    /// Combines two elements
    fn combine(&self, other: &Self) -> Self;
}

/// Extension trait for monoids that can be reduced from collections
pub trait MonoidReduce: Monoid {
    /// Reduces a collection to a single result
    ///
    /// Uses tree reduction to keep depth logarithmic in the number of items.
    fn reduce<I>(iter: I) -> Self
    where
        I: IntoIterator<Item = Self>,
    {
        let mut items: SmallVec<[Self; 16]> = iter.into_iter().collect();

        if items.is_empty() {
            return Self::identity();
        }

        // Tree reduction: combine pairs until only one remains
        while items.len() > 1 {
            let mut next_level = SmallVec::<[Self; 16]>::new();
            let mut pairs = items.chunks_exact(2);

            for pair in &mut pairs {
                next_level.push(pair[0].combine(&pair[1]));
            }
            if let [last] = pairs.remainder() {
                next_level.push(last.clone());
            }

            items = next_level;
        }

        items.into_iter().next().unwrap_or_else(Self::identity)
    }
}
