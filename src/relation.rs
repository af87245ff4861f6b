//! Binary relations ("graphs") as sets of ordered pairs.
use crate::{macros::impl_arith, set::Set};
use itertools::{Itertools, iproduct};
use std::{
    fmt::{Debug, Display, Formatter},
    ops::{BitAnd, BitOr, Shr, Sub},
};

/// Swap the two components of a pair.
///
/// # Examples
///
/// ```
/// use correspondences::relation::inversion;
/// assert_eq!(inversion((1, 2)), (2, 1));
/// ```
pub fn inversion<T>((a, b): (T, T)) -> (T, T) {
    (b, a)
}

/// A binary relation: a set of pairs ⟨a, b⟩ ordered lexicographically.
#[derive(PartialEq, Eq, Clone, Hash)]
pub struct Relation<T> {
    pub(crate) pairs: Set<(T, T)>,
}

impl<T: Ord> Relation<T> {
    /// Check that the internal representation of this relation is correct.
    ///
    /// # Errors
    ///
    /// If the pairs are not strictly ascending.
    pub(crate) fn check_rep(&self) -> Result<(), crate::set::Error> {
        self.pairs.check_rep()
    }

    /// Build a relation out of arbitrary pairs, normalizing them.
    #[must_use]
    pub fn new(pairs: Vec<(T, T)>) -> Self {
        Self {
            pairs: Set::new(pairs),
        }
    }

    /// The empty relation.
    #[must_use]
    pub const fn empty() -> Self {
        Self {
            pairs: Set::empty(),
        }
    }

    /// Number of pairs.
    #[must_use]
    pub fn len(&self) -> usize {
        self.pairs.len()
    }

    /// Does this relation have no pairs?
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.pairs.is_empty()
    }

    /// Is ⟨a, b⟩ in the relation?
    #[must_use]
    pub fn contains(&self, pair: &(T, T)) -> bool {
        self.pairs.contains(pair)
    }

    /// The pairs in lexicographic order.
    pub fn iter(&self) -> std::slice::Iter<'_, (T, T)> {
        self.pairs.iter()
    }

    /// The underlying set of pairs.
    #[must_use]
    pub const fn pairs(&self) -> &Set<(T, T)> {
        &self.pairs
    }
}

impl<T: Ord + Clone> Relation<T> {
    /// The domain: every first component.
    #[must_use]
    pub fn domain(&self) -> Set<T> {
        self.iter().map(|(a, _)| a.clone()).collect()
    }

    /// The range: every second component.
    #[must_use]
    pub fn range(&self) -> Set<T> {
        self.iter().map(|(_, b)| b.clone()).collect()
    }

    /// The inverse relation, swapping every pair.
    ///
    /// # Examples
    ///
    /// ```
    /// use correspondences::Relation;
    /// let p = Relation::from([(1, 2), (3, 0)]);
    /// assert_eq!(p.inversion().to_string(), "{ <0, 3>, <2, 1> }");
    /// ```
    #[must_use]
    pub fn inversion(&self) -> Self {
        self.iter().cloned().map(inversion).collect()
    }

    /// Compose this relation with another: ⟨a, d⟩ for every ⟨a, b⟩ here and ⟨b, d⟩ there.
    /// O(|p|·|q|).
    ///
    /// # Note
    ///
    /// This is also available via the `>>` operator, to suggest serial composition.
    ///
    /// # Examples
    ///
    /// ```
    /// use correspondences::Relation;
    /// let p = Relation::from([(1, 2), (2, 3)]);
    /// let q = Relation::from([(2, 5), (3, 6)]);
    /// assert_eq!(p.compose(&q), Relation::from([(1, 5), (2, 6)]));
    /// assert_eq!((&q >> &p).to_string(), "{ }");
    /// ```
    #[must_use]
    pub fn compose(&self, other: &Self) -> Self {
        iproduct!(self.iter(), other.iter())
            .filter(|((_, b), (c, _))| b == c)
            .map(|((a, _), (_, d))| (a.clone(), d.clone()))
            .collect()
    }

    /// Is ⟨b, a⟩ present for every ⟨a, b⟩?
    #[must_use]
    pub fn is_symmetric(&self) -> bool {
        self.iter()
            .all(|(a, b)| self.contains(&(b.clone(), a.clone())))
    }

    /// The diagonal {⟨m, m⟩ | m ∈ set}.
    #[must_use]
    pub fn diagonal(set: &Set<T>) -> Self {
        Self {
            pairs: Set {
                elements: set.iter().map(|m| (m.clone(), m.clone())).collect(),
            },
        }
    }

    /// Every b with ⟨a, b⟩ present for some a in `subset`.
    #[must_use]
    pub fn image(&self, subset: &Set<T>) -> Set<T> {
        self.iter()
            .filter(|(a, _)| subset.contains(a))
            .map(|(_, b)| b.clone())
            .collect()
    }

    /// Every a with ⟨a, b⟩ present for some b in `subset`.
    #[must_use]
    pub fn preimage(&self, subset: &Set<T>) -> Set<T> {
        self.iter()
            .filter(|(_, b)| subset.contains(b))
            .map(|(a, _)| a.clone())
            .collect()
    }

    /// Keep only the pairs inside departure × arrival.
    #[must_use]
    pub fn restrict(&self, departure: &Set<T>, arrival: &Set<T>) -> Self {
        let elements = self
            .iter()
            .filter(|(a, b)| departure.contains(a) && arrival.contains(b))
            .cloned()
            .collect();
        Self {
            pairs: Set { elements },
        }
    }

    /// Union of the pair sets.
    #[must_use]
    pub fn union(&self, other: &Self) -> Self {
        Self {
            pairs: &self.pairs | &other.pairs,
        }
    }

    /// Intersection of the pair sets.
    #[must_use]
    pub fn intersect(&self, other: &Self) -> Self {
        Self {
            pairs: &self.pairs & &other.pairs,
        }
    }

    /// Difference of the pair sets.
    #[must_use]
    pub fn difference(&self, other: &Self) -> Self {
        Self {
            pairs: &self.pairs - &other.pairs,
        }
    }
}

impl<T> Default for Relation<T> {
    fn default() -> Self {
        Self {
            pairs: Set::default(),
        }
    }
}

impl<T: Ord> FromIterator<(T, T)> for Relation<T> {
    fn from_iter<I: IntoIterator<Item = (T, T)>>(iter: I) -> Self {
        Self {
            pairs: iter.into_iter().collect(),
        }
    }
}

impl<T: Ord> From<Vec<(T, T)>> for Relation<T> {
    fn from(pairs: Vec<(T, T)>) -> Self {
        Self::new(pairs)
    }
}

impl<T: Ord, const N: usize> From<[(T, T); N]> for Relation<T> {
    fn from(pairs: [(T, T); N]) -> Self {
        Self {
            pairs: Set::from(pairs),
        }
    }
}

impl<T> IntoIterator for Relation<T> {
    type Item = (T, T);
    type IntoIter = std::vec::IntoIter<(T, T)>;
    fn into_iter(self) -> Self::IntoIter {
        self.pairs.into_iter()
    }
}

impl<'a, T> IntoIterator for &'a Relation<T> {
    type Item = &'a (T, T);
    type IntoIter = std::slice::Iter<'a, (T, T)>;
    fn into_iter(self) -> Self::IntoIter {
        self.pairs.elements.iter()
    }
}

impl<T: Display> Display for Relation<T> {
    fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
        if self.pairs.elements.is_empty() {
            f.write_str("{ }")
        } else {
            let pairs = self
                .pairs
                .elements
                .iter()
                .format_with(", ", |(a, b), f| f(&format_args!("<{a}, {b}>")));
            write!(f, "{{ {pairs} }}")
        }
    }
}

impl<T: Display> Debug for Relation<T> {
    fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
        // Reuse Display cuz it's nice
        Display::fmt(self, f)
    }
}

impl_arith!(Relation<T>, BitOr, bitor, union);
impl_arith!(Relation<T>, BitAnd, bitand, intersect);
impl_arith!(Relation<T>, Sub, sub, difference);
impl_arith!(Relation<T>, Shr, shr, compose);

/// `proptest` strategies for generating arbitrary relations.
#[cfg(test)]
pub(crate) mod strategies {
    use super::*;
    use proptest::prelude::*;

    pub fn raw<T: Debug>(
        element: impl Strategy<Value = T> + Clone,
    ) -> impl Strategy<Value = Vec<(T, T)>> {
        proptest::collection::vec((element.clone(), element), 0..24)
    }

    pub fn relations<T: Ord + Display + Debug>(
        element: impl Strategy<Value = T> + Clone,
    ) -> impl Strategy<Value = Relation<T>> {
        raw(element).prop_map(Relation::new)
    }
}
