//! Finite sets kept as sorted, duplicate-free vectors.
//!
//! Every operation here produces a normalized result, so two sets are equal exactly when their
//! underlying vectors are.
use crate::macros::impl_arith;
use itertools::{EitherOrBoth, Itertools};
use std::{
    fmt::{Debug, Display, Formatter},
    ops::{BitAnd, BitOr, BitXor, Sub},
};

/// The element type the console programs and [`Accordance`](crate::Accordance) work with.
pub type Element = i64;

/// The widest integer range `hi - lo` that is ever expanded into a set.
pub const MAX_SPAN: Element = 1 << 20;

/// Sort a vector ascending and drop repeated elements, in place.
///
/// # Examples
///
/// ```
/// use correspondences::set::normalize;
/// let mut xs = vec![3, 1, 2, 3, 1];
/// normalize(&mut xs);
/// assert_eq!(xs, [1, 2, 3]);
/// ```
pub fn normalize<T: Ord>(xs: &mut Vec<T>) {
    xs.sort_unstable();
    xs.dedup();
}

/// A finite set.
///
/// Invariant: `elements` is strictly ascending.
#[derive(PartialEq, Eq, Clone, Hash)]
pub struct Set<T> {
    pub(crate) elements: Vec<T>,
}

impl<T: Ord> Set<T> {
    /// Check that the internal representation of this set is correct.
    ///
    /// # Errors
    ///
    /// If the elements are not strictly ascending.
    pub(crate) fn check_rep(&self) -> Result<(), Error> {
        match self
            .elements
            .iter()
            .tuple_windows()
            .position(|(a, b)| a >= b)
        {
            Some(i) => Err(Error::NotNormalized { index: i + 1 }),
            None => Ok(()),
        }
    }

    /// Build a set out of arbitrary elements, normalizing them.
    ///
    /// # Examples
    ///
    /// ```
    /// use correspondences::Set;
    /// let s = Set::new(vec![5, 1, 5, 3]);
    /// assert_eq!(s.to_string(), "{ 1, 3, 5 }");
    /// assert_eq!(s.len(), 3);
    /// ```
    #[must_use]
    pub fn new(mut elements: Vec<T>) -> Self {
        normalize(&mut elements);
        Self { elements }
    }

    /// The empty set Ø.
    #[must_use]
    pub const fn empty() -> Self {
        Self {
            elements: Vec::new(),
        }
    }

    /// The singleton set {x}.
    #[must_use]
    pub fn singleton(x: T) -> Self {
        Self { elements: vec![x] }
    }

    /// Cardinality.
    #[must_use]
    pub fn len(&self) -> usize {
        self.elements.len()
    }

    /// Is this Ø?
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }

    /// Membership x ∈ self, by binary search.
    #[must_use]
    pub fn contains(&self, x: &T) -> bool {
        self.elements.binary_search(x).is_ok()
    }

    /// Subset relation self ⊆ other.
    #[must_use]
    pub fn is_subset(&self, other: &Self) -> bool {
        self.iter().all(|x| other.contains(x))
    }

    /// The elements in ascending order.
    pub fn iter(&self) -> std::slice::Iter<'_, T> {
        self.elements.iter()
    }

    /// The elements as an ascending slice.
    #[must_use]
    pub fn as_slice(&self) -> &[T] {
        &self.elements
    }

    /// Give up the set, keeping its ascending elements.
    #[must_use]
    pub fn into_vec(self) -> Vec<T> {
        self.elements
    }
}

impl<T: Ord + Clone> Set<T> {
    /// Union x ∪ y.
    ///
    /// # Note
    ///
    /// This is also available via the `|` operator.
    ///
    /// # Examples
    ///
    /// ```
    /// use correspondences::Set;
    /// let x = Set::from([1, 2, 3]);
    /// let y = Set::from([3, 4]);
    /// assert_eq!(x.union(&y), Set::from([1, 2, 3, 4]));
    /// assert_eq!(&x | &y, Set::from([4, 3, 2, 1]));
    /// ```
    #[must_use]
    pub fn union(&self, other: &Self) -> Self {
        let elements = self
            .iter()
            .merge_join_by(other.iter(), |a, b| a.cmp(b))
            .map(|e| e.reduce(|a, _| a).clone())
            .collect();
        Self { elements }
    }

    /// Intersection x ∩ y.
    ///
    /// # Note
    ///
    /// This is also available via the `&` operator.
    #[must_use]
    pub fn intersect(&self, other: &Self) -> Self {
        let elements = self
            .iter()
            .merge_join_by(other.iter(), |a, b| a.cmp(b))
            .filter_map(|e| match e {
                EitherOrBoth::Both(a, _) => Some(a.clone()),
                _ => None,
            })
            .collect();
        Self { elements }
    }

    /// Difference x \ y.
    ///
    /// # Note
    ///
    /// This is also available via the `-` operator.
    ///
    /// # Examples
    ///
    /// ```
    /// use correspondences::Set;
    /// let x = Set::from([1, 2, 3]);
    /// let y = Set::from([2, 9]);
    /// assert_eq!((&x - &y).to_string(), "{ 1, 3 }");
    /// assert!((&x - &x).is_empty());
    /// ```
    #[must_use]
    pub fn difference(&self, other: &Self) -> Self {
        let elements = self
            .iter()
            .merge_join_by(other.iter(), |a, b| a.cmp(b))
            .filter_map(|e| match e {
                EitherOrBoth::Left(a) => Some(a.clone()),
                _ => None,
            })
            .collect();
        Self { elements }
    }

    /// Symmetric difference x △ y = (x \ y) ∪ (y \ x).
    ///
    /// # Note
    ///
    /// This is also available via the `^` operator.
    #[must_use]
    pub fn symmetric_difference(&self, other: &Self) -> Self {
        let elements = self
            .iter()
            .merge_join_by(other.iter(), |a, b| a.cmp(b))
            .filter_map(|e| match e {
                EitherOrBoth::Left(a) | EitherOrBoth::Right(a) => Some(a.clone()),
                EitherOrBoth::Both(..) => None,
            })
            .collect();
        Self { elements }
    }

    /// Complement with respect to the given universe, i.e. universe \ x.
    ///
    /// Elements of x lying outside the universe are simply ignored.
    #[must_use]
    pub fn complement(&self, universe: &Self) -> Self {
        universe.difference(self)
    }
}

impl<T> Default for Set<T> {
    fn default() -> Self {
        Self {
            elements: Vec::new(),
        }
    }
}

impl<T: Ord> FromIterator<T> for Set<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Self::new(iter.into_iter().collect())
    }
}

impl<T: Ord> From<Vec<T>> for Set<T> {
    fn from(elements: Vec<T>) -> Self {
        Self::new(elements)
    }
}

impl<T: Ord, const N: usize> From<[T; N]> for Set<T> {
    fn from(elements: [T; N]) -> Self {
        Self::new(Vec::from(elements))
    }
}

impl<T> IntoIterator for Set<T> {
    type Item = T;
    type IntoIter = std::vec::IntoIter<T>;
    fn into_iter(self) -> Self::IntoIter {
        self.elements.into_iter()
    }
}

impl<'a, T> IntoIterator for &'a Set<T> {
    type Item = &'a T;
    type IntoIter = std::slice::Iter<'a, T>;
    fn into_iter(self) -> Self::IntoIter {
        self.elements.iter()
    }
}

impl<T: Display> Display for Set<T> {
    fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
        if self.elements.is_empty() {
            f.write_str("{ }")
        } else {
            write!(f, "{{ {} }}", self.elements.iter().format(", "))
        }
    }
}

impl<T: Debug> Debug for Set<T> {
    fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
        f.debug_set().entries(&self.elements).finish()
    }
}

impl_arith!(Set<T>, BitOr, bitor, union);
impl_arith!(Set<T>, BitAnd, bitand, intersect);
impl_arith!(Set<T>, Sub, sub, difference);
impl_arith!(Set<T>, BitXor, bitxor, symmetric_difference);

/// Errors that can arise when checking sets.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// Element {`index`} is not strictly greater than the one before it.
    #[error("Element {index} is not strictly greater than the one before it.")]
    NotNormalized {
        /// Position of the offending element
        index: usize,
    },
}
