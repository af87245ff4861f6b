//! The universal set that complements are taken against.
use crate::set::{Element, MAX_SPAN, Set};
use std::fmt::{Display, Formatter};

/// An integer universe [lo, hi], inclusive on both ends.
///
/// Passed explicitly wherever a complement is needed; the default is [1, 100].
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub struct Universe {
    lo: Element,
    hi: Element,
}

impl Universe {
    /// The universe [lo, hi]. Empty when lo > hi.
    ///
    /// # Errors
    ///
    /// If hi - lo exceeds [`MAX_SPAN`], since complements list the whole universe.
    pub const fn new(lo: Element, hi: Element) -> Result<Self, Error> {
        if hi.saturating_sub(lo) > MAX_SPAN {
            return Err(Error::TooWide { lo, hi });
        }
        Ok(Self { lo, hi })
    }

    /// Lower bound.
    #[must_use]
    pub const fn lo(&self) -> Element {
        self.lo
    }

    /// Upper bound.
    #[must_use]
    pub const fn hi(&self) -> Element {
        self.hi
    }

    /// Is x in the universe?
    #[must_use]
    pub const fn contains(&self, x: Element) -> bool {
        self.lo <= x && x <= self.hi
    }

    /// All the elements of the universe as a set.
    #[must_use]
    pub fn to_set(&self) -> Set<Element> {
        Set {
            elements: (self.lo..=self.hi).collect(),
        }
    }

    /// The complement universe \ x.
    ///
    /// # Examples
    ///
    /// ```
    /// use correspondences::{Set, Universe};
    /// let u = Universe::new(1, 6).unwrap();
    /// assert_eq!(u.complement(&Set::from([2, 4, 6, 8])).to_string(), "{ 1, 3, 5 }");
    /// ```
    #[must_use]
    pub fn complement(&self, x: &Set<Element>) -> Set<Element> {
        x.complement(&self.to_set())
    }
}

impl Default for Universe {
    fn default() -> Self {
        Self { lo: 1, hi: 100 }
    }
}

impl Display for Universe {
    fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
        write!(f, "[{}, {}]", self.lo, self.hi)
    }
}

/// Errors that can arise when choosing a universe.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// The universe [{`lo`}, {`hi`}] is too wide to list.
    #[error("The universe [{lo}, {hi}] is too wide to list.")]
    TooWide {
        /// Lower bound
        lo: Element,
        /// Upper bound
        hi: Element,
    },
}
