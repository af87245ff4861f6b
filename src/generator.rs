//! "Propositional" set definitions: a fixed predicate over an inclusive integer range.
use crate::set::{Element, MAX_SPAN, Set};
use std::fmt::{Display, Formatter};

/// The predicates a set can be generated from.
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum Generator {
    /// n² for every n in [a, b].
    Squares,
    /// Even numbers in [a, b].
    Evens,
    /// Odd numbers in [a, b].
    Odds,
    /// Every integer in [a, b].
    Integers,
}

impl Generator {
    /// Every generator, in menu order.
    pub const ALL: [Self; 4] = [Self::Squares, Self::Evens, Self::Odds, Self::Integers];

    /// Generate the set over [a, b]. Empty when a > b.
    ///
    /// # Errors
    ///
    /// If b - a exceeds [`MAX_SPAN`], or a square does not fit an [`Element`].
    ///
    /// # Examples
    ///
    /// ```
    /// use correspondences::Generator;
    /// assert_eq!(Generator::Squares.generate(-2, 3).unwrap().to_string(), "{ 0, 1, 4, 9 }");
    /// assert_eq!(Generator::Evens.generate(-3, 4).unwrap().to_string(), "{ -2, 0, 2, 4 }");
    /// assert_eq!(Generator::Odds.generate(-3, 4).unwrap().to_string(), "{ -3, -1, 1, 3 }");
    /// assert!(Generator::Integers.generate(5, 1).unwrap().is_empty());
    /// assert!(Generator::Evens.generate(0, 1 << 40).is_err());
    /// ```
    pub fn generate(self, a: Element, b: Element) -> Result<Set<Element>, Error> {
        if b.saturating_sub(a) > MAX_SPAN {
            return Err(Error::RangeTooWide { a, b });
        }
        let range = a..=b;
        let elements = match self {
            Self::Squares => range
                .map(|n| n.checked_mul(n).ok_or(Error::SquareOverflow { value: n }))
                .collect::<Result<Vec<_>, _>>()?,
            Self::Evens => range.filter(|n| n.rem_euclid(2) == 0).collect(),
            Self::Odds => range.filter(|n| n.rem_euclid(2) == 1).collect(),
            Self::Integers => range.collect(),
        };
        Ok(Set::new(elements))
    }
}

impl Display for Generator {
    fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
        f.write_str(match self {
            Self::Squares => "Squares of the integers in [a, b]",
            Self::Evens => "Even numbers in [a, b]",
            Self::Odds => "Odd numbers in [a, b]",
            Self::Integers => "All integers in [a, b]",
        })
    }
}

/// Errors that can arise when generating sets.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// The square of {`value`} does not fit an element.
    #[error("The square of {value} does not fit an element.")]
    SquareOverflow {
        /// The value being squared
        value: Element,
    },
    /// The range [{`a`}, {`b`}] is too wide to list.
    #[error("The range [{a}, {b}] is too wide to list.")]
    RangeTooWide {
        /// Lower bound
        a: Element,
        /// Upper bound
        b: Element,
    },
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn overflow_reported() {
        let big = Element::MAX / 2;
        assert!(matches!(
            Generator::Squares.generate(big, big),
            Err(Error::SquareOverflow { value }) if value == big
        ));
    }

    #[test]
    fn wide_range_rejected() {
        for g in Generator::ALL {
            assert!(matches!(
                g.generate(0, 1 << 40),
                Err(Error::RangeTooWide { a: 0, b }) if b == 1 << 40
            ));
            assert!(matches!(
                g.generate(Element::MIN, Element::MAX),
                Err(Error::RangeTooWide { .. })
            ));
        }
        assert_eq!(
            Generator::Integers.generate(1, MAX_SPAN + 1).unwrap().len(),
            usize::try_from(MAX_SPAN + 1).unwrap()
        );
    }

    #[test]
    fn squares_dedupe_negatives() {
        let s = Generator::Squares.generate(-3, 3).unwrap();
        assert_eq!(s, Set::from([0, 1, 4, 9]));
    }

    proptest! {
        #[test]
        fn evens_and_odds_partition_integers(a in -50..50 as Element, b in -50..50 as Element) {
            let evens = Generator::Evens.generate(a, b).unwrap();
            let odds = Generator::Odds.generate(a, b).unwrap();
            let all = Generator::Integers.generate(a, b).unwrap();
            prop_assert!(evens.check_rep().is_ok());
            prop_assert!(odds.check_rep().is_ok());
            prop_assert!((&evens & &odds).is_empty());
            prop_assert_eq!(&evens | &odds, all);
            for e in &evens {
                prop_assert!(e % 2 == 0 && a <= *e && *e <= b);
            }
        }

        #[test]
        fn generated_sets_are_normalized(a in -50..50 as Element, b in -50..50 as Element) {
            for g in Generator::ALL {
                prop_assert!(g.generate(a, b).unwrap().check_rep().is_ok());
            }
        }
    }
}
