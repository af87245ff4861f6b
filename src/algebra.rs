//! Set algebra lifted to correspondences.
//!
//! Union, intersection and difference act componentwise on the departure area, the arrival area
//! and the graph. Difference additionally prunes the graph back inside the shrunken areas.
use crate::{accordance::Accordance, macros::impl_arith};
use std::ops::{BitAnd, BitOr, Shr, Sub};

impl Accordance {
    /// Componentwise union.
    ///
    /// # Note
    ///
    /// This is also available via the `|` operator.
    #[must_use]
    pub fn unite(&self, other: &Self) -> Self {
        Self::new(
            &self.departure_area | &other.departure_area,
            &self.arrival_area | &other.arrival_area,
            &self.graph | &other.graph,
        )
    }

    /// Componentwise intersection.
    ///
    /// # Note
    ///
    /// This is also available via the `&` operator.
    #[must_use]
    pub fn intersect(&self, other: &Self) -> Self {
        Self::new(
            &self.departure_area & &other.departure_area,
            &self.arrival_area & &other.arrival_area,
            &self.graph & &other.graph,
        )
    }

    /// Componentwise difference, after which every pair whose endpoints left the areas is dropped,
    /// so the resulting graph always lies inside departure × arrival.
    ///
    /// # Note
    ///
    /// This is also available via the `-` operator.
    ///
    /// # Examples
    ///
    /// ```
    /// use correspondences::{Accordance, Relation, Set};
    /// let x = Accordance::new(
    ///     Set::from([1, 2]),
    ///     Set::from([10, 20]),
    ///     Relation::from([(1, 10), (2, 20)]),
    /// );
    /// let y = Accordance::new(Set::from([2]), Set::new(vec![]), Relation::empty());
    /// assert_eq!((x - y).to_string(), "⟨{ 1 }, { 10, 20 }, { <1, 10> }⟩");
    /// ```
    #[must_use]
    pub fn difference(&self, other: &Self) -> Self {
        let departure_area = &self.departure_area - &other.departure_area;
        let arrival_area = &self.arrival_area - &other.arrival_area;
        let graph = (&self.graph - &other.graph).restrict(&departure_area, &arrival_area);
        Self::new(departure_area, arrival_area, graph)
    }

    /// The inverse correspondence (Y, X, G⁻¹).
    ///
    /// # Examples
    ///
    /// ```
    /// use correspondences::{Accordance, Build};
    /// let a = Accordance::build(Build::AdjacencyList(vec![vec![5, 6]])).unwrap();
    /// assert_eq!(a.inverse().to_string(), "⟨{ 5, 6 }, { 1 }, { <5, 1>, <6, 1> }⟩");
    /// ```
    #[must_use]
    pub fn inverse(&self) -> Self {
        Self::new(
            self.arrival_area.clone(),
            self.departure_area.clone(),
            self.graph.inversion(),
        )
    }

    /// Compose this correspondence with another: (X₁, Y₂, G₁ ∘ G₂).
    ///
    /// The areas are carried over as they are, even when some of their elements end up with no
    /// pairs in the composed graph.
    ///
    /// # Note
    ///
    /// This is also available via the `>>` operator, to suggest serial composition.
    #[must_use]
    pub fn compose(&self, other: &Self) -> Self {
        Self::new(
            self.departure_area.clone(),
            other.arrival_area.clone(),
            &self.graph >> &other.graph,
        )
    }
}

impl_arith!(Accordance, BitOr, bitor, unite);
impl_arith!(Accordance, BitAnd, bitand, intersect);
impl_arith!(Accordance, Sub, sub, difference);
impl_arith!(Accordance, Shr, shr, compose);

#[cfg(test)]
mod tests {
    use crate::{
        accordance::{Accordance, Build, strategies},
        relation::Relation,
        set::Set,
    };
    use proptest::prelude::*;

    fn explicit(x: &[i64], y: &[i64], g: &[(i64, i64)]) -> Accordance {
        Accordance::build(Build::Explicit {
            departure_area: x.to_vec(),
            arrival_area: y.to_vec(),
            graph: g.to_vec(),
        })
        .unwrap()
    }

    #[test]
    fn difference_prunes_dangling_pairs() {
        // Raw graph difference keeps <2, 20> and <1, 30>, but 2 and 30 leave the areas.
        let x = explicit(&[1, 2, 3], &[10, 20, 30], &[(1, 10), (2, 20), (1, 30), (3, 10)]);
        let y = explicit(&[2], &[30], &[(1, 10)]);
        assert_eq!(
            &x.graph - &y.graph,
            Relation::from([(1, 30), (2, 20), (3, 10)])
        );
        let d = &x - &y;
        assert!(d.check_rep().is_ok());
        assert!(d.is_closed());
        assert_eq!(d.departure_area(), &Set::from([1, 3]));
        assert_eq!(d.arrival_area(), &Set::from([10, 20]));
        assert_eq!(d.graph(), &Relation::from([(3, 10)]));
    }

    #[test]
    fn unite_and_intersect_ok() {
        let x = explicit(&[1, 2], &[10], &[(1, 10), (2, 10)]);
        let y = explicit(&[2, 3], &[10, 20], &[(2, 10), (3, 20)]);
        assert_eq!(
            (&x | &y).to_string(),
            "⟨{ 1, 2, 3 }, { 10, 20 }, { <1, 10>, <2, 10>, <3, 20> }⟩"
        );
        assert_eq!((x & y).to_string(), "⟨{ 2 }, { 10 }, { <2, 10> }⟩");
    }

    #[test]
    fn composition_keeps_areas() {
        let x = explicit(&[1, 2, 9], &[2, 3], &[(1, 2), (2, 3)]);
        let y = explicit(&[2, 3], &[5, 6, 7], &[(2, 5), (3, 6)]);
        let c = &x >> &y;
        assert!(c.check_rep().is_ok());
        assert_eq!(c.departure_area(), &Set::from([1, 2, 9]));
        assert_eq!(c.arrival_area(), &Set::from([5, 6, 7]));
        assert_eq!(c.graph(), &Relation::from([(1, 5), (2, 6)]));
        assert!(!c.is_everywhere_defined());
        assert!(!c.is_surjective());
    }

    #[test]
    fn inverse_of_matrix() {
        let a = Accordance::build(Build::matrix_from_rows(vec![vec![true, true]]).unwrap()).unwrap();
        let b = a.inverse();
        assert!(!a.is_functional() && a.is_injective());
        assert!(b.is_functional() && !b.is_injective());
        assert_eq!(b.inverse(), a);
    }

    proptest! {
        #[test]
        fn inverse_involutive(a in strategies::accordances()) {
            let b = a.inverse();
            prop_assert!(b.check_rep().is_ok());
            prop_assert_eq!(b.inverse(), a);
        }

        #[test]
        fn inverse_swaps_predicates(a in strategies::accordances()) {
            let b = a.inverse();
            prop_assert_eq!(b.is_everywhere_defined(), a.is_surjective());
            prop_assert_eq!(b.is_surjective(), a.is_everywhere_defined());
            prop_assert_eq!(b.is_functional(), a.is_injective());
            prop_assert_eq!(b.is_injective(), a.is_functional());
            prop_assert_eq!(b.is_bijection(), a.is_bijection());
        }

        #[test]
        fn difference_never_dangles(x in strategies::accordances(), y in strategies::accordances()) {
            let d = &x - &y;
            prop_assert!(d.check_rep().is_ok());
            prop_assert!(d.is_closed());
            prop_assert!(d.graph().pairs().is_subset((&x.graph - &y.graph).pairs()));
        }

        #[test]
        fn difference_with_self_empty(x in strategies::accordances()) {
            prop_assert_eq!(&x - &x, Accordance::default());
        }

        #[test]
        fn unite_commutative(x in strategies::accordances(), y in strategies::accordances()) {
            prop_assert_eq!(&x | &y, &y | &x);
        }

        #[test]
        fn intersect_commutative(x in strategies::accordances(), y in strategies::accordances()) {
            prop_assert_eq!(&x & &y, &y & &x);
        }

        #[test]
        fn absorption(x in strategies::accordances(), y in strategies::accordances()) {
            prop_assert_eq!(&x | (&x & &y), x);
        }

        #[test]
        fn closed_stays_closed(x in strategies::closed(), y in strategies::closed()) {
            prop_assert!((&x | &y).is_closed());
            prop_assert!((&x & &y).is_closed());
            prop_assert!(x.inverse().is_closed());
            prop_assert!((&x >> &y).graph().domain().is_subset(x.departure_area()));
        }

        #[test]
        fn composition_with_inverse_of_bijection(a in strategies::closed()) {
            if a.is_bijection() {
                let id = &a >> a.inverse();
                prop_assert_eq!(id.graph(), &Relation::diagonal(a.departure_area()));
            }
        }
    }
}
