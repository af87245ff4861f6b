//! Correspondences between a departure area and an arrival area.
//!
//! An [`Accordance`] is a triple (X, Y, G) with G ⊆ X × Y in the intended reading. The explicit
//! constructor does not enforce that inclusion: areas may be larger than what the graph touches,
//! and the graph may mention elements outside them. The predicates then simply answer `false`
//! where they should, e.g. [`Accordance::is_everywhere_defined`].
use crate::{
    relation::Relation,
    set::{Element, Error as SetError, Set},
};
use itertools::Itertools;
use ndarray::Array2;
use std::fmt::{Debug, Display, Formatter};

/// The three raw forms a correspondence can be built from.
#[derive(Debug, PartialEq, Eq, Clone)]
pub enum Build {
    /// Departure area, arrival area and graph given directly.
    Explicit {
        /// Departure area X
        departure_area: Vec<Element>,
        /// Arrival area Y
        arrival_area: Vec<Element>,
        /// Graph G
        graph: Vec<(Element, Element)>,
    },
    /// `matrix[[i, j]]` relates departure element i + 1 to arrival element j + 1.
    Matrix(Array2<bool>),
    /// Row i lists the arrival elements related to departure element i + 1.
    AdjacencyList(Vec<Vec<Element>>),
}

impl Build {
    /// A [`Build::Matrix`] request out of row vectors.
    ///
    /// # Errors
    ///
    /// If the rows don't all have the same length.
    ///
    /// # Examples
    ///
    /// ```
    /// use correspondences::Build;
    /// assert!(Build::matrix_from_rows(vec![vec![true, false], vec![true, true]]).is_ok());
    /// assert!(Build::matrix_from_rows(vec![vec![true, false], vec![true]]).is_err());
    /// ```
    pub fn matrix_from_rows(rows: Vec<Vec<bool>>) -> Result<Self, Error> {
        let expected = rows.first().map_or(0, Vec::len);
        if let Some((row, r)) = rows.iter().find_position(|r| r.len() != expected) {
            return Err(Error::RaggedMatrix {
                row,
                len: r.len(),
                expected,
            });
        }
        let shape = (rows.len(), expected);
        let cells = rows.into_iter().flatten().collect();
        Ok(Self::Matrix(Array2::from_shape_vec(shape, cells)?))
    }
}

/// 1-based element for a 0-based row or column index.
fn ordinal(index: usize) -> Result<Element, Error> {
    index
        .checked_add(1)
        .and_then(|n| Element::try_from(n).ok())
        .ok_or(Error::IndexOverflow { index })
}

/// A correspondence (X, Y, G).
///
/// Invariants: X, Y and G are normalized. G ⊆ X × Y is expected but not enforced; see
/// [`Accordance::is_closed`].
#[derive(PartialEq, Eq, Clone, Default)]
pub struct Accordance {
    pub(crate) departure_area: Set<Element>,
    pub(crate) arrival_area: Set<Element>,
    pub(crate) graph: Relation<Element>,
}

impl Accordance {
    /// Check that the internal representation of this correspondence is correct.
    ///
    /// # Errors
    ///
    /// If either area or the graph is not normalized.
    ///
    /// # References
    ///
    /// [John Regehr on assertions](https://blog.regehr.org/archives/1091)
    pub(crate) fn check_rep(&self) -> Result<(), Error> {
        self.departure_area.check_rep()?;
        self.arrival_area.check_rep()?;
        self.graph.check_rep()?;
        Ok(())
    }

    /// Assemble a correspondence from parts that are already normalized.
    #[must_use]
    pub fn new(
        departure_area: Set<Element>,
        arrival_area: Set<Element>,
        graph: Relation<Element>,
    ) -> Self {
        let result = Self {
            departure_area,
            arrival_area,
            graph,
        };
        debug_assert!(result.check_rep().is_ok());
        result
    }

    /// Build a correspondence from one of its raw forms.
    ///
    /// # Errors
    ///
    /// If a matrix or adjacency list is too large for its indices to be elements.
    ///
    /// # Examples
    ///
    /// ```
    /// use correspondences::{Accordance, Build};
    /// use ndarray::array;
    /// let a = Accordance::build(Build::Matrix(array![[true, false], [true, true]])).unwrap();
    /// assert_eq!(a.to_string(), "⟨{ 1, 2 }, { 1, 2 }, { <1, 1>, <2, 1>, <2, 2> }⟩");
    /// let b = Accordance::build(Build::AdjacencyList(vec![vec![7], vec![], vec![7, 8]])).unwrap();
    /// assert_eq!(b.to_string(), "⟨{ 1, 2, 3 }, { 7, 8 }, { <1, 7>, <3, 7>, <3, 8> }⟩");
    /// let c = Accordance::build(Build::Explicit {
    ///     departure_area: vec![2, 1, 2],
    ///     arrival_area: vec![5],
    ///     graph: vec![(1, 5), (1, 5)],
    /// }).unwrap();
    /// assert_eq!(c.to_string(), "⟨{ 1, 2 }, { 5 }, { <1, 5> }⟩");
    /// ```
    pub fn build(request: Build) -> Result<Self, Error> {
        let (departure_area, arrival_area, graph) = match request {
            Build::Explicit {
                departure_area,
                arrival_area,
                graph,
            } => (departure_area, arrival_area, graph),
            Build::Matrix(matrix) => {
                let mut departure_area = Vec::new();
                let mut arrival_area = Vec::new();
                let mut graph = Vec::new();
                for ((i, j), _) in matrix.indexed_iter().filter(|(_, cell)| **cell) {
                    let (x, y) = (ordinal(i)?, ordinal(j)?);
                    departure_area.push(x);
                    arrival_area.push(y);
                    graph.push((x, y));
                }
                (departure_area, arrival_area, graph)
            }
            Build::AdjacencyList(rows) => {
                let mut departure_area = Vec::with_capacity(rows.len());
                let mut graph = Vec::new();
                for (i, row) in rows.iter().enumerate() {
                    let x = ordinal(i)?;
                    departure_area.push(x);
                    graph.extend(row.iter().map(|&y| (x, y)));
                }
                let arrival_area = rows.into_iter().flatten().collect::<Vec<_>>();
                (departure_area, arrival_area, graph)
            }
        };
        Ok(Self::new(
            Set::new(departure_area),
            Set::new(arrival_area),
            Relation::new(graph),
        ))
    }

    /// The departure area X.
    #[must_use]
    pub const fn departure_area(&self) -> &Set<Element> {
        &self.departure_area
    }

    /// The arrival area Y.
    #[must_use]
    pub const fn arrival_area(&self) -> &Set<Element> {
        &self.arrival_area
    }

    /// The graph G.
    #[must_use]
    pub const fn graph(&self) -> &Relation<Element> {
        &self.graph
    }

    /// Every element of X actually related to something, i.e. the first components of G.
    #[must_use]
    pub fn definition_area(&self) -> Set<Element> {
        self.graph.domain()
    }

    /// Every element of Y actually related to, i.e. the second components of G.
    #[must_use]
    pub fn value_area(&self) -> Set<Element> {
        self.graph.range()
    }

    /// Is the definition area the whole departure area?
    #[must_use]
    pub fn is_everywhere_defined(&self) -> bool {
        self.definition_area() == self.departure_area
    }

    /// Is the value area the whole arrival area?
    #[must_use]
    pub fn is_surjective(&self) -> bool {
        self.value_area() == self.arrival_area
    }

    /// Does every departure element relate to at most one arrival element?
    #[must_use]
    pub fn is_functional(&self) -> bool {
        self.graph.iter().map(|(x, _)| x).all_unique()
    }

    /// Is every arrival element related to by at most one departure element?
    #[must_use]
    pub fn is_injective(&self) -> bool {
        self.graph.iter().map(|(_, y)| y).all_unique()
    }

    /// Is this a mapping of X into Y (everywhere defined and functional)?
    #[must_use]
    pub fn is_mapping_in(&self) -> bool {
        self.is_everywhere_defined() && self.is_functional()
    }

    /// Is this a mapping of X onto Y (a surjective mapping into Y)?
    #[must_use]
    pub fn is_mapping_to(&self) -> bool {
        self.is_mapping_in() && self.is_surjective()
    }

    /// Is this one-to-one (functional and injective)?
    #[must_use]
    pub fn is_one_to_one(&self) -> bool {
        self.is_functional() && self.is_injective()
    }

    /// Is this a bijection of X and Y?
    ///
    /// # Examples
    ///
    /// ```
    /// use correspondences::{Accordance, Build};
    /// assert!(Accordance::default().is_bijection());
    /// let swap = Accordance::build(Build::AdjacencyList(vec![vec![2], vec![1]])).unwrap();
    /// assert!(swap.is_bijection());
    /// ```
    #[must_use]
    pub fn is_bijection(&self) -> bool {
        self.is_everywhere_defined()
            && self.is_surjective()
            && self.is_functional()
            && self.is_injective()
    }

    /// Does the graph lie inside X × Y?
    #[must_use]
    pub fn is_closed(&self) -> bool {
        self.graph
            .iter()
            .all(|(x, y)| self.departure_area.contains(x) && self.arrival_area.contains(y))
    }

    /// The image Γ(A) of a set A.
    ///
    /// # Examples
    ///
    /// ```
    /// use correspondences::{Accordance, Relation, Set};
    /// let g = Accordance::new(
    ///     Set::from([1, 2]),
    ///     Set::from([10, 11, 12]),
    ///     Relation::from([(1, 10), (1, 11), (2, 12)]),
    /// );
    /// assert_eq!(g.find_image(&Set::from([1])).to_string(), "{ 10, 11 }");
    /// assert_eq!(g.find_prototype(&Set::from([12])).to_string(), "{ 2 }");
    /// ```
    #[must_use]
    pub fn find_image(&self, subset: &Set<Element>) -> Set<Element> {
        self.graph.image(subset)
    }

    /// The preimage Γ⁻¹(B) of a set B.
    #[must_use]
    pub fn find_prototype(&self, subset: &Set<Element>) -> Set<Element> {
        self.graph.preimage(subset)
    }

    /// Every classification predicate at once.
    #[must_use]
    pub fn profile(&self) -> Profile {
        let everywhere_defined = self.is_everywhere_defined();
        let surjective = self.is_surjective();
        let functional = self.is_functional();
        let injective = self.is_injective();
        Profile {
            everywhere_defined,
            surjective,
            functional,
            injective,
            mapping_in: everywhere_defined && functional,
            mapping_to: everywhere_defined && functional && surjective,
            one_to_one: functional && injective,
            bijection: everywhere_defined && surjective && functional && injective,
        }
    }
}

impl Display for Accordance {
    fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
        write!(
            f,
            "⟨{}, {}, {}⟩",
            self.departure_area, self.arrival_area, self.graph
        )
    }
}

impl Debug for Accordance {
    fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
        // Reuse Display cuz it's nice
        Display::fmt(self, f)
    }
}

impl TryFrom<Build> for Accordance {
    type Error = Error;
    fn try_from(request: Build) -> Result<Self, Self::Error> {
        Self::build(request)
    }
}

/// The answers to every classification predicate of a correspondence.
#[derive(Debug, PartialEq, Eq, Clone, Copy, Default)]
#[allow(clippy::struct_excessive_bools)]
pub struct Profile {
    /// [`Accordance::is_everywhere_defined`]
    pub everywhere_defined: bool,
    /// [`Accordance::is_surjective`]
    pub surjective: bool,
    /// [`Accordance::is_functional`]
    pub functional: bool,
    /// [`Accordance::is_injective`]
    pub injective: bool,
    /// [`Accordance::is_mapping_in`]
    pub mapping_in: bool,
    /// [`Accordance::is_mapping_to`]
    pub mapping_to: bool,
    /// [`Accordance::is_one_to_one`]
    pub one_to_one: bool,
    /// [`Accordance::is_bijection`]
    pub bijection: bool,
}

/// Errors that can arise when building correspondences.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// A set error occurred: {0}
    #[error("A set error occurred: {0}")]
    Set(#[from] SetError),
    /// Row {`row`} of the matrix has {`len`} cells, expected {`expected`}.
    #[error("Row {row} of the matrix has {len} cells, expected {expected}.")]
    RaggedMatrix {
        /// The offending row
        row: usize,
        /// Its length
        len: usize,
        /// The length of the first row
        expected: usize,
    },
    /// Index {`index`} is too large to number an element.
    #[error("Index {index} is too large to number an element.")]
    IndexOverflow {
        /// The row or column index
        index: usize,
    },
    /// The matrix could not be shaped: {0}
    #[error("The matrix could not be shaped: {0}")]
    Shape(#[from] ndarray::ShapeError),
}

/// `proptest` strategies for generating arbitrary correspondences.
#[cfg(test)]
pub(crate) mod strategies {
    use super::*;
    use crate::{relation::strategies as rs, set::strategies as ss};
    use itertools::iproduct;
    use proptest::prelude::*;

    pub fn element() -> impl Strategy<Value = Element> + Clone {
        -6..6 as Element
    }

    /// Anything the explicit constructor accepts, closed or not.
    pub fn accordances() -> impl Strategy<Value = Accordance> {
        (
            ss::sets(element()),
            ss::sets(element()),
            rs::relations(element()),
        )
            .prop_map(|(x, y, g)| Accordance::new(x, y, g))
    }

    /// Correspondences whose graph lies inside X × Y.
    pub fn closed() -> impl Strategy<Value = Accordance> {
        (ss::sets(element()), ss::sets(element())).prop_flat_map(|(x, y)| {
            let pairs = iproduct!(x.iter().copied(), y.iter().copied()).collect::<Vec<_>>();
            let n = pairs.len();
            (
                Just(x),
                Just(y),
                proptest::sample::subsequence(pairs, 0..=n),
            )
                .prop_map(|(x, y, g)| Accordance::new(x, y, Relation::new(g)))
        })
    }

    pub fn matrices() -> impl Strategy<Value = Array2<bool>> {
        (0..6usize, 0..6usize).prop_flat_map(|(n, m)| {
            proptest::collection::vec(any::<bool>(), n * m).prop_map(move |cells| {
                Array2::from_shape_vec((n, m), cells).unwrap_or_else(|_| Array2::default((0, 0)))
            })
        })
    }

    pub fn adjacency_lists() -> impl Strategy<Value = Vec<Vec<Element>>> {
        proptest::collection::vec(proptest::collection::vec(element(), 0..5), 0..6)
    }
}
