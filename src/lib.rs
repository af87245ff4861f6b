#![forbid(missing_docs)]
#![forbid(unsafe_code)]
#![doc = include_str!("../README.md")]
pub mod accordance;
pub mod algebra;
pub mod console;
pub mod generator;
mod macros;
pub mod relation;
pub mod set;
pub mod universe;

pub use accordance::{Accordance, Build, Profile};
pub use generator::Generator;
pub use relation::Relation;
pub use set::{Element, Set};
pub use universe::Universe;
