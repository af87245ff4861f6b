//! The graph-operations session.
use super::{Error, Prompter, farewell};
use crate::relation::Relation;
use std::io::{BufRead, Write};

const MENU: &str = "Choose an operation (enter its number):\n\
    \t1. Inversion of a graph.\n\
    \t2. Symmetry check of a graph.\n\
    \t3. Diagonal of a set.\n\
    \t4. Composition of graphs.\n\
    \t5. Domain of a graph.\n\
    \t6. Range of a graph.\n\
    Any other number ends the program.\n\
    Operation: ";

/// Run the session.
///
/// # Errors
///
/// If reading or writing fails.
pub fn run<R: BufRead, W: Write>(input: R, output: W) -> Result<(), Error> {
    let mut prompter = Prompter::new(input, output);
    let outcome = session(&mut prompter);
    farewell(&mut prompter, outcome, "Goodbye!")
}

fn session<R: BufRead, W: Write>(p: &mut Prompter<R, W>) -> Result<(), Error> {
    loop {
        match p.choice(MENU)? {
            Some(1) => {
                let q = p.relation("P")?.inversion();
                p.say(format_args!("The inversion of graph P is the graph Q = {q}\n"))?;
            }
            Some(2) => {
                let not = if p.relation("P")?.is_symmetric() {
                    ""
                } else {
                    "not "
                };
                p.say(format_args!("Graph P is {not}symmetric.\n"))?;
            }
            Some(3) => {
                let d = Relation::diagonal(&p.set("M")?);
                p.say(format_args!("The diagonal of set M is the graph {d}\n"))?;
            }
            Some(4) => {
                let left = p.relation("P")?;
                let right = p.relation("Q")?;
                p.say(format_args!(
                    "The composition of P and Q is the graph R = {}",
                    &left >> &right
                ))?;
                p.say(format_args!(
                    "The composition of Q and P is the graph {}\n",
                    &right >> &left
                ))?;
            }
            Some(5) => {
                let d = p.relation("P")?.domain();
                p.say(format_args!("The domain of graph P is the set {d}\n"))?;
            }
            Some(6) => {
                let e = p.relation("P")?.range();
                p.say(format_args!("The range of graph P is the set {e}\n"))?;
            }
            _ => return Ok(()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn transcript(input: &str) -> String {
        let mut out = Vec::new();
        run(input.as_bytes(), &mut out).unwrap();
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn composition_both_ways() {
        let out = transcript("4\n2\n1 2\n2 3\n2\n2 5\n3 6\n9\n");
        assert!(out.contains("The composition of P and Q is the graph R = { <1, 5>, <2, 6> }"));
        assert!(out.contains("The composition of Q and P is the graph { }"));
        assert!(out.ends_with("Goodbye!\n"));
    }

    #[test]
    fn inversion_symmetry_diagonal() {
        let out = transcript("1\n2\n1 2\n3 4\n2\n2\n1 2\n2 1\n2\n1\n1 2\n3\n3\n2 1 2\n");
        assert!(out.contains("Q = { <2, 1>, <4, 3> }"));
        assert!(out.contains("Graph P is symmetric."));
        assert!(out.contains("Graph P is not symmetric."));
        assert!(out.contains("The diagonal of set M is the graph { <1, 1>, <2, 2> }"));
        assert!(out.ends_with("Goodbye!\n"));
    }

    #[test]
    fn domain_and_range() {
        let out = transcript("5\n3\n1 10\n1 11\n2 12\n6\n3\n1 10\n1 11\n2 12\n-1\n");
        assert!(out.contains("The domain of graph P is the set { 1, 2 }"));
        assert!(out.contains("The range of graph P is the set { 10, 11, 12 }"));
    }
}
