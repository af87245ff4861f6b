//! The set-operations session: two sets, then any number of operations on them.
use super::{Error, Prompter, farewell};
use crate::{
    set::{Element, Set},
    universe::Universe,
};
use std::io::{BufRead, Write};

const MENU: &str = "Choose an operation on the sets (a number from 1 to 5):\n\
    1. Union.\n\
    2. Intersection.\n\
    3. Difference.\n\
    4. Symmetric difference.\n\
    5. Complement to the universe.\n\
    Any other number ends the program.\n";

/// Run the session with the default universe [1, 100].
///
/// # Errors
///
/// If reading or writing fails.
pub fn run<R: BufRead, W: Write>(input: R, output: W) -> Result<(), Error> {
    run_with(input, output, Universe::default())
}

/// Run the session, taking complements against `universe`.
///
/// # Errors
///
/// If reading or writing fails.
pub fn run_with<R: BufRead, W: Write>(
    input: R,
    output: W,
    universe: Universe,
) -> Result<(), Error> {
    let mut prompter = Prompter::new(input, output);
    let outcome = session(&mut prompter, universe);
    farewell(&mut prompter, outcome, "The program has finished!")
}

fn session<R: BufRead, W: Write>(
    p: &mut Prompter<R, W>,
    universe: Universe,
) -> Result<(), Error> {
    let x = p.set("X")?;
    let y = p.set("Y")?;
    loop {
        match p.choice(MENU)? {
            Some(1) => p.say(format_args!("Union of X and Y: {}\n", &x | &y))?,
            Some(2) => p.say(format_args!("Intersection of X and Y: {}\n", &x & &y))?,
            Some(3) => {
                p.say(format_args!("Difference of X and Y: {}", &x - &y))?;
                p.say(format_args!("Difference of Y and X: {}\n", &y - &x))?;
            }
            Some(4) => p.say(format_args!(
                "Symmetric difference of X and Y: {}\n",
                &x ^ &y
            ))?,
            Some(5) => {
                complement(p, "X", &x, universe)?;
                complement(p, "Y", &y, universe)?;
                p.say("")?;
            }
            _ => return Ok(()),
        }
    }
}

fn complement<R: BufRead, W: Write>(
    p: &mut Prompter<R, W>,
    name: &str,
    s: &Set<Element>,
    universe: Universe,
) -> Result<(), Error> {
    p.say(format_args!(
        "Complement of {name} to the universe {universe}: {}",
        universe.complement(s)
    ))
}
