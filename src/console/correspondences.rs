//! The correspondence session: build correspondences from any of their raw forms, then combine,
//! classify and query them.
use super::{Error, Prompter, farewell};
use crate::{
    accordance::{Accordance, Build},
    generator::Generator,
    set::{Element, Set},
};
use itertools::Itertools;
use std::io::{BufRead, Write};

const MENU: &str = "Choose an operation:\n\
    1. Union of correspondences.\n\
    2. Intersection of correspondences.\n\
    3. Difference of correspondences.\n\
    4. Inversion of a correspondence.\n\
    5. Composition of correspondences.\n\
    6. Everything about a correspondence.\n\
    7. Image of a set under a correspondence.\n\
    8. Preimage of a set under a correspondence.\n\
    Any other number ends the program.\n";

/// Run the session.
///
/// # Errors
///
/// If reading or writing fails.
pub fn run<R: BufRead, W: Write>(input: R, output: W) -> Result<(), Error> {
    let mut prompter = Prompter::new(input, output);
    let outcome = session(&mut prompter);
    farewell(&mut prompter, outcome, "Leaving the program...")
}

fn session<R: BufRead, W: Write>(p: &mut Prompter<R, W>) -> Result<(), Error> {
    loop {
        match p.choice(MENU)? {
            Some(1) => {
                let c = accordance(p, "A")? | accordance(p, "B")?;
                p.say("The union of correspondences A and B is the correspondence C.")?;
                report(p, "C", &c)?;
            }
            Some(2) => {
                let c = accordance(p, "A")? & accordance(p, "B")?;
                p.say("The intersection of correspondences A and B is the correspondence C.")?;
                report(p, "C", &c)?;
            }
            Some(3) => {
                let c = accordance(p, "A")? - accordance(p, "B")?;
                p.say("The difference of correspondences A and B is the correspondence C.")?;
                report(p, "C", &c)?;
            }
            Some(4) => {
                let b = accordance(p, "A")?.inverse();
                p.say("The inversion of correspondence A is the correspondence B.")?;
                report(p, "B", &b)?;
            }
            Some(5) => {
                let c = accordance(p, "A")? >> accordance(p, "B")?;
                p.say("The composition of correspondences A and B is the correspondence C.")?;
                report(p, "C", &c)?;
            }
            Some(6) => {
                let a = accordance(p, "A")?;
                classify(p, "A", &a)?;
            }
            Some(7) => {
                let gamma = accordance(p, "Γ")?;
                let a = set(p, "A")?;
                p.say("The image of set A under correspondence Γ is the set:")?;
                p.say(gamma.find_image(&a))?;
            }
            Some(8) => {
                let gamma = accordance(p, "Γ")?;
                let b = set(p, "B")?;
                p.say("The preimage of set B under correspondence Γ is the set:")?;
                p.say(gamma.find_prototype(&b))?;
            }
            _ => return Ok(()),
        }
        p.say("")?;
    }
}

/// Ask how correspondence `name` is given, then read it in that form.
fn accordance<R: BufRead, W: Write>(
    p: &mut Prompter<R, W>,
    name: &str,
) -> Result<Accordance, Error> {
    let menu = format!(
        "Choose how to give correspondence {name}:\n\
        1. Explicitly, as a departure area X, an arrival area Y and a graph.\n\
        2. As a matrix.\n\
        3. As an adjacency list.\n"
    );
    let request = match p.option(menu, 1..=3)? {
        1 => {
            let departure_area = set(p, "X")?.into_vec();
            let arrival_area = set(p, "Y")?.into_vec();
            let graph = p.relation(name)?.into_iter().collect();
            Build::Explicit {
                departure_area,
                arrival_area,
                graph,
            }
        }
        2 => {
            let n = p.count("Enter the number of rows of the matrix: ")?;
            let m = p.count("Enter the number of columns of the matrix: ")?;
            p.ask("Enter the matrix row by row:\n")?;
            let rows = (0..n)
                .map(|_| {
                    (0..m)
                        .map(|_| -> Result<bool, Error> { Ok(p.integer()? != 0) })
                        .collect::<Result<Vec<_>, Error>>()
                })
                .collect::<Result<Vec<_>, Error>>()?;
            Build::matrix_from_rows(rows)?
        }
        _ => {
            let n = p.count("Enter the number of elements of the departure area: ")?;
            let rows = (1..=n)
                .map(|i| {
                    let k = p.count(format_args!(
                        "Enter how many arrival elements element {i} is related to: "
                    ))?;
                    p.ask(format_args!("Enter the arrival elements of element {i}:\n"))?;
                    p.integers(k)
                })
                .collect::<Result<Vec<_>, Error>>()?;
            Build::AdjacencyList(rows)
        }
    };
    Ok(Accordance::build(request)?)
}

/// Ask how set `name` is given, then read or generate it.
fn set<R: BufRead, W: Write>(p: &mut Prompter<R, W>, name: &str) -> Result<Set<Element>, Error> {
    let menu = format!(
        "Choose how to give set {name}:\n\
        1. By listing its elements.\n\
        2. By a property of its elements.\n"
    );
    if p.option(menu, 1..=2)? == 1 {
        return p.set(name);
    }
    let menu = format!(
        "Choose the property of the elements of set {name}:\n{}\n",
        Generator::ALL
            .iter()
            .enumerate()
            .format_with("\n", |(i, g), f| f(&format_args!("{}. {g}.", i + 1)))
    );
    loop {
        let choice = p.option(&menu, 1..=4)?;
        let Some(&generator) = usize::try_from(choice - 1)
            .ok()
            .and_then(|i| Generator::ALL.get(i))
        else {
            continue;
        };
        p.ask("Enter a: ")?;
        let a = p.integer()?;
        p.ask("Enter b: ")?;
        let b = p.integer()?;
        match generator.generate(a, b) {
            Ok(s) => return Ok(s),
            Err(e) => p.say(e)?,
        }
    }
}

/// The two areas and the graph.
fn report<R: BufRead, W: Write>(
    p: &mut Prompter<R, W>,
    name: &str,
    a: &Accordance,
) -> Result<(), Error> {
    p.say(format_args!("Departure area of {name}: {}", a.departure_area()))?;
    p.say(format_args!("Arrival area of {name}: {}", a.arrival_area()))?;
    p.say(format_args!("Graph of {name}: {}", a.graph()))
}

/// The report, the derived areas and every classification answer.
fn classify<R: BufRead, W: Write>(
    p: &mut Prompter<R, W>,
    name: &str,
    a: &Accordance,
) -> Result<(), Error> {
    report(p, name, a)?;
    p.say(format_args!("Definition area of {name}: {}", a.definition_area()))?;
    p.say(format_args!("Value area of {name}: {}", a.value_area()))?;
    let profile = a.profile();
    let answers = [
        (profile.everywhere_defined, "everywhere defined"),
        (profile.surjective, "surjective"),
        (profile.functional, "functional"),
        (profile.injective, "injective"),
        (profile.mapping_in, "a mapping of X into Y"),
        (profile.mapping_to, "a mapping of X onto Y"),
        (profile.one_to_one, "one-to-one"),
        (profile.bijection, "a bijection"),
    ];
    for (i, (holds, property)) in answers.into_iter().enumerate() {
        let not = if holds { "" } else { "not " };
        p.say(format_args!("{}. {name} is {not}{property}.", i + 1))?;
    }
    p.say("(X is the departure area, Y is the arrival area.)")
}
