//! Interactive console sessions.
//!
//! Each session reads whitespace-separated tokens from a [`BufRead`] and writes prompts and
//! results to a [`Write`], so the same code drives a terminal and an in-memory test.
use crate::{
    accordance::Error as AccordanceError,
    relation::Relation,
    set::{Element, Set},
};
use std::{
    collections::VecDeque,
    fmt::Display,
    io::{BufRead, Write},
    ops::RangeInclusive,
};

pub mod correspondences;
pub mod graphs;
pub mod sets;

const NOT_AN_OPTION: &str = "Choose one of the offered options!";

/// Prompts on one end, tokens on the other.
pub struct Prompter<R, W> {
    input: R,
    output: W,
    pending: VecDeque<String>,
}

impl<R: BufRead, W: Write> Prompter<R, W> {
    /// Wrap an input and an output.
    pub fn new(input: R, output: W) -> Self {
        Self {
            input,
            output,
            pending: VecDeque::new(),
        }
    }

    /// Write a line.
    ///
    /// # Errors
    ///
    /// If the output can't be written.
    pub fn say(&mut self, text: impl Display) -> Result<(), Error> {
        writeln!(self.output, "{text}")?;
        Ok(())
    }

    /// Write a prompt without ending the line, and flush it.
    ///
    /// # Errors
    ///
    /// If the output can't be written.
    pub fn ask(&mut self, text: impl Display) -> Result<(), Error> {
        write!(self.output, "{text}")?;
        self.output.flush()?;
        Ok(())
    }

    /// The next whitespace-separated token.
    fn token(&mut self) -> Result<String, Error> {
        loop {
            if let Some(token) = self.pending.pop_front() {
                return Ok(token);
            }
            let mut line = String::new();
            if self.input.read_line(&mut line)? == 0 {
                return Err(Error::EndOfInput);
            }
            self.pending
                .extend(line.split_whitespace().map(str::to_owned));
        }
    }

    /// Show a menu and read the answer; `None` if the answer is not an integer.
    ///
    /// # Errors
    ///
    /// On I/O failure or end of input.
    pub fn choice(&mut self, menu: impl Display) -> Result<Option<i64>, Error> {
        self.ask(menu)?;
        Ok(self.token()?.parse().ok())
    }

    /// Show a menu until one of the options in `options` is picked.
    ///
    /// # Errors
    ///
    /// On I/O failure or end of input.
    pub fn option(
        &mut self,
        menu: impl Display,
        options: RangeInclusive<i64>,
    ) -> Result<i64, Error> {
        loop {
            match self.choice(&menu)? {
                Some(n) if options.contains(&n) => return Ok(n),
                _ => self.say(NOT_AN_OPTION)?,
            }
        }
    }

    /// Read an integer, asking again on anything else.
    ///
    /// # Errors
    ///
    /// On I/O failure or end of input.
    pub fn integer(&mut self) -> Result<Element, Error> {
        loop {
            match self.token()?.parse() {
                Ok(n) => return Ok(n),
                Err(_) => self.say("Please enter an integer.")?,
            }
        }
    }

    /// Prompt for a non-negative integer, asking again on anything else.
    ///
    /// # Errors
    ///
    /// On I/O failure or end of input.
    pub fn count(&mut self, prompt: impl Display) -> Result<usize, Error> {
        self.ask(prompt)?;
        loop {
            match self.token()?.parse() {
                Ok(n) => return Ok(n),
                Err(_) => self.say("Please enter a non-negative integer.")?,
            }
        }
    }

    /// Read `n` integers.
    ///
    /// # Errors
    ///
    /// On I/O failure or end of input.
    pub fn integers(&mut self, n: usize) -> Result<Vec<Element>, Error> {
        (0..n).map(|_| self.integer()).collect()
    }

    /// Read a set as its cardinality followed by its elements. Repeats are dropped.
    ///
    /// # Errors
    ///
    /// On I/O failure or end of input.
    pub fn set(&mut self, name: &str) -> Result<Set<Element>, Error> {
        let n = self.count(format_args!(
            "Enter the size of set {name} (repeated elements are dropped): "
        ))?;
        self.ask(format_args!("Enter set {name}:\n"))?;
        Ok(Set::new(self.integers(n)?))
    }

    /// Read a graph as its size followed by that many pairs. Repeats are dropped.
    ///
    /// # Errors
    ///
    /// On I/O failure or end of input.
    pub fn relation(&mut self, name: &str) -> Result<Relation<Element>, Error> {
        let n = self.count(format_args!(
            "Enter the size of graph {name} (repeated pairs are dropped): "
        ))?;
        self.ask(format_args!("Enter graph {name} pair by pair:\n"))?;
        let pairs = (0..n)
            .map(|_| -> Result<_, Error> { Ok((self.integer()?, self.integer()?)) })
            .collect::<Result<Vec<_>, Error>>()?;
        Ok(Relation::new(pairs))
    }

    /// Give up the prompter, keeping the output.
    pub fn into_output(self) -> W {
        self.output
    }
}

/// Finish a session: end of input counts as quitting.
fn farewell<R: BufRead, W: Write>(
    prompter: &mut Prompter<R, W>,
    outcome: Result<(), Error>,
    message: &str,
) -> Result<(), Error> {
    match outcome {
        Ok(()) | Err(Error::EndOfInput) => prompter.say(message),
        Err(e) => Err(e),
    }
}

/// Errors that can end a console session.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// An I/O error occurred: {0}
    #[error("An I/O error occurred: {0}")]
    Io(#[from] std::io::Error),
    /// The input ended before the session did.
    #[error("The input ended before the session did.")]
    EndOfInput,
    /// A correspondence error occurred: {0}
    #[error("A correspondence error occurred: {0}")]
    Accordance(#[from] AccordanceError),
}

#[cfg(test)]
mod tests {
    use super::*;

    fn prompter(input: &str) -> Prompter<&[u8], Vec<u8>> {
        Prompter::new(input.as_bytes(), Vec::new())
    }

    #[test]
    fn tokens_span_lines() {
        let mut p = prompter("1 2\n\n  3\n");
        assert_eq!(p.integers(3).unwrap(), [1, 2, 3]);
        assert!(matches!(p.integer(), Err(Error::EndOfInput)));
    }

    #[test]
    fn integer_asks_again() {
        let mut p = prompter("x 1.5 -4");
        assert_eq!(p.integer().unwrap(), -4);
        let out = String::from_utf8(p.into_output()).unwrap();
        assert_eq!(out.matches("Please enter an integer.").count(), 2);
    }

    #[test]
    fn option_asks_again() {
        let mut p = prompter("0 abc 3 2");
        assert_eq!(p.option("menu\n", 1..=2).unwrap(), 2);
        let out = String::from_utf8(p.into_output()).unwrap();
        assert_eq!(out.matches(NOT_AN_OPTION).count(), 3);
        assert_eq!(out.matches("menu").count(), 4);
    }

    #[test]
    fn set_and_relation() {
        let mut p = prompter("4 3 1 3 2\n3\n1 2 1 2\n0 0\n");
        assert_eq!(p.set("X").unwrap(), Set::from([1, 2, 3]));
        assert_eq!(p.relation("P").unwrap().to_string(), "{ <0, 0>, <1, 2> }");
    }

    #[test]
    fn count_rejects_negative() {
        let mut p = prompter("-1 2");
        assert_eq!(p.count("n: ").unwrap(), 2);
    }
}
