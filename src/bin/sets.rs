//! Operations on two sets of integers.
use correspondences::console::{Error, sets};

fn main() -> Result<(), Error> {
    sets::run(std::io::stdin().lock(), std::io::stdout().lock())
}
