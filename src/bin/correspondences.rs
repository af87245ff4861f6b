//! Building, combining and classifying correspondences.
use correspondences::console::{self, Error};

fn main() -> Result<(), Error> {
    console::correspondences::run(std::io::stdin().lock(), std::io::stdout().lock())
}
