//! Operations on graphs, i.e. binary relations over the integers.
use correspondences::console::{Error, graphs};

fn main() -> Result<(), Error> {
    graphs::run(std::io::stdin().lock(), std::io::stdout().lock())
}
