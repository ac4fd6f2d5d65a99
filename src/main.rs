//! Client entrypoint for the CSR build.

// Bin target reuses lib deps, silence noisy lint.
#![allow(unused_crate_dependencies)]

use portfolio_fx::{init_logging, run};

fn main() {
	init_logging();
	run();
}
