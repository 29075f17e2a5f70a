//! CLI entry point for the Aztec diamond growth-diagram sampler

use aztec_growth::io::cli::{Cli, SampleRunner};
use clap::Parser;

fn main() -> aztec_growth::Result<()> {
    let cli = Cli::parse();
    let mut runner = SampleRunner::new(cli);
    runner.process()
}
