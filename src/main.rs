// src/main.rs
use anyhow::Result;
use clap::Parser;
use gradecalc::logging::init_tracing;
use gradecalc::{Args, run};

fn main() -> Result<()> {
    init_tracing();
    run(Args::parse())
}
