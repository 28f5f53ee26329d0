use anyhow::Result;
use clap::Parser;
use codicon_cli::cli::Cli;
use env_logger::init;

fn main() -> Result<()> {
    init();
    Cli::parse().run()
}
