use anyhow::Result;
use clap::Parser;
use conllx_utils::commands::DepunctArgs;

fn main() -> Result<()> {
    DepunctArgs::parse().execute()
}
