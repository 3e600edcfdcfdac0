use anyhow::Result;
use clap::Parser;
use conllx_utils::commands::ToConllxArgs;

fn main() -> Result<()> {
    ToConllxArgs::parse().execute()
}
