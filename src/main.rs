//! imctl - browse an instance manager's stack catalogue
//!
//! This is the binary entry point. All logic lives in the library.

use clap::Parser;
use imctl::cli::Args;

#[tokio::main]
async fn main() -> color_eyre::Result<()> {
    color_eyre::install()?;

    let args = Args::parse();
    imctl::run(args).await?;
    Ok(())
}
