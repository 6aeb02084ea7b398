//! docwiki CLI — turns a provider documentation site into a Markdown wiki.
//!
//! Each provider's navigation sidebar becomes an index page plus one page per
//! top-level section, all cross-linked.

mod commands;

use clap::Parser;
use color_eyre::eyre::Result;

use commands::Cli;

#[tokio::main]
async fn main() -> Result<()> {
    color_eyre::install()?;
    let cli = Cli::parse();
    commands::init_tracing(&cli);
    commands::run(cli).await
}
