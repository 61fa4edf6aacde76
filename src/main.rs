mod cli;

use anyhow::{Context, Result};
use clap::Parser;
use cli::Cli;
use iconforge::{GeneratorConfig, IconGenerator};

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Respect RUST_LOG env var if set, otherwise stay quiet unless verbose
    let env_filter = std::env::var("RUST_LOG").unwrap_or_else(|_| {
        if cli.verbose {
            "iconforge=debug".to_string()
        } else {
            "iconforge=warn".to_string()
        }
    });

    tracing_subscriber::fmt()
        .with_env_filter(&env_filter)
        .with_writer(std::io::stderr)
        .init();

    // Paths stay relative so confirmation lines read `public/icons/...`
    let generator = IconGenerator::new(GeneratorConfig::default());

    generator.run().context("Icon generation failed")?;

    Ok(())
}
