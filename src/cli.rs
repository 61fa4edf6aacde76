use clap::Parser;

#[derive(Parser)]
#[command(name = "iconforge")]
#[command(
    author,
    version,
    about = "Generate 16-128px PNG icons from public/icon-192.png"
)]
pub struct Cli {
    /// Enable verbose logging
    #[arg(short, long)]
    pub verbose: bool,
}
