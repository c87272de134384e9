// CLI module for img2text

use clap::Parser;

/// img2text - image description relay over the Pollinations API
#[derive(Parser, Debug)]
#[command(name = "img2text", version, about, long_about = None)]
pub struct Args {
    /// Path to a TOML configuration file
    #[arg(long, env = "IMG2TEXT_CONFIG")]
    pub config: Option<String>,
}
