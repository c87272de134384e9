// describe - one-shot image description from the command line

use anyhow::{Context, Result};
use clap::Parser;
use img2text::config::AppConfig;
use img2text::models::ModelRegistry;
use img2text::pollinations::PollinationsClient;
use img2text::{utils::logging, vision};

/// Describe a single image without running the HTTP server
#[derive(Parser, Debug)]
#[command(name = "describe", version, about, long_about = None)]
struct Args {
    /// Image to describe: an http(s) URL, a data: URL, or a local file path
    image: String,

    /// Instruction for the model
    #[arg(long)]
    prompt: Option<String>,

    /// Model alias (gemini, openai, openai-large, or a configured alias)
    #[arg(long)]
    model: Option<String>,

    /// Path to a TOML configuration file
    #[arg(long, env = "IMG2TEXT_CONFIG")]
    config: Option<String>,
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();

    let config = AppConfig::load(args.config.as_deref())?;
    logging::init(&config.logging)?;

    let reference = if vision::looks_like_image_reference(&args.image) {
        args.image.clone()
    } else {
        // Anything that is not a URL is treated as a local file and inlined
        let bytes = std::fs::read(&args.image)
            .with_context(|| format!("failed to read {}", args.image))?;
        vision::validate_image_size(bytes.len()).map_err(anyhow::Error::msg)?;
        let mime = vision::detect_mime_type(&bytes)
            .context("file does not appear to be an image")?;
        vision::to_data_url(mime, &bytes)
    };

    let registry = ModelRegistry::from_config(&config.upstream);
    let client = PollinationsClient::new(&config.upstream, registry)?;

    let prompt = args
        .prompt
        .unwrap_or_else(|| config.upstream.default_prompt.clone());
    let alias = args
        .model
        .unwrap_or_else(|| config.upstream.default_model.clone());

    let description = client.describe_image(&reference, &prompt, &alias).await?;
    println!("{}", description);

    Ok(())
}
