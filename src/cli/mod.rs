// CLI module for oai2gemini

use clap::Parser;

/// oai2gemini - OpenAI-compatible gateway for the Google Generative Language API
#[derive(Parser, Debug)]
#[command(name = "oai2gemini", version, about, long_about = None)]
pub struct Args {
    /// Bind address, overrides the configured server host
    #[arg(long)]
    pub host: Option<String>,

    /// Listen port, overrides the configured server port
    #[arg(long, short)]
    pub port: Option<u16>,
}
