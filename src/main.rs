//! qrgen binary entrypoint

use clap::Parser;
use qrgen::config::{DEFAULT_URL, QrgenConfig};
use qrgen::{logging, outdir, qr};
use tracing::{error, info};

#[derive(Parser, Debug)]
#[command(name = "qrgen", version, about = "Generate a QR code image for a URL")]
struct Cli {
    /// URL to encode; a fixed default is used when omitted
    #[arg(long, value_name = "URL")]
    url: Option<String>,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let config = QrgenConfig::load()?;
    let guard = logging::init(&config.logging)?;

    let url = cli.url.as_deref().unwrap_or(DEFAULT_URL);
    info!("Generating QR code for {url}");

    if let Err(e) = outdir::create_directory(&config.output.directory) {
        error!("{e}");
        // Drop the guard first so the failure reaches the log file.
        drop(guard);
        std::process::exit(1);
    }

    qr::generate_qr_code(url, &config.output_path());
    Ok(())
}
