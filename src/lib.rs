//! qrgen - QR code generation for URLs
//!
//! This library backs the `qrgen` command-line tool: it validates a URL,
//! ensures an output directory exists, renders a QR code with a fixed visual
//! configuration, and saves it as an image file.
//!
//! # Example
//!
//! ```no_run
//! use qrgen::QrgenConfig;
//!
//! fn main() -> anyhow::Result<()> {
//!     let config = QrgenConfig::default();
//!
//!     qrgen::outdir::create_directory(&config.output.directory)?;
//!     qrgen::generate_qr_code("https://example.com", &config.output_path());
//!     Ok(())
//! }
//! ```

#![warn(missing_docs, rust_2024_compatibility)]

pub mod config;
pub mod error;
pub mod logging;
pub mod outdir;
pub mod qr;
pub mod validate;

// Re-exports for convenience
pub use config::{LogRotation, LoggingOptions, OutputOptions, QrgenConfig};
pub use error::{Error, Result};
pub use qr::generate_qr_code;
pub use validate::is_valid_url;
