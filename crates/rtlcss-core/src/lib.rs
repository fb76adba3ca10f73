//! RTLCSS Core
//!
//! Core engine for generating right-to-left override stylesheets. Given
//! left-to-right stylesheet text, it parses a block tree, expands directional
//! shorthands, and derives an override stylesheet containing only the
//! declarations that need flipping, leaving the original untouched.

pub mod discovery;
pub mod document;
pub mod error;
pub mod exclusions;
pub mod mirror;
pub mod parser;
pub mod result;
pub mod serialize;
pub mod shorthand;
pub mod tokenizer;
pub mod values;

// Re-export commonly used types
pub use document::{Block, Declaration, Document, Node};
pub use error::{ErrorKind, RtlcssError};
pub use exclusions::ExclusionTable;
pub use mirror::{mirror_block, mirror_document};
pub use parser::parse_stylesheet;
pub use result::Result;
pub use serialize::render;

/// Generate the override stylesheet text for a single stylesheet source
///
/// Convenience wrapper over the full pipeline: parse, normalize, mirror,
/// render. The returned text is empty when nothing needed mirroring.
pub fn generate_override(source: &str, exclusions: &ExclusionTable) -> Result<String> {
    let mut document = parser::parse_stylesheet(source)?;
    document.normalize();
    let overrides = mirror::mirror_document(&document, exclusions);
    Ok(serialize::render(&overrides))
}

/// Initialize the tracing subscriber for logging
///
/// Colored output is disabled when `no_color` is set or the `NO_COLOR`
/// environment variable is present.
pub fn init_tracing(verbose: u8, no_color: bool) {
    use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

    let default = match verbose {
        0 => "info",
        1 => "debug",
        _ => "trace",
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));
    let ansi = !no_color && std::env::var_os("NO_COLOR").is_none();

    tracing_subscriber::registry()
        .with(filter)
        .with(
            tracing_subscriber::fmt::layer()
                .with_target(false)
                .with_ansi(ansi)
                .with_writer(std::io::stderr),
        )
        .init();
}

/// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
pub const NAME: &str = env!("CARGO_PKG_NAME");
