//! # gallery-render
//!
//! Renders the gallery page from a site content JSON file.
//!
//! ## Usage
//!
//! ```bash
//! # Full page to a file
//! gallery-render --content content.json --out public/gallery/index.html
//!
//! # Sections only, for a host layout, to stdout
//! gallery-render --content content.json --fragment
//!
//! # Use the site's stylesheet instead of the bundled one
//! gallery-render --content content.json --no-inline-styles --stylesheet /assets/site.css
//! ```
//!
//! Logs go to stderr; `RUST_LOG` overrides `--log-level`.

use std::io::Write;
use std::path::{Path, PathBuf};
use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::Parser;
use tracing::{debug, info, warn};

use gallery_leptos::content;
use gallery_leptos::{render_gallery_fragment, render_gallery_page, PageOptions};

// ============================================================================
// CLI Arguments
// ============================================================================

#[derive(Parser, Debug)]
#[command(name = "gallery-render")]
#[command(about = "Render the gallery page from a site content file")]
#[command(version)]
struct Args {
    /// Site content JSON (business, services, optional gallery)
    #[arg(long, short = 'c')]
    content: PathBuf,

    /// Output file (default: stdout)
    #[arg(long, short = 'o')]
    out: Option<PathBuf>,

    /// Emit only the page sections, without <html>/<head>
    #[arg(long)]
    fragment: bool,

    /// External stylesheet to link from <head>
    #[arg(long)]
    stylesheet: Option<String>,

    /// Do not embed the bundled stylesheet
    #[arg(long)]
    no_inline_styles: bool,

    /// Do not embed the category filter script
    #[arg(long)]
    no_script: bool,

    /// Document language
    #[arg(long, default_value = "en")]
    lang: String,

    /// Log level (trace, debug, info, warn, error)
    #[arg(long, default_value = "info")]
    log_level: String,
}

impl Args {
    fn page_options(&self) -> PageOptions {
        PageOptions {
            lang: self.lang.clone(),
            inline_styles: !self.no_inline_styles,
            stylesheet_href: self.stylesheet.clone(),
            filter_script: !self.no_script,
        }
    }
}

// ============================================================================
// Rendering
// ============================================================================

fn render(args: &Args) -> Result<String> {
    let site = content::load(&args.content)
        .with_context(|| format!("Failed to load content from {}", args.content.display()))?;

    let dups = content::duplicate_slugs(&site.services);
    if !dups.is_empty() {
        warn!(slugs = ?dups, "duplicate service slugs; /services links will collide");
    }

    info!(
        business = %site.business.name,
        services = site.services.len(),
        gallery = site.gallery.as_ref().map_or(0, Vec::len),
        "Rendering gallery"
    );

    let html = if args.fragment {
        render_gallery_fragment(&site)
    } else {
        render_gallery_page(&site, &args.page_options())
    };

    Ok(html)
}

fn write_output(out: Option<&Path>, html: &str, stdout: &mut impl Write) -> Result<()> {
    match out {
        Some(path) => {
            if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
                std::fs::create_dir_all(parent)
                    .with_context(|| format!("Failed to create {}", parent.display()))?;
            }
            std::fs::write(path, html)
                .with_context(|| format!("Failed to write {}", path.display()))?;
            info!("Gallery written to {} ({} bytes)", path.display(), html.len());
        }
        None => {
            stdout
                .write_all(html.as_bytes())
                .context("Failed to write to stdout")?;
            stdout.flush().context("Failed to flush stdout")?;
            debug!("Gallery written to stdout ({} bytes)", html.len());
        }
    }
    Ok(())
}

fn run(args: Args) -> Result<()> {
    // Logs MUST go to stderr, stdout may carry the page
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| args.log_level.parse().unwrap_or_default()),
        )
        .init();

    debug!("gallery-render v{}", env!("CARGO_PKG_VERSION"));

    let html = render(&args)?;
    write_output(args.out.as_deref(), &html, &mut std::io::stdout().lock())
}

fn main() -> ExitCode {
    match run(Args::parse()) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("[gallery-render] Error: {:#}", e);
            ExitCode::FAILURE
        }
    }
}
