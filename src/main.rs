//! Shelfwalk main entry point
//!
//! This is the command-line interface for the Shelfwalk related-products crawler.

use anyhow::Context;
use clap::Parser;
use shelfwalk::config::{load_config_with_hash, validate, Config};
use shelfwalk::crawler::run_crawl;
use shelfwalk::output::print_report;
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

/// Shelfwalk: a related-products crawler
///
/// Shelfwalk starts from one product's recommendation page, follows the
/// recommendations of every product it finds until none are left, and writes
/// all discovered products into a single HTML file.
#[derive(Parser, Debug)]
#[command(name = "shelfwalk")]
#[command(version)]
#[command(about = "A related-products crawler", long_about = None)]
struct Cli {
    /// Path to TOML configuration file (built-in defaults when omitted)
    #[arg(value_name = "CONFIG")]
    config: Option<PathBuf>,

    /// Increase logging verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Suppress non-error output
    #[arg(short, long, conflicts_with = "verbose")]
    quiet: bool,

    /// Start from this product id instead of the configured seed
    #[arg(long, value_name = "ID")]
    seed: Option<String>,

    /// Write the rendered products here instead of the configured path
    #[arg(short, long, value_name = "PATH")]
    output: Option<PathBuf>,

    /// Validate config and show where the crawl would start without crawling
    #[arg(long)]
    dry_run: bool,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    setup_logging(cli.verbose, cli.quiet);

    let (mut config, config_hash) = match &cli.config {
        Some(path) => {
            tracing::info!("Loading configuration from: {}", path.display());
            let (config, hash) = load_config_with_hash(path)
                .with_context(|| format!("failed to load {}", path.display()))?;
            tracing::info!("Configuration loaded successfully (hash: {})", hash);
            (config, Some(hash))
        }
        None => {
            tracing::info!("No configuration file given, using built-in defaults");
            (Config::default(), None)
        }
    };

    apply_overrides(&mut config, &cli)?;

    if cli.dry_run {
        handle_dry_run(&config);
        return Ok(());
    }

    let report = match run_crawl(&config, config_hash).await {
        Ok(report) => {
            tracing::info!("Crawl completed successfully");
            report
        }
        Err(e) => {
            tracing::error!("Crawl failed: {}", e);
            return Err(e.into());
        }
    };

    if !cli.quiet {
        print_report(&report);
    }

    Ok(())
}

/// Sets up the logging/tracing subscriber based on verbosity level
fn setup_logging(verbose: u8, quiet: bool) {
    let filter = if quiet {
        EnvFilter::new("error")
    } else {
        match verbose {
            0 => EnvFilter::new("shelfwalk=info,warn"),
            1 => EnvFilter::new("shelfwalk=debug,info"),
            2 => EnvFilter::new("shelfwalk=trace,debug"),
            _ => EnvFilter::new("trace"),
        }
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_thread_ids(false)
        .with_file(false)
        .init();
}

/// Applies command-line overrides and re-validates the result
fn apply_overrides(config: &mut Config, cli: &Cli) -> anyhow::Result<()> {
    if let Some(seed) = &cli.seed {
        tracing::info!("Overriding seed product with {}", seed);
        config.seed.product_id = seed.clone();
    }

    if let Some(output) = &cli.output {
        config.output.html_path = output.display().to_string();
    }

    validate(config).context("invalid configuration after command-line overrides")?;
    Ok(())
}

/// Handles the --dry-run mode: shows what would be crawled
fn handle_dry_run(config: &Config) {
    println!("=== Shelfwalk Dry Run ===\n");

    println!("Seed:");
    println!("  Product id: {}", config.seed.product_id);
    println!("  First URL: {}", config.seed_url());

    println!("\nSite:");
    println!("  Origin: {}", config.site.origin);
    println!(
        "  Recommendation template: {}",
        config.site.recommendation_url_template
    );

    println!("\nUser Agent:");
    println!("  {}", config.user_agent.header_value());

    println!("\nHTTP:");
    println!("  Request timeout: {}s", config.http.request_timeout_secs);
    println!("  Connect timeout: {}s", config.http.connect_timeout_secs);

    let markup = &config.markup;
    println!("\nProduct cards:");
    println!(
        "  Container: <{}> with classes {:?}",
        markup.container_tag, markup.container_classes
    );
    println!(
        "  Link: <{}.{}>, id from '{}' after '{}'",
        markup.anchor_tag, markup.anchor_class, markup.id_attribute, markup.id_prefix
    );
    println!("  Price: <{}.{}>", markup.price_tag, markup.price_class);
    println!(
        "  Image: <{}.{}> via '{}'",
        markup.image_tag, markup.image_class, markup.image_fallback_attribute
    );

    println!("\nOutput:");
    println!("  File: {}", config.output.html_path);
    println!("  Escape HTML: {}", config.output.escape_html);

    println!("\n✓ Configuration is valid");
}
