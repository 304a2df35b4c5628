//! svg-pattern - Tile an image across an SVG canvas.
//!
//! This binary reads the configuration, generates the pattern and writes it
//! to stdout or a file.

use std::io::Write;
use std::process::ExitCode;

use clap::Parser;
use tracing::{debug, error, info};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use svg_pattern::{Config, PatternService, SvgOptimizer};

fn main() -> ExitCode {
    let config = Config::parse();

    // Initialize logging
    init_logging(config.verbose);

    // Validate configuration
    if let Err(e) = config.validate() {
        error!("Configuration error: {}", e);
        return ExitCode::FAILURE;
    }

    let options = match config.pattern_options() {
        Ok(options) => options,
        Err(e) => {
            error!("Configuration error: {}", e);
            return ExitCode::FAILURE;
        }
    };

    debug!("Configuration:");
    debug!("  Input: {}", config.input.display());
    debug!("  Canvas: {}x{}", config.width, config.height);
    debug!("  Pattern width: {}", options.pattern_width);
    debug!(
        "  Pattern offset: {},{}",
        options.pattern_offset.x, options.pattern_offset.y
    );
    debug!("  Background: {}", options.background_color);

    let service = PatternService::new()
        .with_optimizer(SvgOptimizer::with_options(config.optimize_options()));

    let result = if config.no_optimize {
        service.render_document(&config.input, config.width, config.height, &options)
    } else {
        service.make_pattern(&config.input, config.width, config.height, &options)
    };

    let svg = match result {
        Ok(svg) => svg,
        Err(e) => {
            error!("Failed to generate pattern: {}", e);
            return ExitCode::FAILURE;
        }
    };

    if let Err(e) = write_output(&config, &svg) {
        error!("Failed to write output: {}", e);
        return ExitCode::FAILURE;
    }

    if let Some(ref output) = config.output {
        info!("Wrote {} bytes to {}", svg.len(), output.display());
    }

    ExitCode::SUCCESS
}

/// Write the document to `--output`, or stdout if none was given.
fn write_output(config: &Config, svg: &str) -> std::io::Result<()> {
    match config.output {
        Some(ref path) => std::fs::write(path, svg),
        None => {
            let mut stdout = std::io::stdout().lock();
            stdout.write_all(svg.as_bytes())?;
            stdout.write_all(b"\n")?;
            stdout.flush()
        }
    }
}

/// Initialize the tracing/logging subsystem.
///
/// Logs go to stderr so stdout carries only the document.
fn init_logging(verbose: bool) {
    let env_filter = if verbose {
        "svg_pattern=debug"
    } else {
        "svg_pattern=info"
    };

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| env_filter.into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}
