use anyhow::{Context, Result};
use relink::{Config, LinkRewriter};
use std::fs;
use std::io::{self, Write};
use tracing_subscriber::EnvFilter;

/// Log filter used when neither `--verbose` nor `RUST_LOG` is set.
const DEFAULT_LOG_FILTER: &str = "warn";

fn init_tracing(verbose: bool) {
    // Logs go to stderr; stdout carries rewritten documents
    let filter = if verbose {
        EnvFilter::new("info")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_FILTER))
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();
}

fn main() -> Result<()> {
    let config = Config::parse();
    init_tracing(config.verbose);
    config.validate().context("Invalid configuration")?;

    let mut stdout = io::stdout().lock();

    for input in &config.inputs {
        let source_path = config.source_path_for(input)?;
        let content = fs::read_to_string(input)
            .with_context(|| format!("Failed to read {}", input.display()))?;

        let rewriter = LinkRewriter::new(&source_path);
        if rewriter.dialect().is_none() {
            tracing::warn!(
                path = %input.display(),
                "Unrecognized dialect, only HTML src attributes will be rewritten"
            );
        }

        let rewritten = rewriter.rewrite(&content);

        if !config.in_place {
            stdout
                .write_all(rewritten.as_bytes())
                .context("Failed to write to stdout")?;
            continue;
        }

        if rewritten == content {
            tracing::info!(path = %input.display(), "No links changed");
            continue;
        }

        fs::write(input, &rewritten)
            .with_context(|| format!("Failed to write {}", input.display()))?;
        tracing::info!(
            path = %input.display(),
            level = rewriter.level(),
            "Rewrote links"
        );
    }

    stdout.flush().context("Failed to flush stdout")?;

    Ok(())
}
