// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

use anyhow::{bail, Context, Result};
use opdoc::config::consts::DEFAULT_LOG_FILTER;
use opdoc::config::{load_and_validate_config, DocConfig};
use opdoc::generator::DocGenerator;
use opdoc::report::install_panic_hook;
use opdoc::suites::SuiteFactory;
use std::env;
use std::fs::{self, File};
use std::io::{self, BufWriter, Write};
use tracing_subscriber::EnvFilter;

/// Logs go to stderr so stdout carries only markdown.
fn init_logging() {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_FILTER));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();
}

fn main() -> Result<()> {
    init_logging();
    install_panic_hook();

    let args: Vec<String> = env::args().collect();
    if args.len() > 2 {
        eprintln!("Usage: {} [config.yaml|config.toml]", args[0]);
        eprintln!("Example: {} configs/predicates.yaml", args[0]);
        bail!("expected at most one config file, got {}", args.len() - 1);
    }

    let config = match args.get(1) {
        Some(path) => load_and_validate_config(path)
            .with_context(|| format!("Failed to load config '{}'", path))?,
        None => DocConfig::default(),
    };

    let suites = SuiteFactory::create_suites(&config.suites)?;
    let generator = DocGenerator::from_config(&config);

    let summary = match &config.output {
        Some(path) => {
            if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
                fs::create_dir_all(parent)
                    .with_context(|| format!("Failed to create '{}'", parent.display()))?;
            }
            let file = File::create(path)
                .with_context(|| format!("Failed to create '{}'", path.display()))?;
            let mut sink = BufWriter::new(file);
            let summary = generator.generate(&suites, &mut sink)?;
            sink.flush()?;
            summary
        }
        None => {
            let stdout = io::stdout();
            let mut sink = stdout.lock();
            let summary = generator.generate(&suites, &mut sink)?;
            sink.flush()?;
            summary
        }
    };

    summary.log();
    Ok(())
}
