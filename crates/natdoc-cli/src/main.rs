//! natdoc - Lua declaration generator for native function catalogs

use std::{env, io};
use std::path::{Path, PathBuf};

use anyhow::{Result, bail};
use clap::Parser as _;
use natdoc_cli::{CatalogSource, LuaFileWriter, load_catalog};
use natdoc_core::config::DEFAULT_CONFIG_FILE;
use natdoc_core::{CatalogDriver, GeneratorConfig, MemoryWriter};
use tracing::{error, info, warn};
use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt as _, util::SubscriberInitExt as _};

mod cli;

use cli::{Cli, Commands};

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::registry()
        .with(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "natdoc=info,natdoc_cli=info,natdoc_core=info".into()),
        )
        .with(fmt::layer().with_writer(io::stderr).with_target(false))
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Generate {
            inputs,
            urls,
            output,
            config,
            dry_run,
        } => {
            handle_generate(inputs, urls, output, config.as_deref(), dry_run).await?;
        }
        Commands::Config { config, init } => {
            handle_config(config.as_deref(), init)?;
        }
    }

    Ok(())
}

async fn handle_generate(
    inputs: Vec<PathBuf>,
    urls: Vec<String>,
    output: Option<PathBuf>,
    config_path: Option<&Path>,
    dry_run: bool,
) -> Result<()> {
    let mut config = GeneratorConfig::load_or_default(config_path, &env::current_dir()?)?;
    if let Some(directory) = output {
        config.output_dir = directory;
    }

    let mut sources = inputs
        .into_iter()
        .map(CatalogSource::File)
        .chain(urls.into_iter().map(CatalogSource::Url))
        .collect::<Vec<_>>();
    if sources.is_empty() {
        sources = config
            .sources
            .iter()
            .map(|location| CatalogSource::parse(location))
            .collect();
    }

    let catalog = load_catalog(&sources).await?;
    let driver = CatalogDriver::new(&config);

    let report = if dry_run {
        let writer = MemoryWriter::new();
        let report = driver.run(&catalog, &writer).await?;
        for (namespace, text) in writer.written() {
            info!("{namespace}: {} bytes", text.len());
        }
        report
    } else {
        let writer = LuaFileWriter::new(&config.output_dir);
        let report = driver.run(&catalog, &writer).await?;
        info!("Declarations written to {}", writer.directory().display());
        report
    };

    for skipped in &report.skipped {
        warn!("Skipped {}/{}: {}", skipped.namespace, skipped.key, skipped.error);
    }
    for failure in &report.failed_namespaces {
        error!("{}: {}", failure.namespace, failure.error);
    }
    if !report.is_success() {
        bail!(
            "{} of {} namespaces failed",
            report.failed_namespaces.len(),
            catalog.len()
        );
    }

    Ok(())
}

fn handle_config(config_path: Option<&Path>, init: bool) -> Result<()> {
    let cwd = env::current_dir()?;
    let config = GeneratorConfig::load_or_default(config_path, &cwd)?;

    if init {
        let target = cwd.join(DEFAULT_CONFIG_FILE);
        if target.exists() {
            warn!("{} already exists, leaving it untouched", target.display());
        } else {
            config.save_to_file(&target)?;
            info!("Wrote {}", target.display());
        }
    }

    let rendered = config.to_toml()?;
    // Configuration is the command's output, printed to stdout by convention
    #[allow(clippy::print_stdout, reason = "Config command output")]
    {
        print!("{rendered}");
    }
    Ok(())
}
