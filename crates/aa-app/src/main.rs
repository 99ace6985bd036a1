use std::io::Write;

use aa_core::config::RenderConfig;
use aa_core::error::CoreError;
use anyhow::Result;
use clap::Parser;

pub mod cli;
pub mod render;

fn main() -> Result<()> {
    // 1. Parser CLI
    let cli = cli::Cli::parse();

    // 2. Initialiser le logging
    env_logger::Builder::new()
        .filter_level(cli.log_level.parse().unwrap_or(log::LevelFilter::Warn))
        .init();

    // 3. Charger la config puis appliquer les overrides CLI
    let mut config = resolve_config(&cli)?;
    cli.apply_overrides(&mut config);
    let width = cli::resolve_width(config.width);

    // 4. Rendu
    match render::render(&cli.image, &config, width) {
        Ok(text) => {
            let mut stdout = std::io::stdout().lock();
            writeln!(stdout, "{text}")?;
            Ok(())
        }
        Err(e) => match e.downcast_ref::<CoreError>() {
            Some(err @ (CoreError::FileNotFound { .. } | CoreError::UnsupportedFormat { .. })) => {
                eprintln!("Error: {err}");
                std::process::exit(1);
            }
            _ => Err(e),
        },
    }
}

/// Load `--config` if present, otherwise fall back to defaults.
fn resolve_config(cli: &cli::Cli) -> Result<RenderConfig> {
    if cli.config.exists() {
        aa_core::config::load_config(&cli.config)
    } else {
        log::warn!(
            "Config introuvable : {}. Utilisation des défauts.",
            cli.config.display()
        );
        Ok(RenderConfig::default())
    }
}
