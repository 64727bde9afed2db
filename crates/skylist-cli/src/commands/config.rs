use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::Args;
use skylist_core::catalog::CatalogConfig;

#[derive(Args)]
pub struct ConfigArgs {
    /// Write config to a file instead of stdout
    #[arg(short, long)]
    pub output: Option<PathBuf>,
}

/// Print or save the default CatalogConfig as TOML.
pub fn run(args: &ConfigArgs) -> Result<()> {
    let config = CatalogConfig::default();
    let toml_str = toml::to_string_pretty(&config)?;

    if let Some(ref path) = args.output {
        std::fs::write(path, &toml_str)
            .with_context(|| format!("Failed to write config to {}", path.display()))?;
        println!("Default config saved to {}", path.display());
    } else {
        print!("{}", toml_str);
    }

    Ok(())
}

/// Load a CatalogConfig from a TOML file, or the default when no path
/// was given.
pub fn load_config(path: Option<&Path>) -> Result<CatalogConfig> {
    match path {
        Some(path) => {
            let text = std::fs::read_to_string(path)
                .with_context(|| format!("Failed to read config from {}", path.display()))?;
            toml::from_str(&text)
                .with_context(|| format!("Invalid config in {}", path.display()))
        }
        None => Ok(CatalogConfig::default()),
    }
}
