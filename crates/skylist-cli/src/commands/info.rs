use std::path::PathBuf;

use anyhow::Result;
use clap::Args;
use skylist_core::catalog::CatalogReader;
use skylist_core::star::Star;

use super::config::load_config;

#[derive(Args)]
pub struct InfoArgs {
    /// Input catalog file (delimited text)
    pub file: PathBuf,

    /// Catalog layout config (TOML)
    #[arg(long)]
    pub config: Option<PathBuf>,
}

/// Show the catalog's header columns and how many rows parse cleanly
/// under the configured layout.
pub fn run(args: &InfoArgs) -> Result<()> {
    let config = load_config(args.config.as_deref())?;
    let reader = CatalogReader::open(&args.file, &config)?;

    println!("Catalog: {}", args.file.display());

    let headers = reader.headers().to_vec();
    if headers.is_empty() {
        println!("No header row found");
    } else {
        println!("\n{:>5}  Column", "Index");
        println!("{}", "-".repeat(30));
        for (index, name) in headers.iter().enumerate() {
            println!("{:>5}  {}", index, name);
        }
    }

    let mut rows: u64 = 0;
    let mut malformed: u64 = 0;
    for line in reader {
        let line = line?;
        rows += 1;
        if Star::parse(&line, &config.layout).is_err() {
            malformed += 1;
        }
    }

    println!("\nData rows:      {}", rows);
    println!("Parse failures: {}", malformed);

    Ok(())
}
