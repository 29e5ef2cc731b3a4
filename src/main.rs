mod args;
mod export;
mod output;
mod parsers;
mod records;
mod tests;

use std::{io, time::Instant};

use anyhow::{bail, Context};
use args::{Cli, ConfigFile};
use clap::Parser;
use export::export_stream_map;
use log::{debug, info};
use parsers::csv_parser::CsvParser;

fn main() -> anyhow::Result<()> {
    env_logger::init();

    let cli = Cli::parse();

    let config_file = match cli.config_file.as_deref() {
        Some(config_path) => confy::load_path::<ConfigFile>(config_path)
            .with_context(|| format!("loading configuration file {}", config_path))?,
        None => ConfigFile::default(),
    };
    let config = config_file.merge_cli(cli);

    if config.table.is_empty() {
        bail!("no attribute table given");
    }
    debug!("Running with {:?}", config);

    let start = Instant::now();
    let report = export_stream_map(
        &CsvParser,
        &config.table,
        &config.workspace,
        &config.fields,
        config.output,
        &mut io::stdout(),
    )
    .with_context(|| format!("exporting {} to {}", config.table, config.workspace))?;

    if report.replaced_existing {
        debug!("Replaced the previous stream map at {}", report.path);
    }
    info!(
        "Wrote {} segments to {} in {:.4} seconds",
        report.rows,
        report.path,
        start.elapsed().as_secs_f64()
    );

    Ok(())
}
