use crate::reports;
use clap::Args;
use roadscore::api;
use roadscore::config::Config;
use roadscore::error::RsResult;
use roadscore::store::SegmentStore;
use std::path::PathBuf;
use tracing::info;

#[derive(Args, Debug, Clone)]
pub struct IngestArgs {
    #[command(flatten)]
    pub config: Config,

    /// Survey CSV export
    pub csv: PathBuf,

    /// Print the summary as JSON instead of a table
    #[arg(long, default_value_t = false)]
    pub json: bool,
}

pub fn run(args: &IngestArgs, config: &Config, store: &dyn SegmentStore) -> RsResult<()> {
    info!(path = %args.csv.display(), "ingesting survey");
    let summary = api::ingest_csv(store, &args.csv, &config.ingest)?;

    if args.json {
        println!("{}", serde_json::to_string_pretty(&summary)?);
    } else {
        reports::print_batch_summary(&summary);
    }
    Ok(())
}
