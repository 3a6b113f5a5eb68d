use crate::reports;
use clap::Args;
use roadscore::api;
use roadscore::config::Config;
use roadscore::error::RsResult;
use roadscore::store::SegmentStore;
use std::fs::File;
use std::io::BufWriter;
use std::path::PathBuf;

#[derive(Args, Debug, Clone)]
pub struct BatchArgs {
    #[command(flatten)]
    pub config: Config,

    /// CSV with `lat,lng` header
    pub points: PathBuf,

    /// Write the full JSON results here instead of printing a table
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    #[arg(long, default_value_t = false)]
    pub json: bool,
}

pub fn run(args: &BatchArgs, config: &Config, store: &dyn SegmentStore) -> RsResult<()> {
    let queries = api::load_queries(File::open(&args.points)?)?;
    let entries = api::locate_batch(store, &queries, config.matching.radius_m)?;

    if let Some(path) = &args.output {
        let writer = BufWriter::new(File::create(path)?);
        serde_json::to_writer_pretty(writer, &entries)?;
        println!("Wrote {} results to {}", entries.len(), path.display());
    } else if args.json {
        println!("{}", serde_json::to_string_pretty(&entries)?);
    } else {
        reports::print_batch_table(&entries);
    }
    Ok(())
}
