use crate::reports;
use clap::Args;
use roadscore::api;
use roadscore::config::Config;
use roadscore::error::RsResult;
use roadscore::store::SegmentStore;

#[derive(Args, Debug, Clone)]
pub struct LocateArgs {
    #[command(flatten)]
    pub config: Config,

    #[arg(long, allow_negative_numbers = true)]
    pub lat: f64,

    #[arg(long, allow_negative_numbers = true)]
    pub lng: f64,

    #[arg(long, default_value_t = false)]
    pub json: bool,
}

pub fn run(args: &LocateArgs, config: &Config, store: &dyn SegmentStore) -> RsResult<()> {
    let response = api::locate(store, args.lat, args.lng, config.matching.radius_m)?;

    if args.json {
        println!("{}", serde_json::to_string_pretty(&response)?);
    } else {
        reports::print_locate_report(&response);
    }
    Ok(())
}
