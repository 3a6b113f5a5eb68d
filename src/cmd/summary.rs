use crate::reports;
use clap::Args;
use roadscore::api;
use roadscore::error::RsResult;
use roadscore::store::SegmentStore;

#[derive(Args, Debug, Clone)]
pub struct SummaryArgs {
    #[arg(long, default_value_t = false)]
    pub json: bool,
}

pub fn run(args: &SummaryArgs, store: &dyn SegmentStore) -> RsResult<()> {
    let summary = api::summarize(store)?;
    if args.json {
        println!("{}", serde_json::to_string_pretty(&summary)?);
    } else {
        reports::print_batch_summary(&summary);
    }
    Ok(())
}
