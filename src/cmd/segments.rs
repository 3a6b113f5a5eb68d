use crate::reports;
use clap::Args;
use roadscore::api;
use roadscore::error::RsResult;
use roadscore::store::SegmentStore;

#[derive(Args, Debug, Clone)]
pub struct SegmentsArgs {
    /// Only segments on this highway (case-insensitive)
    #[arg(long)]
    pub nh: Option<String>,

    #[arg(long, default_value_t = false)]
    pub json: bool,
}

pub fn run(args: &SegmentsArgs, store: &dyn SegmentStore) -> RsResult<()> {
    let snapshot = api::list_segments(store)?;
    let selected: Vec<_> = snapshot
        .iter()
        .filter(|seg| match (&args.nh, &seg.nh_number) {
            (Some(filter), Some(nh)) => nh.eq_ignore_ascii_case(filter),
            (Some(_), None) => false,
            (None, _) => true,
        })
        .cloned()
        .collect();

    if args.json {
        println!("{}", serde_json::to_string_pretty(&selected)?);
    } else {
        reports::print_segment_table(&selected);
    }
    Ok(())
}
