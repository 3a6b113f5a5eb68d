use clap::{ArgMatches, CommandFactory, FromArgMatches, Parser, Subcommand};
use roadscore::config::Config;
use roadscore::error::RsResult;
use roadscore::store::JsonFileStore;
use std::process;
use tracing::{debug, Level};

mod cmd;
mod reports;

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// JSON file holding the scored segments
    #[arg(global = true, short, long, default_value = "data/segments.json")]
    store: String,

    /// JSON file with ingest/matching parameters; CLI flags win over it
    #[arg(global = true, long)]
    config: Option<String>,

    #[arg(global = true, long, default_value_t = false)]
    debug: bool,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Score a survey CSV export and replace the stored segments
    Ingest(cmd::ingest::IngestArgs),
    /// Nearest stored segment to a point
    Locate(cmd::locate::LocateArgs),
    /// Nearest segment for every point in a lat,lng CSV file
    Batch(cmd::batch::BatchArgs),
    /// Quality statistics over the stored segments
    Summary(cmd::summary::SummaryArgs),
    /// List the stored segments
    Segments(cmd::segments::SegmentsArgs),
}

fn init_logging(debug: bool) {
    let level = if debug { Level::DEBUG } else { Level::INFO };
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_writer(std::io::stderr)
        .init();
}

/// Base config comes from `--config` (or defaults); values typed on the
/// command line are then layered on top.
fn resolve_config(path: Option<&str>, cli_config: &Config, sub_matches: &ArgMatches) -> RsResult<Config> {
    let mut config = match path {
        Some(p) => {
            debug!(path = p, "loading config file");
            Config::load_from_file(p)?
        }
        None => Config::default(),
    };
    config.merge_from_cli(cli_config, sub_matches);
    Ok(config)
}

fn run(cli: Cli, matches: &ArgMatches) -> RsResult<()> {
    let store = JsonFileStore::new(&cli.store);
    let sub_matches = match matches.subcommand() {
        Some((_, m)) => m,
        None => matches,
    };
    let config_path = cli.config.as_deref();

    match &cli.command {
        Commands::Ingest(args) => {
            let config = resolve_config(config_path, &args.config, sub_matches)?;
            cmd::ingest::run(args, &config, &store)
        }
        Commands::Locate(args) => {
            let config = resolve_config(config_path, &args.config, sub_matches)?;
            cmd::locate::run(args, &config, &store)
        }
        Commands::Batch(args) => {
            let config = resolve_config(config_path, &args.config, sub_matches)?;
            cmd::batch::run(args, &config, &store)
        }
        Commands::Summary(args) => cmd::summary::run(args, &store),
        Commands::Segments(args) => cmd::segments::run(args, &store),
    }
}

fn main() {
    // Raw matches tell user input apart from defaults.
    let matches = Cli::command().get_matches();
    let cli = Cli::from_arg_matches(&matches).unwrap_or_else(|e| e.exit());

    init_logging(cli.debug);

    if let Err(e) = run(cli, &matches) {
        eprintln!("Error: {}", e);
        process::exit(1);
    }
}
