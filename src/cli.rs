use clap::Parser;

#[derive(Debug, Parser)]
#[command(about = "Balloon landing-site forecast notifier.")]
pub struct Cli {
    /// Run one forecast pass immediately and exit, instead of waiting for
    /// the daily trigger time.
    #[arg(env = "LANDFALL_RUN_NOW", long)]
    pub run_now: bool,
}
