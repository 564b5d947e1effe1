use clap::Parser;
use cli::Cli;

mod cli;
mod config;
mod email;
mod forecast;
mod geo;
mod maps;
mod models;
mod report;
mod run;
mod schedule;
mod water;

#[tokio::main]
async fn main() {
    dotenvy::dotenv().ok();
    env_logger::init();

    let args = Cli::parse();

    if args.run_now {
        run::run_once().await.unwrap();
    } else {
        schedule::run_daily().await.unwrap();
    }
}
