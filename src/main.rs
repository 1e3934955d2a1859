#[macro_use]
extern crate log;

mod adapters;
mod cli;
mod config;
mod output;
mod seed;

fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    cli::run()
}
