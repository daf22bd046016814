#[macro_use] extern crate clap;

pub mod graphics;
pub mod interface;
pub mod runner;
pub mod scene;

use std::process;

fn main() {
    env_logger::Builder::from_env(
        env_logger::Env::default().default_filter_or("info")
    ).init();

    let config = interface::cli::parse();

    // Every failure class is fatal: no shaders, no rendering possible.
    if let Err(e) = runner::run(config) {
        log::error!("{}", e);
        process::exit(1);
    }
}
