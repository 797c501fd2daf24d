mod app;
mod bench;
mod solve;
mod utils;

use app::build_cli;
use bench::bench;
use solve::solve;
use std::error::Error;

fn run_subcommand(matches: clap::ArgMatches) -> Result<(), Box<dyn Error>> {
    Ok(match matches.subcommand() {
        ("solve", Some(sub_m)) => solve(sub_m)?,
        ("bench", Some(sub_m)) => bench(sub_m)?,
        (_, _) => unreachable!(),
    })
}

fn main() -> Result<(), Box<dyn Error>> {
    env_logger::init();

    let matches = build_cli().get_matches();

    run_subcommand(matches)?;

    Ok(())
}
