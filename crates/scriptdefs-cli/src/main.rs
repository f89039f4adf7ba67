#![cfg_attr(coverage_nightly, feature(coverage_attribute))]

mod cli;
mod commands;
mod error;
mod logging;

use cli::{CheckParams, DefsParams, LibParams, LogParams, build_cli};

fn main() {
    let matches = build_cli().get_matches();

    let log = LogParams::from_matches(&matches);
    logging::init(log.verbose, log.color.should_colorize());

    match matches.subcommand() {
        Some(("defs", m)) => {
            let params = DefsParams::from_matches(m);
            commands::defs::run(params.into());
        }
        Some(("lib", m)) => {
            let params = LibParams::from_matches(m);
            commands::library::run(params.into());
        }
        Some(("check", m)) => {
            let params = CheckParams::from_matches(m);
            commands::check::run(params.into());
        }
        _ => unreachable!("clap should have caught this"),
    }
}
