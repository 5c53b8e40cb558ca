use std::process::exit;

use anyhow::Result;
use clap::ArgMatches;
use human_panic::setup_panic;
use log::error;

use name_recode::prelude::*;

fn main() {
    setup_panic!();

    let matches = get_matches();

    if let Err(e) = setup_logging(&matches) {
        eprintln!("Failed to initialise logging: {e:#}");
        exit(1);
    }

    if let Err(e) = process(&matches) {
        error!("{e}");
        for cause in e.chain().skip(1) {
            error!("  caused by: {cause}");
        }
        exit(1);
    }
}

fn setup_logging(matches: &ArgMatches) -> Result<()> {
    let log_file = get_log_file(matches)?;
    init_logger(get_verbosity(matches), &log_file)
}

fn process(matches: &ArgMatches) -> Result<()> {
    let options = get_processing_options(matches)?;
    run(options)?;
    Ok(())
}
