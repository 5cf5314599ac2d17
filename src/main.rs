//! bnsearch - query the Australian Business Names register.
//!
//! One invocation runs a linear pipeline: parse arguments, load the
//! optional configuration, build the datastore SQL statement, issue a
//! single blocking HTTP GET, then render the records as a table or a
//! monthly registration-trend chart.

mod cli;
mod config;
mod constants;
mod error;
mod fetch;
mod query;
mod record;
mod render;

use clap::Parser;
use color_eyre::eyre::WrapErr;
use log::{debug, info};

use crate::cli::args::{Args, DisplayFormat};
use crate::config::Config;
use crate::error::Error;

fn main() -> color_eyre::Result<()> {
    color_eyre::install()?;
    env_logger::init();

    let args = Args::parse();
    run(&args).wrap_err("An error occurred")?;
    Ok(())
}

fn run(args: &Args) -> Result<(), Error> {
    let config = Config::load()?;
    let criteria = args.criteria();

    let sql = query::build(&criteria);
    debug!("datastore query: {sql}");

    let records = fetch::fetch_records(&config, &sql)?;
    info!("fetched {} record(s)", records.len());

    let output = match args.display_format {
        DisplayFormat::Table => render::table::render(&records),
        DisplayFormat::Graph => render::chart::render(&records)?,
    };
    print!("{output}");
    Ok(())
}
