// std imports
use std::{
    io::{BufWriter, stdout},
    process,
};

// third-party imports
use clap::Parser;
use env_logger::{self as logger};

// local imports
use namefilter::{App, cli, config, error::*};

const NAMEFILTER_DEBUG_LOG: &str = "NAMEFILTER_DEBUG_LOG";
const NAMEFILTER_DEBUG_LOG_STYLE: &str = "NAMEFILTER_DEBUG_LOG_STYLE";

// ---

fn bootstrap() {
    if std::env::var(NAMEFILTER_DEBUG_LOG).is_ok() {
        logger::Builder::from_env(
            logger::Env::new()
                .filter(NAMEFILTER_DEBUG_LOG)
                .write_style(NAMEFILTER_DEBUG_LOG_STYLE),
        )
        .format_timestamp_micros()
        .init();
        log::debug!("logging initialized");
    } else {
        logger::Builder::new()
            .filter_level(log::LevelFilter::Error)
            .format_timestamp_millis()
            .init()
    }
}

fn run() -> Result<()> {
    bootstrap();

    let opt = cli::Opt::parse_from(wild::args());
    let settings = config::at(&opt.config).load()?;
    log::debug!("settings: {:?}", settings);

    let app = App::new(opt.app_options(&settings));
    let mut output = BufWriter::new(stdout().lock());

    app.run(&opt.inputs(), &mut output)
}

fn main() {
    if let Err(err) = run() {
        if err.is_broken_pipe() {
            return;
        }
        eprintln!("error: {}", err);
        process::exit(1);
    }
}
