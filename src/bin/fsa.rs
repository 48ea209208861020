use std::{
    fs::File,
    io::{BufRead, BufReader, Write},
};

use fsa_validator::{check, shell};

use tracing::{debug, info, trace};
use tracing_subscriber::{filter, prelude::*};

use clap::{Arg, ArgMatches, Command};

fn cli() -> clap::Command {
    Command::new("fsa")
        .about("Validates a finite-state automaton description and reports whether it is complete")
        .arg(
            Arg::new("input")
                .value_name("INPUT")
                .default_value("fsa.txt")
                .help("file to read the five line description from, `-` for stdin"),
        )
        .arg(
            Arg::new("output")
                .short('o')
                .long("output")
                .value_name("OUTPUT")
                .default_value("result.txt")
                .help("file to write the result to, `-` for stdout"),
        )
        .arg(
            Arg::new("verbosity")
                .short('v')
                .long("verbosity")
                .num_args(0..=1)
                .require_equals(true)
                .value_parser(["info", "debug", "trace"])
                .default_missing_value("info"),
        )
}

fn setup_logging(matches: &ArgMatches) {
    let level = match matches
        .try_get_one::<String>("verbosity")
        .ok()
        .flatten()
        .map(|m| m.as_str())
    {
        Some("trace") => filter::LevelFilter::TRACE,
        Some("debug") => filter::LevelFilter::DEBUG,
        Some("info") => filter::LevelFilter::INFO,
        _ => filter::LevelFilter::INFO,
    };

    let stderr_log = tracing_subscriber::fmt::layer()
        .pretty()
        .with_writer(std::io::stderr);

    tracing_subscriber::registry()
        .with(stderr_log.with_filter(level))
        .init();

    trace!("setup {level} logging");
}

fn open_input(path: &str) -> std::io::Result<Box<dyn BufRead>> {
    Ok(match path {
        "-" => Box::new(std::io::stdin().lock()),
        path => Box::new(BufReader::new(File::open(path)?)),
    })
}

fn open_output(path: &str) -> std::io::Result<Box<dyn Write>> {
    Ok(match path {
        "-" => Box::new(std::io::stdout().lock()),
        path => Box::new(File::create(path)?),
    })
}

pub fn main() -> std::io::Result<()> {
    let matches = cli().get_matches();

    setup_logging(&matches);

    let input = matches
        .get_one::<String>("input")
        .map(String::as_str)
        .unwrap_or("fsa.txt");
    let output = matches
        .get_one::<String>("output")
        .map(String::as_str)
        .unwrap_or("result.txt");

    debug!("reading automaton from {input}");
    let lines = shell::read_lines(open_input(input)?)?;

    let start = std::time::Instant::now();
    let outcome = check(lines);
    info!("validation took {}µs", start.elapsed().as_micros());

    let mut out = open_output(output)?;
    out.write_all(shell::render(&outcome).as_bytes())?;
    out.flush()?;
    debug!("wrote result to {output}");
    Ok(())
}
