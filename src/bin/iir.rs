//! Command line front end for running filter payloads and generating test
//! signals.
//!
//! ```text
//! iir filter --input payload.json --output result.json
//! iir generate --output payload.json --sample_rate 1000 --duration 5
//! ```
use clap::{value_t, App, AppSettings, Arg, ArgMatches, SubCommand};
use log::{debug, error, info, Level};
use std::error::Error;
use std::fs::File;
use std::io::{BufReader, BufWriter};
use std::process::exit;

use iir_rs::io::payload::{self, FilterPayload};
use iir_rs::util::math;

fn log_level(verbosity: u64) -> Level {
    match verbosity {
        0 => Level::Warn,
        1 => Level::Info,
        2 => Level::Debug,
        _ => Level::Trace,
    }
}

fn run_filter(matches: &ArgMatches) -> Result<(), Box<dyn Error>> {
    let input_fname = matches.value_of("input").unwrap_or_default();
    let output_fname = matches.value_of("output").unwrap_or_default();

    debug!("Reading payload from {}", input_fname);
    let reader = BufReader::new(File::open(input_fname)?);
    let payload = payload::read_payload(reader)?;
    let result = payload.run()?;

    debug!("Writing result to {}", output_fname);
    let writer = BufWriter::new(File::create(output_fname)?);
    payload::write_result(writer, &result)?;
    info!("Wrote {} output samples to {}", result.output.len(), output_fname);
    Ok(())
}

fn run_generate(matches: &ArgMatches) -> Result<(), Box<dyn Error>> {
    let output_fname = matches.value_of("output").unwrap_or_default();
    let samp_rate = value_t!(matches, "sample_rate", f64)
        .unwrap_or_else(|e| e.exit());
    let duration =
        value_t!(matches, "duration", f64).unwrap_or_else(|e| e.exit());
    let start_freq =
        value_t!(matches, "start_freq", f64).unwrap_or_else(|e| e.exit());
    let end_freq =
        value_t!(matches, "end_freq", f64).unwrap_or_else(|e| e.exit());

    let signal = math::chirp(samp_rate, duration, start_freq, end_freq)?;
    info!(
        "Generated {} Hz to {} Hz chirp, {} samples at {} Hz",
        start_freq,
        end_freq,
        signal.len(),
        samp_rate
    );
    let writer = BufWriter::new(File::create(output_fname)?);
    payload::write_payload(writer, &FilterPayload::lowpass(signal))?;
    info!("Wrote payload to {}", output_fname);
    Ok(())
}

fn main() {
    let path_arg = |name: &'static str, short: &'static str| {
        Arg::with_name(name)
            .short(short)
            .long(name)
            .value_name("PATH")
            .required(true)
            .takes_value(true)
    };

    let matches = App::new("iir")
        .version("0.1")
        .about("Runs IIR filter payloads and generates test signals")
        .setting(AppSettings::SubcommandRequiredElseHelp)
        .arg(
            Arg::with_name("verbose")
                .short("v")
                .multiple(true)
                .global(true)
                .help("Increase logging verbosity, may be repeated"),
        )
        .subcommand(
            SubCommand::with_name("filter")
                .about("Filter the signal of a payload with its coefficients")
                .arg(path_arg("input", "i").help("Payload to read"))
                .arg(path_arg("output", "o").help("Where to write the result")),
        )
        .subcommand(
            SubCommand::with_name("generate")
                .about("Write a payload holding a chirp and a low pass filter")
                .arg(path_arg("output", "o").help("Where to write the payload"))
                .arg(
                    Arg::with_name("sample_rate")
                        .short("s")
                        .long("sample_rate")
                        .value_name("HZ")
                        .default_value("1000")
                        .help("Sample rate of the generated signal"),
                )
                .arg(
                    Arg::with_name("duration")
                        .short("d")
                        .long("duration")
                        .value_name("SECONDS")
                        .default_value("5")
                        .help("Length of the generated signal"),
                )
                .arg(
                    Arg::with_name("start_freq")
                        .long("start_freq")
                        .value_name("HZ")
                        .default_value("1")
                        .help("Frequency at the start of the sweep"),
                )
                .arg(
                    Arg::with_name("end_freq")
                        .long("end_freq")
                        .value_name("HZ")
                        .default_value("100")
                        .help("Frequency at the end of the sweep"),
                ),
        )
        .get_matches();

    // -v may be given before or after the subcommand.
    let verbosity = matches.subcommand().1.map_or(0, |sub| {
        sub.occurrences_of("verbose")
    });
    let level = log_level(verbosity.max(matches.occurrences_of("verbose")));
    if simple_logger::init_with_level(level).is_err() {
        eprintln!("Unable to install logger");
    }

    let res = match matches.subcommand() {
        ("filter", Some(sub)) => run_filter(sub),
        ("generate", Some(sub)) => run_generate(sub),
        _ => unreachable!(),
    };
    if let Err(e) = res {
        error!("{}", e);
        exit(1);
    }
}
