#[macro_use]
extern crate clap;
extern crate env_logger;
#[macro_use]
extern crate log;
extern crate num_cpus;
extern crate pimandel;
extern crate rand;

use clap::{App, Arg, ArgMatches};
use pimandel::cli::{validate_range, ALL_MODES};
use pimandel::{timer, Estimator, Strategy};

const NITERS: &str = "niters";
const THREADS: &str = "threads";
const MODE: &str = "mode";
const VERBOSE: &str = "verbose";
const MAX_THREADS: usize = 1024;

fn args<'a>() -> ArgMatches<'a> {
    App::new("pi")
        .version("0.1.0")
        .about("Estimates pi by Monte Carlo sampling, serially and in parallel")
        .arg(
            Arg::with_name(NITERS)
                .required(false)
                .index(1)
                .default_value("100000000")
                .validator(|s| {
                    validate_range(
                        &s,
                        1,
                        u64::max_value(),
                        "Could not parse sample count",
                        "Sample count must be at least 1",
                    )
                })
                .help("Number of random points to draw"),
        )
        .arg(
            Arg::with_name(THREADS)
                .required(false)
                .long(THREADS)
                .short("t")
                .takes_value(true)
                .validator(|s| {
                    validate_range(
                        &s,
                        1,
                        MAX_THREADS,
                        "Could not parse thread count",
                        &format!("Thread count must be between 1 and {}", MAX_THREADS),
                    )
                })
                .help("Number of workers for the parallel strategies [default: logical CPUs]"),
        )
        .arg(
            Arg::with_name(MODE)
                .required(false)
                .long(MODE)
                .short("m")
                .takes_value(true)
                .possible_values(&[ALL_MODES, "serial", "naive", "isolated"])
                .case_insensitive(true)
                .default_value(ALL_MODES)
                .help("Which strategy to run"),
        )
        .arg(
            Arg::with_name(VERBOSE)
                .long(VERBOSE)
                .short("v")
                .help("Also report the worker count and seeds"),
        )
        .get_matches()
}

fn main() {
    env_logger::init();
    let matches = args();
    let samples = value_t!(matches, NITERS, u64).unwrap_or_else(|e| e.exit());
    let threads = if matches.is_present(THREADS) {
        value_t!(matches, THREADS, usize).unwrap_or_else(|e| e.exit())
    } else {
        num_cpus::get()
    };

    let mode = matches.value_of(MODE).unwrap_or(ALL_MODES);
    let strategies = if mode.eq_ignore_ascii_case(ALL_MODES) {
        Strategy::ALL.to_vec()
    } else {
        vec![value_t!(matches, MODE, Strategy).unwrap_or_else(|e| e.exit())]
    };

    let shared_seed: u64 = rand::random();
    let base_seed: u64 = rand::random();
    debug!(
        "{} samples, {} threads, shared seed {}, base seed {}",
        samples, threads, shared_seed, base_seed
    );
    if matches.is_present(VERBOSE) {
        println!(
            "Workers: {} [shared seed {}, base seed {}]",
            threads, shared_seed, base_seed
        );
    }

    let estimator = Estimator::new(threads, shared_seed, base_seed);
    for strategy in &strategies {
        match timer::time(strategy.label(), || estimator.run(*strategy, samples)) {
            Ok(pi) => println!("pi ≈ {:.9}", pi),
            Err(e) => {
                eprintln!("Error: {}", e);
                std::process::exit(1);
            }
        }
    }
}
