#[macro_use]
extern crate clap;
extern crate env_logger;
#[macro_use]
extern crate log;
extern crate num_cpus;
extern crate pimandel;

use clap::{App, Arg, ArgMatches};
use pimandel::cli::{validate_parse, validate_range, ALL_MODES};
use pimandel::{ppm, timer, ComplexPlane, PlaneMapper, Renderer};

const OUTPUT: &str = "output";
const RESOLUTION: &str = "resolution";
const BOX: &str = "box";
const ITERATIONS: &str = "iterations";
const THREADS: &str = "threads";
const MODE: &str = "mode";
const VERBOSE: &str = "verbose";
const MAX_THREADS: usize = 1024;

// The default window of the complex plane.
const X0: f64 = -2.5;
const Y0: f64 = -1.5;
const X1: f64 = 1.5;
const Y1: f64 = 1.5;

fn args<'a>() -> ArgMatches<'a> {
    App::new("mandel")
        .version("0.1.0")
        .about("Renders the Mandelbrot set serially and in parallel")
        .arg(
            Arg::with_name(OUTPUT)
                .required(false)
                .index(1)
                .default_value("image.ppm")
                .help("Output file"),
        )
        .arg(
            Arg::with_name(RESOLUTION)
                .required(false)
                .long(RESOLUTION)
                .short("r")
                .takes_value(true)
                .default_value("500")
                .validator(|s| {
                    validate_range(
                        &s,
                        1,
                        10_000,
                        "Could not parse resolution",
                        "Resolution must be between 1 and 10000 pixels per unit",
                    )
                })
                .help("Pixels per unit length of the complex plane"),
        )
        .arg(
            Arg::with_name(BOX)
                .required(false)
                .long(BOX)
                .short("b")
                .takes_value(true)
                .number_of_values(4)
                .allow_hyphen_values(true)
                .value_names(&["x0", "y0", "x1", "y1"])
                .validator(|s| validate_parse::<f64>(&s, "Could not parse window bound"))
                .help("Window of the complex plane [default: -2.5 -1.5 1.5 1.5]"),
        )
        .arg(
            Arg::with_name(ITERATIONS)
                .required(false)
                .long(ITERATIONS)
                .short("i")
                .takes_value(true)
                .default_value("1000")
                .validator(|s| {
                    validate_range(
                        &s,
                        1,
                        1_000_000,
                        "Could not parse iteration count",
                        "Iteration count must be between 1 and 1000000",
                    )
                })
                .help("Maximum number of iterations per pixel"),
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
                .help("Number of threads for the parallel render [default: logical CPUs]"),
        )
        .arg(
            Arg::with_name(MODE)
                .required(false)
                .long(MODE)
                .short("m")
                .takes_value(true)
                .possible_values(&[ALL_MODES, "serial", "threaded"])
                .case_insensitive(true)
                .default_value(ALL_MODES)
                .help("Which renderer to run; the image comes from the last one"),
        )
        .arg(
            Arg::with_name(VERBOSE)
                .long(VERBOSE)
                .short("v")
                .help("Also report how long writing the image took"),
        )
        .get_matches()
}

struct Config<'a> {
    output: &'a str,
    resolution: usize,
    window: ComplexPlane,
    max_iterations: usize,
    threads: usize,
    renderers: Vec<Renderer>,
    verbose: bool,
}

fn run(config: &Config) -> pimandel::Result<()> {
    let window = config.window;
    let width = (window.width() * config.resolution as f64) as usize;
    let height = (window.height() * config.resolution as f64) as usize;
    let plane = PlaneMapper::new(width, height, window)?;
    debug!(
        "{}x{} pixels, {} iterations, {} threads",
        width, height, config.max_iterations, config.threads
    );

    let mut field = None;
    for renderer in &config.renderers {
        let rendered = timer::time(renderer.label(), || {
            renderer.render(&plane, config.max_iterations, config.threads)
        })?;
        if let Some(previous) = field.take() {
            debug!("{} agrees with the previous field: {}", renderer.label(), previous == rendered);
        }
        field = Some(rendered);
    }

    match field {
        Some(field) => {
            let save = || ppm::save(config.output, &ppm::encode(&field, config.max_iterations));
            if config.verbose {
                timer::time("I/O", save)
            } else {
                let written = timer::measure("I/O", save);
                debug!("{}", written);
                written.value
            }
        }
        None => Ok(()),
    }
}

fn main() {
    env_logger::init();
    let matches = args();

    let window = if matches.is_present(BOX) {
        let bounds = values_t!(matches, BOX, f64).unwrap_or_else(|e| e.exit());
        ComplexPlane::from_bounds(bounds[0], bounds[1], bounds[2], bounds[3])
    } else {
        ComplexPlane::from_bounds(X0, Y0, X1, Y1)
    };

    let mode = matches.value_of(MODE).unwrap_or(ALL_MODES);
    let renderers = if mode.eq_ignore_ascii_case(ALL_MODES) {
        Renderer::ALL.to_vec()
    } else {
        vec![value_t!(matches, MODE, Renderer).unwrap_or_else(|e| e.exit())]
    };

    let config = Config {
        output: matches.value_of(OUTPUT).unwrap_or("image.ppm"),
        resolution: value_t!(matches, RESOLUTION, usize).unwrap_or_else(|e| e.exit()),
        window,
        max_iterations: value_t!(matches, ITERATIONS, usize).unwrap_or_else(|e| e.exit()),
        threads: if matches.is_present(THREADS) {
            value_t!(matches, THREADS, usize).unwrap_or_else(|e| e.exit())
        } else {
            num_cpus::get()
        },
        renderers,
        verbose: matches.is_present(VERBOSE),
    };

    if let Err(e) = run(&config) {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
