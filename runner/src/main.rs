mod smoke;

#[cfg(test)]
#[path = "tests/runner_tests.rs"]
mod runner_tests;

use anyhow::{Context, Result};
use clap::{crate_name, crate_version, App, AppSettings, Arg, ArgMatches};
use env_logger::Env;
use harness::{load_input, Harness};
use log::{info, warn};
use std::io::Write;
use std::process;

fn main() -> Result<()> {
    // Set up logging
    env_logger::Builder::from_env(Env::default().default_filter_or("info"))
        .format_timestamp_millis()
        .init();

    let matches = app().get_matches();
    let options = Options::from_matches(&matches)?;
    info!("Input file: {}", options.input);

    let input = load_input(&options.input)?;
    let mut harness = Harness::stdout();
    let passed = execute(&mut harness, &input, &options)?;

    let code = exit_code(passed, options.strict);
    if code != 0 {
        warn!("At least one part failed its test");
        process::exit(code);
    }
    Ok(())
}

fn app() -> App<'static, 'static> {
    App::new(crate_name!())
        .version(crate_version!())
        .about("Times and checks two-part puzzle solvers against an input file.")
        .args_from_usage("--input=<FILE> 'The puzzle input file'")
        .args_from_usage("--test 'Compare answers against expected values instead of timing them'")
        .arg(Arg::from_usage("--expect-one=[INT] 'Expected answer for part one (omit for no result)'").requires("test"))
        .arg(Arg::from_usage("--expect-two=[INT] 'Expected answer for part two (omit for no result)'").requires("test"))
        .args_from_usage("--strict 'Exit with a non-zero status when a test fails'")
        .setting(AppSettings::ArgRequiredElseHelp)
}

// Failed tests only change the exit status under --strict.
fn exit_code(passed: bool, strict: bool) -> i32 {
    if !passed && strict {
        return 1;
    }
    0
}

struct Options {
    input: String,
    test: bool,
    expect_one: Option<u64>,
    expect_two: Option<u64>,
    strict: bool,
}

impl Options {
    fn from_matches(matches: &ArgMatches) -> Result<Self> {
        let input = matches
            .value_of("input")
            .context("An input file is required")?
            .to_string();
        let expect_one = matches
            .value_of("expect-one")
            .map(|x| x.parse::<u64>())
            .transpose()
            .context("Expected answer for part one must be a non-negative integer")?;
        let expect_two = matches
            .value_of("expect-two")
            .map(|x| x.parse::<u64>())
            .transpose()
            .context("Expected answer for part two must be a non-negative integer")?;

        Ok(Options {
            input,
            test: matches.is_present("test"),
            expect_one,
            expect_two,
            strict: matches.is_present("strict"),
        })
    }
}

/// Returns whether every part passed. Timed runs always pass.
fn execute<W: Write>(harness: &mut Harness<W>, input: &str, options: &Options) -> Result<bool> {
    if !options.test {
        harness.run_all(input, smoke::non_blank_lines, smoke::sum_of_integers)?;
        return Ok(true);
    }

    let (one, two) = harness.run_test_all(
        input,
        smoke::non_blank_lines,
        smoke::sum_of_integers,
        options.expect_one,
        options.expect_two,
    )?;
    Ok(one.passed() && two.passed())
}
