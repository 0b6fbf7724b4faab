//! Command-line driver for the betatest example suites.

mod args;
mod basics;
mod events;
mod strings;

use crate::args::{CommandLineArgs, Suite};
use betatest::Harness;
use clap::Parser;

/// Main entry point for the demo binary.
fn main() {
    //
    // Set up panic handler. A panic inside a test body is not recovered by the harness;
    // on release builds this reports it in human-readable form.
    //
    human_panic::setup_panic!(
        human_panic::Metadata::new(env!("CARGO_PKG_NAME"), env!("CARGO_PKG_VERSION"))
            .homepage(env!("CARGO_PKG_REPOSITORY"))
    );

    let args = CommandLineArgs::parse();

    events::init(&args.enabled_log_events);

    let exit_code = match run(&args) {
        Ok(code) => code,
        Err(err) => {
            tracing::error!("error: {err:#}");
            1
        }
    };

    std::process::exit(i32::from(exit_code));
}

/// Registers the selected suite, runs it, and returns the exit code.
fn run(args: &CommandLineArgs) -> anyhow::Result<u8> {
    let mut harness = Harness::new(args.harness.report);

    match args.suite {
        Suite::Basics => basics::register(&mut harness)?,
        Suite::Strings => strings::register(&mut harness)?,
    }

    if args.harness.list_tests_only {
        for name in harness
            .test_names()
            .filter(|name| args.harness.should_run_test(name))
        {
            println!("{name}: test");
        }
        return Ok(0);
    }

    println!("Running betatest {} suite\n", args.suite);

    let ran = harness.run_all(&args.harness);
    tracing::debug!(target: "tests", "ran {ran} test(s)");

    harness.print_summary()?;

    Ok(harness.exit_code())
}
