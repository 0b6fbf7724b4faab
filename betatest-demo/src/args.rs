use betatest::HarnessOptions;
use clap::Parser;
use std::fmt::Display;

use crate::events::TraceEvent;

const SHORT_DESCRIPTION: &str = "Runs the betatest example suites";

const LONG_DESCRIPTION: &str = r"
Runs one of the bundled example suites through the betatest harness and exits with
status 0 if every test passed, 1 otherwise.

The basics suite contains one deliberately failing test to show what failure
diagnostics look like; exclude it with `--skip test_with_intentional_failure`.
";

/// Identifies which example suite to run.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, clap::ValueEnum)]
pub enum Suite {
    /// Integer, boolean, comparison, null, float and string equality assertions.
    #[default]
    Basics,
    /// Substring, prefix/suffix, emptiness and regular-expression assertions.
    Strings,
}

impl Display for Suite {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Basics => write!(f, "basics"),
            Self::Strings => write!(f, "strings"),
        }
    }
}

/// Parsed command-line arguments for the demo binary.
#[derive(Parser, Debug)]
#[clap(name = "betatest-demo", version, about = SHORT_DESCRIPTION, long_about = LONG_DESCRIPTION)]
pub struct CommandLineArgs {
    /// Example suite to run.
    #[clap(long = "suite", value_enum, default_value_t = Suite::Basics)]
    pub suite: Suite,

    /// Enable debug logging for classes of events.
    #[clap(long = "log-enable", value_name = "EVENT")]
    pub enabled_log_events: Vec<TraceEvent>,

    /// Harness options.
    #[clap(flatten)]
    pub harness: HarnessOptions,
}
