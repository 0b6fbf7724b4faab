use tracing_subscriber::{Layer, layer::SubscriberExt, util::SubscriberInitExt};

/// Type of event to trace.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq, clap::ValueEnum)]
pub enum TraceEvent {
    /// Traces test registration, start, and verdicts.
    #[clap(name = "tests")]
    Tests,
    /// Traces failing assertions.
    #[clap(name = "assertions")]
    Assertions,
}

impl TraceEvent {
    const fn target(self) -> &'static str {
        match self {
            Self::Tests => "tests",
            Self::Assertions => "assertions",
        }
    }
}

/// Installs a stderr logger. Everything at INFO and above is shown; the given event
/// classes are raised to DEBUG.
pub fn init(enabled_log_events: &[TraceEvent]) {
    let filter = tracing_subscriber::filter::Targets::new()
        .with_default(tracing_subscriber::filter::LevelFilter::INFO)
        .with_targets(
            enabled_log_events
                .iter()
                .map(|event| (event.target(), tracing::Level::DEBUG)),
        );

    let layer = tracing_subscriber::fmt::layer()
        .with_writer(std::io::stderr)
        .without_time()
        .with_target(false)
        .with_filter(filter);

    if tracing_subscriber::registry()
        .with(layer)
        .try_init()
        .is_err()
    {
        // Something went wrong; proceed on anyway but complain audibly.
        eprintln!("warning: failed to initialize tracing.");
    }
}
